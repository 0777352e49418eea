use yew::prelude::*;

use crate::controller::ControllerHandle;
use crate::state::{BoxAnimation, CardFace, LoaderState};

const LOADER_BARS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct AnimationsProps {
    pub box_animation: BoxAnimation,
    pub card: CardFace,
    pub loader: LoaderState,
    pub controller: ControllerHandle,
}

#[function_component(Animations)]
pub fn animations(props: &AnimationsProps) -> Html {
    let controller = &props.controller;

    let on_animate = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.run_box_animation())
    };
    let on_pulse = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.pulse_box())
    };
    let on_flip = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.flip_card_and_notify())
    };
    let on_start = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.start_loader_and_notify())
    };
    let on_stop = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.stop_loader_and_notify())
    };
    let on_show_modal = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.open_modal_and_notify())
    };

    let flipped = (props.card == CardFace::Back).then(|| "flipped");
    let bar_style = format!("animation-play-state: {};", props.loader.play_state());

    html! {
        <>
            <h2>{"Animations"}</h2>

            <div class="demo">
                <h3>{"Box"}</h3>
                // New run, new node: the browser restarts the animation from scratch.
                // Keep the box the only child so the key is honoured.
                <div class="box-stage">
                    <div
                        key={props.box_animation.run()}
                        id="animationBox"
                        class="animation-box"
                        style={format!("animation: {};", props.box_animation.css())}
                    />
                </div>
                <button id="animateBoxBtn" class="btn" onclick={on_animate}>{"Animate box"}</button>
                <button id="pulseBoxBtn" class="btn secondary" onclick={on_pulse}>{"Pulse box"}</button>
            </div>

            <div class="demo">
                <h3>{"Card"}</h3>
                <div id="flipCard" class={classes!("flip-card", flipped)}>
                    <div class="flip-card-inner">
                        <div class="flip-card-front">{"Front"}</div>
                        <div class="flip-card-back">{"Back"}</div>
                    </div>
                </div>
                <button id="flipCardBtn" class="btn" onclick={on_flip}>{"Flip card"}</button>
            </div>

            <div class="demo">
                <h3>{"Loader"}</h3>
                <div id="loader" class="loader">
                    { for (0..LOADER_BARS).map(|_| html! {
                        <div class="loader-bar" style={bar_style.clone()} />
                    }) }
                </div>
                <button id="startLoaderBtn" class="btn" onclick={on_start}>{"Start"}</button>
                <button id="stopLoaderBtn" class="btn secondary" onclick={on_stop}>{"Stop"}</button>
            </div>

            <div class="demo">
                <h3>{"Modal"}</h3>
                <button id="showModalBtn" class="btn" onclick={on_show_modal}>{"Show modal"}</button>
            </div>
        </>
    }
}
