use log::warn;
use yew::prelude::*;

use crate::controller::ControllerHandle;
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub controller: ControllerHandle,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let go_to = |section: Section| {
        let controller = props.controller.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = controller.navigate_to(section.id()) {
                warn!("Navigation failed: {}", e);
            }
        })
    };

    html! {
        <div class="hero">
            <h1>{"Interfaces that feel alive"}</h1>
            <p class="hero-subtitle">
                {"We design and build fast, friendly websites with just the right amount of motion."}
            </p>
            <button class="btn" onclick={go_to(Section::Services)}>{"Our services"}</button>
            <button class="btn secondary" onclick={go_to(Section::Pricing)}>{"Get a quote"}</button>
        </div>
    }
}
