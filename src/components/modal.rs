use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::controller::{ControllerHandle, ModalClick};
use crate::state::ModalState;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub state: ModalState,
    pub controller: ControllerHandle,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    // Listeners are delegated, so compare against the backdrop node itself
    // rather than trusting current_target.
    let on_backdrop_click = {
        let controller = props.controller.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let backdrop = backdrop_ref.get();
            let hit = ModalClick::classify(target.as_ref(), backdrop.as_ref(), |target: &Node, backdrop: &Node| {
                backdrop.is_same_node(Some(target))
            });
            controller.modal_clicked(hit);
        })
    };

    let on_close = {
        let controller = props.controller.clone();
        Callback::from(move |_: MouseEvent| controller.hide_modal())
    };

    let display = match props.state {
        ModalState::Visible => "display: flex;",
        ModalState::Hidden => "display: none;",
    };

    html! {
        <div id="modal" class="modal" style={display} ref={backdrop_ref} onclick={on_backdrop_click}>
            <div class="modal-content">
                <span id="closeModal" class="modal-close" onclick={on_close}>{"×"}</span>
                <h3>{"Hello there!"}</h3>
                <p>{"This dialog sits on top of the page. Click outside it or the × to close."}</p>
            </div>
        </div>
    }
}
