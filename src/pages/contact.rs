use yew::prelude::*;

use crate::controller::ControllerHandle;
use crate::dom::{toggle_element_visibility, WebDocument};
use crate::state::Severity;

const DETAILS_ID: &str = "company-details";

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub controller: ControllerHandle,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let details_visible = use_state(|| false);

    let on_toggle = {
        let details_visible = details_visible.clone();
        let controller = props.controller.clone();
        Callback::from(move |_: MouseEvent| {
            let show = !*details_visible;
            let toggled = match WebDocument::current() {
                Ok(document) => toggle_element_visibility(&document, DETAILS_ID, show),
                Err(e) => {
                    log::warn!("{}", e);
                    false
                }
            };
            if toggled {
                details_visible.set(show);
            } else {
                controller.notify("Those details aren't available right now", Severity::Error);
            }
        })
    };

    html! {
        <>
            <h2>{"Contact"}</h2>
            <p>{"hello@showcase.example · +254 700 000 000"}</p>
            <p>{"Kenyatta Avenue, Nairobi"}</p>
            <button class="btn secondary" onclick={on_toggle}>
                { if *details_visible { "Less about us" } else { "More about us" } }
            </button>
            // Shown and hidden through inline style, not re-rendering
            <div id={DETAILS_ID} style="display: none;">
                <p>{"A small studio of designers and engineers, shipping sites since 2015."}</p>
                <p>{"Office hours are 9:00 to 17:00 EAT, Monday to Friday."}</p>
            </div>
        </>
    }
}
