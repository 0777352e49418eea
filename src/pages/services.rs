use yew::prelude::*;

use crate::controller::ControllerHandle;

// (data-service name, blurb)
const SERVICES: &[(&str, &str)] = &[
    ("Web Design", "Clean layouts that put your product first."),
    ("Development", "Snappy single-page sites that load in a blink."),
    ("Branding", "Logos, palettes and a voice that sticks."),
    ("Hosting", "Set-and-forget deployments with nightly backups."),
];

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub controller: ControllerHandle,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <>
            <h2>{"Services"}</h2>
            <div class="service-grid">
                { for SERVICES.iter().map(|(name, blurb)| {
                    let onclick = {
                        let controller = props.controller.clone();
                        Callback::from(move |_: MouseEvent| controller.select_service(name))
                    };
                    html! {
                        <div class="service-card" data-service={*name} {onclick}>
                            <h3>{ *name }</h3>
                            <p>{ *blurb }</p>
                        </div>
                    }
                }) }
            </div>
        </>
    }
}
