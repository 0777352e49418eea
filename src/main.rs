use std::rc::Rc;

use log::info;
use web_sys::window;
use yew::prelude::*;

mod config;
mod controller;
mod currency;
mod dom;
mod error;
mod pricing;
mod scheduler;
mod state;
mod styles;
mod components {
    pub mod header;
    pub mod modal;
    pub mod notification;
}
mod pages {
    pub mod animations;
    pub mod contact;
    pub mod home;
    pub mod pricing;
    pub mod services;
}

use components::{header::Nav, modal::Modal, notification::NotificationStack};
use controller::{Controller, ControllerHandle};
use pages::{
    animations::Animations,
    contact::Contact,
    home::Home,
    pricing::Pricing,
    services::Services,
};
use scheduler::TimeoutScheduler;
use state::{Section, SiteState};
use styles::GlobalStyles;

fn render_section(section: Section, state: &SiteState, controller: &ControllerHandle) -> Html {
    let content = match section {
        Section::Home => html! { <Home controller={controller.clone()} /> },
        Section::Services => html! { <Services controller={controller.clone()} /> },
        Section::Animations => html! {
            <Animations
                box_animation={state.box_animation}
                card={state.card}
                loader={state.loader}
                controller={controller.clone()}
            />
        },
        Section::Pricing => html! { <Pricing /> },
        Section::Contact => html! { <Contact controller={controller.clone()} /> },
    };

    html! {
        <section
            key={section.id()}
            id={section.id()}
            class={classes!("section", state.is_active(section).then(|| "active"))}
        >
            { content }
        </section>
    }
}

#[function_component]
fn App() -> Html {
    let state = use_reducer(SiteState::default);

    let controller = {
        let dispatcher = state.dispatcher();
        let handle = use_memo(
            move |_| {
                ControllerHandle(Rc::new(Controller::new(TimeoutScheduler, move |action| {
                    dispatcher.dispatch(action)
                })))
            },
            (),
        );
        (*handle).clone()
    };

    // Runs once after the first render, when the sections exist
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                let fragment = window().and_then(|w| w.location().hash().ok());
                controller.bootstrap(fragment.as_deref());
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <GlobalStyles />
            <Nav active={state.active_section} controller={controller.clone()} />
            <main>
                { for Section::ALL.into_iter().map(|section| render_section(section, &state, &controller)) }
            </main>
            <Modal state={state.modal} controller={controller.clone()} />
            <NotificationStack notifications={state.notifications.clone()} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
