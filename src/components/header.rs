use log::warn;
use yew::prelude::*;

use crate::controller::ControllerHandle;
use crate::state::Section;

#[derive(Clone, Copy, PartialEq)]
enum LogoPulse {
    Resting,
    Hovered,
}

impl LogoPulse {
    fn animation(self) -> &'static str {
        match self {
            LogoPulse::Resting => "animation: pulse 2s infinite;",
            LogoPulse::Hovered => "animation: pulse 1s;",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Section,
    pub controller: ControllerHandle,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { active, controller } = props;
    let logo_pulse = use_state(|| LogoPulse::Resting);

    let on_logo_enter = {
        let logo_pulse = logo_pulse.clone();
        Callback::from(move |_: MouseEvent| logo_pulse.set(LogoPulse::Hovered))
    };
    let on_logo_leave = {
        let logo_pulse = logo_pulse.clone();
        Callback::from(move |_: MouseEvent| logo_pulse.set(LogoPulse::Resting))
    };

    let link = |section: Section| {
        let controller = controller.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Err(e) = controller.navigate_to(section.id()) {
                warn!("Navigation failed: {}", e);
            }
        });
        html! {
            <a
                href={format!("#{}", section.id())}
                class={classes!("nav-link", (*active == section).then(|| "active"))}
                data-section={section.id()}
                {onclick}
            >
                { section.title() }
            </a>
        }
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        background: rgba(16, 20, 24, 0.95);
                        border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                        z-index: 900;
                    }
                    .nav-content {
                        max-width: 1000px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2rem;
                    }
                    .logo { font-weight: bold; font-size: 1.4rem; color: #7EB2FF; display: inline-block; }
                    .nav-link { color: #ccc; text-decoration: none; margin-left: 1.5rem; }
                    .nav-link.active, .nav-link:hover { color: white; }
                "#}
            </style>
            <div class="nav-content">
                <span
                    class="logo"
                    style={logo_pulse.animation()}
                    onmouseenter={on_logo_enter}
                    onmouseleave={on_logo_leave}
                >
                    {"showcase"}
                </span>
                <div class="nav-right">
                    { for Section::ALL.into_iter().map(link) }
                </div>
            </div>
        </nav>
    }
}
