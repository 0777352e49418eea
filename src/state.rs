use std::rc::Rc;

use yew::Reducible;

use crate::error::ShowcaseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Section {
    Home,
    #[default]
    Services,
    Animations,
    Pricing,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Animations,
        Section::Pricing,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Animations => "animations",
            Section::Pricing => "pricing",
            Section::Contact => "contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Services => "Services",
            Section::Animations => "Animations",
            Section::Pricing => "Pricing",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, ShowcaseError> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == id)
            .ok_or_else(|| ShowcaseError::SectionNotFound(id.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Anything that isn't `success` or `error` is shown as info.
    #[cfg(test)]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#4CAF50",
            Severity::Error => "#F44336",
            Severity::Info => "#2196F3",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Exiting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: NotificationPhase,
}

impl Notification {
    pub fn animation(&self) -> &'static str {
        match self.phase {
            NotificationPhase::Visible => "slideIn 0.3s ease-out",
            NotificationPhase::Exiting => "slideIn 0.3s ease-in reverse",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxVariant {
    Complex,
    Pulse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BoxAnimation {
    #[default]
    Idle,
    Animating {
        run: u64,
        variant: BoxVariant,
        duration_secs: u32,
    },
}

impl BoxAnimation {
    pub fn css(&self) -> String {
        match self {
            BoxAnimation::Idle => "none".to_string(),
            BoxAnimation::Animating { variant: BoxVariant::Complex, duration_secs, .. } => {
                format!("boxAnimation {}s ease-in-out", duration_secs)
            }
            BoxAnimation::Animating { variant: BoxVariant::Pulse, duration_secs, .. } => {
                format!("pulse {}s infinite", duration_secs)
            }
        }
    }

    /// Changes on every trigger so the element gets rebuilt and the CSS
    /// animation starts over.
    pub fn run(&self) -> u64 {
        match self {
            BoxAnimation::Idle => 0,
            BoxAnimation::Animating { run, .. } => *run,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoaderState {
    Running,
    #[default]
    Paused,
}

impl LoaderState {
    pub fn play_state(self) -> &'static str {
        match self {
            LoaderState::Running => "running",
            LoaderState::Paused => "paused",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug)]
pub enum Action {
    Navigate(Section),
    AnimateBox {
        run: u64,
        variant: BoxVariant,
        duration_secs: u32,
    },
    ResetBox { run: u64 },
    FlipCard,
    StartLoader,
    StopLoader,
    ShowModal,
    HideModal,
    Notify(Notification),
    BeginExit(u64),
    Dismiss(u64),
}

/// Every bit of UI state on the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteState {
    pub active_section: Section,
    pub box_animation: BoxAnimation,
    pub card: CardFace,
    pub loader: LoaderState,
    pub modal: ModalState,
    pub notifications: Vec<Notification>,
}

impl SiteState {
    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }
}

impl Reducible for SiteState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        // Returning the same Rc tells yew nothing changed
        match action {
            Action::Navigate(section) if self.active_section == section => self,
            Action::StartLoader if self.loader == LoaderState::Running => self,
            Action::StopLoader if self.loader == LoaderState::Paused => self,
            Action::ResetBox { run } if self.box_animation.run() != run => self,
            Action::BeginExit(id) | Action::Dismiss(id)
                if !self.notifications.iter().any(|n| n.id == id) =>
            {
                self
            }
            action => {
                let mut next = (*self).clone();
                match action {
                    Action::Navigate(section) => next.active_section = section,
                    Action::AnimateBox { run, variant, duration_secs } => {
                        next.box_animation = BoxAnimation::Animating { run, variant, duration_secs };
                    }
                    Action::ResetBox { .. } => next.box_animation = BoxAnimation::Idle,
                    Action::FlipCard => {
                        next.card = match next.card {
                            CardFace::Front => CardFace::Back,
                            CardFace::Back => CardFace::Front,
                        };
                    }
                    Action::StartLoader => next.loader = LoaderState::Running,
                    Action::StopLoader => next.loader = LoaderState::Paused,
                    Action::ShowModal => next.modal = ModalState::Visible,
                    Action::HideModal => next.modal = ModalState::Hidden,
                    Action::Notify(notification) => next.notifications.push(notification),
                    Action::BeginExit(id) => {
                        for n in next.notifications.iter_mut().filter(|n| n.id == id) {
                            n.phase = NotificationPhase::Exiting;
                        }
                    }
                    Action::Dismiss(id) => next.notifications.retain(|n| n.id != id),
                }
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<SiteState>, actions: impl IntoIterator<Item = Action>) -> Rc<SiteState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn note(id: u64) -> Notification {
        Notification {
            id,
            message: format!("note {}", id),
            severity: Severity::Info,
            phase: NotificationPhase::Visible,
        }
    }

    #[test]
    fn section_ids_resolve() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Ok(section));
        }
        assert_eq!(
            Section::from_id("blog"),
            Err(ShowcaseError::SectionNotFound("blog".to_string()))
        );
    }

    #[test]
    fn exactly_one_section_is_active() {
        let state = Rc::new(SiteState::default());
        for target in Section::ALL {
            let state = apply(state.clone(), [Action::Navigate(target)]);
            let active: Vec<_> = Section::ALL.into_iter().filter(|s| state.is_active(*s)).collect();
            assert_eq!(active, vec![target]);
        }
    }

    #[test]
    fn loader_transitions_are_idempotent() {
        let paused = Rc::new(SiteState::default());
        assert_eq!(paused.loader, LoaderState::Paused);

        let stopped = paused.clone().reduce(Action::StopLoader);
        assert!(Rc::ptr_eq(&paused, &stopped));

        let running = paused.reduce(Action::StartLoader);
        assert_eq!(running.loader, LoaderState::Running);
        let again = running.clone().reduce(Action::StartLoader);
        assert!(Rc::ptr_eq(&running, &again));
        assert_eq!(again.loader.play_state(), "running");

        let paused = again.reduce(Action::StopLoader);
        assert_eq!(paused.loader.play_state(), "paused");
    }

    #[test]
    fn card_flip_toggles() {
        let state = apply(Rc::new(SiteState::default()), [Action::FlipCard]);
        assert_eq!(state.card, CardFace::Back);
        let state = apply(state, [Action::FlipCard]);
        assert_eq!(state.card, CardFace::Front);
    }

    #[test]
    fn modal_show_and_hide_are_unconditional() {
        let state = apply(
            Rc::new(SiteState::default()),
            [Action::ShowModal, Action::ShowModal],
        );
        assert_eq!(state.modal, ModalState::Visible);
        let state = apply(state, [Action::HideModal, Action::HideModal]);
        assert_eq!(state.modal, ModalState::Hidden);
    }

    #[test]
    fn stale_box_reset_is_ignored() {
        let state = apply(
            Rc::new(SiteState::default()),
            [
                Action::AnimateBox { run: 1, variant: BoxVariant::Complex, duration_secs: 3 },
                Action::AnimateBox { run: 2, variant: BoxVariant::Pulse, duration_secs: 2 },
                Action::ResetBox { run: 1 },
            ],
        );
        assert_eq!(state.box_animation.css(), "pulse 2s infinite");

        let state = apply(state, [Action::ResetBox { run: 2 }]);
        assert_eq!(state.box_animation, BoxAnimation::Idle);
        assert_eq!(state.box_animation.css(), "none");
    }

    #[test]
    fn notifications_exit_then_disappear() {
        let state = apply(
            Rc::new(SiteState::default()),
            [Action::Notify(note(1)), Action::Notify(note(2)), Action::BeginExit(1)],
        );
        assert_eq!(state.notifications[0].phase, NotificationPhase::Exiting);
        assert_eq!(state.notifications[0].animation(), "slideIn 0.3s ease-in reverse");
        assert_eq!(state.notifications[1].phase, NotificationPhase::Visible);

        let state = apply(state, [Action::Dismiss(1)]);
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].id, 2);

        // Already gone: nothing to do
        let again = state.clone().reduce(Action::Dismiss(1));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn unknown_severity_tags_are_info() {
        assert_eq!(Severity::from_tag("success"), Severity::Success);
        assert_eq!(Severity::from_tag("error"), Severity::Error);
        assert_eq!(Severity::from_tag("warning"), Severity::Info);
        assert_eq!(Severity::from_tag("warning").background(), "#2196F3");
    }
}
