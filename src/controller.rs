use std::cell::Cell;
use std::ops::Deref;
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config;
use crate::error::ShowcaseError;
use crate::pricing::{calculate_product_price, OrderQuote};
use crate::scheduler::{Scheduler, TimeoutScheduler};
use crate::state::{Action, BoxVariant, Notification, NotificationPhase, Section, Severity};

/// Where a click on the modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    Content,
}

impl ModalClick {
    /// A click only counts as a backdrop click when its target is the
    /// backdrop node itself; anything inside the content, or a click we
    /// can't place, is content.
    pub fn classify<N>(target: Option<&N>, backdrop: Option<&N>, is_same: impl Fn(&N, &N) -> bool) -> Self {
        match (target, backdrop) {
            (Some(target), Some(backdrop)) if is_same(target, backdrop) => ModalClick::Backdrop,
            _ => ModalClick::Content,
        }
    }
}

/// Turns user intents into state actions and the delayed follow-ups they need.
pub struct Controller<S: Scheduler> {
    scheduler: S,
    dispatch: Rc<dyn Fn(Action)>,
    next_notification: Cell<u64>,
    next_box_run: Cell<u64>,
}

impl<S: Scheduler> Controller<S> {
    pub fn new(scheduler: S, dispatch: impl Fn(Action) + 'static) -> Self {
        Self {
            scheduler,
            dispatch: Rc::new(dispatch),
            next_notification: Cell::new(1),
            next_box_run: Cell::new(1),
        }
    }

    pub fn navigate_to(&self, id: &str) -> Result<Section, ShowcaseError> {
        let section = Section::from_id(id)?;
        debug!("Navigating to section {}", section.id());
        (self.dispatch)(Action::Navigate(section));
        Ok(section)
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_notification.get();
        self.next_notification.set(id + 1);
        let message = message.into();
        debug!("Notification {} ({}): {}", id, severity.class(), message);

        (self.dispatch)(Action::Notify(Notification {
            id,
            message,
            severity,
            phase: NotificationPhase::Visible,
        }));

        let dispatch = self.dispatch.clone();
        let scheduler = self.scheduler.clone();
        self.scheduler.schedule(
            config::NOTIFICATION_DISPLAY_MS,
            Box::new(move || {
                dispatch(Action::BeginExit(id));
                scheduler.schedule(
                    config::NOTIFICATION_EXIT_MS,
                    Box::new(move || dispatch(Action::Dismiss(id))),
                );
            }),
        );
        id
    }

    pub fn animate_box(&self, duration_secs: u32, variant: BoxVariant) {
        let run = self.next_box_run.get();
        self.next_box_run.set(run + 1);
        (self.dispatch)(Action::AnimateBox { run, variant, duration_secs });

        let dispatch = self.dispatch.clone();
        self.scheduler.schedule(
            duration_secs.saturating_mul(1000),
            Box::new(move || dispatch(Action::ResetBox { run })),
        );
    }

    pub fn flip_card(&self) {
        (self.dispatch)(Action::FlipCard);
    }

    pub fn start_loader(&self) {
        (self.dispatch)(Action::StartLoader);
    }

    pub fn stop_loader(&self) {
        (self.dispatch)(Action::StopLoader);
    }

    pub fn show_modal(&self) {
        (self.dispatch)(Action::ShowModal);
    }

    pub fn hide_modal(&self) {
        (self.dispatch)(Action::HideModal);
    }

    pub fn modal_clicked(&self, target: ModalClick) {
        if target == ModalClick::Backdrop {
            self.hide_modal();
        }
    }

    // Wired interactions: each pairs the action with a toast describing it

    pub fn select_service(&self, service: &str) {
        self.notify(format!("You selected {} service", service), Severity::Info);
    }

    pub fn run_box_animation(&self) {
        self.animate_box(config::BOX_ANIMATION_SECS, BoxVariant::Complex);
        self.notify("Box animation started!", Severity::Success);
    }

    pub fn pulse_box(&self) {
        self.animate_box(config::BOX_PULSE_SECS, BoxVariant::Pulse);
        self.notify("Box pulsing!", Severity::Info);
    }

    pub fn flip_card_and_notify(&self) {
        self.flip_card();
        self.notify("Card flipped!", Severity::Info);
    }

    pub fn start_loader_and_notify(&self) {
        self.start_loader();
        self.notify("Loader started", Severity::Info);
    }

    pub fn stop_loader_and_notify(&self) {
        self.stop_loader();
        self.notify("Loader stopped", Severity::Info);
    }

    pub fn open_modal_and_notify(&self) {
        self.show_modal();
        self.notify("Modal opened", Severity::Info);
    }

    pub fn demonstrate_calculations(&self) -> (OrderQuote, OrderQuote) {
        let (quantity, price) = config::SMALL_ORDER;
        let small = calculate_product_price(quantity, price);
        let (quantity, price) = config::LARGE_ORDER;
        let large = calculate_product_price(quantity, price);

        info!("Small order calculation: {}", serde_json::to_string(&small).unwrap_or_default());
        info!("Large order calculation: {}", serde_json::to_string(&large).unwrap_or_default());

        self.notify(format!("Large order total: {}", large.total), Severity::Success);
        (small, large)
    }

    /// Startup: pick the initial section (URL fragment if it names one), run
    /// the calculator demo. Element bindings live in the rendered components.
    pub fn bootstrap(&self, fragment: Option<&str>) -> Section {
        let requested = fragment
            .map(|f| f.trim_start_matches('#'))
            .filter(|f| !f.is_empty());

        let section = match requested.map(|id| self.navigate_to(id)) {
            Some(Ok(section)) => section,
            Some(Err(e)) => {
                warn!("Ignoring fragment: {}", e);
                self.navigate_default()
            }
            None => self.navigate_default(),
        };

        self.demonstrate_calculations();
        info!("Page initialised on section {}", section.id());
        section
    }

    fn navigate_default(&self) -> Section {
        match self.navigate_to(config::DEFAULT_SECTION) {
            Ok(section) => section,
            Err(e) => {
                warn!("Default section unavailable: {}", e);
                (self.dispatch)(Action::Navigate(Section::default()));
                Section::default()
            }
        }
    }
}

pub type SiteController = Controller<TimeoutScheduler>;

/// Shared handle passed down as a prop; equal when it's the same controller.
#[derive(Clone)]
pub struct ControllerHandle(pub Rc<SiteController>);

impl PartialEq for ControllerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ControllerHandle {
    type Target = SiteController;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
