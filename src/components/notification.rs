use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config::{NOTIFICATION_STACK_OFFSET_PX, NOTIFICATION_TOP_PX};
use crate::state::Notification;

#[derive(Properties, PartialEq)]
pub struct NotificationStackProps {
    pub notifications: Vec<Notification>,
}

fn toast_style(notification: &Notification, position: usize) -> String {
    let top = NOTIFICATION_TOP_PX + position as u32 * NOTIFICATION_STACK_OFFSET_PX;
    format!(
        "top: {}px; background: {}; animation: {};",
        top,
        notification.severity.background(),
        notification.animation()
    )
}

/// Live toasts, newest at the bottom. Each one owns a slot in the stack so
/// several can be on screen without covering each other.
#[styled_component(NotificationStack)]
pub fn notification_stack(props: &NotificationStackProps) -> Html {
    let toast = css!(
        r#"
        position: fixed;
        right: 20px;
        padding: 15px;
        border-radius: 5px;
        color: white;
        z-index: 1001;
        max-width: 320px;
        box-shadow: 0 8px 16px rgba(0, 0, 0, 0.3);
    "#
    );

    html! {
        <>
            { for props.notifications.iter().enumerate().map(|(position, notification)| html! {
                <div
                    key={notification.id}
                    class={classes!("notification", notification.severity.class(), toast.clone())}
                    style={toast_style(notification, position)}
                >
                    { &notification.message }
                </div>
            }) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{NotificationPhase, Severity};

    #[test]
    fn later_toasts_sit_lower_and_keep_their_colour() {
        let note = Notification {
            id: 7,
            message: "Loader started".to_string(),
            severity: Severity::Error,
            phase: NotificationPhase::Visible,
        };
        assert_eq!(
            toast_style(&note, 0),
            "top: 20px; background: #F44336; animation: slideIn 0.3s ease-out;"
        );
        assert!(toast_style(&note, 2).starts_with("top: 148px;"));
    }
}
