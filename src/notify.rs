use std::rc::Rc;

use log::warn;

/// Messages surfaced to the visitor after a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    MissingFields,
    Sent,
    Failed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::MissingFields => "Please fill in all required fields.",
            Notice::Sent => "Thank you for your message! We will get back to you soon.",
            Notice::Failed => "Failed to send message. Please try again later.",
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Blocking browser alert, dismissed by the visitor.
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: Notice) {
        let Some(window) = web_sys::window() else {
            warn!("No window to show notice: {}", notice.message());
            return;
        };
        if window.alert_with_message(notice.message()).is_err() {
            warn!("Failed to show notice: {}", notice.message());
        }
    }
}

#[derive(Clone)]
pub struct Notifications(pub Rc<dyn Notifier>);

impl Notifications {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self(Rc::new(notifier))
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(AlertNotifier)
    }
}

impl PartialEq for Notifications {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
