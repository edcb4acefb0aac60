//! User-visible notification sink.

use log::warn;

/// Blocking notification surface (an alert box in a graphical shell).
pub trait UserNotifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Notifier that only records alerts in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl UserNotifier for LogNotifier {
    fn alert(&self, message: &str) {
        warn!("event=user_alert module=ui status=shown message={message}");
    }
}
