use std::fmt;

use tracing::error;

/// User-facing notifications emitted by cart operations.
///
/// Exactly one notification is emitted per failed operation; the
/// stock-exceeded case is distinguished, every other failure collapses
/// into the operation's generic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    QuantityOutOfStock,
    AddProductFailed,
    RemoveProductFailed,
    UpdateAmountFailed,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Notification::QuantityOutOfStock => "requested quantity exceeds stock",
            Notification::AddProductFailed => "failed to add product",
            Notification::RemoveProductFailed => "failed to remove product",
            Notification::UpdateAmountFailed => "failed to update amount",
        };
        write!(f, "{}", message)
    }
}

/// Fire-and-forget side channel for user-facing notifications.
///
/// The storefront UI plugs its toast presenter in here; the default
/// implementation just logs.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default notifier that emits notifications as structured log events
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        error!(notification = ?notification, "{}", notification);
    }
}
