//! Human-readable cart notifications.
//!
//! The store emits one [`Notification`] per visible change; the presentation
//! layer subscribes through a [`NotificationSink`] and decides how to show
//! it. Notifications are advisory: nothing in the cart depends on them being
//! delivered.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::cart::CartChange;

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// A message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    /// The message announcing `change`; `None` when nothing changed.
    pub fn for_change(change: &CartChange) -> Option<Self> {
        if !change.is_change() {
            return None;
        }
        match change {
            CartChange::Added { title, .. } => {
                Some(Self::success(format!("{title} added to cart!")))
            }
            CartChange::QuantityUpdated { .. } => Some(Self::info("Quantity updated for item.")),
            CartChange::Removed { .. } => Some(Self::warning("Item removed from cart.")),
            CartChange::Cleared { .. } => Some(Self::warning("Cart cleared!")),
            CartChange::Unchanged => None,
        }
    }

    pub(crate) fn save_failed() -> Self {
        Self::error("Failed to save cart.")
    }

    pub(crate) fn restore_failed() -> Self {
        Self::warning("Saved cart could not be restored; starting with an empty cart.")
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Receiver of cart notifications.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: Notification) {}
}

/// Channel subscription: the presentation layer keeps the receiver.
impl NotificationSink for mpsc::Sender<Notification> {
    fn notify(&self, notification: Notification) {
        if self.send(notification).is_err() {
            tracing::debug!("notification receiver dropped");
        }
    }
}

/// Keeps every notification in memory, in emission order.
///
/// Clones share the same buffer, so a test can hand one clone to the store
/// and read from the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    seen: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.borrow().clone()
    }

    /// Drain the buffer.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.seen.borrow_mut())
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.seen.borrow_mut().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_messages_for_changes() {
        let added = Notification::for_change(&CartChange::Added {
            id: ProductId::new(1),
            title: "Red Shirt".to_string(),
            quantity: 1,
        })
        .unwrap();
        assert_eq!(added, Notification::success("Red Shirt added to cart!"));

        let removed = Notification::for_change(&CartChange::Removed {
            id: ProductId::new(1),
        })
        .unwrap();
        assert_eq!(removed.severity, Severity::Warning);

        let updated = Notification::for_change(&CartChange::QuantityUpdated {
            id: ProductId::new(1),
            quantity: 3,
        })
        .unwrap();
        assert_eq!(updated.severity, Severity::Info);

        assert_eq!(
            Notification::for_change(&CartChange::Cleared { lines: 2 }),
            Some(Notification::warning("Cart cleared!"))
        );
        assert_eq!(Notification::for_change(&CartChange::Cleared { lines: 0 }), None);
        assert_eq!(Notification::for_change(&CartChange::Unchanged), None);
    }

    #[test]
    fn test_channel_sink() {
        let (tx, rx) = mpsc::channel();
        tx.notify(Notification::info("hello"));
        assert_eq!(rx.try_recv().unwrap(), Notification::info("hello"));
    }

    #[test]
    fn test_channel_sink_ignores_dropped_receiver() {
        let (tx, rx) = mpsc::channel::<Notification>();
        drop(rx);
        tx.notify(Notification::info("nobody listening"));
    }

    #[test]
    fn test_recording_sink_shares_buffer() {
        let sink = RecordingSink::new();
        let handle = sink.clone();
        sink.notify(Notification::error("boom"));

        assert_eq!(handle.notifications().len(), 1);
        assert_eq!(handle.take(), vec![Notification::error("boom")]);
        assert!(handle.notifications().is_empty());
    }

    #[test]
    fn test_severity_wire_names() {
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            r#""warning""#
        );
        assert_eq!(Notification::info("x").to_string(), "[info] x");
    }
}
