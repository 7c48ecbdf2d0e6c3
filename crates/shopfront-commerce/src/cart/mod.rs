//! Shopping cart module.
//!
//! [`CartState`] holds the lines and derived totals, [`CartAction`] is the
//! closed set of mutations and [`CartStore`] ties state, persistence and
//! notifications together.

mod action;
mod notify;
mod persist;
mod state;
mod store;

pub use action::{CartAction, CartChange};
pub use notify::{Notification, NotificationSink, NullSink, RecordingSink, Severity};
pub use persist::{cart_slot, CartPersistence, DEFAULT_CART_NAME};
pub use state::{CartLine, CartState};
pub use store::CartStore;
