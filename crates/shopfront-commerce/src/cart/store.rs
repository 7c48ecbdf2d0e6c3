//! The cart store: single owner of the cart state.

use crate::cart::{
    CartAction, CartChange, CartPersistence, CartState, Notification, NotificationSink,
};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Owns the cart, applies actions one at a time, saves after each one and
/// tells the sink what happened.
///
/// Operations never fail from the caller's point of view. A failed save is
/// logged and reported as an error notification; the in-memory cart keeps
/// the new state either way.
pub struct CartStore<P: CartPersistence> {
    state: CartState,
    persistence: P,
    sink: Box<dyn NotificationSink>,
    persisted: bool,
}

impl<P: CartPersistence> CartStore<P> {
    /// Restore the saved cart from `persistence`, or start empty.
    ///
    /// A saved cart that can't be read is treated as absent and a warning is
    /// sent to `sink`.
    pub fn open(persistence: P, sink: impl NotificationSink + 'static) -> Self {
        let sink: Box<dyn NotificationSink> = Box::new(sink);
        let (state, persisted) = match persistence.load() {
            Ok(Some(state)) => {
                tracing::debug!(
                    lines = state.unique_item_count(),
                    total_quantity = state.total_quantity(),
                    "cart restored"
                );
                (state, true)
            }
            Ok(None) => (CartState::new(), true),
            Err(e) => {
                tracing::warn!(error = %e, "failed to restore cart, starting empty");
                sink.notify(Notification::restore_failed());
                (CartState::new(), false)
            }
        };

        Self {
            state,
            persistence,
            sink,
            persisted,
        }
    }

    /// Add one unit of `product`.
    pub fn add_item(&mut self, product: Product) -> CartChange {
        self.dispatch(CartAction::AddItem(product))
    }

    /// Remove the line for `id`; no-op when absent.
    pub fn remove_item(&mut self, id: ProductId) -> CartChange {
        self.dispatch(CartAction::RemoveItem(id))
    }

    /// Set the quantity for `id`; zero or less removes the line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> CartChange {
        self.dispatch(CartAction::UpdateQuantity { id, quantity })
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) -> CartChange {
        self.dispatch(CartAction::ClearCart)
    }

    /// Apply `action`, notify, then save.
    pub fn dispatch(&mut self, action: CartAction) -> CartChange {
        let kind = action.kind();
        let change = self.state.apply(action);
        tracing::debug!(
            action = kind,
            changed = change.is_change(),
            total_quantity = self.state.total_quantity(),
            total_price = %self.state.total_price(),
            "cart action applied"
        );

        if let Some(notification) = Notification::for_change(&change) {
            self.sink.notify(notification);
        }
        self.persist();
        change
    }

    /// Decode and apply a raw action object.
    ///
    /// A malformed action leaves the cart untouched, is not saved and is
    /// returned as [`CommerceError::MalformedAction`].
    pub fn dispatch_json(&mut self, raw: &str) -> Result<CartChange, CommerceError> {
        match CartAction::from_json(raw) {
            Ok(action) => Ok(self.dispatch(action)),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed cart action");
                Err(e)
            }
        }
    }

    fn persist(&mut self) {
        match self.persistence.save(&self.state) {
            Ok(()) => self.persisted = true,
            Err(e) => {
                tracing::error!(error = %e, "failed to save cart");
                self.sink.notify(Notification::save_failed());
                self.persisted = false;
            }
        }
    }

    /// An owned copy of the current cart.
    pub fn snapshot(&self) -> CartState {
        self.state.clone()
    }

    /// The current cart.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Whether the last save (or the initial load) succeeded.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }
}

impl<P: CartPersistence + std::fmt::Debug> std::fmt::Debug for CartStore<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("persistence", &self.persistence)
            .field("persisted", &self.persisted)
            .finish_non_exhaustive()
    }
}
