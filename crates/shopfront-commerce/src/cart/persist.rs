//! Durable storage port for the cart.

use shopfront_cache::{cache_key, Cache, Slot};

use crate::cart::CartState;
use crate::error::CommerceError;

/// Name of the cart slot when none is configured.
pub const DEFAULT_CART_NAME: &str = "cart";

/// Where the cart survives between sessions.
///
/// `save` is called with the full state after every operation; `load` once
/// when the store is opened.
pub trait CartPersistence {
    /// The last saved cart, or `None` if nothing has been saved.
    fn load(&self) -> Result<Option<CartState>, CommerceError>;

    /// Replace the saved cart.
    fn save(&self, state: &CartState) -> Result<(), CommerceError>;
}

impl CartPersistence for Slot<CartState> {
    fn load(&self) -> Result<Option<CartState>, CommerceError> {
        Ok(Slot::load(self)?)
    }

    fn save(&self, state: &CartState) -> Result<(), CommerceError> {
        Slot::save(self, state)?;
        Ok(())
    }
}

/// The cart slot named `name`, stored under `shopfront:<name>`.
pub fn cart_slot(cache: Cache, name: &str) -> Slot<CartState> {
    Slot::new(cache, cache_key!("shopfront", name))
}
