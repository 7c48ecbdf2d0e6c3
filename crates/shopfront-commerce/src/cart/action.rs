//! Cart actions and their outcomes.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One cart mutation.
///
/// Serializes as the storefront's tagged action objects, e.g.
/// `{"type":"UPDATE_QUANTITY","payload":{"id":3,"quantity":2}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Add one unit of a product.
    AddItem(Product),
    /// Drop a product's line.
    RemoveItem(ProductId),
    /// Set a line's quantity; zero or less removes it.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Empty the cart.
    ClearCart,
}

impl CartAction {
    /// Decode a raw action object.
    ///
    /// Unknown action types and malformed payloads (such as a fractional
    /// quantity) are [`CommerceError::MalformedAction`].
    pub fn from_json(raw: &str) -> Result<Self, CommerceError> {
        serde_json::from_str(raw).map_err(|e| CommerceError::MalformedAction(e.to_string()))
    }

    /// The action's tag, as it appears on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "ADD_ITEM",
            CartAction::RemoveItem(_) => "REMOVE_ITEM",
            CartAction::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            CartAction::ClearCart => "CLEAR_CART",
        }
    }
}

/// What applying an action did to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A unit was added; `quantity` is the line's new quantity.
    Added {
        id: ProductId,
        title: String,
        quantity: i64,
    },
    /// A line's quantity was replaced.
    QuantityUpdated { id: ProductId, quantity: i64 },
    /// A line was deleted.
    Removed { id: ProductId },
    /// The cart was reset; `lines` is how many lines it held before.
    Cleared { lines: usize },
    /// Nothing matched; state is as before.
    Unchanged,
}

impl CartChange {
    /// Whether the cart's contents changed.
    pub fn is_change(&self) -> bool {
        match self {
            CartChange::Unchanged => false,
            CartChange::Cleared { lines } => *lines > 0,
            _ => true,
        }
    }
}
