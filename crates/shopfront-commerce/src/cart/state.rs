//! Cart state and its transition function.

use crate::cart::{CartAction, CartChange};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the cart together with its quantity.
///
/// Serializes flat: the product's fields plus `quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 while the line is in a cart.
    pub quantity: i64,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product id this line is keyed by.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// The shopping cart.
///
/// Lines keep first-added order and are unique by product id.
/// `total_quantity` and `total_price` are re-derived from the lines after
/// every transition and are never set on their own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredCart")]
pub struct CartState {
    #[serde(rename = "items")]
    lines: Vec<CartLine>,
    total_quantity: i64,
    total_price: Money,
}

impl CartState {
    /// The canonical empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from lines of unknown quality.
    ///
    /// Lines with a quantity of zero or less are dropped and repeated
    /// product ids are merged into the first occurrence. Totals are derived.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut state = Self::new();
        for line in lines {
            if line.quantity <= 0 {
                tracing::warn!(id = %line.id(), quantity = line.quantity, "dropping cart line without a positive quantity");
                continue;
            }
            match state.position(line.id()) {
                Some(index) => {
                    tracing::warn!(id = %line.id(), "merging duplicate cart line");
                    let existing = &mut state.lines[index];
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => state.lines.push(line),
            }
        }
        state.recompute();
        state
    }

    /// Apply one action and re-derive the totals.
    pub fn apply(&mut self, action: CartAction) -> CartChange {
        let change = match action {
            CartAction::AddItem(product) => self.add_item(product),
            CartAction::RemoveItem(id) => self.remove_item(id),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(id, quantity),
            CartAction::ClearCart => self.clear(),
        };
        self.recompute();
        change
    }

    fn add_item(&mut self, product: Product) -> CartChange {
        let id = product.id;
        let title = product.title.clone();
        let quantity = match self.position(id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine::new(product));
                1
            }
        };
        CartChange::Added {
            id,
            title,
            quantity,
        }
    }

    fn remove_item(&mut self, id: ProductId) -> CartChange {
        match self.position(id) {
            Some(index) => {
                self.lines.remove(index);
                CartChange::Removed { id }
            }
            None => CartChange::Unchanged,
        }
    }

    fn update_quantity(&mut self, id: ProductId, quantity: i64) -> CartChange {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        match self.position(id) {
            Some(index) => {
                self.lines[index].quantity = quantity;
                CartChange::QuantityUpdated { id, quantity }
            }
            None => CartChange::Unchanged,
        }
    }

    fn clear(&mut self) -> CartChange {
        let lines = self.lines.len();
        *self = Self::new();
        CartChange::Cleared { lines }
    }

    fn recompute(&mut self) {
        self.total_quantity = self
            .lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity));
        self.total_price = self.lines.iter().map(CartLine::line_total).sum();
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.id() == id)
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Sum of line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    /// Sum of line totals.
    pub fn total_price(&self) -> Money {
        self.total_price
    }

    /// Get the line for a product.
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Check if the product has a line.
    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    /// Quantity of a product, zero when absent.
    pub fn quantity_of(&self, id: ProductId) -> i64 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Shape of a cart as found in storage; totals there are only advisory.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredCart {
    #[serde(default)]
    items: Vec<CartLine>,
    total_quantity: Option<i64>,
    total_price: Option<Money>,
}

impl From<StoredCart> for CartState {
    fn from(stored: StoredCart) -> Self {
        let state = CartState::from_lines(stored.items);
        let quantity_drift = stored
            .total_quantity
            .is_some_and(|q| q != state.total_quantity);
        let price_drift = stored
            .total_price
            .is_some_and(|p| p != state.total_price);
        if quantity_drift || price_drift {
            tracing::warn!(
                total_quantity = state.total_quantity,
                total_price = %state.total_price,
                "stored cart totals disagreed with its lines; re-derived"
            );
        }
        state
    }
}
