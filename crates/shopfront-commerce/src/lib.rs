//! Storefront domain types and logic for Shopfront.
//!
//! This crate provides the two pieces of state behind a product listing:
//!
//! - **Catalog**: Product records and category listing
//! - **Search**: The category, search and sort pipeline over the catalog
//! - **Cart**: Cart lines with derived totals, persisted after every action
//!
//! # Example
//!
//! ```rust
//! use shopfront_cache::Cache;
//! use shopfront_commerce::prelude::*;
//!
//! let catalog = Catalog::from_products(vec![
//!     Product::new(1, "Red Shirt", Money::new(2000)).with_category("clothing"),
//!     Product::new(2, "Blue Mug", Money::new(1000)).with_category("home"),
//! ]);
//!
//! let criteria = QueryCriteria::new().with_sort(SortOrder::PriceAsc);
//! let visible = catalog.query(&criteria);
//! assert_eq!(visible[0].title, "Blue Mug");
//!
//! let mut cart = CartStore::open(cart_slot(Cache::memory(), DEFAULT_CART_NAME), NullSink);
//! cart.add_item(visible[0].clone());
//! cart.add_item(visible[0].clone());
//! assert_eq!(cart.state().total_quantity(), 2);
//! assert_eq!(cart.state().total_price().display(), "$20.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{categories, category_options, Catalog, Product, Rating, ALL_CATEGORIES};

    // Cart
    pub use crate::cart::{
        cart_slot, CartAction, CartChange, CartLine, CartPersistence, CartState, CartStore,
        Notification, NotificationSink, NullSink, RecordingSink, Severity, DEFAULT_CART_NAME,
    };

    // Search
    pub use crate::search::{apply_query, result_summary, CategoryFilter, QueryCriteria, SortOrder};
}
