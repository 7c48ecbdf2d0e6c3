//! Type-safe key-value storage for Shopfront.
//!
//! Provides a small, ergonomic API for keeping session state (the shopping
//! cart) in a key-value store with automatic JSON serialization.
//!
//! # Example
//!
//! ```
//! use shopfront_cache::{cache_key, Cache, Slot};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Basket {
//!     items: Vec<String>,
//! }
//!
//! let slot = Slot::new(Cache::memory(), cache_key!("shopfront", "basket"));
//! slot.save(&Basket { items: vec!["mug".into()] }).unwrap();
//!
//! let basket: Option<Basket> = slot.load().unwrap();
//! assert_eq!(basket.unwrap().items, vec!["mug".to_string()]);
//! ```

mod error;
mod kv;
mod slot;

pub use error::CacheError;
pub use kv::{Cache, FileStore, KvStore, MemoryStore};
pub use slot::{Envelope, Slot};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore, Slot};
}
