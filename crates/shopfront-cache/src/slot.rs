//! Typed, versioned slots stored under a fixed key.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{Cache, CacheError};

/// Data stored in a slot together with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Incremented on every save, starting at 1.
    pub version: u64,
    /// When the value was last written.
    pub saved_at: DateTime<Utc>,
    /// The stored value.
    pub data: T,
}

/// A single durable value of type `T` living under one key.
///
/// # Example
///
/// ```
/// use shopfront_cache::{Cache, Slot};
///
/// let slot = Slot::<Vec<u32>>::new(Cache::memory(), "basket");
/// slot.save(&vec![1, 2]).unwrap();
/// assert_eq!(slot.load().unwrap(), Some(vec![1, 2]));
/// ```
pub struct Slot<T> {
    cache: Cache,
    key: String,
    _phantom: PhantomData<T>,
}

impl<T> Slot<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a slot for `key` in `cache`.
    pub fn new(cache: Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
            _phantom: PhantomData,
        }
    }

    /// The key this slot is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored value, if any.
    pub fn load(&self) -> Result<Option<T>, CacheError> {
        Ok(self.load_versioned()?.map(|e| e.data))
    }

    /// Load the stored value with its version and timestamp.
    pub fn load_versioned(&self) -> Result<Option<Envelope<T>>, CacheError> {
        self.cache.get::<Envelope<T>>(&self.key)
    }

    /// Store `data`, returning the new version.
    ///
    /// An unreadable previous value doesn't block the write; the version
    /// restarts at 1.
    pub fn save(&self, data: &T) -> Result<u64, CacheError> {
        let version = match self.cache.get::<Envelope<serde::de::IgnoredAny>>(&self.key) {
            Ok(Some(previous)) => previous.version + 1,
            Ok(None) => 1,
            Err(CacheError::SerializeError(e)) => {
                tracing::warn!(key = %self.key, error = %e, "overwriting unreadable slot");
                1
            }
            Err(e) => return Err(e),
        };

        let envelope = EnvelopeRef {
            version,
            saved_at: Utc::now(),
            data,
        };
        self.cache.set(&self.key, &envelope)?;
        tracing::debug!(key = %self.key, version, "slot saved");
        Ok(version)
    }

    /// Remove the stored value.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.delete(&self.key)
    }

    /// Check whether a value is stored.
    pub fn exists(&self) -> Result<bool, CacheError> {
        self.cache.exists(&self.key)
    }
}

/// Borrowing twin of [`Envelope`] so saving doesn't clone the value.
#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u64,
    saved_at: DateTime<Utc>,
    data: &'a T,
}

impl<T> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot").field("key", &self.key).finish()
    }
}
