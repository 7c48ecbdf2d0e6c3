//! Observability for Shopfront.
//!
//! Everything logs through `tracing`; this crate only decides where those
//! events go and how they look:
//! - `LogLevel` / `LogFormat` - the knobs exposed in configuration
//! - `LoggingConfig` - the `[logging]` config section
//! - `init` - installs the process-wide subscriber

mod logging;

pub use logging::*;
