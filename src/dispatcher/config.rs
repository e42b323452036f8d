//! # Dispatcher configuration.
//!
//! [`DispatcherConfig`] defines the dispatcher's initial behavior. The only
//! knob today is the minimum severity; the adapter list is passed separately
//! at construction.
//!
//! # Example
//! ```
//! use telemux::{DispatcherConfig, Level};
//!
//! let mut cfg = DispatcherConfig::default();
//! cfg.min_level = Level::Warn;
//! assert_eq!(cfg.min_level, Level::Warn);
//! ```

use crate::level::Level;

/// Initial configuration for a [`Dispatcher`](crate::Dispatcher).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Minimum severity a gated call needs to reach the adapters.
    /// Adjustable later via
    /// [`Dispatcher::set_min_level`](crate::Dispatcher::set_min_level).
    pub min_level: Level,
}

impl Default for DispatcherConfig {
    /// Provides a default configuration:
    /// - `min_level = Level::Info`
    fn default() -> Self {
        Self {
            min_level: Level::Info,
        }
    }
}
