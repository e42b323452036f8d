//! Adapter registration entries.

use std::sync::Arc;

use crate::adapters::Adapter;

/// Pairs an adapter with an enabled flag, supplied once at dispatcher
/// construction.
///
/// Disabled entries are dropped permanently: they never receive any call and
/// cannot be re-enabled at runtime. This makes "turn a backend off" a pure
/// configuration concern at the wiring site.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use telemux::{Adapter, Registration};
///
/// struct Noop;
/// impl Adapter for Noop {}
///
/// let on = Registration::enabled(Arc::new(Noop));
/// let off = Registration::disabled(Arc::new(Noop));
/// assert!(on.enabled && !off.enabled);
/// ```
#[derive(Clone)]
pub struct Registration {
    /// The adapter instance.
    pub adapter: Arc<dyn Adapter>,
    /// Whether the adapter participates in fan-out.
    pub enabled: bool,
}

impl Registration {
    /// Creates a registration with an explicit enabled flag.
    pub fn new(adapter: Arc<dyn Adapter>, enabled: bool) -> Self {
        Self { adapter, enabled }
    }

    /// Creates an enabled registration.
    pub fn enabled(adapter: Arc<dyn Adapter>) -> Self {
        Self::new(adapter, true)
    }

    /// Creates a disabled registration (kept at the wiring site for
    /// documentation value; the dispatcher drops it).
    pub fn disabled(adapter: Arc<dyn Adapter>) -> Self {
        Self::new(adapter, false)
    }
}
