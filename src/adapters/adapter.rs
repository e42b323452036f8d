//! # Telemetry adapter trait.
//!
//! Provides [`Adapter`] — the extension point for plugging backend bindings
//! (analytics SDKs, crash reporters, debug loggers) into the dispatcher.
//!
//! Every capability method has a default no-op body: an adapter implements
//! only the handlers its backend supports, and absence is the common case,
//! not an error. The dispatcher invokes the handlers of every enabled
//! adapter in registration order.
//!
//! ## Rules
//! - Handlers run synchronously on the caller's thread; keep them cheap or
//!   hand work off to your own machinery (the dispatcher does not await,
//!   track, or sequence adapter-internal async effects).
//! - Return [`AdapterError`] for backend failures; the dispatcher catches it
//!   and reports it on the error channel instead of propagating.
//! - Implement [`Adapter::id`] to make the adapter reachable through
//!   [`Dispatcher::strategy`](crate::Dispatcher::strategy).
//!
//! ## Example
//! ```
//! use telemux::{Adapter, AdapterError};
//!
//! struct Crashlytics;
//!
//! impl Adapter for Crashlytics {
//!     fn id(&self) -> Option<&str> {
//!         Some("crashlytics")
//!     }
//!
//!     fn error(
//!         &self,
//!         feature: &str,
//!         name: &str,
//!         critical: bool,
//!         error: &(dyn std::error::Error + 'static),
//!         _extra: Option<&telemux::Properties>,
//!     ) -> Result<(), AdapterError> {
//!         // forward to the crash reporter SDK
//!         let _ = (feature, name, critical, error);
//!         Ok(())
//!     }
//! }
//! ```

use serde_json::Value;

use crate::error::AdapterError;
use crate::types::{CheckoutData, PaymentData, Properties, User};

/// A pluggable telemetry backend.
///
/// All handlers default to no-ops returning `Ok(())`; override the subset
/// your backend supports. Implementations must be `Send + Sync` — the
/// dispatcher is shared freely behind an `Arc`.
#[allow(unused_variables)]
pub trait Adapter: Send + Sync {
    /// Returns a stable identifier enabling registry lookup, if this adapter
    /// wants to be addressable.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Returns the adapter name used in failure reports.
    ///
    /// Prefer short, descriptive names (e.g., "firebase", "sentry",
    /// "console"). The default uses `type_name::<Self>()`, which can be
    /// verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Called once when the dispatcher initializes.
    fn init(&self) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Records a plain log entry.
    fn log(&self, name: &str, properties: Option<&Properties>) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Records a catalogued application event.
    fn event(&self, name: &str, properties: Option<&Properties>) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Records a network-layer event.
    fn network(&self, name: &str, properties: Option<&Properties>) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Records a feature-scoped informational message.
    fn info(
        &self,
        feature: &str,
        name: &str,
        properties: Option<&Value>,
    ) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Records an application error.
    fn error(
        &self,
        feature: &str,
        name: &str,
        critical: bool,
        error: &(dyn std::error::Error + 'static),
        extra: Option<&Properties>,
    ) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Clears per-session state (user identity, accumulated context).
    fn reset(&self) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Records a screen view.
    fn log_screen(&self, screen_name: &str, params: Option<&Properties>) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Associates subsequent calls with a user id.
    fn set_user_id(&self, user_id: &str) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Sets a single user attribute.
    fn set_user_property(&self, name: &str, value: &Value) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Associates subsequent calls with a full user profile.
    fn set_user(&self, user: &User) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Sets a batch of user attributes.
    fn set_user_properties(&self, properties: &Properties) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Records the start of a checkout flow.
    fn log_begin_checkout(
        &self,
        checkout_id: &str,
        properties: &CheckoutData,
    ) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Records a completed payment.
    fn log_payment_success(
        &self,
        checkout_id: &str,
        properties: &PaymentData,
    ) -> Result<(), AdapterError> {
        Ok(())
    }

    /// Flushes any buffering the backend does internally.
    fn flush(&self) -> Result<(), AdapterError> {
        Ok(())
    }
}
