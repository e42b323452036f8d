//! Error types used by the dispatcher and its adapters.
//!
//! This module defines two main error enums:
//!
//! - [`AdapterError`] — failures returned by an adapter handler (the analog
//!   of an exception thrown inside an analytics SDK binding).
//! - [`DispatchError`] — problems the dispatcher detects itself: rejected
//!   input and adapter failures caught during fan-out.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for
//! logging/metrics. `DispatchError` is never returned to the caller; the
//! dispatcher delivers it through its own `error` fan-out so downstream
//! adapters can record the problem.

use thiserror::Error;

/// # Errors produced by adapter handlers.
///
/// Adapters return these from any capability method; the dispatcher catches
/// them during fan-out and reports them on its error channel instead of
/// propagating them to the call site.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The backend rejected or failed to record the call.
    #[error("adapter failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// An I/O error from an adapter that writes somewhere (file, stdout).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AdapterError {
    /// Creates a [`AdapterError::Fail`] from any displayable message.
    pub fn msg(error: impl Into<String>) -> Self {
        AdapterError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            AdapterError::Fail { .. } => "adapter_fail",
            AdapterError::Io(_) => "adapter_io",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            AdapterError::Fail { error } => error.clone(),
            AdapterError::Io(err) => err.to_string(),
        }
    }
}

/// # Errors the dispatcher raises on its own error channel.
///
/// Validation failures cover required identifiers missing from a call;
/// fan-out failures cover adapters that errored or panicked while handling
/// one. Callers never see these as return values — they are fanned out
/// through the same `error` operation used for application errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// `set_user` was called without a user id.
    #[error("user id is required")]
    MissingUserId,

    /// `log_begin_checkout` was called with an empty checkout id.
    #[error("checkout id is required")]
    MissingCheckoutId,

    /// `log_payment_success` was missing the checkout id or the payment type.
    #[error("checkout id and payment type are required")]
    MissingPaymentType,

    /// An adapter handler returned an error during fan-out.
    #[error("adapter {adapter} failed during {op}: {error}")]
    AdapterFailed {
        /// Name of the failing adapter.
        adapter: String,
        /// The operation that was being fanned out.
        op: &'static str,
        /// The adapter's error message.
        error: String,
    },

    /// An adapter handler panicked during fan-out.
    #[error("adapter {adapter} panicked during {op}: {info}")]
    AdapterPanicked {
        /// Name of the panicking adapter.
        adapter: String,
        /// The operation that was being fanned out.
        op: &'static str,
        /// Recovered panic payload, if any.
        info: String,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use telemux::DispatchError;
    ///
    /// assert_eq!(DispatchError::MissingUserId.as_label(), "missing_user_id");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::MissingUserId => "missing_user_id",
            DispatchError::MissingCheckoutId => "missing_checkout_id",
            DispatchError::MissingPaymentType => "missing_payment_type",
            DispatchError::AdapterFailed { .. } => "adapter_failed",
            DispatchError::AdapterPanicked { .. } => "adapter_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::AdapterFailed { adapter, op, error } => {
                format!("op={op} adapter={adapter} error={error}")
            }
            DispatchError::AdapterPanicked { adapter, op, info } => {
                format!("op={op} adapter={adapter} panic={info}")
            }
            other => other.to_string(),
        }
    }
}
