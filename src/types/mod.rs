//! # Payload types carried by telemetry calls.
//!
//! This is the configuration surface of the crate, not logic: property bags,
//! the user profile shape, commerce payloads, and the catalogs of known tag
//! names. Adapters receive these types as-is; the dispatcher only inspects
//! the handful of fields its validation gates require (`User::id`,
//! `PaymentData::payment_type`).

mod commerce;
mod user;

pub mod events;
pub mod tags;

pub use commerce::{CheckoutData, Item, PaymentData};
pub use user::User;

/// Free-form property bag attached to most telemetry calls.
///
/// A JSON object map, matching what analytics backends accept.
pub type Properties = serde_json::Map<String, serde_json::Value>;
