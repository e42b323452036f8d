//! # Telemetry adapters.
//!
//! This module provides the [`Adapter`] trait and built-in implementations
//! for receiving calls fanned out by the [`Dispatcher`](crate::Dispatcher).
//!
//! ## Architecture
//! ```text
//! Call flow:
//!   Dispatcher::event(..) ── validation + level gate ──► fan-out loop
//!                                                            │
//!                                                       ┌────┴──────┬─────────┐
//!                                                       ▼           ▼         ▼
//!                                                 Adapter::event  Console  Custom ...
//! ```
//!
//! ## Implementing custom adapters
//! ```
//! use telemux::{Adapter, AdapterError, Properties};
//!
//! struct Analytics;
//!
//! impl Adapter for Analytics {
//!     fn id(&self) -> Option<&str> {
//!         Some("analytics")
//!     }
//!
//!     fn event(&self, name: &str, props: Option<&Properties>) -> Result<(), AdapterError> {
//!         // forward to the SDK
//!         let _ = (name, props);
//!         Ok(())
//!     }
//! }
//! ```

mod adapter;

#[cfg(feature = "console")]
mod console;

pub use adapter::Adapter;

#[cfg(feature = "console")]
pub use console::ConsoleAdapter;
