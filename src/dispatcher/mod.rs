//! # The fan-out façade.
//!
//! This module provides the [`Dispatcher`] and its construction inputs:
//! [`Registration`] entries pairing an adapter with an enabled flag, and
//! [`DispatcherConfig`] for the initial minimum level.
//!
//! ## Lifecycle
//! ```text
//! Vec<Registration> ──► Dispatcher::new(cfg, regs)
//!                           │ keeps enabled entries, registration order
//!                           │ builds id → adapter lookup
//!                           ▼
//!                       active for the process lifetime
//!                           │
//!                       flush() — optional final fan-out, no other teardown
//! ```

mod config;
mod dispatcher;
mod registration;

pub use config::DispatcherConfig;
pub use dispatcher::{Dispatcher, SELF_FEATURE};
pub use registration::Registration;
