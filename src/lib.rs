//! # telemux
//!
//! **Telemux** is a synchronous fan-out façade for application telemetry.
//!
//! One call site (`event`, `log`, `error`, `set_user`, ...) broadcasts to
//! zero or more registered backend adapters — analytics SDK bindings, crash
//! reporters, debug loggers. The crate is designed as the single telemetry
//! entry point of an application, with backends plugged in at wiring time.
//!
//! ## Architecture
//! ```text
//!     app.event("user-login", props)
//!               │
//!               ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Dispatcher (façade)                                    │
//! │  - validation gates (user id, checkout id, payment type)│
//! │  - level gate (debug < info < warn < error < fatal)     │
//! │  - fan-out engine with per-adapter isolation            │
//! │  - id → adapter registry (strategy / has_strategy)      │
//! └──────┬──────────────────┬──────────────────┬────────────┘
//!        ▼                  ▼                  ▼
//!   ┌──────────┐      ┌──────────┐      ┌──────────┐
//!   │ Adapter  │      │ Adapter  │      │ Adapter  │
//!   │ (console)│      │(analytics│      │  (crash  │
//!   │          │      │   SDK)   │      │ reporter)│
//!   └──────────┘      └──────────┘      └──────────┘
//!
//! Failure path:
//!   adapter handler errors / panics during fan-out
//!        └──► caught per adapter ──► Dispatcher::error(critical = true)
//!             (siblings still receive the call)
//! ```
//!
//! ## Rules
//! - **Synchronous**: every operation completes on the caller's thread; no
//!   queueing, batching, retries, or deferred work.
//! - **Fixed registry**: the adapter set is supplied once at construction;
//!   disabled registrations are dropped permanently.
//! - **Deterministic order**: fan-out order equals registration order.
//! - **No exceptions at the call site**: validation failures and adapter
//!   failures are routed through the dispatcher's own `error` channel, never
//!   raised back to the caller.
//!
//! ## Features
//! | Area           | Description                                              | Key types / traits                       |
//! |----------------|----------------------------------------------------------|------------------------------------------|
//! | **Dispatch**   | Validated, level-gated fan-out to all enabled adapters.  | [`Dispatcher`], [`Registration`]         |
//! | **Adapters**   | Capability trait with default no-op handlers.            | [`Adapter`]                              |
//! | **Levels**     | Severity gate with per-call overrides.                   | [`Level`], [`Options`]                   |
//! | **Errors**     | Typed errors for adapters and the dispatcher itself.     | [`AdapterError`], [`DispatchError`]      |
//! | **Payloads**   | Property bags, user profile, commerce shapes, catalogs.  | [`types`]                                |
//!
//! ## Optional features
//! - `console`: exports a simple built-in [`ConsoleAdapter`] _(demo/reference only)_.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use telemux::{
//!     Adapter, AdapterError, Dispatcher, DispatcherConfig, Level, Options, Properties,
//!     Registration, User,
//! };
//!
//! struct Analytics;
//!
//! impl Adapter for Analytics {
//!     fn id(&self) -> Option<&str> {
//!         Some("analytics")
//!     }
//!
//!     fn event(&self, name: &str, props: Option<&Properties>) -> Result<(), AdapterError> {
//!         // forward to the SDK binding
//!         let _ = (name, props);
//!         Ok(())
//!     }
//! }
//!
//! let dispatch = Dispatcher::new(
//!     DispatcherConfig::default(),
//!     vec![Registration::enabled(Arc::new(Analytics))],
//! );
//!
//! dispatch.init();
//! dispatch.set_user(&User::new("u-1"));
//! dispatch.log("app_start", None, Options::default());
//! dispatch.set_min_level(Level::Warn);
//! dispatch.flush();
//! ```

mod adapters;
mod dispatcher;
mod error;
mod level;
mod options;

pub mod types;

// ---- Public re-exports ----

pub use adapters::Adapter;
pub use dispatcher::{Dispatcher, DispatcherConfig, Registration, SELF_FEATURE};
pub use error::{AdapterError, DispatchError};
pub use level::{Level, ParseLevelError};
pub use options::Options;
pub use types::{CheckoutData, Item, PaymentData, Properties, User};

// Optional: expose a simple built-in console adapter (demo/reference).
// Enable with: `--features console`
#[cfg(feature = "console")]
pub use adapters::ConsoleAdapter;
