//! # Dispatcher: validated, level-gated fan-out to telemetry adapters.
//!
//! The [`Dispatcher`] owns an ordered set of enabled adapters, a lookup table
//! for adapters that expose an id, and the minimum-severity gate. Every
//! public operation runs synchronously on the caller's thread and returns
//! nothing; the observable effect is the corresponding handler firing on each
//! enabled adapter in registration order.
//!
//! ## Architecture
//! ```text
//! dispatch.event(name, props, opts)
//!     │
//!     ├─ level gate (opts.level, or the operation default) ─► below min → skip
//!     │
//!     └─► fan-out loop, registration order
//!            ├──► adapter 1 ── Err/panic ──► caught, routed to error channel
//!            ├──► adapter 2                  (siblings still receive the call)
//!            └──► adapter N
//! ```
//!
//! ## Rules
//! - **Order**: fan-out order equals registration order restricted to enabled
//!   adapters, for every operation.
//! - **Isolation**: each adapter invocation is individually caught — handler
//!   errors and panics become `critical = true` reports on the dispatcher's
//!   own `error` channel, tagged with the originating operation, and the
//!   remaining adapters are still invoked.
//! - **Validation**: missing required identifiers never raise to the caller;
//!   they are routed through the same `error` channel (or silently dropped,
//!   for an empty `set_user_properties` payload).
//! - **The error sink**: [`Dispatcher::error`] is the terminal channel and
//!   does not guard its own fan-out — an adapter error there is logged via
//!   `tracing` and a panic propagates to the caller.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use telemux::{Adapter, Dispatcher, DispatcherConfig, Level, Options, Registration};
//!
//! struct Analytics;
//! impl Adapter for Analytics {
//!     fn id(&self) -> Option<&str> {
//!         Some("analytics")
//!     }
//! }
//!
//! let dispatch = Dispatcher::new(
//!     DispatcherConfig::default(),
//!     vec![Registration::enabled(Arc::new(Analytics))],
//! );
//!
//! dispatch.init();
//! dispatch.log("app_start", None, Options::default());
//! dispatch.set_min_level(Level::Warn);
//! assert!(dispatch.has_strategy("analytics"));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering as AtomicOrdering};

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::adapters::Adapter;
use crate::dispatcher::{DispatcherConfig, Registration};
use crate::error::{AdapterError, DispatchError};
use crate::level::Level;
use crate::options::Options;
use crate::types::{tags, CheckoutData, PaymentData, Properties, User};

/// Feature tag the dispatcher uses when reporting its own validation and
/// fan-out failures on the error channel.
///
/// This is an observable wire string shared with the pre-existing
/// implementations of this façade; downstream dashboards filter on it.
pub const SELF_FEATURE: &str = "LoggerStrategy";

/// Fan-out façade over a fixed set of telemetry adapters.
///
/// The adapter set is immutable after construction; the only mutable state is
/// the atomic minimum level, so a `Dispatcher` is freely shareable behind an
/// `Arc` across threads without locking.
pub struct Dispatcher {
    /// Enabled adapters, in registration order.
    adapters: Vec<Arc<dyn Adapter>>,
    /// Lookup by adapter id, for adapters that expose one.
    by_id: HashMap<String, Arc<dyn Adapter>>,
    /// Minimum severity gate, stored as the level ordinal.
    min_level: AtomicU8,
}

impl Dispatcher {
    /// Creates a dispatcher from an ordered list of registrations.
    ///
    /// Entries with `enabled == false` are dropped permanently. The id lookup
    /// is built from the remaining adapters that return `Some` from
    /// [`Adapter::id`]; on a duplicate id the later registration wins.
    pub fn new(cfg: DispatcherConfig, registrations: Vec<Registration>) -> Self {
        let adapters: Vec<Arc<dyn Adapter>> = registrations
            .into_iter()
            .filter(|r| r.enabled)
            .map(|r| r.adapter)
            .collect();

        let mut by_id = HashMap::new();
        for adapter in &adapters {
            if let Some(id) = adapter.id() {
                by_id.insert(id.to_string(), Arc::clone(adapter));
            }
        }

        debug!(
            adapters = adapters.len(),
            addressable = by_id.len(),
            min_level = %cfg.min_level,
            "dispatcher constructed"
        );

        Self {
            adapters,
            by_id,
            min_level: AtomicU8::new(cfg.min_level as u8),
        }
    }

    // ---- Registry ----

    /// Returns the adapter registered with the given id, if any.
    ///
    /// Adapters without an id participate in fan-out but are not reachable
    /// here.
    pub fn strategy(&self, id: &str) -> Option<Arc<dyn Adapter>> {
        self.by_id.get(id).cloned()
    }

    /// Returns whether an adapter with the given id is registered.
    pub fn has_strategy(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    // ---- Level gate ----

    /// Returns the current minimum severity.
    pub fn min_level(&self) -> Level {
        Level::from_ordinal(self.min_level.load(AtomicOrdering::Relaxed))
    }

    /// Sets the minimum severity for subsequent gated calls.
    pub fn set_min_level(&self, level: Level) {
        self.min_level.store(level as u8, AtomicOrdering::Relaxed);
    }

    /// Resolves the call's effective level and checks it against the gate.
    fn gate(&self, op: &'static str, opts: Options, default: Level) -> bool {
        let level = opts.level_or(default);
        let min = self.min_level();
        if level < min {
            trace!(op, level = %level, min = %min, "below minimum level, skipped");
            return false;
        }
        true
    }

    // ---- Fan-out engine ----

    /// Invokes `call` on every enabled adapter in registration order,
    /// isolating each invocation: a handler error or panic is converted into
    /// a `critical = true` report on the error channel and the loop
    /// continues with the next adapter.
    fn fan_out<F>(&self, op: &'static str, mut call: F)
    where
        F: FnMut(&dyn Adapter) -> Result<(), AdapterError>,
    {
        for adapter in &self.adapters {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| call(adapter.as_ref())));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    self.report_fanout_failure(DispatchError::AdapterFailed {
                        adapter: adapter.name().to_string(),
                        op,
                        error: err.as_message(),
                    });
                }
                Err(payload) => {
                    self.report_fanout_failure(DispatchError::AdapterPanicked {
                        adapter: adapter.name().to_string(),
                        op,
                        info: panic_info(payload),
                    });
                }
            }
        }
    }

    /// Routes a caught fan-out failure through the error channel.
    fn report_fanout_failure(&self, failure: DispatchError) {
        warn!(label = failure.as_label(), detail = %failure.as_message(), "adapter fan-out failure");
        let op = match &failure {
            DispatchError::AdapterFailed { op, .. } => *op,
            DispatchError::AdapterPanicked { op, .. } => *op,
            _ => "fanOut",
        };
        self.error(SELF_FEATURE, op, true, &failure, None, Options::default());
    }

    /// Routes a rejected input through the error channel and gives up on the
    /// call.
    fn report_validation_failure(&self, op: &'static str, failure: DispatchError) {
        debug!(op, label = failure.as_label(), "validation failed, call dropped");
        self.error(SELF_FEATURE, op, false, &failure, None, Options::default());
    }

    // ---- Operations ----

    /// Initializes every adapter, then emits the `app-open` event.
    pub fn init(&self) {
        self.fan_out("init", |a| a.init());
        self.event(tags::event::APP_OPEN, None, Options::default());
    }

    /// Records a plain log entry. Gated, default [`Level::Info`].
    pub fn log(&self, name: &str, properties: Option<&Properties>, opts: Options) {
        if !self.gate("log", opts, Level::Info) {
            return;
        }
        self.fan_out("log", |a| a.log(name, properties));
    }

    /// Records a catalogued application event. Gated, default [`Level::Info`].
    ///
    /// Known tags and their payload shapes live in
    /// [`types::tags::event`](crate::types::tags::event) and
    /// [`types::events`](crate::types::events); pairing them correctly is a
    /// type-layer convention, not a runtime check.
    pub fn event(&self, name: &str, properties: Option<&Properties>, opts: Options) {
        if !self.gate("event", opts, Level::Info) {
            return;
        }
        self.fan_out("event", |a| a.event(name, properties));
    }

    /// Records a network-layer event. Gated, default [`Level::Info`].
    pub fn network(&self, name: &str, properties: Option<&Properties>, opts: Options) {
        if !self.gate("network", opts, Level::Info) {
            return;
        }
        self.fan_out("network", |a| a.network(name, properties));
    }

    /// Records a feature-scoped informational message. Gated, default
    /// [`Level::Info`].
    pub fn info(&self, feature: &str, name: &str, properties: Option<&Value>, opts: Options) {
        if !self.gate("info", opts, Level::Info) {
            return;
        }
        self.fan_out("info", |a| a.info(feature, name, properties));
    }

    /// Like [`Dispatcher::info`], pinned to [`Level::Debug`].
    pub fn debug(&self, feature: &str, name: &str, properties: Option<&Value>) {
        self.info(feature, name, properties, Options::at(Level::Debug));
    }

    /// Like [`Dispatcher::info`], pinned to [`Level::Warn`].
    pub fn warn(&self, feature: &str, name: &str, properties: Option<&Value>) {
        self.info(feature, name, properties, Options::at(Level::Warn));
    }

    /// Records an application error. Gated, default [`Level::Error`].
    ///
    /// This is the designated terminal sink: both application errors and the
    /// dispatcher's own validation/fan-out failures arrive here, so adapters
    /// observe one unified error stream. Fan-out is NOT isolated — an
    /// adapter error is logged via `tracing` and the remaining adapters are
    /// still invoked; a panicking adapter propagates to the caller.
    pub fn error(
        &self,
        feature: &str,
        name: &str,
        critical: bool,
        error: &(dyn std::error::Error + 'static),
        extra: Option<&Properties>,
        opts: Options,
    ) {
        if !self.gate("error", opts, Level::Error) {
            return;
        }
        for adapter in &self.adapters {
            if let Err(err) = adapter.error(feature, name, critical, error, extra) {
                warn!(
                    adapter = adapter.name(),
                    error = %err.as_message(),
                    "adapter failed in error sink"
                );
            }
        }
    }

    /// Like [`Dispatcher::error`], pinned to [`Level::Fatal`] with
    /// `critical = true`.
    pub fn fatal(
        &self,
        feature: &str,
        name: &str,
        error: &(dyn std::error::Error + 'static),
        extra: Option<&Properties>,
    ) {
        self.error(feature, name, true, error, extra, Options::at(Level::Fatal));
    }

    /// Clears per-session state on every adapter.
    pub fn reset(&self) {
        self.fan_out("reset", |a| a.reset());
    }

    /// Records a screen view.
    pub fn log_screen(&self, screen_name: &str, params: Option<&Properties>) {
        self.fan_out("logScreen", |a| a.log_screen(screen_name, params));
    }

    /// Associates subsequent calls with a user id.
    pub fn set_user_id(&self, user_id: &str) {
        self.fan_out("setUserId", |a| a.set_user_id(user_id));
    }

    /// Sets a single user attribute.
    pub fn set_user_property(&self, name: &str, value: &Value) {
        self.fan_out("setUserProperty", |a| a.set_user_property(name, value));
    }

    /// Associates subsequent calls with a full user profile.
    ///
    /// Requires a non-empty [`User::id`]; otherwise the call is dropped and
    /// [`DispatchError::MissingUserId`] is routed through the error channel.
    pub fn set_user(&self, user: &User) {
        if user.id.is_empty() {
            self.report_validation_failure("setUser", DispatchError::MissingUserId);
            return;
        }
        self.fan_out("setUser", |a| a.set_user(user));
    }

    /// Sets a batch of user attributes. An empty batch is silently ignored.
    pub fn set_user_properties(&self, properties: &Properties) {
        if properties.is_empty() {
            trace!("empty user properties, skipped");
            return;
        }
        self.fan_out("setUserProperties", |a| a.set_user_properties(properties));
    }

    /// Records the start of a checkout flow.
    ///
    /// Requires a non-empty `checkout_id`; otherwise the call is dropped and
    /// [`DispatchError::MissingCheckoutId`] is routed through the error
    /// channel.
    pub fn log_begin_checkout(&self, checkout_id: &str, properties: &CheckoutData) {
        if checkout_id.is_empty() {
            self.report_validation_failure("logBeginCheckout", DispatchError::MissingCheckoutId);
            return;
        }
        self.fan_out("logBeginCheckout", |a| {
            a.log_begin_checkout(checkout_id, properties)
        });
    }

    /// Records a completed payment.
    ///
    /// Requires a non-empty `checkout_id` and a non-empty
    /// [`PaymentData::payment_type`]; otherwise the call is dropped and
    /// [`DispatchError::MissingPaymentType`] is routed through the error
    /// channel.
    pub fn log_payment_success(&self, checkout_id: &str, properties: &PaymentData) {
        if checkout_id.is_empty() || properties.payment_type.is_empty() {
            self.report_validation_failure("logPaymentSuccess", DispatchError::MissingPaymentType);
            return;
        }
        self.fan_out("logPaymentSuccess", |a| {
            a.log_payment_success(checkout_id, properties)
        });
    }

    /// Asks every adapter to flush its internal buffering.
    pub fn flush(&self) {
        self.fan_out("flush", |a| a.flush());
    }
}

/// Recovers a printable message from a panic payload.
fn panic_info(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Shared call journal: entries are `"{label}:{op}{detail}"` in the
    /// order adapters were invoked, across all adapters of one dispatcher.
    type Journal = Arc<Mutex<Vec<String>>>;

    struct Recording {
        label: &'static str,
        adapter_id: Option<&'static str>,
        journal: Journal,
    }

    impl Recording {
        fn new(label: &'static str, journal: &Journal) -> Self {
            Self {
                label,
                adapter_id: None,
                journal: Arc::clone(journal),
            }
        }

        fn with_id(label: &'static str, id: &'static str, journal: &Journal) -> Self {
            Self {
                label,
                adapter_id: Some(id),
                journal: Arc::clone(journal),
            }
        }

        fn push(&self, entry: String) {
            self.journal.lock().unwrap().push(entry);
        }
    }

    impl Adapter for Recording {
        fn id(&self) -> Option<&str> {
            self.adapter_id
        }

        fn name(&self) -> &'static str {
            self.label
        }

        fn init(&self) -> Result<(), AdapterError> {
            self.push(format!("{}:init", self.label));
            Ok(())
        }

        fn log(&self, name: &str, _props: Option<&Properties>) -> Result<(), AdapterError> {
            self.push(format!("{}:log:{name}", self.label));
            Ok(())
        }

        fn event(&self, name: &str, _props: Option<&Properties>) -> Result<(), AdapterError> {
            self.push(format!("{}:event:{name}", self.label));
            Ok(())
        }

        fn network(&self, name: &str, _props: Option<&Properties>) -> Result<(), AdapterError> {
            self.push(format!("{}:network:{name}", self.label));
            Ok(())
        }

        fn info(
            &self,
            feature: &str,
            name: &str,
            _props: Option<&Value>,
        ) -> Result<(), AdapterError> {
            self.push(format!("{}:info:{feature}:{name}", self.label));
            Ok(())
        }

        fn error(
            &self,
            feature: &str,
            name: &str,
            critical: bool,
            error: &(dyn std::error::Error + 'static),
            _extra: Option<&Properties>,
        ) -> Result<(), AdapterError> {
            self.push(format!(
                "{}:error:{feature}:{name}:{critical}:{error}",
                self.label
            ));
            Ok(())
        }

        fn reset(&self) -> Result<(), AdapterError> {
            self.push(format!("{}:reset", self.label));
            Ok(())
        }

        fn log_screen(
            &self,
            screen_name: &str,
            _params: Option<&Properties>,
        ) -> Result<(), AdapterError> {
            self.push(format!("{}:logScreen:{screen_name}", self.label));
            Ok(())
        }

        fn set_user_id(&self, user_id: &str) -> Result<(), AdapterError> {
            self.push(format!("{}:setUserId:{user_id}", self.label));
            Ok(())
        }

        fn set_user_property(&self, name: &str, _value: &Value) -> Result<(), AdapterError> {
            self.push(format!("{}:setUserProperty:{name}", self.label));
            Ok(())
        }

        fn set_user(&self, user: &User) -> Result<(), AdapterError> {
            self.push(format!("{}:setUser:{}", self.label, user.id));
            Ok(())
        }

        fn set_user_properties(&self, _props: &Properties) -> Result<(), AdapterError> {
            self.push(format!("{}:setUserProperties", self.label));
            Ok(())
        }

        fn log_begin_checkout(
            &self,
            checkout_id: &str,
            _props: &CheckoutData,
        ) -> Result<(), AdapterError> {
            self.push(format!("{}:logBeginCheckout:{checkout_id}", self.label));
            Ok(())
        }

        fn log_payment_success(
            &self,
            checkout_id: &str,
            _props: &PaymentData,
        ) -> Result<(), AdapterError> {
            self.push(format!("{}:logPaymentSuccess:{checkout_id}", self.label));
            Ok(())
        }

        fn flush(&self) -> Result<(), AdapterError> {
            self.push(format!("{}:flush", self.label));
            Ok(())
        }
    }

    /// Fails every `event` call; records nothing.
    struct Flaky;

    impl Adapter for Flaky {
        fn name(&self) -> &'static str {
            "flaky"
        }

        fn event(&self, _name: &str, _props: Option<&Properties>) -> Result<(), AdapterError> {
            Err(AdapterError::msg("backend down"))
        }
    }

    /// Panics on every `event` call.
    struct Panicky;

    impl Adapter for Panicky {
        fn name(&self) -> &'static str {
            "panicky"
        }

        fn event(&self, _name: &str, _props: Option<&Properties>) -> Result<(), AdapterError> {
            panic!("event handler blew up");
        }
    }

    /// Fails in the error sink itself.
    struct DeafSink;

    impl Adapter for DeafSink {
        fn name(&self) -> &'static str {
            "deaf"
        }

        fn error(
            &self,
            _feature: &str,
            _name: &str,
            _critical: bool,
            _error: &(dyn std::error::Error + 'static),
            _extra: Option<&Properties>,
        ) -> Result<(), AdapterError> {
            Err(AdapterError::msg("sink unavailable"))
        }
    }

    fn journal() -> Journal {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn entries(journal: &Journal) -> Vec<String> {
        journal.lock().unwrap().clone()
    }

    fn dispatcher_of(registrations: Vec<Registration>) -> Dispatcher {
        Dispatcher::new(DispatcherConfig::default(), registrations)
    }

    #[test]
    fn test_fan_out_preserves_registration_order() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![
            Registration::enabled(Arc::new(Recording::new("a", &journal))),
            Registration::enabled(Arc::new(Recording::new("b", &journal))),
            Registration::enabled(Arc::new(Recording::new("c", &journal))),
        ]);

        dispatch.log("app_start", None, Options::default());
        assert_eq!(
            entries(&journal),
            vec!["a:log:app_start", "b:log:app_start", "c:log:app_start"]
        );
    }

    #[test]
    fn test_disabled_adapters_never_receive_any_call() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![
            Registration::disabled(Arc::new(Recording::with_id("off", "off", &journal))),
            Registration::enabled(Arc::new(Recording::new("on", &journal))),
        ]);

        dispatch.init();
        dispatch.log("app_start", None, Options::default());
        dispatch.event("user-login", None, Options::default());
        dispatch.network("RestApi_request", None, Options::default());
        dispatch.info("Feature", "detail", None, Options::default());
        dispatch.error(
            "Feature",
            "oops",
            false,
            &AdapterError::msg("x"),
            None,
            Options::default(),
        );
        dispatch.reset();
        dispatch.log_screen("Home", None);
        dispatch.set_user_id("u-1");
        dispatch.set_user_property("plan", &Value::String("pro".into()));
        dispatch.set_user(&User::new("u-1"));
        dispatch.log_begin_checkout("c-1", &CheckoutData::default());
        dispatch.log_payment_success("c-1", &PaymentData::of_type("credit_card"));
        dispatch.flush();

        assert!(entries(&journal).iter().all(|e| e.starts_with("on:")));
        assert!(!dispatch.has_strategy("off"));
    }

    #[test]
    fn test_init_fans_out_then_emits_app_open() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![
            Registration::enabled(Arc::new(Recording::new("a", &journal))),
            Registration::enabled(Arc::new(Recording::new("b", &journal))),
        ]);

        dispatch.init();
        assert_eq!(
            entries(&journal),
            vec!["a:init", "b:init", "a:event:app-open", "b:event:app-open"]
        );
    }

    #[test]
    fn test_strategy_lookup_by_id() {
        let journal = journal();
        let tagged: Arc<dyn Adapter> = Arc::new(Recording::with_id("a", "tagged", &journal));
        let anonymous: Arc<dyn Adapter> = Arc::new(Recording::new("b", &journal));
        let dispatch = dispatcher_of(vec![
            Registration::enabled(Arc::clone(&tagged)),
            Registration::enabled(anonymous),
        ]);

        assert!(dispatch.has_strategy("tagged"));
        assert!(!dispatch.has_strategy("never-registered"));
        let found = dispatch.strategy("tagged").expect("registered id");
        assert!(Arc::ptr_eq(&found, &tagged));
        assert!(dispatch.strategy("never-registered").is_none());

        // Anonymous adapters still participate in fan-out.
        dispatch.flush();
        assert_eq!(entries(&journal), vec!["a:flush", "b:flush"]);
    }

    #[test]
    fn test_id_collision_last_registration_wins() {
        let journal = journal();
        let first: Arc<dyn Adapter> = Arc::new(Recording::with_id("a", "dup", &journal));
        let second: Arc<dyn Adapter> = Arc::new(Recording::with_id("b", "dup", &journal));
        let dispatch = dispatcher_of(vec![
            Registration::enabled(Arc::clone(&first)),
            Registration::enabled(Arc::clone(&second)),
        ]);

        let found = dispatch.strategy("dup").expect("registered id");
        assert!(Arc::ptr_eq(&found, &second));

        // Both still receive fan-out.
        dispatch.reset();
        assert_eq!(entries(&journal), vec!["a:reset", "b:reset"]);
    }

    #[test]
    fn test_set_user_without_id_routes_to_error_channel() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![Registration::enabled(Arc::new(Recording::new(
            "a", &journal,
        )))]);

        dispatch.set_user(&User::default());

        let entries = entries(&journal);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].starts_with("a:error:LoggerStrategy:setUser:false"));
        assert!(entries[0].contains("user id is required"));
    }

    #[test]
    fn test_set_user_with_id_fans_out() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![Registration::enabled(Arc::new(Recording::new(
            "a", &journal,
        )))]);

        dispatch.set_user(&User::new("u-42"));
        assert_eq!(entries(&journal), vec!["a:setUser:u-42"]);
    }

    #[test]
    fn test_begin_checkout_requires_checkout_id() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![Registration::enabled(Arc::new(Recording::new(
            "a", &journal,
        )))]);

        dispatch.log_begin_checkout("", &CheckoutData::default());

        let entries = entries(&journal);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].starts_with("a:error:LoggerStrategy:logBeginCheckout:false"));
    }

    #[test]
    fn test_payment_success_requires_id_and_type() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![Registration::enabled(Arc::new(Recording::new(
            "a", &journal,
        )))]);

        // Missing payment type.
        let mut untyped = PaymentData::default();
        untyped.currency = Some("USD".into());
        dispatch.log_payment_success("c-1", &untyped);

        // Missing checkout id.
        dispatch.log_payment_success("", &PaymentData::of_type("credit_card"));

        let recorded = entries(&journal);
        assert_eq!(recorded.len(), 2);
        for entry in &recorded {
            assert!(entry.starts_with("a:error:LoggerStrategy:logPaymentSuccess:false"));
        }

        // Valid call fans out.
        dispatch.log_payment_success("c-1", &PaymentData::of_type("credit_card"));
        assert_eq!(
            entries(&journal).last().map(String::as_str),
            Some("a:logPaymentSuccess:c-1")
        );
    }

    #[test]
    fn test_empty_user_properties_is_silent_noop() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![Registration::enabled(Arc::new(Recording::new(
            "a", &journal,
        )))]);

        dispatch.set_user_properties(&Properties::new());
        assert!(entries(&journal).is_empty());

        let mut props = Properties::new();
        props.insert("plan".into(), Value::String("pro".into()));
        dispatch.set_user_properties(&props);
        assert_eq!(entries(&journal), vec!["a:setUserProperties"]);
    }

    #[test]
    fn test_level_gate_skips_below_minimum() {
        let journal = journal();
        let dispatch = Dispatcher::new(
            DispatcherConfig {
                min_level: Level::Warn,
            },
            vec![Registration::enabled(Arc::new(Recording::new(
                "a", &journal,
            )))],
        );

        dispatch.log("app_start", None, Options::default());
        dispatch.event("user-login", None, Options::default());
        dispatch.network("RestApi_request", None, Options::default());
        dispatch.info("Feature", "detail", None, Options::default());
        assert!(entries(&journal).is_empty());

        dispatch.error(
            "Feature",
            "oops",
            false,
            &AdapterError::msg("x"),
            None,
            Options::default(),
        );
        dispatch.fatal("Feature", "boom", &AdapterError::msg("y"), None);
        assert_eq!(entries(&journal).len(), 2);
    }

    #[test]
    fn test_explicit_level_override_passes_gate() {
        let journal = journal();
        let dispatch = Dispatcher::new(
            DispatcherConfig {
                min_level: Level::Warn,
            },
            vec![Registration::enabled(Arc::new(Recording::new(
                "a", &journal,
            )))],
        );

        dispatch.log("app_crash", None, Options::at(Level::Warn));
        assert_eq!(entries(&journal), vec!["a:log:app_crash"]);
    }

    #[test]
    fn test_debug_and_warn_wrappers_force_level() {
        let journal = journal();
        let dispatch = Dispatcher::new(
            DispatcherConfig {
                min_level: Level::Warn,
            },
            vec![Registration::enabled(Arc::new(Recording::new(
                "a", &journal,
            )))],
        );

        dispatch.debug("Feature", "verbose", None);
        assert!(entries(&journal).is_empty());

        dispatch.warn("Feature", "heads-up", None);
        assert_eq!(entries(&journal), vec!["a:info:Feature:heads-up"]);
    }

    #[test]
    fn test_set_min_level_takes_effect_at_runtime() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![Registration::enabled(Arc::new(Recording::new(
            "a", &journal,
        )))]);

        dispatch.log("app_start", None, Options::default());
        assert_eq!(entries(&journal).len(), 1);

        dispatch.set_min_level(Level::Error);
        assert_eq!(dispatch.min_level(), Level::Error);
        dispatch.log("app_start", None, Options::default());
        assert_eq!(entries(&journal).len(), 1);

        dispatch.set_min_level(Level::Debug);
        dispatch.debug("Feature", "verbose", None);
        assert_eq!(entries(&journal).len(), 2);
    }

    #[test]
    fn test_failing_adapter_does_not_block_siblings() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![
            Registration::enabled(Arc::new(Flaky)),
            Registration::enabled(Arc::new(Recording::new("b", &journal))),
        ]);

        dispatch.event("user-login", None, Options::default());

        let recorded = entries(&journal);
        // The failure report reaches the recorder through the error channel,
        // then the recorder still receives the original event.
        assert!(recorded
            .iter()
            .any(|e| e.starts_with("b:error:LoggerStrategy:event:true") && e.contains("backend down")));
        assert!(recorded.iter().any(|e| e == "b:event:user-login"));
    }

    #[test]
    fn test_panicking_adapter_is_isolated() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![
            Registration::enabled(Arc::new(Panicky)),
            Registration::enabled(Arc::new(Recording::new("b", &journal))),
        ]);

        dispatch.event("user-login", None, Options::default());

        let recorded = entries(&journal);
        assert!(recorded
            .iter()
            .any(|e| e.starts_with("b:error:LoggerStrategy:event:true")
                && e.contains("event handler blew up")));
        assert!(recorded.iter().any(|e| e == "b:event:user-login"));
    }

    #[test]
    fn test_error_sink_failure_does_not_stop_siblings() {
        let journal = journal();
        let dispatch = dispatcher_of(vec![
            Registration::enabled(Arc::new(DeafSink)),
            Registration::enabled(Arc::new(Recording::new("b", &journal))),
        ]);

        dispatch.error(
            "Authentication",
            "login-failed",
            true,
            &AdapterError::msg("bad token"),
            None,
            Options::default(),
        );

        let recorded = entries(&journal);
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].starts_with("b:error:Authentication:login-failed:true"));
    }

    #[test]
    fn test_init_app_open_respects_gate() {
        let journal = journal();
        let dispatch = Dispatcher::new(
            DispatcherConfig {
                min_level: Level::Warn,
            },
            vec![Registration::enabled(Arc::new(Recording::new(
                "a", &journal,
            )))],
        );

        dispatch.init();
        // init itself is ungated; the follow-up app-open event is not.
        assert_eq!(entries(&journal), vec!["a:init"]);
    }

    #[test]
    fn test_dispatcher_without_adapters_is_inert() {
        let dispatch = dispatcher_of(Vec::new());
        dispatch.init();
        dispatch.set_user(&User::default());
        dispatch.log_payment_success("", &PaymentData::default());
        dispatch.flush();
        assert!(!dispatch.has_strategy("anything"));
    }
}
