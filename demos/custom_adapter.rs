//! Implements a custom adapter and shows per-adapter failure isolation:
//! a failing backend never blocks its siblings, and the failure itself
//! arrives on the error channel.
//!
//! Run with: `cargo run --example custom_adapter`

use std::sync::Arc;

use telemux::{
    Adapter, AdapterError, Dispatcher, DispatcherConfig, Options, Properties, Registration,
};

/// Counts what it receives, like a metrics backend would.
#[derive(Default)]
struct Counter {
    events: std::sync::atomic::AtomicU64,
    errors: std::sync::atomic::AtomicU64,
}

impl Adapter for Counter {
    fn id(&self) -> Option<&str> {
        Some("counter")
    }

    fn name(&self) -> &'static str {
        "counter"
    }

    fn event(&self, name: &str, _props: Option<&Properties>) -> Result<(), AdapterError> {
        let n = self
            .events
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        println!("counter: event #{} ({name})", n + 1);
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
        self.errors
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        println!("counter: error feature={feature} name={name} critical={critical} err={error}");
        Ok(())
    }
}

/// Simulates a backend that is currently down.
struct Unreachable;

impl Adapter for Unreachable {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    fn event(&self, _name: &str, _props: Option<&Properties>) -> Result<(), AdapterError> {
        Err(AdapterError::msg("connection refused"))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("telemux=debug")),
        )
        .init();

    let dispatch = Dispatcher::new(
        DispatcherConfig::default(),
        vec![
            Registration::enabled(Arc::new(Unreachable)),
            Registration::enabled(Arc::new(Counter::default())),
        ],
    );

    // The unreachable backend fails; the counter still receives the event,
    // plus a critical error report naming the failing operation.
    dispatch.event("user-login", None, Options::default());
    dispatch.flush();
}
