//! Demonstrates the minimum-level gate: routine calls are suppressed once
//! the threshold is raised, while errors keep flowing.
//!
//! Run with: `cargo run --example level_gate --features console`

use std::sync::Arc;

use telemux::{
    AdapterError, ConsoleAdapter, Dispatcher, DispatcherConfig, Level, Options, Registration,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("telemux=trace")),
        )
        .init();

    let dispatch = Dispatcher::new(
        DispatcherConfig::default(),
        vec![Registration::enabled(Arc::new(ConsoleAdapter::new()))],
    );

    println!("--- min level: info (default) ---");
    dispatch.log("app_start", None, Options::default());
    dispatch.debug("Startup", "config-loaded", None); // below info, skipped

    println!("--- min level: warn ---");
    dispatch.set_min_level(Level::Warn);
    dispatch.log("app_foreground", None, Options::default()); // skipped
    dispatch.warn("Network", "slow-response", None);
    dispatch.error(
        "Network",
        "request-failed",
        false,
        &AdapterError::msg("timeout"),
        None,
        Options::default(),
    );

    println!("--- min level: fatal ---");
    dispatch.set_min_level(Level::Fatal);
    dispatch.error(
        "Network",
        "request-failed",
        false,
        &AdapterError::msg("timeout"),
        None,
        Options::default(),
    ); // below fatal, skipped
    dispatch.fatal("Storage", "corrupt-database", &AdapterError::msg("bad page"), None);
}
