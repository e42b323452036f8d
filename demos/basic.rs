//! Wires a console-backed dispatcher and walks through the full call surface.
//!
//! Run with: `cargo run --example basic --features console`

use std::sync::Arc;

use telemux::{
    types::{events::UserLogin, tags},
    AdapterError, CheckoutData, ConsoleAdapter, Dispatcher, DispatcherConfig, Options,
    PaymentData, Properties, Registration, User,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("telemux=debug")),
        )
        .init();

    let dispatch = Dispatcher::new(
        DispatcherConfig::default(),
        vec![Registration::enabled(Arc::new(ConsoleAdapter::new()))],
    );

    // init fans out to every adapter, then emits the app-open event.
    dispatch.init();

    let login = UserLogin {
        method: "email".into(),
    };
    dispatch.event(tags::event::USER_LOGIN, Some(&login.to_properties()), Options::default());

    dispatch.set_user(&User::new("u-123").with_name("John Doe").with_email("john@example.com"));

    let mut params = Properties::new();
    params.insert("referrer".into(), "DeepLink".into());
    dispatch.log_screen("HomeScreen", Some(&params));

    dispatch.error(
        "Authentication",
        "login-failed",
        true,
        &AdapterError::msg("invalid token"),
        None,
        Options::default(),
    );

    dispatch.log_begin_checkout(
        "checkout-123",
        &CheckoutData {
            currency: Some("USD".into()),
            value: Some(99.99),
            ..CheckoutData::default()
        },
    );

    let mut payment = PaymentData::of_type("credit_card");
    payment.currency = Some("USD".into());
    payment.affiliation = Some("web-store".into());
    payment.coupon = Some("DISCOUNT10".into());
    dispatch.log_payment_success("checkout-123", &payment);

    dispatch.reset();
    dispatch.flush();
}
