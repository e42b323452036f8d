//! # Simple console adapter for debugging and demos.
//!
//! [`ConsoleAdapter`] prints every call it receives to stdout in a
//! human-readable format. This is primarily useful for development,
//! debugging, and the demo programs.
//!
//! ## Output format
//! ```text
//! [console] init
//! [console] event name=user-login props={"method":"email"}
//! [console] error feature=Authentication name=login-failed critical=true err="bad token"
//! [console] set-user id=u-1
//! [console] flush
//! ```
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use telemux::{ConsoleAdapter, Dispatcher, DispatcherConfig, Registration};
//!
//! let dispatch = Dispatcher::new(
//!     DispatcherConfig::default(),
//!     vec![Registration::enabled(Arc::new(ConsoleAdapter::new()))],
//! );
//! dispatch.init();
//! ```

use serde_json::Value;

use crate::adapters::Adapter;
use crate::error::AdapterError;
use crate::types::{CheckoutData, PaymentData, Properties, User};

/// Stdout adapter, enabled via the `console` feature.
///
/// Not intended for production use - implement a custom [`Adapter`] for real
/// backends. Registry id: `"console"`.
#[derive(Debug, Default)]
pub struct ConsoleAdapter;

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self
    }

    fn json(value: &impl serde::Serialize) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| "<unserializable>".to_string())
    }
}

impl Adapter for ConsoleAdapter {
    fn id(&self) -> Option<&str> {
        Some("console")
    }

    fn name(&self) -> &'static str {
        "console"
    }

    fn init(&self) -> Result<(), AdapterError> {
        println!("[console] init");
        Ok(())
    }

    fn log(&self, name: &str, properties: Option<&Properties>) -> Result<(), AdapterError> {
        match properties {
            Some(props) => println!("[console] log name={name} props={}", Self::json(props)),
            None => println!("[console] log name={name}"),
        }
        Ok(())
    }

    fn event(&self, name: &str, properties: Option<&Properties>) -> Result<(), AdapterError> {
        match properties {
            Some(props) => println!("[console] event name={name} props={}", Self::json(props)),
            None => println!("[console] event name={name}"),
        }
        Ok(())
    }

    fn network(&self, name: &str, properties: Option<&Properties>) -> Result<(), AdapterError> {
        match properties {
            Some(props) => println!("[console] network name={name} props={}", Self::json(props)),
            None => println!("[console] network name={name}"),
        }
        Ok(())
    }

    fn info(
        &self,
        feature: &str,
        name: &str,
        properties: Option<&Value>,
    ) -> Result<(), AdapterError> {
        match properties {
            Some(props) => println!(
                "[console] info feature={feature} name={name} props={}",
                Self::json(props)
            ),
            None => println!("[console] info feature={feature} name={name}"),
        }
        Ok(())
    }

    fn error(
        &self,
        feature: &str,
        name: &str,
        critical: bool,
        error: &(dyn std::error::Error + 'static),
        extra: Option<&Properties>,
    ) -> Result<(), AdapterError> {
        match extra {
            Some(extra) => println!(
                "[console] error feature={feature} name={name} critical={critical} err={error:?} extra={}",
                Self::json(extra)
            ),
            None => println!(
                "[console] error feature={feature} name={name} critical={critical} err={error:?}"
            ),
        }
        Ok(())
    }

    fn reset(&self) -> Result<(), AdapterError> {
        println!("[console] reset");
        Ok(())
    }

    fn log_screen(&self, screen_name: &str, params: Option<&Properties>) -> Result<(), AdapterError> {
        match params {
            Some(params) => println!(
                "[console] screen name={screen_name} params={}",
                Self::json(params)
            ),
            None => println!("[console] screen name={screen_name}"),
        }
        Ok(())
    }

    fn set_user_id(&self, user_id: &str) -> Result<(), AdapterError> {
        println!("[console] set-user-id id={user_id}");
        Ok(())
    }

    fn set_user_property(&self, name: &str, value: &Value) -> Result<(), AdapterError> {
        println!("[console] set-user-property name={name} value={}", Self::json(value));
        Ok(())
    }

    fn set_user(&self, user: &User) -> Result<(), AdapterError> {
        println!("[console] set-user id={} profile={}", user.id, Self::json(user));
        Ok(())
    }

    fn set_user_properties(&self, properties: &Properties) -> Result<(), AdapterError> {
        println!("[console] set-user-properties props={}", Self::json(properties));
        Ok(())
    }

    fn log_begin_checkout(
        &self,
        checkout_id: &str,
        properties: &CheckoutData,
    ) -> Result<(), AdapterError> {
        println!(
            "[console] begin-checkout id={checkout_id} props={}",
            Self::json(properties)
        );
        Ok(())
    }

    fn log_payment_success(
        &self,
        checkout_id: &str,
        properties: &PaymentData,
    ) -> Result<(), AdapterError> {
        println!(
            "[console] payment-success id={checkout_id} props={}",
            Self::json(properties)
        );
        Ok(())
    }

    fn flush(&self) -> Result<(), AdapterError> {
        println!("[console] flush");
        Ok(())
    }
}
