//! Typed payload shapes for the event catalog.
//!
//! Each struct pairs with a tag from [`tags::event`](crate::types::tags::event)
//! and converts into a [`Properties`] bag for fan-out. The pairing is a
//! type-layer convention: the dispatcher itself performs no runtime check
//! that a tag was given its matching shape.
//!
//! # Example
//! ```
//! use telemux::types::events::UserLogin;
//!
//! let payload = UserLogin { method: "email".into() };
//! let props = payload.to_properties();
//! assert_eq!(props["method"], "email");
//! ```

use serde::{Deserialize, Serialize};

use crate::types::Properties;

/// Converts a serializable payload into a property bag.
///
/// Payloads that do not serialize to a JSON object yield an empty bag.
fn properties_of<T: Serialize>(payload: &T) -> Properties {
    match serde_json::to_value(payload) {
        Ok(serde_json::Value::Object(map)) => map,
        _ => Properties::new(),
    }
}

/// Payload for [`tags::event::USER_LOGIN`](crate::types::tags::event::USER_LOGIN).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserLogin {
    pub method: String,
}

/// Payload for [`tags::event::USER_REGISTER`](crate::types::tags::event::USER_REGISTER).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRegister {
    pub method: String,
}

/// Payload for [`tags::event::ADD_TO_CART`](crate::types::tags::event::ADD_TO_CART).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddToCart {
    pub product_id: String,
    pub quantity: u32,
}

/// Payload for [`tags::event::REMOVE_FROM_CART`](crate::types::tags::event::REMOVE_FROM_CART).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoveFromCart {
    pub product_id: String,
    pub quantity: u32,
}

/// Payload for [`tags::event::BEGIN_CHECKOUT`](crate::types::tags::event::BEGIN_CHECKOUT).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeginCheckout {
    pub total: f64,
    pub items: u32,
}

/// Payload for [`tags::event::PURCHASE_COMPLETE`](crate::types::tags::event::PURCHASE_COMPLETE).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseComplete {
    pub order_id: String,
    pub total: f64,
}

impl UserLogin {
    /// Serializes the payload into a property bag for fan-out.
    pub fn to_properties(&self) -> Properties {
        properties_of(self)
    }
}

impl UserRegister {
    /// Serializes the payload into a property bag for fan-out.
    pub fn to_properties(&self) -> Properties {
        properties_of(self)
    }
}

impl AddToCart {
    /// Serializes the payload into a property bag for fan-out.
    pub fn to_properties(&self) -> Properties {
        properties_of(self)
    }
}

impl RemoveFromCart {
    /// Serializes the payload into a property bag for fan-out.
    pub fn to_properties(&self) -> Properties {
        properties_of(self)
    }
}

impl BeginCheckout {
    /// Serializes the payload into a property bag for fan-out.
    pub fn to_properties(&self) -> Properties {
        properties_of(self)
    }
}

impl PurchaseComplete {
    /// Serializes the payload into a property bag for fan-out.
    pub fn to_properties(&self) -> Properties {
        properties_of(self)
    }
}
