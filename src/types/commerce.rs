//! Commerce payloads for the checkout and payment operations.

use serde::{Deserialize, Serialize};

use crate::types::Properties;

/// A single line item within a checkout or purchase.
///
/// Every field is optional; backends ignore what they do not understand.
/// Currency-bearing amounts follow ISO 4217 codes on the enclosing payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_variant: Option<String>,
    /// The ID of the list in which the item was presented to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list_id: Option<String>,
    /// The name of the list in which the item was presented to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Payload for `log_begin_checkout`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutData {
    /// Purchase currency in 3-letter ISO 4217 format, e.g. `USD`.
    /// Should accompany [`CheckoutData::value`] when that is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Coupon code for a purchasable item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Additional application-specific attributes.
    #[serde(flatten)]
    pub extra: Properties,
}

/// Payload for `log_payment_success`.
///
/// [`PaymentData::payment_type`] is required by the dispatcher's validation
/// gate; everything else is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentData {
    /// Payment instrument, e.g. `credit_card`. Required.
    #[serde(rename = "type")]
    pub payment_type: String,
    /// A single ID for an ecommerce group transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// A product affiliation such as a supplying company or store location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,
    /// Purchase currency in 3-letter ISO 4217 format, e.g. `USD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    /// Additional application-specific attributes.
    #[serde(flatten)]
    pub extra: Properties,
}

impl PaymentData {
    /// Creates a payment payload with the given instrument type.
    pub fn of_type(payment_type: impl Into<String>) -> Self {
        Self {
            payment_type: payment_type.into(),
            ..Self::default()
        }
    }
}
