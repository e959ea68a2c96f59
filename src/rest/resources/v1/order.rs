//! Orders, refunds and invoices.
//!
//! The service returns these shapes in webhook payloads and dashboard
//! exports. No endpoint of the current API serves them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::null_as_default;

use super::common::Metadata;

/// A completed purchase.
///
/// See [`constants::order_status`](crate::constants::order_status).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub checkout_session_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_method_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

/// Shape of an order metadata update.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OrderUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Money returned to a buyer against an order.
///
/// See [`constants::refund_status`](crate::constants::refund_status).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Refund {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// The refunded order.
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: String,

    /// Refunded amount in the major currency unit.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,

    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Shape of a refund request. Omitting `amount` refunds the whole order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RefundCreateRequest {
    pub order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// A bill issued to a customer.
///
/// See [`constants::invoice_status`](crate::constants::invoice_status).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Invoice {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    /// Human-readable invoice number.
    #[serde(deserialize_with = "null_as_default")]
    pub number: String,

    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    /// Net amount before tax.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,

    #[serde(deserialize_with = "null_as_default")]
    pub tax_amount: f64,

    /// Amount including tax.
    #[serde(deserialize_with = "null_as_default")]
    pub total_amount: f64,

    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<InvoiceItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

/// One line of an [`Invoice`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InvoiceItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_amount: f64,
}
