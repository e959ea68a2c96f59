//! Stored payment methods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::null_as_default;

use super::common::Metadata;

/// A payment instrument saved for a customer.
///
/// `kind` carries the service's `type` field; see
/// [`constants::payment_method_type`](crate::constants::payment_method_type).
/// Exactly one of `card` and `bank` is normally present.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PaymentMethod {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,

    /// Payment method type, serialized as `type`.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,

    /// Whether this is the customer's default method.
    #[serde(deserialize_with = "null_as_default")]
    pub default: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Display details of a stored card.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Card {
    #[serde(deserialize_with = "null_as_default")]
    pub brand: String,

    /// Last four digits of the card number.
    #[serde(deserialize_with = "null_as_default")]
    pub last4: String,

    #[serde(deserialize_with = "null_as_default")]
    pub exp_month: u8,

    #[serde(deserialize_with = "null_as_default")]
    pub exp_year: u16,

    /// Stable identifier of the card across customers.
    #[serde(deserialize_with = "null_as_default")]
    pub fingerprint: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Display details of a stored bank account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Bank {
    #[serde(deserialize_with = "null_as_default")]
    pub bank_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last4: String,
    #[serde(deserialize_with = "null_as_default")]
    pub routing_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_payment_method_deserializes() {
        let json = r#"{
            "id": "pm_1",
            "customer_id": "cust_1",
            "type": "card",
            "card": {"brand": "visa", "last4": "4242", "exp_month": 12, "exp_year": 2030, "fingerprint": "fp"},
            "default": true
        }"#;

        let method: PaymentMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method.kind, "card");
        assert!(method.default);
        assert!(method.bank.is_none());
        let card = method.card.unwrap();
        assert_eq!(card.last4, "4242");
        assert_eq!(card.exp_year, 2030);
    }
}
