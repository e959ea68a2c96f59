//! Transaction listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Context, CreemClient};
use crate::error::CreemError;
use crate::rest::{
    bind, null_as_default, path, ApiResponse, ListPage, ListParams, ListScope, STATUS_OK,
};

use super::common::Metadata;

/// A payment attempt against a checkout session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Transaction {
    /// Unique identifier of the transaction.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// The checkout session that produced it.
    #[serde(deserialize_with = "null_as_default")]
    pub checkout_session_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub product_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,

    /// Payment state; see [`constants::payment_status`](crate::constants::payment_status).
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    /// Amount in the major currency unit.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,

    /// ISO 4217 currency code.
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

    /// When the payment settled; absent while unpaid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl CreemClient {
    /// Lists transactions (`GET /v1/transactions`, expects 200).
    ///
    /// Every field of `params` that is set is sent, with dates formatted as
    /// `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns transport and decode failures as described on [`CreemError`].
    pub async fn list_transactions(
        &self,
        ctx: &Context,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<ListPage<Transaction>>, CreemError> {
        let path = params
            .cloned()
            .unwrap_or_default()
            .append_to(path::TRANSACTIONS, ListScope::Full);
        let response = self.get(ctx, &path).await?;
        bind(&response, STATUS_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaid_transaction_has_no_paid_at() {
        let json = r#"{"id":"tx_1","status":"pending","amount":12.5,"currency":"EUR"}"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert!(transaction.paid_at.is_none());
        assert!((transaction.amount - 12.5).abs() < f64::EPSILON);

        let back = serde_json::to_value(&transaction).unwrap();
        assert!(back.get("paid_at").is_none());
    }
}
