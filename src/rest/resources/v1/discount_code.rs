//! Discount code resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Context, CreemClient};
use crate::error::{CreemError, Param};
use crate::rest::{
    bind_data, bind_no_content, null_as_default, path, require, require_positive,
    resource_path, ApiResponse, STATUS_CREATED, STATUS_NO_CONTENT, STATUS_OK,
};

use super::common::Metadata;

/// A redeemable discount.
///
/// `kind` carries the service's `type` field; see
/// [`constants::discount_type`](crate::constants::discount_type). `value` is
/// a percentage or an amount in the major currency unit depending on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DiscountCode {
    /// Unique identifier of the discount code.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// The string buyers enter at checkout.
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,

    /// Discount type, serialized as `type`.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,

    /// Percentage or fixed amount, depending on `kind`.
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,

    /// Redemption limit; zero means unlimited.
    #[serde(deserialize_with = "null_as_default")]
    pub max_uses: u32,

    /// How many times the code has been redeemed.
    #[serde(deserialize_with = "null_as_default")]
    pub used_count: u32,

    /// Whether the code can be redeemed.
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,

    /// Start of the redemption window.
    #[serde(deserialize_with = "null_as_default")]
    pub valid_from: DateTime<Utc>,

    /// End of the redemption window.
    #[serde(deserialize_with = "null_as_default")]
    pub valid_until: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Body of [`CreemClient::create_discount_code`].
///
/// # Example
///
/// ```rust
/// use creem::constants::discount_type;
/// use creem::rest::resources::DiscountCodeCreateRequest;
///
/// let request = DiscountCodeCreateRequest {
///     code: "SPRING25".to_string(),
///     kind: discount_type::PERCENTAGE.to_string(),
///     value: 25.0,
///     ..Default::default()
/// };
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["type"], "percentage");
/// assert!(json.get("valid_until").is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DiscountCodeCreateRequest {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreemClient {
    /// Creates a discount code (`POST /v1/discount-codes`, expects 201).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] for the first failing check:
    /// code, type, value greater than zero.
    pub async fn create_discount_code(
        &self,
        ctx: &Context,
        request: &DiscountCodeCreateRequest,
    ) -> Result<ApiResponse<DiscountCode>, CreemError> {
        require(Param::DiscountCode, &request.code)?;
        require(Param::DiscountType, &request.kind)?;
        require_positive(Param::DiscountValue, request.value)?;
        let response = self.post(ctx, path::DISCOUNT_CODES, request).await?;
        bind_data(&response, STATUS_CREATED)
    }

    /// Retrieves a discount code (`GET /v1/discount-codes/{id}`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `discount_code_id`.
    pub async fn get_discount_code(
        &self,
        ctx: &Context,
        discount_code_id: &str,
    ) -> Result<ApiResponse<DiscountCode>, CreemError> {
        let path = resource_path(path::DISCOUNT_CODES, Param::DiscountCodeId, discount_code_id)?;
        let response = self.get(ctx, &path).await?;
        bind_data(&response, STATUS_OK)
    }

    /// Deletes a discount code (`DELETE /v1/discount-codes/{id}`, expects 204).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `discount_code_id`.
    pub async fn delete_discount_code(
        &self,
        ctx: &Context,
        discount_code_id: &str,
    ) -> Result<ApiResponse<()>, CreemError> {
        let path = resource_path(path::DISCOUNT_CODES, Param::DiscountCodeId, discount_code_id)?;
        let response = self.delete(ctx, &path).await?;
        Ok(bind_no_content(&response, STATUS_NO_CONTENT))
    }
}
