//! Product resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Context, CreemClient};
use crate::error::{CreemError, Param};
use crate::rest::{
    bind, bind_data, null_as_default, path, require, require_positive, resource_path,
    ApiResponse, ListPage, ListParams, ListScope, STATUS_CREATED, STATUS_OK,
};

use super::common::Metadata;

/// Something a merchant sells.
///
/// `kind` carries the service's `type` field; see
/// [`constants::product_type`](crate::constants::product_type).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Product {
    /// Unique identifier of the product.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    /// Long description shown at checkout.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,

    /// Product type, serialized as `type`.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,

    /// Unit price in the major currency unit.
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,

    /// ISO 4217 currency code.
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,

    /// Whether the product can be bought.
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Body of [`CreemClient::create_product`].
///
/// `name`, `description`, `kind` and `currency` must be non-empty and
/// `price` must be greater than zero.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProductCreateRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
    pub currency: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Changes to a product. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProductUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ProductCreateRequest {
    fn validate(&self) -> Result<(), CreemError> {
        require(Param::Name, &self.name)?;
        require(Param::Description, &self.description)?;
        require(Param::ProductType, &self.kind)?;
        require_positive(Param::Price, self.price)?;
        require(Param::Currency, &self.currency)
    }
}

impl CreemClient {
    /// Creates a product (`POST /v1/products`, expects 201).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] for the first failing check:
    /// name, description, type, price, currency.
    pub async fn create_product(
        &self,
        ctx: &Context,
        request: &ProductCreateRequest,
    ) -> Result<ApiResponse<Product>, CreemError> {
        request.validate()?;
        let response = self.post(ctx, path::PRODUCTS, request).await?;
        bind_data(&response, STATUS_CREATED)
    }

    /// Retrieves a product (`GET /v1/products/{id}`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `product_id`.
    pub async fn get_product(
        &self,
        ctx: &Context,
        product_id: &str,
    ) -> Result<ApiResponse<Product>, CreemError> {
        let path = resource_path(path::PRODUCTS, Param::ProductId, product_id)?;
        let response = self.get(ctx, &path).await?;
        bind_data(&response, STATUS_OK)
    }

    /// Lists products (`GET /v1/products`, expects 200).
    ///
    /// Only `page`, `limit` and `status` of `params` are sent.
    ///
    /// # Errors
    ///
    /// Returns transport and decode failures as described on [`CreemError`].
    pub async fn list_products(
        &self,
        ctx: &Context,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<ListPage<Product>>, CreemError> {
        let path = params
            .cloned()
            .unwrap_or_default()
            .append_to(path::PRODUCTS, ListScope::Basic);
        let response = self.get(ctx, &path).await?;
        bind(&response, STATUS_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{currency, product_type};

    fn valid_request() -> ProductCreateRequest {
        ProductCreateRequest {
            name: "Pro plan".to_string(),
            description: "Everything".to_string(),
            kind: product_type::RECURRING.to_string(),
            price: 9.99,
            currency: currency::USD.to_string(),
            active: true,
            metadata: None,
        }
    }

    #[test]
    fn test_validation_order() {
        assert!(valid_request().validate().is_ok());

        let mut request = valid_request();
        request.price = 0.0;
        request.currency.clear();
        assert!(matches!(
            request.validate(),
            Err(CreemError::MissingParameter(Param::Price))
        ));

        let mut request = valid_request();
        request.kind.clear();
        assert!(matches!(
            request.validate(),
            Err(CreemError::MissingParameter(Param::ProductType))
        ));
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let json = serde_json::to_value(valid_request()).unwrap();
        assert_eq!(json["type"], "recurring");
        assert!(json.get("kind").is_none());
        assert!(json.get("metadata").is_none());
    }

    #[test]
    fn test_price_keeps_decimal_precision() {
        let json = serde_json::to_string(&valid_request()).unwrap();
        assert!(json.contains(r#""price":9.99"#));
        let back: ProductCreateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, valid_request());
    }
}
