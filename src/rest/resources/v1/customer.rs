//! Customer resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Context, CreemClient};
use crate::error::{CreemError, Param};
use crate::rest::{
    bind, bind_data, bind_no_content, null_as_default, path, require, resource_path,
    ApiResponse, ListPage, ListParams, ListScope, STATUS_CREATED, STATUS_NO_CONTENT, STATUS_OK,
};

use super::common::{Address, Metadata};

/// A buyer known to the merchant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Customer {
    /// Unique identifier of the customer.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Contact and receipt address.
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,

    /// Full name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// Body of [`CreemClient::create_customer`]. `email` and `name` are required.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CustomerCreateRequest {
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Body of [`CreemClient::update_customer`]. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CustomerUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreemClient {
    /// Creates a customer (`POST /v1/customers`, expects 201).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] if `email` or `name` is
    /// empty, checked in that order.
    pub async fn create_customer(
        &self,
        ctx: &Context,
        request: &CustomerCreateRequest,
    ) -> Result<ApiResponse<Customer>, CreemError> {
        require(Param::Email, &request.email)?;
        require(Param::Name, &request.name)?;
        let response = self.post(ctx, path::CUSTOMERS, request).await?;
        bind_data(&response, STATUS_CREATED)
    }

    /// Retrieves a customer (`GET /v1/customers/{id}`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `customer_id`.
    pub async fn get_customer(
        &self,
        ctx: &Context,
        customer_id: &str,
    ) -> Result<ApiResponse<Customer>, CreemError> {
        let path = resource_path(path::CUSTOMERS, Param::CustomerId, customer_id)?;
        let response = self.get(ctx, &path).await?;
        bind_data(&response, STATUS_OK)
    }

    /// Updates a customer (`PUT /v1/customers/{id}`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `customer_id`.
    pub async fn update_customer(
        &self,
        ctx: &Context,
        customer_id: &str,
        request: &CustomerUpdateRequest,
    ) -> Result<ApiResponse<Customer>, CreemError> {
        let path = resource_path(path::CUSTOMERS, Param::CustomerId, customer_id)?;
        let response = self.put(ctx, &path, request).await?;
        bind_data(&response, STATUS_OK)
    }

    /// Deletes a customer (`DELETE /v1/customers/{id}`, expects 204).
    ///
    /// The success body is empty and is not decoded.
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] or
    /// [`CreemError::InvalidParameter`] for a bad `customer_id`.
    pub async fn delete_customer(
        &self,
        ctx: &Context,
        customer_id: &str,
    ) -> Result<ApiResponse<()>, CreemError> {
        let path = resource_path(path::CUSTOMERS, Param::CustomerId, customer_id)?;
        let response = self.delete(ctx, &path).await?;
        Ok(bind_no_content(&response, STATUS_NO_CONTENT))
    }

    /// Lists customers (`GET /v1/customers`, expects 200).
    ///
    /// Only `page`, `limit` and `status` of `params` are sent.
    ///
    /// # Errors
    ///
    /// Returns transport and decode failures as described on [`CreemError`].
    pub async fn list_customers(
        &self,
        ctx: &Context,
        params: Option<&ListParams>,
    ) -> Result<ApiResponse<ListPage<Customer>>, CreemError> {
        let path = params
            .cloned()
            .unwrap_or_default()
            .append_to(path::CUSTOMERS, ListScope::Basic);
        let response = self.get(ctx, &path).await?;
        bind(&response, STATUS_OK)
    }
}
