//! Customer portal sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{Context, CreemClient};
use crate::error::{CreemError, Param};
use crate::rest::{bind_data, null_as_default, path, require, ApiResponse, STATUS_CREATED};

/// A short-lived link into the self-service customer portal.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerPortalSession {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// The customer the portal is opened for.
    #[serde(deserialize_with = "null_as_default")]
    pub customer_id: String,

    /// Link to send the customer to.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    /// When `url` stops working.
    #[serde(deserialize_with = "null_as_default")]
    pub expires_at: DateTime<Utc>,
}

/// Body of [`CreemClient::create_customer_portal_session`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerPortalCreateRequest {
    pub customer_id: String,
    pub return_url: String,
}

impl CreemClient {
    /// Opens a portal session (`POST /v1/customer-portal/sessions`, expects 201).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] if `customer_id` or
    /// `return_url` is empty, checked in that order.
    pub async fn create_customer_portal_session(
        &self,
        ctx: &Context,
        request: &CustomerPortalCreateRequest,
    ) -> Result<ApiResponse<CustomerPortalSession>, CreemError> {
        require(Param::CustomerId, &request.customer_id)?;
        require(Param::ReturnUrl, &request.return_url)?;
        let response = self.post(ctx, path::CUSTOMER_PORTAL_SESSIONS, request).await?;
        bind_data(&response, STATUS_CREATED)
    }
}
