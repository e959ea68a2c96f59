//! License key validation, activation and deactivation.

use serde::{Deserialize, Serialize};

use crate::clients::{Context, CreemClient};
use crate::error::{CreemError, Param};
use crate::rest::{bind_data, null_as_default, path, require, ApiResponse, STATUS_OK};

use super::common::OperationResult;

/// Body of [`CreemClient::validate_license`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LicenseValidateRequest {
    pub license_key: String,
}

/// Body of [`CreemClient::activate_license`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LicenseActivateRequest {
    pub license_key: String,
    pub customer_id: String,
}

/// Body of [`CreemClient::deactivate_license`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LicenseDeactivateRequest {
    pub license_key: String,
}

/// Result of a license check.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LicenseValidation {
    /// Whether the key is currently valid.
    #[serde(deserialize_with = "null_as_default")]
    pub valid: bool,

    /// Explanation from the service.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,

    /// The customer the key is bound to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

impl CreemClient {
    /// Checks a license key (`POST /v1/licenses/validate`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] if `license_key` is empty.
    pub async fn validate_license(
        &self,
        ctx: &Context,
        request: &LicenseValidateRequest,
    ) -> Result<ApiResponse<LicenseValidation>, CreemError> {
        require(Param::LicenseKey, &request.license_key)?;
        let response = self.post(ctx, path::LICENSE_VALIDATE, request).await?;
        bind_data(&response, STATUS_OK)
    }

    /// Activates a license key for a customer (`POST /v1/licenses/activate`,
    /// expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] if `license_key` or
    /// `customer_id` is empty, checked in that order.
    pub async fn activate_license(
        &self,
        ctx: &Context,
        request: &LicenseActivateRequest,
    ) -> Result<ApiResponse<OperationResult>, CreemError> {
        require(Param::LicenseKey, &request.license_key)?;
        require(Param::CustomerId, &request.customer_id)?;
        let response = self.post(ctx, path::LICENSE_ACTIVATE, request).await?;
        bind_data(&response, STATUS_OK)
    }

    /// Deactivates a license key (`POST /v1/licenses/deactivate`, expects 200).
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] if `license_key` is empty.
    pub async fn deactivate_license(
        &self,
        ctx: &Context,
        request: &LicenseDeactivateRequest,
    ) -> Result<ApiResponse<OperationResult>, CreemError> {
        require(Param::LicenseKey, &request.license_key)?;
        let response = self.post(ctx, path::LICENSE_DEACTIVATE, request).await?;
        bind_data(&response, STATUS_OK)
    }
}
