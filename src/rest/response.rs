//! Typed responses and the response binder.
//!
//! Every resource method returns an [`ApiResponse<T>`]. A response whose
//! status matches the endpoint's expected success status has `code == 0`;
//! any other status is reported in-band with `code`, the raw `error` body and
//! a best-effort [`ErrorResponse`]. Only a body that is not JSON at all turns
//! into a language-level [`CreemError::Unmarshal`].
//!
//! # Deref Pattern
//!
//! `ApiResponse<T>` implements `Deref<Target = T>`, so the decoded payload
//! can be used directly:
//!
//! ```rust
//! use creem::rest::{bind_data, ListPage};
//! use creem::rest::resources::Product;
//! use creem::clients::HttpResponse;
//! use std::collections::HashMap;
//!
//! let body = br#"{"data":[{"id":"prod_1","name":"Pro"}],"total_count":1,"page":1,"limit":10}"#;
//! let raw = HttpResponse::new(200, HashMap::new(), body.to_vec());
//!
//! let response = creem::rest::bind::<ListPage<Product>>(&raw, 200).unwrap();
//! assert!(response.is_success());
//! assert_eq!(response.items[0].name, "Pro");
//! assert_eq!(response.total_count, 1);
//! # let _ = bind_data::<Product>;
//! ```
//!
//! # Handling a rejection
//!
//! ```rust
//! use creem::rest::bind_data;
//! use creem::rest::resources::Product;
//! use creem::clients::HttpResponse;
//! use std::collections::HashMap;
//!
//! let body = br#"{"error":"not_found","message":"no such product","code":"E_404"}"#;
//! let raw = HttpResponse::new(404, HashMap::new(), body.to_vec());
//!
//! let response = bind_data::<Product>(&raw, 200).unwrap();
//! assert_eq!(response.code, 404);
//! assert_eq!(response.error_message(), Some("no such product"));
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

use crate::clients::HttpResponse;
use crate::constants::SUCCESS;
use crate::error::CreemError;

/// The error envelope the service returns on rejection.
///
/// Every field defaults to empty, so any JSON object decodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// Machine-readable error kind, such as `not_found`.
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,

    /// Human-readable explanation.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,

    /// Service-specific error code.
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
}

/// A decoded response from a resource method.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse<T> {
    /// `0` when the service answered with the expected status, otherwise the
    /// HTTP status.
    pub code: u16,

    /// The raw body on failure, empty on success.
    pub error: String,

    /// The decoded error envelope on failure, `None` on success.
    pub error_response: Option<ErrorResponse>,

    /// The payload decoded from the success shape. On failure it usually
    /// holds defaults.
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn classify(response: &HttpResponse, expected: u16, data: T) -> Self {
        if response.status == expected {
            return Self {
                code: SUCCESS,
                error: String::new(),
                error_response: None,
                data,
            };
        }

        let error_response = serde_json::from_slice(&response.body).unwrap_or_default();
        Self {
            code: response.status,
            error: response.text(),
            error_response: Some(error_response),
            data,
        }
    }

    /// Returns `true` if the service answered with the expected status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == SUCCESS
    }

    /// Returns the message to show for a rejected request.
    ///
    /// Prefers `error_response.message`, falls back to the raw `error` body,
    /// and returns `None` on success.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        if self.is_success() {
            return None;
        }
        self.error_response
            .as_ref()
            .map(|e| e.message.as_str())
            .filter(|m| !m.is_empty())
            .or(Some(self.error.as_str()))
    }

    /// Transforms the payload, keeping the status fields.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            code: self.code,
            error: self.error,
            error_response: self.error_response,
            data: f(self.data),
        }
    }

    /// Consumes the response and returns the payload.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

/// The `{"data": …}` wrapper around single-object payloads.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct DataEnvelope<T> {
    /// The wrapped payload. `null` or a missing key decodes to the default.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: T,
}

/// One page of a list endpoint.
///
/// The items arrive under the `data` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListPage<T> {
    /// The entries on this page.
    #[serde(rename = "data", deserialize_with = "null_as_default")]
    pub items: Vec<T>,

    /// Number of entries across all pages.
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: u64,

    /// The 1-based page number the service returned.
    #[serde(deserialize_with = "null_as_default")]
    pub page: u32,

    /// The page size the service applied.
    #[serde(deserialize_with = "null_as_default")]
    pub limit: u32,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page: 0,
            limit: 0,
        }
    }
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes `response` into `T` and classifies it against `expected`.
///
/// # Errors
///
/// Returns [`CreemError::Unmarshal`] if the body is not valid JSON for `T`.
pub fn bind<T: DeserializeOwned>(
    response: &HttpResponse,
    expected: u16,
) -> Result<ApiResponse<T>, CreemError> {
    let data = serde_json::from_slice(&response.body).map_err(|source| CreemError::Unmarshal {
        source,
        body: response.text(),
    })?;
    Ok(ApiResponse::classify(response, expected, data))
}

/// Like [`bind`], unwrapping the `{"data": …}` envelope.
///
/// # Errors
///
/// Returns [`CreemError::Unmarshal`] if the body is not valid JSON for the
/// envelope.
pub fn bind_data<T: DeserializeOwned + Default>(
    response: &HttpResponse,
    expected: u16,
) -> Result<ApiResponse<T>, CreemError> {
    Ok(bind::<DataEnvelope<T>>(response, expected)?.map(|envelope| envelope.data))
}

/// Classifies a response whose success body is empty.
///
/// The body is only inspected when the status differs from `expected`.
#[must_use]
pub fn bind_no_content(response: &HttpResponse, expected: u16) -> ApiResponse<()> {
    ApiResponse::classify(response, expected, ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Thing {
        id: String,
        amount: f64,
    }

    fn raw(status: u16, body: &str) -> HttpResponse {
        HttpResponse::new(status, HashMap::new(), body.as_bytes().to_vec())
    }

    #[test]
    fn test_success_status_clears_error_fields() {
        let response = bind_data::<Thing>(&raw(201, r#"{"data":{"id":"t_1","amount":9.99}}"#), 201)
            .unwrap();

        assert_eq!(response.code, 0);
        assert!(response.error.is_empty());
        assert!(response.error_response.is_none());
        assert_eq!(response.id, "t_1");
        assert!((response.amount - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unexpected_status_carries_body_and_envelope() {
        let body = r#"{"error":"bad_request","message":"invalid product","code":"E_INVALID"}"#;
        let response = bind_data::<Thing>(&raw(400, body), 201).unwrap();

        assert_eq!(response.code, 400);
        assert_eq!(response.error, body);
        let envelope = response.error_response.as_ref().unwrap();
        assert_eq!(envelope.error, "bad_request");
        assert_eq!(envelope.message, "invalid product");
        assert_eq!(envelope.code, "E_INVALID");
        assert_eq!(response.data, Thing::default());
    }

    #[test]
    fn test_non_json_error_envelope_is_empty_but_present() {
        let response = bind::<serde_json::Value>(&raw(500, "[1,2]"), 200).unwrap();
        assert_eq!(response.code, 500);
        assert_eq!(response.error_response, Some(ErrorResponse::default()));
        assert_eq!(response.error_message(), Some("[1,2]"));
    }

    #[test]
    fn test_invalid_json_is_unmarshal_error() {
        let result = bind_data::<Thing>(&raw(200, "<html>oops</html>"), 200);
        match result {
            Err(CreemError::Unmarshal { body, .. }) => assert_eq!(body, "<html>oops</html>"),
            other => panic!("expected Unmarshal, got {other:?}"),
        }
    }

    #[test]
    fn test_null_data_decodes_to_default() {
        let response = bind_data::<Thing>(&raw(200, r#"{"data":null}"#), 200).unwrap();
        assert_eq!(response.data, Thing::default());
    }

    #[test]
    fn test_list_page_decodes_metadata() {
        let body = r#"{"data":[{"id":"a"},{"id":"b"}],"total_count":7,"page":2,"limit":2}"#;
        let response = bind::<ListPage<Thing>>(&raw(200, body), 200).unwrap();

        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[1].id, "b");
        assert_eq!(response.total_count, 7);
        assert_eq!(response.page, 2);
        assert_eq!(response.limit, 2);
    }

    #[test]
    fn test_null_list_metadata_and_envelope_fields_decode_to_defaults() {
        let body = r#"{"data":null,"total_count":null,"page":null,"limit":null}"#;
        let response = bind::<ListPage<Thing>>(&raw(200, body), 200).unwrap();
        assert_eq!(response.data, ListPage::default());

        let body = r#"{"error":"conflict","message":null,"code":null}"#;
        let response = bind_no_content(&raw(409, body), 204);
        let envelope = response.error_response.as_ref().unwrap();
        assert_eq!(envelope.error, "conflict");
        assert!(envelope.message.is_empty());
        assert_eq!(response.error_message(), Some(body));
    }

    #[test]
    fn test_no_content_skips_decode() {
        let response = bind_no_content(&raw(204, ""), 204);
        assert!(response.is_success());

        let response = bind_no_content(&raw(404, r#"{"error":"not_found"}"#), 204);
        assert_eq!(response.code, 404);
        assert_eq!(response.error_response.unwrap().error, "not_found");
    }

    #[test]
    fn test_error_message_prefers_envelope_message() {
        let response = bind_no_content(&raw(422, r#"{"message":"too short"}"#), 204);
        assert_eq!(response.error_message(), Some("too short"));

        let response = bind_no_content(&raw(502, "bad gateway"), 204);
        assert_eq!(response.error_message(), Some("bad gateway"));

        let response = bind_no_content(&raw(204, ""), 204);
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn test_map_keeps_status_fields() {
        let response = bind_no_content(&raw(409, "{}"), 204).map(|()| 5);
        assert_eq!(response.code, 409);
        assert_eq!(response.data, 5);
    }
}
