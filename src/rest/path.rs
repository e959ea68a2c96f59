//! Endpoint paths, id validation and list query strings.
//!
//! Ids are interpolated into path templates without escaping. The service
//! issues ids over a URL-safe alphabet, so [`validate_id`] rejects anything
//! containing `/`, `?`, `#` or whitespace before a request is built.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use creem::rest::ListParams;
//!
//! let params = ListParams::new()
//!     .page(2)
//!     .limit(50)
//!     .status("completed")
//!     .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .end_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "end_date=2024-01-31&limit=50&page=2&start_date=2024-01-01&status=completed"
//! );
//! ```

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CreemError, Param};

pub(crate) const CHECKOUT_SESSIONS: &str = "/v1/checkout-sessions";
pub(crate) const PRODUCTS: &str = "/v1/products";
pub(crate) const CUSTOMERS: &str = "/v1/customers";
pub(crate) const CUSTOMER_PORTAL_SESSIONS: &str = "/v1/customer-portal/sessions";
pub(crate) const TRANSACTIONS: &str = "/v1/transactions";
pub(crate) const LICENSE_VALIDATE: &str = "/v1/licenses/validate";
pub(crate) const LICENSE_ACTIVATE: &str = "/v1/licenses/activate";
pub(crate) const LICENSE_DEACTIVATE: &str = "/v1/licenses/deactivate";
pub(crate) const DISCOUNT_CODES: &str = "/v1/discount-codes";
pub(crate) const SUBSCRIPTIONS: &str = "/v1/subscriptions";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks that `id` can be interpolated into a path template.
///
/// # Errors
///
/// Returns [`CreemError::MissingParameter`] if `id` is empty and
/// [`CreemError::InvalidParameter`] if it contains `/`, `?`, `#` or
/// whitespace.
///
/// # Example
///
/// ```rust
/// use creem::rest::validate_id;
/// use creem::{CreemError, Param};
///
/// assert!(validate_id(Param::ProductId, "prod_123").is_ok());
/// assert!(matches!(
///     validate_id(Param::ProductId, ""),
///     Err(CreemError::MissingParameter(Param::ProductId))
/// ));
/// assert!(validate_id(Param::ProductId, "../admin").is_err());
/// ```
pub fn validate_id(param: Param, id: &str) -> Result<&str, CreemError> {
    if id.is_empty() {
        return Err(CreemError::MissingParameter(param));
    }
    if id
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
    {
        return Err(CreemError::InvalidParameter {
            param,
            value: id.to_string(),
        });
    }
    Ok(id)
}

/// Builds `{base}/{id}` after validating `id`.
pub(crate) fn resource_path(base: &str, param: Param, id: &str) -> Result<String, CreemError> {
    Ok(format!("{base}/{}", validate_id(param, id)?))
}

/// Which filter keys a list endpoint accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ListScope {
    /// `page`, `limit` and `status` only.
    Basic,
    /// Every filter key.
    Full,
}

/// Pagination and filters for list endpoints.
///
/// Unset fields are left out of the query string. Product and customer lists
/// send only `page`, `limit` and `status`; transaction lists send every
/// field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl ListParams {
    /// Creates empty parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the 1-based page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    #[must_use]
    pub fn product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Returns the form-encoded query string with every set field, keys in
    /// alphabetical order.
    ///
    /// A page or limit of zero and empty strings count as unset.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.query(ListScope::Full)
    }

    pub(crate) fn query(&self, scope: ListScope) -> String {
        let mut pairs: BTreeMap<&'static str, String> = BTreeMap::new();

        let numbers = [("page", self.page), ("limit", self.limit)];
        for (key, value) in numbers {
            if let Some(value) = value.filter(|v| *v > 0) {
                pairs.insert(key, value.to_string());
            }
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            pairs.insert("status", status.to_string());
        }

        if scope == ListScope::Full {
            let ids = [
                ("customer_id", self.customer_id.as_deref()),
                ("product_id", self.product_id.as_deref()),
            ];
            for (key, value) in ids {
                if let Some(value) = value.filter(|v| !v.is_empty()) {
                    pairs.insert(key, value.to_string());
                }
            }
            let dates = [("start_date", self.start_date), ("end_date", self.end_date)];
            for (key, value) in dates {
                if let Some(date) = value {
                    pairs.insert(key, date.format(DATE_FORMAT).to_string());
                }
            }
        }

        pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", form_encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns `base`, followed by `?query` when any field is set.
    pub(crate) fn append_to(&self, base: &str, scope: ListScope) -> String {
        let query = self.query(scope);
        if query.is_empty() {
            base.to_string()
        } else {
            format!("{base}?{query}")
        }
    }
}

/// Form-url-encodes a query value (spaces become `+`).
fn form_encode(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}
