//! Merchant account and report shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::null_as_default;

use super::common::Metadata;

/// The merchant account behind the API key.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Account {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// IANA time zone name.
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,

    #[serde(deserialize_with = "null_as_default")]
    pub locale: String,

    /// Default settlement currency.
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
}

/// An asynchronously generated export.
///
/// `url` is set once `status` reaches `completed`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Report {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    /// Report type, serialized as `type`.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    /// Download link, once generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,

    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
