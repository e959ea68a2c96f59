//! Types embedded in several Creem resources.
//!
//! These are not endpoints of their own but appear inside customers, license
//! results and subscription operations.

mod address;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rest::null_as_default;

pub use address::Address;

/// Free-form key/value data attached to an entity, round-tripped verbatim.
pub type Metadata = HashMap<String, serde_json::Value>;

/// The `{success, message}` payload returned by action endpoints such as
/// license activation and subscription cancellation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OperationResult {
    /// Whether the action was applied.
    #[serde(deserialize_with = "null_as_default")]
    pub success: bool,

    /// Explanation from the service.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}
