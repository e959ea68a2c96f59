//! Postal address attached to customers.

use serde::{Deserialize, Serialize};

use crate::rest::null_as_default;

/// A postal address.
///
/// # Example
///
/// ```rust
/// use creem::rest::resources::Address;
///
/// let address = Address {
///     line1: "1 Market St".to_string(),
///     city: "San Francisco".to_string(),
///     state: "CA".to_string(),
///     postal_code: "94105".to_string(),
///     country: "US".to_string(),
///     ..Default::default()
/// };
/// assert!(address.line2.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Address {
    #[serde(deserialize_with = "null_as_default")]
    pub line1: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub city: String,

    /// State, province or region.
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,

    #[serde(deserialize_with = "null_as_default")]
    pub postal_code: String,

    /// ISO 3166-1 alpha-2 country code.
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_omits_missing_line2() {
        let address = Address {
            line1: "1 Main".to_string(),
            country: "DE".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&address).unwrap();
        assert!(json.get("line2").is_none());
        assert_eq!(json["line1"], "1 Main");
        assert_eq!(json["postal_code"], "");
    }
}
