//! Validated newtype wrappers for client credentials.
//!
//! Both credentials are opaque strings issued by Creem. The only local rule is
//! that they are non-empty; anything else is the service's call.

use std::fmt;

use crate::error::{CreemError, Param};

/// A validated Creem API key.
///
/// Sent on every request in the `x-api-key` header.
///
/// # Example
///
/// ```rust
/// use creem::ApiKey;
///
/// let key = ApiKey::new("creem_test_123").unwrap();
/// assert_eq!(key.as_ref(), "creem_test_123");
/// assert!(ApiKey::new("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] with [`Param::ApiKey`] if the
    /// key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, CreemError> {
        let key = key.into();
        if key.is_empty() {
            return Err(CreemError::MissingParameter(Param::ApiKey));
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Creem secret key.
///
/// The key is stored for signed endpoints but is not sent by the current
/// request pipeline. Its `Debug` output is masked.
///
/// # Example
///
/// ```rust
/// use creem::SecretKey;
///
/// let secret = SecretKey::new("whsec_abc").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] with [`Param::SecretKey`] if
    /// the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, CreemError> {
        let key = key.into();
        if key.is_empty() {
            return Err(CreemError::MissingParameter(Param::SecretKey));
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}
