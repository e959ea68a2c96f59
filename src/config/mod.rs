//! Configuration types for the Creem API SDK.
//!
//! # Overview
//!
//! - [`ApiKey`]: A validated API key newtype
//! - [`SecretKey`]: A validated secret key newtype with masked debug output
//! - [`DebugSwitch`]: Toggles DEBUG logging of requests and responses
//! - [`ClientOption`]: Construction-time mutators applied by
//!   [`CreemClient::new`](crate::CreemClient::new)
//!
//! # Example
//!
//! ```rust
//! use creem::{ClientOption, CreemClient};
//!
//! let client = CreemClient::new(
//!     "creem_test_key",
//!     "whsec_secret",
//!     true,
//!     [ClientOption::ProxyUrl("https://creem-proxy.internal".to_string())],
//! )
//! .unwrap();
//!
//! assert_eq!(client.base_url(), "https://creem-proxy.internal");
//! ```

mod newtypes;

use std::fmt;
use std::sync::Arc;

pub use newtypes::{ApiKey, SecretKey};

use crate::clients::HttpEngine;

/// Canonical base URL of the Creem API.
///
/// The service exposes a single environment, so production and non-production
/// clients both use this URL unless a proxy URL is configured.
pub const BASE_URL: &str = "https://api.creem.io";

/// Bytes per megabyte used by [`CreemClient::set_body_size`](crate::CreemClient::set_body_size).
pub const MEGABYTE: usize = 1 << 20;

/// Default maximum response body size (10 MiB).
pub const DEFAULT_BODY_SIZE: usize = 10 * MEGABYTE;

/// Controls DEBUG logging of outgoing requests and incoming responses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DebugSwitch {
    /// No request/response logging.
    #[default]
    Off,
    /// One DEBUG line before and one after each exchange.
    On,
}

impl DebugSwitch {
    /// Returns `true` when logging is enabled.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for DebugSwitch {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}

/// A construction-time mutator for [`CreemClient::new`](crate::CreemClient::new).
///
/// Options are applied in order, so a later option overrides an earlier one.
#[derive(Clone)]
pub enum ClientOption {
    /// Override the base URL (for example to route through a proxy).
    ProxyUrl(String),
    /// Substitute the HTTP engine.
    HttpEngine(Arc<dyn HttpEngine>),
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProxyUrl(url) => f.debug_tuple("ProxyUrl").field(url).finish(),
            Self::HttpEngine(engine) => f.debug_tuple("HttpEngine").field(engine).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_body_size_is_ten_megabytes() {
        assert_eq!(DEFAULT_BODY_SIZE, 10 * 1024 * 1024);
        assert_eq!(MEGABYTE, 1_048_576);
    }

    #[test]
    fn test_debug_switch_defaults_off() {
        assert_eq!(DebugSwitch::default(), DebugSwitch::Off);
        assert!(!DebugSwitch::Off.is_on());
        assert!(DebugSwitch::On.is_on());
        assert_eq!(DebugSwitch::from(true), DebugSwitch::On);
        assert_eq!(DebugSwitch::from(false), DebugSwitch::Off);
    }

    #[test]
    fn test_client_option_debug_output() {
        let option = ClientOption::ProxyUrl("https://proxy".to_string());
        assert_eq!(format!("{option:?}"), r#"ProxyUrl("https://proxy")"#);
    }
}
