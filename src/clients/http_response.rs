//! HTTP response types for the Creem API SDK.
//!
//! An [`HttpResponse`] is what the pipeline hands to the response binder:
//! status code, lowercase-keyed headers and the fully buffered body.

use std::collections::HashMap;

/// A fully buffered HTTP response.
///
/// # Example
///
/// ```rust
/// use creem::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["req_1".to_string()]);
///
/// let response = HttpResponse::new(201, headers, br#"{"data":{}}"#.to_vec());
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("req_1"));
/// assert_eq!(response.text(), r#"{"data":{}}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response. Header names are normalized to lowercase.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        let headers = headers
            .into_iter()
            .fold(HashMap::new(), |mut acc: HashMap<String, Vec<String>>, (k, v)| {
                acc.entry(k.to_lowercase()).or_default().extend(v);
                acc
            });
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is 2xx.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header, if the service sent one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_range() {
        let ok = |status| HttpResponse::new(status, HashMap::new(), Vec::new()).is_ok();
        assert!(ok(200));
        assert!(ok(201));
        assert!(ok(204));
        assert!(!ok(199));
        assert!(!ok(300));
        assert!(!ok(404));
        assert!(!ok(500));
    }

    #[test]
    fn test_headers_are_normalized_to_lowercase() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), vec!["application/json".to_string()]);
        headers.insert("X-Request-Id".to_string(), vec!["abc".to_string()]);

        let response = HttpResponse::new(200, headers, Vec::new());

        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(response.request_id(), Some("abc"));
        assert!(response.header("retry-after").is_none());
    }

    #[test]
    fn test_text_is_lossy() {
        let response = HttpResponse::new(400, HashMap::new(), vec![b'o', b'k', 0xff]);
        assert_eq!(response.text(), "ok\u{fffd}");
    }
}
