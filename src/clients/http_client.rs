//! HTTP engine abstraction and the default reqwest-backed engine.
//!
//! The request pipeline never talks to the network directly. It hands a
//! prepared [`HttpRequest`] to an [`HttpEngine`] and receives a fully
//! buffered [`HttpResponse`]. The default engine is [`ReqwestEngine`];
//! tests and applications with special transport needs can install their own
//! via [`ClientOption::HttpEngine`](crate::config::ClientOption::HttpEngine)
//! or [`CreemClient::set_http_engine`](crate::CreemClient::set_http_engine).

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` sent by [`ReqwestEngine`].
///
/// A custom `User-Agent` request header set on the client takes precedence.
pub const USER_AGENT: &str = concat!(
    "Creem API Rust SDK v",
    env!("CARGO_PKG_VERSION"),
    " | Rust ",
    env!("CARGO_PKG_RUST_VERSION")
);

/// Performs a single HTTP request/response exchange.
///
/// Implementations must be safe to call concurrently and must buffer the
/// whole response body, failing with [`TransportError::BodyTooLarge`] once
/// more than [`HttpRequest::max_body_size`] bytes arrive.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use creem::clients::{HttpEngine, HttpRequest, HttpResponse, TransportError};
/// use std::collections::HashMap;
///
/// #[derive(Debug)]
/// struct AlwaysCreated;
///
/// #[async_trait]
/// impl HttpEngine for AlwaysCreated {
///     async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
///         Ok(HttpResponse::new(201, HashMap::new(), br#"{"data":{}}"#.to_vec()))
///     }
/// }
/// ```
#[async_trait]
pub trait HttpEngine: Send + Sync + std::fmt::Debug {
    /// Sends `request` and returns the buffered response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// [`HttpEngine`] backed by a `reqwest::Client` using rustls.
///
/// No request timeout is configured; deadlines come from the per-call
/// [`Context`](crate::clients::Context).
#[derive(Clone, Debug)]
pub struct ReqwestEngine {
    client: reqwest::Client,
}

// Verify ReqwestEngine is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestEngine>();
};

impl ReqwestEngine {
    /// Creates an engine with a fresh rustls-backed reqwest client that
    /// identifies itself with [`USER_AGENT`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Request`] if the TLS backend cannot be
    /// initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client, sharing its connection pool.
    ///
    /// The client's own `User-Agent` configuration is kept.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    const fn method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    fn build_headers(pairs: &[(String, String)]) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::with_capacity(pairs.len());
        for (name, value) in pairs {
            let invalid = || TransportError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(headers: &HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[async_trait]
impl HttpEngine for ReqwestEngine {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let headers = Self::build_headers(&request.headers)?;
        let limit = request.max_body_size;

        let mut builder = self
            .client
            .request(Self::method(request.method), &request.url)
            .headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let mut res = builder.send().await?;

        let status = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());

        if res
            .content_length()
            .is_some_and(|len| usize::try_from(len).map_or(true, |len| len > limit))
        {
            return Err(TransportError::BodyTooLarge { limit });
        }

        let mut body = Vec::new();
        while let Some(chunk) = res.chunk().await? {
            if body.len() + chunk.len() > limit {
                return Err(TransportError::BodyTooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(HttpResponse::new(status, res_headers, body))
    }
}
