//! The Creem client context and its request pipeline.
//!
//! [`CreemClient`] owns the credentials and the mutable per-tenant settings
//! (base URL, debug switch, custom headers, HTTP engine, logger, body limit).
//! Every resource method funnels through [`CreemClient::exchange`], which
//! builds the request, attaches the mandatory headers, races the engine
//! against the caller's [`Context`] and returns the raw response.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::clients::{
    Context, HttpEngine, HttpMethod, HttpRequest, HttpResponse, Logger, ReqwestEngine,
    TracingLogger, TransportError,
};
use crate::config::{ApiKey, ClientOption, DebugSwitch, SecretKey, BASE_URL, DEFAULT_BODY_SIZE, MEGABYTE};
use crate::constants::{CONTENT_TYPE_JSON, HEADER_API_KEY, HEADER_CONTENT_TYPE};
use crate::error::CreemError;

/// Mutable client settings, guarded by the client's lock.
#[derive(Clone, Debug)]
struct Settings {
    base_url: String,
    debug: DebugSwitch,
    headers: BTreeMap<String, String>,
    engine: Arc<dyn HttpEngine>,
    logger: Arc<dyn Logger>,
    max_body_size: usize,
}

/// Client for the Creem REST API.
///
/// One client is meant to be shared by many concurrent callers, typically
/// behind an `Arc`. Setters take `&self` and are guarded by a read/write
/// lock; a request snapshots the settings before it goes out, so changing a
/// setting never affects an exchange already in flight.
///
/// # Thread Safety
///
/// `CreemClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use creem::{CreemClient, DebugSwitch};
///
/// let client = CreemClient::new("creem_test_key", "whsec_secret", true, []).unwrap();
/// client.set_debug_switch(DebugSwitch::On);
/// client.set_request_header("X-Tenant", Some("acme"));
///
/// assert_eq!(client.base_url(), "https://api.creem.io");
/// assert_eq!(client.request_headers().get("X-Tenant").map(String::as_str), Some("acme"));
/// ```
#[derive(Debug)]
pub struct CreemClient {
    api_key: ApiKey,
    secret_key: SecretKey,
    is_prod: bool,
    settings: RwLock<Settings>,
}

// Verify CreemClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CreemClient>();
};

impl CreemClient {
    /// Creates a new client.
    ///
    /// No network I/O happens here. Options are applied in order after the
    /// defaults are established (canonical base URL, reqwest engine, tracing
    /// logger, 10 MiB body limit, debug off, no custom headers).
    ///
    /// `is_prod` is retained for callers that track their environment; both
    /// values talk to the same base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::MissingParameter`] if either key is empty, or
    /// [`CreemError::Http`] if the default engine cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        is_prod: bool,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self, CreemError> {
        let api_key = ApiKey::new(api_key)?;
        let secret_key = SecretKey::new(secret_key)?;

        let mut base_url = BASE_URL.to_string();
        let mut engine: Option<Arc<dyn HttpEngine>> = None;
        for option in options {
            match option {
                ClientOption::ProxyUrl(url) => {
                    tracing::debug!("Creem client overriding base URL {} with {}", base_url, url);
                    base_url = url;
                }
                ClientOption::HttpEngine(custom) => {
                    tracing::debug!("Creem client using custom HTTP engine {:?}", custom);
                    engine = Some(custom);
                }
            }
        }
        let engine = match engine {
            Some(engine) => engine,
            None => Arc::new(ReqwestEngine::new()?),
        };

        Ok(Self {
            api_key,
            secret_key,
            is_prod,
            settings: RwLock::new(Settings {
                base_url,
                debug: DebugSwitch::Off,
                headers: BTreeMap::new(),
                engine,
                logger: Arc::new(TracingLogger),
                max_body_size: DEFAULT_BODY_SIZE,
            }),
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, Settings> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Settings> {
        self.settings.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the secret key. It is stored but not sent by any endpoint.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the production flag passed at construction.
    #[must_use]
    pub const fn is_prod(&self) -> bool {
        self.is_prod
    }

    /// Returns the current base URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.read().base_url.clone()
    }

    /// Returns the current debug switch.
    #[must_use]
    pub fn debug_switch(&self) -> DebugSwitch {
        self.read().debug
    }

    /// Returns a copy of the custom request headers.
    #[must_use]
    pub fn request_headers(&self) -> BTreeMap<String, String> {
        self.read().headers.clone()
    }

    /// Returns the maximum response body size in bytes.
    #[must_use]
    pub fn body_size(&self) -> usize {
        self.read().max_body_size
    }

    /// Turns request/response DEBUG logging on or off.
    pub fn set_debug_switch(&self, debug: impl Into<DebugSwitch>) {
        self.write().debug = debug.into();
    }

    /// Sets the maximum response body size to `mb` megabytes.
    ///
    /// A value of zero is ignored.
    pub fn set_body_size(&self, mb: usize) {
        if mb > 0 {
            self.write().max_body_size = mb.saturating_mul(MEGABYTE);
        }
    }

    /// Replaces the HTTP engine used for subsequent requests.
    pub fn set_http_engine(&self, engine: Arc<dyn HttpEngine>) {
        tracing::debug!("Creem client using custom HTTP engine {:?}", engine);
        self.write().engine = engine;
    }

    /// Replaces the logger used for request/response DEBUG lines.
    pub fn set_logger(&self, logger: Arc<dyn Logger>) {
        self.write().logger = logger;
    }

    /// Overrides the base URL, for example to route through a proxy.
    pub fn set_proxy_url(&self, url: impl Into<String>) {
        let url = url.into();
        let mut settings = self.write();
        tracing::debug!(
            "Creem client overriding base URL {} with {}",
            settings.base_url,
            url
        );
        settings.base_url = url;
    }

    /// Inserts or overwrites a header sent on every request.
    ///
    /// `None` stores an empty value. An empty name is ignored. Custom headers
    /// are applied after `x-api-key` and `Content-Type` and win on collision.
    pub fn set_request_header(&self, name: impl Into<String>, value: Option<&str>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        self.write()
            .headers
            .insert(name, value.unwrap_or_default().to_string());
    }

    /// Removes every custom request header.
    pub fn clear_request_header(&self) {
        self.write().headers.clear();
    }

    /// Sends one request through the pipeline and returns the raw response.
    ///
    /// `path` is appended verbatim to the base URL and must already carry
    /// any query string. The status code is not inspected here; pair the
    /// result with [`bind`](crate::rest::bind) or one of its siblings.
    ///
    /// # Errors
    ///
    /// Returns [`CreemError::Http`] if the body cannot be encoded, the
    /// context is already done or fires during the exchange, or the engine
    /// fails.
    pub async fn exchange<B>(
        &self,
        ctx: &Context,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse, CreemError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let settings = self.read().clone();
        let url = format!("{}{}", settings.base_url, path);

        let mut builder = HttpRequest::builder(method, url.clone())
            .header(HEADER_API_KEY, self.api_key.as_ref())
            .header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
            .max_body_size(settings.max_body_size);
        for (name, value) in &settings.headers {
            builder = builder.header(name.clone(), value.clone());
        }

        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(TransportError::Encode)?;

        if settings.debug.is_on() {
            match &body {
                Some(bytes) => settings.logger.debug(&format!(
                    "Creem_Request: {url}, Body: {}",
                    String::from_utf8_lossy(bytes)
                )),
                None => settings.logger.debug(&format!("Creem_Request: {url}")),
            }
        }

        if let Some(bytes) = body {
            builder = builder.body(bytes);
        }
        let request = builder.build();

        if let Some(reason) = ctx.err() {
            return Err(reason.into());
        }
        let response = tokio::select! {
            biased;
            reason = ctx.done() => Err(reason),
            result = settings.engine.execute(request) => result,
        }?;

        if settings.debug.is_on() {
            settings
                .logger
                .debug(&format!("Creem_Response: {}", response.text()));
        }

        Ok(response)
    }

    pub(crate) async fn get(&self, ctx: &Context, path: &str) -> Result<HttpResponse, CreemError> {
        self.exchange::<()>(ctx, HttpMethod::Get, path, None).await
    }

    pub(crate) async fn post<B>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, CreemError>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.exchange(ctx, HttpMethod::Post, path, Some(body)).await
    }

    pub(crate) async fn post_empty(
        &self,
        ctx: &Context,
        path: &str,
    ) -> Result<HttpResponse, CreemError> {
        self.exchange::<()>(ctx, HttpMethod::Post, path, None).await
    }

    pub(crate) async fn put<B>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, CreemError>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.exchange(ctx, HttpMethod::Put, path, Some(body)).await
    }

    pub(crate) async fn delete(
        &self,
        ctx: &Context,
        path: &str,
    ) -> Result<HttpResponse, CreemError> {
        self.exchange::<()>(ctx, HttpMethod::Delete, path, None).await
    }
}
