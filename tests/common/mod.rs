//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use creem::clients::{HttpEngine, HttpRequest, HttpResponse, Logger, TransportError};
use creem::{ClientOption, CreemClient};
use wiremock::MockServer;

pub const API_KEY: &str = "creem_test_key";

/// Client pointed at a wiremock server.
pub fn client_for(server: &MockServer) -> CreemClient {
    CreemClient::new(
        API_KEY,
        "whsec_secret",
        true,
        [ClientOption::ProxyUrl(server.uri())],
    )
    .unwrap()
}

/// Engine that counts calls and answers `200 {}` without touching the network.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingEngine {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpEngine for RecordingEngine {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse::new(200, HashMap::new(), b"{}".to_vec()))
    }
}

/// Client wired to a fresh [`RecordingEngine`].
pub fn recording_client() -> (CreemClient, Arc<RecordingEngine>) {
    let engine = Arc::new(RecordingEngine::default());
    let client = CreemClient::new(
        API_KEY,
        "whsec_secret",
        true,
        [ClientOption::HttpEngine(engine.clone())],
    )
    .unwrap();
    (client, engine)
}

/// Logger that keeps every DEBUG line.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}
