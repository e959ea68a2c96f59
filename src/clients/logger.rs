//! Logger capability used by the request pipeline.
//!
//! The pipeline only ever emits DEBUG lines, and only when the client's
//! [`DebugSwitch`](crate::config::DebugSwitch) is on. The default
//! [`TracingLogger`] forwards them to `tracing` under the `creem` target;
//! applications can install their own [`Logger`] with
//! [`CreemClient::set_logger`](crate::CreemClient::set_logger).

use std::fmt;

/// Leveled string output consumed by the SDK.
pub trait Logger: Send + Sync + fmt::Debug {
    /// Emits a DEBUG line.
    fn debug(&self, message: &str);
}

/// Default [`Logger`] that forwards to `tracing::debug!`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "creem", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct Recording(Mutex<Vec<String>>);

    impl Logger for Recording {
        fn debug(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_logger_is_object_safe() {
        let recording = Arc::new(Recording::default());
        let logger: Arc<dyn Logger> = recording.clone();
        logger.debug("Creem_Request: https://api.creem.io/v1/products");

        assert_eq!(recording.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_tracing_logger_without_subscriber_is_silent() {
        TracingLogger.debug("no subscriber installed");
    }
}
