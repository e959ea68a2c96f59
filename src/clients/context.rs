//! Per-call cancellation and deadline context.
//!
//! Every resource method takes a [`Context`] as its first argument. The
//! pipeline races the HTTP exchange against the context, so a cancelled
//! context or an elapsed deadline aborts the call with
//! [`TransportError::Canceled`] or [`TransportError::DeadlineExceeded`].
//!
//! # Example
//!
//! ```rust
//! use creem::clients::Context;
//! use std::time::Duration;
//!
//! // No cancellation, no deadline
//! let ctx = Context::background();
//! assert!(ctx.err().is_none());
//!
//! // Cancelled from elsewhere
//! let (ctx, cancel) = Context::with_cancel();
//! cancel.cancel();
//! assert!(ctx.err().is_some());
//!
//! // Bounded by a timeout
//! # tokio_test::block_on(async {
//! let ctx = Context::with_timeout(Duration::from_secs(5));
//! assert!(ctx.deadline().is_some());
//! # });
//! ```

use std::future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::clients::TransportError;

/// Cancellation signal and optional deadline for a single API call.
///
/// Cloning a `Context` yields another handle observing the same signal.
#[derive(Clone, Debug, Default)]
pub struct Context {
    cancel: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Handle that cancels the [`Context`] it was created with.
///
/// Dropping the handle without calling [`cancel`](Self::cancel) leaves the
/// context live.
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    /// Cancels every context derived from this handle.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl Context {
    /// Returns a context that is never cancelled and has no deadline.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a cancellable context and the handle that cancels it.
    #[must_use]
    pub fn with_cancel() -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        (
            Self {
                cancel: Some(receiver),
                deadline: None,
            },
            CancelHandle { sender },
        )
    }

    /// Returns a context that expires at `deadline`.
    #[must_use]
    pub const fn with_deadline(deadline: Instant) -> Self {
        Self {
            cancel: None,
            deadline: Some(deadline),
        }
    }

    /// Returns a context that expires `timeout` from now.
    ///
    /// Must be called inside a Tokio runtime.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns why the context is done, or `None` while it is still live.
    #[must_use]
    pub fn err(&self) -> Option<TransportError> {
        if self.cancel.as_ref().is_some_and(|rx| *rx.borrow()) {
            return Some(TransportError::Canceled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Some(TransportError::DeadlineExceeded);
        }
        None
    }

    /// Completes once the context is cancelled or its deadline passes.
    ///
    /// Never completes for a background context.
    pub async fn done(&self) -> TransportError {
        let cancelled = async {
            match self.cancel.clone() {
                Some(mut rx) => {
                    if rx.wait_for(|cancelled| *cancelled).await.is_err() {
                        // Handle dropped without cancelling
                        future::pending::<()>().await;
                    }
                }
                None => future::pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => future::pending::<()>().await,
            }
        };

        tokio::select! {
            () = cancelled => TransportError::Canceled,
            () = expired => TransportError::DeadlineExceeded,
        }
    }
}
