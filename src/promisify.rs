//! Callback-to-future adapter.
//!
//! Actor operations report completion through a [`Callback`]. [`promisify`]
//! turns one such call into a [`Pending`] future that settles exactly once
//! with whatever the actor passed to the callback.
//!
//! # Example
//!
//! ```ignore
//! let apps = promisify("getInstalledApps", |cb| actor.get_installed_apps(cb)).await?;
//! let app = promisify("getApp", |cb| actor.get_app(url, cb)).await?;
//! ```
//!
//! Arguments other than the callback are captured by the closure, so the same
//! adapter serves operations of any arity.

// ============================================================================
// Imports
// ============================================================================

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;
use tracing::trace;

use crate::error::{Error, Result};
use crate::remote::Callback;

// ============================================================================
// promisify
// ============================================================================

/// Invokes a callback-style operation and returns a future of its outcome.
///
/// `invoke` runs immediately with a synthesized completion callback; the
/// remote call is in flight whether or not the returned future is awaited.
/// The future resolves with `Ok` or `Err` exactly as handed to the callback.
///
/// If the actor drops the callback without calling it, the future resolves
/// with [`Error::CallbackDropped`].
pub fn promisify<T, F>(operation: &'static str, invoke: F) -> Pending<T>
where
    T: Send + 'static,
    F: FnOnce(Callback<T>),
{
    let (tx, rx) = oneshot::channel::<Result<T>>();

    trace!(operation, "Invoking remote operation");

    let callback: Callback<T> = Box::new(move |result: Result<T>| {
        trace!(operation, ok = result.is_ok(), "Remote operation settled");
        let _ = tx.send(result);
    });
    invoke(callback);

    Pending { operation, rx }
}

// ============================================================================
// Pending
// ============================================================================

/// Future returned by [`promisify`].
#[must_use = "the remote call is already in flight; await to observe its outcome"]
#[derive(Debug)]
pub struct Pending<T> {
    /// Operation name for diagnostics.
    operation: &'static str,
    /// Receives the single settlement.
    rx: oneshot::Receiver<Result<T>>,
}

impl<T> Pending<T> {
    /// Returns the name of the remote operation.
    #[inline]
    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl<T> Future for Pending<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let operation = self.operation;
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(Error::callback_dropped(operation))),
            Poll::Pending => Poll::Pending,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_resolves_with_result() {
        let value = promisify("evaluateJS", |cb: Callback<u32>| cb(Ok(2)))
            .await
            .expect("resolved");
        assert_eq!(value, 2);
    }

    #[tokio::test]
    async fn test_rejects_with_error() {
        let err = promisify("getApp", |cb: Callback<()>| {
            cb(Err(Error::remote("noSuchActor", "gone")))
        })
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "noSuchActor: gone");
    }

    #[tokio::test]
    async fn test_dropped_callback() {
        let err = promisify("listRunningApps", |cb: Callback<Vec<String>>| drop(cb))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::CallbackDropped {
                operation: "listRunningApps"
            }
        ));
    }

    #[tokio::test]
    async fn test_invokes_eagerly() {
        let invoked = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&invoked);

        let pending = promisify("startListening", move |cb: Callback<()>| {
            flag.store(true, Ordering::SeqCst);
            cb(Ok(()));
        });

        assert!(invoked.load(Ordering::SeqCst));
        assert_eq!(pending.operation(), "startListening");
        pending.await.expect("resolved");
    }

    #[tokio::test]
    async fn test_settles_from_another_task() {
        let pending = promisify("getCachedLogs", |cb: Callback<Vec<u8>>| {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                cb(Ok(vec![1, 2, 3]));
            });
        });

        assert_eq!(pending.await.expect("resolved"), vec![1, 2, 3]);
    }
}
