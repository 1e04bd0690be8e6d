//! Single-shot handle to a request running on the tokio runtime.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::error::{ApiError, TransportFailure};

/// Resolves to exactly one `Result` for a spawned request.
///
/// Cancelling (or dropping) the handle aborts the task. The caller never
/// sees a value or an error for that request afterwards, and the task's
/// activity slot is released when the runtime tears it down.
#[derive(Debug)]
#[must_use = "dropping a PendingRequest cancels it"]
pub struct PendingRequest<T> {
    handle: JoinHandle<Result<T, ApiError>>,
}

impl<T: Send + 'static> PendingRequest<T> {
    /// Spawn `future` on the current runtime. Panics outside a runtime.
    pub(crate) fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }
}

impl<T> PendingRequest<T> {
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Future for PendingRequest<T> {
    type Output = Result<T, ApiError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(err)) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            // Only reachable if the runtime shut down underneath the task.
            Poll::Ready(Err(err)) => Poll::Ready(Err(ApiError::transport(
                TransportFailure::Cancelled,
                err.to_string(),
            ))),
        }
    }
}

impl<T> Drop for PendingRequest<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
