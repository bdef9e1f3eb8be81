//! Tokio Runtime Bridge
//!
//! GPUI runs its own executor, but reqwest requires tokio. This module owns a
//! global tokio runtime and lets GPUI tasks await work spawned on it.
//!
//! ## Pattern
//!
//! ```text
//! GPUI cx.spawn
//!       │
//!       ▼
//! spawn_abortable(async { ... })  ──► tokio::Runtime::spawn()
//!       │
//!       ▼
//! TokioTask awaited; dropped → tokio task aborted
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;
use std::task::{Context, Poll};

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

use crate::error::{Error, Result};

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| {
        Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("ticker-tokio")
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime")
    })
}

/// Handle to a task on the tokio runtime that is aborted when dropped
///
/// Awaiting yields the task's output, or `Error::Cancelled` if the task was
/// aborted. Panics inside the task are resumed on the awaiting side.
#[must_use = "dropping a TokioTask aborts it"]
pub struct TokioTask<T> {
    handle: JoinHandle<T>,
}

impl<T> TokioTask<T> {
    /// Abort the task without waiting for it
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl<T> Future for TokioTask<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(value)) => Poll::Ready(Ok(value)),
            Poll::Ready(Err(e)) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Poll::Ready(Err(e)) => Poll::Ready(Err(Error::Cancelled {
                message: e.to_string(),
            })),
        }
    }
}

impl<T> Drop for TokioTask<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn a future on the tokio runtime, tied to the returned handle
///
/// # Example
///
/// ```ignore
/// let task = spawn_abortable(async move { client.fetch_tickers().await });
/// let rows = task.await??;
/// ```
pub fn spawn_abortable<F, T>(future: F) -> TokioTask<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    TokioTask {
        handle: get_runtime().spawn(future),
    }
}

/// Execute a future in the tokio runtime and wait for the result
///
/// Unlike [`spawn_abortable`], the task keeps running if the caller stops
/// waiting. Used for short writes that should finish regardless, such as CSV
/// exports.
pub async fn run_in_tokio<F, T>(future: F) -> T
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = get_runtime().spawn(future);
    match handle.await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    }
}
