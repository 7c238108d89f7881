//! Run a function once, after a wait

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};
use underbar_core::{Error, Result};

/// Schedule `func(args)` to run once, no earlier than `wait` from now.
///
/// Returns immediately. The call runs as a task on the current tokio
/// runtime; calling this outside of one fails with [`Error::NoRuntime`].
/// Multiple delayed calls carry no ordering guarantee beyond their own waits.
pub fn delay<F, A, R>(func: F, wait: Duration, args: A) -> Result<Delayed<R>>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: Send + 'static,
{
    let handle = Handle::try_current().map_err(|e| Error::no_runtime("delay", e.to_string()))?;

    let wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX);
    debug!(wait_ms, "scheduling delayed call");

    let task = handle.spawn(async move {
        tokio::time::sleep(wait).await;
        trace!(wait_ms, "firing delayed call");
        func(args)
    });

    Ok(Delayed { task })
}

/// Handle to a scheduled call.
///
/// Awaiting it yields the call's result. Dropping it does not cancel the
/// call, and there is no way to cancel through it.
#[derive(Debug)]
pub struct Delayed<R> {
    task: JoinHandle<R>,
}

impl<R> Delayed<R> {
    /// Whether the call has run to completion
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<R> Future for Delayed<R> {
    type Output = Result<R>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.task).poll(cx).map(|joined| {
            joined.map_err(|e| {
                warn!(error = %e, "delayed call failed");
                Error::deferred_call_with_source("delayed call did not complete", e)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_fires_no_earlier_than_wait() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let start = Instant::now();

        let delayed = delay(
            move |(a, b): (i32, i32)| {
                flag.store(true, Ordering::SeqCst);
                a + b
            },
            Duration::from_millis(500),
            (20, 22),
        )
        .unwrap();

        assert!(!fired.load(Ordering::SeqCst));
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(!fired.load(Ordering::SeqCst));
        assert!(!delayed.is_finished());

        assert_eq!(delayed.await.unwrap(), 42);
        assert!(fired.load(Ordering::SeqCst));
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_does_not_cancel() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let delayed = delay(
            move |()| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
            Duration::from_millis(100),
            (),
        )
        .unwrap();
        drop(delayed);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_wait_still_runs_asynchronously() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let delayed = delay(
            move |()| flag.store(true, Ordering::SeqCst),
            Duration::ZERO,
            (),
        )
        .unwrap();

        assert!(!fired.load(Ordering::SeqCst));
        delayed.await.unwrap();
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_panic_surfaces_when_awaited() {
        let delayed = delay(
            |message: &'static str| -> u8 { panic!("{message}") },
            Duration::from_millis(10),
            "boom",
        )
        .unwrap();

        let err = delayed.await.unwrap_err();
        assert!(matches!(err, Error::DeferredCall { .. }));
    }

    #[test]
    fn test_requires_a_runtime() {
        let err = delay(|()| (), Duration::from_millis(1), ()).unwrap_err();

        assert!(matches!(err, Error::NoRuntime { .. }));
        assert!(err.to_string().starts_with("'delay' requires a tokio runtime"));
    }
}
