//! Trailing-edge debounce for high-frequency events such as scroll.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

/// Delay applied to scroll handlers.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(10);

/// Runs only the last of a burst of calls, once `wait` has passed
/// without another call.
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Debouncer {
    /// Creates a debouncer waiting `wait` after the last call.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedules `f`, cancelling a call that has not run yet.
    ///
    /// Outside a tokio runtime there is nothing to defer with and `f`
    /// runs immediately.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let Ok(handle) = Handle::try_current() else {
            f();
            return;
        };

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            previous.abort();
            trace!("debounced call superseded");
        }
        let wait = self.wait;
        *pending = Some(handle.spawn(async move {
            tokio::time::sleep(wait).await;
            f();
        }));
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SCROLL_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_last_call_once() {
        let debouncer = Debouncer::default();
        let last = Arc::new(AtomicUsize::new(0));
        let runs = Arc::new(AtomicUsize::new(0));

        for i in 1..=5 {
            let last = Arc::clone(&last);
            let runs = Arc::clone(&runs);
            debouncer.call(move || {
                last.store(i, Ordering::SeqCst);
                runs.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_all_run() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let runs = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let runs = Arc::clone(&runs);
            debouncer.call(move || {
                runs.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(15)).await;
        }

        assert_eq!(runs.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_runs_inline_without_runtime() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        Debouncer::default().call(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
