//! One-shot deferred initialization shared by any number of waiters

use std::future::Future;
use std::sync::Arc;

use sd_core::{FetchError, InitState};
use tokio::sync::{Mutex, OnceCell};
use tokio::task::JoinHandle;

/// A fetch launched eagerly at construction and awaited later.
///
/// The fetch runs as its own Tokio task and records its outcome in the shared
/// cell itself, so the task settles as soon as the fetch lands whether or not
/// anyone is waiting. Waiters queue on the join handle only to learn when that
/// write has happened.
///
/// A failed settlement is kept as-is and is never retried. Dropping the task
/// aborts a fetch that is still in flight.
pub struct InitializationTask<T> {
    handle: Mutex<Option<JoinHandle<()>>>,
    settled: Arc<OnceCell<Result<Arc<T>, FetchError>>>,
}

impl<T> InitializationTask<T>
where
    T: Send + Sync + 'static,
{
    /// Launch `fetch` on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<F>(fetch: F) -> Self
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let settled = Arc::new(OnceCell::new());
        let cell = Arc::clone(&settled);
        let handle = tokio::spawn(async move {
            let outcome = fetch.await.map(Arc::new);
            let _ = cell.set(outcome);
        });

        Self {
            handle: Mutex::new(Some(handle)),
            settled,
        }
    }

    /// A task that is already settled with `value`. Nothing is fetched.
    pub fn ready(value: T) -> Self {
        Self {
            handle: Mutex::new(None),
            settled: Arc::new(OnceCell::new_with(Some(Ok(Arc::new(value))))),
        }
    }

    /// Wait for the fetch to settle and return its outcome.
    ///
    /// Returns immediately once settled. Cancelling a waiter mid-wait leaves
    /// the fetch running for the remaining waiters.
    pub async fn wait(&self) -> Result<Arc<T>, FetchError> {
        if let Some(settled) = self.settled.get() {
            return settled.clone();
        }

        let mut guard = self.handle.lock().await;
        if let Some(handle) = guard.as_mut() {
            if let Err(err) = handle.await {
                // The fetch panicked or was aborted before writing the cell.
                let _ = self.settled.set(Err(FetchError::Aborted(err.to_string())));
            }
            *guard = None;
        }
        drop(guard);

        match self.settled.get() {
            Some(settled) => settled.clone(),
            None => Err(FetchError::Aborted(
                "initialization task vanished before settling".to_string(),
            )),
        }
    }

    /// The fetched value, if the fetch has succeeded.
    pub fn get(&self) -> Option<Arc<T>> {
        match self.settled.get() {
            Some(Ok(value)) => Some(Arc::clone(value)),
            _ => None,
        }
    }

    pub fn state(&self) -> InitState {
        match self.settled.get() {
            Some(Ok(_)) => InitState::Ready,
            _ => InitState::Pending,
        }
    }
}

impl<T> Drop for InitializationTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_ready_task_returns_value_immediately() {
        let task = InitializationTask::ready(7_u32);

        assert_eq!(task.state(), InitState::Ready);
        assert_eq!(*task.wait().await.unwrap(), 7);
        assert_eq!(task.get().as_deref(), Some(&7));
    }

    #[tokio::test]
    async fn test_task_settles_without_any_waiter() {
        let task = InitializationTask::spawn(async { Ok::<_, FetchError>(3_u8) });

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        assert_eq!(task.state(), InitState::Ready);
        assert_eq!(task.get().as_deref(), Some(&3));
    }

    #[tokio::test]
    async fn test_spawned_task_runs_once_for_many_waiters() {
        let runs = Arc::new(AtomicUsize::new(0));
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let counter = Arc::clone(&runs);
        let task = Arc::new(InitializationTask::spawn(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            let _ = release_rx.await;
            Ok::<_, FetchError>("done".to_string())
        }));

        let waiters: Vec<_> = (0..8)
            .map(|_| {
                let task = Arc::clone(&task);
                tokio::spawn(async move { task.wait().await })
            })
            .collect();

        tokio::task::yield_now().await;
        assert_eq!(task.state(), InitState::Pending);
        release_tx.send(()).unwrap();

        for waiter in waiters {
            assert_eq!(waiter.await.unwrap().unwrap().as_str(), "done");
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(task.state(), InitState::Ready);
    }

    #[tokio::test]
    async fn test_failure_is_shared_and_state_stays_pending() {
        let task = InitializationTask::<String>::spawn(async {
            Err(FetchError::Network("connection reset".to_string()))
        });

        let first = task.wait().await.unwrap_err();
        let second = task.wait().await.unwrap_err();

        assert_eq!(first, FetchError::Network("connection reset".to_string()));
        assert_eq!(first, second);
        assert_eq!(task.state(), InitState::Pending);
        assert!(task.get().is_none());
    }

    #[tokio::test]
    async fn test_panicking_fetch_settles_as_aborted() {
        let task = InitializationTask::<String>::spawn(async {
            if true {
                panic!("fetch blew up");
            }
            Ok(String::new())
        });

        let err = task.wait().await.unwrap_err();
        assert!(matches!(err, FetchError::Aborted(_)));
        assert_eq!(task.state(), InitState::Pending);
    }

    #[tokio::test]
    async fn test_cancelled_waiter_does_not_lose_the_fetch() {
        let (release_tx, release_rx) = oneshot::channel::<()>();
        let task = InitializationTask::spawn(async move {
            let _ = release_rx.await;
            Ok::<_, FetchError>(1_u8)
        });

        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(10), task.wait()).await;
        assert!(timed_out.is_err());

        release_tx.send(()).unwrap();
        assert_eq!(*task.wait().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_drop_aborts_in_flight_fetch() {
        let (started_tx, started_rx) = oneshot::channel::<()>();
        let (hold_tx, hold_rx) = oneshot::channel::<()>();
        let finished = Arc::new(AtomicUsize::new(0));

        let done = Arc::clone(&finished);
        let task = InitializationTask::spawn(async move {
            let _ = started_tx.send(());
            let _ = hold_rx.await;
            done.fetch_add(1, Ordering::SeqCst);
            Ok::<_, FetchError>(())
        });

        started_rx.await.unwrap();
        drop(task);
        drop(hold_tx);
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }

        assert_eq!(finished.load(Ordering::SeqCst), 0);
    }
}
