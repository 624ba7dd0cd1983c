//! One-shot deferred invocation on the local tokio scheduler.

use std::time::Duration;

use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error};

use super::panic_message;
use crate::error::{Error, Result};

/// Handle to a call scheduled by [`delay`].
///
/// Dropping the handle does not cancel the call; use [`Delayed::cancel`].
#[derive(Debug)]
pub struct Delayed<R> {
    handle: JoinHandle<R>,
}

impl<R> Delayed<R> {
    /// Cancels the call if it has not started yet.
    ///
    /// Has no effect once the call has begun running.
    pub fn cancel(&self) {
        debug!("cancelling delayed call");
        self.handle.abort();
    }

    /// Returns `true` once the call has completed, panicked or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the call and returns its result.
    ///
    /// # Errors
    /// - [`Error::Cancelled`] if [`Delayed::cancel`] stopped the call.
    /// - [`Error::CallbackPanicked`] if the call panicked.
    pub async fn join(self) -> Result<R> {
        self.handle.await.map_err(join_failure)
    }
}

fn join_failure(err: JoinError) -> Error {
    if err.is_cancelled() {
        return Error::Cancelled;
    }
    let message = panic_message(&*err.into_panic());
    error!(%message, "delayed call panicked");
    Error::CallbackPanicked(message)
}

/// Schedules `func(args)` to run once after at least `wait`.
///
/// Returns immediately. Calls with shorter waits fire no later than calls
/// with longer ones.
///
/// # Panics
/// Panics if called outside a `tokio::task::LocalSet`.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use u_fnkit::decorators::delay;
/// # let rt = tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap();
/// # let local = tokio::task::LocalSet::new();
/// # local.block_on(&rt, async {
/// let greeting = delay(
///     |(a, b): (&str, &str)| format!("{a} {b}"),
///     Duration::from_millis(5),
///     ("hello", "world"),
/// );
/// assert_eq!(greeting.join().await.unwrap(), "hello world");
/// # });
/// ```
pub fn delay<F, A, R>(func: F, wait: Duration, args: A) -> Delayed<R>
where
    F: FnOnce(A) -> R + 'static,
    A: 'static,
    R: 'static,
{
    debug!(?wait, "scheduling delayed call");
    let handle = tokio::task::spawn_local(async move {
        tokio::time::sleep(wait).await;
        func(args)
    });
    Delayed { handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use tokio::task::LocalSet;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_wait() {
        LocalSet::new()
            .run_until(async {
                let hits = Rc::new(Cell::new(0));
                let h = Rc::clone(&hits);
                let delayed = delay(
                    move |n: i32| {
                        h.set(h.get() + n);
                        n * 2
                    },
                    Duration::from_millis(100),
                    3,
                );
                sleep(Duration::from_millis(50)).await;
                assert_eq!(hits.get(), 0);
                assert!(!delayed.is_finished());
                assert_eq!(delayed.join().await, Ok(6));
                assert_eq!(hits.get(), 3);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_shorter_wait_fires_first() {
        LocalSet::new()
            .run_until(async {
                let order = Rc::new(RefCell::new(Vec::new()));
                let (o1, o2) = (Rc::clone(&order), Rc::clone(&order));
                let slow = delay(
                    move |x: &'static str| o1.borrow_mut().push(x),
                    Duration::from_millis(30),
                    "slow",
                );
                let fast = delay(
                    move |x: &'static str| o2.borrow_mut().push(x),
                    Duration::from_millis(10),
                    "fast",
                );
                slow.join().await.unwrap();
                fast.join().await.unwrap();
                assert_eq!(*order.borrow(), vec!["fast", "slow"]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_firing() {
        LocalSet::new()
            .run_until(async {
                let hits = Rc::new(Cell::new(0));
                let h = Rc::clone(&hits);
                let delayed = delay(move |_: ()| h.set(1), Duration::from_millis(20), ());
                delayed.cancel();
                sleep(Duration::from_millis(40)).await;
                assert_eq!(hits.get(), 0);
                assert_eq!(delayed.join().await, Err(Error::Cancelled));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_panic_surfaces_through_join() {
        LocalSet::new()
            .run_until(async {
                let delayed = delay(
                    |_: ()| -> i32 { panic!("scheduled failure") },
                    Duration::from_millis(1),
                    (),
                );
                assert_eq!(
                    delayed.join().await,
                    Err(Error::CallbackPanicked("scheduled failure".into()))
                );
            })
            .await;
    }
}
