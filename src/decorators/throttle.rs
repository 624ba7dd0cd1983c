//! Rate limiting: at most one invocation per wait window, with optional
//! leading and trailing edges.

use std::cell::RefCell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, error, trace};

use super::panic_message;

/// Edge policy for a [`Throttle`].
///
/// The default enables both edges: the first call of a window runs at
/// once and the last suppressed call runs when the window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleOptions {
    /// Run the first call of a window immediately.
    pub leading: bool,
    /// Run the last suppressed call of a window when it closes.
    pub trailing: bool,
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }
}

struct State<A> {
    last_run: Option<Instant>,
    pending: Option<A>,
    timer: Option<JoinHandle<()>>,
}

struct Inner<F, A, R> {
    func: RefCell<F>,
    wait: Duration,
    options: ThrottleOptions,
    state: RefCell<State<A>>,
    last_result: RefCell<Option<R>>,
}

impl<F, A, R> Inner<F, A, R>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    fn run(&self, args: A) -> R {
        let result = (self.func.borrow_mut())(args);
        *self.last_result.borrow_mut() = Some(result.clone());
        result
    }
}

/// Rate-limited wrapper: runs its function at most once per `wait`.
///
/// A call at least `wait` after the most recent executed call runs
/// immediately (leading edge). Calls inside the window are suppressed;
/// the last of them, with its arguments, runs once when the window
/// closes (trailing edge), which opens a new window. Either edge can be
/// disabled through [`ThrottleOptions`]. With both disabled only calls
/// arriving after a full quiet window run.
///
/// A call that lands on the window edge while a trailing call is still
/// queued runs the queued call first; the new call is then suppressed
/// and queued for the window that execution opens.
///
/// A panic in a trailing call is logged at `error` level and re-raised
/// inside its task, where tokio reports it. The throttle itself stays
/// usable: nothing is left pending and the next window starts normally.
///
/// Cloning yields another handle to the same throttle.
///
/// # Panics
/// [`Throttle::call`] panics outside a `tokio::task::LocalSet` when it
/// needs to schedule a trailing call.
pub struct Throttle<F, A, R> {
    inner: Rc<Inner<F, A, R>>,
}

impl<F, A, R> Clone for Throttle<F, A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<F, A, R> fmt::Debug for Throttle<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Throttle")
            .field("wait", &self.inner.wait)
            .field("options", &self.inner.options)
            .field("last_run", &state.last_run)
            .field("pending", &state.pending.is_some())
            .finish()
    }
}

impl<F, A, R> Throttle<F, A, R>
where
    F: FnMut(A) -> R + 'static,
    A: 'static,
    R: Clone + 'static,
{
    /// Wraps `func` with the default leading + trailing policy.
    pub fn new(func: F, wait: Duration) -> Self {
        Self::with_options(func, wait, ThrottleOptions::default())
    }

    /// Wraps `func` with an explicit edge policy.
    pub fn with_options(func: F, wait: Duration, options: ThrottleOptions) -> Self {
        Self {
            inner: Rc::new(Inner {
                func: RefCell::new(func),
                wait,
                options,
                state: RefCell::new(State {
                    last_run: None,
                    pending: None,
                    timer: None,
                }),
                last_result: RefCell::new(None),
            }),
        }
    }

    /// Invokes the throttled function or defers it.
    ///
    /// Returns `Some(result)` when the call ran immediately and `None`
    /// when it was suppressed (and possibly queued for the trailing edge).
    pub fn call(&self, args: A) -> Option<R> {
        let inner = &self.inner;
        let now = Instant::now();
        let mut state = inner.state.borrow_mut();

        if state.last_run.is_none() && !inner.options.leading {
            state.last_run = Some(now);
        }
        let remaining = match state.last_run {
            Some(at) => inner.wait.saturating_sub(now.duration_since(at)),
            None => Duration::ZERO,
        };

        if remaining.is_zero() {
            if let Some(timer) = state.timer.take() {
                timer.abort();
            }
            state.last_run = Some(now);
            if let Some(queued) = state.pending.take() {
                // The window closed before its timer ran: the queued call
                // closes it, and this call waits out the next window.
                state.pending = Some(args);
                let timer = fire_trailing(Rc::clone(inner), inner.wait);
                state.timer = Some(tokio::task::spawn_local(timer));
                drop(state);
                trace!("throttle trailing call at window edge");
                inner.run(queued);
                return None;
            }
            drop(state);
            trace!("throttle leading call");
            return Some(inner.run(args));
        }

        if inner.options.trailing {
            trace!(?remaining, "throttle deferring call");
            state.pending = Some(args);
            if state.timer.is_none() {
                let inner = Rc::clone(inner);
                state.timer = Some(tokio::task::spawn_local(fire_trailing(inner, remaining)));
            }
        } else {
            trace!("throttle dropping call");
        }
        None
    }

    /// Drops any pending trailing call and starts afresh.
    pub fn cancel(&self) {
        let mut state = self.inner.state.borrow_mut();
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.pending = None;
        state.last_run = None;
        debug!("throttle cancelled");
    }

    /// Returns `true` if a trailing call is queued.
    pub fn has_pending(&self) -> bool {
        self.inner.state.borrow().pending.is_some()
    }

    /// Result of the most recent executed call, on either edge.
    pub fn last_result(&self) -> Option<R> {
        self.inner.last_result.borrow().clone()
    }
}

async fn fire_trailing<F, A, R>(inner: Rc<Inner<F, A, R>>, after: Duration)
where
    F: FnMut(A) -> R,
    R: Clone,
{
    tokio::time::sleep(after).await;
    let args = {
        let mut state = inner.state.borrow_mut();
        state.timer = None;
        let args = state.pending.take();
        if !inner.options.leading {
            state.last_run = None;
        } else if args.is_some() {
            state.last_run = Some(Instant::now());
        }
        args
    };
    if let Some(args) = args {
        trace!("throttle trailing call");
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| inner.run(args))) {
            error!(message = %panic_message(&*payload), "throttled trailing call panicked");
            panic::resume_unwind(payload);
        }
    }
}

/// Wraps `func` so it runs at most once per `wait`. See [`Throttle`].
pub fn throttle<F, A, R>(func: F, wait: Duration) -> Throttle<F, A, R>
where
    F: FnMut(A) -> R + 'static,
    A: 'static,
    R: Clone + 'static,
{
    Throttle::new(func, wait)
}
