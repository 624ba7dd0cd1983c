//! A latch that runs the wrapped function on the first call only.

use std::cell::OnceCell;
use std::fmt;

use tracing::debug;

/// Wrapper that runs its function on the first call only.
///
/// The first call's result is latched and returned by every later call,
/// whatever arguments those calls pass. The latch is never reset.
///
/// # Examples
/// ```
/// use std::cell::Cell;
/// use u_fnkit::decorators::once;
/// let runs = Cell::new(0);
/// let init = once(|x: i32| {
///     runs.set(runs.get() + 1);
///     x * 2
/// });
/// assert_eq!(*init.call(5), 10);
/// assert_eq!(*init.call(100), 10);
/// assert_eq!(runs.get(), 1);
/// ```
pub struct Once<F, R> {
    func: F,
    result: OnceCell<R>,
}

impl<F, R> Once<F, R> {
    /// Wraps `func`.
    pub fn new(func: F) -> Self {
        Self {
            func,
            result: OnceCell::new(),
        }
    }

    /// Calls the function if it has not run yet and returns the latched result.
    pub fn call<A>(&self, args: A) -> &R
    where
        F: Fn(A) -> R,
    {
        self.result.get_or_init(|| {
            debug!("once latch firing");
            (self.func)(args)
        })
    }

    /// Returns `true` once the function has run.
    pub fn has_fired(&self) -> bool {
        self.result.get().is_some()
    }

    /// Returns the latched result, if any.
    pub fn result(&self) -> Option<&R> {
        self.result.get()
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Once")
            .field("result", &self.result.get())
            .finish_non_exhaustive()
    }
}

/// Wraps `func` so it runs at most once. See [`Once`].
pub fn once<A, R, F>(func: F) -> Once<F, R>
where
    F: Fn(A) -> R,
{
    Once::new(func)
}
