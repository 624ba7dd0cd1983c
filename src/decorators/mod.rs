//! Function decorators.
//!
//! Each factory returns an independent wrapper that owns its own state
//! (latch, cache, timers); wrappers never share state with each other.
//!
//! | Wrapper | State | Invocation |
//! |---|---|---|
//! | [`Once`] | result latch | first call only |
//! | [`Memoize`] | argument-keyed cache | once per distinct argument list |
//! | [`Delayed`] | task handle | once, after a wait |
//! | [`Throttle`] | last-run instant, pending call | at most once per window |
//!
//! Multi-argument functions take their arguments as a tuple.
//!
//! # Scheduling
//!
//! [`delay`] and the trailing edge of [`Throttle`] run on tokio's
//! single-threaded scheduler via `tokio::task::spawn_local`, so they must
//! be used from inside a `tokio::task::LocalSet`.

use std::any::Any;

mod delay;
mod memoize;
mod once;
mod throttle;

pub use delay::{delay, Delayed};
pub use memoize::{memoize, Memoize};
pub use once::{once, Once};
pub use throttle::{throttle, Throttle, ThrottleOptions};

/// Text of a panic payload raised by a scheduled callback.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
