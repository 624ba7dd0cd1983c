//! # u-fnkit
//!
//! Functional collection helpers and function decorators for the
//! U-Engine ecosystem.
//!
//! The crate is a flat toolkit over two collection shapes, ordered
//! sequences and string-keyed mappings, plus a handful of decorators
//! that wrap closures with private state.
//!
//! ## Modules
//!
//! - [`collection`] — the [`Collection`] trait and the [`each`] traversal primitive
//! - [`access`] — `first`/`last` slicing and `index_of`
//! - [`transform`] — `filter`, `reject`, `uniq`, `map`, `pluck`
//! - [`aggregate`] — `reduce`, `fold`, `contains`, `every`, `some`
//! - [`objects`] — `extend` and `defaults` for mappings
//! - [`decorators`] — `once`, `memoize`, `delay`, `throttle`
//! - [`arrays`] — `shuffle`, `sort_by`, `zip`, `flatten`, set algebra, `invoke`
//! - [`random`] — seeded RNG construction
//!
//! ## Design Philosophy
//!
//! - **One traversal point**: every collection operation is built on
//!   [`each`] plus local accumulation
//! - **Inputs are never mutated**: results are fresh `Vec`s or borrowed
//!   slices; only `extend`/`defaults` write, and only to their target
//! - **Independent decorator state**: each wrapper owns its latch, cache
//!   or timers
//! - **Property-based testing**: algebraic laws verified via proptest

pub mod access;
pub mod aggregate;
pub mod arrays;
pub mod collection;
pub mod decorators;
pub mod error;
pub mod objects;
pub mod property;
pub mod random;
pub mod transform;

pub use collection::{each, identity, Collection, Dynamic, Key};
pub use error::{Error, Result};
