//! Result cache keyed by the serialized argument list.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::error::Result;

/// Wrapper that caches results per distinct argument list.
///
/// The cache key is the JSON serialization of the arguments, so two calls
/// hit the same entry only when their serialized forms are textually
/// equal: `1` and `"1"` differ, as do `1` and `1.0`. The cache grows for
/// the lifetime of the wrapper and never evicts.
///
/// # Examples
/// ```
/// use std::cell::Cell;
/// use u_fnkit::decorators::memoize;
/// let runs = Cell::new(0);
/// let square = memoize(|n: &u64| {
///     runs.set(runs.get() + 1);
///     n * n
/// });
/// assert_eq!(square.call(&4).unwrap(), 16);
/// assert_eq!(square.call(&4).unwrap(), 16);
/// assert_eq!(runs.get(), 1);
/// ```
pub struct Memoize<F, R> {
    func: F,
    cache: RefCell<HashMap<String, R>>,
}

impl<F, R> Memoize<F, R> {
    /// Wraps `func` with an empty cache.
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the cached result for `args`, computing it on a miss.
    ///
    /// # Errors
    /// [`Error::Serialization`](crate::Error::Serialization) if `args`
    /// cannot be serialized into a cache key; `func` is not called.
    pub fn call<A>(&self, args: &A) -> Result<R>
    where
        A: Serialize + ?Sized,
        F: Fn(&A) -> R,
        R: Clone,
    {
        let key = serde_json::to_string(args)?;
        if let Some(hit) = self.cache.borrow().get(&key) {
            trace!(%key, "memoize hit");
            return Ok(hit.clone());
        }
        trace!(%key, "memoize miss");
        let value = (self.func)(args);
        self.cache.borrow_mut().insert(key, value.clone());
        Ok(value)
    }

    /// Number of cached argument lists.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

/// Wraps `func` with a per-argument-list cache. See [`Memoize`].
pub fn memoize<A, R, F>(func: F) -> Memoize<F, R>
where
    A: ?Sized,
    F: Fn(&A) -> R,
{
    Memoize::new(func)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde::Serializer;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    #[test]
    fn test_identical_arguments_hit_cache() {
        let calls = Cell::new(0);
        let add = memoize(|(a, b): &(i32, i32)| {
            calls.set(calls.get() + 1);
            a + b
        });
        assert_eq!(add.call(&(1, 2)), Ok(3));
        assert_eq!(add.call(&(1, 2)), Ok(3));
        assert_eq!(calls.get(), 1);
        assert_eq!(add.call(&(2, 1)), Ok(3));
        assert_eq!(calls.get(), 2);
        assert_eq!(add.cache_len(), 2);
    }

    #[test]
    fn test_key_is_type_sensitive() {
        let calls = Cell::new(0);
        let describe = memoize(|v: &serde_json::Value| {
            calls.set(calls.get() + 1);
            v.to_string()
        });
        describe.call(&serde_json::json!(1)).unwrap();
        describe.call(&serde_json::json!("1")).unwrap();
        describe.call(&serde_json::json!(1.0)).unwrap();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_falsy_results_are_cached() {
        let calls = Cell::new(0);
        let zero = memoize(|_: &str| {
            calls.set(calls.get() + 1);
            0
        });
        zero.call("a").unwrap();
        zero.call("a").unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unserializable_arguments() {
        struct Opaque;
        impl Serialize for Opaque {
            fn serialize<S: Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("opaque values have no key"))
            }
        }
        let calls = Cell::new(0);
        let f = memoize(|_: &Opaque| calls.set(calls.get() + 1));
        assert!(matches!(f.call(&Opaque), Err(Error::Serialization(_))));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_non_string_map_keys_fail() {
        let f = memoize(|m: &BTreeMap<(i32, i32), i32>| m.len());
        let mut m = BTreeMap::new();
        m.insert((1, 2), 3);
        assert!(matches!(f.call(&m), Err(Error::Serialization(_))));
    }
}
