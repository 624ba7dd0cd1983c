//! Merging key/value pairs into a mapping.
//!
//! Both operations mutate the target in place and hand it back so calls
//! can be chained. Sources are any [`Collection`]; sequences contribute
//! their indices (as decimal strings) as keys.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::collection::{each, Collection};

/// A string-keyed mapping that can be written to.
pub trait Mapping {
    /// Stored value type.
    type Value;

    /// Returns `true` if `key` is present with a value.
    fn has_key(&self, key: &str) -> bool;

    /// Inserts or overwrites `key`.
    fn set(&mut self, key: String, value: Self::Value);
}

impl<V> Mapping for BTreeMap<String, V> {
    type Value = V;

    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn set(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl<V, S: BuildHasher> Mapping for HashMap<String, V, S> {
    type Value = V;

    fn has_key(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn set(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

/// JSON `null` counts as missing, so [`defaults`] fills it.
impl Mapping for Map<String, Value> {
    type Value = Value;

    fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_null())
    }

    fn set(&mut self, key: String, value: Value) {
        self.insert(key, value);
    }
}

/// Copies every pair of every source into `target`, in argument order.
///
/// Later sources overwrite earlier ones and any pre-existing key.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use u_fnkit::objects::extend;
/// let mut obj: BTreeMap<String, i32> = [("a".to_string(), 1)].into_iter().collect();
/// let s1: BTreeMap<String, i32> =
///     [("a".to_string(), 2), ("b".to_string(), 2)].into_iter().collect();
/// let s2: BTreeMap<String, i32> = [("b".to_string(), 3)].into_iter().collect();
/// extend(&mut obj, &[&s1, &s2]);
/// assert_eq!(obj["a"], 2);
/// assert_eq!(obj["b"], 3);
/// ```
pub fn extend<'t, M, S>(target: &'t mut M, sources: &[&S]) -> &'t mut M
where
    M: Mapping + ?Sized,
    M::Value: Clone,
    S: Collection<Item = M::Value> + ?Sized,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            target.set(key.to_string(), value.clone());
        });
    });
    target
}

/// Like [`extend`], but never overwrites a key already present.
///
/// Among sources, the earliest one defining a key wins.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use u_fnkit::objects::defaults;
/// let mut obj: BTreeMap<String, i32> = [("a".to_string(), 1)].into_iter().collect();
/// let s1: BTreeMap<String, i32> =
///     [("a".to_string(), 2), ("b".to_string(), 2)].into_iter().collect();
/// let s2: BTreeMap<String, i32> = [("b".to_string(), 3)].into_iter().collect();
/// defaults(&mut obj, &[&s1, &s2]);
/// assert_eq!(obj["a"], 1);
/// assert_eq!(obj["b"], 2);
/// ```
pub fn defaults<'t, M, S>(target: &'t mut M, sources: &[&S]) -> &'t mut M
where
    M: Mapping + ?Sized,
    M::Value: Clone,
    S: Collection<Item = M::Value> + ?Sized,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            let key = key.to_string();
            if !target.has_key(&key) {
                target.set(key, value.clone());
            }
        });
    });
    target
}
