//! The traversal primitive and the two collection shapes it understands.
//!
//! A collection is either a **sequence** (index-addressable, visited in
//! index order `0..len`) or a **mapping** (string keys, visited in the
//! map's own iteration order, which is stable for a single traversal).
//! Both shapes implement [`Collection`]; every other traversal-based
//! operation in the crate is written against that trait and never asks
//! which shape it was handed.
//!
//! Statically typed collections pick their shape at compile time. Dynamic
//! JSON data picks it at runtime through [`Dynamic`], which is the only
//! place an unsupported shape can be rejected.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Position of an element within its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Index into a sequence.
    Index(usize),
    /// Key into a mapping.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns the index if this key addresses a sequence element.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Key::Index(i) => Some(i),
            Key::Name(_) => None,
        }
    }

    /// Returns the name if this key addresses a mapping entry.
    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Anything that can be traversed yielding `(value, key)` pairs.
///
/// Implementations must call the visitor exactly once per element and
/// pass the collection itself as the third argument.
pub trait Collection {
    /// Element type.
    type Item;

    /// Calls `visit(value, key, self)` once per element.
    fn each<F>(&self, visit: F)
    where
        F: FnMut(&Self::Item, Key<'_>, &Self);

    /// Number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the collection has no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Calls `visit(value, key, collection)` for each element of `collection`.
///
/// Sequences are visited in index order; mappings in their iteration order.
/// Empty collections produce zero calls.
///
/// # Examples
/// ```
/// use u_fnkit::collection::each;
/// let mut seen = Vec::new();
/// each(&["a", "b"][..], |value, key, _| seen.push((key.index(), *value)));
/// assert_eq!(seen, vec![(Some(0), "a"), (Some(1), "b")]);
/// ```
pub fn each<C, F>(collection: &C, visit: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, Key<'_>, &C),
{
    collection.each(visit);
}

/// Returns its argument unchanged. Default transform where one is optional.
pub fn identity<T>(value: T) -> T {
    value
}

impl<T> Collection for [T] {
    type Item = T;

    fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&T, Key<'_>, &Self),
    {
        for (i, value) in self.iter().enumerate() {
            visit(value, Key::Index(i), self);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&T, Key<'_>, &Self),
    {
        for (i, value) in self.iter().enumerate() {
            visit(value, Key::Index(i), self);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&T, Key<'_>, &Self),
    {
        for (i, value) in self.iter().enumerate() {
            visit(value, Key::Index(i), self);
        }
    }

    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for BTreeMap<String, T> {
    type Item = T;

    fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&T, Key<'_>, &Self),
    {
        for (key, value) in self {
            visit(value, Key::Name(key), self);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S: BuildHasher> Collection for HashMap<String, T, S> {
    type Item = T;

    fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&T, Key<'_>, &Self),
    {
        for (key, value) in self {
            visit(value, Key::Name(key), self);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Collection for Map<String, Value> {
    type Item = Value;

    fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&Value, Key<'_>, &Self),
    {
        for (key, value) in self {
            visit(value, Key::Name(key), self);
        }
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Runtime-shaped view over a JSON value.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use u_fnkit::collection::{Collection, Dynamic};
/// let data = json!({"a": 1, "b": 2});
/// let view = Dynamic::try_from(&data).unwrap();
/// assert_eq!(view.size(), 2);
/// assert!(!view.is_empty());
/// assert!(Dynamic::try_from(&json!(3)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dynamic<'a> {
    /// A JSON array.
    Sequence(&'a [Value]),
    /// A JSON object.
    Mapping(&'a Map<String, Value>),
}

impl<'a> TryFrom<&'a Value> for Dynamic<'a> {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Dynamic::Sequence(items)),
            Value::Object(map) => Ok(Dynamic::Mapping(map)),
            other => Err(Error::InvalidArgument(shape_name(other).to_string())),
        }
    }
}

impl Collection for Dynamic<'_> {
    type Item = Value;

    fn each<F>(&self, mut visit: F)
    where
        F: FnMut(&Value, Key<'_>, &Self),
    {
        match self {
            Dynamic::Sequence(items) => {
                for (i, value) in items.iter().enumerate() {
                    visit(value, Key::Index(i), self);
                }
            }
            Dynamic::Mapping(map) => {
                for (key, value) in map.iter() {
                    visit(value, Key::Name(key), self);
                }
            }
        }
    }

    fn size(&self) -> usize {
        match self {
            Dynamic::Sequence(items) => items.len(),
            Dynamic::Mapping(map) => map.len(),
        }
    }
}

/// Human-readable name of a JSON value's shape.
pub(crate) fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn each_visits_every_index_once(data in proptest::collection::vec(any::<i32>(), 0..40)) {
            let mut indices = Vec::new();
            each(&data[..], |_, key, _| indices.push(key.index().unwrap()));
            prop_assert_eq!(indices, (0..data.len()).collect::<Vec<_>>());
        }
    }
}
