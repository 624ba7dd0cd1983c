//! Named-property lookup on elements.
//!
//! Used wherever an operation accepts a property name instead of a
//! function: [`pluck`](crate::transform::pluck) and
//! [`sort_by_property`](crate::arrays::sort_by_property).

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::Value;

/// An element that exposes values by name.
pub trait Property {
    /// Type of the looked-up value.
    type Value;

    /// Returns the value stored under `name`, or `None` if absent.
    fn property(&self, name: &str) -> Option<&Self::Value>;
}

/// Objects look up by key; arrays accept a decimal index as the name.
impl Property for Value {
    type Value = Value;

    fn property(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(name),
            Value::Array(items) => name.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }
}

impl<V> Property for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Property for HashMap<String, V, S> {
    type Value = V;

    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}
