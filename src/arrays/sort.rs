//! Stable sorting by a derived key.

use std::cmp::Ordering;

use serde_json::Value;

use crate::collection::Collection;
use crate::property::Property;
use crate::transform::map;

/// Total ascending order used by the sorting helpers.
///
/// Floats order by `total_cmp`. `None` sorts after every `Some`, so
/// elements missing a sort key end up last. JSON values order by kind
/// first (`null < bool < number < string < array < object`), then by
/// content; objects compare equal to each other.
pub trait SortOrder {
    /// Compares `self` with `other`.
    fn sort_cmp(&self, other: &Self) -> Ordering;
}

macro_rules! sort_order_via_ord {
    ($($t:ty),*) => {
        $(impl SortOrder for $t {
            fn sort_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        })*
    };
}

sort_order_via_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String
);

impl SortOrder for f32 {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl SortOrder for f64 {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: SortOrder> SortOrder for Option<T> {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(a), Some(b)) => a.sort_cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl<T: SortOrder + ?Sized> SortOrder for &T {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        (**self).sort_cmp(*other)
    }
}

impl<A: SortOrder, B: SortOrder> SortOrder for (A, B) {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        self.0.sort_cmp(&other.0).then_with(|| self.1.sort_cmp(&other.1))
    }
}

impl SortOrder for Value {
    fn sort_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a.as_f64().sort_cmp(&b.as_f64()),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| x.sort_cmp(y))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            _ => kind_rank(self).cmp(&kind_rank(other)),
        }
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Returns the elements sorted ascending by `key_fn`.
///
/// The sort is stable: elements with equal keys keep their original
/// relative order.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Examples
/// ```
/// use u_fnkit::arrays::sort_by;
/// let words = ["banana", "fig", "apple"];
/// assert_eq!(sort_by(&words[..], |w| w.len()), vec!["fig", "apple", "banana"]);
/// ```
pub fn sort_by<C, K, F>(collection: &C, mut key_fn: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: SortOrder,
    F: FnMut(&C::Item) -> K,
{
    let mut keyed = map(collection, |item| (key_fn(item), item.clone()));
    keyed.sort_by(|a, b| a.0.sort_cmp(&b.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Returns the elements sorted ascending by the named property.
///
/// Elements lacking the property sort last, in their original order.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use u_fnkit::arrays::sort_by_property;
/// let people = vec![
///     json!({"name": "curly", "age": 50}),
///     json!({"name": "moe", "age": 30}),
/// ];
/// let sorted = sort_by_property(&people, "age");
/// assert_eq!(sorted[0]["name"], "moe");
/// ```
pub fn sort_by_property<C, V>(collection: &C, name: &str) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + Property<Value = V>,
    V: Clone + SortOrder,
{
    sort_by(collection, |item| item.property(name).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn test_sort_by_is_stable() {
        let data = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = sort_by(&data, |pair| pair.0);
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn test_sort_by_does_not_mutate() {
        let data = vec![3, 1, 2];
        assert_eq!(sort_by(&data, |n| *n), vec![1, 2, 3]);
        assert_eq!(data, vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_float_keys() {
        let data = vec![2.5, -1.0, 0.0];
        assert_eq!(sort_by(&data, |x| *x), vec![-1.0, 0.0, 2.5]);
    }

    #[test]
    fn test_sort_by_property_json() {
        let people = vec![
            json!({"name": "curly", "age": 50}),
            json!({"name": "nobody"}),
            json!({"name": "moe", "age": 30}),
            json!({"name": "larry", "age": 30}),
        ];
        let names: Vec<_> = sort_by_property(&people, "age")
            .into_iter()
            .map(|p| p["name"].clone())
            .collect();
        assert_eq!(
            names,
            vec![json!("moe"), json!("larry"), json!("curly"), json!("nobody")]
        );
    }

    #[test]
    fn test_sort_by_property_names() {
        let people = vec![json!({"name": "moe"}), json!({"name": "curly"})];
        let sorted = sort_by_property(&people, "name");
        assert_eq!(sorted[0]["name"], "curly");
    }

    #[test]
    fn test_sort_by_property_maps() {
        let rows: Vec<BTreeMap<String, i64>> = vec![
            [("rank".to_string(), 2)].into_iter().collect(),
            [("rank".to_string(), 1)].into_iter().collect(),
        ];
        let sorted = sort_by_property(&rows, "rank");
        assert_eq!(sorted[0]["rank"], 1);
    }

    #[test]
    fn test_json_kind_order() {
        let mut values = vec![json!("s"), json!(1), json!(null), json!([1]), json!(true)];
        values.sort_by(|a, b| a.sort_cmp(b));
        assert_eq!(
            values,
            vec![json!(null), json!(true), json!(1), json!("s"), json!([1])]
        );
    }

    #[test]
    fn test_json_array_order() {
        assert_eq!(json!([1, 2]).sort_cmp(&json!([1, 3])), Ordering::Less);
        assert_eq!(json!([1]).sort_cmp(&json!([1, 0])), Ordering::Less);
    }

    #[test]
    fn test_option_none_last() {
        assert_eq!(Some(5).sort_cmp(&None), Ordering::Less);
        assert_eq!(None::<i32>.sort_cmp(&Some(0)), Ordering::Greater);
    }
}
