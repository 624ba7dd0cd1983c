//! Filtering, deduplication and element-wise transformation.
//!
//! Every operation here walks its input through
//! [`each`](crate::collection::each) and returns a freshly allocated
//! `Vec`; inputs are never mutated.

use crate::aggregate::contains;
use crate::collection::{each, Collection};
use crate::property::Property;

/// Returns the elements for which `predicate` holds, in traversal order.
///
/// # Examples
/// ```
/// use u_fnkit::transform::filter;
/// let evens = filter(&[1, 2, 3, 4, 5, 6][..], |n| n % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut kept = Vec::new();
    each(collection, |item, _, _| {
        if predicate(item) {
            kept.push(item.clone());
        }
    });
    kept
}

/// Returns the elements for which `predicate` does not hold.
///
/// # Examples
/// ```
/// use u_fnkit::transform::reject;
/// let odds = reject(&[1, 2, 3, 4, 5, 6][..], |n| n % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |item| !predicate(item))
}

/// Removes duplicate elements, comparing elements directly.
///
/// See [`uniq_by`] for the meaning of `is_sorted`.
///
/// # Examples
/// ```
/// use u_fnkit::transform::uniq;
/// assert_eq!(uniq(&[1, 2, 1, 3, 1, 4][..], false), vec![1, 2, 3, 4]);
/// assert_eq!(uniq(&[1, 2, 2, 3, 4, 4][..], true), vec![1, 2, 3, 4]);
/// ```
pub fn uniq<C>(collection: &C, is_sorted: bool) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone + PartialEq,
{
    uniq_by(collection, is_sorted, |item| item.clone())
}

/// Removes duplicates, comparing the keys produced by `key_fn`.
///
/// # Algorithm
/// - Unsorted (`is_sorted == false`): an element is kept the first time
///   its key is not among the keys kept so far. The kept keys are a
///   linear list searched with [`contains`]. O(n²).
/// - Sorted (`is_sorted == true`): the input is assumed grouped by key;
///   an element is kept only when its key differs from the most recently
///   kept key, so only adjacent duplicates collapse. O(n).
///
/// # Examples
/// ```
/// use u_fnkit::transform::uniq_by;
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = uniq_by(&words[..], true, |w| w.chars().next());
/// assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
/// ```
pub fn uniq_by<C, K, F>(collection: &C, is_sorted: bool, mut key_fn: F) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    K: PartialEq,
    F: FnMut(&C::Item) -> K,
{
    let mut kept = Vec::new();
    if is_sorted {
        let mut last_key: Option<K> = None;
        each(collection, |item, _, _| {
            let key = key_fn(item);
            if last_key.as_ref() != Some(&key) {
                kept.push(item.clone());
                last_key = Some(key);
            }
        });
    } else {
        let mut seen: Vec<K> = Vec::new();
        each(collection, |item, _, _| {
            let key = key_fn(item);
            if !contains(&seen[..], &key) {
                kept.push(item.clone());
                seen.push(key);
            }
        });
    }
    kept
}

/// Applies `f` to every element, one output per input, order preserved.
///
/// # Examples
/// ```
/// use u_fnkit::transform::map;
/// assert_eq!(map(&[1, 2, 3][..], |n| n * 10), vec![10, 20, 30]);
/// ```
pub fn map<C, R, F>(collection: &C, mut f: F) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> R,
{
    let mut out = Vec::with_capacity(collection.size());
    each(collection, |item, _, _| out.push(f(item)));
    out
}

/// Extracts the named property of every element.
///
/// Elements lacking the property contribute `None`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use u_fnkit::transform::pluck;
/// let people = vec![json!({"name": "moe", "age": 30}), json!({"name": "curly"})];
/// assert_eq!(pluck(&people, "age"), vec![Some(json!(30)), None]);
/// ```
pub fn pluck<C, V>(collection: &C, name: &str) -> Vec<Option<V>>
where
    C: Collection + ?Sized,
    C::Item: Property<Value = V>,
    V: Clone,
{
    map(collection, |item| item.property(name).cloned())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn reject_equals_filter_with_negation(
            data in proptest::collection::vec(-100_i32..100, 0..50),
            threshold in -100_i32..100,
        ) {
            let rejected = reject(&data[..], |n| *n > threshold);
            let filtered = filter(&data[..], |n| !(*n > threshold));
            prop_assert_eq!(rejected, filtered);
        }

        #[test]
        fn uniq_unsorted_has_no_duplicates(
            data in proptest::collection::vec(0_u8..10, 0..60),
        ) {
            let out = uniq(&data[..], false);
            for (i, a) in out.iter().enumerate() {
                prop_assert!(!out[i + 1..].contains(a));
            }
            for x in &data {
                prop_assert!(out.contains(x));
            }
        }

        #[test]
        fn uniq_sorted_matches_dedup_on_sorted_input(
            mut data in proptest::collection::vec(0_u8..10, 0..60),
        ) {
            data.sort_unstable();
            let mut expected = data.clone();
            expected.dedup();
            prop_assert_eq!(uniq(&data[..], true), expected);
        }

        #[test]
        fn map_preserves_length(data in proptest::collection::vec(any::<i32>(), 0..50)) {
            prop_assert_eq!(map(&data[..], |n| i64::from(*n) * 2).len(), data.len());
        }
    }
}
