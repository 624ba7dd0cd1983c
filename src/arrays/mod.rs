//! Higher-level sequence utilities built on the traversal primitives.
//!
//! - [`shuffle`]: random permutation without touching the input
//! - [`sort_by`], [`sort_by_property`]: stable ascending sort by a key
//! - [`zip`]: transpose sequences into tuples, padding with `None`
//! - [`flatten`]: depth-first leaves of arbitrarily nested sequences
//! - [`intersection`], [`difference`]: set algebra by equality
//! - [`invoke`], [`invoke_method`]: call something on every element

mod flatten;
mod invoke;
mod sort;

pub use flatten::{flatten, Nested, Node, Tree};
pub use invoke::{invoke, invoke_method, Invocable};
pub use sort::{sort_by, sort_by_property, SortOrder};

use rand::Rng;

use crate::aggregate::{contains, every, fold, some};
use crate::collection::each;
use crate::random::pick_index;
use crate::transform::{filter, map, reject, uniq};

/// Returns a uniformly random permutation of `seq` using the thread RNG.
///
/// The input is left unchanged.
///
/// # Examples
/// ```
/// use u_fnkit::arrays::shuffle;
/// let data = vec![1, 2, 3, 4];
/// let mut out = shuffle(&data);
/// out.sort();
/// assert_eq!(out, data);
/// ```
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::rng())
}

/// Returns a uniformly random permutation of `seq` drawn from `rng`.
///
/// # Algorithm
/// Repeatedly picks a uniformly random element of a working copy and
/// moves it to the output. Equivalent in distribution to Fisher-Yates.
///
/// # Complexity
/// Time: O(n²) from removals, Space: O(n)
///
/// # Examples
/// ```
/// use u_fnkit::arrays::shuffle_with;
/// use u_fnkit::random::create_rng;
/// let a = shuffle_with(&[1, 2, 3, 4, 5], &mut create_rng(42));
/// let b = shuffle_with(&[1, 2, 3, 4, 5], &mut create_rng(42));
/// assert_eq!(a, b);
/// ```
pub fn shuffle_with<T: Clone, R: Rng>(seq: &[T], rng: &mut R) -> Vec<T> {
    let mut working = seq.to_vec();
    let mut out = Vec::with_capacity(seq.len());
    each(seq, |_, _, _| {
        if let Some(i) = pick_index(working.len(), &mut *rng) {
            out.push(working.remove(i));
        }
    });
    out
}

/// Groups the `i`-th elements of every sequence into the `i`-th tuple.
///
/// The result is as long as the longest input; shorter inputs contribute
/// `None` past their end.
///
/// # Examples
/// ```
/// use u_fnkit::arrays::zip;
/// let zipped = zip(&[&[1, 2, 3][..], &[4, 5][..]]);
/// assert_eq!(zipped, vec![
///     vec![Some(1), Some(4)],
///     vec![Some(2), Some(5)],
///     vec![Some(3), None],
/// ]);
/// ```
pub fn zip<T: Clone>(seqs: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = fold(seqs, 0, |n, seq| n.max(seq.len()));
    let positions: Vec<usize> = (0..longest).collect();
    map(&positions, |&i| map(seqs, |seq| seq.get(i).cloned()))
}

/// Returns the distinct elements present in every sequence.
///
/// Order follows the first sequence. No sequences yields an empty result.
///
/// # Examples
/// ```
/// use u_fnkit::arrays::intersection;
/// let common = intersection(&[&[1, 2, 3][..], &[2, 3, 4][..], &[2, 5][..]]);
/// assert_eq!(common, vec![2]);
/// ```
pub fn intersection<T: Clone + PartialEq>(seqs: &[&[T]]) -> Vec<T> {
    let Some((head, rest)) = seqs.split_first() else {
        return Vec::new();
    };
    let candidates = uniq(*head, false);
    filter(&candidates, |item| every(rest, |other| contains(*other, item)))
}

/// Returns the elements of `first` found in none of `others`.
///
/// Order and duplicates of `first` are preserved.
///
/// # Examples
/// ```
/// use u_fnkit::arrays::difference;
/// assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4][..]]), vec![1, 3]);
/// ```
pub fn difference<T: Clone + PartialEq>(first: &[T], others: &[&[T]]) -> Vec<T> {
    reject(first, |item| some(others, |other| contains(*other, item)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use serde_json::{json, Value};

    #[test]
    fn test_shuffle_preserves_input() {
        let data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let out = shuffle_with(&data, &mut create_rng(123));
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let mut sorted = out.clone();
        sorted.sort();
        assert_eq!(sorted, data);
    }

    #[test]
    fn test_shuffle_actually_shuffles() {
        // With 10 elements, probability of identity permutation is 1/10! ≈ 2.8e-7
        let original = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let out = shuffle_with(&original, &mut create_rng(42));
        assert_ne!(out, original, "shuffle should change order (probabilistic)");
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        assert!(shuffle::<i32>(&[]).is_empty());
        assert_eq!(shuffle(&[42]), vec![42]);
    }

    #[test]
    fn test_shuffle_first_position_roughly_uniform() {
        let mut rng = create_rng(5);
        let mut counts = [0u32; 3];
        for _ in 0..3000 {
            counts[shuffle_with(&[0_usize, 1, 2], &mut rng)[0]] += 1;
        }
        for c in counts {
            assert!((800..1200).contains(&c), "skewed counts: {counts:?}");
        }
    }

    #[test]
    fn test_zip_pads_with_none() {
        let letters = [json!("a"), json!("b"), json!("c"), json!("d")];
        let numbers = [json!(1), json!(2), json!(3)];
        let zipped: Vec<Vec<Option<Value>>> = zip(&[&letters[..], &numbers[..]]);
        assert_eq!(zipped.len(), 4);
        assert_eq!(zipped[0], vec![Some(json!("a")), Some(json!(1))]);
        assert_eq!(zipped[3], vec![Some(json!("d")), None]);
    }

    #[test]
    fn test_zip_empty() {
        assert!(zip::<i32>(&[]).is_empty());
        let empty: &[i32] = &[];
        assert!(zip(&[empty, empty]).is_empty());
    }

    #[test]
    fn test_intersection_dedups_and_keeps_first_order() {
        let out = intersection(&[&[3, 1, 3, 2][..], &[1, 2, 3][..]]);
        assert_eq!(out, vec![3, 1, 2]);
    }

    #[test]
    fn test_intersection_single_and_none() {
        assert_eq!(intersection(&[&[1, 1, 2][..]]), vec![1, 2]);
        assert!(intersection::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_difference_keeps_duplicates() {
        assert_eq!(difference(&[1, 1, 2, 3], &[&[3][..]]), vec![1, 1, 2]);
        assert_eq!(difference(&[1, 2, 3, 4], &[&[2][..], &[4][..]]), vec![1, 3]);
        assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
    }
}
