//! Reduction and the predicates derived from it.
//!
//! [`reduce`] and [`fold`] are the second traversal primitive after
//! [`each`](crate::collection::each); [`contains`], [`every`] and [`some`]
//! are all expressed as folds.

use serde_json::Value;

use crate::collection::{each, Collection};
use crate::error::{Error, Result};

/// Folds the collection left to right into a single element.
///
/// With `Some(seed)` the accumulator starts at `seed` and `f` sees every
/// element. With `None` the first element becomes the accumulator and
/// folding starts at the second, so a single-element collection is
/// returned as is without calling `f`.
///
/// # Errors
/// [`Error::EmptyCollection`] when `seed` is `None` and the collection is
/// empty.
///
/// # Examples
/// ```
/// use u_fnkit::aggregate::reduce;
/// assert_eq!(reduce(&[1, 2, 3][..], |a, b| a + b, Some(0)), Ok(6));
/// assert_eq!(reduce(&[5][..], |a, b| a + b * b, None), Ok(5));
/// assert!(reduce(&[0_i32; 0][..], |a, b| a + b, None).is_err());
/// ```
pub fn reduce<C, F>(collection: &C, mut f: F, seed: Option<C::Item>) -> Result<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    let mut acc = seed;
    each(collection, |item, _, _| {
        acc = Some(match acc.take() {
            Some(current) => f(current, item),
            None => item.clone(),
        });
    });
    acc.ok_or(Error::EmptyCollection)
}

/// Folds the collection left to right starting from `seed`.
///
/// Unlike [`reduce`], the accumulator may have a different type from the
/// elements, and an empty collection simply yields `seed`.
///
/// # Examples
/// ```
/// use u_fnkit::aggregate::fold;
/// let total_len = fold(&["ab", "cde"][..], 0, |n, s| n + s.len());
/// assert_eq!(total_len, 5);
/// ```
pub fn fold<C, B, F>(collection: &C, seed: B, mut f: F) -> B
where
    C: Collection + ?Sized,
    F: FnMut(B, &C::Item) -> B,
{
    let mut acc = Some(seed);
    each(collection, |item, _, _| {
        acc = acc.take().map(|current| f(current, item));
    });
    match acc {
        Some(result) => result,
        None => unreachable!("accumulator is restored after every step"),
    }
}

/// Returns `true` if any element equals `target`.
///
/// # Examples
/// ```
/// use u_fnkit::aggregate::contains;
/// assert!(contains(&[1, 2, 3][..], &2));
/// assert!(!contains(&[1, 2, 3][..], &7));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    fold(collection, false, |found, item| found || item == target)
}

/// Returns `true` if `predicate` holds for every element.
///
/// Vacuously `true` for an empty collection. Once a failing element is
/// seen the predicate is not consulted again.
///
/// # Examples
/// ```
/// use u_fnkit::aggregate::every;
/// assert!(every(&[2, 4, 6][..], |n| n % 2 == 0));
/// assert!(every(&[0_i32; 0][..], |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    fold(collection, true, |all, item| all && predicate(item))
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// Defined as the complement of [`every`] with the predicate negated,
/// hence `false` for an empty collection.
///
/// # Examples
/// ```
/// use u_fnkit::aggregate::some;
/// assert!(some(&[1, 3, 4][..], |n| n % 2 == 0));
/// assert!(!some(&[0_i32; 0][..], |_| true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    !every(collection, |item| !predicate(item))
}

/// [`every`] with each element's own truthiness as the predicate.
///
/// # Examples
/// ```
/// use u_fnkit::aggregate::every_truthy;
/// assert!(every_truthy(&[true, true][..]));
/// assert!(!every_truthy(&[1, 0, 2][..]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, <C::Item as Truthy>::is_truthy)
}

/// [`some`] with each element's own truthiness as the predicate.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, <C::Item as Truthy>::is_truthy)
}

/// Values with a notion of truthiness.
///
/// Zero, empty strings, `false`, `None`, NaN and JSON `null` are falsy.
/// JSON arrays and objects are truthy even when empty.
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_truthy())
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|x| x.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn seeded_reduce_matches_iterator_sum(
            data in proptest::collection::vec(-1000_i64..1000, 0..50),
        ) {
            let expected: i64 = data.iter().sum();
            prop_assert_eq!(reduce(&data[..], |a, b| a + b, Some(0)), Ok(expected));
        }

        #[test]
        fn some_is_complement_of_every(
            data in proptest::collection::vec(-50_i32..50, 0..30),
            pivot in -50_i32..50,
        ) {
            let any_below = some(&data[..], |n| *n < pivot);
            let none_below = every(&data[..], |n| *n >= pivot);
            prop_assert_eq!(any_below, !none_below);
            prop_assert_eq!(any_below, data.iter().any(|n| *n < pivot));
        }

        #[test]
        fn contains_agrees_with_slice(
            data in proptest::collection::vec(0_u8..20, 0..30),
            target in 0_u8..20,
        ) {
            prop_assert_eq!(contains(&data[..], &target), data.contains(&target));
        }
    }
}
