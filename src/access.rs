//! Positional access into sequences.
//!
//! These helpers index the slice directly rather than going through
//! [`each`](crate::collection::each). Slicing helpers borrow from the
//! input; nothing is copied.

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
/// ```
/// use u_fnkit::access::first;
/// assert_eq!(first(&[3, 4]), Some(&3));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Returns the first `min(n, len)` elements, in order.
///
/// `n == 0` yields an empty slice.
///
/// # Examples
/// ```
/// use u_fnkit::access::first_n;
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 10), &[1, 2, 3]);
/// ```
pub fn first_n<T>(seq: &[T], n: usize) -> &[T] {
    &seq[..n.min(seq.len())]
}

/// Returns the last element, or `None` for an empty sequence.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Returns the last `n` elements, in order.
///
/// If `n` exceeds the length the whole sequence is returned.
///
/// # Examples
/// ```
/// use u_fnkit::access::last_n;
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
pub fn last_n<T>(seq: &[T], n: usize) -> &[T] {
    if n >= seq.len() {
        return seq;
    }
    &seq[seq.len() - n..]
}

/// Returns the lowest index whose element equals `target`.
///
/// # Complexity
/// Time: O(n)
///
/// # Examples
/// ```
/// use u_fnkit::access::index_of;
/// assert_eq!(index_of(&[1, 2, 2], &2), Some(1));
/// assert_eq!(index_of(&[1, 2, 2], &9), None);
/// ```
pub fn index_of<T: PartialEq>(seq: &[T], target: &T) -> Option<usize> {
    seq.iter().position(|item| item == target)
}
