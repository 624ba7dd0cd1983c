//! Flattening of arbitrarily nested sequences, deep or one level.

use serde_json::Value;

use crate::collection::each;

/// One level of a nested structure: either more nesting or a leaf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a, N, L> {
    /// A nested sequence.
    Branch(&'a [N]),
    /// A terminal value.
    Leaf(&'a L),
}

/// Values that may contain sequences of themselves.
pub trait Nested: Sized {
    /// Terminal value type.
    type Leaf;

    /// Classifies this value as a branch or a leaf.
    fn node(&self) -> Node<'_, Self, Self::Leaf>;
}

/// JSON arrays are branches; every other value is a leaf.
impl Nested for Value {
    type Leaf = Value;

    fn node(&self) -> Node<'_, Value, Value> {
        match self {
            Value::Array(items) => Node::Branch(items),
            other => Node::Leaf(other),
        }
    }
}

/// Owned tree of values with arbitrary nesting depth.
///
/// # Examples
/// ```
/// use u_fnkit::arrays::{flatten, Tree};
/// let nested = vec![Tree::Leaf(1), Tree::Branch(vec![Tree::Leaf(2), Tree::Leaf(3)])];
/// assert_eq!(flatten(&nested), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree<T> {
    /// A terminal value.
    Leaf(T),
    /// A nested sequence of subtrees.
    Branch(Vec<Tree<T>>),
}

impl<T> Nested for Tree<T> {
    type Leaf = T;

    fn node(&self) -> Node<'_, Tree<T>, T> {
        match self {
            Tree::Leaf(value) => Node::Leaf(value),
            Tree::Branch(children) => Node::Branch(children),
        }
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Tree::Leaf(value)
    }
}

/// Collects every leaf of a nested sequence, depth-first, left to right.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use u_fnkit::arrays::flatten;
/// let nested = json!([1, [2, [3, [4]], 5]]);
/// let flat = flatten(nested.as_array().unwrap());
/// assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
/// ```
pub fn flatten<N>(seq: &[N]) -> Vec<N::Leaf>
where
    N: Nested,
    N::Leaf: Clone,
{
    let mut out = Vec::new();
    flatten_into(seq, &mut out);
    out
}

fn flatten_into<N>(seq: &[N], out: &mut Vec<N::Leaf>)
where
    N: Nested,
    N::Leaf: Clone,
{
    each(seq, |item, _, _| match item.node() {
        Node::Branch(children) => flatten_into(children, &mut *out),
        Node::Leaf(leaf) => out.push(leaf.clone()),
    });
}
