//! Structural comparison and copying of nested values.
//!
//! The algorithms only need to tell leaves, sequences and mappings apart, so
//! they are written against the [`Tree`] view rather than a concrete type.

use serde_json::{Map, Value};

/// Shape of one node in a tree.
pub enum Node<'a, T> {
    Leaf,
    Sequence(&'a [T]),
    Mapping(Vec<(&'a str, &'a T)>),
}

/// A recursive value that can be viewed as leaves, sequences and mappings.
pub trait Tree: Sized {
    fn node(&self) -> Node<'_, Self>;

    /// Equality of two leaves.
    fn leaf_eq(&self, other: &Self) -> bool;

    fn copy_leaf(&self) -> Self;

    fn from_sequence(items: Vec<Self>) -> Self;

    fn from_mapping(entries: Vec<(String, Self)>) -> Self;
}

/// Structural equality ignoring the mapping keys in `ignore` at every depth.
///
/// Sequences compare positionally. Mappings must hold the same set of
/// non-ignored keys on both sides with equal values. Nodes of different
/// shapes are never equal.
pub fn deep_equals<T: Tree>(a: &T, b: &T, ignore: &[&str]) -> bool {
    match (a.node(), b.node()) {
        (Node::Leaf, Node::Leaf) => a.leaf_eq(b),
        (Node::Sequence(left), Node::Sequence(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right)
                    .all(|(x, y)| deep_equals(x, y, ignore))
        }
        (Node::Mapping(left), Node::Mapping(right)) => {
            let compared = |key: &&str| !ignore.contains(key);

            let values_match = left.iter().filter(|(key, _)| compared(key)).all(|(key, value)| {
                right
                    .iter()
                    .find(|(other, _)| other == key)
                    .is_some_and(|(_, other)| deep_equals(*value, *other, ignore))
            });

            values_match
                && right
                    .iter()
                    .filter(|(key, _)| compared(key))
                    .all(|(key, _)| left.iter().any(|(other, _)| other == key))
        }
        _ => false,
    }
}

/// Recursively copies a tree; the result shares nothing with the input.
pub fn deep_copy<T: Tree>(value: &T) -> T {
    match value.node() {
        Node::Leaf => value.copy_leaf(),
        Node::Sequence(items) => T::from_sequence(items.iter().map(deep_copy).collect()),
        Node::Mapping(entries) => T::from_mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), deep_copy(value)))
                .collect(),
        ),
    }
}

impl Tree for Value {
    fn node(&self) -> Node<'_, Self> {
        match self {
            Value::Array(items) => Node::Sequence(items),
            Value::Object(map) => {
                Node::Mapping(map.iter().map(|(key, value)| (key.as_str(), value)).collect())
            }
            _ => Node::Leaf,
        }
    }

    fn leaf_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn copy_leaf(&self) -> Self {
        self.clone()
    }

    fn from_sequence(items: Vec<Self>) -> Self {
        Value::Array(items)
    }

    fn from_mapping(entries: Vec<(String, Self)>) -> Self {
        Value::Object(entries.into_iter().collect::<Map<String, Value>>())
    }
}
