//! Reconstruction contexts and keypath tokens.

use crate::value::ValueRef;
use std::fmt;

/// Reconstruction metadata produced by a node's flatten and consumed only by
/// the same node type's unflatten.
///
/// A context paired with a fresh child sequence is sufficient to rebuild a
/// container equal in value to the original. Contexts are hashable so
/// downstream engines can use them in shape descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Context {
    /// Element count of a sequence kind.
    Arity(usize),
    /// Key sequence of a mapping kind, in canonical (insertion) order.
    /// Children are handed back as bare values, so the keys must survive here.
    Keys(Vec<ValueRef>),
    /// Opaque metadata for third-party node kinds.
    Custom(ValueRef),
}

impl Context {
    /// Returns the number of children this context expects, when knowable.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Arity(n) => Some(*n),
            Self::Keys(keys) => Some(keys.len()),
            Self::Custom(_) => None,
        }
    }
}

/// Identifier of a child's position within its parent.
///
/// Emitted by `flatten_with_keys` so consumers can render a human-readable
/// path to any leaf of a nested structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyToken {
    /// Position in a sequence kind.
    Index(usize),
    /// Key in a mapping kind.
    Key(ValueRef),
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Key(key) => write!(f, "[{key:?}]"),
        }
    }
}
