//! Immutable ordered sequence of tree values.

use crate::macros::deny_mutation;
use canopy_tree::{TreeValue, ValueRef};
use std::ops::Index;

/// An ordered, fixed-length sequence of [`ValueRef`] values.
///
/// Construction converts (takes or copies) the source data; afterwards no
/// operation can change the length or any element. Equality and hashing are
/// structural over the element sequence, so instances can serve as mapping
/// keys or set members.
///
/// The mutating operations of an ordinary vector still exist by name, but
/// every one of them returns
/// [`CollectionError::MutationDenied`](crate::CollectionError::MutationDenied).
///
/// # Examples
/// ```rust
/// use canopy_collections::FrozenList;
/// use canopy_tree::value;
///
/// let list = FrozenList::new([value(1_i64), value(2_i64), value(3_i64)]);
/// assert_eq!(list.len(), 3);
/// assert!(list.push(value(4_i64)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FrozenList {
    items: Vec<ValueRef>,
}

impl FrozenList {
    /// Creates a frozen list from any ordered source of values.
    ///
    /// No extra buffering happens here: an unbounded iterator hangs exactly
    /// as collecting into a vector would.
    pub fn new(items: impl IntoIterator<Item = ValueRef>) -> Self {
        Self { items: items.into_iter().collect() }
    }

    /// Creates a frozen list by cloning a slice of values.
    #[must_use]
    pub fn from_slice(items: &[ValueRef]) -> Self {
        Self { items: items.to_vec() }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`, if in bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ValueRef> {
        self.items.get(index)
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&ValueRef> {
        self.items.first()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&ValueRef> {
        self.items.last()
    }

    /// Returns `true` if some element equals `probe` by value.
    #[must_use]
    pub fn contains(&self, probe: &dyn TreeValue) -> bool {
        self.items.iter().any(|item| item.dyn_eq(probe))
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValueRef> {
        self.items.iter()
    }

    /// The plain element sequence. Together with [`FrozenList::from`],
    /// the reconstruction recipe for copy/serialize round-trips.
    #[must_use]
    pub fn contents(&self) -> &[ValueRef] {
        &self.items
    }

    /// Clones the plain element sequence out of the container.
    #[must_use]
    pub fn to_contents(&self) -> Vec<ValueRef> {
        self.items.clone()
    }

    deny_mutation! { "FrozenList" =>
        set(index: usize, value: ValueRef),
        push(value: ValueRef),
        pop(),
        insert(index: usize, value: ValueRef),
        remove(index: usize),
        clear(),
        extend_with(values: Vec<ValueRef>),
        truncate(len: usize),
        reverse(),
        sort(),
        swap(a: usize, b: usize),
    }
}

impl From<Vec<ValueRef>> for FrozenList {
    fn from(items: Vec<ValueRef>) -> Self {
        Self { items }
    }
}

impl FromIterator<ValueRef> for FrozenList {
    fn from_iter<I: IntoIterator<Item = ValueRef>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Index<usize> for FrozenList {
    type Output = ValueRef;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a FrozenList {
    type Item = &'a ValueRef;
    type IntoIter = std::slice::Iter<'a, ValueRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
