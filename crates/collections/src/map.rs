//! Immutable insertion-ordered mapping of tree values.

use crate::macros::deny_mutation;
use canopy_tree::{TreeValue, ValueRef};
use fxhash::FxHashMap;
use std::collections::hash_map::Entry;
use std::hash::{Hash, Hasher};

/// An insertion-ordered mapping of unique [`ValueRef`] keys to values.
///
/// Construction converts the source pairs; duplicate keys keep their first
/// position and take the last value, the way repeated assignment into an
/// ordinary insertion-ordered map would. Afterwards no operation can change
/// the entries. Equality and hashing are structural over the (key, value)
/// pair sequence.
///
/// # Examples
/// ```rust
/// use canopy_collections::FrozenMap;
/// use canopy_tree::value;
///
/// let map = FrozenMap::new([(value("a"), value(1_i64)), (value("b"), value(2_i64))]);
/// assert_eq!(map.len(), 2);
/// assert!(map.get(&"a").is_some());
/// assert!(map.insert(value("c"), value(3_i64)).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrozenMap {
    entries: Vec<(ValueRef, ValueRef)>,
    index: FxHashMap<ValueRef, usize>,
}

impl FrozenMap {
    /// Creates a frozen map from any source of (key, value) pairs.
    pub fn new(pairs: impl IntoIterator<Item = (ValueRef, ValueRef)>) -> Self {
        let mut entries: Vec<(ValueRef, ValueRef)> = Vec::new();
        let mut index: FxHashMap<ValueRef, usize> = FxHashMap::default();
        for (key, value) in pairs {
            match index.entry(key.clone()) {
                Entry::Occupied(slot) => entries[*slot.get()].1 = value,
                Entry::Vacant(slot) => {
                    slot.insert(entries.len());
                    entries.push((key, value));
                },
            }
        }
        Self { entries, index }
    }

    /// Creates a frozen map by cloning a slice of pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(ValueRef, ValueRef)]) -> Self {
        Self::new(pairs.iter().cloned())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the value stored under `key`, compared by value.
    #[must_use]
    pub fn get(&self, key: &dyn TreeValue) -> Option<&ValueRef> {
        self.index.get(key).map(|slot| &self.entries[*slot].1)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &dyn TreeValue) -> bool {
        self.index.contains_key(key)
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &ValueRef> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &ValueRef> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over the (key, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ValueRef, &ValueRef)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// The plain pair sequence. Together with [`FrozenMap::from`], the
    /// reconstruction recipe for copy/serialize round-trips.
    #[must_use]
    pub fn contents(&self) -> &[(ValueRef, ValueRef)] {
        &self.entries
    }

    /// Clones the plain pair sequence out of the container.
    #[must_use]
    pub fn to_contents(&self) -> Vec<(ValueRef, ValueRef)> {
        self.entries.clone()
    }

    deny_mutation! { "FrozenMap" =>
        insert(key: ValueRef, value: ValueRef),
        remove(key: ValueRef),
        pop(key: ValueRef),
        clear(),
        extend_with(pairs: Vec<(ValueRef, ValueRef)>),
        merge(other: FrozenMap),
        set_default(key: ValueRef, value: ValueRef),
    }
}

impl From<Vec<(ValueRef, ValueRef)>> for FrozenMap {
    fn from(pairs: Vec<(ValueRef, ValueRef)>) -> Self {
        Self::new(pairs)
    }
}

impl FromIterator<(ValueRef, ValueRef)> for FrozenMap {
    fn from_iter<I: IntoIterator<Item = (ValueRef, ValueRef)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a FrozenMap {
    type Item = &'a (ValueRef, ValueRef);
    type IntoIter = std::slice::Iter<'a, (ValueRef, ValueRef)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Equality and hashing ignore the lookup index: the pair sequence alone is
// the observable state.
impl PartialEq for FrozenMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FrozenMap {}

impl Hash for FrozenMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}
