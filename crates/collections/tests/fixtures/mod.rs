use canopy_collections::{FrozenList, FrozenMap};
use canopy_tree::{ValueRef, value};

/// Builds a frozen list of `i64` leaves.
#[must_use]
pub fn int_list(items: &[i64]) -> FrozenList {
    items.iter().map(|item| value(*item)).collect()
}

/// Builds a frozen map from `&str` keys to `i64` leaves, in slice order.
#[must_use]
pub fn str_map(pairs: &[(&'static str, i64)]) -> FrozenMap {
    pairs.iter().map(|(key, item)| (value(*key), value(*item))).collect()
}

/// Wraps `i64` leaves for comparison against flattened children.
#[must_use]
pub fn int_leaves(items: &[i64]) -> Vec<ValueRef> {
    items.iter().map(|item| value(*item)).collect()
}
