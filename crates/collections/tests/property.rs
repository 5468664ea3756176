pub mod fixtures;

use canopy_collections::{FROZEN_LIST_NAME, FROZEN_MAP_NAME, register_frozen_nodes};
use canopy_tree::{registry, value};
use fixtures::{int_list, str_map};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn list_roundtrip_arbitrary_contents(items in proptest::collection::vec(any::<i64>(), 0..64)) {
        register_frozen_nodes().unwrap();

        let list = int_list(&items);
        let (children, context) = registry().flatten(&list).unwrap();
        prop_assert_eq!(children.len(), items.len());

        let rebuilt = registry().unflatten(FROZEN_LIST_NAME, children, &context).unwrap();
        prop_assert!(rebuilt.dyn_eq(&list));
    }

    #[test]
    fn map_roundtrip_arbitrary_contents(pairs in proptest::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..32)) {
        register_frozen_nodes().unwrap();

        let map: canopy_collections::FrozenMap =
            pairs.iter().map(|(key, item)| (value(key.clone()), value(*item))).collect();
        let (children, context) = registry().flatten(&map).unwrap();
        prop_assert_eq!(children.len(), pairs.len());

        let rebuilt = registry().unflatten(FROZEN_MAP_NAME, children, &context).unwrap();
        prop_assert!(rebuilt.dyn_eq(&map));
    }

    #[test]
    fn equal_lists_always_hash_equal(items in proptest::collection::vec(any::<i64>(), 0..64)) {
        let a = int_list(&items);
        let b = int_list(&items);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn keyed_children_match_unkeyed_children(items in proptest::collection::vec(any::<i64>(), 0..64)) {
        register_frozen_nodes().unwrap();

        let list = int_list(&items);
        let (children, _) = registry().flatten(&list).unwrap();
        let (keyed, _) = registry().flatten_with_keys(&list).unwrap();

        let stripped: Vec<_> = keyed.into_iter().map(|(_, child)| child).collect();
        prop_assert_eq!(stripped, children);
    }

    #[test]
    fn blocked_push_never_changes_the_list(items in proptest::collection::vec(any::<i64>(), 0..16), extra in any::<i64>()) {
        let list = int_list(&items);
        let snapshot = list.clone();
        prop_assert!(list.push(value(extra)).is_err());
        prop_assert_eq!(list, snapshot);
    }
}

#[test]
fn map_property_keys_survive_roundtrip_order() {
    register_frozen_nodes().unwrap();

    let map = str_map(&[("z", 26), ("a", 1), ("m", 13)]);
    let (children, context) = registry().flatten(&map).unwrap();
    let rebuilt = registry().unflatten(FROZEN_MAP_NAME, children, &context).unwrap();

    // Insertion order, not sorted order, is canonical.
    assert!(rebuilt.dyn_eq(&map));
}
