//! Facade crate for `Canopy` containers and tree plumbing.
//! Re-exports the value model, the node registry, and the frozen containers.
//! Keep this crate thin: it should compose other crates, not implement container logic.
//!
//! ## Usage
//! - Call [`init`] once at startup to register the frozen container nodes.
//! - Build [`FrozenList`]/[`FrozenMap`] values and decompose them through [`registry`].

pub use canopy_collections as collections;
pub use canopy_collections::{
    CollectionError, CollectionErrorExt, FROZEN_LIST_NAME, FROZEN_MAP_NAME, FrozenList, FrozenMap,
};
pub use canopy_tree as tree;
pub use canopy_tree::{
    Context, KeyToken, NodeDef, TreeError, TreeErrorExt, TreeRegistry, TreeValue, ValueRef,
    downcast, registry, value,
};

/// Register the frozen container nodes with the global registry.
///
/// Safe to call more than once; repeated calls return the memoized result.
///
/// # Errors
/// Returns an error if the first registration attempt failed.
pub fn init() -> Result<(), TreeError> {
    canopy_collections::register_frozen_nodes()
}
