//! # Frozen Containers
//!
//! Immutable variants of the everyday sequence and mapping containers, plus
//! their registration with the process-wide tree-node registry.
//!
//! ## Overview
//!
//! [`FrozenList`] and [`FrozenMap`] are constructed exactly like their
//! mutable counterparts (conversion from an iterator of elements or pairs),
//! support the full read-only surface, and fail deterministically with
//! [`CollectionError::MutationDenied`] on every mutating operation. Both are
//! value-hashable, so they work as mapping keys and set members.
//!
//! [`register_frozen_nodes`] wires both types into the `canopy-tree`
//! registry so a traversal engine can flatten structures built from them
//! into ordered leaves plus a reconstruction context, and rebuild equal
//! containers later.
//!
//! # Example
//!
//! ```rust
//! use canopy_collections::{FrozenList, register_frozen_nodes};
//! use canopy_tree::{registry, value};
//!
//! # fn main() -> Result<(), canopy_tree::TreeError> {
//! register_frozen_nodes()?;
//!
//! let list = FrozenList::new([value(1_i64), value(2_i64), value(3_i64)]);
//! let (children, context) = registry().flatten(&list)?;
//! assert_eq!(children.len(), 3);
//!
//! let rebuilt = registry().unflatten("canopy.collections.FrozenList", children, &context)?;
//! assert!(rebuilt.dyn_eq(&list));
//! # Ok(())
//! # }
//! ```

mod error;
mod list;
mod macros;
mod map;
mod node;

pub use error::{CollectionError, CollectionErrorExt};
pub use list::FrozenList;
pub use map::FrozenMap;
pub use node::{FROZEN_LIST_NAME, FROZEN_MAP_NAME, register_frozen_nodes};
