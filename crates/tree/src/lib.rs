//! # Tree Node Registry
//!
//! A type-safe, thread-safe registry for structural decomposition of nested
//! containers.
//!
//! ## Overview
//!
//! Container types register four behaviors (`flatten`, `flatten_with_keys`,
//! `unflatten`, and a stable serialized name) keyed by their Rust type. A traversal engine can then mechanically take any
//! registered container apart one level at a time into ordered children plus
//! a reconstruction [`Context`], and rebuild an equal container later.
//!
//! ## Features
//!
//! * **Type-Safe**: Node definitions are identified by their Rust type.
//! * **Cross-Process Names**: Serialized names survive process and version
//!   boundaries; the registry enforces their uniqueness.
//! * **High Performance**: `FxHashMap` + `parking_lot::RwLock`, read-mostly
//!   after startup registration.
//! * **One Level at a Time**: Recursion into children is the engine's
//!   responsibility, never this crate's.
//!
//! # Example
//!
//! ```rust
//! use canopy_tree::{Context, NodeDef, TreeError, TreeRegistry, ValueRef, downcast, value};
//!
//! #[derive(Debug, PartialEq, Hash)]
//! struct Pair(ValueRef, ValueRef);
//!
//! fn pair_flatten(v: &dyn canopy_tree::TreeValue) -> Result<(Vec<ValueRef>, Context), TreeError> {
//!     let pair = downcast::<Pair>(v)?;
//!     Ok((vec![pair.0.clone(), pair.1.clone()], Context::Arity(2)))
//! }
//! # fn pair_flatten_with_keys(v: &dyn canopy_tree::TreeValue) -> Result<(Vec<(canopy_tree::KeyToken, ValueRef)>, Context), TreeError> {
//! #     let (children, context) = pair_flatten(v)?;
//! #     Ok((children.into_iter().enumerate().map(|(i, c)| (canopy_tree::KeyToken::Index(i), c)).collect(), context))
//! # }
//! # fn pair_unflatten(mut children: Vec<ValueRef>, _: &Context) -> Result<ValueRef, TreeError> {
//! #     let b = children.pop().unwrap();
//! #     let a = children.pop().unwrap();
//! #     Ok(value(Pair(a, b)))
//! # }
//!
//! fn main() -> Result<(), TreeError> {
//!     let registry = TreeRegistry::new();
//!     registry.register(NodeDef::of::<Pair>(
//!         "example.Pair",
//!         pair_flatten,
//!         pair_flatten_with_keys,
//!         pair_unflatten,
//!     ))?;
//!
//!     let pair = Pair(value(1_i64), value(2_i64));
//!     let (children, context) = registry.flatten(&pair)?;
//!     let rebuilt = registry.unflatten("example.Pair", children, &context)?;
//!     assert!(rebuilt.dyn_eq(&pair));
//!     Ok(())
//! }
//! ```

mod context;
mod error;
mod node;
mod registry;
mod value;

pub use context::{Context, KeyToken};
pub use error::{TreeError, TreeErrorExt};
pub use node::{FlattenFn, FlattenWithKeysFn, NodeDef, UnflattenFn};
pub use registry::{TreeRegistry, registry};
pub use value::{TreeValue, ValueRef, downcast, value};
