//! Tree-node adapters registering the frozen containers with the
//! process-wide registry.

use crate::list::FrozenList;
use crate::map::FrozenMap;
use canopy_tree::{
    Context, KeyToken, NodeDef, TreeError, TreeErrorExt, TreeValue, ValueRef, downcast, registry,
    value,
};
use std::sync::LazyLock;

/// Stable cross-process identifier of [`FrozenList`].
/// Changing it breaks deserialization of previously persisted structures.
pub const FROZEN_LIST_NAME: &str = "canopy.collections.FrozenList";

/// Stable cross-process identifier of [`FrozenMap`].
pub const FROZEN_MAP_NAME: &str = "canopy.collections.FrozenMap";

fn check_arity(expected: Option<usize>, actual: usize) -> Result<(), TreeError> {
    match expected {
        Some(expected) if expected == actual => Ok(()),
        Some(expected) => Err(TreeError::ArityMismatch {
            message: format!("context expects {expected} children, got {actual}").into(),
            context: None,
        }),
        None => Err(TreeError::ContextMismatch {
            message: "custom context has no arity".into(),
            context: None,
        }),
    }
}

fn frozen_list_flatten(v: &dyn TreeValue) -> Result<(Vec<ValueRef>, Context), TreeError> {
    let list = downcast::<FrozenList>(v)?;
    Ok((list.to_contents(), Context::Arity(list.len())))
}

fn frozen_list_flatten_with_keys(
    v: &dyn TreeValue,
) -> Result<(Vec<(KeyToken, ValueRef)>, Context), TreeError> {
    let list = downcast::<FrozenList>(v)?;
    let keyed = list
        .iter()
        .enumerate()
        .map(|(index, child)| (KeyToken::Index(index), child.clone()))
        .collect();
    Ok((keyed, Context::Arity(list.len())))
}

fn frozen_list_unflatten(
    children: Vec<ValueRef>,
    context: &Context,
) -> Result<ValueRef, TreeError> {
    let Context::Arity(expected) = context else {
        return Err(TreeError::ContextMismatch {
            message: format!("frozen list cannot rebuild from {context:?}").into(),
            context: None,
        });
    };
    check_arity(Some(*expected), children.len()).context(FROZEN_LIST_NAME)?;
    Ok(value(FrozenList::from(children)))
}

fn frozen_map_flatten(v: &dyn TreeValue) -> Result<(Vec<ValueRef>, Context), TreeError> {
    let map = downcast::<FrozenMap>(v)?;
    let children = map.values().cloned().collect();
    let keys = map.keys().cloned().collect();
    Ok((children, Context::Keys(keys)))
}

fn frozen_map_flatten_with_keys(
    v: &dyn TreeValue,
) -> Result<(Vec<(KeyToken, ValueRef)>, Context), TreeError> {
    let map = downcast::<FrozenMap>(v)?;
    let keyed =
        map.iter().map(|(key, child)| (KeyToken::Key(key.clone()), child.clone())).collect();
    let keys = map.keys().cloned().collect();
    Ok((keyed, Context::Keys(keys)))
}

fn frozen_map_unflatten(
    children: Vec<ValueRef>,
    context: &Context,
) -> Result<ValueRef, TreeError> {
    let Context::Keys(keys) = context else {
        return Err(TreeError::ContextMismatch {
            message: format!("frozen map cannot rebuild from {context:?}").into(),
            context: None,
        });
    };
    check_arity(Some(keys.len()), children.len()).context(FROZEN_MAP_NAME)?;
    Ok(value(FrozenMap::new(keys.iter().cloned().zip(children))))
}

static REGISTERED: LazyLock<Result<(), TreeError>> = LazyLock::new(|| {
    let registry = registry();
    registry.register(NodeDef::of::<FrozenList>(
        FROZEN_LIST_NAME,
        frozen_list_flatten,
        frozen_list_flatten_with_keys,
        frozen_list_unflatten,
    ))?;
    registry.register(NodeDef::of::<FrozenMap>(
        FROZEN_MAP_NAME,
        frozen_map_flatten,
        frozen_map_flatten_with_keys,
        frozen_map_unflatten,
    ))?;
    Ok(())
});

/// Registers both frozen containers with the process-wide registry.
///
/// One-shot process-wide initialization: call it during startup, before the
/// traversal engine sees any frozen container. Repeat calls are idempotent
/// and return the memoized outcome.
///
/// # Errors
/// Returns the underlying [`TreeError`] if either type or serialized name
/// was already claimed by an earlier manual registration.
pub fn register_frozen_nodes() -> Result<(), TreeError> {
    REGISTERED.clone()
}
