//! Node definitions: the registration record for one container type.

use crate::context::{Context, KeyToken};
use crate::error::TreeError;
use crate::value::{TreeValue, ValueRef};
use std::any::TypeId;
use std::borrow::Cow;

/// Decomposes a container one level into ordered children and a context.
/// Does not recurse into children.
pub type FlattenFn = fn(&dyn TreeValue) -> Result<(Vec<ValueRef>, Context), TreeError>;

/// Same decomposition, with each child paired with its keypath token.
/// Children must come out in the same order as [`FlattenFn`] produces them.
pub type FlattenWithKeysFn =
    fn(&dyn TreeValue) -> Result<(Vec<(KeyToken, ValueRef)>, Context), TreeError>;

/// Strict inverse of [`FlattenFn`]: rebuilds a container of the same type
/// from a fresh child sequence and the original context.
pub type UnflattenFn = fn(Vec<ValueRef>, &Context) -> Result<ValueRef, TreeError>;

/// Registration record associating a container type with its flatten,
/// flatten-with-keys, and unflatten functions plus a stable serialized name.
///
/// The serialized name identifies the type across process and version
/// boundaries; changing it breaks deserialization of previously persisted
/// structures.
#[derive(Debug, Clone)]
pub struct NodeDef {
    type_id: TypeId,
    type_name: &'static str,
    serialized_name: Cow<'static, str>,
    flatten_fn: FlattenFn,
    flatten_with_keys_fn: FlattenWithKeysFn,
    unflatten_fn: UnflattenFn,
}

impl NodeDef {
    /// Creates the registration record for the container type `T`.
    pub fn of<T: TreeValue>(
        serialized_name: impl Into<Cow<'static, str>>,
        flatten_fn: FlattenFn,
        flatten_with_keys_fn: FlattenWithKeysFn,
        unflatten_fn: UnflattenFn,
    ) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            serialized_name: serialized_name.into(),
            flatten_fn,
            flatten_with_keys_fn,
            unflatten_fn,
        }
    }

    /// Returns the [`TypeId`] of the registered container type.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the Rust type name, for diagnostics only.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the stable cross-process identifier for this type.
    #[must_use]
    pub fn serialized_name(&self) -> &str {
        &self.serialized_name
    }

    /// Decomposes `value` one level.
    ///
    /// # Errors
    /// Returns [`TreeError::TypeMismatch`] if `value` is not an instance of
    /// the registered type.
    pub fn flatten(&self, value: &dyn TreeValue) -> Result<(Vec<ValueRef>, Context), TreeError> {
        (self.flatten_fn)(value)
    }

    /// Decomposes `value` one level, pairing children with keypath tokens.
    ///
    /// # Errors
    /// Returns [`TreeError::TypeMismatch`] if `value` is not an instance of
    /// the registered type.
    pub fn flatten_with_keys(
        &self,
        value: &dyn TreeValue,
    ) -> Result<(Vec<(KeyToken, ValueRef)>, Context), TreeError> {
        (self.flatten_with_keys_fn)(value)
    }

    /// Rebuilds a container from `children` and `context`.
    ///
    /// # Errors
    /// Returns [`TreeError::ArityMismatch`] if `children` disagrees with the
    /// context, or [`TreeError::ContextMismatch`] if the context came from a
    /// different node kind.
    pub fn unflatten(
        &self,
        children: Vec<ValueRef>,
        context: &Context,
    ) -> Result<ValueRef, TreeError> {
        (self.unflatten_fn)(children, context)
    }
}
