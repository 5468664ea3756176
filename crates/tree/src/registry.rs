//! Process-wide registry of tree-node definitions.

use crate::context::{Context, KeyToken};
use crate::error::TreeError;
use crate::node::NodeDef;
use crate::value::{TreeValue, ValueRef, peel};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::sync::{Arc, LazyLock};
use tracing::{trace, warn};

#[derive(Debug, Default)]
struct Tables {
    by_type: FxHashMap<TypeId, Arc<NodeDef>>,
    by_name: FxHashMap<String, TypeId>,
}

/// A thread-safe registry mapping container types to their flatten/unflatten
/// behavior.
///
/// Indexed both by [`TypeId`] (in-process dispatch) and by serialized name
/// (cross-process identification). Registration happens during startup;
/// afterwards the registry is read-mostly and lookups take a shared lock.
#[derive(Debug, Default)]
pub struct TreeRegistry {
    tables: RwLock<Tables>,
}

impl TreeRegistry {
    /// Creates a new, empty `TreeRegistry`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node definition.
    ///
    /// Both the type and the serialized name must be new to the registry.
    /// Re-registering is rejected rather than silently replaced: a second
    /// definition for a type would change flatten behavior process-wide, and
    /// a shared serialized name would make persisted structures ambiguous.
    ///
    /// # Errors
    /// Returns [`TreeError::DuplicateType`] if the type is already
    /// registered, or [`TreeError::DuplicateName`] if the serialized name is
    /// claimed by another type.
    pub fn register(&self, def: NodeDef) -> Result<(), TreeError> {
        let mut tables = self.tables.write();

        if let Some(existing) = tables.by_type.get(&def.type_id()) {
            warn!(
                node = def.type_name(),
                serialized = existing.serialized_name(),
                "Rejected duplicate tree node registration"
            );
            return Err(TreeError::DuplicateType {
                message: def.type_name().into(),
                context: Some(
                    format!("already registered as '{}'", existing.serialized_name()).into(),
                ),
            });
        }

        if let Some(owner) = tables.by_name.get(def.serialized_name()) {
            let owner_name =
                tables.by_type.get(owner).map_or("<unknown>", |existing| existing.type_name());
            warn!(
                node = def.type_name(),
                serialized = def.serialized_name(),
                owner = owner_name,
                "Rejected serialized name collision"
            );
            return Err(TreeError::DuplicateName {
                message: def.serialized_name().to_owned().into(),
                context: Some(format!("already claimed by '{owner_name}'").into()),
            });
        }

        trace!(
            node = def.type_name(),
            serialized = def.serialized_name(),
            "Registering tree node"
        );
        tables.by_name.insert(def.serialized_name().to_owned(), def.type_id());
        tables.by_type.insert(def.type_id(), Arc::new(def));
        Ok(())
    }

    /// Looks up the definition registered for `type_id`.
    #[must_use]
    pub fn lookup(&self, type_id: TypeId) -> Option<Arc<NodeDef>> {
        self.tables.read().by_type.get(&type_id).cloned()
    }

    /// Looks up the definition registered for the container type `T`.
    #[must_use]
    pub fn lookup_of<T: TreeValue>(&self) -> Option<Arc<NodeDef>> {
        self.lookup(TypeId::of::<T>())
    }

    /// Resolves a serialized name back to its definition.
    #[must_use]
    pub fn lookup_serialized(&self, serialized_name: &str) -> Option<Arc<NodeDef>> {
        let tables = self.tables.read();
        let type_id = tables.by_name.get(serialized_name)?;
        tables.by_type.get(type_id).cloned()
    }

    /// Returns `true` if the container type `T` is registered.
    #[must_use]
    pub fn is_registered<T: TreeValue>(&self) -> bool {
        self.tables.read().by_type.contains_key(&TypeId::of::<T>())
    }

    /// Returns the serialized name registered for `T`, if any.
    #[must_use]
    pub fn serialized_name_of<T: TreeValue>(&self) -> Option<String> {
        self.lookup_of::<T>().map(|def| def.serialized_name().to_owned())
    }

    /// Number of registered node types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.read().by_type.len()
    }

    /// Returns `true` if no node types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decomposes `value` one level via its registered definition.
    ///
    /// Accepts either a container itself or a [`ValueRef`] holding one, so
    /// the output of an earlier `unflatten` can be fed straight back in.
    ///
    /// # Errors
    /// Returns [`TreeError::NotRegistered`] if `value`'s type has no
    /// definition.
    pub fn flatten(&self, value: &dyn TreeValue) -> Result<(Vec<ValueRef>, Context), TreeError> {
        let value = peel(value);
        self.def_for(value)?.flatten(value)
    }

    /// Decomposes `value` one level, pairing children with keypath tokens.
    ///
    /// # Errors
    /// Returns [`TreeError::NotRegistered`] if `value`'s type has no
    /// definition.
    pub fn flatten_with_keys(
        &self,
        value: &dyn TreeValue,
    ) -> Result<(Vec<(KeyToken, ValueRef)>, Context), TreeError> {
        let value = peel(value);
        self.def_for(value)?.flatten_with_keys(value)
    }

    /// Rebuilds a container of type `T` from `children` and `context`.
    ///
    /// # Errors
    /// Returns [`TreeError::NotRegistered`] if `T` has no definition, plus
    /// whatever the node's unflatten reports.
    pub fn unflatten_of<T: TreeValue>(
        &self,
        children: Vec<ValueRef>,
        context: &Context,
    ) -> Result<ValueRef, TreeError> {
        let def = self.lookup_of::<T>().ok_or_else(|| TreeError::NotRegistered {
            message: std::any::type_name::<T>().into(),
            context: None,
        })?;
        def.unflatten(children, context)
    }

    /// Rebuilds a container resolved by serialized name, for callers
    /// reconstructing structures persisted by another process or release.
    ///
    /// # Errors
    /// Returns [`TreeError::NotRegistered`] if the name is unknown, plus
    /// whatever the node's unflatten reports.
    pub fn unflatten(
        &self,
        serialized_name: &str,
        children: Vec<ValueRef>,
        context: &Context,
    ) -> Result<ValueRef, TreeError> {
        let def =
            self.lookup_serialized(serialized_name).ok_or_else(|| TreeError::NotRegistered {
                message: serialized_name.to_owned().into(),
                context: Some("no such serialized name".into()),
            })?;
        def.unflatten(children, context)
    }

    fn def_for(&self, value: &dyn TreeValue) -> Result<Arc<NodeDef>, TreeError> {
        let type_id = Any::type_id(value.as_any());
        self.lookup(type_id).ok_or_else(|| TreeError::NotRegistered {
            message: format!("{value:?}").into(),
            context: Some("flatten requires a registered node type".into()),
        })
    }
}

static REGISTRY: LazyLock<TreeRegistry> = LazyLock::new(TreeRegistry::new);

/// Returns the process-wide registry.
///
/// Populate it during startup (see `canopy-collections`'
/// `register_frozen_nodes`); afterwards it is effectively read-only.
#[must_use]
pub fn registry() -> &'static TreeRegistry {
    &REGISTRY
}
