//! Type-erased value handles for heterogeneous tree structures.
//!
//! Tree nodes and leaves alike are held as [`ValueRef`]: a shared,
//! hashable, comparable handle over any suitable Rust type. Equality and
//! hashing dispatch to the concrete type, so two handles compare equal only
//! when they hold equal values of the same type.

use crate::error::TreeError;
use std::any::{Any, TypeId};
use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Trait for values that can participate in a tree.
///
/// Any type that is `Any + Debug + Send + Sync + PartialEq + Hash`
/// automatically implements this trait, including the frozen containers
/// themselves, which is what makes nesting work.
pub trait TreeValue: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    /// Value equality across the type-erasure boundary.
    /// Values of different concrete types are never equal.
    fn dyn_eq(&self, other: &dyn TreeValue) -> bool;

    /// Value hashing across the type-erasure boundary.
    /// The concrete [`TypeId`] is mixed in so equal payloads of different
    /// types do not collide by construction.
    fn dyn_hash(&self, state: &mut dyn Hasher);
}

impl<T> TreeValue for T
where
    T: Any + Debug + Send + Sync + PartialEq + Hash,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn TreeValue) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|other| self == other)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }
}

impl PartialEq for dyn TreeValue {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

impl Eq for dyn TreeValue {}

impl Hash for dyn TreeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dyn_hash(state);
    }
}

/// Shared handle to a type-erased tree value.
///
/// A newtype over `Arc<dyn TreeValue>` rather than a bare alias: the handle
/// carries its own `PartialEq`/`Hash` delegating to the payload, so `==`
/// between handles, derives on handle-holding structs, and use as a map key
/// all behave the same whether or not [`TreeValue`] is in scope.
///
/// Cloning is cheap, and instances are safe to share across threads without
/// synchronization: nothing behind the handle can be mutated.
#[derive(Clone)]
pub struct ValueRef(Arc<dyn TreeValue>);

impl ValueRef {
    /// Wraps a concrete value into a handle.
    ///
    /// Wrapping is idempotent: handing an existing `ValueRef` back in
    /// returns an equal handle instead of nesting one inside another.
    pub fn new<T: TreeValue>(v: T) -> Self {
        if let Some(handle) = (&v as &dyn Any).downcast_ref::<Self>() {
            return handle.clone();
        }
        Self(Arc::new(v))
    }

    /// Borrows the payload as a trait object.
    #[must_use]
    pub fn as_value(&self) -> &dyn TreeValue {
        self.0.as_ref()
    }

    /// Value equality against any payload, erased or concrete.
    #[must_use]
    pub fn dyn_eq(&self, other: &dyn TreeValue) -> bool {
        self.0.as_ref().dyn_eq(peel(other))
    }

    /// Helper to allow downcasting the payload.
    #[must_use]
    pub fn as_any(&self) -> &dyn Any {
        self.0.as_ref().as_any()
    }
}

impl Debug for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq for ValueRef {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref().dyn_eq(other.0.as_ref())
    }
}

impl Eq for ValueRef {}

impl Hash for ValueRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_ref().dyn_hash(state);
    }
}

impl AsRef<dyn TreeValue> for ValueRef {
    fn as_ref(&self) -> &dyn TreeValue {
        self.0.as_ref()
    }
}

// Lets hash tables keyed by `ValueRef` answer lookups for a borrowed
// payload. Hash/Eq agree on both sides: each delegates to the payload.
impl Borrow<dyn TreeValue> for ValueRef {
    fn borrow(&self) -> &dyn TreeValue {
        self.0.as_ref()
    }
}

/// Wraps a concrete value into a [`ValueRef`].
pub fn value<T: TreeValue>(v: T) -> ValueRef {
    ValueRef::new(v)
}

/// Strips one handle layer, if `v` is itself a `ValueRef`, so dispatch and
/// downcasts always see the payload type.
pub(crate) fn peel(v: &dyn TreeValue) -> &dyn TreeValue {
    v.as_any().downcast_ref::<ValueRef>().map_or(v, ValueRef::as_value)
}

/// Downcasts a type-erased value to its concrete type.
///
/// Accepts either the payload itself or a [`ValueRef`] holding it.
///
/// # Errors
/// Returns [`TreeError::TypeMismatch`] if `v` holds a different type.
pub fn downcast<T: TreeValue>(v: &dyn TreeValue) -> Result<&T, TreeError> {
    peel(v).as_any().downcast_ref::<T>().ok_or_else(|| TreeError::TypeMismatch {
        message: std::any::type_name::<T>().into(),
        context: Some("Unexpected tree value type".into()),
    })
}
