//! # Tree Registry Errors
//!
//! This module defines the [`TreeError`] enum used throughout the tree crate
//! for reporting registration conflicts and dispatch failures.

use std::borrow::Cow;

/// A specialized error enum for tree-node registration and dispatch failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TreeError {
    /// No node definition exists for the requested type.
    #[error("Tree node not registered{}: {message}", format_context(.context))]
    NotRegistered { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The type is already present in the registry.
    #[error("Duplicate tree node type{}: {message}", format_context(.context))]
    DuplicateType { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The serialized name is already claimed by another type.
    ///
    /// Serialized names identify node types across process and version
    /// boundaries, so two types must never share one.
    #[error("Duplicate serialized name{}: {message}", format_context(.context))]
    DuplicateName { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An internal dynamic cast failed.
    /// This usually indicates a node definition was invoked with a value of
    /// the wrong concrete type.
    #[error("Type mismatch{}: {message}", format_context(.context))]
    TypeMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The child sequence handed to unflatten disagrees with the context.
    #[error("Arity mismatch{}: {message}", format_context(.context))]
    ArityMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The context was produced by a different node kind than the one
    /// reconstructing from it.
    #[error("Context mismatch{}: {message}", format_context(.context))]
    ContextMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Extension trait attaching call-site context to a [`TreeError`] result.
pub trait TreeErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, TreeError>;
}

impl<T> TreeErrorExt<T> for Result<T, TreeError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                TreeError::NotRegistered { context: c, .. }
                | TreeError::DuplicateType { context: c, .. }
                | TreeError::DuplicateName { context: c, .. }
                | TreeError::TypeMismatch { context: c, .. }
                | TreeError::ArityMismatch { context: c, .. }
                | TreeError::ContextMismatch { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
