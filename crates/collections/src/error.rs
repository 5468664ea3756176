//! # Frozen Container Errors
//!
//! This module defines the [`CollectionError`] enum, the single failure
//! kind the frozen containers can produce.

use std::borrow::Cow;

/// A specialized error enum for frozen-container failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CollectionError {
    /// A mutating operation was invoked on a frozen container.
    ///
    /// This is a programmer-error signal: it is never retried or recovered
    /// here and should surface to the caller unchanged.
    #[error(
        "'{type_name}' does not support mutation ('{operation}'){}: \
         build a new container with the updated contents and rebind it",
        format_context(.context)
    )]
    MutationDenied {
        type_name: &'static str,
        operation: &'static str,
        context: Option<Cow<'static, str>>,
    },
}

impl CollectionError {
    pub(crate) const fn mutation_denied(
        type_name: &'static str,
        operation: &'static str,
    ) -> Self {
        Self::MutationDenied { type_name, operation, context: None }
    }
}

/// Extension trait attaching call-site context to a [`CollectionError`] result.
pub trait CollectionErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CollectionError>;
}

impl<T> CollectionErrorExt<T> for Result<T, CollectionError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                CollectionError::MutationDenied { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
