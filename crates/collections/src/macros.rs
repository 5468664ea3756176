//! Helper macro generating the blocked mutating operations of a frozen
//! container from a closed list of names.

/// Expands each listed operation into a method that unconditionally returns
/// [`CollectionError::MutationDenied`](crate::CollectionError::MutationDenied)
/// and leaves the container untouched.
///
/// Keeping the blocked operations as real methods (rather than simply
/// omitting them) makes accidental mutation a deterministic, well-described
/// failure instead of a missing-method puzzle at a call site that was ported
/// from a mutable container.
macro_rules! deny_mutation {
    ($type_name:literal => $( $op:ident ( $( $arg:ident : $ty:ty ),* ) ),+ $(,)?) => {
        $(
            #[doc = concat!(
                "Blocked mutating operation: always returns ",
                "[`CollectionError::MutationDenied`](crate::CollectionError::MutationDenied)."
            )]
            pub fn $op(&self, $( $arg: $ty ),*) -> Result<(), crate::CollectionError> {
                $( let _ = $arg; )*
                Err(crate::CollectionError::mutation_denied($type_name, stringify!($op)))
            }
        )+
    };
}

pub(crate) use deny_mutation;
