use thiserror::Error;

/// Errors reported by list operations.
///
/// None of these are fatal: the operation that hits one leaves the list
/// untouched and hands the error back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// A callback was not supplied to the policy builder.
    #[error("'{0}' cannot be NULL")]
    MissingCallback(&'static str),

    /// The allocator could not provide memory for a node.
    #[error("Memory allocation failed for 'node'")]
    AllocationFailed,

    /// A node was requested without a value to store.
    #[error("You cannot create a new node with a NULL value")]
    NullData,

    /// The list handle was absent. Carries the attempted operation.
    #[error("You cannot {0} a NULL singly linked list")]
    InvalidList(&'static str),

    /// The operation is not allowed on an empty list.
    #[error("the singly linked list is empty")]
    Empty,
}
