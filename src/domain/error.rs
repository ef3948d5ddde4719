//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::{Category, NodeId};

/// Domain errors represent misuse of the forest contract.
/// None of these are expected at runtime; they signal a caller bug.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("parent node {parent} does not exist (forest has {len} nodes)")]
    DanglingParent { parent: NodeId, len: usize },

    #[error("node index out of range: {0}")]
    IndexOutOfRange(NodeId),

    #[error("message and group nodes need at least one message")]
    EmptyMessages,

    #[error("malformed {category:?} node: {reason}")]
    MalformedNode {
        category: Category,
        reason: &'static str,
    },
}

/// Result type for forest operations.
pub type DomainResult<T> = Result<T, DomainError>;
