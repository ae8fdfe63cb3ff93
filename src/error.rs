//! Error types for document construction and board generation

use thiserror::Error;

/// Misuse of the document tree: a node carries either children or text, never both
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    #[error("cannot set text on <{element}>: it already has child elements")]
    TextOnParent { element: String },
    #[error("cannot add a child to <{element}>: it already has text content")]
    ChildOnTextNode { element: String },
}

/// Failures of a single board generation run. Both kinds are fatal; nothing is emitted.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(#[from] NodeError),
}

impl BoardError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        BoardError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}
