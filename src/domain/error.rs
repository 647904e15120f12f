//! Domain-level errors

use thiserror::Error;

use crate::domain::arena::NodeId;

/// Domain errors represent invalid use of the hierarchy API.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid argument `{param}`: {message}")]
    InvalidArgument {
        param: &'static str,
        message: String,
    },

    #[error("invalid parent node: {0:?}")]
    InvalidParent(NodeId),

    #[error("hierarchy already has a root node")]
    RootAlreadySet,

    #[error("invalid hierarchy description: {message}")]
    InvalidHierarchy { message: String },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl DomainError {
    /// Create an invalid-argument error naming the offending parameter.
    pub fn invalid_argument(param: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param,
            message: message.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Result type for hierarchy operations.
pub type DomainResult<T> = Result<T, DomainError>;
