// Copyright 2025 Cowboy AI, LLC.

//! Error types for composition operations

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// Shared, clonable cause attached to application and edit failures
pub type SharedCause = Arc<dyn StdError + Send + Sync + 'static>;

/// Errors that can occur while building or running composites
#[derive(Debug, Clone, Error)]
pub enum FunctorError {
    /// A required reference (composition partner, edit target) was absent
    #[error("Invalid argument: {name} is absent")]
    InvalidArgument {
        /// Name of the missing argument
        name: &'static str,
    },

    /// A transform or producer could not produce a value
    #[error("Application failed: {message}")]
    Application {
        /// Description of the failure
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<SharedCause>,
    },

    /// A mutator could not complete its effect
    #[error("Edit failed: {message}")]
    Edit {
        /// Description of the failure
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<SharedCause>,
    },

    /// A value was used as a type it does not conform to
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Type the caller assumed
        expected: &'static str,
        /// Type the value actually has
        found: &'static str,
    },
}

/// Result type for composition operations
pub type FunctorResult<T> = Result<T, FunctorError>;

impl FunctorError {
    /// Create an invalid argument error for the named parameter
    pub fn invalid_argument(name: &'static str) -> Self {
        FunctorError::InvalidArgument { name }
    }

    /// Create an application error without an underlying cause
    pub fn application(message: impl Into<String>) -> Self {
        FunctorError::Application {
            message: message.into(),
            source: None,
        }
    }

    /// Create an application error wrapping `cause`
    pub fn application_caused_by<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        FunctorError::Application {
            message: cause.to_string(),
            source: Some(Arc::new(cause)),
        }
    }

    /// Create an edit error without an underlying cause
    pub fn edit(message: impl Into<String>) -> Self {
        FunctorError::Edit {
            message: message.into(),
            source: None,
        }
    }

    /// Create an edit error wrapping `cause`
    pub fn edit_caused_by<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        FunctorError::Edit {
            message: cause.to_string(),
            source: Some(Arc::new(cause)),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        FunctorError::TypeMismatch { expected, found }
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FunctorError::InvalidArgument { .. })
    }

    /// Check if this is an application error
    pub fn is_application_error(&self) -> bool {
        matches!(self, FunctorError::Application { .. })
    }

    /// Check if this is an edit error
    pub fn is_edit_error(&self) -> bool {
        matches!(self, FunctorError::Edit { .. })
    }

    /// Check if this is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, FunctorError::TypeMismatch { .. })
    }
}

/// Folds a foreign leaf error into `Application`.
///
/// A `FunctorError` carried inside the `anyhow::Error` is returned as is, so
/// failures raised by nested composites keep their kind.
impl From<anyhow::Error> for FunctorError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<FunctorError>() {
            Ok(inner) => inner,
            Err(other) => FunctorError::Application {
                message: other.to_string(),
                source: Some(Arc::from(Box::<dyn StdError + Send + Sync>::from(other))),
            },
        }
    }
}

/// Unwrap an optional argument, failing with `InvalidArgument` when absent
pub fn require<T>(value: Option<T>, name: &'static str) -> FunctorResult<T> {
    value.ok_or_else(|| {
        tracing::debug!(argument = name, "required argument is absent");
        FunctorError::invalid_argument(name)
    })
}
