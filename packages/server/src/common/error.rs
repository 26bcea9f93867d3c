//! Domain error type shared by all actions and resolvers.

use juniper::{graphql_value, FieldError, IntoFieldError, ScalarValue};
use thiserror::Error;

/// Domain failure surfaced directly to API callers.
///
/// Store failures pass through as `Internal`; there is no retry or
/// translation for them, they are fatal to the current request.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    PreconditionFailed(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn precondition_failed(message: impl Into<String>) -> Self {
        Self::PreconditionFailed(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Machine-readable code carried in GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::PreconditionFailed(_) => "PRECONDITION_FAILED",
            Self::Validation(_) => "BAD_USER_INPUT",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl<S: ScalarValue> IntoFieldError<S> for DomainError {
    fn into_field_error(self) -> FieldError<S> {
        let code = self.code();
        FieldError::new(self.to_string(), graphql_value!({ "code": (code) }))
    }
}
