//! Error types for the workforce core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure class the workflows can produce. Guards that are
//! knowable client-side (capability checks, state-machine preconditions)
//! fail before any store call; everything else surfaces the store's
//! message unmodified.

use thiserror::Error;

/// The main error type for the workforce core.
///
/// All workflow and store operations return this error type, making it
/// easy to handle failures consistently throughout the application.
///
/// # Example
///
/// ```
/// use workforce_core::error::CoreError;
///
/// let error = CoreError::Precondition {
///     message: "attendance for 6/2024 is not finalized".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Precondition failed: attendance for 6/2024 is not finalized"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input was malformed; rejected before any store call.
    #[error("Validation failed: {message}")]
    Validation {
        /// A description of what was wrong with the input.
        message: String,
    },

    /// The principal lacks the capability, or a credential check failed.
    #[error("Not authorized: {message}")]
    Authorization {
        /// A description of the failed check.
        message: String,
    },

    /// A required prior state is missing (e.g. attendance not finalized).
    #[error("Precondition failed: {message}")]
    Precondition {
        /// A description of the missing state.
        message: String,
    },

    /// A uniqueness invariant would be violated (e.g. payroll already generated).
    #[error("Conflict: {message}")]
    Conflict {
        /// A description of the conflicting state.
        message: String,
    },

    /// A transition was attempted from a state that forbids it.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// A description of the forbidden transition.
        message: String,
    },

    /// The referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity that was looked up.
        entity: String,
        /// The identifier that was not found.
        id: String,
    },

    /// The external collaborator was unreachable or misbehaved.
    #[error("Transport error: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },
}

impl CoreError {
    /// Creates a validation error from any displayable message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an authorization error from any displayable message.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization {
            message: message.into(),
        }
    }

    /// Creates a precondition error from any displayable message.
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Creates a conflict error from any displayable message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Creates an invalid-state error from any displayable message.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Creates a not-found error for an entity/id pair.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a transport error from any displayable message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
