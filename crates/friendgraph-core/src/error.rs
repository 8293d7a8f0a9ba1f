//! Error types for the user graph store.

use thiserror::Error;

use crate::user::UserId;

/// Store operation errors.
///
/// Every variant is a precondition failure: the operation applied none of
/// its effects before returning it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source side of a friendship link does not exist.
    #[error("Source user not found")]
    SourceNotFound(UserId),

    /// The target side of a friendship link does not exist.
    #[error("Target user not found")]
    TargetNotFound(UserId),

    /// The addressed user does not exist.
    #[error("User not found")]
    UserNotFound(UserId),
}

impl Error {
    /// Returns the user ID that failed the lookup.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        match self {
            Self::SourceNotFound(id) | Self::TargetNotFound(id) | Self::UserNotFound(id) => *id,
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;
