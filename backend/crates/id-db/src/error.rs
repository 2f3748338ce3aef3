use id_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    /// True when the underlying driver reported a UNIQUE constraint
    /// violation. The users.email constraint is the final arbiter of
    /// the duplicate-email race; callers map this back to a conflict
    /// response instead of a server fault.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx { source, .. } => source
                .as_database_error()
                .is_some_and(|e| matches!(e.kind(), sqlx::error::ErrorKind::UniqueViolation)),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
