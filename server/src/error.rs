use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures the recipe store can surface. Classification happens where the
/// failure occurs, inside the adapter that observed the driver error, so the
/// HTTP layer never has to guess from message text.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Missing or malformed required input; the message is user-facing and
    /// names the offending field.
    #[error("{0}")]
    Validation(String),

    #[error("recipe not found")]
    NotFound,

    /// The backend could not be reached at all. Kept separate from query
    /// failures so an operator can spot a misconfigured connection string.
    #[error("database unreachable: {0}")]
    Unavailable(String),

    /// The backend was reachable but the operation failed.
    #[error("storage operation failed: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn required(field: &str) -> Self {
        StoreError::Validation(format!("{field} cannot be empty"))
    }

    pub fn from_pool(error: diesel::r2d2::PoolError) -> Self {
        StoreError::Unavailable(error.to_string())
    }

    pub fn from_diesel(error: DieselError) -> Self {
        match error {
            DieselError::NotFound => StoreError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                StoreError::Unavailable(info.message().to_string())
            }
            DieselError::DatabaseError(DatabaseErrorKind::UnableToSendCommand, info) => {
                StoreError::Unavailable(info.message().to_string())
            }
            other => StoreError::Backend(other.to_string()),
        }
    }

    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            StoreError::Unavailable(error.to_string())
        } else {
            StoreError::Backend(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_connection_classifies_as_unavailable() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection unexpectedly".to_string()),
        );
        assert!(matches!(
            StoreError::from_diesel(error),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn unique_violation_classifies_as_backend() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value".to_string()),
        );
        assert!(matches!(
            StoreError::from_diesel(error),
            StoreError::Backend(_)
        ));
    }

    #[test]
    fn not_found_maps_through() {
        assert!(matches!(
            StoreError::from_diesel(DieselError::NotFound),
            StoreError::NotFound
        ));
    }

    #[test]
    fn required_message_names_the_field() {
        let error = StoreError::required("Ingredients");
        assert_eq!(error.to_string(), "Ingredients cannot be empty");
    }
}
