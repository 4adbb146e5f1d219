//! Error type shared by every crate in the workspace.

use std::fmt;

use thiserror::Error;

/// Broad category of an [`AppError`]; the HTTP layer maps it to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// No row with the requested id.
    NotFound,
    /// Constraint violation or malformed criteria.
    Validation,
    /// Id supplied on create, or a unique key already taken.
    Conflict,
    /// Unexpected failure inside the service.
    Internal,
    /// Storage-layer failure, including foreign-key violations.
    Database,
    /// Invalid or missing configuration.
    Configuration,
    /// Malformed JSON.
    Serialization,
    /// The database cannot be reached.
    ServiceUnavailable,
}

impl ErrorKind {
    /// Upper-case name used in messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Validation => "VALIDATION",
            Self::Conflict => "CONFLICT",
            Self::Internal => "INTERNAL",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Category of a sqlx failure. Unique violations are conflicts, a
    /// missing row is not-found, pool exhaustion is unavailability.
    pub fn of_sqlx(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::ServiceUnavailable,
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Conflict,
            _ => Self::Database,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The workspace-wide error: a kind, a message safe to show to clients, and
/// an optional cause kept for logs.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Category.
    pub kind: ErrorKind,
    /// Client-facing message.
    pub message: String,
    /// Underlying cause, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// An error without an underlying cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// An error wrapping `source`.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// No row with the requested id.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Whether the HTTP layer should report this as a server fault.
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Internal
                | ErrorKind::Database
                | ErrorKind::Configuration
                | ErrorKind::ServiceUnavailable
        )
    }
}

/// A text value naming no variant of a persisted enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {type_name} value '{value}'")]
pub struct UnknownVariant {
    /// Enumeration name.
    pub type_name: &'static str,
    /// Rejected text.
    pub value: String,
}

impl From<UnknownVariant> for AppError {
    fn from(err: UnknownVariant) -> Self {
        Self::validation(err.to_string())
    }
}

// The cause is not cloneable; clones keep kind and message only.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self::new(self.kind, self.message.clone())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorKind::Serialization, format!("Malformed JSON: {err}"), err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::with_source(ErrorKind::of_sqlx(&err), format!("Database error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Invalid configuration: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = AppError::validation("score must be between 0 and 5");
        assert_eq!(err.to_string(), "VALIDATION: score must be between 0 and 5");
        assert!(err.is_validation());
        assert!(!err.is_server_fault());
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::other("boom");
        let err = AppError::with_source(ErrorKind::Database, "write failed", io);
        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Database);
        assert!(cloned.source.is_none());
        assert!(cloned.is_server_fault());
    }

    #[test]
    fn test_unknown_variant_is_validation() {
        let err = AppError::from(UnknownVariant {
            type_name: "LikeKind",
            value: "like".to_string(),
        });
        assert_eq!(err.to_string(), "VALIDATION: Unknown LikeKind value 'like'");
    }

    #[test]
    fn test_sqlx_categories() {
        assert_eq!(ErrorKind::of_sqlx(&sqlx::Error::RowNotFound), ErrorKind::NotFound);
        assert_eq!(
            ErrorKind::of_sqlx(&sqlx::Error::PoolTimedOut),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(
            ErrorKind::of_sqlx(&sqlx::Error::Protocol("bad frame".into())),
            ErrorKind::Database
        );
    }
}
