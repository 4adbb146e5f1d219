//! Request context carrying the acting login and request identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login recorded when no actor is supplied.
pub const SYSTEM_ACTOR: &str = "system";

/// Context for the current request.
///
/// Passed into every write so audit columns record *who* acted and *when*.
/// The same instant is used for every stamp made by one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Login of the acting user.
    pub actor: String,
    /// Correlation id for logs.
    pub request_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for `actor`.
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            request_id: Uuid::new_v4(),
            request_time: Utc::now(),
        }
    }

    /// Creates a context for an optional actor, falling back to `default_actor`
    /// when it is absent or blank.
    pub fn for_actor(actor: Option<&str>, default_actor: &str) -> Self {
        match actor.map(str::trim).filter(|a| !a.is_empty()) {
            Some(actor) => Self::new(actor),
            None => Self::new(default_actor),
        }
    }

    /// A context acting as [`SYSTEM_ACTOR`].
    pub fn system() -> Self {
        Self::new(SYSTEM_ACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_actor_falls_back() {
        assert_eq!(RequestContext::for_actor(Some("  "), "system").actor, "system");
        assert_eq!(RequestContext::for_actor(None, "admin").actor, "admin");
        assert_eq!(RequestContext::for_actor(Some("ann"), "system").actor, "ann");
    }
}
