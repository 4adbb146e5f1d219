//! Auditing configuration.

use serde::{Deserialize, Serialize};

/// Controls how audit columns are stamped on writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Login recorded in `created_by` / `last_modified_by` when the request
    /// carries no actor.
    #[serde(default = "default_actor")]
    pub default_actor: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            default_actor: default_actor(),
        }
    }
}

fn default_actor() -> String {
    "system".to_string()
}
