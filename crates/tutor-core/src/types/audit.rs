//! Auditing columns shared by every entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::query::{Record, Value};

/// Column names of the auditing fields, in table order.
pub const AUDIT_COLUMNS: [&str; 4] = [
    "created_by",
    "created_date",
    "last_modified_by",
    "last_modified_date",
];

/// Who created / last modified a row, and when.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Audit {
    /// Login of the creator.
    pub created_by: Option<String>,
    /// Creation instant.
    pub created_date: Option<DateTime<Utc>>,
    /// Login of the last modifier.
    pub last_modified_by: Option<String>,
    /// Last modification instant.
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Audit {
    /// Stamp both creation and modification fields.
    pub fn mark_created(&mut self, actor: &str, at: DateTime<Utc>) {
        self.created_by = Some(actor.to_string());
        self.created_date = Some(at);
        self.mark_modified(actor, at);
    }

    /// Stamp the modification fields only.
    pub fn mark_modified(&mut self, actor: &str, at: DateTime<Utc>) {
        self.last_modified_by = Some(actor.to_string());
        self.last_modified_date = Some(at);
    }

    /// Copy the creation fields from a previously stored version.
    pub fn inherit_created(&mut self, stored: &Audit) {
        self.created_by = stored.created_by.clone();
        self.created_date = stored.created_date;
    }

    /// Write the audit columns into a record.
    pub fn write_to(&self, record: &mut Record) {
        record.insert("created_by", Value::from(self.created_by.clone()));
        record.insert("created_date", Value::from(self.created_date));
        record.insert("last_modified_by", Value::from(self.last_modified_by.clone()));
        record.insert("last_modified_date", Value::from(self.last_modified_date));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_created_sets_all_fields() {
        let now = Utc::now();
        let mut audit = Audit::default();
        audit.mark_created("admin", now);

        assert_eq!(audit.created_by.as_deref(), Some("admin"));
        assert_eq!(audit.created_date, Some(now));
        assert_eq!(audit.last_modified_by.as_deref(), Some("admin"));
        assert_eq!(audit.last_modified_date, Some(now));
    }

    #[test]
    fn test_inherit_created_keeps_modification() {
        let earlier = Utc::now() - chrono::Duration::hours(1);
        let mut stored = Audit::default();
        stored.mark_created("alice", earlier);

        let mut next = Audit::default();
        next.mark_modified("bob", Utc::now());
        next.inherit_created(&stored);

        assert_eq!(next.created_by.as_deref(), Some("alice"));
        assert_eq!(next.created_date, Some(earlier));
        assert_eq!(next.last_modified_by.as_deref(), Some("bob"));
    }
}
