//! Static table metadata describing how an entity is persisted.

use crate::error::AppError;
use crate::types::sorting::SortField;

/// How an association is joined from the root table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// The root row holds `foreign_key` pointing at the joined row's id.
    ManyToOne {
        /// Foreign-key column on the root table.
        foreign_key: &'static str,
    },
    /// Joined rows hold `mapped_by` pointing back at the root row's id.
    OneToMany {
        /// Foreign-key column on the joined table.
        mapped_by: &'static str,
    },
}

/// A named association that criteria may filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinDef {
    /// Association name, also used as the SQL alias.
    pub name: &'static str,
    /// Joined table.
    pub table: &'static str,
    /// Join direction.
    pub kind: JoinKind,
}

impl JoinDef {
    /// A many-to-one association through `foreign_key` on the root table.
    pub const fn many_to_one(
        name: &'static str,
        table: &'static str,
        foreign_key: &'static str,
    ) -> Self {
        Self {
            name,
            table,
            kind: JoinKind::ManyToOne { foreign_key },
        }
    }

    /// A one-to-many back-reference through `mapped_by` on the joined table.
    pub const fn one_to_many(
        name: &'static str,
        table: &'static str,
        mapped_by: &'static str,
    ) -> Self {
        Self {
            name,
            table,
            kind: JoinKind::OneToMany { mapped_by },
        }
    }
}

/// Table name, persisted columns, and associations of an entity.
#[derive(Debug)]
pub struct EntityMeta {
    /// Entity name used in messages and logs.
    pub name: &'static str,
    /// Table name.
    pub table: &'static str,
    /// Persisted columns except the `id` primary key, in insert order.
    pub columns: &'static [&'static str],
    /// Associations available to criteria.
    pub joins: &'static [JoinDef],
}

impl EntityMeta {
    /// Primary key column name.
    pub const ID: &'static str = "id";

    /// Look up an association by name.
    pub fn join(&self, name: &str) -> Option<&JoinDef> {
        self.joins.iter().find(|j| j.name == name)
    }

    /// Whether `name` is the id or a persisted column.
    pub fn has_column(&self, name: &str) -> bool {
        name == Self::ID || self.columns.contains(&name)
    }

    /// Resolve a requested sort column to its static name, rejecting
    /// unknown columns.
    pub fn sort_column(&self, sort: &SortField) -> Result<&'static str, AppError> {
        if sort.field == Self::ID {
            return Ok(Self::ID);
        }
        self.columns
            .iter()
            .copied()
            .find(|c| *c == sort.field)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Unknown sort property '{}' for {}",
                    sort.field, self.name
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static META: EntityMeta = EntityMeta {
        name: "Rating",
        table: "rating",
        columns: &["score", "comment", "student_id"],
        joins: &[
            JoinDef::many_to_one("student", "student", "student_id"),
            JoinDef::one_to_many("questions", "question", "rating_id"),
        ],
    };

    #[test]
    fn test_join_lookup() {
        assert_eq!(
            META.join("student").map(|j| j.kind),
            Some(JoinKind::ManyToOne {
                foreign_key: "student_id"
            })
        );
        assert!(META.join("teacher").is_none());
    }

    #[test]
    fn test_sort_column_validation() {
        assert_eq!(META.sort_column(&SortField::asc("id")).ok(), Some("id"));
        assert_eq!(
            META.sort_column(&SortField::desc("score")).ok(),
            Some("score")
        );
        let err = META
            .sort_column(&SortField::asc("score; DROP TABLE rating"))
            .expect_err("unknown column");
        assert!(err.is_validation());
    }
}
