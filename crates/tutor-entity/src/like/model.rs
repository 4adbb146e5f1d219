//! Like entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

use super::kind::LikeKind;

/// Table metadata for [`Like`]. `like` is reserved in SQL, hence `likes`.
pub static LIKE: EntityMeta = EntityMeta {
    name: "Like",
    table: "likes",
    columns: &[
        "kind",
        "liked_at",
        "student_id",
        "answer_id",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[
        JoinDef::many_to_one("student", "student", "student_id"),
        JoinDef::many_to_one("answer", "answer", "answer_id"),
    ],
};

/// A student's reaction to an answer. Every scalar field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Like {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Reaction direction.
    pub kind: Option<LikeKind>,
    /// When the reaction was given.
    pub liked_at: Option<DateTime<Utc>>,
    /// Reacting student.
    pub student_id: Option<i64>,
    /// Target answer.
    pub answer_id: Option<i64>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(Like);

impl Like {
    /// An empty reaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the direction.
    pub fn kind(mut self, kind: LikeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the reaction instant.
    pub fn liked_at(mut self, liked_at: DateTime<Utc>) -> Self {
        self.liked_at = Some(liked_at);
        self
    }

    /// Reference the student.
    pub fn student(mut self, student_id: i64) -> Self {
        self.student_id = Some(student_id);
        self
    }

    /// Reference the answer.
    pub fn answer(mut self, answer_id: i64) -> Self {
        self.answer_id = Some(answer_id);
        self
    }
}

impl Entity for Like {
    const META: &'static EntityMeta = &LIKE;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("kind", Value::from(self.kind));
        record.insert("liked_at", Value::from(self.liked_at));
        record.insert("student_id", Value::from(self.student_id));
        record.insert("answer_id", Value::from(self.answer_id));
        self.audit.write_to(&mut record);
        record
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}
