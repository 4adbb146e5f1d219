//! Question entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

use crate::association::BackReference;
use crate::rating::Rating;

/// Table metadata for [`Question`].
pub static QUESTION: EntityMeta = EntityMeta {
    name: "Question",
    table: "question",
    columns: &[
        "content",
        "rating_id",
        "student_id",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[
        JoinDef::many_to_one("rating", "rating", "rating_id"),
        JoinDef::many_to_one("student", "student", "student_id"),
        JoinDef::one_to_many("answers", "answer", "question_id"),
    ],
};

/// A follow-up question attached to a rating.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Question {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Question text.
    pub content: String,
    /// Rating this question follows up on.
    pub rating_id: Option<i64>,
    /// Asking student.
    pub student_id: Option<i64>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(Question);

impl Question {
    /// Create a question with the given text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Attach to a rating.
    pub fn rating(mut self, rating_id: i64) -> Self {
        self.rating_id = Some(rating_id);
        self
    }

    /// Reference the asking student.
    pub fn student(mut self, student_id: i64) -> Self {
        self.student_id = Some(student_id);
        self
    }
}

impl BackReference<Rating> for Question {
    fn parent_id(&self) -> Option<i64> {
        self.rating_id
    }

    fn set_parent_id(&mut self, parent_id: Option<i64>) {
        self.rating_id = parent_id;
    }
}

impl Entity for Question {
    const META: &'static EntityMeta = &QUESTION;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("content", Value::from(self.content.clone()));
        record.insert("rating_id", Value::from(self.rating_id));
        record.insert("student_id", Value::from(self.student_id));
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
