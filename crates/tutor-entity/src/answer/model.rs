//! Answer entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

use crate::association::BackReference;
use crate::question::Question;

/// Table metadata for [`Answer`].
pub static ANSWER: EntityMeta = EntityMeta {
    name: "Answer",
    table: "answer",
    columns: &[
        "content",
        "accepted",
        "question_id",
        "teacher_id",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[
        JoinDef::many_to_one("question", "question", "question_id"),
        JoinDef::many_to_one("teacher", "teacher", "teacher_id"),
        JoinDef::one_to_many("likes", "likes", "answer_id"),
    ],
};

/// A teacher's reply to a question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Answer {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Answer text.
    pub content: String,
    /// Marked as the accepted answer by the asker.
    pub accepted: Option<bool>,
    /// Answered question.
    pub question_id: Option<i64>,
    /// Answering teacher.
    pub teacher_id: Option<i64>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(Answer);

impl Answer {
    /// Create an answer with the given text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Set the accepted flag.
    pub fn accepted(mut self, accepted: bool) -> Self {
        self.accepted = Some(accepted);
        self
    }

    /// Attach to a question.
    pub fn question(mut self, question_id: i64) -> Self {
        self.question_id = Some(question_id);
        self
    }

    /// Reference the answering teacher.
    pub fn teacher(mut self, teacher_id: i64) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }
}

impl BackReference<Question> for Answer {
    fn parent_id(&self) -> Option<i64> {
        self.question_id
    }

    fn set_parent_id(&mut self, parent_id: Option<i64>) {
        self.question_id = parent_id;
    }
}

impl Entity for Answer {
    const META: &'static EntityMeta = &ANSWER;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("content", Value::from(self.content.clone()));
        record.insert("accepted", Value::from(self.accepted));
        record.insert("question_id", Value::from(self.question_id));
        record.insert("teacher_id", Value::from(self.teacher_id));
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
