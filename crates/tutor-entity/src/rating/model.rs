//! Rating entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

/// Lowest accepted score.
pub const MIN_SCORE: i32 = 0;
/// Highest accepted score.
pub const MAX_SCORE: i32 = 5;

/// Table metadata for [`Rating`].
pub static RATING: EntityMeta = EntityMeta {
    name: "Rating",
    table: "rating",
    columns: &[
        "score",
        "comment",
        "rated_at",
        "student_id",
        "lesson_id",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[
        JoinDef::many_to_one("student", "student", "student_id"),
        JoinDef::many_to_one("lesson", "lesson", "lesson_id"),
        JoinDef::one_to_many("questions", "question", "rating_id"),
    ],
};

/// A student's score for a lesson, optionally followed by questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Rating {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Score in `MIN_SCORE..=MAX_SCORE`.
    pub score: i32,
    /// Free-text comment.
    pub comment: Option<String>,
    /// When the rating was given.
    pub rated_at: Option<DateTime<Utc>>,
    /// Rating student.
    pub student_id: Option<i64>,
    /// Rated lesson.
    pub lesson_id: Option<i64>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(Rating);

impl Rating {
    /// An empty rating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score.
    pub fn score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    /// Set the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Set the rating instant.
    pub fn rated_at(mut self, rated_at: DateTime<Utc>) -> Self {
        self.rated_at = Some(rated_at);
        self
    }

    /// Reference the student.
    pub fn student(mut self, student_id: i64) -> Self {
        self.student_id = Some(student_id);
        self
    }

    /// Reference the lesson.
    pub fn lesson(mut self, lesson_id: i64) -> Self {
        self.lesson_id = Some(lesson_id);
        self
    }

    /// Whether the score lies in the accepted range.
    pub fn has_valid_score(&self) -> bool {
        (MIN_SCORE..=MAX_SCORE).contains(&self.score)
    }
}

impl Entity for Rating {
    const META: &'static EntityMeta = &RATING;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("score", Value::from(self.score));
        record.insert("comment", Value::from(self.comment.clone()));
        record.insert("rated_at", Value::from(self.rated_at));
        record.insert("student_id", Value::from(self.student_id));
        record.insert("lesson_id", Value::from(self.lesson_id));
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
