//! Lesson entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

use super::status::LessonStatus;

/// Table metadata for [`Lesson`].
pub static LESSON: EntityMeta = EntityMeta {
    name: "Lesson",
    table: "lesson",
    columns: &[
        "code",
        "title",
        "description",
        "status",
        "teacher_id",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[
        JoinDef::many_to_one("teacher", "teacher", "teacher_id"),
        JoinDef::one_to_many("schedules", "schedule", "lesson_id"),
        JoinDef::one_to_many("ratings", "rating", "lesson_id"),
    ],
};

/// A course unit taught by one teacher.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Lesson {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Unique lesson code.
    pub code: String,
    /// Title.
    pub title: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Publication status.
    pub status: Option<LessonStatus>,
    /// Owning teacher.
    pub teacher_id: Option<i64>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(Lesson);

impl Lesson {
    /// Create a lesson with the required fields.
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status.
    pub fn status(mut self, status: LessonStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Assign the owning teacher.
    pub fn teacher(mut self, teacher_id: i64) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }
}

impl Entity for Lesson {
    const META: &'static EntityMeta = &LESSON;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("code", Value::from(self.code.clone()));
        record.insert("title", Value::from(self.title.clone()));
        record.insert("description", Value::from(self.description.clone()));
        record.insert("status", Value::from(self.status));
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
