//! Schedule entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

use super::status::ScheduleStatus;

/// Table metadata for [`Schedule`].
pub static SCHEDULE: EntityMeta = EntityMeta {
    name: "Schedule",
    table: "schedule",
    columns: &[
        "date",
        "note",
        "status",
        "lesson_id",
        "room_id",
        "lesson_time_id",
        "student_id",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[
        JoinDef::many_to_one("lesson", "lesson", "lesson_id"),
        JoinDef::many_to_one("room", "room", "room_id"),
        JoinDef::many_to_one("lesson_time", "lesson_time", "lesson_time_id"),
        JoinDef::many_to_one("student", "student", "student_id"),
    ],
};

/// One occurrence of a lesson for a student, in a room, at a period.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Schedule {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Day of the occurrence.
    pub date: Option<NaiveDate>,
    /// Free-text note.
    pub note: Option<String>,
    /// Progress.
    pub status: Option<ScheduleStatus>,
    /// Lesson being held.
    pub lesson_id: Option<i64>,
    /// Room used.
    pub room_id: Option<i64>,
    /// Period of the day.
    pub lesson_time_id: Option<i64>,
    /// Attending student.
    pub student_id: Option<i64>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(Schedule);

impl Schedule {
    /// Create a schedule on `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Set the note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the status.
    pub fn status(mut self, status: ScheduleStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Reference the lesson.
    pub fn lesson(mut self, lesson_id: i64) -> Self {
        self.lesson_id = Some(lesson_id);
        self
    }

    /// Reference the room.
    pub fn room(mut self, room_id: i64) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Reference the period.
    pub fn lesson_time(mut self, lesson_time_id: i64) -> Self {
        self.lesson_time_id = Some(lesson_time_id);
        self
    }

    /// Reference the student.
    pub fn student(mut self, student_id: i64) -> Self {
        self.student_id = Some(student_id);
        self
    }
}

impl Entity for Schedule {
    const META: &'static EntityMeta = &SCHEDULE;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("date", Value::from(self.date));
        record.insert("note", Value::from(self.note.clone()));
        record.insert("status", Value::from(self.status));
        record.insert("lesson_id", Value::from(self.lesson_id));
        record.insert("room_id", Value::from(self.room_id));
        record.insert("lesson_time_id", Value::from(self.lesson_time_id));
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
