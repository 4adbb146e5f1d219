//! Lesson time slot model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

/// Table metadata for [`LessonTime`].
pub static LESSON_TIME: EntityMeta = EntityMeta {
    name: "LessonTime",
    table: "lesson_time",
    columns: &[
        "period",
        "start_time",
        "end_time",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[JoinDef::one_to_many("schedules", "schedule", "lesson_time_id")],
};

/// A numbered teaching period of the day, e.g. period 1 from `07:30` to
/// `08:15`.
///
/// Start and end times are kept as `HH:MM` text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct LessonTime {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Period number, starting at 1.
    pub period: i32,
    /// Start of the period.
    pub start_time: Option<String>,
    /// End of the period.
    pub end_time: Option<String>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(LessonTime);

impl LessonTime {
    /// Create a slot for `period` spanning `start`..`end`.
    pub fn new(period: i32, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            period,
            start_time: Some(start.into()),
            end_time: Some(end.into()),
            ..Self::default()
        }
    }
}

impl Entity for LessonTime {
    const META: &'static EntityMeta = &LESSON_TIME;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("period", Value::from(self.period));
        record.insert("start_time", Value::from(self.start_time.clone()));
        record.insert("end_time", Value::from(self.end_time.clone()));
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
