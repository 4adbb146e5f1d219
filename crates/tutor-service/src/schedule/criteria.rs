//! Schedule search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{Filter, LocalDateFilter, LongFilter, StringFilter};
use tutor_entity::{Schedule, ScheduleStatus};

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`Schedule`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCriteria {
    /// Filter on the id.
    pub id: Option<LongFilter>,
    /// Filter on `date`.
    pub date: Option<LocalDateFilter>,
    /// Filter on `note`.
    pub note: Option<StringFilter>,
    /// Filter on `status`.
    pub status: Option<Filter<ScheduleStatus>>,
    /// Filter on the referenced lesson id.
    pub lesson_id: Option<LongFilter>,
    /// Filter on the referenced room id.
    pub room_id: Option<LongFilter>,
    /// Filter on the referenced lesson time id.
    pub lesson_time_id: Option<LongFilter>,
    /// Filter on the referenced student id.
    pub student_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for ScheduleCriteria {
    type Entity = Schedule;

    fn specification(&self) -> Specification<Schedule> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("date", self.date.as_ref())
            .filter("note", self.note.as_ref())
            .filter("status", self.status.as_ref())
            .join_filter("lesson", self.lesson_id.as_ref())
            .join_filter("room", self.room_id.as_ref())
            .join_filter("lesson_time", self.lesson_time_id.as_ref())
            .join_filter("student", self.student_id.as_ref())
            .build()
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }

    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()> {
        match field {
            "id" => apply_to(&mut self.id, operation, raw),
            "date" => apply_to(&mut self.date, operation, raw),
            "note" => apply_to(&mut self.note, operation, raw),
            "status" => apply_to(&mut self.status, operation, raw),
            "lessonId" => apply_to(&mut self.lesson_id, operation, raw),
            "roomId" => apply_to(&mut self.room_id, operation, raw),
            "lessonTimeId" => apply_to(&mut self.lesson_time_id, operation, raw),
            "studentId" => apply_to(&mut self.student_id, operation, raw),
            _ => Err(unknown_field::<Schedule>(field)),
        }
    }
}
