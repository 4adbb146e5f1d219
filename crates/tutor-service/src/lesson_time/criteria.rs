//! LessonTime search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{IntegerFilter, LongFilter, StringFilter};
use tutor_entity::LessonTime;

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`LessonTime`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonTimeCriteria {
    /// Filter on the id.
    pub id: Option<LongFilter>,
    /// Filter on `period`.
    pub period: Option<IntegerFilter>,
    /// Filter on `start_time`.
    pub start_time: Option<StringFilter>,
    /// Filter on `end_time`.
    pub end_time: Option<StringFilter>,
    /// Filter on the ids of linked schedules.
    pub schedules_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for LessonTimeCriteria {
    type Entity = LessonTime;

    fn specification(&self) -> Specification<LessonTime> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("period", self.period.as_ref())
            .filter("start_time", self.start_time.as_ref())
            .filter("end_time", self.end_time.as_ref())
            .join_filter("schedules", self.schedules_id.as_ref())
            .build()
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }

    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()> {
        match field {
            "id" => apply_to(&mut self.id, operation, raw),
            "period" => apply_to(&mut self.period, operation, raw),
            "startTime" => apply_to(&mut self.start_time, operation, raw),
            "endTime" => apply_to(&mut self.end_time, operation, raw),
            "schedulesId" => apply_to(&mut self.schedules_id, operation, raw),
            _ => Err(unknown_field::<LessonTime>(field)),
        }
    }
}
