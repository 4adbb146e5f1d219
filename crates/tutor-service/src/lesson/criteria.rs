//! Lesson search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{Filter, LongFilter, StringFilter};
use tutor_entity::{Lesson, LessonStatus};

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`Lesson`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonCriteria {
    /// Filter on the id.
    pub id: Option<LongFilter>,
    /// Filter on `code`.
    pub code: Option<StringFilter>,
    /// Filter on `title`.
    pub title: Option<StringFilter>,
    /// Filter on `description`.
    pub description: Option<StringFilter>,
    /// Filter on `status`.
    pub status: Option<Filter<LessonStatus>>,
    /// Filter on the referenced teacher id.
    pub teacher_id: Option<LongFilter>,
    /// Filter on the ids of linked schedules.
    pub schedules_id: Option<LongFilter>,
    /// Filter on the ids of linked ratings.
    pub ratings_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for LessonCriteria {
    type Entity = Lesson;

    fn specification(&self) -> Specification<Lesson> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("code", self.code.as_ref())
            .filter("title", self.title.as_ref())
            .filter("description", self.description.as_ref())
            .filter("status", self.status.as_ref())
            .join_filter("teacher", self.teacher_id.as_ref())
            .join_filter("schedules", self.schedules_id.as_ref())
            .join_filter("ratings", self.ratings_id.as_ref())
            .build()
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }

    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()> {
        match field {
            "id" => apply_to(&mut self.id, operation, raw),
            "code" => apply_to(&mut self.code, operation, raw),
            "title" => apply_to(&mut self.title, operation, raw),
            "description" => apply_to(&mut self.description, operation, raw),
            "status" => apply_to(&mut self.status, operation, raw),
            "teacherId" => apply_to(&mut self.teacher_id, operation, raw),
            "schedulesId" => apply_to(&mut self.schedules_id, operation, raw),
            "ratingsId" => apply_to(&mut self.ratings_id, operation, raw),
            _ => Err(unknown_field::<Lesson>(field)),
        }
    }
}
