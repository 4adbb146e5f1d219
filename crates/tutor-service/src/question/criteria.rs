//! Question search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{LongFilter, StringFilter};
use tutor_entity::Question;

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`Question`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCriteria {
    pub id: Option<LongFilter>,
    pub content: Option<StringFilter>,
    pub rating_id: Option<LongFilter>,
    pub student_id: Option<LongFilter>,
    pub answers_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for QuestionCriteria {
    type Entity = Question;

    fn specification(&self) -> Specification<Question> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("content", self.content.as_ref())
            .join_filter("rating", self.rating_id.as_ref())
            .join_filter("student", self.student_id.as_ref())
            .join_filter("answers", self.answers_id.as_ref())
            .build()
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }

    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()> {
        match field {
            "id" => apply_to(&mut self.id, operation, raw),
            "content" => apply_to(&mut self.content, operation, raw),
            "ratingId" => apply_to(&mut self.rating_id, operation, raw),
            "studentId" => apply_to(&mut self.student_id, operation, raw),
            "answersId" => apply_to(&mut self.answers_id, operation, raw),
            _ => Err(unknown_field::<Question>(field)),
        }
    }
}
