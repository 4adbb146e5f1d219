//! Answer search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{BooleanFilter, LongFilter, StringFilter};
use tutor_entity::Answer;

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`Answer`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCriteria {
    /// Filter on the id.
    pub id: Option<LongFilter>,
    /// Filter on `content`.
    pub content: Option<StringFilter>,
    /// Filter on `accepted`.
    pub accepted: Option<BooleanFilter>,
    /// Filter on the referenced question id.
    pub question_id: Option<LongFilter>,
    /// Filter on the referenced teacher id.
    pub teacher_id: Option<LongFilter>,
    /// Filter on the ids of linked likes.
    pub likes_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for AnswerCriteria {
    type Entity = Answer;

    fn specification(&self) -> Specification<Answer> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("content", self.content.as_ref())
            .filter("accepted", self.accepted.as_ref())
            .join_filter("question", self.question_id.as_ref())
            .join_filter("teacher", self.teacher_id.as_ref())
            .join_filter("likes", self.likes_id.as_ref())
            .build()
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }

    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()> {
        match field {
            "id" => apply_to(&mut self.id, operation, raw),
            "content" => apply_to(&mut self.content, operation, raw),
            "accepted" => apply_to(&mut self.accepted, operation, raw),
            "questionId" => apply_to(&mut self.question_id, operation, raw),
            "teacherId" => apply_to(&mut self.teacher_id, operation, raw),
            "likesId" => apply_to(&mut self.likes_id, operation, raw),
            _ => Err(unknown_field::<Answer>(field)),
        }
    }
}
