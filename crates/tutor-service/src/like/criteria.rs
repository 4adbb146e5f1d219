//! Like search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{Filter, InstantFilter, LongFilter};
use tutor_entity::{Like, LikeKind};

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`Like`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCriteria {
    /// Filter on the id.
    pub id: Option<LongFilter>,
    /// Filter on `kind`.
    pub kind: Option<Filter<LikeKind>>,
    /// Filter on `liked_at`.
    pub liked_at: Option<InstantFilter>,
    /// Filter on the referenced student id.
    pub student_id: Option<LongFilter>,
    /// Filter on the referenced answer id.
    pub answer_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for LikeCriteria {
    type Entity = Like;

    fn specification(&self) -> Specification<Like> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("kind", self.kind.as_ref())
            .filter("liked_at", self.liked_at.as_ref())
            .join_filter("student", self.student_id.as_ref())
            .join_filter("answer", self.answer_id.as_ref())
            .build()
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }

    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()> {
        match field {
            "id" => apply_to(&mut self.id, operation, raw),
            "kind" => apply_to(&mut self.kind, operation, raw),
            "likedAt" => apply_to(&mut self.liked_at, operation, raw),
            "studentId" => apply_to(&mut self.student_id, operation, raw),
            "answerId" => apply_to(&mut self.answer_id, operation, raw),
            _ => Err(unknown_field::<Like>(field)),
        }
    }
}
