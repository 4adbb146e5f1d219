//! Rating search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{InstantFilter, IntegerFilter, LongFilter, StringFilter};
use tutor_entity::Rating;

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`Rating`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingCriteria {
    /// Filter on the id.
    pub id: Option<LongFilter>,
    /// Filter on `score`.
    pub score: Option<IntegerFilter>,
    /// Filter on `comment`.
    pub comment: Option<StringFilter>,
    /// Filter on `rated_at`.
    pub rated_at: Option<InstantFilter>,
    /// Filter on the referenced student id.
    pub student_id: Option<LongFilter>,
    /// Filter on the referenced lesson id.
    pub lesson_id: Option<LongFilter>,
    /// Filter on the ids of linked questions.
    pub questions_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for RatingCriteria {
    type Entity = Rating;

    fn specification(&self) -> Specification<Rating> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("score", self.score.as_ref())
            .filter("comment", self.comment.as_ref())
            .filter("rated_at", self.rated_at.as_ref())
            .join_filter("student", self.student_id.as_ref())
            .join_filter("lesson", self.lesson_id.as_ref())
            .join_filter("questions", self.questions_id.as_ref())
            .build()
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }

    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()> {
        match field {
            "id" => apply_to(&mut self.id, operation, raw),
            "score" => apply_to(&mut self.score, operation, raw),
            "comment" => apply_to(&mut self.comment, operation, raw),
            "ratedAt" => apply_to(&mut self.rated_at, operation, raw),
            "studentId" => apply_to(&mut self.student_id, operation, raw),
            "lessonId" => apply_to(&mut self.lesson_id, operation, raw),
            "questionsId" => apply_to(&mut self.questions_id, operation, raw),
            _ => Err(unknown_field::<Rating>(field)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tutor_core::query::{ColumnRef, CompareOp, Predicate, Value};

    use super::*;

    #[test]
    fn test_score_range_from_query_pairs() {
        let criteria = RatingCriteria::from_pairs([
            ("score.greaterThanOrEqual", "3"),
            ("score.lessThanOrEqual", "5"),
        ])
        .expect("valid criteria");

        let spec = criteria.specification();
        assert!(!spec.is_distinct());
        assert_eq!(
            spec.predicate(),
            &Predicate::And(vec![
                Predicate::Compare {
                    column: ColumnRef::root("score"),
                    op: CompareOp::Gte,
                    value: Value::Int(3),
                },
                Predicate::Compare {
                    column: ColumnRef::root("score"),
                    op: CompareOp::Lte,
                    value: Value::Int(5),
                },
            ])
        );
    }

    #[test]
    fn test_association_filters_join_by_name() {
        let criteria =
            RatingCriteria::from_pairs([("studentId.equals", "7"), ("questionsId.in", "1,2")])
                .expect("valid criteria");
        let joins: Vec<_> = criteria.specification().joins().into_iter().collect();
        assert_eq!(joins, vec!["questions", "student"]);
    }

    #[test]
    fn test_distinct_only_sets_flag() {
        let criteria = RatingCriteria::from_pairs([("distinct", "true")]).expect("valid");
        let spec = criteria.specification();
        assert!(spec.is_distinct());
        assert!(spec.predicate().is_true());
    }

    #[test]
    fn test_rejects_unknown_field_and_malformed_key() {
        let err = RatingCriteria::from_pairs([("stars.equals", "3")]).expect_err("unknown");
        assert!(err.is_validation());
        assert!(err.message.contains("stars"));

        let err = RatingCriteria::from_pairs([("score", "3")]).expect_err("no operation");
        assert!(err.is_validation());

        let err = RatingCriteria::from_pairs([("score.equals", "high")]).expect_err("bad value");
        assert!(err.is_validation());
    }
}
