//! Rating DTO and mapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::Rating;

use crate::mapper::{EntityMapper, IdRef, relink_if_present, replace_if_present, set_if_present};

/// Transport shape of a rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Score from 0 to 5.
    #[validate(required, range(min = 0, max = 5))]
    #[serde(default)]
    pub score: Option<i32>,
    /// Free-text comment.
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub comment: Option<String>,
    /// When the rating was given.
    #[serde(default)]
    pub rated_at: Option<DateTime<Utc>>,
    /// Rating student.
    #[serde(default)]
    pub student: Option<IdRef>,
    /// Rated lesson.
    #[serde(default)]
    pub lesson: Option<IdRef>,
}

/// Maps [`Rating`] to and from [`RatingDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingMapper;

impl EntityMapper for RatingMapper {
    type Entity = Rating;
    type Dto = RatingDto;

    fn dto_id(dto: &RatingDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &Rating) -> RatingDto {
        RatingDto {
            id: entity.id,
            score: Some(entity.score),
            comment: entity.comment.clone(),
            rated_at: entity.rated_at,
            student: IdRef::of(entity.student_id),
            lesson: IdRef::of(entity.lesson_id),
        }
    }

    fn to_entity(dto: &RatingDto) -> Rating {
        Rating {
            id: dto.id,
            score: dto.score.unwrap_or_default(),
            comment: dto.comment.clone(),
            rated_at: dto.rated_at,
            student_id: IdRef::id_of(dto.student.as_ref()),
            lesson_id: IdRef::id_of(dto.lesson.as_ref()),
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut Rating, patch: &RatingDto) {
        set_if_present(&mut entity.score, &patch.score);
        replace_if_present(&mut entity.comment, &patch.comment);
        replace_if_present(&mut entity.rated_at, &patch.rated_at);
        relink_if_present(&mut entity.student_id, &patch.student);
        relink_if_present(&mut entity.lesson_id, &patch.lesson);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_score_outside_range_is_rejected() {
        let dto = RatingDto {
            score: Some(6),
            ..Default::default()
        };
        let err = validate(&dto).expect_err("score 6");
        assert!(err.is_validation());
        assert!(err.message.contains("score"));

        let dto = RatingDto {
            score: Some(5),
            ..Default::default()
        };
        assert!(validate(&dto).is_ok());
    }

    #[test]
    fn test_missing_score_is_rejected() {
        let err = validate(&RatingDto::default()).expect_err("score required");
        assert!(err.message.contains("score (required)"));
    }

    #[test]
    fn test_merge_partial_keeps_absent_fields() {
        let mut rating = Rating::new().score(4).comment("good").student(7).with_id(1);
        let patch = RatingDto {
            comment: Some("better".to_string()),
            lesson: Some(IdRef { id: 3 }),
            ..Default::default()
        };
        RatingMapper::merge_partial(&mut rating, &patch);

        assert_eq!(rating.score, 4);
        assert_eq!(rating.comment.as_deref(), Some("better"));
        assert_eq!(rating.student_id, Some(7));
        assert_eq!(rating.lesson_id, Some(3));
        assert_eq!(rating.id, Some(1));
    }
}
