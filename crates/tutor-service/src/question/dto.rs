//! Question DTO and mapper.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::Question;

use crate::mapper::{EntityMapper, IdRef, relink_if_present, set_if_present};

/// Transport shape of a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Question text.
    #[validate(required, length(min = 1, max = 4000))]
    #[serde(default)]
    pub content: Option<String>,
    /// Rating followed up on.
    #[serde(default)]
    pub rating: Option<IdRef>,
    /// Asking student.
    #[serde(default)]
    pub student: Option<IdRef>,
}

/// Maps [`Question`] to and from [`QuestionDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionMapper;

impl EntityMapper for QuestionMapper {
    type Entity = Question;
    type Dto = QuestionDto;

    fn dto_id(dto: &QuestionDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &Question) -> QuestionDto {
        QuestionDto {
            id: entity.id,
            content: Some(entity.content.clone()),
            rating: IdRef::of(entity.rating_id),
            student: IdRef::of(entity.student_id),
        }
    }

    fn to_entity(dto: &QuestionDto) -> Question {
        Question {
            id: dto.id,
            content: dto.content.clone().unwrap_or_default(),
            rating_id: IdRef::id_of(dto.rating.as_ref()),
            student_id: IdRef::id_of(dto.student.as_ref()),
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut Question, patch: &QuestionDto) {
        set_if_present(&mut entity.content, &patch.content);
        relink_if_present(&mut entity.rating_id, &patch.rating);
        relink_if_present(&mut entity.student_id, &patch.student);
    }
}
