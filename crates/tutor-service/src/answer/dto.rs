//! Answer DTO and mapper.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::Answer;

use crate::mapper::{EntityMapper, IdRef, relink_if_present, replace_if_present, set_if_present};

/// Transport shape of an answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(required, length(min = 1, max = 4000))]
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub accepted: Option<bool>,
    #[serde(default)]
    pub question: Option<IdRef>,
    #[serde(default)]
    pub teacher: Option<IdRef>,
}

/// Maps [`Answer`] to and from [`AnswerDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerMapper;

impl EntityMapper for AnswerMapper {
    type Entity = Answer;
    type Dto = AnswerDto;

    fn dto_id(dto: &AnswerDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &Answer) -> AnswerDto {
        AnswerDto {
            id: entity.id,
            content: Some(entity.content.clone()),
            accepted: entity.accepted,
            question: IdRef::of(entity.question_id),
            teacher: IdRef::of(entity.teacher_id),
        }
    }

    fn to_entity(dto: &AnswerDto) -> Answer {
        Answer {
            id: dto.id,
            content: dto.content.clone().unwrap_or_default(),
            accepted: dto.accepted,
            question_id: IdRef::id_of(dto.question.as_ref()),
            teacher_id: IdRef::id_of(dto.teacher.as_ref()),
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut Answer, patch: &AnswerDto) {
        set_if_present(&mut entity.content, &patch.content);
        replace_if_present(&mut entity.accepted, &patch.accepted);
        relink_if_present(&mut entity.question_id, &patch.question);
        relink_if_present(&mut entity.teacher_id, &patch.teacher);
    }
}
