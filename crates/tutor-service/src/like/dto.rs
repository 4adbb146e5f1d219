//! Like DTO and mapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::{Like, LikeKind};

use crate::mapper::{EntityMapper, IdRef, relink_if_present, replace_if_present};

/// Transport shape of a reaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikeDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub kind: Option<LikeKind>,
    #[serde(default)]
    pub liked_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub student: Option<IdRef>,
    #[serde(default)]
    pub answer: Option<IdRef>,
}

/// Maps [`Like`] to and from [`LikeDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LikeMapper;

impl EntityMapper for LikeMapper {
    type Entity = Like;
    type Dto = LikeDto;

    fn dto_id(dto: &LikeDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &Like) -> LikeDto {
        LikeDto {
            id: entity.id,
            kind: entity.kind,
            liked_at: entity.liked_at,
            student: IdRef::of(entity.student_id),
            answer: IdRef::of(entity.answer_id),
        }
    }

    fn to_entity(dto: &LikeDto) -> Like {
        Like {
            id: dto.id,
            kind: dto.kind,
            liked_at: dto.liked_at,
            student_id: IdRef::id_of(dto.student.as_ref()),
            answer_id: IdRef::id_of(dto.answer.as_ref()),
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut Like, patch: &LikeDto) {
        replace_if_present(&mut entity.kind, &patch.kind);
        replace_if_present(&mut entity.liked_at, &patch.liked_at);
        relink_if_present(&mut entity.student_id, &patch.student);
        relink_if_present(&mut entity.answer_id, &patch.answer);
    }
}
