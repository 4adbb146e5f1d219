//! Lesson DTO and mapper.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::{Lesson, LessonStatus};

use crate::mapper::{EntityMapper, IdRef, relink_if_present, replace_if_present, set_if_present};

/// Transport shape of a lesson.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LessonDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Unique lesson code.
    #[validate(required, length(min = 1, max = 50))]
    #[serde(default)]
    pub code: Option<String>,
    /// Title.
    #[validate(required, length(min = 1, max = 255))]
    #[serde(default)]
    pub title: Option<String>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Publication status.
    #[serde(default)]
    pub status: Option<LessonStatus>,
    /// Owning teacher.
    #[serde(default)]
    pub teacher: Option<IdRef>,
}

/// Maps [`Lesson`] to and from [`LessonDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LessonMapper;

impl EntityMapper for LessonMapper {
    type Entity = Lesson;
    type Dto = LessonDto;

    fn dto_id(dto: &LessonDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &Lesson) -> LessonDto {
        LessonDto {
            id: entity.id,
            code: Some(entity.code.clone()),
            title: Some(entity.title.clone()),
            description: entity.description.clone(),
            status: entity.status,
            teacher: IdRef::of(entity.teacher_id),
        }
    }

    fn to_entity(dto: &LessonDto) -> Lesson {
        Lesson {
            id: dto.id,
            code: dto.code.clone().unwrap_or_default(),
            title: dto.title.clone().unwrap_or_default(),
            description: dto.description.clone(),
            status: dto.status,
            teacher_id: IdRef::id_of(dto.teacher.as_ref()),
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut Lesson, patch: &LessonDto) {
        set_if_present(&mut entity.code, &patch.code);
        set_if_present(&mut entity.title, &patch.title);
        replace_if_present(&mut entity.description, &patch.description);
        replace_if_present(&mut entity.status, &patch.status);
        relink_if_present(&mut entity.teacher_id, &patch.teacher);
    }
}
