//! LessonTime DTO and mapper.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::LessonTime;

use crate::mapper::{EntityMapper, replace_if_present, set_if_present};

/// Transport shape of a lesson period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LessonTimeDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[validate(required, range(min = 1))]
    #[serde(default)]
    pub period: Option<i32>,
    #[validate(custom(function = "crate::validation::validate_clock_time"))]
    #[serde(default)]
    pub start_time: Option<String>,
    #[validate(custom(function = "crate::validation::validate_clock_time"))]
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Maps [`LessonTime`] to and from [`LessonTimeDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LessonTimeMapper;

impl EntityMapper for LessonTimeMapper {
    type Entity = LessonTime;
    type Dto = LessonTimeDto;

    fn dto_id(dto: &LessonTimeDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &LessonTime) -> LessonTimeDto {
        LessonTimeDto {
            id: entity.id,
            period: Some(entity.period),
            start_time: entity.start_time.clone(),
            end_time: entity.end_time.clone(),
        }
    }

    fn to_entity(dto: &LessonTimeDto) -> LessonTime {
        LessonTime {
            id: dto.id,
            period: dto.period.unwrap_or_default(),
            start_time: dto.start_time.clone(),
            end_time: dto.end_time.clone(),
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut LessonTime, patch: &LessonTimeDto) {
        set_if_present(&mut entity.period, &patch.period);
        replace_if_present(&mut entity.start_time, &patch.start_time);
        replace_if_present(&mut entity.end_time, &patch.end_time);
    }
}
