//! Schedule DTO and mapper.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::{Schedule, ScheduleStatus};

use crate::mapper::{EntityMapper, IdRef, relink_if_present, replace_if_present};

/// Transport shape of a schedule entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Day of the occurrence.
    #[validate(required)]
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Free-text note.
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub note: Option<String>,
    /// Progress.
    #[serde(default)]
    pub status: Option<ScheduleStatus>,
    /// Lesson held.
    #[serde(default)]
    pub lesson: Option<IdRef>,
    /// Room used.
    #[serde(default)]
    pub room: Option<IdRef>,
    /// Period of the day.
    #[serde(default)]
    pub lesson_time: Option<IdRef>,
    /// Attending student.
    #[serde(default)]
    pub student: Option<IdRef>,
}

/// Maps [`Schedule`] to and from [`ScheduleDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleMapper;

impl EntityMapper for ScheduleMapper {
    type Entity = Schedule;
    type Dto = ScheduleDto;

    fn dto_id(dto: &ScheduleDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &Schedule) -> ScheduleDto {
        ScheduleDto {
            id: entity.id,
            date: entity.date,
            note: entity.note.clone(),
            status: entity.status,
            lesson: IdRef::of(entity.lesson_id),
            room: IdRef::of(entity.room_id),
            lesson_time: IdRef::of(entity.lesson_time_id),
            student: IdRef::of(entity.student_id),
        }
    }

    fn to_entity(dto: &ScheduleDto) -> Schedule {
        Schedule {
            id: dto.id,
            date: dto.date,
            note: dto.note.clone(),
            status: dto.status,
            lesson_id: IdRef::id_of(dto.lesson.as_ref()),
            room_id: IdRef::id_of(dto.room.as_ref()),
            lesson_time_id: IdRef::id_of(dto.lesson_time.as_ref()),
            student_id: IdRef::id_of(dto.student.as_ref()),
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut Schedule, patch: &ScheduleDto) {
        replace_if_present(&mut entity.date, &patch.date);
        replace_if_present(&mut entity.note, &patch.note);
        replace_if_present(&mut entity.status, &patch.status);
        relink_if_present(&mut entity.lesson_id, &patch.lesson);
        relink_if_present(&mut entity.room_id, &patch.room);
        relink_if_present(&mut entity.lesson_time_id, &patch.lesson_time);
        relink_if_present(&mut entity.student_id, &patch.student);
    }
}
