//! Room DTO and mapper.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::Room;

use crate::mapper::{EntityMapper, replace_if_present, set_if_present};

/// Transport shape of a room.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Unique room code.
    #[validate(required, length(min = 1, max = 50))]
    #[serde(default)]
    pub code: Option<String>,
    /// Display name.
    #[validate(required, length(min = 1, max = 255))]
    #[serde(default)]
    pub name: Option<String>,
    /// Seat count.
    #[validate(range(min = 0))]
    #[serde(default)]
    pub capacity: Option<i32>,
    /// Building or meeting link.
    #[validate(length(max = 255))]
    #[serde(default)]
    pub location: Option<String>,
}

/// Maps [`Room`] to and from [`RoomDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomMapper;

impl EntityMapper for RoomMapper {
    type Entity = Room;
    type Dto = RoomDto;

    fn dto_id(dto: &RoomDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &Room) -> RoomDto {
        RoomDto {
            id: entity.id,
            code: Some(entity.code.clone()),
            name: Some(entity.name.clone()),
            capacity: entity.capacity,
            location: entity.location.clone(),
        }
    }

    fn to_entity(dto: &RoomDto) -> Room {
        Room {
            id: dto.id,
            code: dto.code.clone().unwrap_or_default(),
            name: dto.name.clone().unwrap_or_default(),
            capacity: dto.capacity,
            location: dto.location.clone(),
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut Room, patch: &RoomDto) {
        set_if_present(&mut entity.code, &patch.code);
        set_if_present(&mut entity.name, &patch.name);
        replace_if_present(&mut entity.capacity, &patch.capacity);
        replace_if_present(&mut entity.location, &patch.location);
    }
}
