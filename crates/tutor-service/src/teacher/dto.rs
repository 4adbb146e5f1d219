//! Teacher DTO and mapper.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::Teacher;

use crate::mapper::{EntityMapper, replace_if_present, set_if_present};

/// Transport shape of a teacher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Unique teacher code.
    #[validate(required, length(min = 1, max = 50))]
    #[serde(default)]
    pub code: Option<String>,
    /// Display name.
    #[validate(required, length(min = 1, max = 255))]
    #[serde(default)]
    pub full_name: Option<String>,
    /// Contact email.
    #[validate(email)]
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone.
    #[validate(length(max = 50))]
    #[serde(default)]
    pub phone: Option<String>,
    /// Academic degree.
    #[validate(length(max = 100))]
    #[serde(default)]
    pub degree: Option<String>,
}

/// Maps [`Teacher`] to and from [`TeacherDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TeacherMapper;

impl EntityMapper for TeacherMapper {
    type Entity = Teacher;
    type Dto = TeacherDto;

    fn dto_id(dto: &TeacherDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &Teacher) -> TeacherDto {
        TeacherDto {
            id: entity.id,
            code: Some(entity.code.clone()),
            full_name: Some(entity.full_name.clone()),
            email: entity.email.clone(),
            phone: entity.phone.clone(),
            degree: entity.degree.clone(),
        }
    }

    fn to_entity(dto: &TeacherDto) -> Teacher {
        Teacher {
            id: dto.id,
            code: dto.code.clone().unwrap_or_default(),
            full_name: dto.full_name.clone().unwrap_or_default(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            degree: dto.degree.clone(),
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut Teacher, patch: &TeacherDto) {
        set_if_present(&mut entity.code, &patch.code);
        set_if_present(&mut entity.full_name, &patch.full_name);
        replace_if_present(&mut entity.email, &patch.email);
        replace_if_present(&mut entity.phone, &patch.phone);
        replace_if_present(&mut entity.degree, &patch.degree);
    }
}
