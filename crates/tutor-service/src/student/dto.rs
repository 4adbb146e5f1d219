//! Student DTO and mapper.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use tutor_entity::{Gender, Student};

use crate::mapper::{EntityMapper, replace_if_present, set_if_present};

/// Transport shape of a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    /// Surrogate id; absent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Unique student code.
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
    /// Date of birth.
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    /// Gender.
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Maps [`Student`] to and from [`StudentDto`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StudentMapper;

impl EntityMapper for StudentMapper {
    type Entity = Student;
    type Dto = StudentDto;

    fn dto_id(dto: &StudentDto) -> Option<i64> {
        dto.id
    }

    fn to_dto(entity: &Student) -> StudentDto {
        StudentDto {
            id: entity.id,
            code: Some(entity.code.clone()),
            full_name: Some(entity.full_name.clone()),
            email: entity.email.clone(),
            phone: entity.phone.clone(),
            birthday: entity.birthday,
            gender: entity.gender,
        }
    }

    fn to_entity(dto: &StudentDto) -> Student {
        Student {
            id: dto.id,
            code: dto.code.clone().unwrap_or_default(),
            full_name: dto.full_name.clone().unwrap_or_default(),
            email: dto.email.clone(),
            phone: dto.phone.clone(),
            birthday: dto.birthday,
            gender: dto.gender,
            audit: Default::default(),
        }
    }

    fn merge_partial(entity: &mut Student, patch: &StudentDto) {
        set_if_present(&mut entity.code, &patch.code);
        set_if_present(&mut entity.full_name, &patch.full_name);
        replace_if_present(&mut entity.email, &patch.email);
        replace_if_present(&mut entity.phone, &patch.phone);
        replace_if_present(&mut entity.birthday, &patch.birthday);
        replace_if_present(&mut entity.gender, &patch.gender);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_json_uses_camel_case() {
        let dto: StudentDto = serde_json::from_str(
            r#"{"code":"S1","fullName":"An Nguyen","gender":"FEMALE"}"#,
        )
        .expect("valid json");
        assert_eq!(dto.full_name.as_deref(), Some("An Nguyen"));
        assert_eq!(dto.gender, Some(Gender::Female));
        assert!(validate(&dto).is_ok());

        let json = serde_json::to_value(&dto).expect("serializable");
        assert!(json.get("fullName").is_some());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let dto = StudentDto {
            code: Some("S1".to_string()),
            full_name: Some("An".to_string()),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        let err = validate(&dto).expect_err("bad email");
        assert!(err.message.contains("email"));
    }

    #[test]
    fn test_to_entity_round_trips_required_fields() {
        let dto = StudentDto {
            id: Some(4),
            code: Some("S4".to_string()),
            full_name: Some("Binh".to_string()),
            ..Default::default()
        };
        let entity = StudentMapper::to_entity(&dto);
        assert_eq!(entity.id, Some(4));
        assert_eq!(entity.code, "S4");
        assert_eq!(StudentMapper::to_dto(&entity), dto);
    }
}
