//! Student entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

use super::gender::Gender;

/// Table metadata for [`Student`].
pub static STUDENT: EntityMeta = EntityMeta {
    name: "Student",
    table: "student",
    columns: &[
        "code",
        "full_name",
        "email",
        "phone",
        "birthday",
        "gender",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[
        JoinDef::one_to_many("ratings", "rating", "student_id"),
        JoinDef::one_to_many("schedules", "schedule", "student_id"),
        JoinDef::one_to_many("questions", "question", "student_id"),
        JoinDef::one_to_many("likes", "likes", "student_id"),
    ],
};

/// A learner who books lessons, rates them, and asks questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Unique student code.
    pub code: String,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Date of birth.
    pub birthday: Option<NaiveDate>,
    /// Gender.
    pub gender: Option<Gender>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(Student);

impl Student {
    /// Create a student with the required fields.
    pub fn new(code: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    /// Set the contact email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the contact phone.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the date of birth.
    pub fn birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Set the gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

impl Entity for Student {
    const META: &'static EntityMeta = &STUDENT;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("code", Value::from(self.code.clone()));
        record.insert("full_name", Value::from(self.full_name.clone()));
        record.insert("email", Value::from(self.email.clone()));
        record.insert("phone", Value::from(self.phone.clone()));
        record.insert("birthday", Value::from(self.birthday));
        record.insert("gender", Value::from(self.gender));
        self.audit.write_to(&mut record);
        record
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_covers_every_column() {
        let student = Student::new("S1", "Ann").gender(Gender::Female);
        let record = student.to_record();
        for column in STUDENT.columns {
            assert!(record.contains_key(column), "missing {column}");
        }
        assert_eq!(record.len(), STUDENT.columns.len());
        assert_eq!(record["gender"], Value::Text("FEMALE".to_string()));
        assert_eq!(record["email"], Value::Null);
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = Student::new("S1", "Ann").with_id(1);
        let b = Student::new("S2", "Bob").with_id(1);
        assert_eq!(a, b);
        assert_ne!(Student::new("S1", "Ann"), Student::new("S1", "Ann"));
    }
}
