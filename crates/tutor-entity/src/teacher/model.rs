//! Teacher entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

/// Table metadata for [`Teacher`].
pub static TEACHER: EntityMeta = EntityMeta {
    name: "Teacher",
    table: "teacher",
    columns: &[
        "code",
        "full_name",
        "email",
        "phone",
        "degree",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[
        JoinDef::one_to_many("lessons", "lesson", "teacher_id"),
        JoinDef::one_to_many("answers", "answer", "teacher_id"),
    ],
};

/// A tutor who owns lessons and answers questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Unique teacher code.
    pub code: String,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Academic degree, free text.
    pub degree: Option<String>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(Teacher);

impl Teacher {
    /// Create a teacher with the required fields.
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

    /// Set the degree.
    pub fn degree(mut self, degree: impl Into<String>) -> Self {
        self.degree = Some(degree.into());
        self
    }
}

impl Entity for Teacher {
    const META: &'static EntityMeta = &TEACHER;

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
        record.insert("degree", Value::from(self.degree.clone()));
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
