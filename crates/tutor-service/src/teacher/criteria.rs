//! Teacher search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{LongFilter, StringFilter};
use tutor_entity::Teacher;

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`Teacher`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherCriteria {
    /// Filter on the id.
    pub id: Option<LongFilter>,
    /// Filter on `code`.
    pub code: Option<StringFilter>,
    /// Filter on `full_name`.
    pub full_name: Option<StringFilter>,
    /// Filter on `email`.
    pub email: Option<StringFilter>,
    /// Filter on `phone`.
    pub phone: Option<StringFilter>,
    /// Filter on `degree`.
    pub degree: Option<StringFilter>,
    /// Filter on the ids of linked lessons.
    pub lessons_id: Option<LongFilter>,
    /// Filter on the ids of linked answers.
    pub answers_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for TeacherCriteria {
    type Entity = Teacher;

    fn specification(&self) -> Specification<Teacher> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("code", self.code.as_ref())
            .filter("full_name", self.full_name.as_ref())
            .filter("email", self.email.as_ref())
            .filter("phone", self.phone.as_ref())
            .filter("degree", self.degree.as_ref())
            .join_filter("lessons", self.lessons_id.as_ref())
            .join_filter("answers", self.answers_id.as_ref())
            .build()
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }

    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()> {
        match field {
            "id" => apply_to(&mut self.id, operation, raw),
            "code" => apply_to(&mut self.code, operation, raw),
            "fullName" => apply_to(&mut self.full_name, operation, raw),
            "email" => apply_to(&mut self.email, operation, raw),
            "phone" => apply_to(&mut self.phone, operation, raw),
            "degree" => apply_to(&mut self.degree, operation, raw),
            "lessonsId" => apply_to(&mut self.lessons_id, operation, raw),
            "answersId" => apply_to(&mut self.answers_id, operation, raw),
            _ => Err(unknown_field::<Teacher>(field)),
        }
    }
}
