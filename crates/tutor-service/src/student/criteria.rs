//! Student search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{Filter, LocalDateFilter, LongFilter, StringFilter};
use tutor_entity::{Gender, Student};

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`Student`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCriteria {
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
    /// Filter on `birthday`.
    pub birthday: Option<LocalDateFilter>,
    /// Filter on `gender`.
    pub gender: Option<Filter<Gender>>,
    /// Filter on the ids of linked ratings.
    pub ratings_id: Option<LongFilter>,
    /// Filter on the ids of linked schedules.
    pub schedules_id: Option<LongFilter>,
    /// Filter on the ids of linked questions.
    pub questions_id: Option<LongFilter>,
    /// Filter on the ids of linked likes.
    pub likes_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for StudentCriteria {
    type Entity = Student;

    fn specification(&self) -> Specification<Student> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("code", self.code.as_ref())
            .filter("full_name", self.full_name.as_ref())
            .filter("email", self.email.as_ref())
            .filter("phone", self.phone.as_ref())
            .filter("birthday", self.birthday.as_ref())
            .filter("gender", self.gender.as_ref())
            .join_filter("ratings", self.ratings_id.as_ref())
            .join_filter("schedules", self.schedules_id.as_ref())
            .join_filter("questions", self.questions_id.as_ref())
            .join_filter("likes", self.likes_id.as_ref())
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
            "birthday" => apply_to(&mut self.birthday, operation, raw),
            "gender" => apply_to(&mut self.gender, operation, raw),
            "ratingsId" => apply_to(&mut self.ratings_id, operation, raw),
            "schedulesId" => apply_to(&mut self.schedules_id, operation, raw),
            "questionsId" => apply_to(&mut self.questions_id, operation, raw),
            "likesId" => apply_to(&mut self.likes_id, operation, raw),
            _ => Err(unknown_field::<Student>(field)),
        }
    }
}
