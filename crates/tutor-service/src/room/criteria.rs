//! Room search criteria.

use serde::{Deserialize, Serialize};

use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::types::{IntegerFilter, LongFilter, StringFilter};
use tutor_entity::Room;

use crate::criteria::{Criteria, apply_to, unknown_field};

/// Optional filters over [`Room`] fields and associations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCriteria {
    pub id: Option<LongFilter>,
    pub code: Option<StringFilter>,
    pub name: Option<StringFilter>,
    pub capacity: Option<IntegerFilter>,
    pub location: Option<StringFilter>,
    pub schedules_id: Option<LongFilter>,
    /// Collapse duplicate rows produced by joins.
    pub distinct: Option<bool>,
}

impl Criteria for RoomCriteria {
    type Entity = Room;

    fn specification(&self) -> Specification<Room> {
        Specification::builder()
            .distinct(self.distinct)
            .filter("id", self.id.as_ref())
            .filter("code", self.code.as_ref())
            .filter("name", self.name.as_ref())
            .filter("capacity", self.capacity.as_ref())
            .filter("location", self.location.as_ref())
            .join_filter("schedules", self.schedules_id.as_ref())
            .build()
    }

    fn set_distinct(&mut self, distinct: bool) {
        self.distinct = Some(distinct);
    }

    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()> {
        match field {
            "id" => apply_to(&mut self.id, operation, raw),
            "code" => apply_to(&mut self.code, operation, raw),
            "name" => apply_to(&mut self.name, operation, raw),
            "capacity" => apply_to(&mut self.capacity, operation, raw),
            "location" => apply_to(&mut self.location, operation, raw),
            "schedulesId" => apply_to(&mut self.schedules_id, operation, raw),
            _ => Err(unknown_field::<Room>(field)),
        }
    }
}
