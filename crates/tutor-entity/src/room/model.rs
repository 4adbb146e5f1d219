//! Room entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutor_core::query::{EntityMeta, JoinDef, Record, Value};
use tutor_core::traits::Entity;
use tutor_core::types::Audit;

/// Table metadata for [`Room`].
pub static ROOM: EntityMeta = EntityMeta {
    name: "Room",
    table: "room",
    columns: &[
        "code",
        "name",
        "capacity",
        "location",
        "created_by",
        "created_date",
        "last_modified_by",
        "last_modified_date",
    ],
    joins: &[JoinDef::one_to_many("schedules", "schedule", "room_id")],
};

/// A physical or virtual room where lessons take place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Surrogate id, assigned on insert.
    pub id: Option<i64>,
    /// Unique room code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Seat count.
    pub capacity: Option<i32>,
    /// Building or meeting link.
    pub location: Option<String>,
    /// Audit columns.
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: Audit,
}

entity_identity!(Room);

impl Room {
    /// Create a room with the required fields.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the seat count.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl Entity for Room {
    const META: &'static EntityMeta = &ROOM;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("code", Value::from(self.code.clone()));
        record.insert("name", Value::from(self.name.clone()));
        record.insert("capacity", Value::from(self.capacity));
        record.insert("location", Value::from(self.location.clone()));
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
