//! The persisted-entity contract used by the generic query machinery.

use std::fmt::Debug;

use crate::query::{EntityMeta, Record};
use crate::types::audit::Audit;

/// A persisted entity with a surrogate `BIGINT` id and audit columns.
///
/// The id is `None` until the first insert assigns one; after that it never
/// changes.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// Table metadata: columns and associations.
    const META: &'static EntityMeta;

    /// The surrogate id, once assigned.
    fn id(&self) -> Option<i64>;

    /// Assign the surrogate id. Called by repositories on insert.
    fn set_id(&mut self, id: i64);

    /// Every column in [`EntityMeta::columns`] with its current value.
    fn to_record(&self) -> Record;

    /// Audit columns.
    fn audit(&self) -> &Audit;

    /// Mutable audit columns.
    fn audit_mut(&mut self) -> &mut Audit;
}

/// Identity equality: equal only when both ids are assigned and match.
pub fn same_identity<E: Entity>(a: &E, b: &E) -> bool {
    matches!((a.id(), b.id()), (Some(x), Some(y)) if x == y)
}
