//! Backend-neutral query model.
//!
//! A criteria value is compiled into a [`Specification`]: a distinct flag
//! plus a [`Predicate`] tree over [`ColumnRef`]s. Every persistence
//! back-end executes the same specification for list, page, and count
//! queries, so the three always agree for a given criteria value.

pub mod meta;
pub mod predicate;
pub mod specification;
pub mod value;

pub use meta::{EntityMeta, JoinDef, JoinKind};
pub use predicate::{ColumnRef, ColumnSource, CompareOp, Predicate};
pub use specification::{FilterPredicate, Specification, SpecificationBuilder};
pub use value::{Record, Value};
