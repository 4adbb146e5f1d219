//! Core type definitions used across the workspace.

pub mod audit;
pub mod filter;
pub mod pagination;
pub mod sorting;

pub use audit::Audit;
pub use filter::{
    BooleanFilter, Filter, InstantFilter, IntegerFilter, LocalDateFilter, LongFilter, ParseFilter,
    RangeFilter, StringFilter,
};
pub use pagination::{PageRequest, PageResponse};
pub use sorting::{SortDirection, SortField};
