//! Criteria: per-entity optional filters compiled into a specification.

use std::fmt::Debug;

use tutor_core::error::AppError;
use tutor_core::query::Specification;
use tutor_core::result::AppResult;
use tutor_core::traits::Entity;
use tutor_core::types::ParseFilter;

/// A search request over one entity.
///
/// Every field is optional and absent fields add no constraint. `distinct`
/// toggles deduplication only.
pub trait Criteria: Debug + Default + Send + Sync + 'static {
    /// Searched entity.
    type Entity: Entity;

    /// Compile into a specification.
    fn specification(&self) -> Specification<Self::Entity>;

    /// Set the deduplication flag.
    fn set_distinct(&mut self, distinct: bool);

    /// Apply one `field.operation=value` constraint.
    fn apply(&mut self, field: &str, operation: &str, raw: &str) -> AppResult<()>;

    /// Build from query pairs such as `score.greaterThanOrEqual=3` and
    /// `distinct=true`.
    fn from_pairs<'a, I>(pairs: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Self::default();
        for (key, raw) in pairs {
            if key == "distinct" {
                let distinct = raw.parse::<bool>().map_err(|_| {
                    AppError::validation(format!("Invalid value '{raw}' for distinct"))
                })?;
                criteria.set_distinct(distinct);
                continue;
            }
            let (field, operation) = key.rsplit_once('.').ok_or_else(|| {
                AppError::validation(format!(
                    "Criteria parameter '{key}' must have the form field.operation"
                ))
            })?;
            criteria.apply(field, operation, raw)?;
        }
        Ok(criteria)
    }
}

/// Apply `operation` to the filter in `slot`, creating it if needed.
pub(crate) fn apply_to<F: ParseFilter>(
    slot: &mut Option<F>,
    operation: &str,
    raw: &str,
) -> AppResult<()> {
    slot.get_or_insert_with(F::default).apply(operation, raw)
}

/// Error for a criteria field the entity does not have.
pub(crate) fn unknown_field<E: Entity>(field: &str) -> AppError {
    AppError::validation(format!(
        "Unknown criteria field '{field}' for {}",
        E::META.name
    ))
}
