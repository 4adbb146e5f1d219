//! Resolution of requested sort orders against entity metadata.

use tutor_core::query::EntityMeta;
use tutor_core::result::AppResult;
use tutor_core::types::{SortDirection, SortField};

/// One resolved `ORDER BY` term over a root column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTerm {
    /// Root column.
    pub column: &'static str,
    /// Direction.
    pub direction: SortDirection,
}

/// Validate `sort` against `meta` and append the primary key as the final
/// tie-breaker so page boundaries are stable.
///
/// Repeated columns keep their first direction. Unknown columns are a
/// validation error.
pub fn resolve_order(meta: &EntityMeta, sort: &[SortField]) -> AppResult<Vec<OrderTerm>> {
    let mut terms: Vec<OrderTerm> = Vec::with_capacity(sort.len() + 1);
    for field in sort {
        let column = meta.sort_column(field)?;
        if terms.iter().any(|t| t.column == column) {
            continue;
        }
        terms.push(OrderTerm {
            column,
            direction: field.direction,
        });
    }
    if !terms.iter().any(|t| t.column == EntityMeta::ID) {
        terms.push(OrderTerm {
            column: EntityMeta::ID,
            direction: SortDirection::Asc,
        });
    }
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_entity::rating::model::RATING;

    #[test]
    fn test_id_appended_as_tie_breaker() {
        let terms = resolve_order(&RATING, &[SortField::desc("score")]).expect("valid");
        assert_eq!(
            terms,
            vec![
                OrderTerm {
                    column: "score",
                    direction: SortDirection::Desc
                },
                OrderTerm {
                    column: "id",
                    direction: SortDirection::Asc
                },
            ]
        );
    }

    #[test]
    fn test_explicit_id_not_duplicated() {
        let terms = resolve_order(&RATING, &[SortField::desc("id")]).expect("valid");
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].direction, SortDirection::Desc);
    }

    #[test]
    fn test_unknown_column_rejected() {
        let err = resolve_order(&RATING, &[SortField::asc("nope")]).expect_err("invalid");
        assert!(err.is_validation());
    }
}
