//! Specifications: the compiled form of a criteria value.

use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;

use super::predicate::{ColumnRef, Predicate};
use crate::traits::entity::Entity;

/// A filter that knows how to constrain one column.
///
/// Implementations return [`Predicate::True`] when no inner field is set,
/// so an empty filter behaves exactly like an absent one.
pub trait FilterPredicate {
    /// Build the predicate constraining `column`.
    fn to_predicate(&self, column: ColumnRef) -> Predicate;
}

/// A composed predicate plus the result-set deduplication flag, bound to
/// the entity it was compiled for.
pub struct Specification<E> {
    distinct: bool,
    predicate: Predicate,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Specification<E> {
    /// The unconstrained specification (matches every row).
    pub fn all() -> Self {
        Self::from_predicate(Predicate::True)
    }

    /// Wrap an already composed predicate.
    pub fn from_predicate(predicate: Predicate) -> Self {
        Self {
            distinct: false,
            predicate,
            _entity: PhantomData,
        }
    }

    /// Start compiling a criteria value.
    pub fn builder() -> SpecificationBuilder<E> {
        SpecificationBuilder::new()
    }

    /// Whether duplicate root rows produced by joins are collapsed.
    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// The composed row predicate.
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    /// Associations that must be joined to evaluate the predicate.
    pub fn joins(&self) -> BTreeSet<&'static str> {
        let mut joins = BTreeSet::new();
        self.predicate.collect_joins(&mut joins);
        joins
    }
}

impl<E> Clone for Specification<E> {
    fn clone(&self) -> Self {
        Self {
            distinct: self.distinct,
            predicate: self.predicate.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for Specification<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Specification")
            .field("distinct", &self.distinct)
            .field("predicate", &self.predicate)
            .finish()
    }
}

/// Generic criteria compiler parameterized by the entity's metadata.
///
/// Per-entity criteria types call [`distinct`](Self::distinct) once, then
/// one [`filter`](Self::filter) per scalar field and one
/// [`join_filter`](Self::join_filter) per association id.
pub struct SpecificationBuilder<E> {
    distinct: bool,
    predicates: Vec<Predicate>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> SpecificationBuilder<E> {
    /// An empty builder.
    pub fn new() -> Self {
        Self {
            distinct: false,
            predicates: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// Set the deduplication flag. Independent of every row predicate.
    pub fn distinct(mut self, distinct: Option<bool>) -> Self {
        self.distinct = distinct.unwrap_or(false);
        self
    }

    /// Constrain a root column when `filter` is present.
    pub fn filter<F: FilterPredicate>(mut self, column: &'static str, filter: Option<&F>) -> Self {
        debug_assert!(
            E::META.has_column(column),
            "{} has no column {column}",
            E::META.name
        );
        if let Some(filter) = filter {
            self.predicates.push(filter.to_predicate(ColumnRef::root(column)));
        }
        self
    }

    /// Constrain the id of an association reached through a LEFT JOIN when
    /// `filter` is present.
    pub fn join_filter<F: FilterPredicate>(mut self, join: &'static str, filter: Option<&F>) -> Self {
        debug_assert!(
            E::META.join(join).is_some(),
            "{} has no association {join}",
            E::META.name
        );
        if let Some(filter) = filter {
            self.predicates
                .push(filter.to_predicate(ColumnRef::joined(join, "id")));
        }
        self
    }

    /// Add an arbitrary predicate.
    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Finish compiling.
    pub fn build(self) -> Specification<E> {
        Specification {
            distinct: self.distinct,
            predicate: Predicate::and(self.predicates),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Default for SpecificationBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{CompareOp, EntityMeta, JoinDef, Record, Value};
    use crate::types::audit::Audit;
    use crate::types::filter::{IntegerFilter, LongFilter, StringFilter};

    #[derive(Debug, Clone, Default)]
    struct Rating {
        id: Option<i64>,
        audit: Audit,
    }

    static RATING: EntityMeta = EntityMeta {
        name: "Rating",
        table: "rating",
        columns: &["score", "comment", "student_id"],
        joins: &[
            JoinDef::many_to_one("student", "student", "student_id"),
            JoinDef::one_to_many("questions", "question", "rating_id"),
        ],
    };

    impl Entity for Rating {
        const META: &'static EntityMeta = &RATING;

        fn id(&self) -> Option<i64> {
            self.id
        }

        fn set_id(&mut self, id: i64) {
            self.id = Some(id);
        }

        fn to_record(&self) -> Record {
            Record::new()
        }

        fn audit(&self) -> &Audit {
            &self.audit
        }

        fn audit_mut(&mut self) -> &mut Audit {
            &mut self.audit
        }
    }

    #[test]
    fn test_absent_filters_produce_unconstrained_spec() {
        let spec = Specification::<Rating>::builder()
            .distinct(None)
            .filter::<IntegerFilter>("score", None)
            .filter("comment", Some(&StringFilter::default()))
            .join_filter::<LongFilter>("student", None)
            .build();

        assert!(!spec.is_distinct());
        assert!(spec.predicate().is_true());
        assert!(spec.joins().is_empty());
    }

    #[test]
    fn test_join_filter_targets_joined_id() {
        let spec = Specification::<Rating>::builder()
            .join_filter("student", Some(&LongFilter::equal_to(7)))
            .build();

        assert_eq!(
            spec.predicate(),
            &Predicate::Compare {
                column: ColumnRef::joined("student", "id"),
                op: CompareOp::Eq,
                value: Value::Long(7),
            }
        );
        assert_eq!(spec.joins().into_iter().collect::<Vec<_>>(), vec!["student"]);
    }

    #[test]
    fn test_distinct_is_independent_of_predicate() {
        let spec = Specification::<Rating>::builder()
            .distinct(Some(true))
            .build();
        assert!(spec.is_distinct());
        assert!(spec.predicate().is_true());
    }
}
