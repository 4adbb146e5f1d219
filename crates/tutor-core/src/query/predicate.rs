//! Composable boolean constraints over stored rows.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::value::Value;

/// A column of the root entity, or of an association joined by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnRef {
    /// Association name from [`EntityMeta::joins`](super::EntityMeta), or
    /// `None` for the root table.
    pub join: Option<&'static str>,
    /// Column name.
    pub name: &'static str,
}

impl ColumnRef {
    /// A column of the root table.
    pub const fn root(name: &'static str) -> Self {
        Self { join: None, name }
    }

    /// A column of a joined association.
    pub const fn joined(join: &'static str, name: &'static str) -> Self {
        Self {
            join: Some(join),
            name,
        }
    }
}

/// Binary comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<>`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
}

impl CompareOp {
    /// The SQL operator token.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
        }
    }

    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => ordering == Ordering::Equal,
            Self::Ne => ordering != Ordering::Equal,
            Self::Gt => ordering == Ordering::Greater,
            Self::Gte => ordering != Ordering::Less,
            Self::Lt => ordering == Ordering::Less,
            Self::Lte => ordering != Ordering::Greater,
        }
    }
}

/// Anything that can resolve a [`ColumnRef`] to a value for one
/// (possibly joined) row.
pub trait ColumnSource {
    /// The value of `column`, or [`Value::Null`] when the column or the
    /// joined row is absent.
    fn column_value(&self, column: &ColumnRef) -> Value;
}

/// A predicate tree. Negation only occurs at the leaves, so a leaf over a
/// `NULL` column is simply false (except [`Predicate::IsNull`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every row.
    True,
    /// Matches no row.
    False,
    /// Conjunction of all children.
    And(Vec<Predicate>),
    /// `column <op> value`.
    Compare {
        /// Constrained column.
        column: ColumnRef,
        /// Operator.
        op: CompareOp,
        /// Right-hand operand.
        value: Value,
    },
    /// `column [NOT] IN (values)`.
    In {
        /// Constrained column.
        column: ColumnRef,
        /// Candidate values.
        values: Vec<Value>,
        /// `NOT IN` when set.
        negated: bool,
    },
    /// Case-insensitive substring match.
    Contains {
        /// Constrained column.
        column: ColumnRef,
        /// Substring to look for.
        needle: String,
        /// `NOT ILIKE` when set.
        negated: bool,
    },
    /// `column IS [NOT] NULL`.
    IsNull {
        /// Constrained column.
        column: ColumnRef,
        /// `IS NOT NULL` when set.
        negated: bool,
    },
}

impl Predicate {
    /// Combine predicates with logical AND, flattening nested conjunctions
    /// and dropping `True`.
    pub fn and(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
        let mut parts = Vec::new();
        for predicate in predicates {
            match predicate {
                Predicate::True => {}
                Predicate::False => return Predicate::False,
                Predicate::And(children) => parts.extend(children),
                other => parts.push(other),
            }
        }
        match parts.len() {
            0 => Predicate::True,
            1 => parts.remove(0),
            _ => Predicate::And(parts),
        }
    }

    /// Shorthand for `column = value`.
    pub fn eq(column: ColumnRef, value: impl Into<Value>) -> Predicate {
        Predicate::Compare {
            column,
            op: CompareOp::Eq,
            value: value.into(),
        }
    }

    /// Whether this predicate places no constraint at all.
    pub fn is_true(&self) -> bool {
        matches!(self, Predicate::True)
    }

    /// Collect the association names referenced by this predicate.
    pub fn collect_joins(&self, joins: &mut BTreeSet<&'static str>) {
        match self {
            Predicate::True | Predicate::False => {}
            Predicate::And(children) => {
                for child in children {
                    child.collect_joins(joins);
                }
            }
            Predicate::Compare { column, .. }
            | Predicate::In { column, .. }
            | Predicate::Contains { column, .. }
            | Predicate::IsNull { column, .. } => {
                if let Some(join) = column.join {
                    joins.insert(join);
                }
            }
        }
    }

    /// Evaluate against one row using SQL semantics.
    pub fn matches(&self, row: &dyn ColumnSource) -> bool {
        match self {
            Predicate::True => true,
            Predicate::False => false,
            Predicate::And(children) => children.iter().all(|child| child.matches(row)),
            Predicate::Compare { column, op, value } => row
                .column_value(column)
                .compare(value)
                .is_some_and(|ordering| op.accepts(ordering)),
            Predicate::In {
                column,
                values,
                negated,
            } => {
                let actual = row.column_value(column);
                if actual.is_null() {
                    return false;
                }
                let found = values
                    .iter()
                    .any(|v| actual.compare(v) == Some(Ordering::Equal));
                found != *negated
            }
            Predicate::Contains {
                column,
                needle,
                negated,
            } => match row.column_value(column) {
                Value::Text(text) => {
                    let found = text.to_lowercase().contains(&needle.to_lowercase());
                    found != *negated
                }
                _ => false,
            },
            Predicate::IsNull { column, negated } => {
                row.column_value(column).is_null() != *negated
            }
        }
    }
}
