//! Per-field filter types used by criteria objects.
//!
//! Each filter holds optional constraints that are ANDed together when
//! present. A filter with no constraint set is equivalent to no filter.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::query::{ColumnRef, CompareOp, FilterPredicate, Predicate, Value};

/// Equality, presence, and set-membership constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Filter<T> {
    /// `column = equals`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals: Option<T>,
    /// `column <> not_equals`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_equals: Option<T>,
    /// `column IS NOT NULL` when true, `IS NULL` when false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specified: Option<bool>,
    /// `column IN (..)`
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub in_list: Option<Vec<T>>,
    /// `column NOT IN (..)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_in: Option<Vec<T>>,
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self {
            equals: None,
            not_equals: None,
            specified: None,
            in_list: None,
            not_in: None,
        }
    }
}

impl<T> Filter<T> {
    /// A filter matching `value` exactly.
    pub fn equal_to(value: T) -> Self {
        Self {
            equals: Some(value),
            ..Self::default()
        }
    }

    /// A filter matching any of `values`.
    pub fn one_of(values: Vec<T>) -> Self {
        Self {
            in_list: Some(values),
            ..Self::default()
        }
    }

    /// A presence filter.
    pub fn is_specified(specified: bool) -> Self {
        Self {
            specified: Some(specified),
            ..Self::default()
        }
    }

    /// Whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.equals.is_none()
            && self.not_equals.is_none()
            && self.specified.is_none()
            && self.in_list.is_none()
            && self.not_in.is_none()
    }
}

impl<T: Clone + Into<Value>> Filter<T> {
    fn predicates(&self, column: ColumnRef, out: &mut Vec<Predicate>) {
        if let Some(v) = &self.equals {
            out.push(compare(column, CompareOp::Eq, v));
        }
        if let Some(v) = &self.not_equals {
            out.push(compare(column, CompareOp::Ne, v));
        }
        if let Some(specified) = self.specified {
            out.push(Predicate::IsNull {
                column,
                negated: specified,
            });
        }
        if let Some(values) = &self.in_list {
            out.push(if values.is_empty() {
                Predicate::False
            } else {
                Predicate::In {
                    column,
                    values: values.iter().cloned().map(Into::into).collect(),
                    negated: false,
                }
            });
        }
        if let Some(values) = self.not_in.as_ref().filter(|v| !v.is_empty()) {
            out.push(Predicate::In {
                column,
                values: values.iter().cloned().map(Into::into).collect(),
                negated: true,
            });
        }
    }
}

impl<T: Clone + Into<Value>> FilterPredicate for Filter<T> {
    fn to_predicate(&self, column: ColumnRef) -> Predicate {
        let mut parts = Vec::new();
        self.predicates(column, &mut parts);
        Predicate::and(parts)
    }
}

/// [`Filter`] plus ordering constraints for comparable values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct RangeFilter<T> {
    /// Equality, presence, and membership constraints.
    #[serde(flatten)]
    pub base: Filter<T>,
    /// `column > greater_than`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<T>,
    /// `column >= greater_than_or_equal`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than_or_equal: Option<T>,
    /// `column < less_than`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than: Option<T>,
    /// `column <= less_than_or_equal`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than_or_equal: Option<T>,
}

impl<T> Default for RangeFilter<T> {
    fn default() -> Self {
        Self {
            base: Filter::default(),
            greater_than: None,
            greater_than_or_equal: None,
            less_than: None,
            less_than_or_equal: None,
        }
    }
}

impl<T> RangeFilter<T> {
    /// Inclusive range; either bound may be open.
    pub fn between(from: Option<T>, to: Option<T>) -> Self {
        Self {
            greater_than_or_equal: from,
            less_than_or_equal: to,
            ..Self::default()
        }
    }

    /// A filter matching `value` exactly.
    pub fn equal_to(value: T) -> Self {
        Self {
            base: Filter::equal_to(value),
            ..Self::default()
        }
    }

    /// A filter matching any of `values`.
    pub fn one_of(values: Vec<T>) -> Self {
        Self {
            base: Filter::one_of(values),
            ..Self::default()
        }
    }

    /// A presence filter.
    pub fn is_specified(specified: bool) -> Self {
        Self {
            base: Filter::is_specified(specified),
            ..Self::default()
        }
    }

    /// Whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
            && self.greater_than.is_none()
            && self.greater_than_or_equal.is_none()
            && self.less_than.is_none()
            && self.less_than_or_equal.is_none()
    }
}

impl<T: Clone + Into<Value>> FilterPredicate for RangeFilter<T> {
    fn to_predicate(&self, column: ColumnRef) -> Predicate {
        let mut parts = Vec::new();
        self.base.predicates(column, &mut parts);
        let bounds = [
            (CompareOp::Gt, &self.greater_than),
            (CompareOp::Gte, &self.greater_than_or_equal),
            (CompareOp::Lt, &self.less_than),
            (CompareOp::Lte, &self.less_than_or_equal),
        ];
        for (op, bound) in bounds {
            if let Some(v) = bound {
                parts.push(compare(column, op, v));
            }
        }
        Predicate::and(parts)
    }
}

/// [`Filter`] plus case-insensitive substring constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringFilter {
    /// Equality, presence, and membership constraints.
    #[serde(flatten)]
    pub base: Filter<String>,
    /// Column contains this substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains: Option<String>,
    /// Column does not contain this substring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub does_not_contain: Option<String>,
}

impl StringFilter {
    /// A filter matching `value` exactly.
    pub fn equal_to(value: impl Into<String>) -> Self {
        Self {
            base: Filter::equal_to(value.into()),
            ..Self::default()
        }
    }

    /// A filter matching values containing `needle`.
    pub fn containing(needle: impl Into<String>) -> Self {
        Self {
            contains: Some(needle.into()),
            ..Self::default()
        }
    }

    /// Whether no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.contains.is_none() && self.does_not_contain.is_none()
    }
}

impl FilterPredicate for StringFilter {
    fn to_predicate(&self, column: ColumnRef) -> Predicate {
        let mut parts = Vec::new();
        self.base.predicates(column, &mut parts);
        if let Some(needle) = &self.contains {
            parts.push(Predicate::Contains {
                column,
                needle: needle.clone(),
                negated: false,
            });
        }
        if let Some(needle) = &self.does_not_contain {
            parts.push(Predicate::Contains {
                column,
                needle: needle.clone(),
                negated: true,
            });
        }
        Predicate::and(parts)
    }
}

/// Filter over `BIGINT` columns and association ids.
pub type LongFilter = RangeFilter<i64>;
/// Filter over `INTEGER` columns.
pub type IntegerFilter = RangeFilter<i32>;
/// Filter over `TIMESTAMPTZ` columns.
pub type InstantFilter = RangeFilter<DateTime<Utc>>;
/// Filter over `DATE` columns.
pub type LocalDateFilter = RangeFilter<NaiveDate>;
/// Filter over `BOOLEAN` columns.
pub type BooleanFilter = Filter<bool>;

fn compare<T: Clone + Into<Value>>(column: ColumnRef, op: CompareOp, value: &T) -> Predicate {
    Predicate::Compare {
        column,
        op,
        value: value.clone().into(),
    }
}

/// Populate a filter from `field.operation=value` query parameters.
pub trait ParseFilter: Default {
    /// Apply one operation. Lists (`in`, `notIn`) are comma-separated.
    fn apply(&mut self, operation: &str, raw: &str) -> Result<(), AppError>;
}

fn parse_one<T>(operation: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::validation(format!("Invalid value '{raw}' for '{operation}': {e}")))
}

fn parse_list<T>(operation: &str, raw: &str) -> Result<Vec<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| parse_one(operation, part))
        .collect()
}

impl<T> ParseFilter for Filter<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn apply(&mut self, operation: &str, raw: &str) -> Result<(), AppError> {
        match operation {
            "equals" => self.equals = Some(parse_one(operation, raw)?),
            "notEquals" => self.not_equals = Some(parse_one(operation, raw)?),
            "specified" => self.specified = Some(parse_one(operation, raw)?),
            "in" => self.in_list = Some(parse_list(operation, raw)?),
            "notIn" => self.not_in = Some(parse_list(operation, raw)?),
            other => {
                return Err(AppError::validation(format!(
                    "Unsupported filter operation '{other}'"
                )));
            }
        }
        Ok(())
    }
}

impl<T> ParseFilter for RangeFilter<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn apply(&mut self, operation: &str, raw: &str) -> Result<(), AppError> {
        match operation {
            "greaterThan" => self.greater_than = Some(parse_one(operation, raw)?),
            "greaterThanOrEqual" => self.greater_than_or_equal = Some(parse_one(operation, raw)?),
            "lessThan" => self.less_than = Some(parse_one(operation, raw)?),
            "lessThanOrEqual" => self.less_than_or_equal = Some(parse_one(operation, raw)?),
            _ => self.base.apply(operation, raw)?,
        }
        Ok(())
    }
}

impl ParseFilter for StringFilter {
    fn apply(&mut self, operation: &str, raw: &str) -> Result<(), AppError> {
        match operation {
            "contains" => self.contains = Some(raw.to_string()),
            "doesNotContain" => self.does_not_contain = Some(raw.to_string()),
            _ => self.base.apply(operation, raw)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCORE: ColumnRef = ColumnRef::root("score");

    #[test]
    fn test_empty_filters_compile_to_true() {
        assert!(Filter::<i32>::default().to_predicate(SCORE).is_true());
        assert!(IntegerFilter::default().to_predicate(SCORE).is_true());
        assert!(StringFilter::default().to_predicate(SCORE).is_true());
        assert!(IntegerFilter::default().is_empty());
    }

    #[test]
    fn test_between_compiles_inclusive_bounds() {
        let predicate = IntegerFilter::between(Some(3), Some(5)).to_predicate(SCORE);
        assert_eq!(
            predicate,
            Predicate::And(vec![
                Predicate::Compare {
                    column: SCORE,
                    op: CompareOp::Gte,
                    value: Value::Int(3),
                },
                Predicate::Compare {
                    column: SCORE,
                    op: CompareOp::Lte,
                    value: Value::Int(5),
                },
            ])
        );
    }

    #[test]
    fn test_open_ended_range() {
        let predicate = IntegerFilter::between(None, Some(2)).to_predicate(SCORE);
        assert_eq!(
            predicate,
            Predicate::Compare {
                column: SCORE,
                op: CompareOp::Lte,
                value: Value::Int(2),
            }
        );
    }

    #[test]
    fn test_empty_in_list_matches_nothing() {
        let predicate = LongFilter::one_of(vec![]).to_predicate(SCORE);
        assert_eq!(predicate, Predicate::False);

        let mut not_in = LongFilter::default();
        not_in.base.not_in = Some(vec![]);
        assert!(not_in.to_predicate(SCORE).is_true());
    }

    #[test]
    fn test_specified_false_is_null_check() {
        let predicate = Filter::<bool>::is_specified(false).to_predicate(SCORE);
        assert_eq!(
            predicate,
            Predicate::IsNull {
                column: SCORE,
                negated: false,
            }
        );
    }

    #[test]
    fn test_parse_range_filter_operations() {
        let mut filter = IntegerFilter::default();
        filter.apply("greaterThanOrEqual", "3").expect("valid");
        filter.apply("lessThanOrEqual", "5").expect("valid");
        filter.apply("in", "3, 4,5").expect("valid");
        assert_eq!(filter.greater_than_or_equal, Some(3));
        assert_eq!(filter.less_than_or_equal, Some(5));
        assert_eq!(filter.base.in_list, Some(vec![3, 4, 5]));
    }

    #[test]
    fn test_parse_rejects_bad_values_and_operations() {
        let mut filter = IntegerFilter::default();
        assert!(filter.apply("equals", "three").is_err());
        assert!(filter.apply("contains", "3").is_err());

        let mut text = StringFilter::default();
        assert!(text.apply("greaterThan", "a").is_err());
        text.apply("contains", "alg").expect("valid");
        assert_eq!(text.contains.as_deref(), Some("alg"));
    }

    #[test]
    fn test_json_shape() {
        let filter: IntegerFilter =
            serde_json::from_str(r#"{"greaterThanOrEqual":3,"in":[3,4]}"#).expect("valid json");
        assert_eq!(filter.greater_than_or_equal, Some(3));
        assert_eq!(filter.base.in_list, Some(vec![3, 4]));
    }
}
