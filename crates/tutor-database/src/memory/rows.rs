//! Join expansion, predicate evaluation, and ordering over stored rows.

use std::cmp::Ordering;

use tutor_core::error::AppError;
use tutor_core::query::{
    ColumnRef, ColumnSource, EntityMeta, JoinDef, JoinKind, Record, Specification, Value,
};
use tutor_core::result::AppResult;
use tutor_core::traits::Entity;
use tutor_core::types::SortDirection;

use super::database::{Table, Tables};
use crate::order::OrderTerm;

type JoinedTarget<'a> = Option<(i64, &'a Record)>;

/// One row of `root LEFT JOIN …`: the root row plus, per joined
/// association, the matched row or `None` for the null-extended side.
#[derive(Clone)]
struct JoinedRow<'a> {
    root_id: i64,
    root: &'a Record,
    joined: Vec<(&'static str, JoinedTarget<'a>)>,
}

impl ColumnSource for JoinedRow<'_> {
    fn column_value(&self, column: &ColumnRef) -> Value {
        match column.join {
            None => column_of(self.root_id, self.root, column.name),
            Some(join) => self
                .joined
                .iter()
                .find(|(name, _)| *name == join)
                .and_then(|(_, target)| *target)
                .map(|(id, record)| column_of(id, record, column.name))
                .unwrap_or(Value::Null),
        }
    }
}

fn column_of(id: i64, record: &Record, name: &str) -> Value {
    if name == EntityMeta::ID {
        Value::Long(id)
    } else {
        record.get(name).cloned().unwrap_or(Value::Null)
    }
}

/// Rows of `join.table` joined to one root row.
fn join_targets<'a>(
    tables: &'a Tables,
    join: &JoinDef,
    root_id: i64,
    root: &Record,
) -> Vec<JoinedTarget<'a>> {
    let Some(table) = tables.table(join.table) else {
        return vec![None];
    };
    match join.kind {
        JoinKind::ManyToOne { foreign_key } => {
            let target = root
                .get(foreign_key)
                .and_then(Value::as_i64)
                .and_then(|fk| table.rows.get(&fk).map(|row| (fk, &row.record)));
            vec![target]
        }
        JoinKind::OneToMany { mapped_by } => {
            let children: Vec<_> = table
                .rows
                .iter()
                .filter(|(_, row)| row.record.get(mapped_by).and_then(Value::as_i64) == Some(root_id))
                .map(|(id, row)| Some((*id, &row.record)))
                .collect();
            if children.is_empty() {
                vec![None]
            } else {
                children
            }
        }
    }
}

/// Root ids produced by `SELECT [DISTINCT] t.* FROM root t LEFT JOIN …
/// WHERE predicate`, in id order.
///
/// Without `distinct`, a root row appears once per matching joined row.
pub(crate) fn matching_ids<E: Entity>(
    tables: &Tables,
    spec: &Specification<E>,
) -> AppResult<Vec<i64>> {
    let meta = E::META;
    let Some(root) = tables.table(meta.table) else {
        return Ok(Vec::new());
    };
    let joins = spec
        .joins()
        .into_iter()
        .map(|name| {
            meta.join(name).ok_or_else(|| {
                AppError::internal(format!("{} has no association {name}", meta.name))
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let mut ids = Vec::new();
    for (&id, row) in &root.rows {
        let mut expanded = vec![JoinedRow {
            root_id: id,
            root: &row.record,
            joined: Vec::new(),
        }];
        for join in &joins {
            let targets = join_targets(tables, join, id, &row.record);
            expanded = expanded
                .into_iter()
                .flat_map(|partial| {
                    targets.iter().map(move |target| {
                        let mut next = partial.clone();
                        next.joined.push((join.name, *target));
                        next
                    })
                })
                .collect();
        }

        let matched = expanded
            .iter()
            .filter(|candidate| spec.predicate().matches(*candidate))
            .count();
        if spec.is_distinct() {
            if matched > 0 {
                ids.push(id);
            }
        } else {
            ids.extend(std::iter::repeat_n(id, matched));
        }
    }
    Ok(ids)
}

/// Stable sort of root ids by `order`. Ascending puts nulls last and
/// descending puts them first.
pub(crate) fn sort_ids(table: &Table, ids: &mut [i64], order: &[OrderTerm]) {
    let value = |id: i64, column: &str| {
        table
            .rows
            .get(&id)
            .map(|row| column_of(id, &row.record, column))
            .unwrap_or(Value::Null)
    };
    ids.sort_by(|a, b| {
        for term in order {
            let ordering = value(*a, term.column).sort_cmp(&value(*b, term.column));
            let ordering = match term.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
}
