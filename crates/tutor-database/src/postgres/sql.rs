//! Rendering of specifications into parameterized PostgreSQL statements.
//!
//! The root table is aliased `t`; each referenced association is joined
//! with `LEFT JOIN` under the alias `j_<name>`. Identifiers come from
//! static entity metadata and are always quoted; values are always bound.

use std::collections::BTreeSet;

use sqlx::{Postgres, QueryBuilder};

use tutor_core::error::AppError;
use tutor_core::query::{
    ColumnRef, EntityMeta, JoinKind, Predicate, Record, Specification, Value,
};
use tutor_core::result::AppResult;
use tutor_core::traits::Entity;

use crate::order::OrderTerm;

const ROOT_ALIAS: &str = "t";

/// Row window applied after ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Maximum rows returned.
    pub limit: u64,
    /// Rows skipped.
    pub offset: u64,
}

/// `SELECT [DISTINCT] t.* FROM … WHERE … ORDER BY … [LIMIT … OFFSET …]`.
pub fn select<'a, E: Entity>(
    spec: &Specification<E>,
    order: &[OrderTerm],
    window: Option<Window>,
) -> AppResult<QueryBuilder<'a, Postgres>> {
    let mut qb = QueryBuilder::new("SELECT ");
    if spec.is_distinct() {
        qb.push("DISTINCT ");
    }
    qb.push(ROOT_ALIAS).push(".*");
    push_from(&mut qb, E::META, &spec.joins())?;
    push_where(&mut qb, spec.predicate());

    qb.push(" ORDER BY ");
    for (i, term) in order.iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_column(&mut qb, &ColumnRef::root(term.column));
        qb.push(" ").push(term.direction.as_sql());
    }

    if let Some(window) = window {
        qb.push(" LIMIT ")
            .push_bind(to_i64(window.limit))
            .push(" OFFSET ")
            .push_bind(to_i64(window.offset));
    }
    Ok(qb)
}

/// `SELECT COUNT(…) FROM … WHERE …` over the same joins and predicate as
/// [`select`]. Counts distinct root ids when the specification is distinct.
pub fn count<'a, E: Entity>(spec: &Specification<E>) -> AppResult<QueryBuilder<'a, Postgres>> {
    let mut qb = QueryBuilder::new("SELECT ");
    if spec.is_distinct() {
        qb.push("COUNT(DISTINCT ");
        push_column(&mut qb, &ColumnRef::root(EntityMeta::ID));
        qb.push(")");
    } else {
        qb.push("COUNT(*)");
    }
    push_from(&mut qb, E::META, &spec.joins())?;
    push_where(&mut qb, spec.predicate());
    Ok(qb)
}

/// `SELECT * FROM table WHERE id = $1`.
pub fn find_by_id<'a>(meta: &EntityMeta, id: i64) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new("SELECT * FROM ");
    push_ident(&mut qb, meta.table);
    qb.push(" WHERE ");
    push_ident(&mut qb, EntityMeta::ID);
    qb.push(" = ").push_bind(id);
    qb
}

/// `INSERT INTO table (columns…) VALUES (…) RETURNING *`.
pub fn insert<'a>(meta: &EntityMeta, record: &Record) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new("INSERT INTO ");
    push_ident(&mut qb, meta.table);
    qb.push(" (");
    for (i, column) in meta.columns.iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_ident(&mut qb, column);
    }
    qb.push(") VALUES (");
    for (i, column) in meta.columns.iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_value(&mut qb, record.get(column).unwrap_or(&Value::Null));
    }
    qb.push(") RETURNING *");
    qb
}

/// `UPDATE table SET column = … WHERE id = … RETURNING *`.
pub fn update<'a>(meta: &EntityMeta, id: i64, record: &Record) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new("UPDATE ");
    push_ident(&mut qb, meta.table);
    qb.push(" SET ");
    for (i, column) in meta.columns.iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_ident(&mut qb, column);
        qb.push(" = ");
        push_value(&mut qb, record.get(column).unwrap_or(&Value::Null));
    }
    qb.push(" WHERE ");
    push_ident(&mut qb, EntityMeta::ID);
    qb.push(" = ").push_bind(id).push(" RETURNING *");
    qb
}

/// `DELETE FROM table WHERE id = $1`.
pub fn delete<'a>(meta: &EntityMeta, id: i64) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new("DELETE FROM ");
    push_ident(&mut qb, meta.table);
    qb.push(" WHERE ");
    push_ident(&mut qb, EntityMeta::ID);
    qb.push(" = ").push_bind(id);
    qb
}

fn push_from(
    qb: &mut QueryBuilder<'_, Postgres>,
    meta: &EntityMeta,
    joins: &BTreeSet<&'static str>,
) -> AppResult<()> {
    qb.push(" FROM ");
    push_ident(qb, meta.table);
    qb.push(" ").push(ROOT_ALIAS);

    for name in joins {
        let join = meta.join(name).ok_or_else(|| {
            AppError::internal(format!("{} has no association {name}", meta.name))
        })?;
        let alias = join_alias(join.name);
        qb.push(" LEFT JOIN ");
        push_ident(qb, join.table);
        qb.push(" ").push(&alias).push(" ON ");
        match join.kind {
            JoinKind::ManyToOne { foreign_key } => {
                push_column(qb, &ColumnRef::joined(join.name, EntityMeta::ID));
                qb.push(" = ");
                push_column(qb, &ColumnRef::root(foreign_key));
            }
            JoinKind::OneToMany { mapped_by } => {
                push_column(qb, &ColumnRef::joined(join.name, mapped_by));
                qb.push(" = ");
                push_column(qb, &ColumnRef::root(EntityMeta::ID));
            }
        }
    }
    Ok(())
}

fn push_where(qb: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    if predicate.is_true() {
        return;
    }
    qb.push(" WHERE ");
    push_predicate(qb, predicate);
}

fn push_predicate(qb: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::True => {
            qb.push("TRUE");
        }
        Predicate::False => {
            qb.push("FALSE");
        }
        Predicate::And(children) => {
            qb.push("(");
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    qb.push(" AND ");
                }
                push_predicate(qb, child);
            }
            qb.push(")");
        }
        Predicate::Compare { column, op, value } => {
            push_column(qb, column);
            qb.push(" ").push(op.as_sql()).push(" ");
            push_value(qb, value);
        }
        Predicate::In {
            column,
            values,
            negated,
        } => {
            // `x IN ()` is not valid SQL.
            if values.is_empty() {
                if *negated {
                    push_column(qb, column);
                    qb.push(" IS NOT NULL");
                } else {
                    qb.push("FALSE");
                }
                return;
            }
            push_column(qb, column);
            qb.push(if *negated { " NOT IN (" } else { " IN (" });
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    qb.push(", ");
                }
                push_value(qb, value);
            }
            qb.push(")");
        }
        Predicate::Contains {
            column,
            needle,
            negated,
        } => {
            push_column(qb, column);
            qb.push(if *negated { " NOT ILIKE " } else { " ILIKE " });
            qb.push_bind(format!("%{}%", escape_like(needle)));
        }
        Predicate::IsNull { column, negated } => {
            push_column(qb, column);
            qb.push(if *negated { " IS NOT NULL" } else { " IS NULL" });
        }
    }
}

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: &Value) {
    match value.clone() {
        Value::Null => qb.push("NULL"),
        Value::Bool(v) => qb.push_bind(v),
        Value::Int(v) => qb.push_bind(v),
        Value::Long(v) => qb.push_bind(v),
        Value::Text(v) => qb.push_bind(v),
        Value::Date(v) => qb.push_bind(v),
        Value::Timestamp(v) => qb.push_bind(v),
    };
}

fn push_column(qb: &mut QueryBuilder<'_, Postgres>, column: &ColumnRef) {
    match column.join {
        Some(join) => qb.push(join_alias(join)),
        None => qb.push(ROOT_ALIAS),
    };
    qb.push(".");
    push_ident(qb, column.name);
}

fn push_ident(qb: &mut QueryBuilder<'_, Postgres>, ident: &str) {
    qb.push("\"").push(ident).push("\"");
}

fn join_alias(name: &str) -> String {
    format!("j_{name}")
}

fn to_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Escape `LIKE` wildcards so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
