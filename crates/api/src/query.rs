//! Immutable, eagerly-evaluated query builder
//!
//! A `Query` owns the collection name and the current materialized list of
//! `(id, data)` entries. Every chain call filters, sorts, or truncates that
//! list into a fresh `Query`; the receiver is never mutated and storage is
//! never re-read mid-chain.

use serde_json::Value;
use std::cmp::Ordering;

use crate::snapshot::QuerySnapshot;
use ember_core::{value_cmp, values_equal, FieldPath, Result};

/// One materialized document inside a query
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub id: String,
    pub data: Value,
}

/// Comparison operator for `where` predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `==`: structural equality
    Eq,
    /// `!=`: structural inequality (absent fields pass)
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `array-contains`: field is an array holding a structurally equal element
    ArrayContains,
}

impl Operator {
    /// Parse the operator spelling used in query chains
    ///
    /// Returns `None` for anything unrecognized; the predicate then matches
    /// nothing (fails closed).
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "==" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Le),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Ge),
            "array-contains" => Some(Operator::ArrayContains),
            _ => None,
        }
    }

    fn matches(self, resolved: Option<&Value>, operand: &Value) -> bool {
        match self {
            Operator::Eq => resolved.is_some_and(|v| values_equal(v, operand)),
            Operator::Ne => resolved.map_or(true, |v| !values_equal(v, operand)),
            Operator::Lt => Self::ordered(resolved, operand, Ordering::is_lt),
            Operator::Le => Self::ordered(resolved, operand, Ordering::is_le),
            Operator::Gt => Self::ordered(resolved, operand, Ordering::is_gt),
            Operator::Ge => Self::ordered(resolved, operand, Ordering::is_ge),
            Operator::ArrayContains => resolved
                .and_then(Value::as_array)
                .is_some_and(|items| items.iter().any(|item| values_equal(item, operand))),
        }
    }

    fn ordered(resolved: Option<&Value>, operand: &Value, accept: fn(Ordering) -> bool) -> bool {
        resolved
            .and_then(|v| value_cmp(v, operand))
            .is_some_and(accept)
    }
}

/// Sort direction for `order_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending (the default)
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Immutable query over a materialized document list
#[derive(Debug, Clone)]
pub struct Query {
    collection: String,
    entries: Vec<Entry>,
}

impl Query {
    pub(crate) fn new(collection: String, entries: Vec<Entry>) -> Self {
        Query { collection, entries }
    }

    /// Collection this query reads from
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Keep documents whose `field` satisfies `op value`
    ///
    /// `op` is the operator spelling (`"=="`, `"<"`, `"array-contains"`, ...).
    /// An unrecognized spelling excludes every document rather than erroring.
    pub fn where_field(&self, field: &str, op: &str, value: Value) -> Query {
        let path = FieldPath::parse(field);
        let op = Operator::parse(op);
        let entries = self
            .entries
            .iter()
            .filter(|entry| {
                op.is_some_and(|op| op.matches(path.resolve(&entry.data), &value))
            })
            .cloned()
            .collect();
        Query::new(self.collection.clone(), entries)
    }

    /// Stable-sort by `field`
    ///
    /// Documents without the field sort last under either direction; ties
    /// and incomparable pairs keep their prior relative order.
    pub fn order_by(&self, field: &str, direction: Direction) -> Query {
        let path = FieldPath::parse(field);
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| match (path.resolve(&a.data), path.resolve(&b.data)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(av), Some(bv)) => {
                let ord = value_cmp(av, bv).unwrap_or(Ordering::Equal);
                match direction {
                    Direction::Asc => ord,
                    Direction::Desc => ord.reverse(),
                }
            }
        });
        Query::new(self.collection.clone(), entries)
    }

    /// Keep the first `n` documents of the current list
    pub fn limit(&self, n: usize) -> Query {
        let entries = self.entries.iter().take(n).cloned().collect();
        Query::new(self.collection.clone(), entries)
    }

    /// Resolve the chain into a snapshot
    pub fn get(&self) -> Result<QuerySnapshot> {
        Ok(QuerySnapshot::from_entries(self.entries.clone()))
    }
}
