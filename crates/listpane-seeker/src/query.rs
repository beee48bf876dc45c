//! Clause groups and their evaluation over row slices.

use crate::clause::{Clause, ClauseValue};
use crate::op::Op;
use crate::value::Value;

/// Three groups of [`Clause`]s evaluated against one row:
///
/// ```text
/// match = every AND clause holds
///       ∧ (some OR clause holds ∨ there are no OR clauses)
///       ∧ no NOT clause holds
/// ```
///
/// An empty query therefore matches every row, and evaluation never
/// reorders: survivors keep their input order.
///
/// ```
/// use listpane_seeker::{Query, Value};
///
/// struct Lead { name: String, status: String }
///
/// fn accessor<'a>(lead: &'a Lead, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&lead.name),
///         "status" => Value::String(&lead.status),
///         _ => Value::None,
///     }
/// }
///
/// let leads = vec![
///     Lead { name: "John Doe".into(), status: "New".into() },
///     Lead { name: "Bob Johnson".into(), status: "Closed".into() },
/// ];
///
/// let open_johns = Query::new()
///     .or_icontains("name", "JOHN")
///     .not_eq("status", "Closed");
///
/// let found = open_johns.filter(&leads, accessor);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "John Doe");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
    not_clauses: Vec<Clause>,
}

#[derive(Clone, Copy)]
enum Group {
    And,
    Or,
    Not,
}

impl Query {
    pub fn new() -> Self {
        Query::default()
    }

    fn push(mut self, group: Group, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        let clause = Clause::new(field, op, value);
        match group {
            Group::And => self.and_clauses.push(clause),
            Group::Or => self.or_clauses.push(clause),
            Group::Not => self.not_clauses.push(clause),
        }
        self
    }

    /// Requires `field op value`.
    pub fn and(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.push(Group::And, field, op, value)
    }

    /// Offers `field op value` as one alternative of the OR group.
    pub fn or(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.push(Group::Or, field, op, value)
    }

    /// Rejects rows where `field op value` holds.
    pub fn not(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.push(Group::Not, field, op, value)
    }

    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    pub fn and_gt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gt, value)
    }

    pub fn and_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gte, value)
    }

    pub fn and_lt(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lt, value)
    }

    pub fn and_lte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lte, value)
    }

    /// Case-insensitive substring alternative; one per searchable field.
    pub fn or_icontains(self, field: &str, value: &str) -> Self {
        self.or(field, Op::IContains, value)
    }

    pub fn not_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.not(field, Op::Eq, value)
    }

    pub fn and_clauses(&self) -> &[Clause] {
        &self.and_clauses
    }

    pub fn or_clauses(&self) -> &[Clause] {
        &self.or_clauses
    }

    pub fn not_clauses(&self) -> &[Clause] {
        &self.not_clauses
    }

    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty() && self.not_clauses.is_empty()
    }

    /// Evaluates the query against one row.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let holds = |clause: &Clause| clause.matches(&accessor(item, &clause.field));

        self.and_clauses.iter().all(holds)
            && (self.or_clauses.is_empty() || self.or_clauses.iter().any(holds))
            && !self.not_clauses.iter().any(holds)
    }

    /// Matching rows, in input order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect()
    }

    pub fn count<T, F>(&self, items: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .count()
    }

    pub fn any<T, F>(&self, items: &[T], accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        items.iter().any(|item| self.matches(item, &accessor))
    }

}
