//! Single-field predicates.

use std::fmt;

use crate::op::Op;
use crate::value::{Number, Value};

/// `field op value`, e.g. `price lt 50` or `name icontains "wire"`.
///
/// ```
/// use listpane_seeker::{Clause, Op, Value};
///
/// let clause = Clause::new("category", Op::IContains, "ELECTRO");
/// assert!(clause.matches(&Value::String("Electronics")));
/// assert_eq!(clause.to_string(), "category icontains \"electro\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: String,
    pub op: Op,
    pub value: ClauseValue,
}

impl Clause {
    /// Builds a clause. `IContains` operands are lower-cased here so that
    /// matching only has to fold the row side.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        let value = match (op, value.into()) {
            (Op::IContains, ClauseValue::String(s)) => ClauseValue::String(s.to_lowercase()),
            (_, other) => other,
        };
        Clause {
            field: field.into(),
            op,
            value,
        }
    }

    /// Tests a row's field value.
    ///
    /// Missing fields and text/number mismatches never match. The one
    /// exception is `Eq` with a text operand against a numeric field: select
    /// values arrive as text, so the operand is parsed and compared
    /// numerically (`"143"` matches a stock of 143).
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        match (&self.value, field_value) {
            (ClauseValue::String(operand), Value::String(text)) => self.test_text(text, operand),
            (ClauseValue::Number(operand), Value::Number(n)) => self.test_number(*n, *operand),
            (ClauseValue::String(operand), Value::Number(n)) if self.op == Op::Eq => operand
                .trim()
                .parse::<f64>()
                .is_ok_and(|parsed| self.test_number(*n, Number::F64(parsed))),
            _ => false,
        }
    }

    fn test_text(&self, text: &str, operand: &str) -> bool {
        match self.op {
            Op::Eq => text == operand,
            Op::IContains => contains_folded(text, operand),
            Op::Gt | Op::Gte | Op::Lt | Op::Lte => false,
        }
    }

    fn test_number(&self, n: Number, operand: Number) -> bool {
        self.op.applies_to_numbers()
            && n.compare(operand)
                .is_some_and(|ordering| self.op.holds_for(ordering))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            ClauseValue::String(s) => write!(f, "{} {} {:?}", self.field, self.op, s),
            ClauseValue::Number(n) => write!(f, "{} {} {}", self.field, self.op, n),
        }
    }
}

/// Case-insensitive containment against an already lower-cased needle.
///
/// ASCII haystacks are compared in place; anything else is lower-cased first.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle.is_ascii() {
        let needle = needle.as_bytes();
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }
    haystack.to_lowercase().contains(needle)
}

/// The owned operand of a [`Clause`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    String(String),
    Number(Number),
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::String(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::String(s.to_string())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

macro_rules! numeric_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ClauseValue {
                fn from(n: $ty) -> Self {
                    ClauseValue::Number(Number::from(n))
                }
            }
        )*
    };
}

numeric_operand!(i32, i64, u32, u64, usize, f64);
