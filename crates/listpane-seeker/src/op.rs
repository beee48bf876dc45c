//! Clause operators.

use std::cmp::Ordering;
use std::fmt;

/// How a clause compares a row's field with its operand.
///
/// `Eq` works on text and numbers alike. `IContains` only applies to text
/// and the ordering family only to numbers; a clause whose operator does not
/// fit the field's type never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    /// Case-insensitive substring; what the search box uses.
    IContains,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Op {
    pub fn applies_to_numbers(self) -> bool {
        self == Op::Eq || self.is_ordering()
    }

    fn is_ordering(self) -> bool {
        matches!(self, Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Whether `field <op> operand` holds, given `field.cmp(operand)`.
    ///
    /// Text-only operators are never satisfied by an ordering.
    pub fn holds_for(self, ordering: Ordering) -> bool {
        use Ordering::*;
        match (self, ordering) {
            (Op::Eq, Equal) | (Op::Gt, Greater) | (Op::Lt, Less) => true,
            (Op::Gte, o) => o != Less,
            (Op::Lte, o) => o != Greater,
            _ => false,
        }
    }

    /// Short lower-case name, e.g. `icontains`.
    pub fn name(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::IContains => "icontains",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
