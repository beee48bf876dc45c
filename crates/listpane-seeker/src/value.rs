//! Field values as seen by the filter engine.
//!
//! Rows here only ever hold text (names, labels, emails) and numbers
//! (prices, counts), so a [`Value`] is one of those two or [`Value::None`]
//! for a field the row does not have.

use std::cmp::Ordering;
use std::fmt;

/// A field of a row, borrowed for the duration of one comparison.
///
/// ```
/// use listpane_seeker::{Number, Value};
///
/// struct Product { name: String, price: f64 }
///
/// fn accessor<'a>(product: &'a Product, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(&product.name),
///         "price" => Value::Number(Number::F64(product.price)),
///         _ => Value::None,
///     }
/// }
///
/// let mat = Product { name: "Yoga Mat".into(), price: 29.99 };
/// assert_eq!(accessor(&mat, "price").to_string(), "29.99");
/// assert!(accessor(&mat, "colour").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    None,
}

impl<'a> Value<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn as_str(&self) -> Option<&'a str> {
        if let Value::String(s) = *self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        if let Value::Number(n) = *self {
            Some(n)
        } else {
            None
        }
    }
}

/// Text verbatim, numbers via [`Number`]'s `Display`, `None` as nothing.
/// This is the form used for CSV cells and select options.
impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Number(n) => n.fmt(f),
            Value::None => Ok(()),
        }
    }
}

/// A numeric field. Integers stay integers so counts compare exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    /// Lossy widening used when a float is involved.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Orders two numbers of any variant. `None` only when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => Some(a.cmp(&b)),
            (Number::U64(a), Number::U64(b)) => Some(a.cmp(&b)),
            (Number::I64(a), Number::U64(b)) => Some(cmp_signed_unsigned(a, b)),
            (Number::U64(a), Number::I64(b)) => Some(cmp_signed_unsigned(b, a).reverse()),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

fn cmp_signed_unsigned(signed: i64, unsigned: u64) -> Ordering {
    match u64::try_from(signed) {
        Ok(s) => s.cmp(&unsigned),
        Err(_) => Ordering::Less,
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

/// Plain decimal with no grouping: the shortest form that parses back to
/// the same value (`59.99`, `1200`, `80`).
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident as $wide:ty),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )*
    };
}

number_from! {
    i32 => I64 as i64,
    i64 => I64 as i64,
    u32 => U64 as u64,
    u64 => U64 as u64,
    usize => U64 as u64,
    f32 => F64 as f64,
    f64 => F64 as f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_check_the_variant() {
        let text = Value::String("Home");
        let price = Value::Number(Number::F64(15.99));

        assert!(text.is_string() && !text.is_number());
        assert_eq!(text.as_str(), Some("Home"));
        assert_eq!(text.as_number(), None);
        assert_eq!(price.as_number(), Some(Number::F64(15.99)));
        assert_eq!(price.as_str(), None);
        assert!(Value::None.is_none());
    }

    #[test]
    fn mixed_variants_compare_by_value() {
        assert_eq!(Number::from(5i64).compare(Number::from(10u64)), Some(Ordering::Less));
        assert_eq!(Number::from(50u32).compare(Number::F64(50.0)), Some(Ordering::Equal));
        assert_eq!(Number::I64(-1).compare(Number::U64(u64::MAX)), Some(Ordering::Less));
        assert_eq!(Number::U64(u64::MAX).compare(Number::I64(-1)), Some(Ordering::Greater));
        assert!(Number::F64(49.99) < Number::U64(50));
    }

    #[test]
    fn nan_is_unordered() {
        assert_eq!(Number::F64(f64::NAN).compare(Number::F64(1.0)), None);
        assert_eq!(Number::U64(1).compare(Number::F64(f64::NAN)), None);
    }

    #[test]
    fn display_is_plain_decimal() {
        assert_eq!(Number::F64(59.99).to_string(), "59.99");
        assert_eq!(Number::F64(80.0).to_string(), "80");
        assert_eq!(Number::from(1_000_000usize).to_string(), "1000000");
        assert_eq!(Number::I64(-3).to_string(), "-3");

        assert_eq!(Value::String("Home").to_string(), "Home");
        assert_eq!(Value::Number(Number::F64(15.99)).to_string(), "15.99");
        assert_eq!(Value::None.to_string(), "");
    }
}
