//! Named-field access for row types.

use crate::value::Value;

/// A row whose fields can be read by name.
///
/// This is the only thing the engine needs from a row type: filtering,
/// facets and CSV columns all go through it.
///
/// ```
/// use listpane_seeker::{Number, Seekable, Value};
///
/// struct Lead { name: String, status: String, score: u32 }
///
/// impl Seekable for Lead {
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::String(&self.name),
///             "status" => Value::String(&self.status),
///             "score" => Value::Number(Number::from(self.score)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Seekable {
    /// The value of `field`, or [`Value::None`] when the row has no such field.
    fn seeker_field_value(&self, field: &str) -> Value<'_>;

    /// [`seeker_field_value`](Self::seeker_field_value) as a free function,
    /// for APIs that take an accessor such as [`Query::filter`](crate::Query::filter).
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.seeker_field_value(field)
    }
}

impl<T: Seekable + ?Sized> Seekable for &T {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        T::seeker_field_value(self, field)
    }
}
