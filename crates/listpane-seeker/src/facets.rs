//! Distinct field values, for populating filter selects.

use std::collections::HashSet;

use crate::traits::Seekable;
use crate::value::Value;

/// Distinct rendered values of `field` across `records`, in first-seen order.
///
/// Rows without the field are skipped.
pub fn distinct_values<T: Seekable>(records: &[T], field: &str) -> Vec<String> {
    distinct_values_with(records, field, T::accessor)
}

/// Like [`distinct_values`], with an explicit accessor.
pub fn distinct_values_with<T, F>(records: &[T], field: &str, accessor: F) -> Vec<String>
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for record in records {
        let value = accessor(record, field);
        if value.is_none() {
            continue;
        }
        let rendered = value.to_string();
        if seen.insert(rendered.clone()) {
            values.push(rendered);
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    struct Row {
        status: &'static str,
        score: Option<u32>,
    }

    impl Seekable for Row {
        fn seeker_field_value(&self, field: &str) -> Value<'_> {
            match (field, self.score) {
                ("status", _) => Value::String(self.status),
                ("score", Some(score)) => Value::Number(Number::from(score)),
                _ => Value::None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { status: "New", score: Some(3) },
            Row { status: "Contacted", score: None },
            Row { status: "New", score: Some(1) },
            Row { status: "Closed", score: Some(3) },
        ]
    }

    #[test]
    fn first_seen_order_without_duplicates() {
        assert_eq!(
            distinct_values(&rows(), "status"),
            vec!["New", "Contacted", "Closed"]
        );
    }

    #[test]
    fn numbers_render_and_missing_values_skip() {
        assert_eq!(distinct_values(&rows(), "score"), vec!["3", "1"]);
        assert!(distinct_values(&rows(), "unknown").is_empty());
    }

    #[test]
    fn empty_input() {
        let none: Vec<Row> = Vec::new();
        assert!(distinct_values(&none, "status").is_empty());
    }
}
