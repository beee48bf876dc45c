//! The composite filter behind a list view.
//!
//! A [`FilterSpec`] combines the search box, the categorical selects and the
//! optional range select of a view. Every part is optional and an unset part
//! matches everything, so the empty spec is the identity filter.

use crate::bucket::{Bucket, BucketSet};
use crate::error::Result;
use crate::query::Query;
use crate::traits::Seekable;
use crate::value::Value;

/// The "no constraint" option offered by every select.
pub const ALL: &str = "All";

/// Returns `true` for selections that mean "no constraint": `""` or `"All"`.
pub fn is_unconstrained(selection: &str) -> bool {
    selection.is_empty() || selection == ALL
}

#[derive(Debug, Clone, PartialEq)]
struct TextPredicate {
    needle: String,
    fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct RangePredicate {
    field: String,
    bucket: Bucket,
}

/// Text query ∧ equality predicates ∧ at most one range predicate.
///
/// # Example
///
/// ```
/// use listpane_seeker::{Bucket, BucketSet, FilterSpec};
///
/// let prices = BucketSet::new(vec![
///     Bucket::under("Under $50", 50.0),
///     Bucket::within("$50 - $100", 50.0, 100.0),
///     Bucket::over("Over $100", 100.0),
/// ])?;
///
/// let spec = FilterSpec::new()
///     .search("electronics", ["name", "category"])
///     .equals("category", "All")
///     .range("price", &prices, "Under $50")?;
///
/// assert_eq!(spec.query_text(), Some("electronics"));
/// assert_eq!(spec.equalities().count(), 0);
/// # Ok::<(), listpane_seeker::SeekerError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    text: Option<TextPredicate>,
    equalities: Vec<(String, String)>,
    range: Option<RangePredicate>,
}

impl FilterSpec {
    /// Creates the identity spec.
    pub fn new() -> Self {
        FilterSpec::default()
    }

    /// Sets the free-text query, matched case-insensitively against any of
    /// `fields`.
    ///
    /// An empty query, or an empty field list, leaves the text predicate unset.
    pub fn search<I, S>(mut self, query: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.text = if query.is_empty() || fields.is_empty() {
            None
        } else {
            Some(TextPredicate {
                needle: query.to_lowercase(),
                fields,
            })
        };
        self
    }

    /// Requires `field` to equal `value` exactly.
    ///
    /// `""` and `"All"` clear any constraint on the field instead. A second
    /// call for the same field replaces the first.
    pub fn equals(mut self, field: &str, value: &str) -> Self {
        self.equalities.retain(|(f, _)| f != field);
        if !is_unconstrained(value) {
            self.equalities.push((field.to_string(), value.to_string()));
        }
        self
    }

    /// Restricts `field` to the bucket labelled `label` in `buckets`.
    ///
    /// `""` and `"All"` clear the range predicate. Unknown labels are an error.
    pub fn range(self, field: &str, buckets: &BucketSet, label: &str) -> Result<Self> {
        if is_unconstrained(label) {
            return Ok(self.without_range());
        }
        let bucket = buckets.require(label)?.clone();
        Ok(self.with_bucket(field, bucket))
    }

    /// Restricts `field` to `bucket`, replacing any earlier range predicate.
    pub fn with_bucket(mut self, field: &str, bucket: Bucket) -> Self {
        self.range = Some(RangePredicate {
            field: field.to_string(),
            bucket,
        });
        self
    }

    /// Drops the range predicate.
    pub fn without_range(mut self) -> Self {
        self.range = None;
        self
    }

    /// The lower-cased search text, if a text predicate is set.
    pub fn query_text(&self) -> Option<&str> {
        self.text.as_ref().map(|t| t.needle.as_str())
    }

    /// Active equality predicates as `(field, value)` pairs.
    pub fn equalities(&self) -> impl Iterator<Item = (&str, &str)> {
        self.equalities
            .iter()
            .map(|(f, v)| (f.as_str(), v.as_str()))
    }

    /// The active range predicate as `(field, bucket)`.
    pub fn range_bucket(&self) -> Option<(&str, &Bucket)> {
        self.range.as_ref().map(|r| (r.field.as_str(), &r.bucket))
    }

    /// Returns `true` when no predicate is set.
    pub fn is_unconstrained(&self) -> bool {
        self.text.is_none() && self.equalities.is_empty() && self.range.is_none()
    }

    /// Compiles this filter into a clause-group [`Query`].
    ///
    /// Text fields become OR `icontains` clauses, equalities AND `eq`
    /// clauses, and the bucket AND bound clauses.
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(text) = &self.text {
            for field in &text.fields {
                query = query.or_icontains(field, &text.needle);
            }
        }
        for (field, value) in &self.equalities {
            query = query.and_eq(field, value.as_str());
        }
        if let Some(range) = &self.range {
            query = range.bucket.apply(query, &range.field);
        }
        query
    }

    /// Human-readable summary of the active predicates, e.g.
    /// `search 'wire', category=Electronics, price in Under $50`.
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(text) = &self.text {
            parts.push(format!("search '{}'", text.needle));
        }
        for (field, value) in &self.equalities {
            parts.push(format!("{}={}", field, value));
        }
        if let Some(range) = &self.range {
            parts.push(format!("{} in {}", range.field, range.bucket.label()));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Filters `records` by `spec`, keeping input order.
pub fn filter<'a, T: Seekable>(records: &'a [T], spec: &FilterSpec) -> Vec<&'a T> {
    spec.to_query().filter(records, T::accessor)
}

/// Like [`filter`], with an explicit accessor instead of [`Seekable`].
pub fn filter_with<'a, T, F>(records: &'a [T], spec: &FilterSpec, accessor: F) -> Vec<&'a T>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    spec.to_query().filter(records, accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeekerError;
    use crate::value::Number;
    use std::ops::Bound;

    struct Lead {
        name: &'static str,
        email: &'static str,
        source: &'static str,
        status: &'static str,
    }

    impl Seekable for Lead {
        fn seeker_field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::String(self.name),
                "email" => Value::String(self.email),
                "source" => Value::String(self.source),
                "status" => Value::String(self.status),
                _ => Value::None,
            }
        }
    }

    fn leads() -> Vec<Lead> {
        vec![
            Lead {
                name: "John Doe",
                email: "john@example.com",
                source: "Website",
                status: "New",
            },
            Lead {
                name: "Jane Smith",
                email: "jane@example.com",
                source: "Referral",
                status: "Contacted",
            },
            Lead {
                name: "Bob Johnson",
                email: "bob@example.com",
                source: "Social Media",
                status: "Qualified",
            },
            Lead {
                name: "Alice Brown",
                email: "alice@example.com",
                source: "Website",
                status: "In Progress",
            },
        ]
    }

    fn names(found: &[&Lead]) -> Vec<&'static str> {
        found.iter().map(|l| l.name).collect()
    }

    #[test]
    fn identity_spec_returns_everything_in_order() {
        let leads = leads();
        let spec = FilterSpec::new();

        assert!(spec.is_unconstrained());
        assert_eq!(
            names(&filter(&leads, &spec)),
            vec!["John Doe", "Jane Smith", "Bob Johnson", "Alice Brown"]
        );
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let leads = leads();
        let spec = FilterSpec::new().search("JOHN", ["name", "email", "source"]);

        // "John Doe" by name and email, "Bob Johnson" by name
        assert_eq!(names(&filter(&leads, &spec)), vec!["John Doe", "Bob Johnson"]);
        assert_eq!(spec.query_text(), Some("john"));
    }

    #[test]
    fn search_reaches_secondary_fields() {
        let leads = leads();
        let spec = FilterSpec::new().search("website", ["name", "email", "source"]);

        assert_eq!(names(&filter(&leads, &spec)), vec!["John Doe", "Alice Brown"]);
    }

    #[test]
    fn empty_search_is_unset() {
        let spec = FilterSpec::new().search("", ["name"]);
        assert!(spec.is_unconstrained());

        let spec = FilterSpec::new().search("x", Vec::<String>::new());
        assert!(spec.is_unconstrained());
    }

    #[test]
    fn sentinel_selections_clear_constraints() {
        let spec = FilterSpec::new()
            .equals("status", "New")
            .equals("status", "All");
        assert!(spec.is_unconstrained());

        let spec = FilterSpec::new().equals("source", "");
        assert!(spec.is_unconstrained());
    }

    #[test]
    fn equality_is_exact_and_anded() {
        let leads = leads();
        let spec = FilterSpec::new()
            .equals("source", "Website")
            .equals("status", "In Progress");

        assert_eq!(names(&filter(&leads, &spec)), vec!["Alice Brown"]);

        let lowercase = FilterSpec::new().equals("source", "website");
        assert!(filter(&leads, &lowercase).is_empty());
    }

    #[test]
    fn equals_replaces_same_field() {
        let spec = FilterSpec::new()
            .equals("status", "New")
            .equals("status", "Closed");

        let pairs: Vec<(&str, &str)> = spec.equalities().collect();
        assert_eq!(pairs, vec![("status", "Closed")]);
    }

    fn price_accessor<'a>(price: &'a f64, _field: &str) -> Value<'a> {
        Value::Number(Number::F64(*price))
    }

    #[test]
    fn range_uses_bucket_bounds() {
        let buckets = BucketSet::new(vec![
            Bucket::under("Under $50", 50.0),
            Bucket::within("$50 - $100", 50.0, 100.0),
            Bucket::over("Over $100", 100.0),
        ])
        .unwrap();
        let prices = [49.99, 50.0, 100.0, 100.5];

        let spec = FilterSpec::new()
            .range("price", &buckets, "$50 - $100")
            .unwrap();
        let query = spec.to_query();
        let found: Vec<f64> = prices
            .iter()
            .filter(|p| query.matches(*p, price_accessor))
            .copied()
            .collect();
        assert_eq!(found, vec![50.0, 100.0]);

        let cleared = spec.range("price", &buckets, "All").unwrap();
        assert!(cleared.is_unconstrained());
    }

    #[test]
    fn unknown_bucket_is_an_error() {
        let buckets = BucketSet::new(vec![
            Bucket::under("Under $50", 50.0),
            Bucket::new("$50 and up", Bound::Included(50.0), Bound::Unbounded),
        ])
        .unwrap();
        let err = FilterSpec::new()
            .range("price", &buckets, "Cheap")
            .unwrap_err();

        assert!(matches!(err, SeekerError::UnknownBucket { .. }));
    }

    #[test]
    fn summary_lists_active_predicates() {
        let spec = FilterSpec::new()
            .search("Wire", ["name"])
            .equals("category", "Electronics")
            .with_bucket("price", Bucket::under("Under $50", 50.0));

        assert_eq!(
            spec.summary().as_deref(),
            Some("search 'wire', category=Electronics, price in Under $50")
        );
        assert_eq!(FilterSpec::new().summary(), None);
    }

    #[test]
    fn filter_with_explicit_accessor() {
        let leads = leads();
        let spec = FilterSpec::new().equals("status", "New");
        let found = filter_with(&leads, &spec, Lead::accessor);

        assert_eq!(names(&found), vec!["John Doe"]);
    }
}
