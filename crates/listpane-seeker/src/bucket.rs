//! Named numeric intervals for range filters.
//!
//! A [`Bucket`] is a labelled interval such as `"Under $50"`; a [`BucketSet`]
//! is an ordered list of buckets that must tile the whole numeric line, with
//! no gaps or overlaps at the shared boundaries.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::ops::Bound;

use crate::error::{Result, SeekerError};
use crate::query::Query;

/// A labelled numeric interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    label: String,
    lower: Bound<f64>,
    upper: Bound<f64>,
}

impl Bucket {
    /// Creates a bucket from explicit bounds.
    pub fn new(label: impl Into<String>, lower: Bound<f64>, upper: Bound<f64>) -> Self {
        Bucket {
            label: label.into(),
            lower,
            upper,
        }
    }

    /// Everything strictly below `limit`.
    pub fn under(label: impl Into<String>, limit: f64) -> Self {
        Bucket::new(label, Bound::Unbounded, Bound::Excluded(limit))
    }

    /// Everything in `[low, high]`, both ends included.
    pub fn within(label: impl Into<String>, low: f64, high: f64) -> Self {
        Bucket::new(label, Bound::Included(low), Bound::Included(high))
    }

    /// Everything strictly above `limit`.
    pub fn over(label: impl Into<String>, limit: f64) -> Self {
        Bucket::new(label, Bound::Excluded(limit), Bound::Unbounded)
    }

    /// The bucket's display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The lower end of the interval.
    pub fn lower(&self) -> Bound<f64> {
        self.lower
    }

    /// The upper end of the interval.
    pub fn upper(&self) -> Bound<f64> {
        self.upper
    }

    /// Returns `true` if `value` falls inside the interval. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        let above = match self.lower {
            Bound::Included(low) => value >= low,
            Bound::Excluded(low) => value > low,
            Bound::Unbounded => !value.is_nan(),
        };
        let below = match self.upper {
            Bound::Included(high) => value <= high,
            Bound::Excluded(high) => value < high,
            Bound::Unbounded => !value.is_nan(),
        };
        above && below
    }

    /// Returns `true` if no value can fall inside, e.g. `within(100, 50)`.
    pub fn is_empty(&self) -> bool {
        use Bound::*;
        match (self.lower, self.upper) {
            (Included(low), Included(high)) => {
                !matches!(low.partial_cmp(&high), Some(Ordering::Less | Ordering::Equal))
            }
            (Included(low) | Excluded(low), Included(high) | Excluded(high)) => {
                low.partial_cmp(&high) != Some(Ordering::Less)
            }
            (Included(v) | Excluded(v), Unbounded) | (Unbounded, Included(v) | Excluded(v)) => {
                v.is_nan()
            }
            (Unbounded, Unbounded) => false,
        }
    }

    /// Adds AND clauses restricting `field` to this interval.
    ///
    /// A fully unbounded bucket still requires the field to be numeric.
    pub fn apply(&self, query: Query, field: &str) -> Query {
        let query = match self.lower {
            Bound::Included(low) => query.and_gte(field, low),
            Bound::Excluded(low) => query.and_gt(field, low),
            Bound::Unbounded => query,
        };
        match (self.lower, self.upper) {
            (_, Bound::Included(high)) => query.and_lte(field, high),
            (_, Bound::Excluded(high)) => query.and_lt(field, high),
            (Bound::Unbounded, Bound::Unbounded) => query.and_gte(field, f64::NEG_INFINITY),
            (_, Bound::Unbounded) => query,
        }
    }
}

/// An ordered, validated set of buckets over one numeric field.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketSet {
    buckets: Vec<Bucket>,
}

impl BucketSet {
    /// Builds a set, checking that every value lands in exactly one bucket.
    ///
    /// Buckets must be non-empty and uniquely labelled, each must meet the
    /// next at a single boundary claimed by exactly one side, and the first
    /// and last must be open towards their infinities.
    pub fn new(buckets: Vec<Bucket>) -> Result<Self> {
        let (Some(first), Some(last)) = (buckets.first(), buckets.last()) else {
            return Err(SeekerError::NoBuckets);
        };

        let mut labels = HashSet::new();
        for bucket in &buckets {
            if bucket.is_empty() {
                return Err(SeekerError::EmptyBucket {
                    label: bucket.label.clone(),
                });
            }
            if !labels.insert(bucket.label.as_str()) {
                return Err(SeekerError::DuplicateBucketLabel {
                    label: bucket.label.clone(),
                });
            }
        }

        for pair in buckets.windows(2) {
            check_adjacent(&pair[0], &pair[1])?;
        }

        if first.lower != Bound::Unbounded {
            return Err(SeekerError::BucketsBoundedBelow {
                label: first.label.clone(),
            });
        }
        if last.upper != Bound::Unbounded {
            return Err(SeekerError::BucketsBoundedAbove {
                label: last.label.clone(),
            });
        }

        Ok(BucketSet { buckets })
    }

    /// Looks up a bucket by label.
    pub fn get(&self, label: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.label == label)
    }

    /// Looks up a bucket by label, reporting unknown labels.
    pub fn require(&self, label: &str) -> Result<&Bucket> {
        self.get(label).ok_or_else(|| SeekerError::UnknownBucket {
            label: label.to_string(),
        })
    }

    /// Labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.label.as_str())
    }

    /// Returns the bucket a value falls into, if any.
    pub fn classify(&self, value: f64) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.contains(value))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn check_adjacent(lower: &Bucket, upper: &Bucket) -> Result<()> {
    let not_adjacent = || SeekerError::BucketsNotAdjacent {
        lower: lower.label.clone(),
        upper: upper.label.clone(),
    };
    match (lower.upper, upper.lower) {
        (Bound::Excluded(a), Bound::Included(b)) | (Bound::Included(a), Bound::Excluded(b))
            if a == b =>
        {
            Ok(())
        }
        (Bound::Excluded(a), Bound::Excluded(b)) if a == b => Err(SeekerError::BucketGap {
            lower: lower.label.clone(),
            upper: upper.label.clone(),
            at: a,
        }),
        (Bound::Included(a), Bound::Included(b)) if a == b => Err(SeekerError::BucketOverlap {
            lower: lower.label.clone(),
            upper: upper.label.clone(),
            at: a,
        }),
        _ => Err(not_adjacent()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Number, Value};

    fn price_buckets() -> BucketSet {
        BucketSet::new(vec![
            Bucket::under("Under $50", 50.0),
            Bucket::within("$50 - $100", 50.0, 100.0),
            Bucket::over("Over $100", 100.0),
        ])
        .unwrap()
    }

    #[test]
    fn boundaries_belong_to_exactly_one_bucket() {
        let set = price_buckets();

        assert_eq!(set.classify(49.99).map(Bucket::label), Some("Under $50"));
        assert_eq!(set.classify(50.0).map(Bucket::label), Some("$50 - $100"));
        assert_eq!(set.classify(100.0).map(Bucket::label), Some("$50 - $100"));
        assert_eq!(set.classify(100.01).map(Bucket::label), Some("Over $100"));

        for value in [0.0, 49.999, 50.0, 75.5, 100.0, 100.0001, 1e9] {
            let hits = set.buckets.iter().filter(|b| b.contains(value)).count();
            assert_eq!(hits, 1, "value {} landed in {} buckets", value, hits);
        }
    }

    #[test]
    fn nan_is_in_no_bucket() {
        assert!(price_buckets().classify(f64::NAN).is_none());
    }

    #[test]
    fn rejects_gap_at_boundary() {
        let err = BucketSet::new(vec![
            Bucket::under("low", 50.0),
            Bucket::over("high", 50.0),
        ])
        .unwrap_err();
        assert!(matches!(err, SeekerError::BucketGap { at, .. } if at == 50.0));
    }

    #[test]
    fn rejects_overlap_at_boundary() {
        let err = BucketSet::new(vec![
            Bucket::within("a", 0.0, 50.0),
            Bucket::within("b", 50.0, 100.0),
        ])
        .unwrap_err();
        assert!(matches!(err, SeekerError::BucketOverlap { .. }));
    }

    #[test]
    fn rejects_disjoint_buckets() {
        let err = BucketSet::new(vec![
            Bucket::under("a", 10.0),
            Bucket::over("b", 20.0),
        ])
        .unwrap_err();
        assert!(matches!(err, SeekerError::BucketsNotAdjacent { .. }));
    }

    #[test]
    fn rejects_empty_set() {
        assert_eq!(BucketSet::new(Vec::new()), Err(SeekerError::NoBuckets));
    }

    #[test]
    fn rejects_duplicate_labels() {
        let err = BucketSet::new(vec![
            Bucket::under("X", 50.0),
            Bucket::within("X", 50.0, 100.0),
            Bucket::over("Y", 100.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SeekerError::DuplicateBucketLabel {
                label: "X".to_string()
            }
        );
    }

    #[test]
    fn rejects_bounded_outer_ends() {
        let err = BucketSet::new(vec![Bucket::within("0-50", 0.0, 50.0)]).unwrap_err();
        assert!(matches!(err, SeekerError::BucketsBoundedBelow { .. }));

        let err = BucketSet::new(vec![
            Bucket::under("low", 50.0),
            Bucket::within("mid", 50.0, 100.0),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SeekerError::BucketsBoundedAbove {
                label: "mid".to_string()
            }
        );
    }

    #[test]
    fn rejects_inverted_bucket() {
        let inverted = Bucket::within("a", 100.0, 50.0);
        assert!(inverted.is_empty());
        assert!(!inverted.contains(75.0));

        let err = BucketSet::new(vec![inverted, Bucket::over("b", 50.0)]).unwrap_err();
        assert!(matches!(err, SeekerError::EmptyBucket { ref label } if label == "a"));
    }

    #[test]
    fn degenerate_bounds() {
        assert!(!Bucket::within("point", 5.0, 5.0).is_empty());
        assert!(Bucket::new("open point", Bound::Excluded(5.0), Bound::Included(5.0)).is_empty());
        assert!(Bucket::under("nan", f64::NAN).is_empty());
        assert!(!Bucket::new("all", Bound::Unbounded, Bound::Unbounded).is_empty());
    }

    #[test]
    fn single_unbounded_bucket_is_valid() {
        let set = BucketSet::new(vec![Bucket::new("Any", Bound::Unbounded, Bound::Unbounded)])
            .unwrap();
        assert_eq!(set.classify(-1e9).map(Bucket::label), Some("Any"));
    }

    #[test]
    fn require_reports_unknown_label() {
        let set = price_buckets();
        assert!(set.require("Over $100").is_ok());
        assert_eq!(
            set.require("Cheap").unwrap_err(),
            SeekerError::UnknownBucket {
                label: "Cheap".to_string()
            }
        );
    }

    fn price_accessor<'a>(price: &'a f64, _field: &str) -> Value<'a> {
        Value::Number(Number::F64(*price))
    }

    #[test]
    fn apply_matches_contains() {
        let set = price_buckets();
        let prices = [15.99, 49.99, 50.0, 99.99, 100.0, 149.99];

        for bucket in set.buckets.iter() {
            let query = bucket.apply(Query::new(), "price");
            for price in prices {
                assert_eq!(
                    query.matches(&price, price_accessor),
                    bucket.contains(price),
                    "bucket {} disagrees at {}",
                    bucket.label(),
                    price
                );
            }
        }
    }

    #[test]
    fn labels_keep_declaration_order() {
        let buckets = price_buckets();
        let labels: Vec<&str> = buckets.labels().collect();
        assert_eq!(labels, vec!["Under $50", "$50 - $100", "Over $100"]);
    }
}
