//! Error types for the seeker crate.

use thiserror::Error;

/// Errors raised while building filter specs, bucket sets or page sizes.
///
/// Evaluating a built spec never fails; these only surface at construction.
#[derive(Debug, Error, PartialEq)]
pub enum SeekerError {
    /// A page must hold at least one row.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// The selected range label is not part of the bucket set.
    #[error("unknown range bucket '{label}'")]
    UnknownBucket { label: String },

    /// Two adjacent buckets leave a value uncovered at their boundary.
    #[error("buckets '{lower}' and '{upper}' leave a gap at {at}")]
    BucketGap {
        lower: String,
        upper: String,
        at: f64,
    },

    /// Two adjacent buckets both claim the value at their boundary.
    #[error("buckets '{lower}' and '{upper}' overlap at {at}")]
    BucketOverlap {
        lower: String,
        upper: String,
        at: f64,
    },

    /// A range select needs at least one bucket.
    #[error("a bucket set needs at least one bucket")]
    NoBuckets,

    /// A bucket whose bounds admit no value, such as `[100, 50]`.
    #[error("bucket '{label}' is empty")]
    EmptyBucket { label: String },

    /// Two buckets share a label, so the second could never be selected.
    #[error("bucket label '{label}' is used more than once")]
    DuplicateBucketLabel { label: String },

    /// The first bucket has a lower bound, leaving smaller values uncovered.
    #[error("bucket '{label}' must be unbounded below")]
    BucketsBoundedBelow { label: String },

    /// The last bucket has an upper bound, leaving larger values uncovered.
    #[error("bucket '{label}' must be unbounded above")]
    BucketsBoundedAbove { label: String },

    /// Adjacent buckets do not share a boundary value at all.
    #[error("buckets '{lower}' and '{upper}' are not adjacent")]
    BucketsNotAdjacent { lower: String, upper: String },
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
