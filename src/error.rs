//! Error types for segeval.

/// Result type alias for segeval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for segeval.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file extension is not a recognized segmentation format.
    #[error("unrecognized segmentation file extension: {path}")]
    UnrecognizedExtension {
        /// Path with the unrecognized extension.
        path: std::path::PathBuf,
    },

    /// Failed to parse a CTM transcript file.
    #[error("failed to parse CTM file '{path}'")]
    CtmParse {
        /// Path to the CTM file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A CTM row was malformed.
    #[error("invalid CTM record in '{path}': {message}")]
    InvalidCtmRecord {
        /// Path to the CTM file.
        path: std::path::PathBuf,
        /// Description of the malformed row.
        message: String,
    },

    /// Failed to parse a TextGrid file.
    #[error("failed to parse TextGrid file '{path}': {reason}")]
    TextGridParse {
        /// Path to the TextGrid file.
        path: std::path::PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// Requested tier index does not exist in the TextGrid.
    #[error("TextGrid file '{path}' has {available} tier(s), cannot select tier {tier}")]
    TierOutOfRange {
        /// Path to the TextGrid file.
        path: std::path::PathBuf,
        /// Requested tier index.
        tier: usize,
        /// Number of tiers the file actually has.
        available: usize,
    },

    /// Requested tier is not an interval tier.
    #[error("tier {tier} in TextGrid file '{path}' is not an interval tier")]
    TierNotInterval {
        /// Path to the TextGrid file.
        path: std::path::PathBuf,
        /// Requested tier index.
        tier: usize,
    },

    /// Segment sequence is not contiguous: a boundary time disagrees with
    /// the start of the segment that follows it.
    #[error(
        "segmentation for '{file}' is not contiguous: boundary at {expected}s \
         does not match segment start {actual}s"
    )]
    BoundaryTimeMismatch {
        /// File identifier of the offending segmentation.
        file: String,
        /// Boundary time derived from the preceding segment.
        expected: f64,
        /// Start time of the following segment.
        actual: f64,
    },

    /// Hypothesis file identifier has no counterpart in the reference set.
    #[error("hypothesis file '{file}' is missing from the reference segmentation")]
    MissingReference {
        /// Orphaned file identifier.
        file: String,
    },

    /// Metric computation is undefined because a boundary total is zero.
    #[error("cannot compute metrics: {side} segmentation contains no boundaries")]
    DegenerateMetrics {
        /// Which side ("reference" or "hypothesis") had zero boundaries.
        side: &'static str,
    },
}
