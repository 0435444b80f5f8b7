//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used in user-facing messages.
pub const APP_NAME: &str = "segeval";

/// Half-width of the tolerance window around each reference boundary,
/// in seconds. A hypothesis boundary within this distance of a reference
/// boundary is a match candidate.
pub const DEFAULT_TOLERANCE_SECS: f64 = 0.02;

/// Maximum allowed gap between the end of one segment and the start of
/// the next, in seconds. A larger gap means the segmentation is not
/// contiguous and the input is rejected.
pub const CONTIGUITY_EPSILON_SECS: f64 = 0.01;

/// Boundary label constants.
pub mod label {
    /// Separator between the left and right segment labels of a boundary.
    pub const SEPARATOR: &str = "_";

    /// Placeholder label for the missing neighbor at a sequence edge.
    pub const EDGE: &str = "#";
}

/// Recognized input file extensions by format.
pub mod extensions {
    /// CTM transcript extension.
    pub const CTM: &str = "ctm";
    /// Praat TextGrid extension.
    pub const TEXTGRID: &str = "TextGrid";
}

/// File identifier under which a TextGrid's segments are keyed.
///
/// A TextGrid holds a single recording, so both sides of the comparison
/// use this fixed key to pair up.
pub const TEXTGRID_FILE_ID: &str = "textgrid";

/// Decimal places for ratio-valued metrics in the report.
pub const REPORT_DECIMAL_PLACES: usize = 4;
