//! Boundary extraction from segment sequences.

use std::fmt;

use crate::constants::{CONTIGUITY_EPSILON_SECS, label};
use crate::error::{Error, Result};
use crate::eval::Segment;

/// A timestamped transition point between two segments, or between a
/// sequence edge and a segment.
///
/// The label is composite: the left neighbor's label and the right
/// neighbor's label joined by [`label::SEPARATOR`], with [`label::EDGE`]
/// standing in for the missing neighbor at the sequence edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    /// Boundary time in seconds.
    pub time: f64,
    /// Composite label derived from the neighboring segments.
    pub label: String,
}

impl Boundary {
    /// Create a boundary from its time and the labels of its two neighbors.
    pub fn new(time: f64, prev_label: &str, next_label: &str) -> Self {
        Self {
            time,
            label: format!("{prev_label}{}{next_label}", label::SEPARATOR),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<\"{}\": {}>", self.label, self.time)
    }
}

/// Convert one recording's segment sequence into its boundary sequence.
///
/// A sequence of n segments yields n+1 boundaries in chronological order:
/// one before the first segment, one between each adjacent pair, and one
/// after the last segment. An empty sequence yields no boundaries.
///
/// `file` is the recording identifier, used only in diagnostics.
///
/// # Errors
///
/// Returns [`Error::BoundaryTimeMismatch`] if the end of a segment differs
/// from the start of the next by more than [`CONTIGUITY_EPSILON_SECS`]:
/// the segmentation is not contiguous and the evaluation would be
/// meaningless.
pub fn extract_boundaries(file: &str, segments: &[Segment]) -> Result<Vec<Boundary>> {
    if segments.is_empty() {
        return Ok(Vec::new());
    }

    let mut boundaries = Vec::with_capacity(segments.len() + 1);
    for i in 0..=segments.len() {
        let (time, prev_label) = if i > 0 {
            let prev = &segments[i - 1];
            (prev.end(), prev.label.as_str())
        } else {
            (segments[0].start, label::EDGE)
        };

        let next_label = if i < segments.len() {
            let next = &segments[i];
            if i > 0 && (time - next.start).abs() > CONTIGUITY_EPSILON_SECS {
                return Err(Error::BoundaryTimeMismatch {
                    file: file.to_string(),
                    expected: time,
                    actual: next.start,
                });
            }
            next.label.as_str()
        } else {
            label::EDGE
        };

        boundaries.push(Boundary::new(time, prev_label, next_label));
    }

    Ok(boundaries)
}
