//! Segmentation evaluation core.
//!
//! Pure computation over in-memory data: segment sequences are turned into
//! boundary sequences, hypothesis boundaries are matched against reference
//! boundaries inside tolerance windows, and per-file counts accumulate into
//! corpus-level metrics. Nothing in this module touches the filesystem.

mod boundary;
mod matcher;
mod metrics;
mod segment;

pub use boundary::{Boundary, extract_boundaries};
pub use matcher::{ToleranceWindow, count_hits, resolve_windows};
pub use metrics::{EvalCounts, Metrics};
pub use segment::Segment;
