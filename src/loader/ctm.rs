//! CTM transcript parsing.
//!
//! Parses space-delimited CTM rows
//! `<recording> <channel> <start-secs> <duration-secs> <label>` using the
//! `csv` crate for robust field handling.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::eval::Segment;
use crate::loader::SegmentMap;

/// Internal record for CTM row deserialization.
#[derive(Debug, Deserialize)]
struct CtmRecord {
    recording: String,
    channel: String,
    start: f64,
    duration: f64,
    label: String,
}

/// Parse a CTM file into per-recording segment sequences.
///
/// The recording identifier is `<recording>_<channel>` so each audio
/// channel is evaluated independently. Rows are kept in input order;
/// CTM rows are expected to be time-sorted within each recording.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a row does not have the
/// five CTM fields, or a time field is negative or not a number. The
/// diagnostic names the path and line.
pub fn load_ctm(path: &Path) -> Result<SegmentMap> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::CtmParse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let mut segments = SegmentMap::new();
    for (line_num, result) in reader.deserialize::<CtmRecord>().enumerate() {
        let record = result.map_err(|e| Error::InvalidCtmRecord {
            path: path.to_path_buf(),
            message: format!("line {}: {e}", line_num + 1),
        })?;

        if record.start < 0.0 || record.duration < 0.0 {
            return Err(Error::InvalidCtmRecord {
                path: path.to_path_buf(),
                message: format!(
                    "line {}: negative time (start {}, duration {})",
                    line_num + 1,
                    record.start,
                    record.duration
                ),
            });
        }

        let file_id = format!("{}_{}", record.recording, record.channel);
        segments
            .entry(file_id)
            .or_default()
            .push(Segment::new(record.label, record.start, record.duration));
    }

    Ok(segments)
}
