//! Praat TextGrid parsing.
//!
//! Reads one interval tier of a TextGrid annotation file with the
//! `textgrid` crate.

use std::path::Path;

use textgrid::{TextGrid, TierType};

use crate::constants::TEXTGRID_FILE_ID;
use crate::error::{Error, Result};
use crate::eval::Segment;
use crate::loader::SegmentMap;

/// Parse one interval tier of a TextGrid file into a segment sequence.
///
/// The result is keyed under the fixed identifier
/// [`TEXTGRID_FILE_ID`]: a TextGrid describes a single recording, and
/// both sides of a comparison must agree on the key to pair up.
///
/// # Errors
///
/// Returns an error if the file cannot be parsed, `tier` is out of range,
/// or the selected tier is a point tier rather than an interval tier.
pub fn load_textgrid(path: &Path, tier: usize) -> Result<SegmentMap> {
    let grid = TextGrid::from_file(path).map_err(|e| Error::TextGridParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let selected = grid.tiers.get(tier).ok_or_else(|| Error::TierOutOfRange {
        path: path.to_path_buf(),
        tier,
        available: grid.tiers.len(),
    })?;

    if selected.tier_type != TierType::IntervalTier {
        return Err(Error::TierNotInterval {
            path: path.to_path_buf(),
            tier,
        });
    }

    let segments = selected
        .intervals
        .iter()
        .map(|interval| {
            Segment::new(
                interval.text.clone(),
                interval.xmin,
                interval.xmax - interval.xmin,
            )
        })
        .collect();

    let mut map = SegmentMap::new();
    map.insert(TEXTGRID_FILE_ID.to_string(), segments);
    Ok(map)
}
