//! Segmentation file loading.
//!
//! Decodes a segmentation source into per-recording segment sequences.
//! The evaluation core is agnostic to the source format; format selection
//! is explicit via [`SegmentFormat`].

mod ctm;
mod format;
mod textgrid;

pub use ctm::load_ctm;
pub use format::SegmentFormat;
pub use textgrid::load_textgrid;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::eval::Segment;

/// Ordered mapping from recording identifier to its segment sequence.
pub type SegmentMap = BTreeMap<String, Vec<Segment>>;

/// Load a segmentation file in the given format.
///
/// `tier` selects the annotation tier for formats that carry several
/// (TextGrid); CTM files ignore it.
pub fn load_segments(path: &Path, format: SegmentFormat, tier: usize) -> Result<SegmentMap> {
    match format {
        SegmentFormat::Ctm => load_ctm(path),
        SegmentFormat::TextGrid => load_textgrid(path, tier),
    }
}
