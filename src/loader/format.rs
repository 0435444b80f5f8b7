//! Segmentation input format selection.

use std::path::Path;

use crate::constants::extensions;
use crate::error::{Error, Result};

/// Supported segmentation input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFormat {
    /// Time-stamped CTM transcript.
    Ctm,
    /// Praat TextGrid with interval tiers.
    TextGrid,
}

impl SegmentFormat {
    /// Determine the format from a path's file extension
    /// (case-insensitive). Each input path is dispatched on its own
    /// extension, so reference and hypothesis may use different formats.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        if extension.eq_ignore_ascii_case(extensions::CTM) {
            Ok(Self::Ctm)
        } else if extension.eq_ignore_ascii_case(extensions::TEXTGRID) {
            Ok(Self::TextGrid)
        } else {
            Err(Error::UnrecognizedExtension {
                path: path.to_path_buf(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctm_extension() {
        assert_eq!(
            SegmentFormat::from_path(Path::new("corpus/dev.ctm")).ok(),
            Some(SegmentFormat::Ctm)
        );
        assert_eq!(
            SegmentFormat::from_path(Path::new("DEV.CTM")).ok(),
            Some(SegmentFormat::Ctm)
        );
    }

    #[test]
    fn test_textgrid_extension() {
        assert_eq!(
            SegmentFormat::from_path(Path::new("utt.TextGrid")).ok(),
            Some(SegmentFormat::TextGrid)
        );
        assert_eq!(
            SegmentFormat::from_path(Path::new("utt.textgrid")).ok(),
            Some(SegmentFormat::TextGrid)
        );
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(matches!(
            SegmentFormat::from_path(Path::new("audio.wav")),
            Err(Error::UnrecognizedExtension { .. })
        ));
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        assert!(matches!(
            SegmentFormat::from_path(Path::new("segments")),
            Err(Error::UnrecognizedExtension { .. })
        ));
    }
}
