//! Corpus-level counters and metric computation.
//!
//! Hit rate, over-segmentation rate and the R-value follow Räsänen, Laine
//! and Altosaar, "An Improved Speech Segmentation Quality Measure: the
//! R-value".

use crate::error::{Error, Result};

/// Boundary and hit totals accumulated over every evaluated recording.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalCounts {
    /// Correctly detected reference boundaries.
    pub hits: usize,
    /// Total reference boundaries.
    pub reference: usize,
    /// Total hypothesis boundaries.
    pub hypothesis: usize,
}

impl EvalCounts {
    /// Fold one recording's counts into the totals.
    pub fn record_file(&mut self, hits: usize, reference: usize, hypothesis: usize) {
        self.hits += hits;
        self.reference += reference;
        self.hypothesis += hypothesis;
    }

    /// Compute the final metrics from the accumulated totals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateMetrics`] when the reference or the
    /// hypothesis total is zero: hit rate, over-segmentation, precision
    /// and recall are undefined then, and no numeric result is produced.
    #[allow(clippy::cast_precision_loss)]
    pub fn metrics(&self) -> Result<Metrics> {
        if self.reference == 0 {
            return Err(Error::DegenerateMetrics { side: "reference" });
        }
        if self.hypothesis == 0 {
            return Err(Error::DegenerateMetrics { side: "hypothesis" });
        }

        let hits = self.hits as f64;
        let reference = self.reference as f64;
        let hypothesis = self.hypothesis as f64;

        let hit_rate = hits / reference * 100.0;
        let over_segmentation = (hypothesis / reference - 1.0) * 100.0;
        let precision = hits / hypothesis;
        let recall = hits / reference;
        // With zero hits both precision and recall are zero; report F as
        // zero instead of the 0/0 indeterminate form.
        let f_measure = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        let r1 = ((100.0 - hit_rate).powi(2) + over_segmentation.powi(2)).sqrt();
        let r2 = (-over_segmentation + hit_rate - 100.0) / 2.0_f64.sqrt();
        let r_value = 1.0 - (r1.abs() + r2.abs()) / 200.0;

        Ok(Metrics {
            ref_count: self.reference,
            hyp_count: self.hypothesis,
            hit_count: self.hits,
            hit_rate,
            over_segmentation,
            precision,
            recall,
            f_measure,
            r1,
            r2,
            r_value,
        })
    }
}

/// Flat record of the computed evaluation metrics.
///
/// Values are unrounded; display formatting is the report printer's
/// concern. `hit_rate` and `over_segmentation` are percentages;
/// `precision`, `recall`, `f_measure` and `r_value` are plain ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Total reference boundaries.
    pub ref_count: usize,
    /// Total hypothesis boundaries.
    pub hyp_count: usize,
    /// Total hits.
    pub hit_count: usize,
    /// Share of reference boundaries correctly detected, in percent.
    pub hit_rate: f64,
    /// Relative excess of hypothesis boundaries over reference boundaries,
    /// in percent. Zero is ideal; negative means under-segmentation.
    pub over_segmentation: f64,
    /// Hits per hypothesis boundary.
    pub precision: f64,
    /// Hits per reference boundary.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f_measure: f64,
    /// Distance from the ideal point in the (hit rate, over-segmentation)
    /// plane.
    pub r1: f64,
    /// Signed distance from the zero-insertion operating line.
    pub r2: f64,
    /// Combined segmentation quality score; 1.0 is a perfect match.
    pub r_value: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_perfect_match_scores_perfectly() {
        let mut counts = EvalCounts::default();
        counts.record_file(3, 3, 3);
        let metrics = counts.metrics().unwrap();

        assert!(close(metrics.hit_rate, 100.0));
        assert!(close(metrics.over_segmentation, 0.0));
        assert!(close(metrics.precision, 1.0));
        assert!(close(metrics.recall, 1.0));
        assert!(close(metrics.f_measure, 1.0));
        assert!(close(metrics.r1, 0.0));
        assert!(close(metrics.r2, 0.0));
        assert!(close(metrics.r_value, 1.0));
    }

    #[test]
    fn test_over_segmentation_penalizes_score() {
        // 3 of 3 reference boundaries hit, but one spurious insertion.
        let mut counts = EvalCounts::default();
        counts.record_file(3, 3, 4);
        let metrics = counts.metrics().unwrap();

        assert!(close(metrics.hit_rate, 100.0));
        assert!(metrics.over_segmentation > 0.0);
        assert!(metrics.precision < 1.0);
        assert!(close(metrics.recall, 1.0));
        assert!(metrics.r_value < 1.0);
    }

    #[test]
    fn test_missed_boundaries_lower_hit_rate() {
        let mut counts = EvalCounts::default();
        counts.record_file(2, 4, 4);
        let metrics = counts.metrics().unwrap();

        assert!(close(metrics.hit_rate, 50.0));
        assert!(close(metrics.over_segmentation, 0.0));
        assert!(close(metrics.precision, 0.5));
        assert!(close(metrics.recall, 0.5));
        assert!(close(metrics.f_measure, 0.5));
        // r1 = 50, r2 = -50/sqrt(2); R = 1 - (50 + 35.355...) / 200
        assert!(close(metrics.r1, 50.0));
        assert!(close(metrics.r2, -50.0 / 2.0_f64.sqrt()));
        assert!(close(metrics.r_value, 1.0 - (50.0 + 50.0 / 2.0_f64.sqrt()) / 200.0));
    }

    #[test]
    fn test_zero_hits_yield_zero_f_measure() {
        let mut counts = EvalCounts::default();
        counts.record_file(0, 3, 3);
        let metrics = counts.metrics().unwrap();

        assert_eq!(metrics.f_measure, 0.0);
        assert!(metrics.f_measure.is_finite());
        assert!(metrics.r_value.is_finite());
    }

    #[test]
    fn test_counts_accumulate_across_files() {
        let mut counts = EvalCounts::default();
        counts.record_file(2, 3, 3);
        counts.record_file(1, 2, 4);
        assert_eq!(counts.hits, 3);
        assert_eq!(counts.reference, 5);
        assert_eq!(counts.hypothesis, 7);
    }

    #[test]
    fn test_empty_reference_is_rejected() {
        let counts = EvalCounts::default();
        assert!(matches!(
            counts.metrics(),
            Err(Error::DegenerateMetrics { side: "reference" })
        ));
    }

    #[test]
    fn test_empty_hypothesis_is_rejected() {
        let mut counts = EvalCounts::default();
        counts.record_file(0, 3, 0);
        assert!(matches!(
            counts.metrics(),
            Err(Error::DegenerateMetrics { side: "hypothesis" })
        ));
    }
}
