//! Matching hypothesis boundaries against reference boundaries.
//!
//! Each reference boundary gets a tolerance window of fixed half-width
//! around its time. When two adjacent windows overlap (reference boundaries
//! closer than twice the tolerance), both are shrunk to the midpoint
//! between the two boundary times, so the windows partition the span
//! between them and a hypothesis boundary can match at most one reference
//! boundary.

use crate::eval::Boundary;

/// Resolved tolerance region around one reference boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceWindow {
    /// Window start time in seconds.
    pub start: f64,
    /// Window end time in seconds.
    pub end: f64,
}

impl ToleranceWindow {
    fn around(time: f64, tolerance: f64) -> Self {
        Self {
            start: time - tolerance,
            end: time + tolerance,
        }
    }

    /// Whether a time falls inside the window. Both edges are inclusive;
    /// a time exactly on the split point shared with the next window is
    /// claimed by the earlier window during matching.
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Assign a tolerance window to every reference boundary and resolve
/// overlaps between adjacent windows.
///
/// The input must be sorted by time; the single left-to-right pass relies
/// on it. The returned windows are parallel to `reference` and satisfy
/// `windows[i].end <= windows[i + 1].start` for every adjacent pair.
pub fn resolve_windows(reference: &[Boundary], tolerance: f64) -> Vec<ToleranceWindow> {
    let mut windows: Vec<ToleranceWindow> = reference
        .iter()
        .map(|b| ToleranceWindow::around(b.time, tolerance))
        .collect();

    for i in 1..windows.len() {
        if windows[i - 1].end > windows[i].start {
            let midpoint = (reference[i - 1].time + reference[i].time) / 2.0;
            windows[i - 1].end = midpoint;
            windows[i].start = midpoint;
        }
    }

    windows
}

/// Count the correctly detected reference boundaries.
///
/// A hit is a hypothesis boundary whose time falls inside a reference
/// boundary's resolved tolerance window and whose composite label equals
/// the reference boundary's label exactly. Every matching hypothesis
/// boundary counts, so one reference boundary can accumulate several hits
/// when the hypothesis places several equally labeled boundaries inside
/// its window.
///
/// Both sequences must be sorted by time and belong to the same recording;
/// callers guarantee this.
pub fn count_hits(reference: &[Boundary], hypothesis: &[Boundary], tolerance: f64) -> usize {
    let windows = resolve_windows(reference, tolerance);

    let mut hits = 0;
    for candidate in hypothesis {
        // Windows are disjoint and time-ordered, so the first one containing
        // the candidate time is the only claimant (ties on a shared edge go
        // to the earlier window).
        let claimed = reference
            .iter()
            .zip(&windows)
            .find(|(_, window)| window.contains(candidate.time));

        if let Some((boundary, _)) = claimed
            && boundary.label == candidate.label
        {
            hits += 1;
        }
    }

    hits
}
