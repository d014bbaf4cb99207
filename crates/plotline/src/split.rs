//! Explode polylines into their individual segments.
//!
//! The inverse of merging: every polyline becomes one two-point polyline
//! per segment. Useful before re-sorting when stroke order within a
//! polyline doesn't matter.

use crate::types::Polyline;

/// Split every polyline into its individual two-point segments.
///
/// A polyline of `n` points yields `n - 1` segments in drawing order;
/// single-point polylines contribute nothing.
#[must_use = "returns the split segments"]
pub fn split_all(lines: &[Polyline]) -> Vec<Polyline> {
    lines
        .iter()
        .flat_map(|line| {
            line.points()
                .windows(2)
                .map(|pair| Polyline::new(vec![pair[0], pair[1]]))
        })
        .collect()
}
