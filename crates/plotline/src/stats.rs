//! Collection statistics for host-side reporting.
//!
//! The engine itself does no logging; hosts that want to report the
//! effect of merging or sorting compute these values before and after
//! and present the difference themselves.

use serde::{Deserialize, Serialize};

use crate::types::Polyline;

/// Pen-up travel statistics over a polyline collection, in the
/// collection's own units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenUpStats {
    /// Sum of all pen-up jumps between consecutive polylines.
    pub total: f64,
    /// Mean jump length.
    pub mean: f64,
    /// Median jump length.
    pub median: f64,
}

/// Compute pen-up travel statistics for a collection, in plot order.
///
/// A pen-up jump is the straight-line distance from one polyline's end
/// to the next polyline's start. Returns `None` when the collection has
/// fewer than two polylines (no jumps exist). Pairs involving an empty
/// polyline contribute nothing.
#[must_use]
pub fn pen_up_stats(lines: &[Polyline]) -> Option<PenUpStats> {
    if lines.len() < 2 {
        return None;
    }

    let mut jumps: Vec<f64> = lines
        .windows(2)
        .filter_map(|pair| {
            let end = pair[0].last()?;
            let start = pair[1].first()?;
            Some(end.distance(*start))
        })
        .collect();
    if jumps.is_empty() {
        return None;
    }

    jumps.sort_by(f64::total_cmp);
    let total: f64 = jumps.iter().sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total / jumps.len() as f64;
    let mid = jumps.len() / 2;
    let median = if jumps.len() % 2 == 0 {
        0.5 * (jumps[mid - 1] + jumps[mid])
    } else {
        jumps[mid]
    };

    Some(PenUpStats {
        total,
        mean,
        median,
    })
}

/// Total number of drawn segments in the collection.
///
/// A polyline of `n` points contributes `n - 1` segments; single-point
/// polylines contribute none.
#[must_use]
pub fn segment_count(lines: &[Polyline]) -> usize {
    lines
        .iter()
        .map(|l| l.len().saturating_sub(1))
        .sum()
}
