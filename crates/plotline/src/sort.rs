//! Plot-order optimization: reorder polylines to minimize pen-up travel.
//!
//! Greedy nearest-neighbor tour over polyline endpoints: starting from
//! the first polyline, always jump to the closest remaining one,
//! optionally reversing it when its end is the nearer endpoint. Single
//! pass, no backtracking — a heuristic, not an exact tour solver.

use crate::index::EndpointIndex;
use crate::types::Polyline;

/// Reorder polylines to greedily minimize pen-up travel.
///
/// The first polyline is kept in place and unchanged; from there the
/// closest remaining polyline (by start point, or by end point when
/// `allow_reversal` lets it be flipped) is repeatedly appended, and the
/// cursor advances to its end. Ties break to the lowest remaining index,
/// so the result is deterministic for a given input order.
///
/// Inputs with fewer than two polylines are returned unchanged. Empty
/// polylines are dropped from the working set.
#[must_use = "returns the reordered polylines"]
pub fn sort_lines(lines: &[Polyline], allow_reversal: bool) -> Vec<Polyline> {
    if lines.len() < 2 {
        return lines.to_vec();
    }

    let mut ordered = vec![lines[0].clone()];
    let rest: Vec<Polyline> = lines[1..]
        .iter()
        .filter(|l| !l.is_empty())
        .cloned()
        .collect();
    let mut index = EndpointIndex::new(rest, allow_reversal);

    let Some(&first_end) = lines[0].last() else {
        // Degenerate seed (empty first polyline): nothing to order from.
        let mut out = ordered;
        while let Some(next) = index.take_front() {
            out.push(next);
        }
        return out;
    };

    let mut cursor = first_end;
    while let Some((slot, matched_end)) = index.nearest_any(cursor) {
        let Some(mut next) = index.take(slot) else {
            break;
        };
        if matched_end {
            next.reverse();
        }
        if let Some(&end) = next.last() {
            cursor = end;
        }
        ordered.push(next);
    }

    ordered
}
