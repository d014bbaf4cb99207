//! Endpoint merging: fuse polylines whose endings lie within tolerance.
//!
//! Pens lose registration at every lift, and each lift costs travel
//! time, so chains of strokes that visually form one path should be
//! drawn as one. This module greedily grows chains through an
//! [`EndpointIndex`], fusing endpoints that fall within a distance
//! tolerance.

use crate::index::EndpointIndex;
use crate::types::{Point, Polyline};

/// Merge polylines whose endpoints lie within `tolerance` of each other.
///
/// Chains are grown greedily: each chain is seeded with the first
/// remaining polyline, then repeatedly extended with the nearest
/// unconsumed polyline whose start lies within `tolerance` of the
/// chain's end. With `allow_reversal`, a polyline whose *end* is the
/// nearer endpoint is flipped before splicing, and a chain that cannot
/// grow forward is flipped to try growing from its other end (which may
/// leave it reversed in the output).
///
/// At each fusion the two coincident boundary points are replaced by
/// their midpoint, so every successful merge reduces the total point
/// count by exactly one compared to naive concatenation.
///
/// Inputs with fewer than two polylines are returned unchanged. Empty
/// polylines are dropped from the working set.
#[must_use = "returns the merged polylines"]
pub fn merge_lines(lines: &[Polyline], tolerance: f64, allow_reversal: bool) -> Vec<Polyline> {
    if lines.len() < 2 {
        return lines.to_vec();
    }

    let working: Vec<Polyline> = lines.iter().filter(|l| !l.is_empty()).cloned().collect();
    let mut index = EndpointIndex::new(working, allow_reversal);
    let mut merged = Vec::new();

    while let Some(seed) = index.take_front() {
        let mut chain = seed.into_points();
        loop {
            let Some(&chain_end) = chain.last() else {
                break;
            };
            let mut hit = index.nearest_within(chain_end, tolerance);
            if hit.is_none() && allow_reversal {
                // No forward extension: flip the chain and try growing
                // from its other end instead.
                let Some(&chain_start) = chain.first() else {
                    break;
                };
                hit = index.nearest_within(chain_start, tolerance);
                chain.reverse();
            }
            let Some((slot, matched_end)) = hit else {
                break;
            };
            let Some(next) = index.take(slot) else {
                break;
            };
            let mut points = next.into_points();
            if matched_end {
                points.reverse();
            }
            splice(&mut chain, points);
        }
        merged.push(Polyline::new(chain));
    }

    merged
}

/// Append `incoming` to `chain`, replacing the two coincident boundary
/// points with their midpoint.
fn splice(chain: &mut Vec<Point>, mut incoming: Vec<Point>) {
    let (Some(&chain_end), Some(&next_start)) = (chain.last(), incoming.first()) else {
        return;
    };
    let joint = chain_end.midpoint(next_start);
    if let Some(last) = chain.last_mut() {
        *last = joint;
    }
    chain.extend(incoming.drain(1..));
}
