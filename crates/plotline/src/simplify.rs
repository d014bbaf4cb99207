//! Point reduction using the Ramer-Douglas-Peucker algorithm.
//!
//! Keeps every output point within `tolerance` of the original path.
//! Applied per polyline; endpoints are always preserved so merging and
//! sorting behave identically before and after simplification.
//!
//! `geo` ships a [`Simplify`](geo::Simplify) implementation, but using
//! it here would round-trip every polyline through `LineString`
//! conversions for a few scalar chord tests, and the degenerate-chord
//! fallback (coincident chord endpoints measured as plain point
//! distance) would be implicit. The algorithm stays local instead.

use crate::types::{Point, Polyline};

/// Simplify a single polyline.
///
/// Interior points within `tolerance` of the chord between their kept
/// neighbors are dropped; a tolerance of `0.0` keeps every point.
/// Polylines with fewer than 3 points pass through unchanged.
#[must_use = "returns the simplified polyline"]
pub fn simplify(line: &Polyline, tolerance: f64) -> Polyline {
    let points = line.points();
    if points.len() < 3 {
        return line.clone();
    }

    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[points.len() - 1] = true;

    // Iterative RDP: each stack entry is a (first, last) chord whose
    // interior has not been examined yet.
    let mut pending = vec![(0, points.len() - 1)];
    while let Some((first, last)) = pending.pop() {
        if last <= first + 1 {
            continue;
        }
        let mut farthest = first;
        let mut max_dist = 0.0;
        for (i, &p) in points.iter().enumerate().take(last).skip(first + 1) {
            let d = chord_distance(p, points[first], points[last]);
            if d > max_dist {
                max_dist = d;
                farthest = i;
            }
        }
        if max_dist > tolerance {
            kept[farthest] = true;
            pending.push((first, farthest));
            pending.push((farthest, last));
        }
    }

    Polyline::new(
        points
            .iter()
            .zip(&kept)
            .filter_map(|(&p, &keep)| keep.then_some(p))
            .collect(),
    )
}

/// Simplify every polyline in the collection independently.
#[must_use = "returns the simplified polylines"]
pub fn simplify_lines(lines: &[Polyline], tolerance: f64) -> Vec<Polyline> {
    lines.iter().map(|l| simplify(l, tolerance)).collect()
}

/// Distance from `p` to the line through `a` and `b`.
///
/// Falls back to point distance when the chord is degenerate.
fn chord_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length_sq = dx.mul_add(dx, dy * dy);
    if length_sq == 0.0 {
        return p.distance(a);
    }
    let cross = dx.mul_add(p.y - a.y, -(dy * (p.x - a.x)));
    cross.abs() / length_sq.sqrt()
}
