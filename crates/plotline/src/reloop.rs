//! Seam relocation for closed paths.
//!
//! A pen resting at a path's seam can leave a visible blob, and a seam
//! shared by every copy of a repeated shape reads as an artifact. This
//! module detects closed paths (start and end within a tolerance) and
//! restarts each one at a different vertex. The seam choice is supplied
//! by the caller, so hosts decide between a randomized seam and a
//! reproducible one.

use crate::types::{Point, Polyline};

/// Whether `line`'s start and end points lie within `tolerance` of each
/// other. Polylines with fewer than 3 points are never considered
/// closed.
#[must_use]
pub fn is_closed(line: &Polyline, tolerance: f64) -> bool {
    if line.len() < 3 {
        return false;
    }
    match (line.first(), line.last()) {
        (Some(first), Some(last)) => first.distance(*last) <= tolerance,
        _ => false,
    }
}

/// Relocate the seam of every closed polyline in the collection.
///
/// For each polyline whose endpoints lie within `tolerance`, the two
/// endpoints are fused to their midpoint (closing the loop exactly) and
/// the path is rotated so the vertex chosen by `seam` becomes the new
/// start and end. `seam` is called with the polyline's point count and
/// returns the index of that vertex; out-of-range indices are clamped to
/// the interior range `1..=len - 2`. Open polylines pass through
/// unchanged.
#[must_use = "returns the relooped polylines"]
pub fn reloop_lines(
    lines: &[Polyline],
    tolerance: f64,
    mut seam: impl FnMut(usize) -> usize,
) -> Vec<Polyline> {
    lines
        .iter()
        .map(|line| {
            if is_closed(line, tolerance) {
                rotate_seam(line, seam(line.len()))
            } else {
                line.clone()
            }
        })
        .collect()
}

/// Close `line` at the midpoint of its endpoints and restart it at the
/// vertex at `seam`. The point count is preserved: the two old endpoint
/// copies collapse into one midpoint, and the new seam vertex appears at
/// both ends.
fn rotate_seam(line: &Polyline, seam: usize) -> Polyline {
    let points = line.points();
    let n = points.len();
    let seam = seam.clamp(1, n - 2);
    let joint = points[0].midpoint(points[n - 1]);

    let mut rotated = Vec::with_capacity(n);
    rotated.extend_from_slice(&points[seam..]);
    if let Some(old_end) = rotated.last_mut() {
        *old_end = joint;
    }
    rotated.extend_from_slice(&points[1..=seam]);
    Polyline::new(rotated)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    fn square() -> Polyline {
        line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)])
    }

    #[test]
    fn open_lines_pass_through_unchanged() {
        let input = vec![line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 1.0)])];
        assert_eq!(reloop_lines(&input, 0.05, |_| 2), input);
    }

    #[test]
    fn closedness_respects_tolerance() {
        let nearly = line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.04, 0.0)]);
        assert!(is_closed(&nearly, 0.05));
        assert!(!is_closed(&nearly, 0.01));
        assert!(!is_closed(&line(&[(0.0, 0.0), (0.0, 0.0)]), 0.05));
    }

    #[test]
    fn seam_moves_to_the_chosen_vertex() {
        let out = reloop_lines(&[square()], 0.05, |_| 2);
        assert_eq!(out.len(), 1);
        let pts = out[0].points();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], Point::new(1.0, 1.0));
        assert_eq!(pts[4], Point::new(1.0, 1.0));
    }

    #[test]
    fn old_endpoints_fuse_at_midpoint() {
        let input = vec![line(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.02, 0.0),
        ])];
        let out = reloop_lines(&input, 0.05, |_| 2);
        let pts = out[0].points();
        // The fused endpoint sits where the old seam was, two steps from
        // the new one.
        assert!((pts[2].x - 0.01).abs() < 1e-12, "joint x: {}", pts[2].x);
        assert!(pts[2].y.abs() < 1e-12);
        assert_eq!(pts.len(), input[0].len());
    }

    #[test]
    fn out_of_range_seam_is_clamped() {
        let out = reloop_lines(&[square()], 0.05, |_| 999);
        let pts = out[0].points();
        assert_eq!(pts[0], Point::new(0.0, 1.0));
        assert_eq!(pts[4], Point::new(0.0, 1.0));

        let out = reloop_lines(&[square()], 0.05, |_| 0);
        assert_eq!(out[0].first(), Some(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn seam_sees_the_point_count() {
        let mut seen = Vec::new();
        let _ = reloop_lines(&[square()], 0.05, |n| {
            seen.push(n);
            1
        });
        assert_eq!(seen, vec![5]);
    }

    #[test]
    fn beyond_tolerance_is_left_open() {
        let input = vec![line(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.2, 0.0)])];
        assert_eq!(reloop_lines(&input, 0.05, |_| 1), input);
    }
}
