//! Multiple drawing passes per polyline.
//!
//! Some pens need several passes over the same stroke for full opacity.
//! Instead of plotting the whole collection repeatedly (and paying the
//! pen-up travel again each time), each polyline is extended in place
//! with mirrored copies of itself: the pen retraces the stroke
//! backwards, then forwards again, as many times as requested.

use crate::types::Polyline;

/// Extend each polyline so the pen draws it `count` times.
///
/// Passes alternate direction and share their joint point, so a polyline
/// of `n` points grows to `n * count - (count - 1)` points. Odd pass
/// counts end at the stroke's original end, even counts back at its
/// start. A `count` below 2 is the identity; single-point polylines are
/// unchanged.
#[must_use = "returns the multi-pass polylines"]
pub fn multipass(lines: &[Polyline], count: usize) -> Vec<Polyline> {
    if count < 2 {
        return lines.to_vec();
    }

    lines
        .iter()
        .map(|line| {
            let pts = line.points();
            if pts.len() < 2 {
                return line.clone();
            }
            let mut out = Vec::with_capacity(pts.len() * count - (count - 1));
            out.extend_from_slice(pts);
            for pass in 1..count {
                if pass % 2 == 1 {
                    out.extend(pts.iter().rev().skip(1).copied());
                } else {
                    out.extend(pts.iter().skip(1).copied());
                }
            }
            Polyline::new(out)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn line(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn count_below_two_is_identity() {
        let input = vec![line(&[(0.0, 0.0), (1.0, 0.0)])];
        assert_eq!(multipass(&input, 0), input);
        assert_eq!(multipass(&input, 1), input);
    }

    #[test]
    fn double_pass_retraces_to_start() {
        let input = vec![line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])];
        let out = multipass(&input, 2);
        let pts = out[0].points();
        // 3 * 2 - 1 points, ending back at the start.
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[2], Point::new(2.0, 0.0));
        assert_eq!(pts[3], Point::new(1.0, 0.0));
        assert_eq!(pts[4], Point::new(0.0, 0.0));
    }

    #[test]
    fn triple_pass_ends_at_end() {
        let input = vec![line(&[(0.0, 0.0), (1.0, 0.0)])];
        let out = multipass(&input, 3);
        let pts = out[0].points();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts.last(), Some(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn point_count_formula_holds() {
        let input = vec![line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)])];
        for count in 2..6 {
            let out = multipass(&input, count);
            assert_eq!(out[0].len(), 4 * count - (count - 1), "count {count}");
        }
    }

    #[test]
    fn single_point_polyline_unchanged() {
        let input = vec![line(&[(5.0, 5.0)])];
        assert_eq!(multipass(&input, 4), input);
    }
}
