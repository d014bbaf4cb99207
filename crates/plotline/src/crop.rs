//! Rectangular cropping, delegated to `geo`'s boolean clipping.
//!
//! Each polyline is clipped independently against an axis-aligned
//! rectangle so the output preserves plot order. A polyline crossing the
//! boundary splits into one output polyline per surviving piece; fully
//! exterior geometry is dropped.

use geo::{BooleanOps, Coord, LineString, MultiLineString, Rect};

use crate::types::{Point, Polyline};

/// Convert an engine `Point` to a `geo::Coord`.
const fn point_to_coord(p: Point) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Convert a `geo::Coord` back to an engine `Point`.
const fn coord_to_point(c: Coord<f64>) -> Point {
    Point::new(c.x, c.y)
}

/// Crop all polylines to the rectangle with top-left corner `(x, y)` and
/// the given extent.
///
/// Geometry on the rectangle boundary is considered inside. Single-point
/// polylines are kept as-is when their point lies inside and dropped
/// otherwise. A non-positive `width` or `height` crops everything away.
#[must_use = "returns the cropped polylines"]
pub fn crop(lines: &[Polyline], x: f64, y: f64, width: f64, height: f64) -> Vec<Polyline> {
    if width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let window = Rect::new(
        Coord { x, y },
        Coord {
            x: x + width,
            y: y + height,
        },
    );
    let clip_region = window.to_polygon();

    let mut cropped = Vec::new();
    for line in lines {
        if line.len() < 2 {
            // Degenerate stroke: point-in-rectangle test instead of a
            // boolean operation.
            if let Some(&p) = line.first()
                && p.x >= window.min().x
                && p.x <= window.max().x
                && p.y >= window.min().y
                && p.y <= window.max().y
            {
                cropped.push(line.clone());
            }
            continue;
        }

        let path = LineString::new(line.points().iter().copied().map(point_to_coord).collect());
        let pieces = clip_region.clip(&MultiLineString::new(vec![path]), false);
        for piece in pieces {
            if piece.0.len() >= 2 {
                cropped.push(Polyline::new(
                    piece.0.into_iter().map(coord_to_point).collect(),
                ));
            }
        }
    }
    cropped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    fn close_to(p: Point, x: f64, y: f64) -> bool {
        (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
    }

    #[test]
    fn interior_line_survives() {
        let input = vec![line(&[(2.0, 2.0), (8.0, 8.0)])];
        let cropped = crop(&input, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(cropped.len(), 1);
        assert!(close_to(*cropped[0].first().unwrap(), 2.0, 2.0));
        assert!(close_to(*cropped[0].last().unwrap(), 8.0, 8.0));
    }

    #[test]
    fn exterior_line_dropped() {
        let input = vec![line(&[(20.0, 20.0), (30.0, 30.0)])];
        assert!(crop(&input, 0.0, 0.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn crossing_line_clipped_at_boundary() {
        let input = vec![line(&[(-5.0, 5.0), (15.0, 5.0)])];
        let cropped = crop(&input, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(cropped.len(), 1);
        let pts = cropped[0].points();
        let min_x = pts.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        assert!((min_x - 0.0).abs() < 1e-9, "min x: {min_x}");
        assert!((max_x - 10.0).abs() < 1e-9, "max x: {max_x}");
    }

    #[test]
    fn reentrant_line_splits_into_pieces() {
        // Dips out of the window halfway along, so two pieces survive.
        let input = vec![line(&[
            (2.0, 2.0),
            (2.0, -5.0),
            (8.0, -5.0),
            (8.0, 2.0),
        ])];
        let cropped = crop(&input, 0.0, 0.0, 10.0, 10.0);
        assert_eq!(cropped.len(), 2);
    }

    #[test]
    fn single_point_kept_only_inside() {
        let inside = vec![line(&[(5.0, 5.0)])];
        let outside = vec![line(&[(50.0, 5.0)])];
        assert_eq!(crop(&inside, 0.0, 0.0, 10.0, 10.0).len(), 1);
        assert!(crop(&outside, 0.0, 0.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn degenerate_window_crops_everything() {
        let input = vec![line(&[(0.0, 0.0), (1.0, 0.0)])];
        assert!(crop(&input, 0.0, 0.0, 0.0, 10.0).is_empty());
    }
}
