//! Bounding box and frame generation.

use crate::types::{Point, Polyline};

/// Axis-aligned bounding box of the collection as `(min, max)` corners.
///
/// Returns `None` when the collection contains no points.
#[must_use]
pub fn bounds(lines: &[Polyline]) -> Option<(Point, Point)> {
    let mut corners: Option<(Point, Point)> = None;
    for p in lines.iter().flat_map(|l| l.points()) {
        corners = Some(match corners {
            None => (*p, *p),
            Some((min, max)) => (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            ),
        });
    }
    corners
}

/// A single closed rectangular polyline around the collection's bounding
/// box, grown outward by `offset`.
///
/// Returns `None` when the collection contains no points.
#[must_use]
pub fn frame(lines: &[Polyline], offset: f64) -> Option<Polyline> {
    let (min, max) = bounds(lines)?;
    let (x0, y0) = (min.x - offset, min.y - offset);
    let (x1, y1) = (max.x + offset, max.y + offset);
    Some(Polyline::new(vec![
        Point::new(x0, y0),
        Point::new(x0, y1),
        Point::new(x1, y1),
        Point::new(x1, y0),
        Point::new(x0, y0),
    ]))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn empty_collection_has_no_bounds() {
        assert!(bounds(&[]).is_none());
        assert!(frame(&[], 1.0).is_none());
    }

    #[test]
    fn bounds_span_all_lines() {
        let lines = vec![
            line(&[(1.0, 2.0), (3.0, 4.0)]),
            line(&[(-1.0, 0.0), (5.0, 1.0)]),
        ];
        let (min, max) = bounds(&lines).unwrap();
        assert_eq!(min, Point::new(-1.0, 0.0));
        assert_eq!(max, Point::new(5.0, 4.0));
    }

    #[test]
    fn frame_is_closed() {
        let lines = vec![line(&[(0.0, 0.0), (10.0, 10.0)])];
        let f = frame(&lines, 0.0).unwrap();
        assert_eq!(f.len(), 5);
        assert_eq!(f.first(), f.last());
    }

    #[test]
    fn offset_grows_the_frame() {
        let lines = vec![line(&[(0.0, 0.0), (10.0, 10.0)])];
        let f = frame(&lines, 2.0).unwrap();
        let (min, max) = bounds(&[f]).unwrap();
        assert_eq!(min, Point::new(-2.0, -2.0));
        assert_eq!(max, Point::new(12.0, 12.0));
    }
}
