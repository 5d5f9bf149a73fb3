//! Pairwise crossing of shape boundaries.
//!
//! Leaf shapes reduce themselves to a [`Boundary`]: either isolated points or straight segments.
//! Crossings are computed between two boundaries with [`geo`]'s segment intersection. A collection
//! operand is never reduced; its children are crossed one by one and the results concatenated.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Coord, Intersects, Line};
use itertools::iproduct;

use crate::error::Result;
use crate::geometry::Shape;
use crate::scalar::MultiPoint;
use crate::validation::ensure_valid;

/// The part of a leaf shape that takes part in crossings.
#[derive(Debug, Clone, PartialEq)]
pub enum Boundary {
    Points(Vec<Coord>),
    Segments(Vec<Line>),
}

/// Crossing points between two leaf boundaries.
///
/// Points come out in `this`-major order. A point reached more than once, e.g. at a vertex shared
/// by two adjacent segments, is reported the first time only.
pub fn boundary_crossing(this: &Boundary, other: &Boundary) -> Vec<Coord> {
    let mut out = Vec::new();

    match (this, other) {
        (Boundary::Points(points), Boundary::Points(others)) => {
            for point in points {
                if others.contains(point) {
                    push_unique(&mut out, *point);
                }
            }
        }
        (Boundary::Points(points), Boundary::Segments(segments)) => {
            for point in points {
                if segments.iter().any(|segment| segment.intersects(point)) {
                    push_unique(&mut out, *point);
                }
            }
        }
        (Boundary::Segments(segments), Boundary::Points(points)) => {
            for (segment, point) in iproduct!(segments, points) {
                if segment.intersects(point) {
                    push_unique(&mut out, *point);
                }
            }
        }
        (Boundary::Segments(segments), Boundary::Segments(others)) => {
            for (segment, other) in iproduct!(segments, others) {
                match line_intersection(*segment, *other) {
                    Some(LineIntersection::SinglePoint { intersection, .. }) => {
                        push_unique(&mut out, intersection);
                    }
                    Some(LineIntersection::Collinear { intersection }) => {
                        push_unique(&mut out, intersection.start);
                        push_unique(&mut out, intersection.end);
                    }
                    None => {}
                }
            }
        }
    }

    out
}

/// Cross a leaf boundary with any shape.
///
/// When `other` is a collection, each child is validated and crossed in order, and the per-child
/// results are concatenated without removing duplicates.
pub(crate) fn leaf_crossing(this: &Boundary, other: &Shape) -> Result<Vec<Coord>> {
    match other {
        Shape::GeometryCollection(gc) => {
            let mut out = Vec::new();
            for child in gc.iter() {
                ensure_valid(child, "other")?;
                out.extend(leaf_crossing(this, child)?);
            }
            Ok(out)
        }
        leaf => Ok(leaf
            .boundary()
            .map(|boundary| boundary_crossing(this, &boundary))
            .unwrap_or_default()),
    }
}

/// The crossing of a valid leaf with `other`, as a fresh [`MultiPoint`].
pub(crate) fn crossing_with(this: &Boundary, other: &Shape) -> Result<MultiPoint> {
    ensure_valid(other, "other")?;
    Ok(leaf_crossing(this, other)?.into_iter().collect())
}

fn push_unique(out: &mut Vec<Coord>, coord: Coord) {
    if !out.contains(&coord) {
        out.push(coord);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::coord;

    fn segments(coords: &[(f64, f64)]) -> Boundary {
        Boundary::Segments(
            coords
                .windows(2)
                .map(|pair| Line::new(pair[0], pair[1]))
                .collect(),
        )
    }

    #[test]
    fn x_crossing() {
        let a = segments(&[(0., 0.), (2., 2.)]);
        let b = segments(&[(0., 2.), (2., 0.)]);

        let out = boundary_crossing(&a, &b);
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].x, 1.0);
        assert_relative_eq!(out[0].y, 1.0);
    }

    #[test]
    fn disjoint() {
        let a = segments(&[(0., 0.), (1., 0.)]);
        let b = segments(&[(0., 1.), (1., 1.)]);
        assert!(boundary_crossing(&a, &b).is_empty());
    }

    #[test]
    fn collinear_overlap_reports_both_ends() {
        let a = segments(&[(0., 0.), (4., 0.)]);
        let b = segments(&[(1., 0.), (6., 0.)]);

        let out = boundary_crossing(&a, &b);
        assert_eq!(out.len(), 2);
        assert!(out.contains(&coord! { x: 1., y: 0. }));
        assert!(out.contains(&coord! { x: 4., y: 0. }));
    }

    #[test]
    fn shared_vertex_reported_once() {
        // The vertical line passes through the vertex joining the two segments of `a`.
        let a = segments(&[(0., 0.), (1., 0.), (2., 0.)]);
        let b = segments(&[(1., -1.), (1., 1.)]);

        assert_eq!(boundary_crossing(&a, &b), vec![coord! { x: 1., y: 0. }]);
    }

    #[test]
    fn point_on_segment() {
        let points = Boundary::Points(vec![coord! { x: 1., y: 0. }, coord! { x: 5., y: 5. }]);
        let line = segments(&[(0., 0.), (2., 0.)]);

        assert_eq!(
            boundary_crossing(&points, &line),
            vec![coord! { x: 1., y: 0. }]
        );
        assert_eq!(
            boundary_crossing(&line, &points),
            vec![coord! { x: 1., y: 0. }]
        );
    }

    #[test]
    fn coincident_points() {
        let a = Boundary::Points(vec![coord! { x: 1., y: 1. }, coord! { x: 2., y: 2. }]);
        let b = Boundary::Points(vec![coord! { x: 2., y: 2. }]);
        assert_eq!(boundary_crossing(&a, &b), vec![coord! { x: 2., y: 2. }]);
    }
}
