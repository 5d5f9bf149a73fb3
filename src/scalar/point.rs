use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::algorithm::crossing::{crossing_with, Boundary};
use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::Shape;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::writer::{point_wkb_size, write_point_as_wkb};
use crate::io::wkt::point_to_wkt;
use crate::scalar::MultiPoint;
use crate::trait_::ShapeTrait;
use crate::validation::{ensure_valid, ValidationMode, ValidationResult};

/// A single 2D position.
///
/// A point with both coordinates NaN is the empty point, written `POINT EMPTY` in WKT. All empty
/// points compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point(Coord);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Coord { x, y })
    }

    /// The empty point.
    pub fn empty() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    pub fn is_empty(&self) -> bool {
        self.0.x.is_nan() && self.0.y.is_nan()
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn coord(&self) -> Coord {
        self.0
    }

    pub(crate) fn boundary(&self) -> Boundary {
        if self.is_empty() {
            Boundary::Points(vec![])
        } else {
            Boundary::Points(vec![self.0])
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty()) || self.0 == other.0
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self(value)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        Self(value.0)
    }
}

impl ShapeTrait for Point {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn validate(&self, _mode: ValidationMode) -> ValidationResult {
        if self.is_empty() || (self.0.x.is_finite() && self.0.y.is_finite()) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(format!(
                "point has non-finite coordinates ({}, {})",
                self.0.x, self.0.y
            ))
        }
    }

    fn write_wkt<W: std::fmt::Write>(&self, writer: &mut W) -> Result<()> {
        ensure_valid(self, "self")?;
        point_to_wkt(self, writer)?;
        Ok(())
    }

    fn wkb_size(&self) -> usize {
        point_wkb_size()
    }

    fn write_wkb<W: std::io::Write>(&self, writer: &mut W, byte_order: Endianness) -> Result<()> {
        ensure_valid(self, "self")?;
        write_point_as_wkb(writer, self, byte_order)
    }

    fn crossing(&self, other: &Shape) -> Result<MultiPoint> {
        ensure_valid(self, "self")?;
        crossing_with(&self.boundary(), other)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeoShapeError;
    use crate::test::linestring::ls0;
    use crate::test::point::{p0, p1};
    use crate::test::polygon::square;

    #[test]
    fn validation() {
        assert!(p0().validate(ValidationMode::Strict).is_valid());
        assert!(Point::empty().validate(ValidationMode::Strict).is_valid());

        let half_empty = Point::new(f64::NAN, 1.);
        assert!(!half_empty.validate(ValidationMode::Structural).is_valid());
        assert!(matches!(
            half_empty.to_wkt(),
            Err(GeoShapeError::InvalidShapeState { operand: "self", .. })
        ));
        assert!(!Point::new(f64::INFINITY, 0.)
            .validate(ValidationMode::Structural)
            .is_valid());
    }

    #[test]
    fn empty_points_are_equal() {
        assert_eq!(Point::empty(), Point::empty());
        assert_ne!(Point::empty(), p0());
        assert_ne!(Point::new(f64::NAN, 1.), Point::new(f64::NAN, 1.));
    }

    #[test]
    fn crossing_points() {
        let out = p1().crossing(&Shape::from(p1())).unwrap();
        assert_eq!(out.points(), &[p1()]);

        let out = p0().crossing(&Shape::from(p1())).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn crossing_on_line() {
        let on_line = Point::new(1., 1.);
        let out = on_line.crossing(&Shape::from(ls0())).unwrap();
        assert_eq!(out.points(), &[on_line]);
    }

    #[test]
    fn crossing_on_ring() {
        let on_edge = Point::new(0., 0.5);
        assert_eq!(
            on_edge.crossing(&Shape::from(square())).unwrap().points(),
            &[on_edge]
        );

        // Inside the polygon but not on its boundary
        let inside = Point::new(0.5, 0.5);
        assert!(inside.crossing(&Shape::from(square())).unwrap().is_empty());
    }

    #[test]
    fn empty_point_never_crosses() {
        let out = Point::empty().crossing(&Shape::from(ls0())).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn invalid_other() {
        let bad = Shape::from(crate::scalar::LineString::new(vec![Coord { x: 0., y: 0. }]));
        assert!(matches!(
            p0().crossing(&bad),
            Err(GeoShapeError::InvalidShapeState { operand: "other", .. })
        ));
    }

    #[test]
    fn geo_conversion() {
        let point: Point = geo::point!(x: 1., y: 2.).into();
        assert_eq!(point, p1());
    }
}
