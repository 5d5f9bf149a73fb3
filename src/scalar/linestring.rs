use geo::{Coord, Line};
use serde::{Deserialize, Serialize};

use crate::algorithm::crossing::{crossing_with, Boundary};
use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::Shape;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::writer::{line_string_wkb_size, write_line_string_as_wkb};
use crate::io::wkt::linestring_to_wkt;
use crate::scalar::MultiPoint;
use crate::trait_::ShapeTrait;
use crate::validation::{ensure_valid, ValidationMode, ValidationResult};

/// An ordered sequence of coordinates joined by straight segments.
///
/// Also used for the rings of a [`Polygon`](crate::scalar::Polygon).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString(Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    /// The segments between consecutive coordinates.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.0.windows(2).map(|pair| Line::new(pair[0], pair[1]))
    }

    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    pub(crate) fn boundary(&self) -> Boundary {
        Boundary::Segments(self.lines().collect())
    }

    /// Checks shared by line strings and polygon rings.
    pub(crate) fn validate_coords(&self, min_coords: usize, mode: ValidationMode) -> Option<String> {
        if self.0.len() < min_coords {
            return Some(format!(
                "{} coordinates, at least {min_coords} required",
                self.0.len()
            ));
        }

        if let Some(i) = self
            .0
            .iter()
            .position(|c| !(c.x.is_finite() && c.y.is_finite()))
        {
            return Some(format!("coordinate {i} is not finite"));
        }

        if mode == ValidationMode::Strict {
            if let Some(i) = self.0.windows(2).position(|pair| pair[0] == pair[1]) {
                return Some(format!("coordinate {} repeats coordinate {i}", i + 1));
            }
        }

        None
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self(value)
    }
}

impl From<Vec<(f64, f64)>> for LineString {
    fn from(value: Vec<(f64, f64)>) -> Self {
        Self(value.into_iter().map(Coord::from).collect())
    }
}

impl From<geo::LineString> for LineString {
    fn from(value: geo::LineString) -> Self {
        Self(value.0)
    }
}

impl ShapeTrait for LineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    fn validate(&self, mode: ValidationMode) -> ValidationResult {
        match self.validate_coords(2, mode) {
            Some(message) => ValidationResult::failure(format!("line string has {message}")),
            None => ValidationResult::success(),
        }
    }

    fn write_wkt<W: std::fmt::Write>(&self, writer: &mut W) -> Result<()> {
        ensure_valid(self, "self")?;
        linestring_to_wkt(self, writer)?;
        Ok(())
    }

    fn wkb_size(&self) -> usize {
        line_string_wkb_size(self)
    }

    fn write_wkb<W: std::io::Write>(&self, writer: &mut W, byte_order: Endianness) -> Result<()> {
        ensure_valid(self, "self")?;
        write_line_string_as_wkb(writer, self, byte_order)
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
    use crate::scalar::Point;
    use crate::test::linestring::{ls0, ls1};
    use approx::assert_relative_eq;

    #[test]
    fn too_short() {
        let geom = LineString::from(vec![(0., 0.)]);
        let result = geom.validate(ValidationMode::Structural);
        assert_eq!(
            result.message(),
            "line string has 1 coordinates, at least 2 required"
        );
        assert!(matches!(
            geom.to_wkb(Endianness::LittleEndian),
            Err(GeoShapeError::InvalidShapeState { operand: "self", .. })
        ));
    }

    #[test]
    fn repeated_coordinate_is_strict_only() {
        let geom = LineString::from(vec![(0., 0.), (1., 1.), (1., 1.)]);
        assert!(geom.validate(ValidationMode::Structural).is_valid());
        assert!(!geom.validate(ValidationMode::Strict).is_valid());
    }

    #[test]
    fn crossing_lines() {
        let out = ls0().crossing(&Shape::from(ls1())).unwrap();
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out.points()[0].x(), 1.0);
        assert_relative_eq!(out.points()[0].y(), 1.0);
    }

    #[test]
    fn crossing_point() {
        let out = ls0().crossing(&Shape::from(Point::new(2., 2.))).unwrap();
        assert_eq!(out.points(), &[Point::new(2., 2.)]);
    }

    #[test]
    fn closed() {
        assert!(!ls0().is_closed());
        assert!(LineString::from(vec![(0., 0.), (1., 0.), (0., 0.)]).is_closed());
        assert!(!LineString::default().is_closed());
    }
}
