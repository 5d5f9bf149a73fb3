use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::algorithm::crossing::{crossing_with, Boundary};
use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::Shape;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::writer::{multi_point_wkb_size, write_multi_point_as_wkb};
use crate::io::wkt::multi_point_to_wkt;
use crate::scalar::Point;
use crate::trait_::ShapeTrait;
use crate::validation::{ensure_valid, ValidationMode, ValidationResult};

/// An ordered set of points.
///
/// This is also the result type of [`ShapeTrait::crossing`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn push(&mut self, point: Point) {
        self.0.push(point)
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }

    pub(crate) fn boundary(&self) -> Boundary {
        Boundary::Points(self.0.iter().map(Point::coord).collect())
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<Coord> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self(iter.into_iter().map(Point::from).collect())
    }
}

impl Extend<Point> for MultiPoint {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl IntoIterator for MultiPoint {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiPoint {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl ShapeTrait for MultiPoint {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }

    fn validate(&self, mode: ValidationMode) -> ValidationResult {
        for (i, point) in self.0.iter().enumerate() {
            if point.is_empty() {
                return ValidationResult::failure(format!("member {i} is an empty point"));
            }
            let result = point.validate(mode);
            if !result.is_valid() {
                return ValidationResult::failure(format!("member {i}: {}", result.message()));
            }
        }
        ValidationResult::success()
    }

    fn write_wkt<W: std::fmt::Write>(&self, writer: &mut W) -> Result<()> {
        ensure_valid(self, "self")?;
        multi_point_to_wkt(self, writer)?;
        Ok(())
    }

    fn wkb_size(&self) -> usize {
        multi_point_wkb_size(self)
    }

    fn write_wkb<W: std::io::Write>(&self, writer: &mut W, byte_order: Endianness) -> Result<()> {
        ensure_valid(self, "self")?;
        write_multi_point_as_wkb(writer, self, byte_order)
    }

    fn crossing(&self, other: &Shape) -> Result<MultiPoint> {
        ensure_valid(self, "self")?;
        crossing_with(&self.boundary(), other)
    }
}
