//! [`Shape`], the sum type over every geometry kind, and the generic well-known factories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::crossing::Boundary;
use crate::datatypes::GeometryType;
use crate::error::{GeoShapeError, Result};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::read_wkb;
use crate::io::wkt::read_wkt;
use crate::scalar::{GeometryCollection, LineString, MultiPoint, Point, Polygon};
use crate::trait_::ShapeTrait;
use crate::validation::{ValidationMode, ValidationResult};

/// A shape of any supported kind.
///
/// The variant is fixed at construction. Collections own their children, so a `Shape` is always a
/// tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    Polygon(Polygon),
    GeometryCollection(GeometryCollection),
}

impl Shape {
    /// Parse WKT text into a shape of whichever kind the text declares.
    pub fn from_wkt(text: &str) -> Result<Self> {
        read_wkt(text)
    }

    /// Parse a WKB blob into a shape of whichever kind the blob declares.
    pub fn from_wkb(buf: &[u8]) -> Result<Self> {
        read_wkb(buf)
    }

    /// The crossing boundary of a leaf shape. `None` for collections, which delegate to their
    /// children instead.
    pub(crate) fn boundary(&self) -> Option<Boundary> {
        match self {
            Shape::Point(geom) => Some(geom.boundary()),
            Shape::MultiPoint(geom) => Some(geom.boundary()),
            Shape::LineString(geom) => Some(geom.boundary()),
            Shape::Polygon(geom) => Some(geom.boundary()),
            Shape::GeometryCollection(_) => None,
        }
    }
}

impl ShapeTrait for Shape {
    fn geometry_type(&self) -> GeometryType {
        match self {
            Shape::Point(geom) => geom.geometry_type(),
            Shape::MultiPoint(geom) => geom.geometry_type(),
            Shape::LineString(geom) => geom.geometry_type(),
            Shape::Polygon(geom) => geom.geometry_type(),
            Shape::GeometryCollection(geom) => geom.geometry_type(),
        }
    }

    fn validate(&self, mode: ValidationMode) -> ValidationResult {
        match self {
            Shape::Point(geom) => geom.validate(mode),
            Shape::MultiPoint(geom) => geom.validate(mode),
            Shape::LineString(geom) => geom.validate(mode),
            Shape::Polygon(geom) => geom.validate(mode),
            Shape::GeometryCollection(geom) => geom.validate(mode),
        }
    }

    fn write_wkt<W: std::fmt::Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            Shape::Point(geom) => geom.write_wkt(writer),
            Shape::MultiPoint(geom) => geom.write_wkt(writer),
            Shape::LineString(geom) => geom.write_wkt(writer),
            Shape::Polygon(geom) => geom.write_wkt(writer),
            Shape::GeometryCollection(geom) => geom.write_wkt(writer),
        }
    }

    fn wkb_size(&self) -> usize {
        match self {
            Shape::Point(geom) => geom.wkb_size(),
            Shape::MultiPoint(geom) => geom.wkb_size(),
            Shape::LineString(geom) => geom.wkb_size(),
            Shape::Polygon(geom) => geom.wkb_size(),
            Shape::GeometryCollection(geom) => geom.wkb_size(),
        }
    }

    fn write_wkb<W: std::io::Write>(&self, writer: &mut W, byte_order: Endianness) -> Result<()> {
        match self {
            Shape::Point(geom) => geom.write_wkb(writer, byte_order),
            Shape::MultiPoint(geom) => geom.write_wkb(writer, byte_order),
            Shape::LineString(geom) => geom.write_wkb(writer, byte_order),
            Shape::Polygon(geom) => geom.write_wkb(writer, byte_order),
            Shape::GeometryCollection(geom) => geom.write_wkb(writer, byte_order),
        }
    }

    fn crossing(&self, other: &Shape) -> Result<MultiPoint> {
        match self {
            Shape::Point(geom) => geom.crossing(other),
            Shape::MultiPoint(geom) => geom.crossing(other),
            Shape::LineString(geom) => geom.crossing(other),
            Shape::Polygon(geom) => geom.crossing(other),
            Shape::GeometryCollection(geom) => geom.crossing(other),
        }
    }
}

impl FromStr for Shape {
    type Err = GeoShapeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_wkt(s)
    }
}

/// Implements the conversions between [`Shape`] and one of its variant types.
macro_rules! impl_shape_variant {
    ($variant:ident) => {
        impl From<$variant> for Shape {
            fn from(value: $variant) -> Self {
                Shape::$variant(value)
            }
        }

        impl TryFrom<Shape> for $variant {
            type Error = GeoShapeError;

            fn try_from(value: Shape) -> Result<Self> {
                Self::from_shape(value, "shape")
            }
        }

        impl $variant {
            /// Unwrap `value` if it is of this variant, reporting a mismatch against `name`.
            pub(crate) fn from_shape(value: Shape, name: &'static str) -> Result<Self> {
                match value {
                    Shape::$variant(geom) => Ok(geom),
                    other => Err(GeoShapeError::malformed(
                        name,
                        format!(
                            "expected {}, found {}",
                            GeometryType::$variant,
                            other.geometry_type()
                        ),
                    )),
                }
            }
        }
    };
}

impl_shape_variant!(Point);
impl_shape_variant!(MultiPoint);
impl_shape_variant!(LineString);
impl_shape_variant!(Polygon);
impl_shape_variant!(GeometryCollection);

/// Implements `from_wkt` and `from_wkb` for a leaf variant on top of the generic factories.
macro_rules! impl_well_known_constructors {
    ($variant:ident) => {
        impl $variant {
            /// Parse WKT text that must describe this geometry kind.
            pub fn from_wkt(text: &str) -> Result<Self> {
                Self::from_shape(read_wkt(text)?, "wkt")
            }

            /// Parse a WKB blob that must describe this geometry kind.
            pub fn from_wkb(buf: &[u8]) -> Result<Self> {
                Self::from_shape(read_wkb(buf)?, "wkb")
            }
        }
    };
}

impl_well_known_constructors!(Point);
impl_well_known_constructors!(MultiPoint);
impl_well_known_constructors!(LineString);
impl_well_known_constructors!(Polygon);
