use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::datatypes::GeometryType;
use crate::error::{GeoShapeError, Result};
use crate::feature::Feature;
use crate::geometry::Shape;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::read_wkb;
use crate::io::wkb::writer::{geometry_collection_wkb_size, write_geometry_collection_as_wkb};
use crate::io::wkt::{geometry_collection_to_wkt, read_wkt};
use crate::scalar::MultiPoint;
use crate::trait_::ShapeTrait;
use crate::validation::{ensure_valid, require, ValidationMode, ValidationResult};

/// An ordered collection of shapes of any kind, including other collections.
///
/// Children keep their insertion order in WKT and WKB output. The collection owns its children;
/// after construction they are only exposed read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection(Vec<Shape>);

impl GeometryCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from a possibly absent sequence of shapes, in iteration order.
    ///
    /// Fails with [`GeoShapeError::ArgumentNull`] when `shapes` is `None`.
    pub fn try_from_shapes<I>(shapes: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Shape>,
    {
        Ok(require(shapes, "shapes")?.into_iter().collect())
    }

    /// Build a collection from the shapes of a possibly absent sequence of features, in iteration
    /// order. Feature properties are dropped.
    ///
    /// Fails with [`GeoShapeError::ArgumentNull`] when `features` is `None`.
    pub fn try_from_features<I>(features: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = Feature>,
    {
        Ok(require(features, "features")?
            .into_iter()
            .map(Feature::into_shape)
            .collect())
    }

    /// Parse WKT text that must describe a `GEOMETRYCOLLECTION`.
    ///
    /// Blank text fails with [`GeoShapeError::ArgumentNull`]. Text that does not parse, or parses
    /// into another geometry kind, fails with [`GeoShapeError::MalformedInput`].
    pub fn from_wkt(text: &str) -> Result<Self> {
        Self::from_shape(read_wkt(text)?, "wkt")
    }

    /// Parse a WKB blob that must describe a `GEOMETRYCOLLECTION`.
    ///
    /// Empty bytes fail with [`GeoShapeError::ArgumentNull`]. Bytes that do not decode, or decode
    /// into another geometry kind, fail with [`GeoShapeError::MalformedInput`].
    pub fn from_wkb(buf: &[u8]) -> Result<Self> {
        Self::from_shape(read_wkb(buf)?, "wkb")
    }

    /// The children, in insertion order.
    pub fn geometries(&self) -> &[Shape] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.0.iter()
    }

    /// Append a child while building the collection.
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.0.push(shape.into())
    }

    pub fn into_inner(self) -> Vec<Shape> {
        self.0
    }
}

impl From<Vec<Shape>> for GeometryCollection {
    fn from(value: Vec<Shape>) -> Self {
        Self(value)
    }
}

impl FromIterator<Shape> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for GeometryCollection {
    type Item = Shape;
    type IntoIter = std::vec::IntoIter<Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GeometryCollection {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for GeometryCollection {
    type Err = GeoShapeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_wkt(s)
    }
}

impl ShapeTrait for GeometryCollection {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::GeometryCollection
    }

    /// A collection has no constraints of its own and always validates. Children are not
    /// inspected; an invalid child surfaces when the collection is serialized or crossed.
    fn validate(&self, _mode: ValidationMode) -> ValidationResult {
        ValidationResult::success()
    }

    fn write_wkt<W: std::fmt::Write>(&self, writer: &mut W) -> Result<()> {
        ensure_valid(self, "self")?;
        geometry_collection_to_wkt(self, writer)
    }

    fn wkb_size(&self) -> usize {
        geometry_collection_wkb_size(self)
    }

    fn write_wkb<W: std::io::Write>(&self, writer: &mut W, byte_order: Endianness) -> Result<()> {
        ensure_valid(self, "self")?;
        write_geometry_collection_as_wkb(writer, self, byte_order)
    }

    /// Concatenate the crossings of every child with `other`, in child order.
    ///
    /// Coincident points reported by different children are all kept. The first child error
    /// aborts the whole operation.
    fn crossing(&self, other: &Shape) -> Result<MultiPoint> {
        ensure_valid(self, "self")?;
        ensure_valid(other, "other")?;

        let mut out = MultiPoint::new();
        for child in self.iter() {
            out.extend(child.crossing(other)?);
        }
        Ok(out)
    }
}
