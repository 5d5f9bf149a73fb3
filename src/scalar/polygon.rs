use serde::{Deserialize, Serialize};

use crate::algorithm::crossing::{crossing_with, Boundary};
use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::Shape;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::writer::{polygon_wkb_size, write_polygon_as_wkb};
use crate::io::wkt::polygon_to_wkt;
use crate::scalar::{LineString, MultiPoint};
use crate::trait_::ShapeTrait;
use crate::validation::{ensure_valid, ValidationMode, ValidationResult};

/// A polygon given by its rings: the exterior first, then any interiors.
///
/// A polygon without rings is the empty polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon(Vec<LineString>);

impl Polygon {
    pub fn new(rings: Vec<LineString>) -> Self {
        Self(rings)
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LineString] {
        &self.0
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.0.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ring segments in ring order.
    pub(crate) fn boundary(&self) -> Boundary {
        Boundary::Segments(self.0.iter().flat_map(LineString::lines).collect())
    }
}

impl From<geo::Polygon> for Polygon {
    fn from(value: geo::Polygon) -> Self {
        let (exterior, interiors) = value.into_inner();
        let mut rings = Vec::with_capacity(1 + interiors.len());
        rings.push(exterior.into());
        rings.extend(interiors.into_iter().map(LineString::from));
        Self(rings)
    }
}

impl ShapeTrait for Polygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    fn validate(&self, mode: ValidationMode) -> ValidationResult {
        for (i, ring) in self.0.iter().enumerate() {
            if let Some(message) = ring.validate_coords(4, mode) {
                return ValidationResult::failure(format!("ring {i} has {message}"));
            }
            if !ring.is_closed() {
                return ValidationResult::failure(format!("ring {i} is not closed"));
            }
        }
        ValidationResult::success()
    }

    fn write_wkt<W: std::fmt::Write>(&self, writer: &mut W) -> Result<()> {
        ensure_valid(self, "self")?;
        polygon_to_wkt(self, writer)?;
        Ok(())
    }

    fn wkb_size(&self) -> usize {
        polygon_wkb_size(self)
    }

    fn write_wkb<W: std::io::Write>(&self, writer: &mut W, byte_order: Endianness) -> Result<()> {
        ensure_valid(self, "self")?;
        write_polygon_as_wkb(writer, self, byte_order)
    }

    fn crossing(&self, other: &Shape) -> Result<MultiPoint> {
        ensure_valid(self, "self")?;
        crossing_with(&self.boundary(), other)
    }
}
