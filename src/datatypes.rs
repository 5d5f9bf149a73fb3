//! The closed set of geometry kinds a [`Shape`](crate::geometry::Shape) can be.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{GeoShapeError, Result};

/// Geometric type identity of a shape.
///
/// The discriminants are the ISO WKB type codes for 2D geometries.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, Serialize, Deserialize,
)]
#[repr(u32)]
pub enum GeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    GeometryCollection = 7,
}

impl GeometryType {
    /// The upper-case WKT keyword for this type.
    pub fn wkt_tag(&self) -> &'static str {
        use GeometryType::*;
        match self {
            Point => "POINT",
            LineString => "LINESTRING",
            Polygon => "POLYGON",
            MultiPoint => "MULTIPOINT",
            GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// The WKB type code for this type.
    pub fn wkb_code(&self) -> u32 {
        (*self).into()
    }

    /// Resolve a WKB type code read from the argument `name`.
    pub fn from_wkb_code(code: u32, name: &'static str) -> Result<Self> {
        Self::try_from_primitive(code)
            .map_err(|_| GeoShapeError::malformed(name, format!("unsupported WKB type code {code}")))
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wkt_tag())
    }
}
