use std::io::Cursor;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::Shape;
use crate::io::wkb::common::Endianness;
use crate::scalar::MultiPoint;
use crate::validation::{ValidationMode, ValidationResult};

/// The capability set shared by every shape variant.
///
/// Serialization and crossing require the shape to pass [`ValidationMode::Structural`]
/// validation and fail with
/// [`InvalidShapeState`](crate::error::GeoShapeError::InvalidShapeState) otherwise.
pub trait ShapeTrait {
    /// The geometric type identity of this shape. Fixed for the lifetime of the value.
    fn geometry_type(&self) -> GeometryType;

    /// Check the shape's intrinsic constraints.
    fn validate(&self, mode: ValidationMode) -> ValidationResult;

    /// Write the canonical WKT form of this shape to `writer`.
    fn write_wkt<W: std::fmt::Write>(&self, writer: &mut W) -> Result<()>;

    /// The exact byte length of the WKB form of this shape.
    fn wkb_size(&self) -> usize;

    /// Write the WKB form of this shape to `writer`, with multi-byte fields in `byte_order`.
    fn write_wkb<W: std::io::Write>(&self, writer: &mut W, byte_order: Endianness) -> Result<()>;

    /// All points where this shape and `other` cross.
    ///
    /// The result is a new value and never shares storage with either operand.
    fn crossing(&self, other: &Shape) -> Result<MultiPoint>;

    /// The canonical WKT form of this shape.
    fn to_wkt(&self) -> Result<String> {
        let mut out = String::new();
        self.write_wkt(&mut out)?;
        Ok(out)
    }

    /// The WKB form of this shape.
    ///
    /// Either the whole encoding is returned or an error is; the buffer is dropped on failure.
    fn to_wkb(&self, byte_order: Endianness) -> Result<Vec<u8>> {
        let mut writer = Cursor::new(Vec::with_capacity(self.wkb_size()));
        self.write_wkb(&mut writer, byte_order)?;
        Ok(writer.into_inner())
    }
}
