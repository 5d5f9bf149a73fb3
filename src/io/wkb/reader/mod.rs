//! Decoding of WKB bytes into [`Shape`]s.
//!
//! Every geometry, nested ones included, starts with its own byte order tag, so a single blob may
//! mix byte orders.

use std::io::{Cursor, Read};

use byteorder::ReadBytesExt;
use geo::Coord;
use log::trace;
use num_enum::TryFromPrimitive;

use crate::datatypes::GeometryType;
use crate::error::{GeoShapeError, Result};
use crate::geometry::Shape;
use crate::io::wkb::common::{read_f64, read_u32, Endianness, COORD_SIZE, HEADER_SIZE};
use crate::scalar::{GeometryCollection, LineString, MultiPoint, Polygon};
use crate::trait_::ShapeTrait;
use crate::validation::{check_decoded, check_wkb};

const NAME: &str = "wkb";

/// Parse a WKB blob into a [`Shape`] of whichever variant its type code declares.
///
/// The whole buffer must be consumed by exactly one geometry.
pub fn read_wkb(buf: &[u8]) -> Result<Shape> {
    check_wkb(buf, NAME)?;

    let mut reader = Cursor::new(buf);
    let shape = read_geometry(&mut reader)?;

    let consumed = reader.position() as usize;
    if consumed != buf.len() {
        return Err(GeoShapeError::malformed(
            NAME,
            format!(
                "{} trailing bytes after the geometry",
                buf.len() - consumed
            ),
        ));
    }

    Ok(shape)
}

fn read_geometry(reader: &mut Cursor<&[u8]>) -> Result<Shape> {
    let tag = reader.read_u8().map_err(truncated)?;
    let byte_order = Endianness::try_from_primitive(tag)
        .map_err(|_| GeoShapeError::malformed(NAME, format!("unknown byte order tag {tag}")))?;
    let code = read_u32(reader, byte_order).map_err(truncated)?;
    let geometry_type = GeometryType::from_wkb_code(code, NAME)?;

    trace!(
        "decoding WKB {geometry_type} at offset {}",
        reader.position() - HEADER_SIZE as u64
    );

    let shape = match geometry_type {
        GeometryType::Point => Shape::Point(read_coord(reader, byte_order)?.into()),
        GeometryType::LineString => Shape::LineString(read_line_string(reader, byte_order)?),
        GeometryType::Polygon => {
            let num_rings = read_count(reader, byte_order, 4)?;
            let mut rings = Vec::with_capacity(num_rings.capacity);
            for _ in 0..num_rings.count {
                rings.push(read_line_string(reader, byte_order)?);
            }
            Shape::Polygon(Polygon::new(rings))
        }
        GeometryType::MultiPoint => {
            let num_points = read_count(reader, byte_order, HEADER_SIZE + COORD_SIZE)?;
            let mut points = Vec::with_capacity(num_points.capacity);
            for _ in 0..num_points.count {
                match read_geometry(reader)? {
                    Shape::Point(point) => points.push(point),
                    other => {
                        return Err(GeoShapeError::malformed(
                            NAME,
                            format!("MULTIPOINT member is a {}", other.geometry_type()),
                        ))
                    }
                }
            }
            Shape::MultiPoint(MultiPoint::from(points))
        }
        GeometryType::GeometryCollection => {
            let num_geometries = read_count(reader, byte_order, HEADER_SIZE)?;
            let mut geometries = Vec::with_capacity(num_geometries.capacity);
            for _ in 0..num_geometries.count {
                geometries.push(read_geometry(reader)?);
            }
            Shape::GeometryCollection(GeometryCollection::from(geometries))
        }
    };

    check_decoded(shape, NAME)
}

fn read_coord<R: Read>(reader: &mut R, byte_order: Endianness) -> Result<Coord> {
    let x = read_f64(reader, byte_order).map_err(truncated)?;
    let y = read_f64(reader, byte_order).map_err(truncated)?;
    Ok(Coord { x, y })
}

fn read_line_string(reader: &mut Cursor<&[u8]>, byte_order: Endianness) -> Result<LineString> {
    let num_points = read_count(reader, byte_order, COORD_SIZE)?;
    let mut coords = Vec::with_capacity(num_points.capacity);
    for _ in 0..num_points.count {
        coords.push(read_coord(reader, byte_order)?);
    }
    Ok(LineString::new(coords))
}

struct Count {
    count: u32,
    /// How many elements to pre-allocate: never more than the rest of the buffer could hold.
    capacity: usize,
}

fn read_count(
    reader: &mut Cursor<&[u8]>,
    byte_order: Endianness,
    min_element_size: usize,
) -> Result<Count> {
    let count = read_u32(reader, byte_order).map_err(truncated)?;
    let remaining = reader.get_ref().len() - reader.position() as usize;
    Ok(Count {
        count,
        capacity: (count as usize).min(remaining / min_element_size),
    })
}

fn truncated(err: std::io::Error) -> GeoShapeError {
    GeoShapeError::malformed(NAME, format!("truncated WKB buffer: {err}"))
}
