use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::io::wkb::common::{write_count, write_header, Endianness, COORD_SIZE, HEADER_SIZE};
use crate::io::wkb::writer::linestring::write_coords;
use crate::scalar::Polygon;

/// The byte length of a WKBPolygon
pub fn polygon_wkb_size(geom: &Polygon) -> usize {
    let mut sum = HEADER_SIZE + 4;

    for ring in geom.rings() {
        sum += 4 + (ring.coords().len() * COORD_SIZE);
    }

    sum
}

/// Write a Polygon geometry to a Writer encoded as WKB
///
/// A polygon without rings is written with a ring count of zero.
pub fn write_polygon_as_wkb<W: Write>(
    writer: &mut W,
    geom: &Polygon,
    byte_order: Endianness,
) -> Result<()> {
    write_header(writer, GeometryType::Polygon, byte_order)?;

    // numRings
    write_count(writer, geom.rings().len(), byte_order)?;

    for ring in geom.rings() {
        write_coords(writer, ring.coords(), byte_order)?;
    }

    Ok(())
}
