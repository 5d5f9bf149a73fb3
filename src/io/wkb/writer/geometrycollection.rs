use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::io::wkb::common::{write_count, write_header, Endianness, HEADER_SIZE};
use crate::scalar::GeometryCollection;
use crate::trait_::ShapeTrait;

/// The byte length of a WKBGeometryCollection
pub fn geometry_collection_wkb_size(geom: &GeometryCollection) -> usize {
    let mut sum = HEADER_SIZE + 4;

    for inner_geom in geom.iter() {
        sum += inner_geom.wkb_size();
    }

    sum
}

/// Write a GeometryCollection geometry to a Writer encoded as WKB
///
/// The layout is the byte order tag, the type code, the number of children, then every child's
/// own WKB back to back in collection order.
pub fn write_geometry_collection_as_wkb<W: Write>(
    writer: &mut W,
    geom: &GeometryCollection,
    byte_order: Endianness,
) -> Result<()> {
    write_header(writer, GeometryType::GeometryCollection, byte_order)?;

    // numGeometries
    write_count(writer, geom.len(), byte_order)?;

    for inner_geom in geom.iter() {
        inner_geom.write_wkb(writer, byte_order)?;
    }

    Ok(())
}
