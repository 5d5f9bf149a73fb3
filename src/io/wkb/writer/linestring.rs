use std::io::Write;

use geo::Coord;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::io::wkb::common::{
    write_count, write_f64, write_header, Endianness, COORD_SIZE, HEADER_SIZE,
};
use crate::scalar::LineString;

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &LineString) -> usize {
    HEADER_SIZE + 4 + (geom.coords().len() * COORD_SIZE)
}

/// Write a LineString geometry to a Writer encoded as WKB
pub fn write_line_string_as_wkb<W: Write>(
    writer: &mut W,
    geom: &LineString,
    byte_order: Endianness,
) -> Result<()> {
    write_header(writer, GeometryType::LineString, byte_order)?;
    write_coords(writer, geom.coords(), byte_order)
}

/// Write a point count followed by the coordinates. Shared with polygon rings.
pub(super) fn write_coords<W: Write>(
    writer: &mut W,
    coords: &[Coord],
    byte_order: Endianness,
) -> Result<()> {
    // numPoints
    write_count(writer, coords.len(), byte_order)?;

    for coord in coords {
        write_f64(writer, coord.x, byte_order)?;
        write_f64(writer, coord.y, byte_order)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::ls0;

    #[test]
    fn layout() {
        let geom = ls0();
        let mut buf = vec![];
        write_line_string_as_wkb(&mut buf, &geom, Endianness::LittleEndian).unwrap();

        assert_eq!(buf.len(), line_string_wkb_size(&geom));
        assert_eq!(&buf[..9], &[1, 2, 0, 0, 0, 2, 0, 0, 0]);
        assert_eq!(&buf[25..33], &2.0f64.to_le_bytes());
    }
}
