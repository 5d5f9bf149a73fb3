use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::io::wkb::common::{write_f64, write_header, Endianness, COORD_SIZE, HEADER_SIZE};
use crate::scalar::Point;

/// The byte length of a WKBPoint
pub fn point_wkb_size() -> usize {
    HEADER_SIZE + COORD_SIZE
}

/// Write a Point geometry to a Writer encoded as WKB
///
/// The empty point is written with NaN coordinates.
pub fn write_point_as_wkb<W: Write>(
    writer: &mut W,
    geom: &Point,
    byte_order: Endianness,
) -> Result<()> {
    write_header(writer, GeometryType::Point, byte_order)?;

    write_f64(writer, geom.x(), byte_order)?;
    write_f64(writer, geom.y(), byte_order)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::p1;

    #[test]
    fn little_endian_layout() {
        let mut buf = vec![];
        write_point_as_wkb(&mut buf, &p1(), Endianness::LittleEndian).unwrap();

        assert_eq!(buf.len(), point_wkb_size());
        assert_eq!(&buf[..5], &[1, 1, 0, 0, 0]);
        assert_eq!(&buf[5..13], &1.0f64.to_le_bytes());
        assert_eq!(&buf[13..], &2.0f64.to_le_bytes());
    }

    #[test]
    fn big_endian_layout() {
        let mut buf = vec![];
        write_point_as_wkb(&mut buf, &p1(), Endianness::BigEndian).unwrap();

        assert_eq!(&buf[..5], &[0, 0, 0, 0, 1]);
        assert_eq!(&buf[5..13], &1.0f64.to_be_bytes());
        assert_eq!(&buf[13..], &2.0f64.to_be_bytes());
    }
}
