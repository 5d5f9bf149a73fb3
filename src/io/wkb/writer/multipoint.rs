use std::io::Write;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::io::wkb::common::{write_count, write_header, Endianness, HEADER_SIZE};
use crate::io::wkb::writer::point::{point_wkb_size, write_point_as_wkb};
use crate::scalar::MultiPoint;

/// The byte length of a WKBMultiPoint
pub fn multi_point_wkb_size(geom: &MultiPoint) -> usize {
    HEADER_SIZE + 4 + (geom.points().len() * point_wkb_size())
}

/// Write a MultiPoint geometry to a Writer encoded as WKB
///
/// Each member is a complete WKBPoint in the same byte order.
pub fn write_multi_point_as_wkb<W: Write>(
    writer: &mut W,
    geom: &MultiPoint,
    byte_order: Endianness,
) -> Result<()> {
    write_header(writer, GeometryType::MultiPoint, byte_order)?;

    // numPoints
    write_count(writer, geom.points().len(), byte_order)?;

    for point in geom.points() {
        write_point_as_wkb(writer, point, byte_order)?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::{p0, p1};

    #[test]
    fn members_carry_headers() {
        let geom: MultiPoint = vec![p0(), p1()].into();
        let mut buf = vec![];
        write_multi_point_as_wkb(&mut buf, &geom, Endianness::LittleEndian).unwrap();

        assert_eq!(buf.len(), multi_point_wkb_size(&geom));
        assert_eq!(&buf[..9], &[1, 4, 0, 0, 0, 2, 0, 0, 0]);
        assert_eq!(&buf[9..14], &[1, 1, 0, 0, 0]);
        assert_eq!(&buf[30..35], &[1, 1, 0, 0, 0]);
    }
}
