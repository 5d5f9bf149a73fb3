use std::fmt::{Error, Write};

use geo::Coord;

use crate::scalar::{GeometryCollection, LineString, MultiPoint, Point, Polygon};
use crate::trait_::ShapeTrait;

/// Write a Point as WKT. The empty point is written as `POINT EMPTY`.
pub fn point_to_wkt<W: Write>(point: &Point, writer: &mut W) -> Result<(), Error> {
    writer.write_str("POINT")?;

    if point.is_empty() {
        writer.write_str(" EMPTY")?;
        return Ok(());
    }

    add_point(writer, point.coord())
}

pub fn linestring_to_wkt<W: Write>(linestring: &LineString, writer: &mut W) -> Result<(), Error> {
    writer.write_str("LINESTRING")?;

    if linestring.coords().is_empty() {
        writer.write_str(" EMPTY")?;
        return Ok(());
    }

    add_coords(writer, linestring.coords())
}

pub fn polygon_to_wkt<W: Write>(polygon: &Polygon, writer: &mut W) -> Result<(), Error> {
    writer.write_str("POLYGON")?;

    let mut rings = polygon.rings().iter();

    if let Some(exterior) = rings.next() {
        writer.write_str("(")?;
        add_coords(writer, exterior.coords())?;

        for interior in rings {
            writer.write_str(",")?;
            add_coords(writer, interior.coords())?;
        }

        writer.write_str(")")?;
    } else {
        writer.write_str(" EMPTY")?;
    }

    Ok(())
}

pub fn multi_point_to_wkt<W: Write>(multi_point: &MultiPoint, writer: &mut W) -> Result<(), Error> {
    writer.write_str("MULTIPOINT")?;

    let mut points = multi_point.points().iter();

    if let Some(first) = points.next() {
        writer.write_str("(")?;

        add_point(writer, first.coord())?;

        for point in points {
            writer.write_str(",")?;
            add_point(writer, point.coord())?;
        }

        writer.write_str(")")?;
    } else {
        writer.write_str(" EMPTY")?;
    }

    Ok(())
}

/// Write a GeometryCollection as WKT, each child in order through its own
/// [`ShapeTrait::write_wkt`].
///
/// An empty collection is written as `GEOMETRYCOLLECTION()`.
pub fn geometry_collection_to_wkt<W: Write>(
    gc: &GeometryCollection,
    writer: &mut W,
) -> crate::error::Result<()> {
    writer.write_str("GEOMETRYCOLLECTION(")?;

    let mut geometries = gc.iter();

    if let Some(first) = geometries.next() {
        first.write_wkt(writer)?;

        for geom in geometries {
            writer.write_str(",")?;
            geom.write_wkt(writer)?;
        }
    }

    writer.write_str(")")?;

    Ok(())
}

fn add_coord<W: Write>(writer: &mut W, coord: Coord) -> Result<(), Error> {
    // x
    let mut buffer = ryu::Buffer::new();
    writer.write_str(buffer.format(coord.x))?;

    writer.write_str(" ")?;

    // y
    let mut buffer = ryu::Buffer::new();
    writer.write_str(buffer.format(coord.y))?;

    Ok(())
}

fn add_point<W: Write>(writer: &mut W, coord: Coord) -> Result<(), Error> {
    writer.write_str("(")?;
    add_coord(writer, coord)?;
    writer.write_str(")")?;

    Ok(())
}

fn add_coords<W: Write>(writer: &mut W, coords: &[Coord]) -> Result<(), Error> {
    writer.write_str("(")?;

    let mut coords = coords.iter();
    if let Some(first) = coords.next() {
        add_coord(writer, *first)?;
    }

    for coord in coords {
        writer.write_str(",")?;
        add_coord(writer, *coord)?;
    }

    writer.write_str(")")?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, point, polygon};

    #[test]
    fn point_wkt() {
        let mut out = String::new();
        point_to_wkt(&point::p0(), &mut out).unwrap();
        assert_eq!(out, "POINT(0.0 1.0)");

        let mut out = String::new();
        point_to_wkt(&Point::empty(), &mut out).unwrap();
        assert_eq!(out, "POINT EMPTY");
    }

    #[test]
    fn linestring_wkt() {
        let mut out = String::new();
        linestring_to_wkt(&linestring::ls0(), &mut out).unwrap();
        assert_eq!(out, "LINESTRING(0.0 0.0,2.0 2.0)");
    }

    #[test]
    fn polygon_with_hole() {
        let mut out = String::new();
        polygon_to_wkt(&polygon::with_hole(), &mut out).unwrap();
        assert_eq!(
            out,
            "POLYGON((0.0 0.0,10.0 0.0,10.0 10.0,0.0 10.0,0.0 0.0),(2.0 2.0,4.0 2.0,4.0 4.0,2.0 2.0))"
        );
    }

    #[test]
    fn empty_multi_point() {
        let mut out = String::new();
        multi_point_to_wkt(&MultiPoint::default(), &mut out).unwrap();
        assert_eq!(out, "MULTIPOINT EMPTY");

        let mut out = String::new();
        let mp: MultiPoint = vec![point::p0(), point::p1()].into();
        multi_point_to_wkt(&mp, &mut out).unwrap();
        assert_eq!(out, "MULTIPOINT((0.0 1.0),(1.0 2.0))");
    }

    #[test]
    fn negative_and_fractional() {
        let mut out = String::new();
        point_to_wkt(&Point::new(-0.5, 1e-3), &mut out).unwrap();
        assert_eq!(out, "POINT(-0.5 0.001)");
    }
}
