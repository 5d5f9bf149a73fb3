//! Decoding of WKT text into [`Shape`]s through the [`wkt`] crate.

use std::str::FromStr;

use geo::Coord;
use log::trace;
use wkt::Wkt;

use crate::error::{GeoShapeError, Result};
use crate::geometry::Shape;
use crate::scalar::{GeometryCollection, LineString, MultiPoint, Point, Polygon};
use crate::validation::{check_decoded, check_wkt};

const NAME: &str = "wkt";

/// Parse WKT text into a [`Shape`] of whichever variant its keyword declares.
///
/// Keywords are case-insensitive and whitespace between tokens is optional. An empty parenthesized
/// list such as `GEOMETRYCOLLECTION()` is read as the matching empty geometry.
pub fn read_wkt(text: &str) -> Result<Shape> {
    check_wkt(text, NAME)?;

    let normalized = empty_lists_to_keyword(text);
    let parsed = Wkt::<f64>::from_str(&normalized)
        .map_err(|reason| GeoShapeError::malformed(NAME, reason))?;

    wkt_to_shape(parsed)
}

fn wkt_to_shape(geometry: Wkt<f64>) -> Result<Shape> {
    let shape = match geometry {
        Wkt::Point(point) => {
            trace!("decoding WKT POINT");
            match point.0 {
                Some(coord) => Shape::Point(Point::from(convert_coord(coord)?)),
                None => Shape::Point(Point::empty()),
            }
        }
        Wkt::LineString(line_string) => {
            trace!("decoding WKT LINESTRING");
            Shape::LineString(convert_line_string(line_string)?)
        }
        Wkt::Polygon(polygon) => {
            trace!("decoding WKT POLYGON");
            let rings = polygon
                .0
                .into_iter()
                .map(convert_line_string)
                .collect::<Result<Vec<_>>>()?;
            Shape::Polygon(Polygon::new(rings))
        }
        Wkt::MultiPoint(multi_point) => {
            trace!("decoding WKT MULTIPOINT");
            let points = multi_point
                .0
                .into_iter()
                .map(|point| match point.0 {
                    Some(coord) => Ok(Point::from(convert_coord(coord)?)),
                    None => Ok(Point::empty()),
                })
                .collect::<Result<Vec<_>>>()?;
            Shape::MultiPoint(MultiPoint::from(points))
        }
        Wkt::GeometryCollection(collection) => {
            trace!(
                "decoding WKT GEOMETRYCOLLECTION with {} children",
                collection.0.len()
            );
            let geometries = collection
                .0
                .into_iter()
                .map(wkt_to_shape)
                .collect::<Result<Vec<_>>>()?;
            Shape::GeometryCollection(GeometryCollection::from(geometries))
        }
        _ => {
            return Err(GeoShapeError::malformed(
                NAME,
                "only POINT, LINESTRING, POLYGON, MULTIPOINT and GEOMETRYCOLLECTION are supported",
            ))
        }
    };

    check_decoded(shape, NAME)
}

fn convert_coord(coord: wkt::types::Coord<f64>) -> Result<Coord> {
    if coord.z.is_some() || coord.m.is_some() {
        return Err(GeoShapeError::malformed(
            NAME,
            "only 2D coordinates are supported",
        ));
    }
    Ok(Coord {
        x: coord.x,
        y: coord.y,
    })
}

fn convert_line_string(line_string: wkt::types::LineString<f64>) -> Result<LineString> {
    let coords = line_string
        .0
        .into_iter()
        .map(convert_coord)
        .collect::<Result<Vec<_>>>()?;
    Ok(LineString::new(coords))
}

/// Rewrite every `(` followed only by whitespace and `)` into ` EMPTY`.
///
/// An empty list is never a valid coordinate sequence, so this only changes inputs that would
/// otherwise be rejected.
fn empty_lists_to_keyword(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((start, c)) = chars.next() {
        if c == '(' {
            let rest = &text[start + 1..];
            let inner = rest.len() - rest.trim_start().len();
            if rest[inner..].starts_with(')') {
                out.push_str(" EMPTY");
                // Skip the whitespace and the closing parenthesis.
                for (_, next) in chars.by_ref() {
                    if next == ')' {
                        break;
                    }
                }
                continue;
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::point::p1;

    #[test]
    fn empty_list_rewrite() {
        assert_eq!(
            empty_lists_to_keyword("GEOMETRYCOLLECTION()"),
            "GEOMETRYCOLLECTION EMPTY"
        );
        assert_eq!(
            empty_lists_to_keyword("GEOMETRYCOLLECTION(GEOMETRYCOLLECTION( ),POINT(1 2))"),
            "GEOMETRYCOLLECTION(GEOMETRYCOLLECTION EMPTY,POINT(1 2))"
        );
        assert_eq!(empty_lists_to_keyword("POINT(1 2)"), "POINT(1 2)");
    }

    #[test]
    fn point() {
        assert_eq!(read_wkt("POINT(1 2)").unwrap(), Shape::Point(p1()));
        assert_eq!(read_wkt("point ( 1.0 2.0 )").unwrap(), Shape::Point(p1()));
    }

    #[test]
    fn empty_point() {
        match read_wkt("POINT EMPTY").unwrap() {
            Shape::Point(point) => assert!(point.is_empty()),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_collection_forms() {
        for text in [
            "GEOMETRYCOLLECTION()",
            "GEOMETRYCOLLECTION ( )",
            "GEOMETRYCOLLECTION EMPTY",
            "geometrycollection()",
        ] {
            assert_eq!(
                read_wkt(text).unwrap(),
                Shape::GeometryCollection(GeometryCollection::new()),
                "{text}"
            );
        }
    }

    #[test]
    fn whitespace_between_children() {
        let shape = read_wkt("GEOMETRYCOLLECTION( POINT (1 2) ,\n LINESTRING(0 0, 2 2) )").unwrap();
        let Shape::GeometryCollection(gc) = shape else {
            panic!("expected a collection");
        };
        assert_eq!(gc.len(), 2);
    }

    #[test]
    fn unsupported_type() {
        let err = read_wkt("MULTILINESTRING((0 0,1 1))").unwrap_err();
        assert!(matches!(
            err,
            GeoShapeError::MalformedInput { name: "wkt", .. }
        ));
    }

    #[test]
    fn out_of_range_coordinate() {
        assert!(matches!(
            read_wkt("GEOMETRYCOLLECTION(POINT(1e400 0))"),
            Err(GeoShapeError::MalformedInput { name: "wkt", .. })
        ));
    }

    #[test]
    fn invalid_leaves() {
        for text in [
            "GEOMETRYCOLLECTION(LINESTRING(0 0))",
            "POLYGON((0 0,1 0,1 1,0 1))",
        ] {
            assert!(
                matches!(read_wkt(text), Err(GeoShapeError::MalformedInput { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn three_dimensional() {
        assert!(read_wkt("POINT Z(1 2 3)").is_err());
    }

    #[test]
    fn garbage() {
        assert!(matches!(
            read_wkt("POINT(1 two)"),
            Err(GeoShapeError::MalformedInput { .. })
        ));
        assert!(matches!(
            read_wkt("NOTAGEOMETRY(1 2)"),
            Err(GeoShapeError::MalformedInput { .. })
        ));
    }
}
