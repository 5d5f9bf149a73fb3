//! The concrete shape variants.

mod geometrycollection;
mod linestring;
mod multipoint;
mod point;
mod polygon;

pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multipoint::MultiPoint;
pub use point::Point;
pub use polygon::Polygon;
