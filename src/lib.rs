//! A small vector geometry kernel: points, line strings, polygons, multi points and arbitrarily
//! nested geometry collections, with WKT and WKB encoding and boundary crossing.
//!
//! ```
//! use geoshape::{GeometryCollection, Shape, ShapeTrait};
//! use geoshape::scalar::Point;
//!
//! let gc: GeometryCollection = vec![Shape::from(Point::new(1., 2.))].into();
//! assert_eq!(gc.to_wkt().unwrap(), "GEOMETRYCOLLECTION(POINT(1.0 2.0))");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{GeoShapeError, Result};
pub use feature::Feature;
pub use geometry::Shape;
pub use io::wkb::Endianness;
pub use scalar::GeometryCollection;
pub use trait_::ShapeTrait;
pub use validation::{ValidationMode, ValidationResult};

pub mod algorithm;
pub mod datatypes;
pub mod error;
pub mod feature;
pub mod geometry;
pub mod io;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
pub mod validation;
