//! Reading and writing of Well-Known Text.

mod reader;
mod writer;

pub use reader::read_wkt;
pub use writer::{
    geometry_collection_to_wkt, linestring_to_wkt, multi_point_to_wkt, point_to_wkt,
    polygon_to_wkt,
};
