//! Codecs between shapes and the well-known interchange formats.

pub mod wkb;
pub mod wkt;
