//! Reading and writing of ISO-flavored, 2D Well-Known Binary.

pub mod common;
mod reader;
pub(crate) mod writer;

pub use common::Endianness;
pub use reader::read_wkb;
