use std::io::{Read, Write};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datatypes::GeometryType;
use crate::error::{GeoShapeError, Result};

/// Byte order of the multi-byte fields in a WKB blob.
///
/// The discriminant is the tag byte that starts every WKB geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    BigEndian = 0,
    LittleEndian = 1,
}

impl Default for Endianness {
    fn default() -> Self {
        Self::LittleEndian
    }
}

/// The byte length of a WKB header: byte order + geometry type
pub(crate) const HEADER_SIZE: usize = 1 + 4;

/// The byte length of a 2D coordinate
pub(crate) const COORD_SIZE: usize = 2 * 8;

pub(crate) fn write_u32<W: Write>(
    writer: &mut W,
    value: u32,
    byte_order: Endianness,
) -> std::io::Result<()> {
    match byte_order {
        Endianness::BigEndian => writer.write_u32::<BigEndian>(value),
        Endianness::LittleEndian => writer.write_u32::<LittleEndian>(value),
    }
}

pub(crate) fn write_f64<W: Write>(
    writer: &mut W,
    value: f64,
    byte_order: Endianness,
) -> std::io::Result<()> {
    match byte_order {
        Endianness::BigEndian => writer.write_f64::<BigEndian>(value),
        Endianness::LittleEndian => writer.write_f64::<LittleEndian>(value),
    }
}

/// Write the byte order tag followed by the geometry type code.
pub(crate) fn write_header<W: Write>(
    writer: &mut W,
    geometry_type: GeometryType,
    byte_order: Endianness,
) -> Result<()> {
    writer.write_u8(byte_order.into())?;
    write_u32(writer, geometry_type.wkb_code(), byte_order)?;
    Ok(())
}

/// Write a collection length as a WKB count.
pub(crate) fn write_count<W: Write>(
    writer: &mut W,
    count: usize,
    byte_order: Endianness,
) -> Result<()> {
    let count: u32 = count.try_into().map_err(|_| GeoShapeError::Overflow)?;
    write_u32(writer, count, byte_order)?;
    Ok(())
}

pub(crate) fn read_u32<R: Read>(reader: &mut R, byte_order: Endianness) -> std::io::Result<u32> {
    match byte_order {
        Endianness::BigEndian => reader.read_u32::<BigEndian>(),
        Endianness::LittleEndian => reader.read_u32::<LittleEndian>(),
    }
}

pub(crate) fn read_f64<R: Read>(reader: &mut R, byte_order: Endianness) -> std::io::Result<f64> {
    match byte_order {
        Endianness::BigEndian => reader.read_f64::<BigEndian>(),
        Endianness::LittleEndian => reader.read_f64::<LittleEndian>(),
    }
}
