//! Shape validation and the argument guards that run before parsing or serialization.

use crate::error::{GeoShapeError, Result};
use crate::trait_::ShapeTrait;

/// How thoroughly [`ShapeTrait::validate`] checks a shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidationMode {
    /// Coordinate counts, ring closure and finite coordinates. This is the level every
    /// serialization and crossing operation requires.
    #[default]
    Structural,

    /// Everything in [`ValidationMode::Structural`], and additionally no consecutive repeated
    /// coordinates in line strings and rings.
    Strict,
}

/// Outcome of [`ShapeTrait::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    /// A passing result with an empty diagnostic.
    pub fn success() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result carrying a diagnostic message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The diagnostic message. Empty for passing results.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Fail with [`GeoShapeError::InvalidShapeState`] unless `shape` passes structural validation.
pub(crate) fn ensure_valid(shape: &impl ShapeTrait, operand: &'static str) -> Result<()> {
    let result = shape.validate(ValidationMode::Structural);
    if result.is_valid() {
        Ok(())
    } else {
        Err(GeoShapeError::InvalidShapeState {
            operand,
            reason: result.message,
        })
    }
}

/// Unwrap an optional argument, failing with [`GeoShapeError::ArgumentNull`] when absent.
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(GeoShapeError::ArgumentNull { name })
}

/// Reject a freshly decoded shape that fails structural validation.
///
/// Decoders run this on every geometry they produce, so anything they return can be written back.
pub(crate) fn check_decoded<S: ShapeTrait>(shape: S, name: &'static str) -> Result<S> {
    let result = shape.validate(ValidationMode::Structural);
    if result.is_valid() {
        Ok(shape)
    } else {
        Err(GeoShapeError::malformed(name, result.message))
    }
}

/// Well-formedness pre-check for WKT text.
///
/// Blank text counts as absent. Otherwise the text must start with a keyword and its parentheses
/// must balance. Anything finer is left to the parser.
pub(crate) fn check_wkt(text: &str, name: &'static str) -> Result<()> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GeoShapeError::ArgumentNull { name });
    }

    if !trimmed.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(GeoShapeError::malformed(
            name,
            "WKT must start with a geometry keyword",
        ));
    }

    let mut depth = 0usize;
    for c in trimmed.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| GeoShapeError::malformed(name, "unbalanced `)`"))?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(GeoShapeError::malformed(name, "unclosed `(`"));
    }

    Ok(())
}

/// Well-formedness pre-check for WKB bytes.
///
/// Empty bytes count as absent. Otherwise there must be room for a header, and the first byte must
/// be a byte order tag.
pub(crate) fn check_wkb(buf: &[u8], name: &'static str) -> Result<()> {
    if buf.is_empty() {
        return Err(GeoShapeError::ArgumentNull { name });
    }
    if buf.len() < crate::io::wkb::common::HEADER_SIZE {
        return Err(GeoShapeError::malformed(
            name,
            format!("{} bytes is too short for a WKB header", buf.len()),
        ));
    }
    if buf[0] > 1 {
        return Err(GeoShapeError::malformed(
            name,
            format!("unknown byte order tag {}", buf[0]),
        ));
    }
    Ok(())
}
