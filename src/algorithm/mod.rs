//! Geometric algorithms shared by the shape variants.

pub mod crossing;
