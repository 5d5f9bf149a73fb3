pub(crate) mod linestring;
pub(crate) mod point;
