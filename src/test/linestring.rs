use crate::scalar::LineString;

/// The diagonal from the origin to (2, 2).
pub(crate) fn ls0() -> LineString {
    vec![(0., 0.), (2., 2.)].into()
}

/// The anti-diagonal, crossing [`ls0`] at (1, 1).
pub(crate) fn ls1() -> LineString {
    vec![(0., 2.), (2., 0.)].into()
}
