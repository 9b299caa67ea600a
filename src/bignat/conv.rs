//! Conversions between `Bignat` and plain digit arrays.
//!
//! Both directions keep the big-endian digit order unchanged.

use super::Bignat;
use crate::digit::Digit;

/// Wraps a big-endian digit array.
impl<D: Digit, const N: usize> From<[D; N]> for Bignat<D, N> {
    fn from(digits: [D; N]) -> Self {
        Bignat(digits)
    }
}

/// Unwraps the big-endian digit array.
impl<D: Digit, const N: usize> From<Bignat<D, N>> for [D; N] {
    fn from(value: Bignat<D, N>) -> Self {
        value.0
    }
}
