//! Modular helpers built on the plain arithmetic.
//!
//! Operands are expected to be reduced already, i.e. strictly less than the
//! modulus.

use super::Bignat;
use crate::digit::Digit;

impl<D: Digit, const N: usize> Bignat<D, N> {
    /// Stores `(this - other) mod modulus`.
    ///
    /// Both this number and `other` must be less than `modulus`.
    pub fn modular_subtract(&mut self, other: &Self, modulus: &Self) {
        if self.subtract(other) {
            // The two's complement plus the modulus wraps back into range.
            let wrapped = self.add_carry(modulus);

            require!(wrapped, "operands of modular_subtract are not reduced");
        }
    }

    /// Halves a residue: given `2x mod modulus` in this buffer, stores
    /// `x mod modulus`.
    ///
    /// `modulus` must be odd and its most significant bit must be clear, so
    /// that adding it to an odd residue cannot overflow.
    pub fn modular_div_2(&mut self, modulus: &Self) {
        require!(
            N > 0 && modulus.0[N - 1].is_odd() && modulus.0[0] & D::FIRST_BIT == D::ZERO,
            "modular_div_2 needs an odd modulus with a clear top bit"
        );

        if self.0[N - 1].is_odd() {
            self.add(modulus);
        }

        self.div_2();
    }
}
