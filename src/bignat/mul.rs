//! Full and modular multiplication.

use super::Bignat;
use crate::digit::Digit;

impl<D: Digit, const N: usize> Bignat<D, N> {
    /// Stores `x * y` in this buffer.
    ///
    /// Schoolbook multiplication: every digit of `y`, least significant
    /// first, scales `x` which is accumulated at the digit's position.
    /// `N >= X + Y` guarantees that the product fits.
    pub fn mult<const X: usize, const Y: usize>(&mut self, x: &Bignat<D, X>, y: &Bignat<D, Y>) {
        self.zero();

        for (shift, &digit) in y.0.iter().rev().enumerate() {
            if digit != D::ZERO {
                self.times_add_shift(x, shift, digit);
            }
        }
    }

    /// Stores `x * y mod modulus` in this buffer.
    ///
    /// Slow reference path: the accumulator is reduced with a full division
    /// after every digit of `y`. `x` and `modulus` share this buffer's size
    /// and their two leading digits must be zero; `y` can have any size.
    pub fn mult_mod<const M: usize>(&mut self, x: &Self, y: &Bignat<D, M>, modulus: &Self) {
        require!(
            N >= 2 && x.0[..2] == [D::ZERO; 2] && modulus.0[..2] == [D::ZERO; 2],
            "mult_mod needs two leading zero digits in x and modulus"
        );

        self.zero();

        for &digit in y.0.iter() {
            self.shift_left();
            self.times_add(x, digit);
            self.remainder_divide(modulus);
        }
    }
}
