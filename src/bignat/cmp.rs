//! Scaled comparison and shifting.

use super::Bignat;
use crate::digit::Digit;

impl<D: Digit, const N: usize> Bignat<D, N> {
    /// Returns `true` if this number is strictly less than
    /// `other * base^shift`.
    ///
    /// Digits of the shifted `other` that fall outside its digit range count
    /// as zero. The first `start` digits of this number are skipped; they
    /// must be zero.
    pub fn shift_lesser<const M: usize>(&self, other: &Bignat<D, M>, shift: usize, start: usize) -> bool {
        require!(
            self.0[..start.min(N)].iter().all(|&d| d == D::ZERO),
            "skipped digits are not zero"
        );

        // Index into `other` that lines up with index `i` of this number is
        // `i + offset`.
        let offset = (M + shift) as isize - N as isize;

        for i in start..N {
            let j = i as isize + offset;
            let that = if j >= 0 && (j as usize) < M {
                other.0[j as usize]
            } else {
                D::ZERO
            };
            let this = self.0[i];

            if this != that {
                return this < that;
            }
        }

        false
    }

    /// Returns `true` if this number is strictly less than `other`.
    pub fn lesser<const M: usize>(&self, other: &Bignat<D, M>) -> bool {
        self.shift_lesser(other, 0, 0)
    }

    /// Shifts one digit to the left. The most significant digit must be zero.
    pub fn shift_left(&mut self) {
        if N == 0 {
            return;
        }

        require!(self.0[0] == D::ZERO, "shift_left drops a non-zero digit");

        self.0.copy_within(1.., 0);
        self.0[N - 1] = D::ZERO;
    }

    /// Shifts one digit to the right. The least significant digit must be
    /// zero.
    pub fn shift_right(&mut self) {
        if N == 0 {
            return;
        }

        require!(self.0[N - 1] == D::ZERO, "shift_right drops a non-zero digit");

        self.0.copy_within(..N - 1, 1);
        self.0[0] = D::ZERO;
    }

    /// Divides by two, shifting every bit one position to the right.
    pub fn div_2(&mut self) {
        let mut carry = D::ZERO;

        for digit in self.0.iter_mut() {
            let next = if digit.is_odd() { D::FIRST_BIT } else { D::ZERO };

            *digit = (*digit >> 1) | carry;
            carry = next;
        }
    }
}
