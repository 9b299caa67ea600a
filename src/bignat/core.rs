//! Digit buffer representation
//!
//! A `Bignat` is a fixed-length array of digits in **big-endian** order:
//! index `0` holds the most significant digit, index `N - 1` the least
//! significant one. The digit count is a const generic chosen by the caller
//! and never changes; every operation mutates the receiver in place and no
//! operation allocates.

use std::fmt::{Display, Formatter, Result};

use crate::digit::Digit;

/// Fixed-size unsigned integer of `N` base-`2^D::BITS` digits.
///
/// The value is `Σ digits[i] * base^(N - 1 - i)`. The derived ordering is
/// lexicographic over the digit array, which coincides with the numeric
/// ordering because the digits are stored most significant first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bignat<D: Digit, const N: usize>(pub(crate) [D; N]);

/// Reference configuration with 8-bit digits.
pub type Bignat8<const N: usize> = Bignat<u8, N>;

/// 32-bit digit configuration.
pub type Bignat32<const N: usize> = Bignat<u32, N>;

impl<D: Digit, const N: usize> Bignat<D, N> {
    /// The value zero.
    pub const ZERO: Self = Self([D::ZERO; N]);

    /// Returns a zero-initialized buffer.
    pub const fn new() -> Self {
        Self::ZERO
    }

    /// Returns a buffer holding the single-digit value `digit`.
    pub fn value_of(digit: D) -> Self {
        let mut out = Self::ZERO;
        out.set_last_byte(digit);

        out
    }

    /// Number of digits.
    pub const fn length(&self) -> usize {
        N
    }

    /// Borrows the digit array, most significant digit first.
    pub fn digits(&self) -> &[D; N] {
        &self.0
    }

    /// Mutably borrows the digit array, most significant digit first.
    ///
    /// Writes through this reference change the value directly.
    pub fn digits_mut(&mut self) -> &mut [D; N] {
        &mut self.0
    }

    /// Stores zero.
    pub fn zero(&mut self) {
        self.0.fill(D::ZERO);
    }

    /// Stores one.
    pub fn one(&mut self) {
        self.set_last_byte(D::ONE);
    }

    /// Stores two.
    pub fn two(&mut self) {
        self.set_last_byte(D::from(2u8));
    }

    /// Stores the single-digit value `value`.
    ///
    /// All other digits are cleared first, so this sets the whole number and
    /// not just its least significant digit.
    pub fn set_last_byte(&mut self, value: D) {
        self.zero();

        if let Some(last) = self.0.last_mut() {
            *last = value;
        }
    }

    /// Returns the least significant digit, or zero for an empty buffer.
    pub fn get_last_byte(&self) -> D {
        self.0.last().copied().unwrap_or(D::ZERO)
    }

    /// Copies `other` into this buffer, right-aligned.
    ///
    /// If this buffer is longer, its surplus leading digits are cleared. If it
    /// is shorter, only the `N` least significant digits of `other` are
    /// copied; the discarded leading digits of `other` must be zero.
    pub fn copy<const M: usize>(&mut self, other: &Bignat<D, M>) {
        if N >= M {
            let start = N - M;

            self.0[..start].fill(D::ZERO);
            self.0[start..].copy_from_slice(&other.0);
        } else {
            let start = M - N;

            require!(
                other.0[..start].iter().all(|&d| d == D::ZERO),
                "copy discards non-zero leading digits"
            );

            self.0.copy_from_slice(&other.0[start..]);
        }
    }

    /// Returns `true` if both buffers hold the same digits.
    pub fn same_value(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }

    /// Returns `true` if every digit is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == D::ZERO)
    }

    /// Counts the number of leading zero bits.
    ///
    /// Returns a value in the range `0..=N * D::BITS`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &digit in self.0.iter() {
            if digit == D::ZERO {
                count += D::BITS;
            } else {
                count += digit.leading_zeros();
                return count;
            }
        }

        count
    }
}

impl<D: Digit, const N: usize> Display for Bignat<D, N> {
    /// Formats the value as colon-separated hexadecimal digits.
    ///
    /// Each digit is printed in upper case and padded to its full width,
    /// e.g. `00:1F:A4` for 8-bit digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, digit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:0width$X}", digit, width = D::BYTES * 2)?;
        }

        Ok(())
    }
}

/// Manual `Default` implementation.
///
/// `#[derive(Default)]` is not available for arrays longer than 32
/// elements, and protocol buffers are routinely longer than that. The
/// default value is zero, consistent with [`Bignat::ZERO`].
impl<D: Digit, const N: usize> Default for Bignat<D, N> {
    fn default() -> Self {
        Self::ZERO
    }
}
