//! Digit width configuration
//!
//! A `Bignat` is a sequence of digits. The width of a digit, the width of the
//! accumulator used while combining two digits, and the masks derived from
//! them form one coherent policy, expressed here as the [`Digit`] trait.
//!
//! Every arithmetic routine in the crate is written once against this trait,
//! so the 8-bit reference configuration and the 32-bit configuration share
//! the same algorithms.
//!
//! Current configurations:
//! - `u8` digits with a `u16` accumulator (base 2⁸)
//! - `u32` digits with a `u64` accumulator (base 2³²)

use std::fmt::{Debug, UpperHex};
use std::hash::Hash;
use std::ops::{Add, BitAnd, BitOr, Div, Mul, Shl, Shr, Sub};

mod byte;
mod word;

/// A single base-`2^BITS` digit together with its double-width accumulator.
///
/// Implementations must guarantee that `Wide` can hold any value up to
/// `BASE² - 1`, which is the largest intermediate produced by a
/// multiply-accumulate step (`digit + digit * digit + carry`).
pub trait Digit:
    Copy
    + Default
    + Eq
    + Ord
    + Hash
    + Debug
    + UpperHex
    + From<u8>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shr<u32, Output = Self>
    + 'static
{
    /// Double-width accumulator.
    type Wide: Copy
        + Eq
        + Ord
        + Debug
        + Add<Output = Self::Wide>
        + Sub<Output = Self::Wide>
        + Mul<Output = Self::Wide>
        + Div<Output = Self::Wide>
        + BitOr<Output = Self::Wide>
        + Shl<u32, Output = Self::Wide>
        + Shr<u32, Output = Self::Wide>;

    /// Width of one digit in bits.
    const BITS: u32;

    /// Width of one digit in bytes, as transferred by the streaming interface.
    const BYTES: usize;

    const ZERO: Self;
    const ONE: Self;

    /// Only the highest bit of a digit set.
    const FIRST_BIT: Self;

    /// The base as an accumulator value, i.e. the first value that does not
    /// fit into a single digit.
    const BASE: Self::Wide;

    const WIDE_ZERO: Self::Wide;
    const WIDE_ONE: Self::Wide;

    /// Zero-extends a digit into the accumulator type.
    fn widen(self) -> Self::Wide;

    /// Keeps the least significant digit of an accumulator value.
    fn low(wide: Self::Wide) -> Self;

    /// Drops the least significant digit of an accumulator value.
    #[inline(always)]
    fn high(wide: Self::Wide) -> Self::Wide {
        wide >> Self::BITS
    }

    fn leading_zeros(self) -> u32;

    fn wrapping_add(self, rhs: Self) -> Self;

    /// Returns byte `index` of the digit, counted from the most significant
    /// byte.
    fn byte(self, index: usize) -> u8;

    /// Returns the digit with byte `index` (most significant first) replaced.
    fn with_byte(self, index: usize, byte: u8) -> Self;

    #[inline(always)]
    fn is_odd(self) -> bool {
        self & Self::ONE == Self::ONE
    }
}

/// Implements [`Digit`] for a primitive unsigned integer and its
/// double-width companion.
macro_rules! impl_digit {
    ($digit:ty, $wide:ty) => {
        impl $crate::digit::Digit for $digit {
            type Wide = $wide;

            const BITS: u32 = <$digit>::BITS;
            const BYTES: usize = ::std::mem::size_of::<$digit>();

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const FIRST_BIT: Self = 1 << (<$digit>::BITS - 1);

            const BASE: $wide = 1 << <$digit>::BITS;
            const WIDE_ZERO: $wide = 0;
            const WIDE_ONE: $wide = 1;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }

            #[inline(always)]
            fn low(wide: $wide) -> Self {
                wide as $digit
            }

            #[inline(always)]
            fn leading_zeros(self) -> u32 {
                <$digit>::leading_zeros(self)
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$digit>::wrapping_add(self, rhs)
            }

            #[inline]
            fn byte(self, index: usize) -> u8 {
                let shift = (Self::BYTES - 1 - index) * 8;
                (self >> shift) as u8
            }

            #[inline]
            fn with_byte(self, index: usize, byte: u8) -> Self {
                let shift = (Self::BYTES - 1 - index) * 8;
                let mask: $digit = 0xFF << shift;
                (self & !mask) | ((byte as $digit) << shift)
            }
        }
    };
}

pub(crate) use impl_digit;
