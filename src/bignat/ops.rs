//! Additive and scaled multiply-accumulate operations
//!
//! All operations in this module combine the receiver with a right-aligned
//! operand digit by digit, from the least significant end, through a
//! double-width accumulator. The low digit of the accumulator is written
//! back and the high digit becomes the carry (or borrow) for the next
//! position.
//!
//! Overflow of `add_carry` and underflow of `subtract` are reported through
//! the returned flag. The remaining operations require the caller to
//! guarantee that the result fits; violations are only asserted in debug or
//! `checked` builds.

use super::Bignat;
use crate::digit::Digit;

impl<D: Digit, const N: usize> Bignat<D, N> {
    /// Adds `other` to this number and reports whether a carry escaped the
    /// most significant digit.
    ///
    /// On overflow the stored value is the sum modulo `base^N`, i.e. exactly
    /// one leading one bit is missing. `other` must not be longer than this
    /// buffer.
    pub fn add_carry<const M: usize>(&mut self, other: &Bignat<D, M>) -> bool {
        require!(M <= N, "addend has more digits than the receiver");

        let mut akku = D::WIDE_ZERO;

        for (this, &that) in self.0.iter_mut().rev().zip(other.0.iter().rev()) {
            akku = akku + this.widen() + that.widen();
            *this = D::low(akku);
            akku = D::high(akku);
        }

        for this in self.0.iter_mut().rev().skip(M) {
            if akku == D::WIDE_ZERO {
                break;
            }

            akku = akku + this.widen();
            *this = D::low(akku);
            akku = D::high(akku);
        }

        akku != D::WIDE_ZERO
    }

    /// Adds `other` to this number.
    ///
    /// The caller guarantees that the sum fits; otherwise the wrapped value
    /// is stored without any signal.
    pub fn add<const M: usize>(&mut self, other: &Bignat<D, M>) {
        let overflow = self.add_carry(other);

        require!(!overflow, "addition overflows the receiver");
    }

    /// Subtracts `other` from this number and reports whether the result is
    /// negative.
    ///
    /// On underflow the stored value is the two's complement of the negative
    /// result modulo `base^N`. `other` may be longer than this buffer, but
    /// then its surplus leading digits must be zero; they are ignored.
    pub fn subtract<const M: usize>(&mut self, other: &Bignat<D, M>) -> bool {
        require!(
            other.0[..M.saturating_sub(N)].iter().all(|&d| d == D::ZERO),
            "subtrahend has non-zero digits beyond the receiver"
        );

        let mut borrow = D::WIDE_ZERO;

        for (this, &that) in self.0.iter_mut().rev().zip(other.0.iter().rev()) {
            let diff = D::BASE + this.widen() - that.widen() - borrow;
            *this = D::low(diff);
            borrow = D::WIDE_ONE - D::high(diff);
        }

        for this in self.0.iter_mut().rev().skip(M) {
            if borrow == D::WIDE_ZERO {
                break;
            }

            let diff = D::BASE + this.widen() - borrow;
            *this = D::low(diff);
            borrow = D::WIDE_ONE - D::high(diff);
        }

        borrow != D::WIDE_ZERO
    }

    /// Scaled addition: `this += mult * other`.
    ///
    /// The result must fit into `N` digits.
    pub fn times_add(&mut self, other: &Self, mult: D) {
        let mult = mult.widen();
        let mut akku = D::WIDE_ZERO;

        for (this, &that) in self.0.iter_mut().rev().zip(other.0.iter().rev()) {
            akku = akku + this.widen() + mult * that.widen();
            *this = D::low(akku);
            akku = D::high(akku);
        }

        require!(akku == D::WIDE_ZERO, "times_add overflows the receiver");
    }

    /// Shifted scaled addition: `this += mult * other * base^shift`.
    ///
    /// Callers size the receiver with `N >= M + shift + 1`, which leaves one
    /// digit of headroom for the final carry. Only the value is checked: a
    /// shorter receiver works as long as the sum fits.
    pub fn times_add_shift<const M: usize>(&mut self, other: &Bignat<D, M>, shift: usize, mult: D) {
        let overflow = self.times_add_shift_carry(other, shift, mult);

        require!(!overflow, "times_add_shift overflows the receiver");
    }

    /// Shifted scaled subtraction: `this -= mult * other * base^shift`.
    ///
    /// The result must be non-negative. `other` may be longer than the
    /// digits left of the shift position, but the surplus leading digits must
    /// then be zero. This is the subtraction step of long division.
    pub fn times_minus<const M: usize>(&mut self, other: &Bignat<D, M>, shift: usize, mult: D) {
        let underflow = self.times_minus_borrow(other, shift, mult);

        require!(!underflow, "times_minus result would be negative");
    }

    /// Body of [`Bignat::times_add_shift`]. Returns `true` if a carry is left
    /// over after the most significant digit.
    pub(crate) fn times_add_shift_carry<const M: usize>(
        &mut self,
        other: &Bignat<D, M>,
        shift: usize,
        mult: D,
    ) -> bool {
        let mult = mult.widen();
        let live = &mut self.0[..N.saturating_sub(shift)];
        let mut akku = D::WIDE_ZERO;

        for (this, &that) in live.iter_mut().rev().zip(other.0.iter().rev()) {
            akku = akku + this.widen() + mult * that.widen();
            *this = D::low(akku);
            akku = D::high(akku);
        }

        for this in live.iter_mut().rev().skip(M) {
            if akku == D::WIDE_ZERO {
                break;
            }

            akku = akku + this.widen();
            *this = D::low(akku);
            akku = D::high(akku);
        }

        let dropped = &other.0[..M.saturating_sub(live.len())];

        akku != D::WIDE_ZERO || (mult != D::WIDE_ZERO && dropped.iter().any(|&d| d != D::ZERO))
    }

    /// Body of [`Bignat::times_minus`]. Returns `true` if the true result is
    /// negative.
    pub(crate) fn times_minus_borrow<const M: usize>(
        &mut self,
        other: &Bignat<D, M>,
        shift: usize,
        mult: D,
    ) -> bool {
        let mult = mult.widen();
        let live = &mut self.0[..N.saturating_sub(shift)];
        let mut akku = D::WIDE_ZERO;

        for (this, &that) in live.iter_mut().rev().zip(other.0.iter().rev()) {
            akku = akku + mult * that.widen();

            let diff = D::BASE + this.widen() - D::low(akku).widen();
            *this = D::low(diff);
            akku = D::high(akku) + D::WIDE_ONE - D::high(diff);
        }

        for this in live.iter_mut().rev().skip(M) {
            if akku == D::WIDE_ZERO {
                break;
            }

            let diff = D::BASE + this.widen() - D::low(akku).widen();
            *this = D::low(diff);
            akku = D::high(akku) + D::WIDE_ONE - D::high(diff);
        }

        // Digits of `other` that were shifted past the most significant end.
        let ignored = &other.0[..M.saturating_sub(live.len())];

        akku != D::WIDE_ZERO || (mult != D::WIDE_ZERO && ignored.iter().any(|&d| d != D::ZERO))
    }
}
