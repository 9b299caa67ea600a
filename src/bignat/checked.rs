//! Fallible variants of the arithmetic operations.
//!
//! Each `try_*` method validates the preconditions of its plain counterpart
//! and returns a [`BignatError`] instead of computing a silently wrong
//! result. On error the receiver (and the quotient buffer, where there is
//! one) is left unchanged. Where a precondition can only be decided by doing
//! the work, the operation runs on a stack copy that is committed on success.

use log::debug;

use super::Bignat;
use crate::digit::Digit;
use crate::error::BignatError;

impl<D: Digit, const N: usize> Bignat<D, N> {
    /// Checked [`Bignat::copy`]: fails with [`BignatError::Truncation`] if
    /// non-zero leading digits of `other` would be discarded.
    pub fn try_copy<const M: usize>(&mut self, other: &Bignat<D, M>) -> Result<(), BignatError> {
        if other.0[..M.saturating_sub(N)].iter().any(|&d| d != D::ZERO) {
            debug!("try_copy: value does not fit into {} digits", N);
            return Err(BignatError::Truncation);
        }

        self.copy(other);

        Ok(())
    }

    /// Checked [`Bignat::add`]: fails with [`BignatError::Overflow`] instead
    /// of storing a wrapped sum.
    pub fn try_add<const M: usize>(&mut self, other: &Bignat<D, M>) -> Result<(), BignatError> {
        if M > N {
            debug!("try_add: {} digit addend is longer than the {} digit receiver", M, N);
            return Err(BignatError::InsufficientCapacity);
        }

        let mut sum = *self;

        if sum.add_carry(other) {
            debug!("try_add: sum overflows {} digits", N);
            return Err(BignatError::Overflow);
        }

        *self = sum;

        Ok(())
    }

    /// Checked [`Bignat::subtract`]: fails with [`BignatError::Underflow`]
    /// instead of storing a two's complement result.
    pub fn try_subtract<const M: usize>(&mut self, other: &Bignat<D, M>) -> Result<(), BignatError> {
        if other.0[..M.saturating_sub(N)].iter().any(|&d| d != D::ZERO) {
            debug!("try_subtract: subtrahend does not fit into {} digits", N);
            return Err(BignatError::Underflow);
        }

        let mut difference = *self;

        if difference.subtract(other) {
            debug!("try_subtract: difference is negative");
            return Err(BignatError::Underflow);
        }

        *self = difference;

        Ok(())
    }

    /// Checked [`Bignat::times_add_shift`].
    pub fn try_times_add_shift<const M: usize>(
        &mut self,
        other: &Bignat<D, M>,
        shift: usize,
        mult: D,
    ) -> Result<(), BignatError> {
        if N <= M + shift {
            debug!("try_times_add_shift: {} digits leave no headroom for {} digits shifted by {}", N, M, shift);
            return Err(BignatError::InsufficientCapacity);
        }

        let mut sum = *self;

        if sum.times_add_shift_carry(other, shift, mult) {
            debug!("try_times_add_shift: sum overflows {} digits", N);
            return Err(BignatError::Overflow);
        }

        *self = sum;

        Ok(())
    }

    /// Checked [`Bignat::times_minus`]: fails with
    /// [`BignatError::Underflow`] if the result would be negative.
    pub fn try_times_minus<const M: usize>(
        &mut self,
        other: &Bignat<D, M>,
        shift: usize,
        mult: D,
    ) -> Result<(), BignatError> {
        let mut difference = *self;

        if difference.times_minus_borrow(other, shift, mult) {
            debug!("try_times_minus: difference is negative");
            return Err(BignatError::Underflow);
        }

        *self = difference;

        Ok(())
    }

    /// Checked [`Bignat::mult`]: fails with [`BignatError::Overflow`] if the
    /// product does not fit into `N` digits.
    ///
    /// Only the value matters, so a receiver shorter than `X + Y` digits is
    /// accepted when the operands have enough leading zeros.
    pub fn try_mult<const X: usize, const Y: usize>(
        &mut self,
        x: &Bignat<D, X>,
        y: &Bignat<D, Y>,
    ) -> Result<(), BignatError> {
        let mut product = Self::ZERO;

        for (shift, &digit) in y.0.iter().rev().enumerate() {
            if digit != D::ZERO && product.times_add_shift_carry(x, shift, digit) {
                debug!("try_mult: product overflows {} digits", N);
                return Err(BignatError::Overflow);
            }
        }

        *self = product;

        Ok(())
    }

    /// Checked [`Bignat::remainder_divide`]: fails with
    /// [`BignatError::DivisionByZero`] instead of panicking.
    pub fn try_remainder_divide<const M: usize>(&mut self, divisor: &Bignat<D, M>) -> Result<(), BignatError> {
        if divisor.is_zero() {
            debug!("try_remainder_divide: divisor is zero");
            return Err(BignatError::DivisionByZero);
        }

        self.remainder_divide(divisor);

        Ok(())
    }

    /// Checked [`Bignat::remainder_divide_with_quotient`]: fails with
    /// [`BignatError::QuotientTooSmall`] if the quotient does not fit.
    ///
    /// The quotient of an `N` digit dividend always fits into `N` digits, so
    /// it is computed into such a buffer first and only copied out if its
    /// leading digits allow it.
    pub fn try_remainder_divide_with_quotient<const M: usize, const Q: usize>(
        &mut self,
        divisor: &Bignat<D, M>,
        quotient: &mut Bignat<D, Q>,
    ) -> Result<(), BignatError> {
        if divisor.is_zero() {
            debug!("try_remainder_divide_with_quotient: divisor is zero");
            return Err(BignatError::DivisionByZero);
        }

        let mut remainder = *self;
        let mut full = Bignat::<D, N>::ZERO;

        remainder.remainder_divide_with_quotient(divisor, &mut full);

        quotient.try_copy(&full).map_err(|_| {
            debug!("try_remainder_divide_with_quotient: quotient does not fit into {} digits", Q);
            BignatError::QuotientTooSmall
        })?;

        *self = remainder;

        Ok(())
    }
}
