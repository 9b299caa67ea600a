//! Schoolbook long division
//!
//! The dividend lives in the receiver and is reduced in place until only the
//! remainder is left. The divisor is shifted left by whole digits, starting
//! with its most significant non-zero digit aligned to the first digit of the
//! dividend, and for every shift position a multiple of it is subtracted
//! until the remaining value drops below the shifted divisor.
//!
//! The multiple is estimated from the leading digits of both operands and is
//! always an under-estimate, so a subtraction never underflows. Several
//! rounds per shift position are therefore possible; each of them removes a
//! large fraction of what is left. Before estimating, both leading windows
//! are shifted left by the number of leading zero bits of the divisor's
//! first digit, which keeps the estimate within a few units of the true
//! quotient digit.
//!
//! Complexity is `O(n * m)` digit operations for an `n` digit dividend and an
//! `m` digit divisor, and linear when both have a comparable number of
//! significant digits.

use log::trace;

use super::Bignat;
use crate::digit::Digit;

impl<D: Digit, const N: usize> Bignat<D, N> {
    /// Replaces this number with its remainder modulo `divisor`.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn remainder_divide<const M: usize>(&mut self, divisor: &Bignat<D, M>) {
        self.divide(divisor, None);
    }

    /// Replaces this number with its remainder modulo `divisor` and stores
    /// the quotient in `quotient`.
    ///
    /// The quotient buffer is cleared first. It must be long enough for the
    /// actual quotient, which depends on the operand values rather than
    /// their sizes: a dividend of `2n` digits divided by an `n` digit divisor
    /// fits into `n` quotient digits whenever the dividend is below
    /// `divisor²`. If it is too short, the quotient digits that do not fit
    /// are lost.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn remainder_divide_with_quotient<const M: usize, const Q: usize>(
        &mut self,
        divisor: &Bignat<D, M>,
        quotient: &mut Bignat<D, Q>,
    ) {
        self.divide(divisor, Some(&mut quotient.0));
    }

    fn divide<const M: usize>(&mut self, divisor: &Bignat<D, M>, mut quotient: Option<&mut [D]>) {
        if let Some(quotient) = quotient.as_deref_mut() {
            quotient.fill(D::ZERO);
        }

        let Some(divisor_index) = divisor.0.iter().position(|&d| d != D::ZERO) else {
            panic!("division by zero");
        };

        // Left shift that aligns the divisor's leading digit with the first
        // digit of the dividend. If it would be negative the dividend is
        // already smaller than the divisor.
        let Some(mut divisor_shift) = (N + divisor_index).checked_sub(M) else {
            return;
        };

        let first = divisor.0[divisor_index];
        let second = divisor.0.get(divisor_index + 1).copied().unwrap_or(D::ZERO);
        let bit_shift = first.leading_zeros();

        // Normalized leading digit of the divisor, plus one so that the
        // estimated multiple never exceeds the true one.
        let divisor_top = ((first.widen() << bit_shift) | (second.widen() >> (D::BITS - bit_shift)))
            + D::WIDE_ONE;

        // At round `r` the divisor's leading digit lines up with digit `r`
        // of the dividend, and every digit before `r - 1` is already zero.
        let mut round = 0usize;

        loop {
            let mut subtractions = 0u32;

            while !self.shift_lesser(divisor, divisor_shift, round.saturating_sub(1)) {
                let multiple = self.estimate_multiple(round, bit_shift, divisor_top);

                self.times_minus(divisor, divisor_shift, multiple);

                if let Some(quotient) = quotient.as_deref_mut() {
                    let len = quotient.len();

                    require!(divisor_shift < len, "quotient buffer is too short");

                    if divisor_shift < len {
                        let slot = &mut quotient[len - 1 - divisor_shift];
                        *slot = slot.wrapping_add(multiple);
                    }
                }

                subtractions += 1;
            }

            if subtractions > 0 {
                trace!("remainder_divide: shift {divisor_shift} settled after {subtractions} subtractions");
            }

            if divisor_shift == 0 {
                break;
            }

            divisor_shift -= 1;
            round += 1;
        }
    }

    /// Conservative estimate of the multiple of the divisor to subtract in
    /// round `round`.
    ///
    /// Takes the two live leading digits of the dividend plus the bits of the
    /// following digit that `bit_shift` pulls in, and divides by the
    /// normalized divisor digit (already incremented by one). The result is at
    /// least one, because the caller only asks while the dividend is not
    /// below the shifted divisor, and always fits into a single digit.
    fn estimate_multiple(&self, round: usize, bit_shift: u32, divisor_top: D::Wide) -> D {
        let digit = |i: usize| self.0.get(i).copied().unwrap_or(D::ZERO);

        let upper = match round {
            0 => D::WIDE_ZERO,
            _ => digit(round - 1).widen() << D::BITS,
        };
        let window = ((upper | digit(round).widen()) << bit_shift)
            | (digit(round + 1).widen() >> (D::BITS - bit_shift));

        let multiple = window / divisor_top;

        if multiple == D::WIDE_ZERO {
            D::ONE
        } else {
            D::low(multiple)
        }
    }
}
