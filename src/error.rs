//! Errors reported by the fallible (`try_*`) arithmetic entry points.
//!
//! The plain operations never return these: they report carries and borrows
//! as booleans and leave every other precondition to the caller. The `try_*`
//! variants validate those preconditions first and turn a violation into one
//! of the errors below, without touching the receiver.

use std::fmt::{Display, Formatter, Result};

/// Precondition violations detected by the checked arithmetic API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BignatError {
    /// The divisor of a division is zero.
    DivisionByZero,

    /// The result does not fit into the receiver.
    Overflow,

    /// The result would be negative.
    Underflow,

    /// Non-zero leading digits would be discarded.
    Truncation,

    /// The receiver has fewer digits than the operation needs.
    InsufficientCapacity,

    /// The quotient buffer is too short for the quotient.
    QuotientTooSmall,
}

impl Display for BignatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = match self {
            BignatError::DivisionByZero => "division by zero",
            BignatError::Overflow => "result does not fit into the receiver",
            BignatError::Underflow => "result would be negative",
            BignatError::Truncation => "non-zero leading digits would be discarded",
            BignatError::InsufficientCapacity => "receiver is too short for the operation",
            BignatError::QuotientTooSmall => "quotient buffer is too short",
        };

        f.write_str(msg)
    }
}

impl std::error::Error for BignatError {}
