//! Multiple-precision natural numbers for constrained devices
//!
//! This crate provides the arithmetic engine underneath an SRP-6a style
//! mutual authentication protocol: unsigned integers held in fixed-length
//! digit buffers, manipulated in place using nothing wider than a
//! double-digit accumulator.
//!
//! # Module overview
//!
//! - `digit`  
//!   The digit-width policy. The 8-bit reference configuration and the
//!   32-bit configuration share every algorithm through the [`Digit`]
//!   trait.
//!
//! - `bignat`  
//!   The [`Bignat`] buffer type and its operations: carry/borrow reporting
//!   addition and subtraction, scaled multiply-accumulate, multiplication,
//!   scaled comparison and shifts, schoolbook long division, and chunked
//!   transfer through external byte buffers ([`ChunkSerializable`]).
//!
//! - `error`  
//!   [`BignatError`], returned by the opt-in `try_*` operations.
//!
//! # Error model
//!
//! Overflow of an addition and underflow of a subtraction are ordinary
//! results and are returned as `bool`. All other requirements (sizes,
//! leading digits that must be zero, large enough quotient buffers) are
//! preconditions of the caller. They are asserted in debug builds and when
//! the `checked` feature is enabled, and silently violated otherwise. A zero
//! divisor always panics. Callers that want every violation as an error use
//! the `try_*` variants.
//!
//! # Design goals
//!
//! - No heap allocations: every buffer is a fixed-size array owned by the
//!   caller
//! - One algorithm implementation for every digit width
//! - Explicit, predictable semantics matching the protocol peer bit for bit
//!
//! Montgomery multiplication and modular exponentiation are left to the
//! protocol layer, which composes them from the primitives here.

/// Asserts a caller precondition in debug builds or with the `checked`
/// feature. Compiled out otherwise, condition included.
macro_rules! require {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(any(debug_assertions, feature = "checked")) {
            assert!($cond, $($arg)+);
        }
    };
}

mod bignat;
pub mod digit;
mod error;

pub use bignat::{Bignat, Bignat8, Bignat32, ChunkSerializable};
pub use digit::Digit;
pub use error::BignatError;
