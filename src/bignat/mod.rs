//! Fixed-size multiple-precision natural numbers
//!
//! This module defines `Bignat`, a fixed-length big-endian array of digits,
//! and the arithmetic needed by modular-exponentiation based protocols on
//! small processors without wide multiply or divide instructions.
//!
//! The implementation is split by concern:
//! - `core`: representation, constants, copy and equality
//! - `conv`: conversions from and to digit arrays
//! - `ops`: addition and subtraction with carry/borrow report, and the
//!   scaled multiply-accumulate operations
//! - `mul`: full and modular multiplication
//! - `cmp`: scaled comparison and digit/bit shifts
//! - `div`: schoolbook long division
//! - `modular`: modular subtraction and halving
//! - `stream`: chunked (de)serialization
//! - `checked`: fallible variants of the above
//!
//! Receivers are always `&mut self` and operands `&Bignat`, so an operand
//! can never alias the buffer being modified.

mod checked;
mod cmp;
mod conv;
mod core;
mod div;
mod modular;
mod mul;
mod ops;
mod stream;

pub use self::core::{Bignat, Bignat8, Bignat32};
pub use self::stream::ChunkSerializable;
