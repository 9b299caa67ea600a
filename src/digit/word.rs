//! 32-bit digits with a 64-bit accumulator.
//!
//! Each digit is transferred as four big-endian bytes.

super::impl_digit!(u32, u64);
