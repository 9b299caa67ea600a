//! Reference configuration: 8-bit digits with a 16-bit accumulator.
//!
//! One digit is one byte, so the external byte layout of a buffer is exactly
//! its digit array.

super::impl_digit!(u8, u16);
