//! Chunked transfer to and from external byte buffers
//!
//! A buffer is often larger than the byte window available to the transport
//! that carries it, so it is moved in several calls. Each call is told how
//! many bytes were already transferred (`this_index`) and how much room or
//! data the current window offers (`len`).
//!
//! The external layout is the digit array in storage order, each digit as
//! `D::BYTES` big-endian bytes, without length prefix or framing.
//!
//! The return value is the number of bytes moved, except when a call ends
//! exactly at the last byte with `this_index + len == size`: it then returns
//! `len + 1`. This tells the caller that the object is complete even though
//! the window was filled completely, and must be reproduced exactly for the
//! peer on the other side of the transport.

use log::trace;

use super::Bignat;
use crate::digit::Digit;

/// Objects that can be moved through a chunked byte transport.
pub trait ChunkSerializable {
    /// Size of the external representation in bytes.
    fn size(&self) -> usize;

    /// Two objects are compatible if their external representations have the
    /// same size.
    fn is_compatible_with<T: ChunkSerializable + ?Sized>(&self, other: &T) -> bool {
        self.size() == other.size()
    }

    /// Writes up to `len` bytes, starting at byte `this_index` of this
    /// object, into `dest[dest_index..]`.
    ///
    /// Returns the number of bytes written, or `len + 1` if the call wrote
    /// precisely the remaining `len` bytes.
    fn to_byte_array(&self, len: usize, this_index: usize, dest: &mut [u8], dest_index: usize) -> usize;

    /// Reads up to `len` bytes from `src[src_index..]` into this object,
    /// starting at byte `this_index`.
    ///
    /// Returns the number of bytes read, or `len + 1` if the call read
    /// precisely the remaining `len` bytes.
    fn from_byte_array(&mut self, len: usize, this_index: usize, src: &[u8], src_index: usize) -> usize;
}

/// Bytes that can be moved in this call: `len`, capped by what is left.
fn chunk_len(size: usize, len: usize, this_index: usize) -> usize {
    if this_index + len <= size {
        len
    } else {
        size.saturating_sub(this_index)
    }
}

/// Applies the completion sentinel.
fn chunk_result(size: usize, len: usize, this_index: usize, moved: usize) -> usize {
    if this_index + len == size {
        trace!("chunked transfer of {size} bytes complete");
        len + 1
    } else {
        moved
    }
}

impl<D: Digit, const N: usize> ChunkSerializable for Bignat<D, N> {
    fn size(&self) -> usize {
        N * D::BYTES
    }

    fn to_byte_array(&self, len: usize, this_index: usize, dest: &mut [u8], dest_index: usize) -> usize {
        let size = self.size();
        let moved = chunk_len(size, len, this_index);

        for (k, byte) in dest[dest_index..dest_index + moved].iter_mut().enumerate() {
            let pos = this_index + k;
            *byte = self.0[pos / D::BYTES].byte(pos % D::BYTES);
        }

        chunk_result(size, len, this_index, moved)
    }

    fn from_byte_array(&mut self, len: usize, this_index: usize, src: &[u8], src_index: usize) -> usize {
        let size = self.size();
        let moved = chunk_len(size, len, this_index);

        for (k, &byte) in src[src_index..src_index + moved].iter().enumerate() {
            let pos = this_index + k;
            let digit = &mut self.0[pos / D::BYTES];
            *digit = digit.with_byte(pos % D::BYTES, byte);
        }

        chunk_result(size, len, this_index, moved)
    }
}
