//! Bounds Checking for Safe Buffer Reads
//!
//! Forward-only cursor over an immutable byte slice. Every read is checked
//! against the remaining length; nothing is ever removed from the buffer.

use crate::error::Rejection;

/// Check if a buffer has enough bytes for a read operation
pub(crate) fn check_buffer_bounds(
    buffer: &[u8],
    offset: usize,
    size: usize,
) -> Result<(), Rejection> {
    if offset.saturating_add(size) > buffer.len() {
        return Err(Rejection::Truncated {
            offset,
            need: size,
            remaining: buffer.len().saturating_sub(offset),
        });
    }
    Ok(())
}

/// Read position into an encoded message
#[derive(Debug, Clone)]
pub(crate) struct ByteCursor<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub(crate) fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Read one byte and advance past it
    pub(crate) fn read_u8(&mut self) -> Result<u8, Rejection> {
        let byte = self.read_slice(1)?[0];
        Ok(byte)
    }

    /// Borrow the next `len` bytes and advance past them
    pub(crate) fn read_slice(&mut self, len: usize) -> Result<&'a [u8], Rejection> {
        check_buffer_bounds(self.buffer, self.position, len)?;
        let slice = &self.buffer[self.position..self.position + len];
        self.position += len;
        Ok(slice)
    }

    /// Everything not yet consumed
    pub(crate) fn rest(&self) -> &'a [u8] {
        &self.buffer[self.position..]
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }
}
