//! Output bookkeeping shared by the encoder and decoder.

use core::ops::Range;

use super::*;

/// Write position into an output buffer.
///
/// Every write is bounds checked against the buffer, so a transcode can never
/// touch memory past the window it was handed.
pub(crate) struct Cursor<'a> {
    buf: &'a mut [u8],
    written: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Cursor { buf, written: 0 }
    }

    /// Bytes written so far.
    pub(crate) fn written(&self) -> usize {
        self.written
    }

    /// Read back a byte of the underlying buffer. Used by in-place transcoding,
    /// where the unread source lives in the same buffer ahead of the cursor.
    pub(crate) fn peek(&self, index: usize) -> u8 {
        self.buf[index]
    }

    pub(crate) fn push(&mut self, byte: u8, err: Error) -> Result<()> {
        match self.buf.get_mut(self.written) {
            Some(slot) => {
                *slot = byte;
                self.written += 1;
                Ok(())
            }
            None => Err(err),
        }
    }

    /// Write two bytes, or nothing if both do not fit.
    pub(crate) fn push_pair(&mut self, first: u8, second: u8, err: Error) -> Result<()> {
        if self.buf.len() - self.written < 2 {
            return Err(err);
        }
        self.buf[self.written] = first;
        self.buf[self.written + 1] = second;
        self.written += 2;
        Ok(())
    }

    pub(crate) fn as_written(&self) -> &[u8] {
        &self.buf[..self.written]
    }
}

/// Check that `src` is a well formed range inside a buffer of `len` bytes.
pub(crate) fn check_source(src: &Range<usize>, len: usize) -> Result<()> {
    if src.start > src.end || src.end > len {
        return Err(Error::SourceOutOfBounds {
            start: src.start,
            end: src.end,
            len,
        });
    }
    Ok(())
}

/// Move `buf[src]` so that it ends at the last byte of `buf`, returning the
/// new start of the data.
///
/// The move is correct for any overlap between the old and new position. After
/// it, everything in front of the returned index is free to be overwritten
/// while the data is consumed left to right.
///
/// `src` must already have passed [`check_source`].
pub(crate) fn move_to_tail(buf: &mut [u8], src: Range<usize>) -> usize {
    debug_assert!(check_source(&src, buf.len()).is_ok());
    let start = buf.len() - src.len();
    buf.copy_within(src, start);
    start
}
