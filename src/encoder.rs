use core::ops::Range;

use super::*;
use crate::buffer::{self, Cursor};
use crate::logging::{debug, trace};

/// SLIP encode context
///
/// Encoding is stateless; the context only carries the [`CodeTable`] in use, so
/// one `Encoder` can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Encoder {
    table: CodeTable,
}

impl Encoder {
    /// Create a new context for standard SLIP encoding
    pub const fn new() -> Self {
        Encoder::with_table(CodeTable::STANDARD)
    }

    /// Create a new context encoding with a custom code table
    pub const fn with_table(table: CodeTable) -> Self {
        Encoder { table }
    }

    /// The code table this encoder escapes with
    pub const fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Exact number of bytes `encode` writes for `input`, end byte included.
    pub fn encoded_size(&self, input: &[u8]) -> usize {
        let specials = input.iter().filter(|&&b| self.table.is_special(b)).count();
        input.len() + specials + 1
    }

    /// Encode a buffer into a SLIP frame and return the number of output bytes written.
    ///
    /// `output` must hold at least `input.len() + 1` bytes, and more if `input`
    /// contains specials; [`Encoder::encoded_size`] gives the exact figure.
    pub fn encode(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        check_capacity(input.len(), output.len())?;

        let mut cursor = Cursor::new(output);
        let res = input
            .iter()
            .try_for_each(|&byte| self.encode_byte(byte, &mut cursor))
            .and_then(|()| self.finish(&mut cursor));
        self.report(res, &cursor, input.len())
    }

    /// Encode `buf[src]` into a SLIP frame written from the start of `buf`,
    /// returning the number of bytes written.
    ///
    /// The source is first moved to the tail of `buf`, so the encoded frame only
    /// ever overwrites bytes that were already consumed. Everything in `buf`
    /// past the returned size is clobbered.
    pub fn encode_in_place(&self, buf: &mut [u8], src: Range<usize>) -> Result<usize> {
        buffer::check_source(&src, buf.len())?;
        let len = src.len();
        check_capacity(len, buf.len())?;
        let start = buffer::move_to_tail(buf, src);

        let mut cursor = Cursor::new(buf);
        let res = (start..start + len)
            .try_for_each(|i| {
                let byte = cursor.peek(i);
                self.encode_byte(byte, &mut cursor)
            })
            .and_then(|()| self.finish(&mut cursor));
        self.report(res, &cursor, len)
    }

    fn encode_byte(&self, byte: u8, cursor: &mut Cursor<'_>) -> Result<()> {
        match self.table.escape_for(byte) {
            Some(escaped) => cursor.push_pair(
                self.table.esc(),
                escaped,
                Error::NoOutputSpaceForEscapeSequence,
            ),
            None => cursor.push(byte, Error::NoOutputSpaceForInputData),
        }
    }

    fn finish(&self, cursor: &mut Cursor<'_>) -> Result<()> {
        cursor.push(self.table.end(), Error::NoOutputSpaceForEndByte)
    }

    fn report(&self, res: Result<()>, cursor: &Cursor<'_>, input_len: usize) -> Result<usize> {
        match res {
            Ok(()) => {
                trace!(
                    "encoded {} bytes into {}",
                    input_len,
                    Escaped::new(cursor.as_written())
                );
                Ok(cursor.written())
            }
            Err(err) => {
                debug!(
                    "encode of {} bytes failed after writing {}: {}",
                    input_len,
                    cursor.written(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// A frame is never shorter than its input plus the end byte.
fn check_capacity(input_len: usize, capacity: usize) -> Result<()> {
    let required = input_len + 1;
    if capacity < required {
        debug!(
            "output of {} bytes cannot hold {} input bytes",
            capacity, input_len
        );
        return Err(Error::OutputTooSmall { required, capacity });
    }
    Ok(())
}
