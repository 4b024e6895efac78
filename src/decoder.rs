use core::ops::Range;

use super::*;
use crate::buffer::{self, Cursor};
use crate::logging::{debug, trace};

/// SLIP decode context
///
/// Like [`Encoder`], a `Decoder` only carries its [`CodeTable`]; each call
/// decodes one frame from a complete buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Decoder {
    table: CodeTable,
}

/// Where the decoder is inside the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    AfterEscape,
}

/// What to do after feeding one input byte.
enum Step {
    Continue,
    EndOfFrame,
}

impl Decoder {
    /// Create a new context for standard SLIP decoding
    pub const fn new() -> Self {
        Decoder::with_table(CodeTable::STANDARD)
    }

    /// Create a new context decoding with a custom code table
    pub const fn with_table(table: CodeTable) -> Self {
        Decoder { table }
    }

    /// The code table this decoder unescapes with
    pub const fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Number of bytes `decode` writes for `input`, assuming its escape
    /// sequences are valid.
    ///
    /// Only the presence of escapes is looked at, not whether the byte after
    /// each one is legal, so `decode` can still fail on input this accepts.
    /// Counting stops at the first unescaped end byte.
    pub fn decoded_size(&self, input: &[u8]) -> usize {
        let mut size = 0;
        let mut bytes = input.iter();
        while let Some(&byte) = bytes.next() {
            if byte == self.table.esc() {
                if bytes.next().is_some() {
                    size += 1;
                }
            } else if byte == self.table.end() {
                break;
            } else {
                size += 1;
            }
        }
        size
    }

    /// SLIP decode the input slice into the output slice.
    ///
    /// Decoding stops at the first unescaped end byte, which is consumed but
    /// not copied; anything after it is ignored. Input without an end byte is
    /// decoded up to its last byte. Returns the number of bytes written.
    pub fn decode(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        check_lengths(input.len(), output.len())?;

        let mut cursor = Cursor::new(output);
        let mut state = State::Normal;
        let mut res = Ok(());
        for (offset, &byte) in input.iter().enumerate() {
            match self.decode_byte(&mut state, byte, &mut cursor) {
                Ok(Step::Continue) => continue,
                Ok(Step::EndOfFrame) => break,
                Err(err) => {
                    res = Err((offset, err));
                    break;
                }
            }
        }
        self.report(res, state, &cursor, input.len())
    }

    /// Decode the frame in `buf[src]` into the start of `buf`, returning the
    /// number of bytes written.
    ///
    /// Decoding never writes ahead of the byte it is reading, so no
    /// relocation is needed. The whole of `buf` is available as output.
    pub fn decode_in_place(&self, buf: &mut [u8], src: Range<usize>) -> Result<usize> {
        buffer::check_source(&src, buf.len())?;
        check_lengths(src.len(), buf.len())?;
        let input_len = src.len();
        let start = src.start;

        let mut cursor = Cursor::new(buf);
        let mut state = State::Normal;
        let mut res = Ok(());
        for i in src {
            let byte = cursor.peek(i);
            match self.decode_byte(&mut state, byte, &mut cursor) {
                Ok(Step::Continue) => continue,
                Ok(Step::EndOfFrame) => break,
                Err(err) => {
                    res = Err((i - start, err));
                    break;
                }
            }
        }
        self.report(res, state, &cursor, input_len)
    }

    /// Feed one byte through the `Normal`/`AfterEscape` state machine.
    fn decode_byte(&self, state: &mut State, byte: u8, cursor: &mut Cursor<'_>) -> Result<Step> {
        match *state {
            State::AfterEscape => {
                let special = self
                    .table
                    .unescape(byte)
                    .ok_or(Error::BadEscapeSequenceDecode { byte })?;
                cursor.push(special, Error::NoOutputSpaceForInputData)?;
                *state = State::Normal;
            }
            State::Normal if byte == self.table.end() => return Ok(Step::EndOfFrame),
            State::Normal if byte == self.table.esc() => *state = State::AfterEscape,
            State::Normal => cursor.push(byte, Error::NoOutputSpaceForInputData)?,
        }
        Ok(Step::Continue)
    }

    fn report(
        &self,
        res: core::result::Result<(), (usize, Error)>,
        state: State,
        cursor: &Cursor<'_>,
        input_len: usize,
    ) -> Result<usize> {
        let res = match (res, state) {
            (Ok(()), State::AfterEscape) => Err((input_len, Error::TruncatedEscapeSequence)),
            (res, _) => res,
        };
        match res {
            Ok(()) => {
                trace!(
                    "decoded {} input bytes into {}",
                    input_len,
                    Escaped::new(cursor.as_written())
                );
                Ok(cursor.written())
            }
            Err((offset, err)) => {
                debug!(
                    "decode failed at input offset {} of {}: {}",
                    offset, input_len, err
                );
                Err(err)
            }
        }
    }
}

fn check_lengths(input_len: usize, capacity: usize) -> Result<()> {
    if input_len < 1 {
        debug!("refusing to decode empty input");
        return Err(Error::EmptyInput);
    }
    if capacity < 1 {
        return Err(Error::OutputTooSmall {
            required: 1,
            capacity,
        });
    }
    Ok(())
}
