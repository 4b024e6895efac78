/// Type alias for handling SLIP errors.
pub type Result<T> = core::result::Result<T, self::Error>;

/// Errors encountered by SLIP.
///
/// On any error the output buffer may hold a partially transcoded frame. Its
/// contents are not meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The output buffer is smaller than the smallest possible result.
    #[error("output buffer of {capacity} bytes is smaller than the minimum of {required}")]
    OutputTooSmall {
        /// Minimum number of bytes the output must hold.
        required: usize,
        /// Bytes actually available.
        capacity: usize,
    },
    /// An in-place source range does not lie inside the buffer.
    #[error("source range {start}..{end} is outside a buffer of {len} bytes")]
    SourceOutOfBounds {
        /// First byte of the source range.
        start: usize,
        /// One past the last byte of the source range.
        end: usize,
        /// Length of the buffer.
        len: usize,
    },

    // Encoder errors
    /// The encoder does not have enough space to write an escape sequence.
    #[error("no output space for an escape sequence")]
    NoOutputSpaceForEscapeSequence,
    /// The encoder does not have enough space to write the final SLIP end byte.
    #[error("no output space for the end byte")]
    NoOutputSpaceForEndByte,

    // Shared
    /// There is not enough space to write input data into the output buffer.
    #[error("no output space for input data")]
    NoOutputSpaceForInputData,

    // Decoder errors
    /// The decoder was given no input at all.
    #[error("nothing to decode")]
    EmptyInput,
    /// The input ends with an escape byte that has no pair.
    #[error("input ends inside an escape sequence")]
    TruncatedEscapeSequence,
    /// The decoder cannot process the SLIP escape sequence.
    #[error("invalid escape sequence byte {byte:#04x}")]
    BadEscapeSequenceDecode {
        /// The byte that followed the escape.
        byte: u8,
    },
}

impl Error {
    /// Whether the error means the output buffer was too small for the result.
    pub fn is_output_exhausted(&self) -> bool {
        matches!(
            self,
            Error::OutputTooSmall { .. }
                | Error::NoOutputSpaceForEscapeSequence
                | Error::NoOutputSpaceForEndByte
                | Error::NoOutputSpaceForInputData
        )
    }

    /// Whether the error was caused by malformed encoded input.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            Error::TruncatedEscapeSequence | Error::BadEscapeSequenceDecode { .. }
        )
    }
}
