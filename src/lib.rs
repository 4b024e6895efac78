//! Serial Line Internet Protocol (SLIP), in place
//!
//! Pure Rust, allocation free implementation of the byte stuffing used by
//! [RFC 1055](https://tools.ietf.org/html/rfc1055) Serial Line IP, able to
//! encode and decode within a single buffer.
//!
//! ## What is SLIP
//!
//! SLIP is a very simple packet framing protocol. A frame is terminated by an
//! `END` byte; `END` and `ESC` bytes inside the payload are replaced by two byte
//! escape sequences so the terminator can never appear in the data. SLIP has no
//! addressing, packet types, error correction or compression.
//!
//! Besides the standard codes, a [`CodeTable`] can escape one extra byte
//! ([`CodeTable::NUL_AWARE`] keeps NUL out of frames, so they survive C string
//! handling) or use entirely custom codes.
//!
//! ## Examples
//!
//! ### Out-of-place
//!
//! ```
//! use slip_in_place::{Decoder, Encoder};
//!
//! const SOURCE: &[u8] = b"Lo\xc0rus"; // END in the middle of the payload
//!
//! let mut frame = [0u8; 16];
//! let slip = Encoder::new();
//! assert_eq!(8, slip.encoded_size(SOURCE));
//! let frame_len = slip.encode(SOURCE, &mut frame).unwrap();
//! assert_eq!(b"Lo\xdb\xdcrus\xc0", &frame[..frame_len]);
//!
//! let mut output = [0u8; 16];
//! let slip = Decoder::new();
//! assert_eq!(6, slip.decoded_size(&frame[..frame_len]));
//! let output_len = slip.decode(&frame[..frame_len], &mut output).unwrap();
//! assert_eq!(SOURCE, &output[..output_len]);
//! ```
//!
//! ### In-place
//!
//! The source can live inside the destination buffer. Encoding needs the
//! buffer to be large enough for the whole frame; decoding always fits.
//!
//! ```
//! use slip_in_place::{Decoder, Encoder};
//!
//! let mut buffer = [b'.'; 16];
//! buffer[..6].copy_from_slice(b"Lo\xc0rus");
//!
//! let frame_len = Encoder::new().encode_in_place(&mut buffer, 0..6).unwrap();
//! assert_eq!(b"Lo\xdb\xdcrus\xc0", &buffer[..frame_len]);
//!
//! let len = Decoder::new().decode_in_place(&mut buffer, 0..frame_len).unwrap();
//! assert_eq!(b"Lo\xc0rus", &buffer[..len]);
//! ```
//!
//! ### Custom codes
//!
//! ```
//! use slip_in_place::{CodeTable, Encoder};
//!
//! const READABLE: CodeTable = CodeTable::new(b'#', b'^', b'D', b'[');
//!
//! let mut frame = [0u8; 16];
//! let len = Encoder::with_table(READABLE).encode(b"Lo^#rus", &mut frame).unwrap();
//! assert_eq!(b"Lo^[^Drus#", &frame[..len]);
//! ```
//!
//! ## Errors
//!
//! Every operation returns a [`Result`]. On error the output buffer may hold
//! a partial frame; nothing is rolled back, so encode into scratch space if the
//! destination must stay intact.
//!
//! ## Features
//!
//! - `log`: log through the [`log`](https://docs.rs/log) crate.
//! - `tracing`: log through the [`tracing`](https://docs.rs/tracing) crate.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![no_std]

#[cfg(test)]
extern crate std;

use core::ops::Range;

mod buffer;
mod codes;
mod decoder;
mod encoder;
mod error;
mod escaped;
mod logging;

pub use codes::{CodeTable, END, ESC, ESC_END, ESC_ESC, ESC_NUL, NUL};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use escaped::Escaped;

/// Size of the standard SLIP frame for `input`. See [`Encoder::encoded_size`].
pub fn encoded_size(input: &[u8]) -> usize {
    Encoder::new().encoded_size(input)
}

/// Size of the standard SLIP frame `input` decodes to. See [`Decoder::decoded_size`].
pub fn decoded_size(input: &[u8]) -> usize {
    Decoder::new().decoded_size(input)
}

/// Encode with the standard codes. See [`Encoder::encode`].
pub fn encode(input: &[u8], output: &mut [u8]) -> Result<usize> {
    Encoder::new().encode(input, output)
}

/// Decode with the standard codes. See [`Decoder::decode`].
pub fn decode(input: &[u8], output: &mut [u8]) -> Result<usize> {
    Decoder::new().decode(input, output)
}

/// Encode `buf[src]` in place with the standard codes. See [`Encoder::encode_in_place`].
pub fn encode_in_place(buf: &mut [u8], src: Range<usize>) -> Result<usize> {
    Encoder::new().encode_in_place(buf, src)
}

/// Decode `buf[src]` in place with the standard codes. See [`Decoder::decode_in_place`].
pub fn decode_in_place(buf: &mut [u8], src: Range<usize>) -> Result<usize> {
    Decoder::new().decode_in_place(buf, src)
}
