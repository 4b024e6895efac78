//! Human readable code tables and helpers for writing frames as plain strings.
#![allow(dead_code)]

use slip_in_place::CodeTable;

/// `END='#' ESC='^' ESC_END='D' ESC_ESC='['`
pub const READABLE: CodeTable = CodeTable::new(b'#', b'^', b'D', b'[');

/// [`READABLE`] plus `NUL='0'` escaped as `'@'`
pub const READABLE_NUL: CodeTable = READABLE.with_extra(b'0', b'@');

/// Sentinel filling buffers, used to detect writes past the window.
pub const FILL: u8 = b'!';

/// Translate the codes of `from` into the codes of `to`, byte by byte.
///
/// Both tables must have the same number of specials.
pub fn recode(from: &CodeTable, to: &CodeTable, bytes: &[u8]) -> Vec<u8> {
    assert_eq!(from.num_specials(), to.num_specials());
    bytes
        .iter()
        .map(|&b| {
            if let Some(i) = from.specials().iter().position(|&c| c == b) {
                to.specials()[i]
            } else if let Some(i) = from.escapes().iter().position(|&c| c == b) {
                to.escapes()[i]
            } else {
                b
            }
        })
        .collect()
}

/// The binary table a readable table is tested against.
pub fn binary_for(readable: &CodeTable) -> CodeTable {
    if readable.is_nul_aware() {
        CodeTable::NUL_AWARE
    } else {
        CodeTable::STANDARD
    }
}

/// A buffer of `size` sentinel bytes, with `src` copied to the front when
/// `in_place` is set.
pub fn buffer(size: usize, src: &[u8], in_place: bool) -> Vec<u8> {
    let mut buf = vec![FILL; size];
    if in_place {
        buf[..src.len()].copy_from_slice(src);
    }
    buf
}
