/// Frame end
pub const END: u8 = 0xC0;

/// Frame escape
pub const ESC: u8 = 0xDB;

/// Transposed frame end
pub const ESC_END: u8 = 0xDC;

/// Transposed frame escape
pub const ESC_ESC: u8 = 0xDD;

/// NUL, the extra special of the NUL-aware table (nonstandard)
pub const NUL: u8 = 0x00;

/// Transposed NUL (nonstandard)
pub const ESC_NUL: u8 = 0xDE;

/// The set of special bytes a codec escapes, and the bytes they are transposed to.
///
/// Specials and escapes are kept as parallel arrays: `specials()[i]` is written
/// as `esc, escapes()[i]`. Index 0 is the frame end, index 1 the escape itself
/// and index 2 the optional extra special.
///
/// The codes are expected to be pairwise distinct. This is not checked.
///
/// ```
/// use slip_in_place::CodeTable;
///
/// const READABLE: CodeTable = CodeTable::new(b'#', b'^', b'D', b'[');
///
/// assert_eq!(2, READABLE.num_specials());
/// assert_eq!(Some(b'D'), READABLE.escape_for(b'#'));
/// assert_eq!(Some(b'^'), READABLE.unescape(b'['));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeTable {
    specials: [u8; CodeTable::MAX_SPECIALS],
    escapes: [u8; CodeTable::MAX_SPECIALS],
}

impl CodeTable {
    /// Largest number of specials any table can carry.
    pub const MAX_SPECIALS: usize = 3;

    /// RFC 1055 codes: `END=0xC0 ESC=0xDB ESC_END=0xDC ESC_ESC=0xDD`.
    pub const STANDARD: CodeTable = CodeTable::new(END, ESC, ESC_END, ESC_ESC);

    /// Standard codes plus `NUL=0x00` escaped as `ESC_NUL=0xDE`, so frames never
    /// contain a NUL byte.
    pub const NUL_AWARE: CodeTable = CodeTable::STANDARD.with_extra(NUL, ESC_NUL);

    /// Build a table with the two mandatory specials.
    pub const fn new(end: u8, esc: u8, esc_end: u8, esc_esc: u8) -> Self {
        CodeTable {
            specials: [end, esc, 0],
            escapes: [esc_end, esc_esc, 0],
        }
    }

    /// Add a third special `extra`, transposed to `esc_extra`.
    ///
    /// An `esc_extra` of zero disables the extra special.
    pub const fn with_extra(self, extra: u8, esc_extra: u8) -> Self {
        CodeTable {
            specials: [self.specials[0], self.specials[1], extra],
            escapes: [self.escapes[0], self.escapes[1], esc_extra],
        }
    }

    /// Frame end byte.
    pub const fn end(&self) -> u8 {
        self.specials[0]
    }

    /// Escape introducer byte.
    pub const fn esc(&self) -> u8 {
        self.specials[1]
    }

    /// Byte following `esc` that stands for a literal `end`.
    pub const fn esc_end(&self) -> u8 {
        self.escapes[0]
    }

    /// Byte following `esc` that stands for a literal `esc`.
    pub const fn esc_esc(&self) -> u8 {
        self.escapes[1]
    }

    /// The extra special and its transposed byte, if the table has one.
    pub const fn extra(&self) -> Option<(u8, u8)> {
        if self.is_nul_aware() {
            Some((self.specials[2], self.escapes[2]))
        } else {
            None
        }
    }

    /// Whether the table escapes a third special.
    pub const fn is_nul_aware(&self) -> bool {
        self.escapes[2] != 0
    }

    /// Number of special bytes, 2 or 3.
    pub const fn num_specials(&self) -> usize {
        if self.is_nul_aware() {
            3
        } else {
            2
        }
    }

    /// Special bytes in priority order.
    pub fn specials(&self) -> &[u8] {
        &self.specials[..self.num_specials()]
    }

    /// Transposed bytes, parallel to [`CodeTable::specials`].
    pub fn escapes(&self) -> &[u8] {
        &self.escapes[..self.num_specials()]
    }

    /// The byte that follows `esc` when encoding `byte`, or `None` if `byte` is
    /// not special.
    #[inline]
    pub fn escape_for(&self, byte: u8) -> Option<u8> {
        self.specials()
            .iter()
            .position(|&special| special == byte)
            .map(|i| self.escapes[i])
    }

    /// The special byte represented by `esc, byte`, or `None` if that is not a
    /// valid escape sequence.
    #[inline]
    pub fn unescape(&self, byte: u8) -> Option<u8> {
        self.escapes()
            .iter()
            .position(|&escape| escape == byte)
            .map(|i| self.specials[i])
    }

    /// Whether `byte` must be escaped.
    #[inline]
    pub fn is_special(&self, byte: u8) -> bool {
        self.specials().contains(&byte)
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        CodeTable::STANDARD
    }
}
