use core::fmt;

/// Displays raw bytes as a C-style escaped string literal.
///
/// Printable ASCII is shown as is, the usual C escapes (`\0`, `\n`, `\\`, ...)
/// are used where they exist and every other byte is shown as a three digit
/// octal escape, which is how SLIP codes are traditionally written.
///
/// ```
/// use slip_in_place::Escaped;
///
/// assert_eq!("\"Lo\\333\\334rus\\300\"", Escaped::new(b"Lo\xdb\xdcrus\xc0").to_string());
/// assert_eq!("a\\0b", Escaped::new(b"a\0b").unquoted().to_string());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a> {
    bytes: &'a [u8],
    quoted: bool,
}

impl<'a> Escaped<'a> {
    /// Wrap `bytes`, surrounded by double quotes when displayed.
    pub fn new(bytes: &'a [u8]) -> Self {
        Escaped {
            bytes,
            quoted: true,
        }
    }

    /// Display without the surrounding quotes.
    pub fn unquoted(self) -> Self {
        Escaped {
            quoted: false,
            ..self
        }
    }
}

fn c_escape(byte: u8) -> Option<char> {
    Some(match byte {
        0x00 => '0',
        b'\'' => '\'',
        b'"' => '"',
        b'?' => '?',
        b'\\' => '\\',
        0x07 => 'a',
        0x08 => 'b',
        0x0c => 'f',
        b'\n' => 'n',
        b'\r' => 'r',
        b'\t' => 't',
        0x0b => 'v',
        _ => return None,
    })
}

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            f.write_str("\"")?;
        }
        for &byte in self.bytes {
            if let Some(c) = c_escape(byte) {
                write!(f, "\\{}", c)?;
            } else if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\{:03o}", byte)?;
            }
        }
        if self.quoted {
            f.write_str("\"")?;
        }
        Ok(())
    }
}
