mod common;

use common::*;
use slip_in_place::{CodeTable, Encoder, Error, Result};

const MAXBUF: usize = 30;

fn encode(
    table: &CodeTable,
    src: &[u8],
    buf: &mut [u8],
    cap: usize,
    in_place: bool,
) -> Result<usize> {
    let slip = Encoder::with_table(*table);
    if in_place {
        slip.encode_in_place(&mut buf[..cap], 0..src.len())
    } else {
        slip.encode(src, &mut buf[..cap])
    }
}

/// Encode the readable `input` with `readable` and its binary counterpart,
/// both in place and out of place, into a window of `cap` bytes.
///
/// `expected` is the readable frame, or `None` if encoding must fail. Either
/// way the byte just past the window must not be touched.
fn check(readable: CodeTable, input: &str, cap: usize, expected: Option<&str>) {
    for table in [readable, binary_for(&readable)] {
        for in_place in [false, true] {
            let src = recode(&readable, &table, input.as_bytes());
            let mut buf = buffer(MAXBUF, &src, in_place);

            let res = encode(&table, &src, &mut buf, cap, in_place);
            match expected {
                Some(expected) => {
                    let size = res.unwrap_or_else(|err| {
                        panic!("encoding {:?} (in place: {}) failed: {}", input, in_place, err)
                    });
                    assert_eq!(expected.len(), Encoder::with_table(table).encoded_size(&src));
                    assert_eq!(expected.len(), size);
                    assert_eq!(
                        expected.as_bytes(),
                        &recode(&table, &readable, &buf[..size])[..],
                        "input {:?}, in place: {}",
                        input,
                        in_place
                    );
                }
                None => assert!(res.is_err(), "input {:?}, in place: {}", input, in_place),
            }
            assert_eq!(FILL, buf[cap]);
        }
    }
}

const CASES: &[(&str, &str)] = &[
    ("", "#"),
    ("Lorus", "Lorus#"),
    ("Lo^#rus", "Lo^[^Drus#"),
    ("Lorus^", "Lorus^[#"),
    ("Lorus#", "Lorus^D#"),
    ("Lorus^##", "Lorus^[^D^D#"),
    ("##", "^D^D#"),
];

const NUL_CASES: &[(&str, &str)] = &[
    ("0", "^@#"),
    ("Lo0rus", "Lo^@rus#"),
    ("Lo^#0rus", "Lo^[^D^@rus#"),
    ("Lorus00", "Lorus^@^@#"),
];

#[test]
fn large_buffer() {
    for &(input, expected) in CASES {
        check(READABLE, input, 20, Some(expected));
        check(READABLE_NUL, input, 20, Some(expected));
    }
    for &(input, expected) in NUL_CASES {
        check(READABLE_NUL, input, 20, Some(expected));
    }
}

#[test]
fn exact_buffer() {
    for &(input, expected) in CASES {
        check(READABLE, input, expected.len(), Some(expected));
    }
    for &(input, expected) in NUL_CASES {
        check(READABLE_NUL, input, expected.len(), Some(expected));
    }
}

#[test]
fn buffer_overrun() {
    for &(input, expected) in CASES {
        check(READABLE, input, expected.len() - 1, None);
    }
    for &(input, expected) in NUL_CASES {
        check(READABLE_NUL, input, expected.len() - 1, None);
    }
}

/// Without the NUL-aware table, NUL-ish bytes pass through untouched.
#[test]
fn nul_not_escaped_by_plain_table() {
    check(READABLE, "Lo0rus", 20, Some("Lo0rus#"));
}

#[test]
fn bad_inputs() {
    let mut buf = [0u8; 20];
    let slip = Encoder::new();

    assert_eq!(
        Err(Error::OutputTooSmall { required: 6, capacity: 0 }),
        slip.encode(b"Lorus", &mut buf[..0])
    );
    assert_eq!(
        Err(Error::OutputTooSmall { required: 6, capacity: 5 }),
        slip.encode(b"Lorus", &mut buf[..5])
    );
    assert_eq!(
        Err(Error::SourceOutOfBounds { start: 0, end: 21, len: 20 }),
        slip.encode_in_place(&mut buf, 0..21)
    );
}

/// The in-place source does not have to start at the front of the buffer.
#[test]
fn in_place_source_anywhere() {
    const FRAME: &[u8] = b"Lo\xdb\xdcrus\xc0";
    for offset in 0..=8 {
        let mut buf = [FILL; 16];
        buf[offset..offset + 6].copy_from_slice(b"Lo\xc0rus");
        let size = Encoder::new()
            .encode_in_place(&mut buf, offset..offset + 6)
            .unwrap();
        assert_eq!(FRAME, &buf[..size], "offset {}", offset);
    }
}

/// Encoding a byte string that already contains a frame end.
#[test]
fn end_in_middle() {
    let mut ebuf = [0u8; 16];
    let size = slip_in_place::encode(b"Lo\xc0rus", &mut ebuf).unwrap();
    assert_eq!(b"Lo\xdb\xdcrus\xc0", &ebuf[..size]);
}

#[test]
fn one_byte_short() {
    const SOURCE: &[u8] = b"\xdbLo\xc0rus\xdb";
    let required = slip_in_place::encoded_size(SOURCE);
    assert_eq!(12, required);

    let mut buf = [FILL; 16];
    assert!(slip_in_place::encode(SOURCE, &mut buf[..required - 1]).is_err());
    assert_eq!(FILL, buf[required - 1]);

    let mut buf = [FILL; 16];
    buf[..SOURCE.len()].copy_from_slice(SOURCE);
    assert!(slip_in_place::encode_in_place(&mut buf[..required - 1], 0..SOURCE.len()).is_err());
    assert_eq!(FILL, buf[required - 1]);
}
