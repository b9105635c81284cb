#![allow(missing_docs)]

use core::fmt::Write;

/// Label buffers as a host might hand them over: a few framing bytes, the
/// label text, more framing.
pub const BARE: &[u8] = b"\x08\x02\x12\x0fGulf of America\x1a\x01";
pub const SPLIT: &[u8] = b"\x12\x11Gulf of\x01\n America\x1a";
pub const PARENTHETICAL: &[u8] = b"\x12\x20Gulf of Mexico (Gulf of America)\x1a";
pub const UNRELATED: &[u8] = b"\x12\x0dBay of Bengal\x1a\x12\x0eGulf of Guinea";

/// Printable ASCII as is, the zero-width fill as `·`, anything else as
/// `<xx>`.
pub fn render(buf: &[u8]) -> String {
    let mut out = String::with_capacity(buf.len());
    for &b in buf {
        match b {
            0x00 => out.push('·'),
            0x20..=0x7e => out.push(char::from(b)),
            _ => write!(out, "<{b:02x}>").unwrap(),
        }
    }
    out
}

pub fn rewritten(input: &[u8]) -> Vec<u8> {
    let mut buf = input.to_vec();
    labelpatch::rewrite_label_buffer(&mut buf);
    assert_eq!(buf.len(), input.len(), "rewrite changed the buffer length");
    buf
}
