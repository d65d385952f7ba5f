// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! C-string literal bodies: decoding what the debugger writes, and writing
//! bytes back the same way.

use std::fmt;

use crate::error::DecodeError;

fn named_escape(esc: u8) -> Option<u8> {
    Some(match esc {
        b'a' => 0x07,
        b'b' => 0x08,
        b't' => b'\t',
        b'n' => b'\n',
        b'v' => 0x0b,
        b'f' => 0x0c,
        b'r' => b'\r',
        b'"' => b'"',
        b'\\' => b'\\',
        _ => return None,
    })
}

fn escape_name(byte: u8) -> Option<char> {
    Some(match byte {
        0x07 => 'a',
        0x08 => 'b',
        b'\t' => 't',
        b'\n' => 'n',
        0x0b => 'v',
        0x0c => 'f',
        b'\r' => 'r',
        b'"' => '"',
        b'\\' => '\\',
        _ => return None,
    })
}

fn is_octal(b: &u8) -> bool {
    (b'0'..=b'7').contains(b)
}

/// Bytes the debugger writes as `\NNN`: everything non-printable that has no
/// named escape.
fn is_canonical_octal(byte: u8) -> bool {
    byte >= 127 || (byte < 32 && !(7..=13).contains(&byte))
}

/// Decode the text between the quotes of a string literal into raw bytes.
///
/// The result is not assumed to be UTF-8; it may carry target memory.
pub fn decode(body: &str) -> Result<Vec<u8>, DecodeError> {
    let bytes = body.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while let Some(&b) = bytes.get(i) {
        if b != b'\\' {
            if !(32..=126).contains(&b) || b == b'"' {
                return Err(DecodeError::Unescaped { byte: b, offset: i });
            }
            out.push(b);
            i += 1;
            continue;
        }

        let Some(&esc) = bytes.get(i + 1) else {
            return Err(DecodeError::Truncated { offset: i });
        };
        if let Some(byte) = named_escape(esc) {
            out.push(byte);
            i += 2;
            continue;
        }
        if !is_octal(&esc) {
            return Err(DecodeError::InvalidEscape { ch: char::from(esc), offset: i });
        }

        // Always exactly three digits.
        let Some(digits) = bytes.get(i + 1..i + 4) else {
            return Err(DecodeError::Truncated { offset: i });
        };
        if let Some(&bad) = digits.iter().find(|d| !is_octal(d)) {
            return Err(DecodeError::InvalidEscape { ch: char::from(bad), offset: i });
        }
        let digits_text = String::from_utf8_lossy(digits).into_owned();
        let value = digits.iter().fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
        let byte = u8::try_from(value)
            .map_err(|_| DecodeError::OctalOutOfRange { digits: digits_text.clone(), offset: i })?;
        if !is_canonical_octal(byte) {
            return Err(DecodeError::Noncanonical { digits: digits_text, offset: i });
        }
        out.push(byte);
        i += 4;
    }

    Ok(out)
}

/// Write `bytes` as a quoted literal in the debugger's own canonical form,
/// so that [`decode`] reads back exactly `bytes`.
pub fn write_quoted(f: &mut impl fmt::Write, bytes: &[u8]) -> fmt::Result {
    f.write_char('"')?;
    for &byte in bytes {
        if let Some(name) = escape_name(byte) {
            f.write_char('\\')?;
            f.write_char(name)?;
        } else if is_canonical_octal(byte) {
            write!(f, "\\{:03o}", byte)?;
        } else {
            f.write_char(char::from(byte))?;
        }
    }
    f.write_char('"')
}

#[cfg(test)]
#[path = "../cstring_tests.rs"]
mod tests;
