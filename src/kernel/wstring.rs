//! Null-terminated wide strings and text decoding.

use std::fmt;

use crate::error::{ErrResult, ParseError};

/// Text encodings recognized by [`guess_encoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// 7-bit ASCII, decoded the same as Windows-1252.
    Ansi,
    Win1252,
    Utf8,
    Utf16be,
    Utf16le,
    Utf32be,
    Utf32le,
    /// Standard Compression Scheme for Unicode. Detected, but not decoded.
    Scsu,
    /// Binary Ordered Compression for Unicode. Detected, but not decoded.
    Bocu1,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Ansi => "ANSI",
            Encoding::Win1252 => "Windows-1252",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16be => "UTF-16 BE",
            Encoding::Utf16le => "UTF-16 LE",
            Encoding::Utf32be => "UTF-32 BE",
            Encoding::Utf32le => "UTF-32 LE",
            Encoding::Scsu => "SCSU",
            Encoding::Bocu1 => "BOCU-1",
        })
    }
}

/// Guesses the encoding of the raw bytes of a text file, returning it along
/// with the size of the byte order mark, if any.
///
/// Without a BOM, pure ASCII is [`Encoding::Ansi`], valid UTF-8 is
/// [`Encoding::Utf8`], and anything else falls back to
/// [`Encoding::Win1252`].
pub fn guess_encoding(data: &[u8]) -> (Encoding, usize) {
    // Longer marks first: UTF-32 LE starts with the UTF-16 LE mark.
    const BOMS: [(&[u8], Encoding); 7] = [
        (&[0xff, 0xfe, 0x00, 0x00], Encoding::Utf32le),
        (&[0x00, 0x00, 0xfe, 0xff], Encoding::Utf32be),
        (&[0xef, 0xbb, 0xbf], Encoding::Utf8),
        (&[0x0e, 0xfe, 0xff], Encoding::Scsu),
        (&[0xfb, 0xee, 0x28], Encoding::Bocu1),
        (&[0xff, 0xfe], Encoding::Utf16le),
        (&[0xfe, 0xff], Encoding::Utf16be),
    ];

    for (bom, enc) in BOMS {
        if data.starts_with(bom) {
            return (enc, bom.len());
        }
    }

    if data.is_ascii() {
        (Encoding::Ansi, 0)
    } else if std::str::from_utf8(data).is_ok() {
        (Encoding::Utf8, 0)
    } else {
        (Encoding::Win1252, 0)
    }
}

/// Windows-1252 code points of the bytes `0x80..=0x9f`; unassigned bytes map
/// to the C1 control with the same value.
const WIN1252_HIGH: [u16; 32] = [
    0x20ac, 0x0081, 0x201a, 0x0192, 0x201e, 0x2026, 0x2020, 0x2021, //
    0x02c6, 0x2030, 0x0160, 0x2039, 0x0152, 0x008d, 0x017d, 0x008f, //
    0x0090, 0x2018, 0x2019, 0x201c, 0x201d, 0x2022, 0x2013, 0x2014, //
    0x02dc, 0x2122, 0x0161, 0x203a, 0x0153, 0x009d, 0x017e, 0x0178,
];

fn win1252_to_utf16(b: u8) -> u16 {
    match b {
        0x80..=0x9f => WIN1252_HIGH[(b - 0x80) as usize],
        _ => b as u16,
    }
}

/// An owned, null-terminated UTF-16 string, ready to be passed to the
/// wide-char Win32 functions.
///
/// The buffer always holds at least the terminating null. When it is used as
/// an output buffer, the string ends at the first null.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct WString {
    buf: Vec<u16>,
}

impl Default for WString {
    fn default() -> Self {
        Self { buf: vec![0] }
    }
}

impl WString {
    /// Converts a `&str` into a null-terminated UTF-16 string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        let mut buf: Vec<u16> = s.encode_utf16().collect();
        buf.push(0);
        Self { buf }
    }

    /// Copies a null-terminated UTF-16 string from a raw pointer. A null
    /// pointer gives an empty string.
    ///
    /// # Safety
    /// `p` must be null or point to a readable, null-terminated sequence.
    pub unsafe fn from_wchars_nullt(p: *const u16) -> Self {
        if p.is_null() {
            return Self::default();
        }
        let mut len = 0;
        while *p.add(len) != 0 {
            len += 1;
        }
        Self::from_wchars_slice(std::slice::from_raw_parts(p, len))
    }

    /// Copies UTF-16 chars from a slice, stopping at the first null, if any.
    pub fn from_wchars_slice(src: &[u16]) -> Self {
        let end = src.iter().position(|ch| *ch == 0).unwrap_or(src.len());
        let mut buf = Vec::with_capacity(end + 1);
        buf.extend_from_slice(&src[..end]);
        buf.push(0);
        Self { buf }
    }

    /// Allocates a zero-filled buffer of `num_chars` chars, including the
    /// terminating null, to receive text from a native call.
    pub fn new_alloc_buf(num_chars: usize) -> Self {
        Self {
            buf: vec![0; num_chars.max(1)],
        }
    }

    /// Decodes the raw bytes of a text file, guessing its encoding with
    /// [`guess_encoding`].
    pub fn parse(data: &[u8]) -> ErrResult<Self> {
        let (encoding, bom_len) = guess_encoding(data);
        let data = &data[bom_len..];

        let mut buf: Vec<u16> = match encoding {
            Encoding::Ansi | Encoding::Win1252 => {
                data.iter().copied().map(win1252_to_utf16).collect()
            }
            Encoding::Utf8 => String::from_utf8_lossy(data).encode_utf16().collect(),
            Encoding::Utf16le => data
                .chunks_exact(2)
                .map(|c| u16::from_le_bytes([c[0], c[1]]))
                .collect(),
            Encoding::Utf16be => data
                .chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]))
                .collect(),
            Encoding::Utf32le | Encoding::Utf32be => {
                let mut out = Vec::with_capacity(data.len() / 2);
                let mut tmp = [0u16; 2];
                for c in data.chunks_exact(4) {
                    let bytes = [c[0], c[1], c[2], c[3]];
                    let cp = if encoding == Encoding::Utf32le {
                        u32::from_le_bytes(bytes)
                    } else {
                        u32::from_be_bytes(bytes)
                    };
                    let ch = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
                    out.extend_from_slice(ch.encode_utf16(&mut tmp));
                }
                out
            }
            Encoding::Scsu | Encoding::Bocu1 => {
                return Err(ParseError::Encoding(encoding.to_string()).into());
            }
        };

        // Embedded nulls would truncate the string.
        buf.retain(|ch| *ch != 0);
        buf.push(0);
        Ok(Self { buf })
    }

    /// Number of chars before the terminating null.
    pub fn len(&self) -> usize {
        self.buf.iter().position(|ch| *ch == 0).unwrap_or(self.buf.len())
    }

    /// Tells whether the string has no chars before the terminating null.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the underlying buffer, in chars, including the terminating
    /// null and any slack.
    pub fn buffer_size(&self) -> usize {
        self.buf.len()
    }

    /// Returns a pointer to the null-terminated buffer.
    pub fn as_ptr(&self) -> *const u16 {
        self.buf.as_ptr()
    }

    /// Returns a mutable pointer to the buffer, for native calls that write
    /// into it.
    pub fn as_mut_ptr(&mut self) -> *mut u16 {
        self.buf.as_mut_ptr()
    }

    /// The chars before the terminating null.
    pub fn as_slice(&self) -> &[u16] {
        &self.buf[..self.len()]
    }

    /// The whole buffer, including the terminating null and any slack.
    pub fn as_mut_slice(&mut self) -> &mut [u16] {
        &mut self.buf
    }

    /// Copies the string into `dest`, truncating it if needed. Unless `dest`
    /// is empty, the copy is always null-terminated.
    ///
    /// Returns the number of chars copied, not counting the null.
    pub fn copy_to_slice(&self, dest: &mut [u16]) -> usize {
        if dest.is_empty() {
            return 0;
        }
        let src = self.as_slice();
        let n = src.len().min(dest.len() - 1);
        dest[..n].copy_from_slice(&src[..n]);
        dest[n] = 0;
        n
    }

    /// Converts to a `String`, failing on unpaired surrogates. `Display`
    /// replaces them with U+FFFD instead.
    pub fn to_string_checked(&self) -> Result<String, std::string::FromUtf16Error> {
        String::from_utf16(self.as_slice())
    }
}

impl From<&str> for WString {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for WString {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

impl fmt::Display for WString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in char::decode_utf16(self.as_slice().iter().copied()) {
            fmt::Write::write_char(f, ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for WString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WString({:?})", self.to_string())
    }
}

/// Splits a block of null-separated strings ending with two nulls, the
/// format of environment blocks and `GetLogicalDriveStrings`.
///
/// Parsing stops at the empty string or at the end of the slice.
pub fn parse_multi_z(block: &[u16]) -> Vec<String> {
    block
        .split(|ch| *ch == 0)
        .take_while(|s| !s.is_empty())
        .map(String::from_utf16_lossy)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_null_terminated() {
        let w = WString::from_str("abc");
        assert_eq!(w.len(), 3);
        assert_eq!(w.buffer_size(), 4);
        assert_eq!(w.as_slice(), &[0x61, 0x62, 0x63]);
        assert_eq!(unsafe { *w.as_ptr().add(3) }, 0);
        assert!(WString::default().is_empty());
    }

    #[test]
    fn test_from_wchars() {
        let raw = [0x68u16, 0x69, 0, 0x7a];
        assert_eq!(WString::from_wchars_slice(&raw).to_string(), "hi");
        let w = unsafe { WString::from_wchars_nullt(raw.as_ptr()) };
        assert_eq!(w.to_string(), "hi");
        assert!(unsafe { WString::from_wchars_nullt(std::ptr::null()) }.is_empty());
    }

    #[test]
    fn test_alloc_buf_as_output() {
        let mut w = WString::new_alloc_buf(10);
        assert_eq!(w.buffer_size(), 10);
        assert!(w.is_empty());
        w.as_mut_slice()[..2].copy_from_slice(&[0x4f, 0x4b]);
        assert_eq!(w.to_string(), "OK");
    }

    #[test]
    fn test_copy_to_slice_truncates() {
        let w = WString::from_str("hello");
        let mut dest = [0xffffu16; 4];
        assert_eq!(w.copy_to_slice(&mut dest), 3);
        assert_eq!(dest, [0x68, 0x65, 0x6c, 0]);
        assert_eq!(w.copy_to_slice(&mut []), 0);
    }

    #[test]
    fn test_guess_encoding() {
        assert_eq!(guess_encoding(b"plain"), (Encoding::Ansi, 0));
        assert_eq!(guess_encoding("çã".as_bytes()), (Encoding::Utf8, 0));
        assert_eq!(guess_encoding(&[0x61, 0xe9, 0x62]), (Encoding::Win1252, 0));
        assert_eq!(guess_encoding(&[0xef, 0xbb, 0xbf, 0x61]), (Encoding::Utf8, 3));
        assert_eq!(guess_encoding(&[0xff, 0xfe, 0x61, 0x00]), (Encoding::Utf16le, 2));
        assert_eq!(guess_encoding(&[0xff, 0xfe, 0x00, 0x00]), (Encoding::Utf32le, 4));
        assert_eq!(guess_encoding(&[0xfe, 0xff, 0x00, 0x61]), (Encoding::Utf16be, 2));
        assert_eq!(guess_encoding(&[0xfb, 0xee, 0x28]), (Encoding::Bocu1, 3));
    }

    #[test]
    fn test_parse_decodes() {
        let utf16 = [0xff, 0xfe, 0x41, 0x00, 0x3a, 0x04];
        assert_eq!(WString::parse(&utf16).unwrap().to_string(), "Aк");
        let win1252 = [0x80, 0x20, 0xe9, 0x9f];
        assert_eq!(WString::parse(&win1252).unwrap().to_string(), "€ éŸ");
        let utf32be = [0x00, 0x00, 0xfe, 0xff, 0x00, 0x01, 0xf6, 0x00];
        assert_eq!(WString::parse(&utf32be).unwrap().to_string(), "\u{1f600}");
        assert!(WString::parse(&[0x0e, 0xfe, 0xff, 0x41]).is_err());
    }

    #[test]
    fn test_display_replaces_lone_surrogate() {
        let w = WString::from_wchars_slice(&[0x61, 0xd800]);
        assert_eq!(w.to_string(), "a\u{fffd}");
        assert!(w.to_string_checked().is_err());
    }

    #[test]
    fn test_parse_multi_z() {
        let block: Vec<u16> = "C:\\\0D:\\\0\0garbage".encode_utf16().collect();
        assert_eq!(parse_multi_z(&block), vec!["C:\\", "D:\\"]);
        assert!(parse_multi_z(&[0, 0]).is_empty());
    }
}
