use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The `GUID` struct, a 128-bit identifier of COM classes and interfaces.
///
/// Serializes as its braced string form.
///
/// ```
/// use safewin::ole::Guid;
///
/// let g: Guid = "00000000-0000-0000-c000-000000000046".parse()?;
/// assert_eq!(g.to_string(), "{00000000-0000-0000-C000-000000000046}");
/// # Ok::<_, safewin::ParseError>(())
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// A [`Guid`] identifying an interface.
pub type Iid = Guid;

/// A [`Guid`] identifying a class.
pub type Clsid = Guid;

impl Guid {
    /// Builds the GUID from the five groups of its string form, so
    /// `{AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE}` is written as
    /// `from_parts(0xaaaaaaaa, 0xbbbb, 0xcccc, 0xdddd, 0xeeeeeeeeeeee)`.
    pub const fn from_parts(p1: u32, p2: u16, p3: u16, p4: u16, p5: u64) -> Self {
        Self {
            data1: p1,
            data2: p2,
            data3: p3,
            data4: [
                (p4 >> 8) as u8,
                p4 as u8,
                (p5 >> 40) as u8,
                (p5 >> 32) as u8,
                (p5 >> 24) as u8,
                (p5 >> 16) as u8,
                (p5 >> 8) as u8,
                p5 as u8,
            ],
        }
    }

    /// The all-zero `GUID_NULL`.
    pub const fn null() -> Self {
        Self::from_parts(0, 0, 0, 0, 0)
    }

    pub const fn is_null(&self) -> bool {
        self.data1 == 0 && self.data2 == 0 && self.data3 == 0 && u64::from_ne_bytes(self.data4) == 0
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7],
        )
    }
}

impl FromStr for Guid {
    type Err = ParseError;

    /// Parses `XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX`, optionally in braces, in
    /// any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::Guid(s.to_owned());

        let inner = match (s.strip_prefix('{'), s.strip_suffix('}')) {
            (Some(_), Some(_)) if s.len() >= 2 => &s[1..s.len() - 1],
            (None, None) => s,
            _ => return Err(err()),
        };

        let groups: Vec<&str> = inner.split('-').collect();
        let lens = [8, 4, 4, 4, 12];
        if groups.len() != lens.len()
            || groups
                .iter()
                .zip(lens)
                .any(|(g, len)| g.len() != len || !g.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            return Err(err());
        }

        // All groups are validated hex of bounded length.
        let hex = |g: &str| u64::from_str_radix(g, 16).map_err(|_| err());
        Ok(Self::from_parts(
            hex(groups[0])? as u32,
            hex(groups[1])? as u16,
            hex(groups[2])? as u16,
            hex(groups[3])? as u16,
            hex(groups[4])?,
        ))
    }
}

impl From<Guid> for String {
    fn from(g: Guid) -> Self {
        g.to_string()
    }
}

impl TryFrom<String> for Guid {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(windows)]
impl From<Guid> for windows::core::GUID {
    fn from(g: Guid) -> Self {
        Self::from_values(g.data1, g.data2, g.data3, g.data4)
    }
}

#[cfg(windows)]
impl From<windows::core::GUID> for Guid {
    fn from(g: windows::core::GUID) -> Self {
        Self {
            data1: g.data1,
            data2: g.data2,
            data3: g.data3,
            data4: g.data4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IUNKNOWN: Guid = Guid::from_parts(0x00000000, 0x0000, 0x0000, 0xc000, 0x000000000046);

    #[test]
    fn test_from_parts_byte_order() {
        let g = Guid::from_parts(0x12345678, 0x9abc, 0xdef0, 0x1122, 0x334455667788);
        assert_eq!(g.data1, 0x12345678);
        assert_eq!(g.data4, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
        assert_eq!(g.to_string(), "{12345678-9ABC-DEF0-1122-334455667788}");
    }

    #[test]
    fn test_parse_with_and_without_braces() {
        let bare: Guid = "00000000-0000-0000-C000-000000000046".parse().unwrap();
        let braced: Guid = "{00000000-0000-0000-c000-000000000046}".parse().unwrap();
        assert_eq!(bare, IUNKNOWN);
        assert_eq!(braced, IUNKNOWN);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for s in [
            "",
            "{}",
            "{00000000-0000-0000-C000-000000000046",
            "00000000-0000-0000-C000-000000000046}",
            "00000000-0000-0000-C000-00000000004",
            "00000000-0000-0000-C000-0000000000467",
            "00000000-0000-0000C000-000000000046",
            "0000000G-0000-0000-C000-000000000046",
            "+0000000-0000-0000-C000-000000000046",
        ] {
            assert_eq!(s.parse::<Guid>(), Err(ParseError::Guid(s.to_owned())), "{:?}", s);
        }
    }

    #[test]
    fn test_null() {
        assert!(Guid::null().is_null());
        assert!(Guid::default().is_null());
        assert!(!IUNKNOWN.is_null());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&IUNKNOWN).unwrap();
        assert_eq!(json, "\"{00000000-0000-0000-C000-000000000046}\"");
        let back: Guid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IUNKNOWN);
        assert!(serde_json::from_str::<Guid>("\"nope\"").is_err());
    }
}
