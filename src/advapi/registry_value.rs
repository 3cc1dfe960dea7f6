use crate::co;

/// A typed registry value, as read by
/// [`Hkey::reg_query_value_ex`](crate::Hkey::reg_query_value_ex).
///
/// Strings are stored as UTF-16 by the registry; they're converted on the
/// way in and out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryValue {
    /// `REG_BINARY`.
    Binary(Vec<u8>),
    /// `REG_DWORD`, and `REG_DWORD_BIG_ENDIAN` when read.
    Dword(u32),
    /// `REG_QWORD`.
    Qword(u64),
    /// `REG_SZ`.
    Sz(String),
    /// `REG_EXPAND_SZ`, with the `%VAR%` references left unexpanded.
    ExpandSz(String),
    /// `REG_MULTI_SZ`.
    MultiSz(Vec<String>),
    /// `REG_NONE`.
    None,
}

impl RegistryValue {
    /// The type this value is written with.
    pub fn reg_type(&self) -> co::Reg {
        match self {
            Self::Binary(_) => co::Reg::BINARY,
            Self::Dword(_) => co::Reg::DWORD,
            Self::Qword(_) => co::Reg::QWORD,
            Self::Sz(_) => co::Reg::SZ,
            Self::ExpandSz(_) => co::Reg::EXPAND_SZ,
            Self::MultiSz(_) => co::Reg::MULTI_SZ,
            Self::None => co::Reg::NONE,
        }
    }

    /// Decodes the raw bytes of a value.
    ///
    /// Fails with `INVALID_DATA` when the size doesn't match the type, and
    /// `NOT_SUPPORTED` for types like `REG_LINK`.
    pub fn from_raw(reg_type: co::Reg, data: &[u8]) -> Result<Self, co::SysError> {
        Ok(match reg_type {
            co::Reg::NONE => Self::None,
            co::Reg::BINARY => Self::Binary(data.to_vec()),
            co::Reg::DWORD => Self::Dword(u32::from_le_bytes(
                data.try_into().map_err(|_| co::SysError::INVALID_DATA)?,
            )),
            co::Reg::DWORD_BIG_ENDIAN => Self::Dword(u32::from_be_bytes(
                data.try_into().map_err(|_| co::SysError::INVALID_DATA)?,
            )),
            co::Reg::QWORD => Self::Qword(u64::from_le_bytes(
                data.try_into().map_err(|_| co::SysError::INVALID_DATA)?,
            )),
            co::Reg::SZ => Self::Sz(utf16_until_null(data)),
            co::Reg::EXPAND_SZ => Self::ExpandSz(utf16_until_null(data)),
            co::Reg::MULTI_SZ => Self::MultiSz(
                String::from_utf16_lossy(&le_chars(data))
                    .split('\0')
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect(),
            ),
            _ => return Err(co::SysError::NOT_SUPPORTED),
        })
    }

    /// Encodes the value as the registry stores it, strings with their
    /// terminating nulls.
    pub fn to_raw(&self) -> Vec<u8> {
        match self {
            Self::Binary(b) => b.clone(),
            Self::Dword(n) => n.to_le_bytes().to_vec(),
            Self::Qword(n) => n.to_le_bytes().to_vec(),
            Self::Sz(s) | Self::ExpandSz(s) => le_bytes(s.encode_utf16().chain([0])),
            Self::MultiSz(v) => le_bytes(
                v.iter()
                    .flat_map(|s| s.encode_utf16().chain([0]))
                    .chain([0]),
            ),
            Self::None => Vec::new(),
        }
    }
}

fn le_chars(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect()
}

fn le_bytes(chars: impl Iterator<Item = u16>) -> Vec<u8> {
    chars.flat_map(u16::to_le_bytes).collect()
}

/// Stored strings may or may not carry their null.
fn utf16_until_null(data: &[u8]) -> String {
    let chars = le_chars(data);
    let end = chars.iter().position(|&c| c == 0).unwrap_or(chars.len());
    String::from_utf16_lossy(&chars[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(
            RegistryValue::from_raw(co::Reg::DWORD, &[0x78, 0x56, 0x34, 0x12]),
            Ok(RegistryValue::Dword(0x1234_5678))
        );
        assert_eq!(
            RegistryValue::from_raw(co::Reg::DWORD_BIG_ENDIAN, &[0x12, 0x34, 0x56, 0x78]),
            Ok(RegistryValue::Dword(0x1234_5678))
        );
        assert_eq!(
            RegistryValue::from_raw(co::Reg::DWORD, &[1, 2, 3]),
            Err(co::SysError::INVALID_DATA)
        );
        let q = RegistryValue::Qword(u64::MAX - 1);
        assert_eq!(RegistryValue::from_raw(co::Reg::QWORD, &q.to_raw()), Ok(q));
    }

    #[test]
    fn test_strings_with_and_without_null() {
        let with_null = RegistryValue::Sz("C:\\Windows".to_owned()).to_raw();
        assert_eq!(with_null.len(), 11 * 2);
        assert_eq!(
            RegistryValue::from_raw(co::Reg::SZ, &with_null),
            Ok(RegistryValue::Sz("C:\\Windows".to_owned()))
        );
        let without_null = &with_null[..with_null.len() - 2];
        assert_eq!(
            RegistryValue::from_raw(co::Reg::EXPAND_SZ, without_null),
            Ok(RegistryValue::ExpandSz("C:\\Windows".to_owned()))
        );
    }

    #[test]
    fn test_multi_sz() {
        let v = RegistryValue::MultiSz(vec!["one".to_owned(), "two".to_owned()]);
        let raw = v.to_raw();
        // "one\0two\0\0"
        assert_eq!(raw.len(), 9 * 2);
        assert_eq!(RegistryValue::from_raw(co::Reg::MULTI_SZ, &raw), Ok(v));
        assert_eq!(
            RegistryValue::from_raw(co::Reg::MULTI_SZ, &[0, 0]),
            Ok(RegistryValue::MultiSz(Vec::new()))
        );
    }

    #[test]
    fn test_types() {
        assert_eq!(RegistryValue::None.reg_type(), co::Reg::NONE);
        assert_eq!(RegistryValue::Binary(vec![1]).reg_type(), co::Reg::BINARY);
        assert_eq!(
            RegistryValue::from_raw(co::Reg::LINK, &[]),
            Err(co::SysError::NOT_SUPPORTED)
        );
    }
}
