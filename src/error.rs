use std::error::Error;
use std::fmt;

use crate::co;

/// A [`Result`] carrying a Win32 error code as the error.
pub type SysResult<T> = Result<T, co::SysError>;

/// A [`Result`] carrying a COM `HRESULT` as the error.
pub type HrResult<T> = Result<T, co::HResult>;

/// A [`Result`] for operations that may fail in several unrelated ways, like
/// reading a file and then decoding it.
pub type ErrResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Failure to parse one of the text formats handled by the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed GUID string.
    Guid(String),
    /// A line of an INI file that is neither a section, an entry, a comment
    /// nor blank. Lines are 1-based.
    Ini { line: usize, text: String },
    /// A symbolic constant name that isn't known.
    UnknownName(String),
    /// Text in an encoding that is recognized but can't be decoded.
    Encoding(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Guid(s) => write!(f, "Invalid GUID string: {:?}", s),
            ParseError::Ini { line, text } => {
                write!(f, "Invalid INI syntax at line {}: {:?}", line, text)
            }
            ParseError::UnknownName(s) => write!(f, "Unknown constant name: {:?}", s),
            ParseError::Encoding(enc) => write!(f, "Unsupported text encoding: {}", enc),
        }
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::Ini { line: 3, text: "oops".to_owned() };
        assert_eq!(err.to_string(), "Invalid INI syntax at line 3: \"oops\"");
    }

    #[test]
    fn test_errors_box_together() {
        fn fails(which: u8) -> ErrResult<()> {
            match which {
                0 => Err(co::SysError::FILE_NOT_FOUND.into()),
                1 => Err(co::HResult::E_FAIL.into()),
                _ => Err(ParseError::Guid("x".to_owned()).into()),
            }
        }
        for n in 0..3 {
            assert!(fails(n).is_err());
        }
    }
}
