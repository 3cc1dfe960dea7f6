//! Error code constants: Win32 error codes and COM `HRESULT`s.

use std::fmt;

const_type! {
    /// A Win32 system error code, the `ERROR_*` constants, as returned by
    /// `GetLastError`.
    SysError: u32;
    SUCCESS 0
    INVALID_FUNCTION 1
    FILE_NOT_FOUND 2
    PATH_NOT_FOUND 3
    TOO_MANY_OPEN_FILES 4
    ACCESS_DENIED 5
    INVALID_HANDLE 6
    NOT_ENOUGH_MEMORY 8
    INVALID_DATA 13
    OUTOFMEMORY 14
    INVALID_DRIVE 15
    NO_MORE_FILES 18
    NOT_READY 21
    WRITE_FAULT 29
    SHARING_VIOLATION 32
    HANDLE_EOF 38
    NOT_SUPPORTED 50
    FILE_EXISTS 80
    INVALID_PARAMETER 87
    BROKEN_PIPE 109
    INSUFFICIENT_BUFFER 122
    INVALID_NAME 123
    MOD_NOT_FOUND 126
    PROC_NOT_FOUND 127
    ALREADY_EXISTS 183
    ENVVAR_NOT_FOUND 203
    MORE_DATA 234
    NO_MORE_ITEMS 259
    DIRECTORY 267
    FILE_INVALID 1006
    BADKEY 1010
    KEY_DELETED 1018
    OLD_WIN_VERSION 1150
    NOT_FOUND 1168
    CANCELLED 1223
    INVALID_WINDOW_HANDLE 1400
    INVALID_MENU_HANDLE 1401
    INVALID_CURSOR_HANDLE 1402
    INVALID_HOOK_HANDLE 1404
    CANNOT_FIND_WND_CLASS 1407
    CLASS_ALREADY_EXISTS 1410
    CLASS_DOES_NOT_EXIST 1411
    INVALID_THREAD_ID 1444
    TIMEOUT 1460
}

const_type! {
    /// A COM result code, the `S_*` and `E_*` constants.
    HResult: i32;
    S_OK 0
    S_FALSE 1
    E_NOTIMPL (0x8000_4001_u32 as i32)
    E_NOINTERFACE (0x8000_4002_u32 as i32)
    E_POINTER (0x8000_4003_u32 as i32)
    E_ABORT (0x8000_4004_u32 as i32)
    E_FAIL (0x8000_4005_u32 as i32)
    E_UNEXPECTED (0x8000_ffff_u32 as i32)
    E_ACCESSDENIED (0x8007_0005_u32 as i32)
    E_HANDLE (0x8007_0006_u32 as i32)
    E_OUTOFMEMORY (0x8007_000e_u32 as i32)
    E_INVALIDARG (0x8007_0057_u32 as i32)
    RPC_E_CHANGED_MODE (0x8001_0106_u32 as i32)
    CO_E_NOTINITIALIZED (0x8004_01f0_u32 as i32)
    CLASS_E_NOAGGREGATION (0x8004_0110_u32 as i32)
    REGDB_E_CLASSNOTREG (0x8004_0154_u32 as i32)
}

const FACILITY_WIN32: u16 = 7;

impl SysError {
    /// Returns the system message text for this code.
    ///
    /// On Windows this is `FormatMessageW`'s output; elsewhere the constant
    /// name, or a generic text for unknown codes.
    pub fn format_message(self) -> String {
        #[cfg(windows)]
        if let Some(text) = format_system_message(self.0) {
            return text;
        }
        match self.name() {
            Some(name) => format!("ERROR_{}", name),
            None => "Unknown system error.".to_owned(),
        }
    }

    /// Converts to the equivalent `HRESULT`.
    pub const fn to_hresult(self) -> HResult {
        HResult::from_win32(self)
    }
}

impl HResult {
    /// Equivalent to `HRESULT_FROM_WIN32`.
    pub const fn from_win32(err: SysError) -> Self {
        if err.0 as i32 <= 0 {
            Self(err.0 as i32)
        } else {
            Self(((err.0 & 0xffff) | ((FACILITY_WIN32 as u32) << 16) | 0x8000_0000) as i32)
        }
    }

    /// Extracts the Win32 error code, if this is a `FACILITY_WIN32` failure
    /// or a success.
    pub const fn to_win32(self) -> Option<SysError> {
        if self.0 == 0 {
            Some(SysError::SUCCESS)
        } else if self.failed() && self.facility() == FACILITY_WIN32 {
            Some(SysError(self.code() as u32))
        } else {
            None
        }
    }

    /// Equivalent to the `SUCCEEDED` macro.
    pub const fn succeeded(self) -> bool {
        self.0 >= 0
    }

    /// Equivalent to the `FAILED` macro.
    pub const fn failed(self) -> bool {
        self.0 < 0
    }

    /// Equivalent to the `HRESULT_FACILITY` macro.
    pub const fn facility(self) -> u16 {
        ((self.0 as u32 >> 16) & 0x1fff) as u16
    }

    /// Equivalent to the `HRESULT_CODE` macro.
    pub const fn code(self) -> u16 {
        (self.0 as u32 & 0xffff) as u16
    }

    /// Converts to `Ok(())` on success codes, `Err(self)` on failures.
    pub const fn to_hrresult(self) -> crate::HrResult<()> {
        if self.succeeded() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Returns the system message text for this code, see
    /// [`SysError::format_message`].
    pub fn format_message(self) -> String {
        #[cfg(windows)]
        if let Some(text) = format_system_message(self.0 as u32) {
            return text;
        }
        match self.name() {
            Some(name) => name.to_owned(),
            None => match self.to_win32() {
                Some(err) if err.name().is_some() => err.format_message(),
                _ => "Unknown COM error.".to_owned(),
            },
        }
    }
}

impl fmt::Display for SysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#06x} {}] {}", self.0, self.0, self.format_message())
    }
}

impl fmt::Display for HResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#010x} {}] {}", self.0 as u32, self.0, self.format_message())
    }
}

impl std::error::Error for SysError {}
impl std::error::Error for HResult {}

impl From<SysError> for HResult {
    fn from(err: SysError) -> Self {
        Self::from_win32(err)
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for HResult {
    fn from(err: windows::core::Error) -> Self {
        Self(err.code().0)
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for SysError {
    fn from(err: windows::core::Error) -> Self {
        match HResult(err.code().0).to_win32() {
            Some(e) if e != SysError::SUCCESS => e,
            _ => SysError(err.code().0 as u32),
        }
    }
}

#[cfg(windows)]
fn format_system_message(code: u32) -> Option<String> {
    use windows::core::PWSTR;
    use windows::Win32::System::Diagnostics::Debug::{
        FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
    };

    let mut buf = [0u16; 512];
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            None,
            code,
            0,
            PWSTR(buf.as_mut_ptr()),
            buf.len() as u32,
            None,
        )
    };
    if len == 0 {
        return None;
    }
    let text = String::from_utf16_lossy(&buf[..len as usize]);
    Some(text.trim_end().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hresult_from_win32() {
        assert_eq!(HResult::from_win32(SysError::ACCESS_DENIED), HResult::E_ACCESSDENIED);
        assert_eq!(HResult::from_win32(SysError::SUCCESS), HResult::S_OK);
        assert_eq!(HResult::E_INVALIDARG.to_win32(), Some(SysError::INVALID_PARAMETER));
        assert_eq!(HResult::E_NOINTERFACE.to_win32(), None);
    }

    #[test]
    fn test_hresult_parts() {
        let hr = HResult::E_OUTOFMEMORY;
        assert!(hr.failed());
        assert!(!hr.succeeded());
        assert_eq!(hr.facility(), 7);
        assert_eq!(hr.code(), 14);
        assert!(HResult::S_FALSE.succeeded());
        assert_eq!(HResult::S_FALSE.to_hrresult(), Ok(()));
        assert_eq!(HResult::E_FAIL.to_hrresult(), Err(HResult::E_FAIL));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_display_format() {
        assert_eq!(
            SysError::ACCESS_DENIED.to_string(),
            "[0x0005 5] ERROR_ACCESS_DENIED"
        );
        assert_eq!(
            HResult::E_NOINTERFACE.to_string(),
            "[0x80004002 -2147467262] E_NOINTERFACE"
        );
    }

    #[test]
    fn test_display_starts_with_code() {
        assert!(SysError::FILE_NOT_FOUND.to_string().starts_with("[0x0002 2] "));
        assert!(SysError::from(99_999).to_string().starts_with("[0x1869f 99999] "));
    }

    #[test]
    fn test_boxed_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(SysError::INVALID_HANDLE);
        assert!(err.to_string().contains("6"));
    }
}
