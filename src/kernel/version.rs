//! OS version checks, through `VerifyVersionInfo`.
//!
//! Without a manifest declaring support, Windows 8.1 and later report
//! themselves as Windows 8, so the newer checks return `false` there.

use windows::Win32::System::SystemInformation::{
    VerSetConditionMask, VerifyVersionInfoW, OSVERSIONINFOEXW, VER_FLAGS, VER_MAJORVERSION,
    VER_MINORVERSION, VER_PRODUCT_TYPE, VER_SERVICEPACKMAJOR,
};

const VER_EQUAL: u8 = 1;
const VER_GREATER_EQUAL: u8 = 3;
const VER_NT_WORKSTATION: u8 = 1;

fn verify(info: &mut OSVERSIONINFOEXW, type_mask: VER_FLAGS, condition_mask: u64) -> bool {
    info.dwOSVersionInfoSize = std::mem::size_of::<OSVERSIONINFOEXW>() as u32;
    unsafe { VerifyVersionInfoW(info, type_mask, condition_mask) }.is_ok()
}

/// `IsWindowsVersionOrGreater`.
pub fn is_windows_version_or_greater(major: u32, minor: u32, service_pack_major: u16) -> bool {
    let mut info = OSVERSIONINFOEXW {
        dwMajorVersion: major,
        dwMinorVersion: minor,
        wServicePackMajor: service_pack_major,
        ..Default::default()
    };
    let mask = unsafe {
        let m = VerSetConditionMask(0, VER_MAJORVERSION, VER_GREATER_EQUAL);
        let m = VerSetConditionMask(m, VER_MINORVERSION, VER_GREATER_EQUAL);
        VerSetConditionMask(m, VER_SERVICEPACKMAJOR, VER_GREATER_EQUAL)
    };
    verify(
        &mut info,
        VER_MAJORVERSION | VER_MINORVERSION | VER_SERVICEPACKMAJOR,
        mask,
    )
}

/// `IsWindowsVistaOrGreater`.
pub fn is_windows_vista_or_greater() -> bool {
    is_windows_version_or_greater(6, 0, 0)
}

/// `IsWindows7OrGreater`.
pub fn is_windows_7_or_greater() -> bool {
    is_windows_version_or_greater(6, 1, 0)
}

/// `IsWindows8OrGreater`.
pub fn is_windows_8_or_greater() -> bool {
    is_windows_version_or_greater(6, 2, 0)
}

/// `IsWindows8Point1OrGreater`.
pub fn is_windows_8point1_or_greater() -> bool {
    is_windows_version_or_greater(6, 3, 0)
}

/// `IsWindows10OrGreater`.
pub fn is_windows_10_or_greater() -> bool {
    is_windows_version_or_greater(10, 0, 0)
}

/// `IsWindowsServer`.
pub fn is_windows_server() -> bool {
    let mut info = OSVERSIONINFOEXW {
        wProductType: VER_NT_WORKSTATION,
        ..Default::default()
    };
    let mask = unsafe { VerSetConditionMask(0, VER_PRODUCT_TYPE, VER_EQUAL) };
    !verify(&mut info, VER_PRODUCT_TYPE, mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_versions() {
        assert!(is_windows_vista_or_greater());
        assert!(is_windows_7_or_greater());
        assert!(is_windows_version_or_greater(5, 1, 0));
    }

    #[test]
    fn test_far_future_version() {
        assert!(!is_windows_version_or_greater(99, 0, 0));
    }
}
