//! Free functions of kernel32.

use std::collections::HashMap;

use once_cell::sync::OnceCell;
use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::{GetLastError, SetLastError, WIN32_ERROR};
use windows::Win32::Storage::FileSystem::GetLogicalDriveStringsW;
use windows::Win32::System::Diagnostics::Debug::OutputDebugStringW;
use windows::Win32::System::Environment::{
    ExpandEnvironmentStringsW, FreeEnvironmentStringsW, GetCommandLineW, GetCurrentDirectoryW,
    GetEnvironmentStringsW,
};
use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};
use windows::Win32::System::SystemInformation::{GetSystemTimeAsFileTime, GetTickCount64};
use windows::Win32::System::Threading::{GetCurrentProcessId, GetCurrentThreadId, Sleep};
use windows::Win32::System::WindowsProgramming::GetComputerNameW;

use crate::co;
use crate::error::SysResult;
use crate::kernel::time::FileTime;
use crate::kernel::wstring::{parse_multi_z, WString};

/// `GetLastError`.
pub fn get_last_error() -> co::SysError {
    co::SysError::from(unsafe { GetLastError() }.0)
}

/// `SetLastError`.
pub fn set_last_error(err: co::SysError) {
    unsafe { SetLastError(WIN32_ERROR(err.raw())) }
}

/// `GetCurrentProcessId`.
pub fn get_current_process_id() -> u32 {
    unsafe { GetCurrentProcessId() }
}

/// `GetCurrentThreadId`.
pub fn get_current_thread_id() -> u32 {
    unsafe { GetCurrentThreadId() }
}

/// `Sleep`.
pub fn sleep(ms: u32) {
    unsafe { Sleep(ms) }
}

/// `GetTickCount64`: milliseconds since the system started.
pub fn get_tick_count64() -> u64 {
    unsafe { GetTickCount64() }
}

/// `GetSystemTimeAsFileTime`: current UTC time.
pub fn get_system_time_as_file_time() -> FileTime {
    let ft = unsafe { GetSystemTimeAsFileTime() };
    FileTime {
        low_date_time: ft.dwLowDateTime,
        high_date_time: ft.dwHighDateTime,
    }
}

/// `QueryPerformanceCounter`.
pub fn query_performance_counter() -> SysResult<i64> {
    let mut count = 0;
    unsafe { QueryPerformanceCounter(&mut count)? };
    Ok(count)
}

static PERF_FREQUENCY: OnceCell<i64> = OnceCell::new();

/// `QueryPerformanceFrequency`.
///
/// The frequency is fixed at boot, so it's queried once per process.
///
/// # Example
/// ```no_run
/// let t0 = safewin::query_performance_counter()?;
/// // ... work ...
/// let t1 = safewin::query_performance_counter()?;
/// let freq = safewin::query_performance_frequency()?;
/// println!("Took {} µs", (t1 - t0) * 1_000_000 / freq);
/// # Ok::<_, safewin::co::SysError>(())
/// ```
pub fn query_performance_frequency() -> SysResult<i64> {
    PERF_FREQUENCY
        .get_or_try_init(|| {
            let mut freq = 0;
            unsafe { QueryPerformanceFrequency(&mut freq)? };
            tracing::debug!(freq, "Performance counter frequency");
            Ok::<_, co::SysError>(freq)
        })
        .copied()
}

/// `GetComputerName`.
pub fn get_computer_name() -> SysResult<String> {
    let mut buf = WString::new_alloc_buf(256);
    let mut size = buf.buffer_size() as u32;
    unsafe { GetComputerNameW(PWSTR(buf.as_mut_ptr()), &mut size)? };
    Ok(buf.to_string())
}

/// Calls a `(buffer) -> chars` function twice: first to learn the required
/// size, then to fill a buffer of that size.
fn call_sized(f: impl Fn(Option<&mut [u16]>) -> u32) -> SysResult<WString> {
    let needed = f(None);
    if needed == 0 {
        return Err(get_last_error());
    }
    let mut buf = WString::new_alloc_buf(needed as usize + 1);
    if f(Some(buf.as_mut_slice())) == 0 {
        return Err(get_last_error());
    }
    Ok(buf)
}

/// `GetCurrentDirectory`.
pub fn get_current_directory() -> SysResult<String> {
    call_sized(|buf| unsafe { GetCurrentDirectoryW(buf) }).map(|w| w.to_string())
}

/// `ExpandEnvironmentStrings`.
///
/// # Example
/// ```no_run
/// let win = safewin::expand_environment_strings("%SystemRoot%\\System32")?;
/// # Ok::<_, safewin::co::SysError>(())
/// ```
pub fn expand_environment_strings(src: &str) -> SysResult<String> {
    let wsrc = WString::from_str(src);
    call_sized(|buf| unsafe { ExpandEnvironmentStringsW(PCWSTR(wsrc.as_ptr()), buf) })
        .map(|w| w.to_string())
}

/// `GetEnvironmentStrings`, parsed into name/value pairs.
///
/// Hidden per-drive entries like `=C:=C:\dir` are kept with their leading
/// `=` in the name.
pub fn get_environment_strings() -> SysResult<HashMap<String, String>> {
    let block = unsafe { GetEnvironmentStringsW() };
    if block.is_null() {
        return Err(get_last_error());
    }

    // The block ends with two consecutive nulls.
    let mut len = 0;
    unsafe {
        while *block.0.add(len) != 0 || *block.0.add(len + 1) != 0 {
            len += 1;
        }
    }
    let slice = unsafe { std::slice::from_raw_parts(block.0, len + 2) };
    let vars = parse_multi_z(slice)
        .into_iter()
        .filter_map(|line| {
            // Skip the first char, a hidden entry may start with '='.
            let pos = line.char_indices().skip(1).find(|(_, c)| *c == '=')?.0;
            Some((line[..pos].to_owned(), line[pos + 1..].to_owned()))
        })
        .collect();

    if let Err(e) = unsafe { FreeEnvironmentStringsW(PCWSTR(block.0)) } {
        tracing::error!(error = %co::SysError::from(e), "Failed to free environment block");
    }
    Ok(vars)
}

/// `GetLogicalDriveStrings`: root paths like `C:\`.
pub fn get_logical_drive_strings() -> SysResult<Vec<String>> {
    let needed = unsafe { GetLogicalDriveStringsW(None) };
    if needed == 0 {
        return Err(get_last_error());
    }
    let mut buf = vec![0u16; needed as usize + 1];
    let written = unsafe { GetLogicalDriveStringsW(Some(&mut buf)) };
    if written == 0 {
        return Err(get_last_error());
    }
    Ok(parse_multi_z(&buf))
}

/// `GetCommandLine`.
pub fn get_command_line() -> String {
    let p = unsafe { GetCommandLineW() };
    unsafe { WString::from_wchars_nullt(p.0) }.to_string()
}

/// `OutputDebugString`.
pub fn output_debug_string(text: &str) {
    let wtext = WString::from_str(text);
    unsafe { OutputDebugStringW(PCWSTR(wtext.as_ptr())) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_error_roundtrips() {
        set_last_error(co::SysError::INVALID_DATA);
        assert_eq!(get_last_error(), co::SysError::INVALID_DATA);
        set_last_error(co::SysError::SUCCESS);
    }

    #[test]
    fn test_ids_match_std() {
        assert_eq!(get_current_process_id(), std::process::id());
        assert_ne!(get_current_thread_id(), 0);
    }

    #[test]
    fn test_performance_counter() {
        let freq = query_performance_frequency().unwrap();
        assert!(freq > 0);
        assert_eq!(query_performance_frequency().unwrap(), freq);
        let a = query_performance_counter().unwrap();
        let b = query_performance_counter().unwrap();
        assert!(b >= a);
    }

    #[test]
    fn test_environment() {
        let vars = get_environment_strings().unwrap();
        assert!(vars.keys().any(|k| k.eq_ignore_ascii_case("PATH")));
        let root = expand_environment_strings("%SystemRoot%").unwrap();
        assert!(!root.contains('%'));
        assert!(!get_current_directory().unwrap().is_empty());
        assert!(!get_logical_drive_strings().unwrap().is_empty());
        assert!(!get_command_line().is_empty());
        assert!(!get_computer_name().unwrap().is_empty());
    }
}
