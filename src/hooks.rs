//! Windows hook installation and management.
//!
//! Provides an RAII wrapper for hooks, so a hook can't outlive the code that
//! handles it.

use windows::Win32::Foundation::{HINSTANCE, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, HHOOK, WINDOWS_HOOK_ID,
};

use crate::co;
use crate::error::SysResult;
use crate::kernel::Hinstance;
use crate::user::{HookProc, Hhook};

/// RAII guard for an installed hook.
///
/// Calls `UnhookWindowsHookEx` when dropped.
///
/// # Example
/// ```no_run
/// use safewin::{call_next_hook, HookGuard};
///
/// extern "system" fn on_key(code: i32, wparam: usize, lparam: isize) -> isize {
///     // Must be fast: the system gives up on slow hooks.
///     call_next_hook(code, wparam, lparam)
/// }
///
/// let guard = HookGuard::install_keyboard_ll(on_key)?;
/// safewin::run_message_loop()?;
/// drop(guard); // UnhookWindowsHookEx called here
/// # Ok::<_, safewin::co::SysError>(())
/// ```
#[derive(Debug)]
pub struct HookGuard {
    handle: Hhook,
    hook_type: co::Wh,
}

impl HookGuard {
    fn new(handle: Hhook, hook_type: co::Wh) -> Self {
        tracing::info!(hook_type = ?hook_type, "Hook installed successfully");
        Self { handle, hook_type }
    }

    /// Returns the raw hook handle.
    pub fn handle(&self) -> Hhook {
        self.handle
    }

    /// Returns the type the hook was installed with.
    pub fn hook_type(&self) -> co::Wh {
        self.hook_type
    }

    /// `SetWindowsHookEx`, for any hook type.
    ///
    /// `thread_id` zero hooks every thread of the desktop, which needs the
    /// procedure in a DLL given by `hmod`, except for the low-level hooks.
    pub fn install(
        hook_type: co::Wh,
        callback: HookProc,
        hmod: Option<Hinstance>,
        thread_id: u32,
    ) -> SysResult<Self> {
        // Same ABI: every argument is a transparent wrapper of the native type.
        let native = unsafe {
            std::mem::transmute::<HookProc, unsafe extern "system" fn(i32, WPARAM, LPARAM) -> LRESULT>(
                callback,
            )
        };
        let handle = unsafe {
            SetWindowsHookExW(
                WINDOWS_HOOK_ID(hook_type.raw()),
                Some(native),
                HINSTANCE::from(hmod.unwrap_or_default()),
                thread_id,
            )?
        };
        Ok(Self::new(handle.into(), hook_type))
    }

    /// Installs a low-level keyboard hook, `WH_KEYBOARD_LL`.
    ///
    /// # Important
    /// - The callback must be extremely fast
    /// - Always call [`call_next_hook`] at the end of the callback
    /// - The installing thread must run a message loop
    pub fn install_keyboard_ll(callback: HookProc) -> SysResult<Self> {
        Self::install(co::Wh::KEYBOARD_LL, callback, None, 0)
    }

    /// Installs a low-level mouse hook, `WH_MOUSE_LL`. The same rules as
    /// [`install_keyboard_ll`](HookGuard::install_keyboard_ll) apply.
    pub fn install_mouse_ll(callback: HookProc) -> SysResult<Self> {
        Self::install(co::Wh::MOUSE_LL, callback, None, 0)
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        match unsafe { UnhookWindowsHookEx(HHOOK::from(self.handle)) } {
            Ok(_) => tracing::info!(hook_type = ?self.hook_type, "Hook uninstalled successfully"),
            Err(e) => tracing::error!(
                hook_type = ?self.hook_type,
                error = %co::SysError::from(e),
                "Failed to unhook"
            ),
        }
    }
}

/// `CallNextHookEx`: passes the event to the next hook in the chain.
///
/// Every hook callback must end with it, unless it means to swallow the
/// event.
#[inline(always)]
pub fn call_next_hook(code: i32, wparam: usize, lparam: isize) -> isize {
    unsafe { CallNextHookEx(None, code, WPARAM(wparam), LPARAM(lparam)) }.0
}

#[cfg(test)]
mod tests {
    use super::*;

    extern "system" fn pass_through(code: i32, wparam: usize, lparam: isize) -> isize {
        call_next_hook(code, wparam, lparam)
    }

    #[test]
    fn test_thread_hook_installs_and_unhooks() {
        let tid = crate::get_current_thread_id();
        let guard = HookGuard::install(co::Wh::CALLWNDPROC, pass_through, None, tid).unwrap();
        assert_eq!(guard.hook_type(), co::Wh::CALLWNDPROC);
        assert!(!crate::Handle::is_null(&guard.handle()));
    }

    #[test]
    fn test_global_hook_without_module_fails() {
        // Only the low-level hooks may be global without a DLL.
        assert!(HookGuard::install(co::Wh::GETMESSAGE, pass_through, None, 0).is_err());
    }
}
