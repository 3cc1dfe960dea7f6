//! Process, thread and module handles.

decl_handle! {
    /// Handle to a process.
    Hprocess: "HPROCESS" => windows::Win32::Foundation::HANDLE
}

decl_handle! {
    /// Handle to a thread.
    Hthread: "HTHREAD" => windows::Win32::Foundation::HANDLE
}

decl_handle! {
    /// Handle to an instance, the base address of a loaded module.
    Hinstance: "HINSTANCE" => windows::Win32::Foundation::HINSTANCE
}

#[cfg(windows)]
pub use self::native::*;

#[cfg(windows)]
mod native {
    use std::ops::Deref;

    use windows::core::PCWSTR;
    use windows::Win32::Foundation::{CloseHandle, HANDLE, HMODULE};
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::Win32::System::ProcessStatus::GetModuleBaseNameW;
    use windows::Win32::System::Threading::{
        GetCurrentProcess, GetCurrentThread, GetExitCodeProcess, GetExitCodeThread,
        GetProcessId, GetProcessIdOfThread, GetThreadId, OpenProcess, WaitForSingleObject,
        INFINITE, PROCESS_ACCESS_RIGHTS,
    };

    use super::{Hinstance, Hprocess, Hthread};
    use crate::co;
    use crate::error::SysResult;
    use crate::handles::Handle;
    use crate::kernel::funcs::get_last_error;
    use crate::kernel::wstring::WString;

    /// Owns a kernel handle and calls `CloseHandle` when dropped.
    ///
    /// Dereferences to the handle itself, so its methods can be called
    /// directly on the guard.
    #[derive(Debug)]
    pub struct CloseHandleGuard<H: Handle> {
        handle: H,
    }

    impl<H: Handle> CloseHandleGuard<H> {
        /// Takes ownership of the handle.
        ///
        /// # Safety
        /// The handle must be one that `CloseHandle` accepts, and nothing else
        /// may close it.
        pub unsafe fn new(handle: H) -> Self {
            Self { handle }
        }

        /// Gives up ownership without closing the handle.
        pub fn leak(self) -> H {
            let h = self.handle;
            std::mem::forget(self);
            h
        }
    }

    impl<H: Handle> Deref for CloseHandleGuard<H> {
        type Target = H;

        fn deref(&self) -> &H {
            &self.handle
        }
    }

    impl<H: Handle> Drop for CloseHandleGuard<H> {
        fn drop(&mut self) {
            if self.handle.is_null() {
                return;
            }
            if let Err(e) = unsafe { CloseHandle(HANDLE(self.handle.as_ptr())) } {
                tracing::error!(
                    handle = ?self.handle.as_ptr(),
                    error = %co::SysError::from(e),
                    "Failed to close handle"
                );
            }
        }
    }

    impl Hprocess {
        /// `GetCurrentProcess`: a pseudo handle that needs no closing.
        pub fn current() -> Hprocess {
            unsafe { GetCurrentProcess() }.into()
        }

        /// `OpenProcess`.
        ///
        /// Fails with `ACCESS_DENIED` for protected and system processes.
        pub fn open_process(
            access: co::ProcessAccess,
            inherit_handle: bool,
            process_id: u32,
        ) -> SysResult<CloseHandleGuard<Hprocess>> {
            let h = unsafe {
                OpenProcess(PROCESS_ACCESS_RIGHTS(access.bits()), inherit_handle, process_id)?
            };
            Ok(unsafe { CloseHandleGuard::new(h.into()) })
        }

        /// `GetProcessId`.
        pub fn get_process_id(self) -> SysResult<u32> {
            match unsafe { GetProcessId(HANDLE::from(self)) } {
                0 => Err(get_last_error()),
                id => Ok(id),
            }
        }

        /// `GetExitCodeProcess`. A running process reports `STILL_ACTIVE`
        /// (259).
        pub fn get_exit_code_process(self) -> SysResult<u32> {
            let mut code = 0;
            unsafe { GetExitCodeProcess(HANDLE::from(self), &mut code)? };
            Ok(code)
        }

        /// `GetModuleBaseName`. `None` names the process executable.
        pub fn get_module_base_name(self, module: Option<Hinstance>) -> SysResult<String> {
            let mut buf = WString::new_alloc_buf(260);
            let hmodule = module.map_or(HMODULE::default(), |m| HMODULE(m.as_ptr()));
            let len = unsafe {
                GetModuleBaseNameW(HANDLE::from(self), hmodule, buf.as_mut_slice())
            };
            if len == 0 {
                return Err(get_last_error());
            }
            Ok(buf.to_string())
        }

        /// `WaitForSingleObject`. Returns `false` if the timeout elapsed
        /// before the process exited; `None` waits forever.
        pub fn wait_for_single_object(self, timeout_ms: Option<u32>) -> SysResult<bool> {
            wait_for(self.as_ptr(), timeout_ms)
        }
    }

    impl Hthread {
        /// `GetCurrentThread`: a pseudo handle that needs no closing.
        pub fn current() -> Hthread {
            unsafe { GetCurrentThread() }.into()
        }

        /// `GetThreadId`.
        pub fn get_thread_id(self) -> SysResult<u32> {
            match unsafe { GetThreadId(HANDLE::from(self)) } {
                0 => Err(get_last_error()),
                id => Ok(id),
            }
        }

        /// `GetExitCodeThread`.
        pub fn get_exit_code_thread(self) -> SysResult<u32> {
            let mut code = 0;
            unsafe { GetExitCodeThread(HANDLE::from(self), &mut code)? };
            Ok(code)
        }

        /// `GetProcessIdOfThread`.
        pub fn get_process_id_of_thread(self) -> SysResult<u32> {
            match unsafe { GetProcessIdOfThread(HANDLE::from(self)) } {
                0 => Err(get_last_error()),
                id => Ok(id),
            }
        }

        /// `WaitForSingleObject`, see [`Hprocess::wait_for_single_object`].
        pub fn wait_for_single_object(self, timeout_ms: Option<u32>) -> SysResult<bool> {
            wait_for(self.as_ptr(), timeout_ms)
        }
    }

    impl Hinstance {
        /// `GetModuleHandle`. `None` returns the handle of the executable.
        pub fn get_module_handle(module_name: Option<&str>) -> SysResult<Hinstance> {
            let name = module_name.map(WString::from_str);
            let pname = name.as_ref().map_or(PCWSTR::null(), |n| PCWSTR(n.as_ptr()));
            let hmod = unsafe { GetModuleHandleW(pname)? };
            Ok(Hinstance(hmod.0))
        }
    }

    fn wait_for(handle: *mut std::ffi::c_void, timeout_ms: Option<u32>) -> SysResult<bool> {
        let ret = unsafe { WaitForSingleObject(HANDLE(handle), timeout_ms.unwrap_or(INFINITE)) };
        match ret.0 {
            0 => Ok(true),     // WAIT_OBJECT_0
            0x102 => Ok(false), // WAIT_TIMEOUT
            _ => Err(get_last_error()),
        }
    }

    /// Gets the executable name of a process by its ID.
    ///
    /// # Example
    /// ```no_run
    /// let name = safewin::get_process_name(std::process::id())?;
    /// println!("Running as {}", name);
    /// # Ok::<_, safewin::co::SysError>(())
    /// ```
    pub fn get_process_name(process_id: u32) -> SysResult<String> {
        let hproc = Hprocess::open_process(
            co::ProcessAccess::QUERY_LIMITED_INFORMATION | co::ProcessAccess::VM_READ,
            false,
            process_id,
        )?;
        hproc.get_module_base_name(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{co, Handle};

    #[test]
    fn test_handle_formatting() {
        let h = unsafe { Hprocess::from_ptr(0x1c as *mut _) };
        assert_eq!(format!("{:?}", h), "HPROCESS(0x0000001c)");
        assert!(Hthread::default().is_null());
        assert_eq!(Hinstance::NULL.as_opt(), None);
    }

    #[cfg(windows)]
    #[test]
    fn test_get_current_process_name() {
        let name = get_process_name(std::process::id()).unwrap();
        assert!(!name.is_empty());
    }

    #[cfg(windows)]
    #[test]
    fn test_get_process_name_invalid_pid() {
        // PID 0 is the System Idle Process and cannot be opened.
        assert!(get_process_name(0).is_err());
    }

    #[cfg(windows)]
    #[test]
    fn test_pseudo_handles() {
        assert_eq!(Hprocess::current().get_process_id().unwrap(), std::process::id());
        let tid = Hthread::current().get_thread_id().unwrap();
        assert_eq!(tid, crate::get_current_thread_id());
        assert_eq!(
            Hthread::current().get_process_id_of_thread().unwrap(),
            std::process::id()
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_guard_closes_on_drop() {
        let pid = std::process::id();
        {
            let guard =
                Hprocess::open_process(co::ProcessAccess::QUERY_LIMITED_INFORMATION, false, pid)
                    .unwrap();
            assert_eq!(guard.get_process_id().unwrap(), pid);
            assert!(!guard.wait_for_single_object(Some(0)).unwrap());
        }
        assert!(!Hinstance::get_module_handle(None).unwrap().is_null());
    }
}
