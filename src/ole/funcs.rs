use std::ffi::c_void;
use std::marker::PhantomData;

use windows::core::{Interface, GUID};
use windows::Win32::System::Com::{
    CoCreateInstance, CoInitializeEx, CoTaskMemFree, CoUninitialize, CLSCTX, COINIT,
};

use crate::co;
use crate::error::HrResult;
use crate::ole::guid::Clsid;
use crate::ole::iunknown::{ComInterface, ComPtr, IUnknown, OleIUnknown};

/// RAII guard of [`co_initialize_ex`], which calls `CoUninitialize` when
/// dropped.
///
/// COM is initialized per thread, so the guard can't leave its thread.
#[derive(Debug)]
pub struct CoInitGuard {
    hr: co::HResult,
    _thread_bound: PhantomData<*const ()>,
}

impl CoInitGuard {
    /// The result of `CoInitializeEx`: `S_OK`, or `S_FALSE` if COM was
    /// already initialized on this thread.
    pub fn hresult(&self) -> co::HResult {
        self.hr
    }
}

impl Drop for CoInitGuard {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
        tracing::debug!("COM uninitialized");
    }
}

/// `CoInitializeEx`: initializes COM on the current thread.
///
/// Every successful call, including the ones returning `S_FALSE`, is paired
/// with a `CoUninitialize` by the returned guard.
///
/// # Example
/// ```no_run
/// use safewin::{co, ole};
///
/// let _com = ole::co_initialize_ex(co::CoInit::APARTMENTTHREADED | co::CoInit::DISABLE_OLE1DDE)?;
/// // COM objects must be dropped before the guard.
/// # Ok::<_, co::HResult>(())
/// ```
pub fn co_initialize_ex(coinit: co::CoInit) -> HrResult<CoInitGuard> {
    let hr = co::HResult::from(unsafe { CoInitializeEx(None, COINIT(coinit.bits() as i32)) }.0);
    hr.to_hrresult()?;
    tracing::debug!(coinit = ?coinit, hresult = ?hr, "COM initialized");
    Ok(CoInitGuard {
        hr,
        _thread_bound: PhantomData,
    })
}

/// `CoCreateInstance`: creates an object of the class and returns its
/// interface `T`.
///
/// # Example
/// ```no_run
/// use safewin::{co, ole};
/// use safewin::ole::{Guid, IPersist, OleIPersist};
///
/// let _com = ole::co_initialize_ex(co::CoInit::APARTMENTTHREADED)?;
/// let shell_link = Guid::from_parts(0x00021401, 0x0000, 0x0000, 0xc000, 0x000000000046);
/// let persist: IPersist = ole::co_create_instance(&shell_link, co::ClsCtx::INPROC_SERVER)?;
/// assert_eq!(persist.get_class_id()?, shell_link);
/// # Ok::<_, co::HResult>(())
/// ```
pub fn co_create_instance<T: ComInterface>(clsid: &Clsid, ctx: co::ClsCtx) -> HrResult<T> {
    let native: windows::core::IUnknown =
        unsafe { CoCreateInstance(&GUID::from(*clsid), None, CLSCTX(ctx.bits()))? };
    let unk = unsafe { IUnknown::from_ptr(ComPtr::from_raw(native.into_raw())) };
    unk.query_interface::<T>()
}

/// `CoTaskMemFree`: frees memory allocated by COM for the caller, like the
/// strings returned by many shell interfaces.
///
/// # Safety
/// `pv` must be null or come from `CoTaskMemAlloc`, and must not be used
/// afterwards.
pub unsafe fn co_task_mem_free(pv: *mut c_void) {
    CoTaskMemFree(Some(pv as *const c_void))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ole::{Guid, IPersist, OleIPersist};

    const CLSID_SHELL_LINK: Clsid =
        Guid::from_parts(0x00021401, 0x0000, 0x0000, 0xc000, 0x000000000046);

    #[test]
    fn test_initialize_twice_returns_s_false() {
        let first = co_initialize_ex(co::CoInit::APARTMENTTHREADED).unwrap();
        let second = co_initialize_ex(co::CoInit::APARTMENTTHREADED).unwrap();
        assert_eq!(first.hresult(), co::HResult::S_OK);
        assert_eq!(second.hresult(), co::HResult::S_FALSE);
    }

    #[test]
    fn test_changing_mode_fails() {
        let _sta = co_initialize_ex(co::CoInit::APARTMENTTHREADED).unwrap();
        let err = co_initialize_ex(co::CoInit::MULTITHREADED).unwrap_err();
        assert_eq!(err, co::HResult::RPC_E_CHANGED_MODE);
    }

    #[test]
    fn test_create_shell_link() {
        let _com = co_initialize_ex(co::CoInit::APARTMENTTHREADED).unwrap();
        let persist: IPersist =
            co_create_instance(&CLSID_SHELL_LINK, co::ClsCtx::INPROC_SERVER).unwrap();
        assert_eq!(persist.get_class_id().unwrap(), CLSID_SHELL_LINK);
    }

    #[test]
    fn test_create_unregistered_class() {
        let _com = co_initialize_ex(co::CoInit::APARTMENTTHREADED).unwrap();
        let bogus = Guid::from_parts(0x01234567, 0x89ab, 0xcdef, 0x0123, 0x456789abcdef);
        let err = co_create_instance::<IPersist>(&bogus, co::ClsCtx::ALL).unwrap_err();
        assert_eq!(err, co::HResult::REGDB_E_CLASSNOTREG);
    }

    #[test]
    fn test_free_null() {
        unsafe { co_task_mem_free(std::ptr::null_mut()) };
    }
}
