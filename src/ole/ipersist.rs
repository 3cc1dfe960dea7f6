use crate::co;
use crate::error::HrResult;
use crate::ole::guid::{Clsid, Guid};
use crate::ole::iunknown::{IUnknownVT, OleIUnknown};

/// `IPersist` virtual table.
#[allow(non_snake_case)]
#[repr(C)]
pub struct IPersistVT {
    pub IUnknownVT: IUnknownVT,
    pub GetClassID: unsafe extern "system" fn(crate::ole::ComPtr, *mut Guid) -> co::HResult,
}

com_interface! {
    /// `IPersist`, implemented by objects which can be saved.
    IPersist: 0x0000010c, 0x0000, 0x0000, 0xc000, 0x000000000046
}

/// [`IPersist`] methods.
pub trait OleIPersist: OleIUnknown {
    /// `IPersist::GetClassID`. Fails with
    /// [`E_POINTER`](co::HResult::E_POINTER) on a null interface.
    fn get_class_id(&self) -> HrResult<Clsid> {
        if self.ptr().is_null() {
            return Err(co::HResult::E_POINTER);
        }
        let mut clsid = Clsid::default();
        unsafe {
            (self.ptr().vt::<IPersistVT>().GetClassID)(self.ptr(), &mut clsid).to_hrresult()?;
        }
        Ok(clsid)
    }
}

impl OleIPersist for IPersist {}
