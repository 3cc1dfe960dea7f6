use std::ffi::c_void;

use crate::co;
use crate::error::HrResult;
use crate::ole::guid::{Guid, Iid};

/// A pointer to a COM object, whose first member points to its virtual
/// table.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ComPtr(pub(crate) *mut *mut IUnknownVT);

impl ComPtr {
    pub const fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    /// Wraps a raw interface pointer, as returned by a native function.
    ///
    /// # Safety
    /// `p` must be null or point to a live COM object.
    pub const unsafe fn from_raw(p: *mut c_void) -> Self {
        Self(p as _)
    }

    pub fn as_raw(self) -> *mut c_void {
        self.0 as _
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    /// Returns the virtual table, seen as `T`.
    ///
    /// # Safety
    /// The pointer must not be null, and `T` must be the table of the
    /// interface, or one of its bases.
    pub unsafe fn vt<'a, T>(self) -> &'a T {
        &**(self.0 as *mut *mut T)
    }

    /// Calls `AddRef`, returning the new count.
    ///
    /// # Safety
    /// The pointer must not be null.
    pub unsafe fn add_ref(self) -> u32 {
        (self.vt::<IUnknownVT>().AddRef)(self)
    }

    /// Calls `Release`, returning the new count.
    ///
    /// # Safety
    /// The pointer must not be null, and must not be used afterwards unless
    /// another reference is held.
    pub unsafe fn release(self) -> u32 {
        (self.vt::<IUnknownVT>().Release)(self)
    }
}

impl std::fmt::Debug for ComPtr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ComPtr({:p})", self.0)
    }
}

/// A COM interface, which owns one reference to its object.
pub trait ComInterface: Sized {
    /// The interface ID.
    const IID: Iid;

    /// Takes ownership of one reference of the object.
    ///
    /// # Safety
    /// `p` must point to an object implementing this interface, and the
    /// reference must not be released elsewhere.
    unsafe fn from_ptr(p: ComPtr) -> Self;

    /// Returns the underlying pointer, without touching the reference count.
    fn ptr(&self) -> ComPtr;
}

/// `IUnknown` virtual table, the first member of every COM virtual table.
#[allow(non_snake_case)]
#[repr(C)]
pub struct IUnknownVT {
    pub QueryInterface: unsafe extern "system" fn(ComPtr, *const Guid, *mut ComPtr) -> co::HResult,
    pub AddRef: unsafe extern "system" fn(ComPtr) -> u32,
    pub Release: unsafe extern "system" fn(ComPtr) -> u32,
}

com_interface! {
    /// `IUnknown`, the base of all COM interfaces.
    ///
    /// `clone` calls `AddRef`, and dropping calls `Release`.
    IUnknown: 0x00000000, 0x0000, 0x0000, 0xc000, 0x000000000046
}

/// [`IUnknown`] methods, available to every COM interface.
pub trait OleIUnknown: ComInterface + Clone {
    /// `IUnknown::QueryInterface`: asks the object for another of its
    /// interfaces.
    ///
    /// Fails with [`E_NOINTERFACE`](co::HResult::E_NOINTERFACE) if the object
    /// doesn't implement it, and with [`E_POINTER`](co::HResult::E_POINTER)
    /// on a null interface.
    fn query_interface<T: ComInterface>(&self) -> HrResult<T> {
        if self.ptr().is_null() {
            return Err(co::HResult::E_POINTER);
        }
        let mut queried = ComPtr::null();
        unsafe {
            let vt = self.ptr().vt::<IUnknownVT>();
            (vt.QueryInterface)(self.ptr(), &T::IID, &mut queried).to_hrresult()?;
            Ok(T::from_ptr(queried))
        }
    }
}

impl<T: ComInterface + Clone> OleIUnknown for T {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::ole::ipersist::{IPersist, IPersistVT, OleIPersist};

    /// A COM object implemented in Rust, exposing `IUnknown` and `IPersist`.
    #[repr(C)]
    struct MockObject {
        vt: *const IPersistVT,
        refs: Cell<u32>,
        class_id: Guid,
    }

    static MOCK_VT: IPersistVT = IPersistVT {
        IUnknownVT: IUnknownVT {
            QueryInterface: mock_query_interface,
            AddRef: mock_add_ref,
            Release: mock_release,
        },
        GetClassID: mock_get_class_id,
    };

    unsafe fn this(p: ComPtr) -> &'static MockObject {
        &*(p.0 as *const MockObject)
    }

    unsafe extern "system" fn mock_query_interface(
        p: ComPtr,
        iid: *const Guid,
        out: *mut ComPtr,
    ) -> co::HResult {
        if *iid == IUnknown::IID || *iid == IPersist::IID {
            p.add_ref();
            *out = p;
            co::HResult::S_OK
        } else {
            *out = ComPtr::null();
            co::HResult::E_NOINTERFACE
        }
    }

    unsafe extern "system" fn mock_add_ref(p: ComPtr) -> u32 {
        let obj = this(p);
        obj.refs.set(obj.refs.get() + 1);
        obj.refs.get()
    }

    unsafe extern "system" fn mock_release(p: ComPtr) -> u32 {
        let obj = this(p);
        obj.refs.set(obj.refs.get() - 1);
        obj.refs.get()
    }

    unsafe extern "system" fn mock_get_class_id(p: ComPtr, out: *mut Guid) -> co::HResult {
        *out = this(p).class_id;
        co::HResult::S_OK
    }

    impl MockObject {
        /// A new object with one reference, owned by the caller.
        fn new(class_id: Guid) -> Box<Self> {
            Box::new(Self {
                vt: &MOCK_VT,
                refs: Cell::new(1),
                class_id,
            })
        }

        fn com_ptr(&self) -> ComPtr {
            ComPtr(self as *const Self as *mut *mut IUnknownVT)
        }
    }

    com_interface! {
        IUnsupported: 0x01234567, 0x89ab, 0xcdef, 0x0123, 0x456789abcdef
    }

    #[test]
    fn test_clone_and_drop_count_references() {
        let obj = MockObject::new(Guid::null());
        let unk = unsafe { IUnknown::from_ptr(obj.com_ptr()) };
        let copy = unk.clone();
        assert_eq!(obj.refs.get(), 2);
        assert_eq!(copy.ptr(), unk.ptr());

        drop(copy);
        assert_eq!(obj.refs.get(), 1);
        drop(unk);
        assert_eq!(obj.refs.get(), 0);
    }

    #[test]
    fn test_query_interface() {
        let class_id = Guid::from_parts(0xdeadbeef, 1, 2, 3, 4);
        let obj = MockObject::new(class_id);
        let unk = unsafe { IUnknown::from_ptr(obj.com_ptr()) };

        let persist = unk.query_interface::<IPersist>().unwrap();
        assert_eq!(obj.refs.get(), 2);
        assert_eq!(persist.get_class_id().unwrap(), class_id);

        let err = persist.query_interface::<IUnsupported>().unwrap_err();
        assert_eq!(err, co::HResult::E_NOINTERFACE);
        assert_eq!(obj.refs.get(), 2);

        drop(persist);
        drop(unk);
        assert_eq!(obj.refs.get(), 0);
    }

    #[test]
    fn test_null_pointer_is_not_released() {
        let unk = unsafe { IUnknown::from_ptr(ComPtr::null()) };
        assert!(unk.ptr().is_null());
        let copy = unk.clone();
        drop(copy);
        drop(unk);
    }

    #[test]
    fn test_null_pointer_query_fails() {
        let unk = unsafe { IUnknown::from_ptr(ComPtr::null()) };
        let err = unk.query_interface::<IUnknown>().unwrap_err();
        assert_eq!(err, co::HResult::E_POINTER);

        let persist = unsafe { IPersist::from_ptr(ComPtr::null()) };
        assert_eq!(persist.get_class_id().unwrap_err(), co::HResult::E_POINTER);
    }

    #[test]
    fn test_iunknown_iid() {
        assert_eq!(IUnknown::IID.to_string(), "{00000000-0000-0000-C000-000000000046}");
    }
}
