//! The common handle trait.

use std::ffi::c_void;

/// A native handle: an opaque, process-scoped reference to an object owned by
/// the operating system (window, device context, menu, process, ...).
///
/// Handle types are `Copy`; owning wrappers such as
/// [`CloseHandleGuard`](crate::CloseHandleGuard) or
/// [`HookGuard`](crate::HookGuard) release the object when dropped.
pub trait Handle: Sized + Copy + PartialEq {
    /// The null handle.
    const NULL: Self;

    /// Creates a handle from a raw pointer.
    ///
    /// # Safety
    /// The pointer must be a handle of this type, or null.
    unsafe fn from_ptr(p: *mut c_void) -> Self;

    /// Returns the underlying raw pointer.
    fn as_ptr(&self) -> *mut c_void;

    /// Tells whether the handle is null.
    fn is_null(&self) -> bool {
        self.as_ptr().is_null()
    }

    /// Returns `None` if the handle is null, otherwise `Some(self)`.
    fn as_opt(self) -> Option<Self> {
        if self.is_null() {
            None
        } else {
            Some(self)
        }
    }

    /// Creates a handle from the integer carried by a message parameter.
    ///
    /// # Safety
    /// The value must be a handle of this type, or zero.
    unsafe fn from_isize(v: isize) -> Self {
        Self::from_ptr(v as *mut c_void)
    }

    /// Returns the handle as an integer, the way message parameters carry it.
    fn as_isize(&self) -> isize {
        self.as_ptr() as isize
    }
}
