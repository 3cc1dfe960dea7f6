//! Internal declaration macros.
//!
//! Native constants, handles and message structs are very repetitive; these
//! macros keep every declaration to a single block.

/// Declares a typed constant: a transparent newtype over an integer, with
/// conversions, formatters and a table of its named values.
///
/// Each value is a single token tree: a literal, or a parenthesized
/// expression such as `(-16)`. `Display` is left to the caller, see
/// [`const_ordinary!`].
macro_rules! const_type {
    (
        $(#[$doc:meta])*
        $name:ident: $ntype:ty;
        $(
            $(#[$vdoc:meta])*
            $vname:ident $val:tt
        )*
    ) => {
        $(#[$doc])*
        #[repr(transparent)]
        #[derive(Default, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) $ntype);

        impl $name {
            $(
                $(#[$vdoc])*
                pub const $vname: Self = Self($val);
            )*

            /// Every named value of this type, in declaration order.
            pub(crate) const NAMES: &'static [(&'static str, $ntype)] = &[
                $( (stringify!($vname), $val), )*
            ];

            /// Returns the underlying integer value.
            pub const fn raw(self) -> $ntype {
                self.0
            }

            /// Returns the name of the constant, if it's a known one.
            ///
            /// When two names share a value, the first declared one wins.
            pub fn name(self) -> Option<&'static str> {
                Self::NAMES
                    .iter()
                    .find(|(_, v)| *v == self.0)
                    .map(|(n, _)| *n)
            }
        }

        impl From<$ntype> for $name {
            fn from(n: $ntype) -> Self {
                Self(n)
            }
        }

        impl From<$name> for $ntype {
            fn from(c: $name) -> Self {
                c.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.name() {
                    Some(n) => write!(f, "{}::{}", stringify!($name), n),
                    None => write!(f, "{}({:#x})", stringify!($name), self.0),
                }
            }
        }

        impl std::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl std::fmt::UpperHex for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::UpperHex::fmt(&self.0, f)
            }
        }

        impl std::fmt::Binary for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Binary::fmt(&self.0, f)
            }
        }
    };
}

/// Declares an ordinary typed constant, whose `Display` is the integer value.
macro_rules! const_ordinary {
    (
        $(#[$doc:meta])*
        $name:ident: $ntype:ty;
        $(
            $(#[$vdoc:meta])*
            $vname:ident $val:tt
        )*
    ) => {
        const_type! {
            $(#[$doc])*
            $name: $ntype;
            $(
                $(#[$vdoc])*
                $vname $val
            )*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

/// Declares a native handle type: a transparent, copyable wrapper over an
/// opaque pointer, implementing [`Handle`](crate::Handle).
///
/// The optional `=> path` names the `windows` crate type it converts to and
/// from, on Windows builds.
macro_rules! decl_handle {
    (
        $(#[$doc:meta])*
        $name:ident: $display:literal $(=> $native:path)?
    ) => {
        $(#[$doc])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) *mut std::ffi::c_void);

        // Handles are plain identifiers, validated by the OS on every call.
        unsafe impl Send for $name {}
        unsafe impl Sync for $name {}

        impl crate::Handle for $name {
            const NULL: Self = Self(std::ptr::null_mut());

            unsafe fn from_ptr(p: *mut std::ffi::c_void) -> Self {
                Self(p)
            }

            fn as_ptr(&self) -> *mut std::ffi::c_void {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as crate::Handle>::NULL
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({:#010x})", $display, self.0 as usize)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }

        $(
            #[cfg(windows)]
            impl From<$name> for $native {
                fn from(h: $name) -> Self {
                    Self(h.0)
                }
            }

            #[cfg(windows)]
            impl From<$native> for $name {
                fn from(h: $native) -> Self {
                    Self(h.0)
                }
            }
        )?
    };
}

/// Declares a sequence of `u16` constants with consecutive values, starting
/// from the given one. Useful for control and resource IDs.
///
/// # Example
/// ```
/// safewin::seq_ids! {
///     BTN_OK = 1000;
///     BTN_CANCEL
///     TXT_NAME
/// }
///
/// assert_eq!(BTN_CANCEL, 1001);
/// assert_eq!(TXT_NAME, 1002);
/// ```
#[macro_export]
macro_rules! seq_ids {
    () => {};

    ($(#[$doc:meta])* $name:ident = $val:expr; $($rest:tt)*) => {
        $(#[$doc])*
        pub const $name: u16 = $val;
        $crate::seq_ids!(@next $name; $($rest)*);
    };

    (@next $prev:ident; $(#[$doc:meta])* $name:ident = $val:expr; $($rest:tt)*) => {
        $(#[$doc])*
        pub const $name: u16 = $val;
        $crate::seq_ids!(@next $name; $($rest)*);
    };

    (@next $prev:ident; $(#[$doc:meta])* $name:ident $($rest:tt)*) => {
        $(#[$doc])*
        pub const $name: u16 = $prev + 1;
        $crate::seq_ids!(@next $name; $($rest)*);
    };

    (@next $prev:ident;) => {};
}

/// Declares a COM interface: a wrapper over a [`ComPtr`](crate::ole::ComPtr)
/// which calls `AddRef` on `clone` and `Release` on drop.
///
/// The IID is given as the five groups of its string form, see
/// [`Guid::from_parts`](crate::ole::Guid::from_parts).
macro_rules! com_interface {
    (
        $(#[$doc:meta])*
        $name:ident: $p1:literal, $p2:literal, $p3:literal, $p4:literal, $p5:literal
    ) => {
        $(#[$doc])*
        #[repr(transparent)]
        pub struct $name(crate::ole::ComPtr);

        impl crate::ole::ComInterface for $name {
            const IID: crate::ole::Iid = crate::ole::Guid::from_parts($p1, $p2, $p3, $p4, $p5);

            unsafe fn from_ptr(p: crate::ole::ComPtr) -> Self {
                Self(p)
            }

            fn ptr(&self) -> crate::ole::ComPtr {
                self.0
            }
        }

        impl Clone for $name {
            fn clone(&self) -> Self {
                if !self.0.is_null() {
                    unsafe { self.0.add_ref() };
                }
                Self(self.0)
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                if !self.0.is_null() {
                    unsafe { self.0.release() };
                }
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({:p})", stringify!($name), self.0.as_raw())
            }
        }
    };
}
