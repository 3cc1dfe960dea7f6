//! Window manager and GDI handle types.

use std::ffi::c_void;

decl_handle! {
    /// Handle to a window.
    Hwnd: "HWND" => windows::Win32::Foundation::HWND
}

decl_handle! {
    /// Handle to a device context.
    Hdc: "HDC" => windows::Win32::Graphics::Gdi::HDC
}

decl_handle! {
    /// Handle to a menu.
    Hmenu: "HMENU" => windows::Win32::UI::WindowsAndMessaging::HMENU
}

decl_handle! {
    /// Handle to an icon.
    Hicon: "HICON" => windows::Win32::UI::WindowsAndMessaging::HICON
}

decl_handle! {
    /// Handle to a cursor.
    Hcursor: "HCURSOR" => windows::Win32::UI::WindowsAndMessaging::HCURSOR
}

decl_handle! {
    /// Handle to a brush.
    Hbrush: "HBRUSH" => windows::Win32::Graphics::Gdi::HBRUSH
}

decl_handle! {
    /// Handle to a font.
    Hfont: "HFONT" => windows::Win32::Graphics::Gdi::HFONT
}

decl_handle! {
    /// Handle to a region.
    Hrgn: "HRGN" => windows::Win32::Graphics::Gdi::HRGN
}

decl_handle! {
    /// Handle to the internal structure describing files dropped on a window.
    Hdrop: "HDROP" => windows::Win32::UI::Shell::HDROP
}

decl_handle! {
    /// Handle to an installed hook procedure.
    Hhook: "HHOOK" => windows::Win32::UI::WindowsAndMessaging::HHOOK
}

impl Hwnd {
    /// `HWND_TOP`, for [`set_window_pos`](Hwnd::set_window_pos).
    pub const TOP: Self = Self(std::ptr::null_mut());
    /// `HWND_BOTTOM`.
    pub const BOTTOM: Self = Self(1 as *mut c_void);
    /// `HWND_TOPMOST`.
    pub const TOPMOST: Self = Self(-1isize as *mut c_void);
    /// `HWND_NOTOPMOST`.
    pub const NOTOPMOST: Self = Self(-2isize as *mut c_void);
    /// `HWND_MESSAGE`, parent of message-only windows.
    pub const MESSAGE: Self = Self(-3isize as *mut c_void);
}

impl Hbrush {
    /// A brush from a system color index, the `(HBRUSH)(COLOR_xxx + 1)`
    /// convention of window classes.
    pub fn from_sys_color(color_index: i32) -> Self {
        Self((color_index as isize).wrapping_add(1) as *mut c_void)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Handle;

    #[test]
    fn test_special_hwnds() {
        assert!(Hwnd::TOP.is_null());
        assert_eq!(Hwnd::TOPMOST.as_isize(), -1);
        assert_eq!(Hwnd::MESSAGE.as_isize(), -3);
    }

    #[test]
    fn test_isize_conversion() {
        let h = unsafe { Hmenu::from_isize(0x4321) };
        assert_eq!(h.as_isize(), 0x4321);
        assert_eq!(h.to_string(), "HMENU(0x00004321)");
        assert_eq!(Hbrush::from_sys_color(5).as_isize(), 6);
    }

    #[test]
    fn test_sys_color_brush_at_the_limit() {
        assert_eq!(Hbrush::from_sys_color(i32::MAX).as_isize(), (i32::MAX as isize).wrapping_add(1));
        assert_eq!(Hbrush::from_sys_color(-1).as_isize(), 0);
    }
}
