//! `repr(C)` structs of the window manager, binary compatible with their
//! native counterparts.

use std::ffi::c_void;

use serde::{Deserialize, Serialize};

use crate::co;
use crate::kernel::{hiword, loword, make_dword, Hinstance, WString};
use crate::user::handles::{Hmenu, Hwnd};

/// `POINT` struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Unpacks the coordinates of mouse messages: signed 16-bit values in
    /// the low and high words, the `GET_X_LPARAM`/`GET_Y_LPARAM` macros.
    /// Coordinates left of or above the origin are negative on multiple
    /// monitor setups.
    pub const fn from_lparam(lparam: isize) -> Self {
        Self {
            x: loword(lparam as u32) as i16 as i32,
            y: hiword(lparam as u32) as i16 as i32,
        }
    }

    /// Packs the coordinates into a message parameter, the `MAKELPARAM`
    /// macro.
    pub const fn to_lparam(self) -> isize {
        make_dword(self.x as i16 as u16, self.y as i16 as u16) as isize
    }
}

/// `SIZE` struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub cx: i32,
    pub cy: i32,
}

impl Size {
    pub const fn new(cx: i32, cy: i32) -> Self {
        Self { cx, cy }
    }
}

/// `RECT` struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Same rule as `PtInRect`: the left and top edges are inside, the right
    /// and bottom ones are not.
    pub const fn contains(&self, pt: Point) -> bool {
        pt.x >= self.left && pt.x < self.right && pt.y >= self.top && pt.y < self.bottom
    }
}

/// `MSG` struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Msg {
    pub hwnd: Hwnd,
    pub message: co::Wm,
    pub wparam: usize,
    pub lparam: isize,
    pub time: u32,
    pub pt: Point,
}

/// `MINMAXINFO` struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMaxInfo {
    pub reserved: Point,
    pub max_size: Point,
    pub max_position: Point,
    pub min_track_size: Point,
    pub max_track_size: Point,
}

/// `WINDOWPOS` struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WindowPos {
    pub hwnd: Hwnd,
    pub hwnd_insert_after: Hwnd,
    pub x: i32,
    pub y: i32,
    pub cx: i32,
    pub cy: i32,
    pub flags: co::Swp,
}

/// `STYLESTRUCT` struct. Depending on the message, the values are
/// [`co::Ws`] or [`co::WsEx`].
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StyleStruct {
    pub style_old: u32,
    pub style_new: u32,
}

impl StyleStruct {
    pub const fn style_old_ws(&self) -> co::Ws {
        co::Ws::from_bits_retain(self.style_old)
    }

    pub const fn style_new_ws(&self) -> co::Ws {
        co::Ws::from_bits_retain(self.style_new)
    }

    pub const fn style_old_wsex(&self) -> co::WsEx {
        co::WsEx::from_bits_retain(self.style_old)
    }

    pub const fn style_new_wsex(&self) -> co::WsEx {
        co::WsEx::from_bits_retain(self.style_new)
    }
}

/// `CREATESTRUCT` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CreateStruct {
    pub create_params: *mut c_void,
    pub hinstance: Hinstance,
    pub hmenu: Hmenu,
    pub hwnd_parent: Hwnd,
    pub cy: i32,
    pub cx: i32,
    pub y: i32,
    pub x: i32,
    pub style: i32,
    pub name: *const u16,
    pub class_name: *const u16,
    pub ex_style: u32,
}

impl Default for CreateStruct {
    fn default() -> Self {
        Self {
            create_params: std::ptr::null_mut(),
            hinstance: Hinstance::default(),
            hmenu: Hmenu::default(),
            hwnd_parent: Hwnd::default(),
            cy: 0,
            cx: 0,
            y: 0,
            x: 0,
            style: 0,
            name: std::ptr::null(),
            class_name: std::ptr::null(),
            ex_style: 0,
        }
    }
}

/// Strings passed by pointer may also be atoms, integers below 0x10000.
fn atom_or_str(p: *const u16) -> Option<String> {
    if (p as usize) < 0x1_0000 {
        None
    } else {
        Some(unsafe { WString::from_wchars_nullt(p) }.to_string())
    }
}

impl CreateStruct {
    pub const fn style(&self) -> co::Ws {
        co::Ws::from_bits_retain(self.style as u32)
    }

    pub const fn ex_style(&self) -> co::WsEx {
        co::WsEx::from_bits_retain(self.ex_style)
    }

    /// The window name, `None` if null or a resource ID.
    ///
    /// # Safety
    /// `name` must be null, an atom, or a valid null-terminated string.
    pub unsafe fn name(&self) -> Option<String> {
        atom_or_str(self.name)
    }

    /// The class name, `None` if null or an atom.
    ///
    /// # Safety
    /// `class_name` must be null, an atom, or a valid null-terminated string.
    pub unsafe fn class_name(&self) -> Option<String> {
        atom_or_str(self.class_name)
    }
}

/// `HELPINFO` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct HelpInfo {
    pub cb_size: u32,
    /// `HELPINFO_WINDOW` (1) or `HELPINFO_MENUITEM` (2).
    pub context_type: i32,
    pub ctrl_id: i32,
    pub item_handle: *mut c_void,
    pub context_id: usize,
    pub mouse_pos: Point,
}

impl Default for HelpInfo {
    fn default() -> Self {
        Self {
            cb_size: std::mem::size_of::<Self>() as u32,
            context_type: 0,
            ctrl_id: 0,
            item_handle: std::ptr::null_mut(),
            context_id: 0,
            mouse_pos: Point::default(),
        }
    }
}

/// `NCCALCSIZE_PARAMS` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NcCalcSizeParams {
    pub rgrc: [Rect; 3],
    pub lppos: *mut WindowPos,
}

impl Default for NcCalcSizeParams {
    fn default() -> Self {
        Self {
            rgrc: [Rect::default(); 3],
            lppos: std::ptr::null_mut(),
        }
    }
}

/// `TITLEBARINFOEX` struct.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleBarInfoEx {
    pub cb_size: u32,
    pub rc_title_bar: Rect,
    /// `STATE_SYSTEM_*` flags of the title bar and its buttons.
    pub rgstate: [u32; 6],
    pub rgrect: [Rect; 6],
}

impl Default for TitleBarInfoEx {
    fn default() -> Self {
        Self {
            cb_size: std::mem::size_of::<Self>() as u32,
            rc_title_bar: Rect::default(),
            rgstate: [0; 6],
            rgrect: [Rect::default(); 6],
        }
    }
}

/// `DELETEITEMSTRUCT` struct.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeleteItemStruct {
    /// `ODT_*` control type.
    pub ctl_type: u32,
    pub ctl_id: u32,
    pub item_id: u32,
    pub hwnd_item: Hwnd,
    pub item_data: usize,
}

/// `NMHDR` struct, the header of every `WM_NOTIFY` payload.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NmHdr {
    pub hwnd_from: Hwnd,
    pub id_from: usize,
    /// Notification code; common-control codes are negative when read as
    /// `i32`.
    pub code: u32,
}

impl NmHdr {
    /// Control ID as the `u16` used by dialog templates.
    pub const fn id_from(&self) -> u16 {
        self.id_from as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_lparam_signed() {
        let pt = Point::from_lparam(0xfff6_0014_u32 as isize);
        assert_eq!(pt, Point::new(20, -10));
        assert_eq!(pt.to_lparam(), 0xfff6_0014_u32 as isize);
        assert_eq!(Point::from_lparam(Point::new(-1, -32768).to_lparam()), Point::new(-1, -32768));
    }

    #[test]
    fn test_rect_geometry() {
        let rc = Rect { left: 10, top: 20, right: 110, bottom: 70 };
        assert_eq!((rc.width(), rc.height()), (100, 50));
        assert!(rc.contains(Point::new(10, 20)));
        assert!(!rc.contains(Point::new(110, 20)));
        assert!(!rc.contains(Point::new(50, 70)));
    }

    #[test]
    fn test_layouts_match_native() {
        use std::mem::size_of;
        let ptr = size_of::<usize>();
        assert_eq!(size_of::<Point>(), 8);
        assert_eq!(size_of::<Rect>(), 16);
        assert_eq!(size_of::<MinMaxInfo>(), 40);
        assert_eq!(size_of::<StyleStruct>(), 8);
        assert_eq!(size_of::<NmHdr>(), 3 * ptr);
        if ptr == 8 {
            assert_eq!(size_of::<Msg>(), 48);
            assert_eq!(size_of::<WindowPos>(), 40);
            assert_eq!(size_of::<CreateStruct>(), 80);
            assert_eq!(size_of::<HelpInfo>(), 40);
            assert_eq!(size_of::<NcCalcSizeParams>(), 56);
        }
        assert_eq!(TitleBarInfoEx::default().cb_size, 140);
    }

    #[test]
    fn test_style_struct_views() {
        let ss = StyleStruct { style_old: 0x10cf_0000, style_new: 0x0000_0008 };
        assert!(ss.style_old_ws().contains(co::Ws::VISIBLE | co::Ws::OVERLAPPEDWINDOW));
        assert!(ss.style_new_wsex().contains(co::WsEx::TOPMOST));
    }

    #[test]
    fn test_geometry_serializes() {
        let rc = Rect { left: 1, top: 2, right: 3, bottom: 4 };
        let json = serde_json::to_string(&rc).unwrap();
        assert_eq!(json, r#"{"left":1,"top":2,"right":3,"bottom":4}"#);
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rc);
    }

    #[test]
    fn test_create_struct_atom_class() {
        let cs = CreateStruct {
            class_name: 0xc001 as *const u16,
            ..Default::default()
        };
        assert_eq!(unsafe { cs.class_name() }, None);
        assert_eq!(unsafe { cs.name() }, None);
    }
}
