//! Variant types of message parameters whose meaning depends on another
//! field.

use crate::co;
use crate::user::handles::{Hmenu, Hwnd};
use crate::user::structs::{NcCalcSizeParams, Point, Rect};

/// Source of a [`WM_COMMAND`](crate::msg::wm::Command).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelMenuCtrl {
    /// Accelerator, with its command ID.
    Accel(u16),
    /// Menu item, with its command ID.
    Menu(u16),
    /// Notification from a child control.
    Ctrl(AccelMenuCtrlData),
}

/// Notification data of a child control in
/// [`AccelMenuCtrl::Ctrl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccelMenuCtrlData {
    pub notif_code: co::CmdCode,
    pub ctrl_id: u16,
    pub ctrl_hwnd: Hwnd,
}

/// Control to receive focus in
/// [`WM_NEXTDLGCTL`](crate::msg::wm::NextDlgCtl).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwndFocus {
    /// A specific control.
    Hwnd(Hwnd),
    /// The next control if `true`, the previous one if `false`.
    FocusNext(bool),
}

/// Window or menu, in [`WM_ENTERIDLE`](crate::msg::wm::EnterIdle).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwndHmenu {
    Hwnd(Hwnd),
    Hmenu(Hmenu),
}

/// Payload of [`WM_PARENTNOTIFY`](crate::msg::wm::ParentNotify), which
/// depends on the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwndPointId {
    /// Child window being created or destroyed.
    Hwnd(Hwnd),
    /// Cursor position of a button press.
    Point(Point),
    /// Pointer ID.
    Id(u16),
}

/// Payload of [`WM_NCCALCSIZE`](crate::msg::wm::NcCalcSize).
#[derive(Debug)]
pub enum NccspRect<'a> {
    /// Full calculation data, `wParam` is `TRUE`.
    Nccsp(&'a mut NcCalcSizeParams),
    /// Just the proposed window rectangle, `wParam` is `FALSE`.
    Rect(&'a mut Rect),
}
