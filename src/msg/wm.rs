//! Standard window messages, the `WM_*` ones.
//!
//! Handles that may be absent are `Option`s; zero in the parameter maps to
//! `None` and back.

use crate::co;
use crate::kernel::{hiword, loword, make_dword, WString};
use crate::msg::{MsgSend, MsgSendRecv, WndMsg};
use crate::user::{
    AccelMenuCtrl, AccelMenuCtrlData, CreateStruct, DeleteItemStruct, HelpInfo, Hbrush, Hdc,
    Hdrop, Hfont, Hicon, Hmenu, HwndFocus, HwndHmenu, HwndPointId, Hrgn, Hwnd, MinMaxInfo, Msg,
    NccspRect, NmHdr, Point, Rect, StyleStruct, TimerProc, TitleBarInfoEx, WindowPos,
};
use crate::Handle;

fn ptr_of<T>(r: &T) -> isize {
    r as *const T as isize
}

fn ptr_of_mut<T>(r: &mut T) -> isize {
    r as *mut T as isize
}

unsafe fn ref_at<'a, T>(p: isize) -> &'a T {
    &*(p as *const T)
}

unsafe fn mut_at<'a, T>(p: isize) -> &'a mut T {
    &mut *(p as *mut T)
}

unsafe fn opt_handle<H: Handle>(v: isize) -> Option<H> {
    H::from_isize(v).as_opt()
}

fn opt_isize<H: Handle>(h: Option<H>) -> isize {
    h.map_or(0, |h| h.as_isize())
}

/// Keystroke flags carried in the `lParam` of keyboard messages.
const fn pack_keystroke(
    repeat_count: u16,
    scan_code: u8,
    is_extended_key: bool,
    has_alt_key: bool,
    key_was_previously_down: bool,
    key_is_being_released: bool,
) -> isize {
    (repeat_count as u32
        | (scan_code as u32) << 16
        | (is_extended_key as u32) << 24
        | (has_alt_key as u32) << 29
        | (key_was_previously_down as u32) << 30
        | (key_is_being_released as u32) << 31) as isize
}

const fn bit(lparam: isize, n: u32) -> bool {
    (lparam as u32) >> n & 1 != 0
}

macro_rules! msg_empty {
    ($(#[$doc:meta])* $name:ident: $wm:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name {}

        impl MsgSend for $name {
            type RetType = ();

            fn convert_ret(&self, _: isize) -> Self::RetType {}

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(co::Wm::$wm, 0, 0)
            }
        }

        impl MsgSendRecv for $name {
            unsafe fn from_generic_wm(_: WndMsg) -> Self {
                Self {}
            }
        }
    };
}

macro_rules! msg_keystroke {
    ($(#[$doc:meta])* $name:ident: $wm:ident; $code:ident: $ty:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub $code: $ty,
            pub repeat_count: u16,
            pub scan_code: u8,
            pub is_extended_key: bool,
            pub has_alt_key: bool,
            pub key_was_previously_down: bool,
            pub key_is_being_released: bool,
        }

        impl MsgSend for $name {
            type RetType = ();

            fn convert_ret(&self, _: isize) -> Self::RetType {}

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(
                    co::Wm::$wm,
                    u16::from(self.$code) as usize,
                    pack_keystroke(
                        self.repeat_count,
                        self.scan_code,
                        self.is_extended_key,
                        self.has_alt_key,
                        self.key_was_previously_down,
                        self.key_is_being_released,
                    ),
                )
            }
        }

        impl MsgSendRecv for $name {
            unsafe fn from_generic_wm(p: WndMsg) -> Self {
                Self {
                    $code: <$ty>::from(p.wparam as u16),
                    repeat_count: loword(p.lparam as u32),
                    scan_code: (p.lparam as u32 >> 16) as u8,
                    is_extended_key: bit(p.lparam, 24),
                    has_alt_key: bit(p.lparam, 29),
                    key_was_previously_down: bit(p.lparam, 30),
                    key_is_being_released: bit(p.lparam, 31),
                }
            }
        }
    };
}

macro_rules! msg_button {
    ($(#[$doc:meta])* $name:ident: $wm:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub keys: co::Mk,
            /// Cursor position relative to the client area.
            pub coords: Point,
        }

        impl MsgSend for $name {
            type RetType = ();

            fn convert_ret(&self, _: isize) -> Self::RetType {}

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(co::Wm::$wm, self.keys.bits() as usize, self.coords.to_lparam())
            }
        }

        impl MsgSendRecv for $name {
            unsafe fn from_generic_wm(p: WndMsg) -> Self {
                Self {
                    keys: co::Mk::from_bits_retain(loword(p.wparam as u32)),
                    coords: Point::from_lparam(p.lparam),
                }
            }
        }
    };
}

macro_rules! msg_xbutton {
    ($(#[$doc:meta])* $name:ident: $wm:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub keys: co::Mk,
            /// `XBUTTON1` (1) or `XBUTTON2` (2).
            pub button: u16,
            pub coords: Point,
        }

        impl MsgSend for $name {
            type RetType = ();

            fn convert_ret(&self, _: isize) -> Self::RetType {}

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(
                    co::Wm::$wm,
                    make_dword(self.keys.bits(), self.button) as usize,
                    self.coords.to_lparam(),
                )
            }
        }

        impl MsgSendRecv for $name {
            unsafe fn from_generic_wm(p: WndMsg) -> Self {
                Self {
                    keys: co::Mk::from_bits_retain(loword(p.wparam as u32)),
                    button: hiword(p.wparam as u32),
                    coords: Point::from_lparam(p.lparam),
                }
            }
        }
    };
}

macro_rules! msg_ctlcolor {
    ($(#[$doc:meta])* $name:ident: $wm:ident) => {
        $(#[$doc])*
        ///
        /// Returns the brush to paint the control background with.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub hdc: Hdc,
            pub hwnd: Hwnd,
        }

        impl MsgSend for $name {
            type RetType = Hbrush;

            fn convert_ret(&self, v: isize) -> Self::RetType {
                unsafe { Hbrush::from_isize(v) }
            }

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(co::Wm::$wm, self.hdc.as_isize() as usize, self.hwnd.as_isize())
            }
        }

        impl MsgSendRecv for $name {
            unsafe fn from_generic_wm(p: WndMsg) -> Self {
                Self {
                    hdc: Hdc::from_isize(p.wparam as isize),
                    hwnd: Hwnd::from_isize(p.lparam),
                }
            }
        }
    };
}

macro_rules! msg_scroll {
    ($(#[$doc:meta])* $name:ident: $wm:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub scroll_box_pos: u16,
            pub request: co::SbReq,
            /// The scroll bar control, `None` for the window scroll bar.
            pub hcontrol: Option<Hwnd>,
        }

        impl MsgSend for $name {
            type RetType = ();

            fn convert_ret(&self, _: isize) -> Self::RetType {}

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(
                    co::Wm::$wm,
                    make_dword(self.request.raw(), self.scroll_box_pos) as usize,
                    opt_isize(self.hcontrol),
                )
            }
        }

        impl MsgSendRecv for $name {
            unsafe fn from_generic_wm(p: WndMsg) -> Self {
                Self {
                    scroll_box_pos: hiword(p.wparam as u32),
                    request: co::SbReq::from(loword(p.wparam as u32)),
                    hcontrol: opt_handle(p.lparam),
                }
            }
        }
    };
}

macro_rules! msg_ref {
    ($(#[$doc:meta])* $name:ident: $wm:ident; $field:ident: &mut $ty:ty) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name<'a> {
            pub $field: &'a mut $ty,
        }

        impl MsgSend for $name<'_> {
            type RetType = ();

            fn convert_ret(&self, _: isize) -> Self::RetType {}

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(co::Wm::$wm, 0, ptr_of_mut(self.$field))
            }
        }

        impl MsgSendRecv for $name<'_> {
            unsafe fn from_generic_wm(p: WndMsg) -> Self {
                Self {
                    $field: mut_at(p.lparam),
                }
            }
        }
    };
    ($(#[$doc:meta])* $name:ident: $wm:ident; $field:ident: & $ty:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            pub $field: &'a $ty,
        }

        impl MsgSend for $name<'_> {
            type RetType = ();

            fn convert_ret(&self, _: isize) -> Self::RetType {}

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(co::Wm::$wm, 0, ptr_of(self.$field))
            }
        }

        impl MsgSendRecv for $name<'_> {
            unsafe fn from_generic_wm(p: WndMsg) -> Self {
                Self {
                    $field: ref_at(p.lparam),
                }
            }
        }
    };
}

macro_rules! msg_menu_pos {
    ($(#[$doc:meta])* $name:ident: $wm:ident; $pos:ident; $ret:ty, $conv:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub $pos: u32,
            pub hmenu: Hmenu,
        }

        impl MsgSend for $name {
            type RetType = $ret;

            fn convert_ret(&self, v: isize) -> Self::RetType {
                $conv(v)
            }

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(co::Wm::$wm, self.$pos as usize, self.hmenu.as_isize())
            }
        }

        impl MsgSendRecv for $name {
            unsafe fn from_generic_wm(p: WndMsg) -> Self {
                Self {
                    $pos: p.wparam as u32,
                    hmenu: Hmenu::from_isize(p.lparam),
                }
            }
        }
    };
}

macro_rules! msg_style {
    ($(#[$doc:meta])* $name:ident: $wm:ident; $($m:tt)?) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name<'a> {
            pub change: co::GwlChange,
            pub stylestruct: &'a $($m)? StyleStruct,
        }

        impl MsgSend for $name<'_> {
            type RetType = ();

            fn convert_ret(&self, _: isize) -> Self::RetType {}

            fn as_generic_wm(&mut self) -> WndMsg {
                WndMsg::new(
                    co::Wm::$wm,
                    self.change.raw() as isize as usize,
                    &*self.stylestruct as *const StyleStruct as isize,
                )
            }
        }

        impl MsgSendRecv for $name<'_> {
            unsafe fn from_generic_wm(p: WndMsg) -> Self {
                Self {
                    change: co::GwlChange::from(p.wparam as i8),
                    stylestruct: &$($m)? *(p.lparam as *mut StyleStruct),
                }
            }
        }
    };
}

msg_empty! {
    /// `WM_CANCELMODE`.
    CancelMode: CANCELMODE
}
msg_empty! {
    /// `WM_CHILDACTIVATE`.
    ChildActivate: CHILDACTIVATE
}
msg_empty! {
    /// `WM_CLOSE`.
    Close: CLOSE
}
msg_empty! {
    /// `WM_DESTROY`.
    Destroy: DESTROY
}
msg_empty! {
    /// `WM_ENTERSIZEMOVE`.
    EnterSizeMove: ENTERSIZEMOVE
}
msg_empty! {
    /// `WM_EXITSIZEMOVE`.
    ExitSizeMove: EXITSIZEMOVE
}
msg_empty! {
    /// `WM_MOUSELEAVE`.
    MouseLeave: MOUSELEAVE
}
msg_empty! {
    /// `WM_NCDESTROY`, the last message a window receives.
    NcDestroy: NCDESTROY
}
msg_empty! {
    /// `WM_NULL`.
    Null: NULL
}
msg_empty! {
    /// `WM_PAINT`.
    Paint: PAINT
}
msg_empty! {
    /// `WM_THEMECHANGED`.
    ThemeChanged: THEMECHANGED
}

msg_keystroke! {
    /// `WM_CHAR`.
    Char: CHAR; char_code: u16
}
msg_keystroke! {
    /// `WM_DEADCHAR`.
    DeadChar: DEADCHAR; char_code: u16
}
msg_keystroke! {
    /// `WM_SYSCHAR`.
    SysChar: SYSCHAR; char_code: u16
}
msg_keystroke! {
    /// `WM_SYSDEADCHAR`.
    SysDeadChar: SYSDEADCHAR; char_code: u16
}
msg_keystroke! {
    /// `WM_KEYDOWN`.
    KeyDown: KEYDOWN; vkey_code: co::Vk
}
msg_keystroke! {
    /// `WM_KEYUP`.
    KeyUp: KEYUP; vkey_code: co::Vk
}
msg_keystroke! {
    /// `WM_SYSKEYDOWN`.
    SysKeyDown: SYSKEYDOWN; vkey_code: co::Vk
}
msg_keystroke! {
    /// `WM_SYSKEYUP`.
    SysKeyUp: SYSKEYUP; vkey_code: co::Vk
}

msg_button! {
    /// `WM_LBUTTONDBLCLK`.
    LButtonDblClk: LBUTTONDBLCLK
}
msg_button! {
    /// `WM_LBUTTONDOWN`.
    LButtonDown: LBUTTONDOWN
}
msg_button! {
    /// `WM_LBUTTONUP`.
    LButtonUp: LBUTTONUP
}
msg_button! {
    /// `WM_MBUTTONDBLCLK`.
    MButtonDblClk: MBUTTONDBLCLK
}
msg_button! {
    /// `WM_MBUTTONDOWN`.
    MButtonDown: MBUTTONDOWN
}
msg_button! {
    /// `WM_MBUTTONUP`.
    MButtonUp: MBUTTONUP
}
msg_button! {
    /// `WM_RBUTTONDBLCLK`.
    RButtonDblClk: RBUTTONDBLCLK
}
msg_button! {
    /// `WM_RBUTTONDOWN`.
    RButtonDown: RBUTTONDOWN
}
msg_button! {
    /// `WM_RBUTTONUP`.
    RButtonUp: RBUTTONUP
}
msg_button! {
    /// `WM_MOUSEHOVER`.
    MouseHover: MOUSEHOVER
}
msg_button! {
    /// `WM_MOUSEMOVE`.
    MouseMove: MOUSEMOVE
}
msg_xbutton! {
    /// `WM_XBUTTONDBLCLK`.
    XButtonDblClk: XBUTTONDBLCLK
}
msg_xbutton! {
    /// `WM_XBUTTONDOWN`.
    XButtonDown: XBUTTONDOWN
}
msg_xbutton! {
    /// `WM_XBUTTONUP`.
    XButtonUp: XBUTTONUP
}

msg_ctlcolor! {
    /// `WM_CTLCOLORBTN`.
    CtlColorBtn: CTLCOLORBTN
}
msg_ctlcolor! {
    /// `WM_CTLCOLORDLG`.
    CtlColorDlg: CTLCOLORDLG
}
msg_ctlcolor! {
    /// `WM_CTLCOLOREDIT`.
    CtlColorEdit: CTLCOLOREDIT
}
msg_ctlcolor! {
    /// `WM_CTLCOLORLISTBOX`.
    CtlColorListBox: CTLCOLORLISTBOX
}
msg_ctlcolor! {
    /// `WM_CTLCOLORSCROLLBAR`.
    CtlColorScrollBar: CTLCOLORSCROLLBAR
}
msg_ctlcolor! {
    /// `WM_CTLCOLORSTATIC`.
    CtlColorStatic: CTLCOLORSTATIC
}

msg_scroll! {
    /// `WM_HSCROLL`.
    HScroll: HSCROLL
}
msg_scroll! {
    /// `WM_VSCROLL`.
    VScroll: VSCROLL
}

msg_ref! {
    /// `WM_GETMINMAXINFO`.
    GetMinMaxInfo: GETMINMAXINFO; info: &mut MinMaxInfo
}
msg_ref! {
    /// `WM_GETTITLEBARINFOEX`. The `cb_size` of the struct must be set.
    GetTitleBarInfoEx: GETTITLEBARINFOEX; info: &mut TitleBarInfoEx
}
msg_ref! {
    /// `WM_HELP`.
    Help: HELP; helpinfo: &HelpInfo
}
msg_ref! {
    /// `WM_MOVING`, with the window rectangle in screen coordinates. Change
    /// it to change the position.
    Moving: MOVING; window_pos: &mut Rect
}
msg_ref! {
    /// `WM_WINDOWPOSCHANGED`.
    WindowPosChanged: WINDOWPOSCHANGED; windowpos: &WindowPos
}
msg_ref! {
    /// `WM_WINDOWPOSCHANGING`. Change the struct to change the new position.
    WindowPosChanging: WINDOWPOSCHANGING; windowpos: &mut WindowPos
}

msg_menu_pos! {
    /// `WM_MENUCOMMAND`.
    MenuCommand: MENUCOMMAND; item_index; (), |_| ()
}
msg_menu_pos! {
    /// `WM_MENUDRAG`.
    MenuDrag: MENUDRAG; position; co::Mnd, |v: isize| co::Mnd::from(v as u8)
}
msg_menu_pos! {
    /// `WM_MENURBUTTONUP`.
    MenuRButtonUp: MENURBUTTONUP; position; (), |_| ()
}

msg_style! {
    /// `WM_STYLECHANGED`.
    StyleChanged: STYLECHANGED;
}
msg_style! {
    /// `WM_STYLECHANGING`. Change `style_new` to change the new style.
    StyleChanging: STYLECHANGING; mut
}

/// `WM_ACTIVATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activate {
    pub event: co::Wa,
    pub is_minimized: bool,
    /// Window being deactivated or activated, which may be in another
    /// thread.
    pub hwnd: Option<Hwnd>,
}

impl MsgSend for Activate {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::ACTIVATE,
            make_dword(self.event.raw(), self.is_minimized as u16) as usize,
            opt_isize(self.hwnd),
        )
    }
}

impl MsgSendRecv for Activate {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            event: co::Wa::from(loword(p.wparam as u32)),
            is_minimized: hiword(p.wparam as u32) != 0,
            hwnd: opt_handle(p.lparam),
        }
    }
}

/// `WM_ACTIVATEAPP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivateApp {
    pub is_being_activated: bool,
    /// Thread owning the window on the other side of the switch.
    pub thread_id: u32,
}

impl MsgSend for ActivateApp {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::ACTIVATEAPP,
            self.is_being_activated as usize,
            self.thread_id as isize,
        )
    }
}

impl MsgSendRecv for ActivateApp {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            is_being_activated: p.wparam != 0,
            thread_id: p.lparam as u32,
        }
    }
}

/// `WM_APPCOMMAND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppCommand {
    pub hwnd_owner: Hwnd,
    pub app_command: co::AppCmd,
    pub u_device: co::AppCmdDevice,
    pub keys: co::Mk,
}

impl MsgSend for AppCommand {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::APPCOMMAND,
            self.hwnd_owner.as_isize() as usize,
            make_dword(self.keys.bits(), self.app_command.raw() | self.u_device.raw()) as isize,
        )
    }
}

impl MsgSendRecv for AppCommand {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        let hi = hiword(p.lparam as u32);
        Self {
            hwnd_owner: Hwnd::from_isize(p.wparam as isize),
            app_command: co::AppCmd::from(hi & !co::AppCmdDevice::MASK),
            u_device: co::AppCmdDevice::from(hi & co::AppCmdDevice::MASK),
            keys: co::Mk::from_bits_retain(loword(p.lparam as u32)),
        }
    }
}

/// `WM_CAPTURECHANGED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureChanged {
    pub hwnd_gaining_mouse: Hwnd,
}

impl MsgSend for CaptureChanged {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::CAPTURECHANGED, 0, self.hwnd_gaining_mouse.as_isize())
    }
}

impl MsgSendRecv for CaptureChanged {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hwnd_gaining_mouse: Hwnd::from_isize(p.lparam),
        }
    }
}

/// `WM_COMMAND`.
///
/// Menus and accelerators send a null `lParam`; the high word of `wParam`
/// then tells them apart. Anything with a control handle is a control
/// notification, whatever its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub event: AccelMenuCtrl,
}

impl MsgSend for Command {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        let (wparam, lparam) = match self.event {
            AccelMenuCtrl::Accel(id) => (make_dword(id, co::CmdCode::ACCELERATOR.raw()), 0),
            AccelMenuCtrl::Menu(id) => (make_dword(id, co::CmdCode::MENU.raw()), 0),
            AccelMenuCtrl::Ctrl(data) => (
                make_dword(data.ctrl_id, data.notif_code.raw()),
                data.ctrl_hwnd.as_isize(),
            ),
        };
        WndMsg::new(co::Wm::COMMAND, wparam as usize, lparam)
    }
}

impl MsgSendRecv for Command {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        let id = loword(p.wparam as u32);
        let code = co::CmdCode::from(hiword(p.wparam as u32));
        let event = if p.lparam == 0 {
            match code {
                co::CmdCode::ACCELERATOR => AccelMenuCtrl::Accel(id),
                _ => AccelMenuCtrl::Menu(id),
            }
        } else {
            AccelMenuCtrl::Ctrl(AccelMenuCtrlData {
                notif_code: code,
                ctrl_id: id,
                ctrl_hwnd: Hwnd::from_isize(p.lparam),
            })
        };
        Self { event }
    }
}

/// `WM_CONTEXTMENU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenu {
    pub hwnd: Hwnd,
    /// Screen coordinates, `(-1, -1)` when triggered from the keyboard.
    pub cursor_pos: Point,
}

impl MsgSend for ContextMenu {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::CONTEXTMENU,
            self.hwnd.as_isize() as usize,
            self.cursor_pos.to_lparam(),
        )
    }
}

impl MsgSendRecv for ContextMenu {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hwnd: Hwnd::from_isize(p.wparam as isize),
            cursor_pos: Point::from_lparam(p.lparam),
        }
    }
}

/// `WM_CREATE`. Return 0 to continue, -1 to destroy the window.
#[derive(Debug, Clone, Copy)]
pub struct Create<'a> {
    pub createstruct: &'a CreateStruct,
}

impl MsgSend for Create<'_> {
    type RetType = i32;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v as i32
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::CREATE, 0, ptr_of(self.createstruct))
    }
}

impl MsgSendRecv for Create<'_> {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            createstruct: ref_at(p.lparam),
        }
    }
}

/// `WM_DELETEITEM`.
#[derive(Debug, Clone, Copy)]
pub struct DeleteItem<'a> {
    pub control_id: u16,
    pub deleteitemstruct: &'a DeleteItemStruct,
}

impl MsgSend for DeleteItem<'_> {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::DELETEITEM,
            self.control_id as usize,
            ptr_of(self.deleteitemstruct),
        )
    }
}

impl MsgSendRecv for DeleteItem<'_> {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            control_id: p.wparam as u16,
            deleteitemstruct: ref_at(p.lparam),
        }
    }
}

/// `WM_DROPFILES`. Read the files with
/// [`Hdrop::drag_query_files`](crate::Hdrop::drag_query_files).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropFiles {
    pub hdrop: Hdrop,
}

impl MsgSend for DropFiles {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::DROPFILES, self.hdrop.as_isize() as usize, 0)
    }
}

impl MsgSendRecv for DropFiles {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hdrop: Hdrop::from_isize(p.wparam as isize),
        }
    }
}

/// `WM_ENABLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enable {
    pub has_been_enabled: bool,
}

impl MsgSend for Enable {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::ENABLE, self.has_been_enabled as usize, 0)
    }
}

impl MsgSendRecv for Enable {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            has_been_enabled: p.wparam != 0,
        }
    }
}

/// `WM_ENDSESSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndSession {
    pub is_session_being_ended: bool,
    pub event: co::EndSession,
}

impl MsgSend for EndSession {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::ENDSESSION,
            self.is_session_being_ended as usize,
            self.event.bits() as isize,
        )
    }
}

impl MsgSendRecv for EndSession {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            is_session_being_ended: p.wparam != 0,
            event: co::EndSession::from_bits_retain(p.lparam as u32),
        }
    }
}

/// `WM_ENTERIDLE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterIdle {
    pub reason: co::Msgf,
    /// The dialog box for [`co::Msgf::DIALOGBOX`], the menu otherwise.
    pub handle: HwndHmenu,
}

impl MsgSend for EnterIdle {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        let lparam = match self.handle {
            HwndHmenu::Hwnd(h) => h.as_isize(),
            HwndHmenu::Hmenu(h) => h.as_isize(),
        };
        WndMsg::new(co::Wm::ENTERIDLE, self.reason.raw() as usize, lparam)
    }
}

impl MsgSendRecv for EnterIdle {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        let reason = co::Msgf::from(p.wparam as u8);
        Self {
            reason,
            handle: match reason {
                co::Msgf::DIALOGBOX => HwndHmenu::Hwnd(Hwnd::from_isize(p.lparam)),
                _ => HwndHmenu::Hmenu(Hmenu::from_isize(p.lparam)),
            },
        }
    }
}

/// `WM_ENTERMENULOOP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterMenuLoop {
    pub with_trackpopupmenu: bool,
}

impl MsgSend for EnterMenuLoop {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::ENTERMENULOOP, self.with_trackpopupmenu as usize, 0)
    }
}

impl MsgSendRecv for EnterMenuLoop {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            with_trackpopupmenu: p.wparam != 0,
        }
    }
}

/// `WM_ERASEBKGND`. Return nonzero if the background was erased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraseBkgnd {
    pub hdc: Hdc,
}

impl MsgSend for EraseBkgnd {
    type RetType = i32;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v as i32
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::ERASEBKGND, self.hdc.as_isize() as usize, 0)
    }
}

impl MsgSendRecv for EraseBkgnd {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hdc: Hdc::from_isize(p.wparam as isize),
        }
    }
}

/// `WM_EXITMENULOOP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitMenuLoop {
    pub is_shortcut: bool,
}

impl MsgSend for ExitMenuLoop {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::EXITMENULOOP, self.is_shortcut as usize, 0)
    }
}

impl MsgSendRecv for ExitMenuLoop {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            is_shortcut: p.wparam != 0,
        }
    }
}

/// `WM_GETDLGCODE`.
#[derive(Debug)]
pub struct GetDlgCode<'a> {
    pub vkey_code: co::Vk,
    /// The message being processed, if any.
    pub msg: Option<&'a mut Msg>,
}

impl MsgSend for GetDlgCode<'_> {
    type RetType = co::Dlgc;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        co::Dlgc::from_bits_retain(v as u32)
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::GETDLGCODE,
            self.vkey_code.raw() as usize,
            self.msg.as_deref_mut().map_or(0, ptr_of_mut),
        )
    }
}

impl MsgSendRecv for GetDlgCode<'_> {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            vkey_code: co::Vk::from(p.wparam as u16),
            msg: match p.lparam {
                0 => None,
                ptr => Some(mut_at(ptr)),
            },
        }
    }
}

/// `WM_GETFONT`. Returns `None` when the control uses the system font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetFont {}

impl MsgSend for GetFont {
    type RetType = Option<Hfont>;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        unsafe { opt_handle(v) }
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::GETFONT, 0, 0)
    }
}

impl MsgSendRecv for GetFont {
    unsafe fn from_generic_wm(_: WndMsg) -> Self {
        Self {}
    }
}

/// `MN_GETHMENU`, sent to a menu window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetHMenu {}

impl MsgSend for GetHMenu {
    type RetType = Option<Hmenu>;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        unsafe { opt_handle(v) }
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::MN_GETHMENU, 0, 0)
    }
}

impl MsgSendRecv for GetHMenu {
    unsafe fn from_generic_wm(_: WndMsg) -> Self {
        Self {}
    }
}

/// `WM_GETTEXT`. Returns the number of chars copied, not counting the
/// terminating null.
#[derive(Debug)]
pub struct GetText<'a> {
    pub buffer: &'a mut [u16],
}

impl MsgSend for GetText<'_> {
    type RetType = u32;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v as u32
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::GETTEXT,
            self.buffer.len(),
            self.buffer.as_mut_ptr() as isize,
        )
    }
}

impl MsgSendRecv for GetText<'_> {
    /// A null `lParam` gives an empty buffer.
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            buffer: if p.lparam == 0 {
                &mut []
            } else {
                std::slice::from_raw_parts_mut(p.lparam as *mut u16, p.wparam)
            },
        }
    }
}

/// `WM_GETTEXTLENGTH`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetTextLength {}

impl MsgSend for GetTextLength {
    type RetType = u32;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v as u32
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::GETTEXTLENGTH, 0, 0)
    }
}

impl MsgSendRecv for GetTextLength {
    unsafe fn from_generic_wm(_: WndMsg) -> Self {
        Self {}
    }
}

/// `WM_INITDIALOG`. Return `true` to let the system set the focus to
/// `hwnd_focus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitDialog {
    pub hwnd_focus: Hwnd,
    pub additional_data: isize,
}

impl MsgSend for InitDialog {
    type RetType = bool;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v != 0
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::INITDIALOG,
            self.hwnd_focus.as_isize() as usize,
            self.additional_data,
        )
    }
}

impl MsgSendRecv for InitDialog {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hwnd_focus: Hwnd::from_isize(p.wparam as isize),
            additional_data: p.lparam,
        }
    }
}

/// `WM_INITMENUPOPUP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitMenuPopup {
    pub hmenu: Hmenu,
    pub item_pos: u16,
    pub is_window_menu: bool,
}

impl MsgSend for InitMenuPopup {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::INITMENUPOPUP,
            self.hmenu.as_isize() as usize,
            make_dword(self.item_pos, self.is_window_menu as u16) as isize,
        )
    }
}

impl MsgSendRecv for InitMenuPopup {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hmenu: Hmenu::from_isize(p.wparam as isize),
            item_pos: loword(p.lparam as u32),
            is_window_menu: hiword(p.lparam as u32) != 0,
        }
    }
}

/// `WM_KILLFOCUS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KillFocus {
    /// Window receiving the focus.
    pub hwnd: Option<Hwnd>,
}

impl MsgSend for KillFocus {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::KILLFOCUS, opt_isize(self.hwnd) as usize, 0)
    }
}

impl MsgSendRecv for KillFocus {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hwnd: opt_handle(p.wparam as isize),
        }
    }
}

/// `WM_MOVE`, with the new client area origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub coords: Point,
}

impl MsgSend for Move {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::MOVE, 0, self.coords.to_lparam())
    }
}

impl MsgSendRecv for Move {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            coords: Point::from_lparam(p.lparam),
        }
    }
}

/// `WM_NCCALCSIZE`.
#[derive(Debug)]
pub struct NcCalcSize<'a> {
    pub data: NccspRect<'a>,
}

impl MsgSend for NcCalcSize<'_> {
    type RetType = co::Wvr;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        co::Wvr::from_bits_retain(v as u32)
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        let (wparam, lparam) = match &mut self.data {
            NccspRect::Nccsp(nccalc) => (1, ptr_of_mut(&mut **nccalc)),
            NccspRect::Rect(rc) => (0, ptr_of_mut(&mut **rc)),
        };
        WndMsg::new(co::Wm::NCCALCSIZE, wparam, lparam)
    }
}

impl MsgSendRecv for NcCalcSize<'_> {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            data: match p.wparam {
                0 => NccspRect::Rect(mut_at(p.lparam)),
                _ => NccspRect::Nccsp(mut_at(p.lparam)),
            },
        }
    }
}

/// `WM_NCCREATE`. Return `false` to abort the creation.
#[derive(Debug, Clone, Copy)]
pub struct NcCreate<'a> {
    pub createstruct: &'a CreateStruct,
}

impl MsgSend for NcCreate<'_> {
    type RetType = bool;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v != 0
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::NCCREATE, 0, ptr_of(self.createstruct))
    }
}

impl MsgSendRecv for NcCreate<'_> {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            createstruct: ref_at(p.lparam),
        }
    }
}

/// `WM_NCHITTEST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NcHitTest {
    /// Screen coordinates.
    pub cursor_pos: Point,
}

impl MsgSend for NcHitTest {
    type RetType = co::Ht;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        co::Ht::from(v as i16)
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::NCHITTEST, 0, self.cursor_pos.to_lparam())
    }
}

impl MsgSendRecv for NcHitTest {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            cursor_pos: Point::from_lparam(p.lparam),
        }
    }
}

/// `WM_NCPAINT`. The region is `1` when the whole frame must be painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NcPaint {
    pub updated_hrgn: Hrgn,
}

impl MsgSend for NcPaint {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::NCPAINT, self.updated_hrgn.as_isize() as usize, 0)
    }
}

impl MsgSendRecv for NcPaint {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            updated_hrgn: Hrgn::from_isize(p.wparam as isize),
        }
    }
}

/// `WM_NEXTDLGCTL`.
///
/// The low word of `lParam` tells whether `wParam` is a control handle or a
/// direction flag, where zero means the next control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextDlgCtl {
    pub hwnd_focus: HwndFocus,
}

impl MsgSend for NextDlgCtl {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        let (wparam, is_handle) = match self.hwnd_focus {
            HwndFocus::Hwnd(hctl) => (hctl.as_isize() as usize, 1),
            HwndFocus::FocusNext(next) => (if next { 0 } else { 1 }, 0),
        };
        WndMsg::new(co::Wm::NEXTDLGCTL, wparam, make_dword(is_handle, 0) as isize)
    }
}

impl MsgSendRecv for NextDlgCtl {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hwnd_focus: match loword(p.lparam as u32) {
                0 => HwndFocus::FocusNext(p.wparam == 0),
                _ => HwndFocus::Hwnd(Hwnd::from_isize(p.wparam as isize)),
            },
        }
    }
}

/// `WM_NOTIFY`. The header is usually the first member of a larger,
/// notification-specific struct.
#[derive(Debug, Clone, Copy)]
pub struct Notify<'a> {
    pub nmhdr: &'a NmHdr,
}

impl Notify<'_> {
    /// Reinterprets the header as the notification struct that contains it.
    ///
    /// # Safety
    /// The notification must really carry a `T`, starting with an
    /// [`NmHdr`].
    pub unsafe fn cast_nmhdr<T>(&self) -> &T {
        &*(self.nmhdr as *const NmHdr as *const T)
    }
}

impl MsgSend for Notify<'_> {
    type RetType = isize;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::NOTIFY, self.nmhdr.id_from, ptr_of(self.nmhdr))
    }
}

impl MsgSendRecv for Notify<'_> {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            nmhdr: ref_at(p.lparam),
        }
    }
}

/// `WM_PARENTNOTIFY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentNotify {
    pub event: co::Wmpn,
    pub child_id: u16,
    pub data: HwndPointId,
}

impl MsgSend for ParentNotify {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        let lparam = match self.data {
            HwndPointId::Hwnd(h) => h.as_isize(),
            HwndPointId::Point(pt) => pt.to_lparam(),
            HwndPointId::Id(id) => id as isize,
        };
        WndMsg::new(
            co::Wm::PARENTNOTIFY,
            make_dword(self.event.raw(), self.child_id) as usize,
            lparam,
        )
    }
}

impl MsgSendRecv for ParentNotify {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        let event = co::Wmpn::from(loword(p.wparam as u32));
        Self {
            event,
            child_id: hiword(p.wparam as u32),
            data: match event {
                co::Wmpn::CREATE | co::Wmpn::DESTROY => {
                    HwndPointId::Hwnd(Hwnd::from_isize(p.lparam))
                }
                co::Wmpn::POINTERDOWN => HwndPointId::Id(p.lparam as u16),
                _ => HwndPointId::Point(Point::from_lparam(p.lparam)),
            },
        }
    }
}

/// `WM_QUERYOPEN`. Return `false` to keep the window minimized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOpen {}

impl MsgSend for QueryOpen {
    type RetType = bool;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v != 0
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::QUERYOPEN, 0, 0)
    }
}

impl MsgSendRecv for QueryOpen {
    unsafe fn from_generic_wm(_: WndMsg) -> Self {
        Self {}
    }
}

/// `WM_SETCURSOR`. Return `true` to stop further processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetCursor {
    pub hwnd: Hwnd,
    pub hit_test: co::Ht,
    /// The mouse message that triggered this one, zero in menu mode.
    pub mouse_msg: u16,
}

impl MsgSend for SetCursor {
    type RetType = bool;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v != 0
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::SETCURSOR,
            self.hwnd.as_isize() as usize,
            make_dword(self.hit_test.raw() as u16, self.mouse_msg) as isize,
        )
    }
}

impl MsgSendRecv for SetCursor {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hwnd: Hwnd::from_isize(p.wparam as isize),
            hit_test: co::Ht::from(loword(p.lparam as u32) as i16),
            mouse_msg: hiword(p.lparam as u32),
        }
    }
}

/// `WM_SETFOCUS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetFocus {
    pub hwnd_losing_focus: Option<Hwnd>,
}

impl MsgSend for SetFocus {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::SETFOCUS, opt_isize(self.hwnd_losing_focus) as usize, 0)
    }
}

impl MsgSendRecv for SetFocus {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hwnd_losing_focus: opt_handle(p.wparam as isize),
        }
    }
}

/// `WM_SETFONT`. `None` restores the system font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetFont {
    pub hfont: Option<Hfont>,
    pub redraw: bool,
}

impl MsgSend for SetFont {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::SETFONT,
            opt_isize(self.hfont) as usize,
            make_dword(self.redraw as u16, 0) as isize,
        )
    }
}

impl MsgSendRecv for SetFont {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hfont: opt_handle(p.wparam as isize),
            redraw: loword(p.lparam as u32) != 0,
        }
    }
}

/// `WM_SETICON`. Returns the previous icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetIcon {
    pub size: co::IconSize,
    pub hicon: Option<Hicon>,
}

impl MsgSend for SetIcon {
    type RetType = Option<Hicon>;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        unsafe { opt_handle(v) }
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::SETICON,
            self.size.raw() as usize,
            opt_isize(self.hicon),
        )
    }
}

impl MsgSendRecv for SetIcon {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            size: co::IconSize::from(p.wparam as u8),
            hicon: opt_handle(p.lparam),
        }
    }
}

/// `WM_SETTEXT`. Returns `false` if the text could not be set.
#[derive(Debug, Clone)]
pub struct SetText {
    pub text: WString,
}

impl MsgSend for SetText {
    type RetType = bool;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        // LB_ERRSPACE and CB_ERRSPACE are -2, CB_ERR is -1.
        !matches!(v, 0 | -1 | -2)
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::SETTEXT, 0, self.text.as_ptr() as isize)
    }
}

impl MsgSendRecv for SetText {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            text: WString::from_wchars_nullt(p.lparam as *const u16),
        }
    }
}

/// `WM_SHOWWINDOW`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowWindow {
    pub being_shown: bool,
    /// Zero when the message comes from a `ShowWindow` call.
    pub status: co::SwStatus,
}

impl MsgSend for ShowWindow {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::SHOWWINDOW,
            self.being_shown as usize,
            self.status.raw() as isize,
        )
    }
}

impl MsgSendRecv for ShowWindow {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            being_shown: p.wparam != 0,
            status: co::SwStatus::from(p.lparam as u8),
        }
    }
}

/// `WM_SIZE`, with the new client area dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub request: co::SizeReq,
    pub client_area: crate::Size,
}

impl MsgSend for Size {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::SIZE,
            self.request.raw() as usize,
            make_dword(self.client_area.cx as u16, self.client_area.cy as u16) as isize,
        )
    }
}

impl MsgSendRecv for Size {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            request: co::SizeReq::from(p.wparam as u8),
            client_area: crate::Size::new(
                loword(p.lparam as u32) as i32,
                hiword(p.lparam as u32) as i32,
            ),
        }
    }
}

/// `WM_SIZING`, with the window rectangle in screen coordinates. Change it to
/// change the size.
#[derive(Debug)]
pub struct Sizing<'a> {
    pub window_edge: co::Wmsz,
    pub coords: &'a mut Rect,
}

impl MsgSend for Sizing<'_> {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::SIZING,
            self.window_edge.raw() as usize,
            ptr_of_mut(self.coords),
        )
    }
}

impl MsgSendRecv for Sizing<'_> {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            window_edge: co::Wmsz::from(p.wparam as u8),
            coords: mut_at(p.lparam),
        }
    }
}

/// `WM_SYSCOMMAND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysCommand {
    pub request: co::Sc,
    /// Screen coordinates, when chosen with the mouse.
    pub position: Point,
}

impl MsgSend for SysCommand {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::SYSCOMMAND,
            self.request.raw() as usize,
            self.position.to_lparam(),
        )
    }
}

impl MsgSendRecv for SysCommand {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            // The four low-order bits are used internally by the system.
            request: co::Sc::from(p.wparam as u32 & 0xfff0),
            position: Point::from_lparam(p.lparam),
        }
    }
}

/// `WM_TIMER`.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    pub timer_id: usize,
    pub timer_proc: Option<TimerProc>,
}

impl MsgSend for Timer {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::TIMER,
            self.timer_id,
            self.timer_proc.map_or(0, |f| f as usize as isize),
        )
    }
}

impl MsgSendRecv for Timer {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            timer_id: p.wparam,
            timer_proc: std::mem::transmute::<usize, Option<TimerProc>>(p.lparam as usize),
        }
    }
}

/// `WM_UNINITMENUPOPUP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UninitMenuPopup {
    pub hmenu: Hmenu,
    /// [`co::Mf::SYSMENU`] for the window menu, empty otherwise.
    pub which: co::Mf,
}

impl MsgSend for UninitMenuPopup {
    type RetType = ();

    fn convert_ret(&self, _: isize) -> Self::RetType {}

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(
            co::Wm::UNINITMENUPOPUP,
            self.hmenu.as_isize() as usize,
            make_dword(0, self.which.bits() as u16) as isize,
        )
    }
}

impl MsgSendRecv for UninitMenuPopup {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        Self {
            hmenu: Hmenu::from_isize(p.wparam as isize),
            which: co::Mf::from_bits_retain(hiword(p.lparam as u32) as u32),
        }
    }
}

/// `WM_UNDO`. Returns `true` if the operation succeeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undo {}

impl MsgSend for Undo {
    type RetType = bool;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v != 0
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        WndMsg::new(co::Wm::UNDO, 0, 0)
    }
}

impl MsgSendRecv for Undo {
    unsafe fn from_generic_wm(_: WndMsg) -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<M: MsgSendRecv>(mut m: M) -> M {
        let raw = m.as_generic_wm();
        unsafe { M::from_generic_wm(raw) }
    }

    fn hwnd(v: isize) -> Hwnd {
        unsafe { Hwnd::from_isize(v) }
    }

    #[test]
    fn test_keystroke_flags() {
        let raw = WndMsg::new(co::Wm::KEYUP, 0x41, 0xc01e_0001_u32 as isize);
        let k = unsafe { KeyUp::from_generic_wm(raw) };
        assert_eq!(k.vkey_code, co::Vk::CHAR_A);
        assert_eq!(k.repeat_count, 1);
        assert_eq!(k.scan_code, 0x1e);
        assert!(!k.is_extended_key);
        assert!(!k.has_alt_key);
        assert!(k.key_was_previously_down);
        assert!(k.key_is_being_released);

        let mut again = k;
        assert_eq!(again.as_generic_wm(), raw);

        let alt = roundtrip(SysChar {
            char_code: 'x' as u16,
            repeat_count: 3,
            scan_code: 0xff,
            is_extended_key: true,
            has_alt_key: true,
            key_was_previously_down: false,
            key_is_being_released: false,
        });
        assert_eq!(alt.char_code, 'x' as u16);
        assert_eq!((alt.repeat_count, alt.scan_code), (3, 0xff));
        assert!(alt.is_extended_key && alt.has_alt_key);
    }

    #[test]
    fn test_button_negative_coords() {
        let mut m = MouseMove {
            keys: co::Mk::LBUTTON,
            coords: Point::new(-5, 300),
        };
        let raw = m.as_generic_wm();
        assert_eq!(raw.msg_id, co::Wm::MOUSEMOVE);
        let back = unsafe { MouseMove::from_generic_wm(raw) };
        assert_eq!(back.coords, Point::new(-5, 300));

        let x = roundtrip(XButtonUp {
            keys: co::Mk::XBUTTON2,
            button: 2,
            coords: Point::new(1, 2),
        });
        assert_eq!((x.keys, x.button), (co::Mk::XBUTTON2, 2));
    }

    #[test]
    fn test_command_sources() {
        let raw = WndMsg::new(co::Wm::COMMAND, make_dword(40001, 1) as usize, 0);
        let cmd = unsafe { Command::from_generic_wm(raw) };
        assert_eq!(cmd.event, AccelMenuCtrl::Accel(40001));

        let raw = WndMsg::new(co::Wm::COMMAND, 40002, 0);
        let cmd = unsafe { Command::from_generic_wm(raw) };
        assert_eq!(cmd.event, AccelMenuCtrl::Menu(40002));

        // BN_CLICKED is 0, like a menu, but comes with the button handle.
        let raw = WndMsg::new(co::Wm::COMMAND, 1001, 0x1234);
        let cmd = unsafe { Command::from_generic_wm(raw) };
        assert_eq!(
            cmd.event,
            AccelMenuCtrl::Ctrl(AccelMenuCtrlData {
                notif_code: co::CmdCode::MENU,
                ctrl_id: 1001,
                ctrl_hwnd: hwnd(0x1234),
            })
        );

        let mut cmd = Command {
            event: AccelMenuCtrl::Accel(7),
        };
        assert_eq!(cmd.as_generic_wm().wparam, 0x0001_0007);
    }

    #[test]
    fn test_next_dlg_ctl() {
        let raw = WndMsg::new(co::Wm::NEXTDLGCTL, 0x5678, 1);
        let m = unsafe { NextDlgCtl::from_generic_wm(raw) };
        assert_eq!(m.hwnd_focus, HwndFocus::Hwnd(hwnd(0x5678)));

        let prev = roundtrip(NextDlgCtl {
            hwnd_focus: HwndFocus::FocusNext(false),
        });
        assert_eq!(prev.hwnd_focus, HwndFocus::FocusNext(false));

        let mut next = NextDlgCtl {
            hwnd_focus: HwndFocus::FocusNext(true),
        };
        let raw = next.as_generic_wm();
        assert_eq!((raw.wparam, raw.lparam), (0, 0));
    }

    #[test]
    fn test_parent_notify_payloads() {
        let created = roundtrip(ParentNotify {
            event: co::Wmpn::CREATE,
            child_id: 3,
            data: HwndPointId::Hwnd(hwnd(0x99)),
        });
        assert_eq!(created.data, HwndPointId::Hwnd(hwnd(0x99)));
        assert_eq!(created.child_id, 3);

        let click = roundtrip(ParentNotify {
            event: co::Wmpn::RBUTTONDOWN,
            child_id: 0,
            data: HwndPointId::Point(Point::new(-3, 4)),
        });
        assert_eq!(click.data, HwndPointId::Point(Point::new(-3, 4)));

        let pointer = roundtrip(ParentNotify {
            event: co::Wmpn::POINTERDOWN,
            child_id: 0,
            data: HwndPointId::Id(12),
        });
        assert_eq!(pointer.data, HwndPointId::Id(12));
    }

    #[test]
    fn test_enter_idle_and_app_command() {
        let menu = roundtrip(EnterIdle {
            reason: co::Msgf::MENU,
            handle: HwndHmenu::Hmenu(unsafe { Hmenu::from_isize(0x44) }),
        });
        assert!(matches!(menu.handle, HwndHmenu::Hmenu(_)));
        let dlg = roundtrip(EnterIdle {
            reason: co::Msgf::DIALOGBOX,
            handle: HwndHmenu::Hwnd(hwnd(0x45)),
        });
        assert_eq!(dlg.handle, HwndHmenu::Hwnd(hwnd(0x45)));

        let cmd = roundtrip(AppCommand {
            hwnd_owner: hwnd(0x10),
            app_command: co::AppCmd::MEDIA_PLAY_PAUSE,
            u_device: co::AppCmdDevice::MOUSE,
            keys: co::Mk::SHIFT,
        });
        assert_eq!(cmd.app_command, co::AppCmd::MEDIA_PLAY_PAUSE);
        assert_eq!(cmd.u_device, co::AppCmdDevice::MOUSE);
        assert_eq!(cmd.keys, co::Mk::SHIFT);
    }

    #[test]
    fn test_activate_and_focus_handles() {
        let act = roundtrip(Activate {
            event: co::Wa::CLICKACTIVE,
            is_minimized: true,
            hwnd: None,
        });
        assert_eq!(act.event, co::Wa::CLICKACTIVE);
        assert!(act.is_minimized);
        assert_eq!(act.hwnd, None);

        let kill = roundtrip(KillFocus {
            hwnd: Some(hwnd(0x20)),
        });
        assert_eq!(kill.hwnd, Some(hwnd(0x20)));
    }

    #[test]
    fn test_size_and_sys_command() {
        let raw = WndMsg::new(co::Wm::SIZE, 2, make_dword(1920, 1080) as isize);
        let sz = unsafe { Size::from_generic_wm(raw) };
        assert_eq!(sz.request, co::SizeReq::MAXIMIZED);
        assert_eq!(sz.client_area, crate::Size::new(1920, 1080));

        let raw = WndMsg::new(co::Wm::SYSCOMMAND, 0xf012, 0);
        let sc = unsafe { SysCommand::from_generic_wm(raw) };
        assert_eq!(sc.request, co::Sc::MOVE);
    }

    #[test]
    fn test_pointer_payloads_share_memory() {
        let mut info = MinMaxInfo::default();
        let mut m = GetMinMaxInfo { info: &mut info };
        let raw = m.as_generic_wm();
        let received = unsafe { GetMinMaxInfo::from_generic_wm(raw) };
        received.info.max_track_size = Point::new(800, 600);
        assert_eq!(info.max_track_size, Point::new(800, 600));

        let mut rc = Rect::default();
        let mut calc = NcCalcSize {
            data: NccspRect::Rect(&mut rc),
        };
        let raw = calc.as_generic_wm();
        assert_eq!(raw.wparam, 0);
        match unsafe { NcCalcSize::from_generic_wm(raw) }.data {
            NccspRect::Rect(r) => r.right = 50,
            NccspRect::Nccsp(_) => panic!("expected a rect"),
        }
        assert_eq!(rc.right, 50);

        let ss = StyleStruct { style_old: 1, style_new: 2 };
        let changed = roundtrip(StyleChanged {
            change: co::GwlChange::EXSTYLE,
            stylestruct: &ss,
        });
        assert_eq!(changed.change, co::GwlChange::EXSTYLE);
        assert_eq!(changed.stylestruct.style_new, 2);
    }

    #[test]
    fn test_text_messages() {
        let mut set = SetText {
            text: WString::from_str("hello"),
        };
        let raw = set.as_generic_wm();
        let received = unsafe { SetText::from_generic_wm(raw) };
        assert_eq!(received.text.to_string(), "hello");
        assert!(!set.convert_ret(-2));
        assert!(set.convert_ret(1));

        let mut buf = [0u16; 8];
        let mut get = GetText { buffer: &mut buf };
        let raw = get.as_generic_wm();
        assert_eq!(raw.wparam, 8);
        let received = unsafe { GetText::from_generic_wm(raw) };
        received.buffer[0] = 'z' as u16;
        assert_eq!(buf[0], 'z' as u16);

        let null_buf = unsafe { GetText::from_generic_wm(WndMsg::new(co::Wm::GETTEXT, 16, 0)) };
        assert!(null_buf.buffer.is_empty());
    }

    #[test]
    fn test_return_conversions() {
        assert_eq!(GetHMenu {}.convert_ret(0), None);
        assert!(GetFont {}.convert_ret(0x77).is_some());
        assert_eq!(
            NcHitTest { cursor_pos: Point::default() }.convert_ret(-1),
            co::Ht::TRANSPARENT
        );
        assert_eq!(
            MenuDrag { position: 0, hmenu: Hmenu::default() }.convert_ret(1),
            co::Mnd::ENDMENU
        );
        let t = roundtrip(Timer {
            timer_id: 42,
            timer_proc: None,
        });
        assert_eq!(t.timer_id, 42);
        assert!(t.timer_proc.is_none());
        assert_eq!(roundtrip(Close {}), Close {});
    }
}
