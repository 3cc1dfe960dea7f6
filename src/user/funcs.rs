//! Free functions of user32.

use windows::core::PCWSTR;
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, LRESULT, POINT, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetAsyncKeyState, GetDoubleClickTime, ReleaseCapture,
};
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, DispatchMessageW, EnumWindows, GetCursorPos, GetMessagePos, GetMessageW,
    GetSystemMetrics, InSendMessage, LockSetForegroundWindow, PeekMessageW, PostQuitMessage,
    PostThreadMessageW, RegisterClassExW, SetCursorPos, SetProcessDPIAware, ShowCursor,
    TranslateMessage, UnregisterClassW, WaitMessage, FOREGROUND_WINDOW_LOCK_CODE, MSG,
    PEEK_MESSAGE_REMOVE_TYPE, SYSTEM_METRICS_INDEX, WNDCLASSEXW, WNDCLASS_STYLES,
};

use crate::co;
use crate::error::SysResult;
use crate::kernel::{get_last_error, set_last_error, Hinstance, WString};
use crate::msg::{MsgSend, WndMsg};
use crate::user::handles::{Hbrush, Hcursor, Hicon, Hwnd};
use crate::user::procs::WndProc;
use crate::user::structs::{Msg, Point};
use crate::Handle;

/// Maps a `BOOL` return value to the last error when false.
pub(crate) fn bool_result(ret: BOOL) -> SysResult<()> {
    if ret.as_bool() {
        Ok(())
    } else {
        Err(get_last_error())
    }
}

/// Handle-returning functions give null for both "none" and failure;
/// only a nonzero last error is a failure.
pub(crate) fn opt_hwnd(ret: windows::core::Result<HWND>) -> SysResult<Option<Hwnd>> {
    match ret {
        Ok(h) => Ok(Hwnd::from(h).as_opt()),
        Err(e) if e.code().is_ok() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Enumeration functions return false when the callback stops them early.
pub(crate) fn enum_result(ret: windows::core::Result<()>) -> SysResult<()> {
    match ret {
        Err(e) if !e.code().is_ok() => Err(e.into()),
        _ => Ok(()),
    }
}

/// Trampoline for `EnumWindows` and `EnumChildWindows`; `lparam` points to
/// the closure.
pub(crate) unsafe extern "system" fn enum_windows_proc<F>(hwnd: HWND, lparam: LPARAM) -> BOOL
where
    F: FnMut(Hwnd) -> bool,
{
    let func = &mut *(lparam.0 as *mut F);
    BOOL::from(func(Hwnd::from(hwnd)))
}

pub(crate) fn as_native_msg(msg: &Msg) -> *const MSG {
    msg as *const Msg as *const MSG
}

extern "system" fn default_wnd_proc(hwnd: Hwnd, msg: co::Wm, wparam: usize, lparam: isize) -> isize {
    unsafe { DefWindowProcW(HWND::from(hwnd), msg.raw(), WPARAM(wparam), LPARAM(lparam)).0 }
}

/// Window class registration options, `WNDCLASSEX`.
///
/// The default uses `DefWindowProc` as the window procedure and the
/// `COLOR_WINDOW` background.
#[derive(Debug, Clone)]
pub struct WndClassEx {
    pub style: co::Cs,
    pub wnd_proc: WndProc,
    pub cls_extra: i32,
    pub wnd_extra: i32,
    pub hinstance: Hinstance,
    pub hicon: Hicon,
    pub hcursor: Hcursor,
    pub hbr_background: Hbrush,
    pub menu_name: Option<String>,
    pub class_name: String,
    pub hicon_sm: Hicon,
}

impl Default for WndClassEx {
    fn default() -> Self {
        Self {
            style: co::Cs::empty(),
            wnd_proc: default_wnd_proc,
            cls_extra: 0,
            wnd_extra: 0,
            hinstance: Hinstance::NULL,
            hicon: Hicon::NULL,
            hcursor: Hcursor::NULL,
            hbr_background: Hbrush::from_sys_color(5),
            menu_name: None,
            class_name: String::new(),
            hicon_sm: Hicon::NULL,
        }
    }
}

/// `RegisterClassEx`. Returns the class atom.
pub fn register_class_ex(wcx: &WndClassEx) -> SysResult<u16> {
    let class_name = WString::from_str(&wcx.class_name);
    let menu_name = wcx.menu_name.as_deref().map(WString::from_str);

    let native = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: WNDCLASS_STYLES(wcx.style.bits()),
        // Same ABI: every argument is a transparent wrapper of the native type.
        lpfnWndProc: Some(unsafe {
            std::mem::transmute::<
                WndProc,
                unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> LRESULT,
            >(wcx.wnd_proc)
        }),
        cbClsExtra: wcx.cls_extra,
        cbWndExtra: wcx.wnd_extra,
        hInstance: wcx.hinstance.into(),
        hIcon: wcx.hicon.into(),
        hCursor: wcx.hcursor.into(),
        hbrBackground: wcx.hbr_background.into(),
        lpszMenuName: menu_name.as_ref().map_or(PCWSTR::null(), |m| PCWSTR(m.as_ptr())),
        lpszClassName: PCWSTR(class_name.as_ptr()),
        hIconSm: wcx.hicon_sm.into(),
    };

    match unsafe { RegisterClassExW(&native) } {
        0 => Err(get_last_error()),
        atom => Ok(atom),
    }
}

/// `UnregisterClass`.
pub fn unregister_class(class_name: &str, hinstance: Hinstance) -> SysResult<()> {
    let name = WString::from_str(class_name);
    unsafe {
        UnregisterClassW(
            PCWSTR(name.as_ptr()),
            windows::Win32::Foundation::HINSTANCE::from(hinstance),
        )?
    };
    Ok(())
}

/// `EnumWindows`: calls the closure for each top-level window until it
/// returns `false`.
///
/// # Example
/// ```no_run
/// let mut count = 0;
/// safewin::enum_windows(|_hwnd| {
///     count += 1;
///     true
/// })?;
/// # Ok::<_, safewin::co::SysError>(())
/// ```
pub fn enum_windows<F>(mut func: F) -> SysResult<()>
where
    F: FnMut(Hwnd) -> bool,
{
    enum_result(unsafe {
        EnumWindows(
            Some(enum_windows_proc::<F>),
            LPARAM(&mut func as *mut F as isize),
        )
    })
}

/// `GetMessage`. Returns `false` when `WM_QUIT` was retrieved.
pub fn get_message(
    msg: &mut Msg,
    hwnd: Option<Hwnd>,
    msg_filter_min: u32,
    msg_filter_max: u32,
) -> SysResult<bool> {
    let ret = unsafe {
        GetMessageW(
            msg as *mut Msg as *mut MSG,
            HWND::from(hwnd.unwrap_or_default()),
            msg_filter_min,
            msg_filter_max,
        )
    };
    match ret.0 {
        -1 => Err(get_last_error()),
        0 => Ok(false),
        _ => Ok(true),
    }
}

/// `PeekMessage`. Returns `true` if a message was available.
pub fn peek_message(
    msg: &mut Msg,
    hwnd: Option<Hwnd>,
    msg_filter_min: u32,
    msg_filter_max: u32,
    remove: co::Pm,
) -> bool {
    unsafe {
        PeekMessageW(
            msg as *mut Msg as *mut MSG,
            HWND::from(hwnd.unwrap_or_default()),
            msg_filter_min,
            msg_filter_max,
            PEEK_MESSAGE_REMOVE_TYPE(remove.bits()),
        )
    }
    .as_bool()
}

/// `TranslateMessage`. Returns `true` if a character message was posted.
pub fn translate_message(msg: &Msg) -> bool {
    unsafe { TranslateMessage(as_native_msg(msg)) }.as_bool()
}

/// `DispatchMessage`. Returns what the window procedure returned.
pub fn dispatch_message(msg: &Msg) -> isize {
    unsafe { DispatchMessageW(as_native_msg(msg)) }.0
}

/// `PostQuitMessage`, to the message queue of the calling thread. To stop a
/// loop from another thread use
/// [`post_quit_message_to_loop`](crate::post_quit_message_to_loop).
pub fn post_quit_message(exit_code: i32) {
    unsafe { PostQuitMessage(exit_code) }
}

/// `PostThreadMessage`.
///
/// Messages carrying pointers can't be posted: the memory would be gone
/// when the message is read.
pub fn post_thread_message<M: MsgSend>(thread_id: u32, mut msg: M) -> SysResult<()> {
    let WndMsg {
        msg_id,
        wparam,
        lparam,
    } = msg.as_generic_wm();
    unsafe { PostThreadMessageW(thread_id, msg_id.raw(), WPARAM(wparam), LPARAM(lparam))? };
    Ok(())
}

/// `WaitMessage`.
pub fn wait_message() -> SysResult<()> {
    unsafe { WaitMessage()? };
    Ok(())
}

/// `GetMessagePos`: cursor position, in screen coordinates, when the last
/// message was retrieved.
pub fn get_message_pos() -> Point {
    Point::from_lparam(unsafe { GetMessagePos() } as isize)
}

/// `InSendMessage`.
pub fn in_send_message() -> bool {
    unsafe { InSendMessage() }.as_bool()
}

/// `GetCursorPos`, in screen coordinates.
pub fn get_cursor_pos() -> SysResult<Point> {
    let mut pt = POINT::default();
    unsafe { GetCursorPos(&mut pt)? };
    Ok(Point::new(pt.x, pt.y))
}

/// `SetCursorPos`.
pub fn set_cursor_pos(x: i32, y: i32) -> SysResult<()> {
    unsafe { SetCursorPos(x, y)? };
    Ok(())
}

/// `GetSystemMetrics`.
pub fn get_system_metrics(index: co::Sm) -> i32 {
    unsafe { GetSystemMetrics(SYSTEM_METRICS_INDEX(index.raw())) }
}

/// `GetDoubleClickTime`, in milliseconds.
pub fn get_double_click_time() -> u32 {
    unsafe { GetDoubleClickTime() }
}

/// `GetAsyncKeyState`: tells whether the key is down right now.
pub fn get_async_key_state(vkey: co::Vk) -> bool {
    unsafe { GetAsyncKeyState(vkey.raw() as i32) } < 0
}

/// `ReleaseCapture`.
pub fn release_capture() -> SysResult<()> {
    unsafe { ReleaseCapture()? };
    Ok(())
}

/// `ShowCursor`. Returns the new display counter; the cursor is shown while
/// it's not negative.
pub fn show_cursor(show: bool) -> i32 {
    unsafe { ShowCursor(show) }
}

/// `SetProcessDPIAware`.
pub fn set_process_dpi_aware() -> SysResult<()> {
    bool_result(unsafe { SetProcessDPIAware() })
}

/// `LockSetForegroundWindow`, with `LSFW_LOCK` or `LSFW_UNLOCK`.
pub fn lock_set_foreground_window(lock: bool) -> SysResult<()> {
    let code = if lock { 1 } else { 2 };
    unsafe { LockSetForegroundWindow(FOREGROUND_WINDOW_LOCK_CODE(code))? };
    Ok(())
}

/// Clears the last error, for functions whose failure is only told apart by
/// it.
pub(crate) fn clear_last_error() {
    set_last_error(co::SysError::SUCCESS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wnd_class_defaults() {
        let wcx = WndClassEx::default();
        assert!(wcx.style.is_empty());
        assert!(wcx.hinstance.is_null());
        assert_eq!(wcx.hbr_background.as_isize(), 6);
        assert!(wcx.menu_name.is_none());
    }

    #[test]
    fn test_register_and_unregister_class() {
        let hinst = Hinstance::get_module_handle(None).unwrap();
        let wcx = WndClassEx {
            class_name: "safewin.test.register".to_owned(),
            hinstance: hinst,
            ..Default::default()
        };
        assert_ne!(register_class_ex(&wcx).unwrap(), 0);
        assert_eq!(
            register_class_ex(&wcx).unwrap_err(),
            co::SysError::CLASS_ALREADY_EXISTS
        );
        unregister_class(&wcx.class_name, hinst).unwrap();
    }

    #[test]
    fn test_enum_windows_stops_early() {
        let mut seen = 0;
        enum_windows(|_| {
            seen += 1;
            false
        })
        .unwrap();
        assert!(seen <= 1);
    }

    #[test]
    fn test_peek_on_empty_queue() {
        let mut msg = Msg::default();
        while peek_message(&mut msg, None, 0, 0, co::Pm::REMOVE) {}
        assert!(!peek_message(&mut msg, None, 0, 0, co::Pm::NOREMOVE));
    }

    #[test]
    fn test_post_thread_message_to_self() {
        let tid = crate::get_current_thread_id();
        post_thread_message(tid, WndMsg::new(co::Wm::app(1), 10, 20)).unwrap();

        let mut msg = Msg::default();
        assert!(peek_message(
            &mut msg,
            None,
            co::Wm::app(1).raw(),
            co::Wm::app(1).raw(),
            co::Pm::REMOVE
        ));
        assert_eq!(msg.message, co::Wm::app(1));
        assert_eq!((msg.wparam, msg.lparam), (10, 20));
    }

    #[test]
    fn test_system_metrics() {
        assert!(get_double_click_time() > 0);
        let _ = get_system_metrics(co::Sm::CXSCREEN);
        let _ = get_message_pos();
    }
}
