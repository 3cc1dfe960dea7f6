//! Window functions, as [`Hwnd`] methods.

use std::ffi::c_void;

use windows::core::PCWSTR;
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{ClientToScreen, InvalidateRect, ScreenToClient, UpdateWindow};
use windows::Win32::UI::Input::KeyboardAndMouse::{EnableWindow, SetFocus};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, EnumChildWindows, FindWindowW,
    GetClassNameW, GetClientRect, GetDesktopWindow, GetForegroundWindow, GetParent,
    GetWindowRect, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId, IsWindow,
    IsWindowVisible, KillTimer, MessageBoxW, PostMessageW, SendMessageW, SetTimer,
    SetWindowPos, SetWindowTextW, ShowWindow, HMENU, MESSAGEBOX_STYLE, SET_WINDOW_POS_FLAGS,
    SHOW_WINDOW_CMD, WINDOW_EX_STYLE, WINDOW_STYLE,
};

use crate::co;
use crate::error::SysResult;
use crate::kernel::{get_last_error, Hinstance, WString};
use crate::msg::MsgSend;
use crate::user::funcs::{bool_result, clear_last_error, enum_windows_proc, opt_hwnd};
use crate::user::handles::{Hmenu, Hwnd};
use crate::user::procs::TimerProc;
use crate::user::structs::{Point, Rect, Size};
use crate::Handle;

fn pcwstr_opt(s: Option<&WString>) -> PCWSTR {
    s.map_or(PCWSTR::null(), |w| PCWSTR(w.as_ptr()))
}

impl Hwnd {
    /// `GetDesktopWindow`.
    pub fn get_desktop_window() -> Hwnd {
        unsafe { GetDesktopWindow() }.into()
    }

    /// `GetForegroundWindow`.
    ///
    /// Returns `None` if no window has focus, e.g. while the focus is
    /// switching.
    ///
    /// # Example
    /// ```no_run
    /// use safewin::Hwnd;
    ///
    /// if let Some(hwnd) = Hwnd::get_foreground_window() {
    ///     println!("Foreground window: {}", hwnd.get_window_text()?);
    /// }
    /// # Ok::<_, safewin::co::SysError>(())
    /// ```
    pub fn get_foreground_window() -> Option<Hwnd> {
        Hwnd::from(unsafe { GetForegroundWindow() }).as_opt()
    }

    /// `FindWindow`. Either name may be omitted.
    pub fn find_window(class_name: Option<&str>, title: Option<&str>) -> SysResult<Option<Hwnd>> {
        let class_name = class_name.map(WString::from_str);
        let title = title.map(WString::from_str);
        opt_hwnd(unsafe { FindWindowW(pcwstr_opt(class_name.as_ref()), pcwstr_opt(title.as_ref())) })
    }

    /// `CreateWindowEx`.
    ///
    /// `create_params` is passed along in
    /// [`CreateStruct::create_params`](crate::CreateStruct::create_params)
    /// to `WM_NCCREATE` and `WM_CREATE`.
    #[allow(clippy::too_many_arguments)]
    pub fn create_window_ex(
        ex_style: co::WsEx,
        class_name: &str,
        title: Option<&str>,
        style: co::Ws,
        pos: Point,
        size: Size,
        parent: Option<Hwnd>,
        menu: Option<Hmenu>,
        hinstance: Hinstance,
        create_params: Option<*mut c_void>,
    ) -> SysResult<Hwnd> {
        let class_name = WString::from_str(class_name);
        let title = title.map(WString::from_str);
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE(ex_style.bits()),
                PCWSTR(class_name.as_ptr()),
                pcwstr_opt(title.as_ref()),
                WINDOW_STYLE(style.bits()),
                pos.x,
                pos.y,
                size.cx,
                size.cy,
                HWND::from(parent.unwrap_or_default()),
                HMENU::from(menu.unwrap_or_default()),
                HINSTANCE::from(hinstance),
                create_params.map(|p| p as *const c_void),
            )?
        };
        Ok(hwnd.into())
    }

    /// `DestroyWindow`.
    pub fn destroy_window(self) -> SysResult<()> {
        unsafe { DestroyWindow(HWND::from(self))? };
        Ok(())
    }

    /// `SendMessage`: sends the message and waits for the window procedure
    /// to process it.
    ///
    /// # Example
    /// ```no_run
    /// use safewin::{msg::wm, Hwnd};
    ///
    /// let hwnd = Hwnd::get_foreground_window().unwrap();
    /// let len = hwnd.send_message(wm::GetTextLength {});
    /// ```
    pub fn send_message<M: MsgSend>(self, mut msg: M) -> M::RetType {
        let wm = msg.as_generic_wm();
        let ret = unsafe {
            SendMessageW(
                HWND::from(self),
                wm.msg_id.raw(),
                WPARAM(wm.wparam),
                LPARAM(wm.lparam),
            )
        };
        msg.convert_ret(ret.0)
    }

    /// `PostMessage`: places the message in the queue and returns.
    ///
    /// Messages carrying pointers can't be posted: the memory would be gone
    /// when the message is read.
    pub fn post_message<M: MsgSend>(self, mut msg: M) -> SysResult<()> {
        let wm = msg.as_generic_wm();
        unsafe {
            PostMessageW(
                HWND::from(self),
                wm.msg_id.raw(),
                WPARAM(wm.wparam),
                LPARAM(wm.lparam),
            )?
        };
        Ok(())
    }

    /// `DefWindowProc`.
    pub fn def_window_proc<M: MsgSend>(self, mut msg: M) -> M::RetType {
        let wm = msg.as_generic_wm();
        let ret = unsafe {
            DefWindowProcW(
                HWND::from(self),
                wm.msg_id.raw(),
                WPARAM(wm.wparam),
                LPARAM(wm.lparam),
            )
        };
        msg.convert_ret(ret.0)
    }

    /// `MessageBox`. Returns the button that was clicked.
    pub fn message_box(self, text: &str, caption: &str, flags: co::Mb) -> SysResult<co::DlgId> {
        let text = WString::from_str(text);
        let caption = WString::from_str(caption);
        let ret = unsafe {
            MessageBoxW(
                HWND::from(self),
                PCWSTR(text.as_ptr()),
                PCWSTR(caption.as_ptr()),
                MESSAGEBOX_STYLE(flags.bits()),
            )
        };
        match ret.0 {
            0 => Err(get_last_error()),
            id => Ok(co::DlgId::from(id as u16)),
        }
    }

    /// `ShowWindow`. Returns `true` if the window was visible before.
    pub fn show_window(self, cmd: co::Sw) -> bool {
        unsafe { ShowWindow(HWND::from(self), SHOW_WINDOW_CMD(cmd.raw())) }.as_bool()
    }

    /// `UpdateWindow`.
    pub fn update_window(self) -> SysResult<()> {
        bool_result(unsafe { UpdateWindow(HWND::from(self)) })
    }

    /// `InvalidateRect`. `None` invalidates the whole client area.
    pub fn invalidate_rect(self, rc: Option<&Rect>, erase: bool) -> SysResult<()> {
        let prc = rc.map(|r| r as *const Rect as *const RECT);
        bool_result(unsafe { InvalidateRect(HWND::from(self), prc, erase) })
    }

    /// `IsWindow`.
    pub fn is_window(self) -> bool {
        unsafe { IsWindow(HWND::from(self)) }.as_bool()
    }

    /// `IsWindowVisible`.
    pub fn is_window_visible(self) -> bool {
        unsafe { IsWindowVisible(HWND::from(self)) }.as_bool()
    }

    /// `EnableWindow`. Returns `true` if the window was disabled before.
    pub fn enable_window(self, enable: bool) -> bool {
        unsafe { EnableWindow(HWND::from(self), enable) }.as_bool()
    }

    /// `SetFocus`. Returns the window that had the focus.
    pub fn set_focus(self) -> SysResult<Option<Hwnd>> {
        clear_last_error();
        opt_hwnd(unsafe { SetFocus(HWND::from(self)) })
    }

    /// `GetParent`. Returns `None` for top-level windows without an owner.
    pub fn get_parent(self) -> SysResult<Option<Hwnd>> {
        clear_last_error();
        opt_hwnd(unsafe { GetParent(HWND::from(self)) })
    }

    /// `GetClientRect`.
    pub fn get_client_rect(self) -> SysResult<Rect> {
        let mut rc = Rect::default();
        unsafe { GetClientRect(HWND::from(self), &mut rc as *mut Rect as *mut RECT)? };
        Ok(rc)
    }

    /// `GetWindowRect`, in screen coordinates.
    pub fn get_window_rect(self) -> SysResult<Rect> {
        let mut rc = Rect::default();
        unsafe { GetWindowRect(HWND::from(self), &mut rc as *mut Rect as *mut RECT)? };
        Ok(rc)
    }

    /// `GetWindowText`.
    ///
    /// An empty title is not an error; an invalid window is.
    pub fn get_window_text(self) -> SysResult<String> {
        clear_last_error();
        let len = unsafe { GetWindowTextLengthW(HWND::from(self)) };
        if len == 0 {
            return match get_last_error() {
                co::SysError::SUCCESS => Ok(String::new()),
                err => Err(err),
            };
        }

        let mut buf = WString::new_alloc_buf(len as usize + 1);
        let copied = unsafe { GetWindowTextW(HWND::from(self), buf.as_mut_slice()) };
        if copied == 0 {
            return match get_last_error() {
                co::SysError::SUCCESS => Ok(String::new()),
                err => Err(err),
            };
        }
        Ok(buf.to_string())
    }

    /// `SetWindowText`.
    pub fn set_window_text(self, text: &str) -> SysResult<()> {
        let text = WString::from_str(text);
        unsafe { SetWindowTextW(HWND::from(self), PCWSTR(text.as_ptr()))? };
        Ok(())
    }

    /// `GetClassName`.
    pub fn get_class_name(self) -> SysResult<String> {
        // Class names are limited to 256 chars.
        let mut buf = WString::new_alloc_buf(257);
        match unsafe { GetClassNameW(HWND::from(self), buf.as_mut_slice()) } {
            0 => Err(get_last_error()),
            _ => Ok(buf.to_string()),
        }
    }

    /// `GetWindowThreadProcessId`: `(thread_id, process_id)` of the window
    /// owner, both zero if the window is invalid.
    pub fn get_window_thread_process_id(self) -> (u32, u32) {
        let mut process_id = 0;
        let thread_id =
            unsafe { GetWindowThreadProcessId(HWND::from(self), Some(&mut process_id)) };
        (thread_id, process_id)
    }

    /// `SetWindowPos`. `insert_after` may be one of the special values like
    /// [`Hwnd::TOPMOST`].
    pub fn set_window_pos(
        self,
        insert_after: Hwnd,
        pos: Point,
        size: Size,
        flags: co::Swp,
    ) -> SysResult<()> {
        unsafe {
            SetWindowPos(
                HWND::from(self),
                HWND::from(insert_after),
                pos.x,
                pos.y,
                size.cx,
                size.cy,
                SET_WINDOW_POS_FLAGS(flags.bits()),
            )?
        };
        Ok(())
    }

    /// `ScreenToClient`.
    pub fn screen_to_client(self, pt: Point) -> SysResult<Point> {
        let mut native = POINT { x: pt.x, y: pt.y };
        bool_result(unsafe { ScreenToClient(HWND::from(self), &mut native) })?;
        Ok(Point::new(native.x, native.y))
    }

    /// `ClientToScreen`.
    pub fn client_to_screen(self, pt: Point) -> SysResult<Point> {
        let mut native = POINT { x: pt.x, y: pt.y };
        bool_result(unsafe { ClientToScreen(HWND::from(self), &mut native) })?;
        Ok(Point::new(native.x, native.y))
    }

    /// `SetTimer`. Without a callback, the window receives
    /// [`WM_TIMER`](crate::msg::wm::Timer). Returns the timer ID.
    pub fn set_timer(
        self,
        event_id: usize,
        elapse_ms: u32,
        timer_func: Option<TimerProc>,
    ) -> SysResult<usize> {
        // Same ABI: every argument is a transparent wrapper of the native type.
        let native = timer_func.map(|f| unsafe {
            std::mem::transmute::<TimerProc, unsafe extern "system" fn(HWND, u32, usize, u32)>(f)
        });
        match unsafe { SetTimer(HWND::from(self), event_id, elapse_ms, native) } {
            0 => Err(get_last_error()),
            id => Ok(id),
        }
    }

    /// `KillTimer`.
    pub fn kill_timer(self, event_id: usize) -> SysResult<()> {
        unsafe { KillTimer(HWND::from(self), event_id)? };
        Ok(())
    }

    /// `EnumChildWindows`: calls the closure for each descendant window
    /// until it returns `false`.
    pub fn enum_child_windows<F>(self, mut func: F)
    where
        F: FnMut(Hwnd) -> bool,
    {
        // The return value is not used.
        let _ = unsafe {
            EnumChildWindows(
                HWND::from(self),
                Some(enum_windows_proc::<F>),
                LPARAM(&mut func as *mut F as isize),
            )
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::funcs::{register_class_ex, unregister_class, WndClassEx};

    #[test]
    fn test_get_foreground_window_does_not_panic() {
        // Depends on the desktop session; headless runners have none.
        let _ = Hwnd::get_foreground_window();
    }

    #[test]
    fn test_get_window_text_fails_on_null_handle() {
        assert_eq!(
            Hwnd::NULL.get_window_text().unwrap_err(),
            co::SysError::INVALID_WINDOW_HANDLE
        );
    }

    #[test]
    fn test_get_window_thread_process_id_on_null_handle() {
        assert_eq!(Hwnd::NULL.get_window_thread_process_id(), (0, 0));
    }

    #[test]
    fn test_desktop_window() {
        let desktop = Hwnd::get_desktop_window();
        assert!(desktop.is_window());
        assert_eq!(desktop.get_parent().unwrap(), None);
    }

    #[test]
    fn test_message_only_window_lifecycle() {
        let hinst = Hinstance::get_module_handle(None).unwrap();
        let wcx = WndClassEx {
            class_name: "safewin.test.hwnd".to_owned(),
            hinstance: hinst,
            ..Default::default()
        };
        register_class_ex(&wcx).unwrap();

        let hwnd = Hwnd::create_window_ex(
            co::WsEx::empty(),
            &wcx.class_name,
            Some("first"),
            co::Ws::OVERLAPPED,
            Point::default(),
            Size::new(100, 50),
            Some(Hwnd::MESSAGE),
            None,
            hinst,
            None,
        )
        .unwrap();

        assert!(hwnd.is_window());
        assert!(!hwnd.is_window_visible());
        assert_eq!(hwnd.get_class_name().unwrap(), "safewin.test.hwnd");
        assert_eq!(hwnd.get_window_text().unwrap(), "first");

        hwnd.set_window_text("second").unwrap();
        assert_eq!(hwnd.send_message(crate::msg::wm::GetTextLength {}), 6);
        assert_eq!(hwnd.get_window_text().unwrap(), "second");

        let (tid, pid) = hwnd.get_window_thread_process_id();
        assert_eq!(tid, crate::get_current_thread_id());
        assert_eq!(pid, crate::get_current_process_id());

        hwnd.destroy_window().unwrap();
        assert!(!hwnd.is_window());
        unregister_class(&wcx.class_name, hinst).unwrap();
    }
}
