//! Callback signatures called by the system.

use crate::co;
use crate::user::handles::Hwnd;

/// Window procedure, `WNDPROC`.
pub type WndProc = extern "system" fn(Hwnd, co::Wm, usize, isize) -> isize;

/// Timer callback, `TIMERPROC`: window, `WM_TIMER`, timer ID and tick count.
pub type TimerProc = extern "system" fn(Hwnd, co::Wm, usize, u32);

/// Hook procedure, `HOOKPROC`: hook code, `wParam` and `lParam`.
pub type HookProc = extern "system" fn(i32, usize, isize) -> isize;
