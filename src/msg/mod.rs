//! Parameters of window messages.
//!
//! Each message is a struct that knows how to pack itself into the raw
//! `WPARAM`/`LPARAM` pair and, when it can be received, how to unpack itself
//! from one. [`Hwnd::send_message`](crate::Hwnd::send_message) takes any
//! [`MsgSend`] and returns its typed result.
//!
//! ```
//! use safewin::{co, msg::{wm, MsgSend, MsgSendRecv}, Point};
//!
//! let mut click = wm::LButtonDown {
//!     keys: co::Mk::CONTROL,
//!     coords: Point::new(10, -4),
//! };
//! let raw = click.as_generic_wm();
//! assert_eq!(raw.msg_id, co::Wm::LBUTTONDOWN);
//!
//! let back = unsafe { wm::LButtonDown::from_generic_wm(raw) };
//! assert_eq!(back.coords, Point::new(10, -4));
//! ```

pub mod wm;

use crate::co;

/// A message that can be sent or posted to a window.
pub trait MsgSend {
    /// The typed form of the value returned by the window procedure.
    type RetType;

    /// Converts the raw value returned by the window procedure.
    fn convert_ret(&self, v: isize) -> Self::RetType;

    /// Packs the message into its raw parameters.
    ///
    /// Messages carrying references pack their address, so the returned
    /// value must not outlive `self`.
    fn as_generic_wm(&mut self) -> WndMsg;
}

/// A message that can also be received by a window procedure.
pub trait MsgSendRecv: MsgSend {
    /// Unpacks the message from its raw parameters.
    ///
    /// # Safety
    /// The parameters must come from a real message of this type: pointers
    /// and handles inside them are dereferenced or trusted as they are.
    unsafe fn from_generic_wm(p: WndMsg) -> Self;
}

/// Raw message: identifier plus `WPARAM` and `LPARAM`.
///
/// Used for messages without a dedicated struct, such as custom
/// `WM_USER`/`WM_APP` ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WndMsg {
    pub msg_id: co::Wm,
    pub wparam: usize,
    pub lparam: isize,
}

impl WndMsg {
    pub const fn new(msg_id: co::Wm, wparam: usize, lparam: isize) -> Self {
        Self {
            msg_id,
            wparam,
            lparam,
        }
    }
}

impl MsgSend for WndMsg {
    type RetType = isize;

    fn convert_ret(&self, v: isize) -> Self::RetType {
        v
    }

    fn as_generic_wm(&mut self) -> WndMsg {
        *self
    }
}

impl MsgSendRecv for WndMsg {
    unsafe fn from_generic_wm(p: WndMsg) -> Self {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wnd_msg_is_identity() {
        let mut m = WndMsg::new(co::Wm::app(3), 7, -1);
        let raw = m.as_generic_wm();
        assert_eq!(raw, m);
        assert_eq!(m.convert_ret(-42), -42);
        assert_eq!(unsafe { WndMsg::from_generic_wm(raw) }, m);
        assert_eq!(raw.msg_id.to_string(), "WM_APP+3");
    }
}
