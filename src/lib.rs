//! Safe, typed wrappers over the Win32 and COM API.
//!
//! Native constants are typed per family in [`co`], handles are distinct
//! types with their functions as methods, and fallible calls return
//! [`SysResult`] or [`HrResult`] instead of sentinel values.
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn main() -> Result<(), safewin::co::SysError> {
//! use safewin::{co, Hwnd};
//!
//! if let Some(hwnd) = Hwnd::get_foreground_window() {
//!     println!("{}", hwnd.get_window_text()?);
//!     hwnd.show_window(co::Sw::MINIMIZE);
//! }
//! # Ok::<_, co::SysError>(())
//! # }
//! # #[cfg(not(windows))]
//! # fn main() {}
//! ```
//!
//! The pure parts of the crate, like word packing, strings, GUIDs, INI
//! files and message parameters, also build and work outside Windows; the
//! functions calling into the system are only compiled on Windows.
//!
//! Window messages live in [`msg`], each as a struct implementing
//! [`MsgSend`](msg::MsgSend):
//!
//! ```no_run
//! use safewin::{msg::wm, Hwnd};
//!
//! # #[cfg(windows)]
//! fn close(hwnd: Hwnd) {
//!     hwnd.send_message(wm::Close {});
//! }
//! ```

#[macro_use]
mod macros;

mod advapi;
mod error;
mod handles;
mod kernel;
mod user;

#[cfg(windows)]
mod hooks;
#[cfg(windows)]
mod msg_loop;

pub mod co;
pub mod ini;
pub mod msg;
pub mod ole;
pub mod path;

pub use advapi::*;
pub use error::*;
pub use handles::*;
#[cfg(windows)]
pub use hooks::*;
pub use kernel::*;
#[cfg(windows)]
pub use msg_loop::*;
pub use user::*;

/// The traits needed to call the methods of handles, messages and COM
/// interfaces.
pub mod prelude {
    pub use crate::handles::Handle;
    pub use crate::msg::{MsgSend, MsgSendRecv};
    pub use crate::ole::{ComInterface, OleIPersist, OleIUnknown};
}
