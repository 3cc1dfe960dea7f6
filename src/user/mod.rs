//! user32: windows, menus, messages and the types they carry.

mod enums;
#[cfg(windows)]
mod funcs;
mod handles;
#[cfg(windows)]
mod hdrop;
#[cfg(windows)]
mod hmenu;
#[cfg(windows)]
mod hwnd;
mod procs;
mod structs;

pub use enums::*;
#[cfg(windows)]
pub use funcs::*;
pub use handles::*;
pub use procs::*;
pub use structs::*;
