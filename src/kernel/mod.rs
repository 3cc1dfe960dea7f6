//! kernel32: words, strings, time, files, processes, threads and the OS
//! version.

mod file;
#[cfg(windows)]
mod funcs;
mod process;
mod time;
#[cfg(windows)]
mod version;
mod words;
mod wstring;

pub use file::*;
#[cfg(windows)]
pub use funcs::*;
pub use process::*;
pub use time::*;
#[cfg(windows)]
pub use version::*;
pub use words::*;
pub use wstring::*;
