//! Native constants, each family as its own type.
//!
//! Ordinary constants are transparent newtypes over their integer, with the
//! native names as associated constants:
//!
//! ```
//! use safewin::co;
//!
//! let msg = co::Wm::LBUTTONDOWN;
//! assert_eq!(msg.raw(), 0x0201);
//! assert_eq!(msg.to_string(), "WM_LBUTTONDOWN");
//! ```
//!
//! Flag families are [`bitflags`] types and combine with `|`.

pub mod advapi;
pub mod errors;
pub mod flags;
pub mod user;
pub mod wm;

pub use advapi::*;
pub use errors::*;
pub use flags::*;
pub use user::*;
pub use wm::*;
