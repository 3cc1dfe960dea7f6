//! COM: GUIDs, the [`IUnknown`] hierarchy and apartment initialization.
//!
//! Interfaces own one reference each, so ordinary Rust ownership maps to
//! `AddRef` and `Release`:
//!
//! ```no_run
//! # #[cfg(windows)]
//! # fn main() -> Result<(), safewin::co::HResult> {
//! use safewin::{co, ole};
//! use safewin::prelude::*;
//!
//! let _com = ole::co_initialize_ex(co::CoInit::APARTMENTTHREADED)?;
//! let clsid: ole::Clsid = "{00021401-0000-0000-C000-000000000046}".parse().unwrap();
//! let unk: ole::IUnknown = ole::co_create_instance(&clsid, co::ClsCtx::INPROC_SERVER)?;
//! let persist = unk.query_interface::<ole::IPersist>()?; // AddRef
//! drop(unk); // Release
//! # Ok::<_, co::HResult>(())
//! # }
//! # #[cfg(not(windows))]
//! # fn main() {}
//! ```

#[cfg(windows)]
mod funcs;
mod guid;
mod ipersist;
mod iunknown;

#[cfg(windows)]
pub use funcs::*;
pub use guid::*;
pub use ipersist::*;
pub use iunknown::*;
