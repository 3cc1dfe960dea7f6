//! advapi32: the registry.

mod hkey;
mod registry_value;

pub use hkey::*;
pub use registry_value::*;
