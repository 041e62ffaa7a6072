//! Version information of the WasmEdge C API.
//!
//! The release triple and the plugin API version are declared once, in
//! [`declare_version!`]. The version string is generated from the triple, so
//! it always reads `"{major}.{minor}.{patch}"`:
//!
//! ```
//! use wasmedge_version::*;
//!
//! assert_eq!(VERSION_STRING, format!("{}.{}.{}", VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH));
//! assert_eq!(VersionInfo::current().to_string(), VERSION_STRING);
//! ```
//!
//! [`PLUGIN_API_VERSION`] tracks the binary contract between the runtime and
//! the plugins it loads. It is bumped on its own schedule, not with releases.
//!
//! All values are `const`. Rebinding them does not compile:
//!
//! ```compile_fail
//! wasmedge_version::VERSION_MAJOR = 1;
//! ```
//!
//! With the `capi` feature (on by default) the crate also exports the C API
//! accessors (`WasmEdge_VersionGet` and friends) as unmangled symbols, see
//! [`capi`].

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;
mod info;

#[cfg(feature = "capi")]
#[cfg_attr(docsrs, doc(cfg(feature = "capi")))]
pub mod capi;

pub use info::VersionInfo;

declare_version! {
    major: 0,
    minor: 11,
    patch: 2,
    plugin_api: 2,
}
