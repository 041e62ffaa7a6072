//! The version accessors of the WasmEdge C API, exported under their C names.
//!
//! ```c
//! const char *WasmEdge_VersionGet(void);
//! uint32_t WasmEdge_VersionGetMajor(void);
//! uint32_t WasmEdge_VersionGetMinor(void);
//! uint32_t WasmEdge_VersionGetPatch(void);
//! extern const uint32_t WasmEdge_Plugin_CurrentAPIVersion;
//! ```
#![allow(non_snake_case, non_upper_case_globals)]

use std::os::raw::c_char;

use crate::{PLUGIN_API_VERSION, VERSION_CSTR, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH};

/// Plugin API version, for plugins to stamp into their descriptor.
#[no_mangle]
pub static WasmEdge_Plugin_CurrentAPIVersion: u32 = PLUGIN_API_VERSION;

/// The version string. Points at static memory, the caller must not free it.
#[no_mangle]
pub extern "C" fn WasmEdge_VersionGet() -> *const c_char {
    VERSION_CSTR.as_ptr()
}

/// Major release number.
#[no_mangle]
pub extern "C" fn WasmEdge_VersionGetMajor() -> u32 {
    VERSION_MAJOR
}

/// Minor release number.
#[no_mangle]
pub extern "C" fn WasmEdge_VersionGetMinor() -> u32 {
    VERSION_MINOR
}

/// Patch release number.
#[no_mangle]
pub extern "C" fn WasmEdge_VersionGetPatch() -> u32 {
    VERSION_PATCH
}
