#![warn(missing_docs)]
//! Library behind the `wasmedge-version` binary.
//!
//! Reports the WasmEdge C API version this build was made against, as plain
//! text, JSON or YAML:
//!
//! ```bash
//! $ wasmedge-version
//! 0.11.2
//! $ wasmedge-version plugin-api
//! 2
//! $ wasmedge-version full --format json
//! {"major":0,"minor":11,"patch":2,"version":"0.11.2","plugin_api":2}
//! ```

mod cli;
#[allow(missing_docs)]
pub mod error;
pub mod trace;

pub use cli::{Field, Format, WasmEdgeVersion};
