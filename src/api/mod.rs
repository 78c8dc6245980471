//! Public entry points for foreign callers.
//!
//! `ffi` holds the exported functions, `types` the `#[repr(C)]` values they
//! exchange, `guard` the panic and last-error handling they share.

// TODO: generate include/cbridge.h with cbindgen from a build script so the
// header cannot drift from these declarations.
pub mod ffi;
pub mod guard;
pub mod types;

pub use types::{ErrorCode, OperationResult, Point};
