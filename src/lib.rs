// lib.rs - C-ABI boundary layer
#![warn(unsafe_op_in_unsafe_fn)]

pub mod api;
pub mod common;
pub mod ops;

pub use api::ffi::*;
pub use api::{ErrorCode, OperationResult, Point};
pub use common::{BridgeError, BridgeResult};
