//! Shared plumbing for the boundary: errors, configuration, logging, and the
//! translation of raw buffers and text into safe Rust values.
pub mod buf;
pub mod config;
pub mod error;
pub mod log;
pub mod text;

pub use error::{BridgeError, BridgeResult, ErrorCode};
