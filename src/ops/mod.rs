//! Safe implementations of every boundary operation.
//!
//! Nothing in here sees a raw pointer; `api::ffi` translates arguments before
//! calling in and translates results on the way out.

pub mod arith;
pub mod array;
pub mod geometry;
pub mod parse;
pub mod text;
