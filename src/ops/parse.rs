//! Validated integer parsing and all-or-nothing bounded copy.

use crate::common::buf::ByteSink;
use crate::common::error::{BridgeError, BridgeResult};

/// Parse a decimal `i32`: optional sign, ASCII digits, nothing else.
///
/// Surrounding whitespace, empty input, and out-of-range values are rejected.
pub fn parse_int(input: &str) -> BridgeResult<i32> {
    input
        .parse::<i32>()
        .map_err(|_| BridgeError::ParseFailure {
            input: input.to_string(),
        })
}

/// Copy `src` plus a terminator into `dest`, or leave `dest` untouched.
pub fn copy_terminated(src: &str, dest: &mut ByteSink<'_>) -> BridgeResult<usize> {
    dest.write_terminated(src.as_bytes())
}
