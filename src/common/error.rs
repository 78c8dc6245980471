//! Error handling primitives shared across the boundary layer.
//!
//! Safe code works with [`BridgeError`] and [`BridgeResult`]; the entry points in
//! `api::ffi` flatten those into the stable [`ErrorCode`] values a C caller sees.

use thiserror::Error;

/// Stable error codes that cross the FFI boundary.
///
/// Discriminants are part of the ABI and must never be renumbered.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorCode {
    /// The operation completed and any output was written.
    Success = 0,
    /// A required pointer argument was null.
    NullPointer = -1,
    /// Input text was not well-formed UTF-8.
    InvalidUtf8 = -2,
    /// The destination buffer cannot hold the result plus its terminator.
    BufferTooSmall = -3,
    /// Text did not contain a representable integer.
    ParseFailure = -4,
    /// The divisor was zero.
    DivisionByZero = -5,
    /// The operation has no defined result for an empty sequence.
    EmptyInput = -6,
    /// An element count does not describe an addressable buffer.
    InvalidLength = -7,
    /// An internal panic was contained before reaching the caller.
    Panic = -8,
}

impl ErrorCode {
    /// Every code, in discriminant order from `Success` downwards.
    pub const ALL: [ErrorCode; 9] = [
        ErrorCode::Success,
        ErrorCode::NullPointer,
        ErrorCode::InvalidUtf8,
        ErrorCode::BufferTooSmall,
        ErrorCode::ParseFailure,
        ErrorCode::DivisionByZero,
        ErrorCode::EmptyInput,
        ErrorCode::InvalidLength,
        ErrorCode::Panic,
    ];

    /// Recover a code from its raw discriminant.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|code| *code as i32 == raw)
    }

    /// Human readable description, null-terminated so it can be handed out as-is.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::Success => "success\0",
            ErrorCode::NullPointer => "null pointer argument\0",
            ErrorCode::InvalidUtf8 => "text is not valid UTF-8\0",
            ErrorCode::BufferTooSmall => "destination buffer too small\0",
            ErrorCode::ParseFailure => "text is not a valid 32-bit integer\0",
            ErrorCode::DivisionByZero => "division by zero\0",
            ErrorCode::EmptyInput => "empty input sequence\0",
            ErrorCode::InvalidLength => "element count exceeds addressable size\0",
            ErrorCode::Panic => "internal panic\0",
        }
    }
}

/// Canonical error type for the boundary layer.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BridgeError {
    #[error("null pointer passed for `{0}`")]
    NullPointer(&'static str),

    #[error("`{arg}` is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { arg: &'static str, valid_up_to: usize },

    #[error("buffer too small: need {required} bytes, have {available}")]
    BufferTooSmall { required: usize, available: usize },

    #[error("cannot parse {input:?} as a 32-bit integer")]
    ParseFailure { input: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("`{0}` is empty")]
    EmptyInput(&'static str),

    #[error("length {len} for `{arg}` exceeds the addressable size")]
    InvalidLength { arg: &'static str, len: usize },

    #[error("panic in `{op}`: {detail}")]
    Panic { op: &'static str, detail: String },
}

/// Result alias used throughout the crate.
pub type BridgeResult<T> = Result<T, BridgeError>;

impl BridgeError {
    /// The stable code this error is reported as across the boundary.
    pub fn code(&self) -> ErrorCode {
        match self {
            BridgeError::NullPointer(_) => ErrorCode::NullPointer,
            BridgeError::InvalidUtf8 { .. } => ErrorCode::InvalidUtf8,
            BridgeError::BufferTooSmall { .. } => ErrorCode::BufferTooSmall,
            BridgeError::ParseFailure { .. } => ErrorCode::ParseFailure,
            BridgeError::DivisionByZero => ErrorCode::DivisionByZero,
            BridgeError::EmptyInput(_) => ErrorCode::EmptyInput,
            BridgeError::InvalidLength { .. } => ErrorCode::InvalidLength,
            BridgeError::Panic { .. } => ErrorCode::Panic,
        }
    }
}

impl From<&BridgeError> for ErrorCode {
    fn from(err: &BridgeError) -> Self {
        err.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::NullPointer as i32, -1);
        assert_eq!(ErrorCode::InvalidUtf8 as i32, -2);
        assert_eq!(ErrorCode::BufferTooSmall as i32, -3);
        assert_eq!(ErrorCode::ParseFailure as i32, -4);
        assert_eq!(ErrorCode::DivisionByZero as i32, -5);
        assert_eq!(ErrorCode::EmptyInput as i32, -6);
        assert_eq!(ErrorCode::InvalidLength as i32, -7);
        assert_eq!(ErrorCode::Panic as i32, -8);
    }

    #[test]
    fn code_is_four_bytes() {
        assert_eq!(std::mem::size_of::<ErrorCode>(), 4);
    }

    #[test]
    fn from_raw_round_trips_every_code() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_raw(code as i32), Some(code));
        }
        assert_eq!(ErrorCode::from_raw(1), None);
        assert_eq!(ErrorCode::from_raw(-9), None);
    }

    #[test]
    fn messages_are_nul_terminated_once() {
        for code in ErrorCode::ALL {
            let msg = code.message();
            assert!(msg.ends_with('\0'), "{code:?}");
            assert_eq!(msg.matches('\0').count(), 1, "{code:?}");
        }
    }

    #[test]
    fn errors_map_to_codes() {
        assert_eq!(BridgeError::NullPointer("s").code(), ErrorCode::NullPointer);
        assert_eq!(
            BridgeError::BufferTooSmall {
                required: 17,
                available: 5
            }
            .code(),
            ErrorCode::BufferTooSmall
        );
        assert_eq!(
            ErrorCode::from(&BridgeError::ParseFailure { input: "x".into() }),
            ErrorCode::ParseFailure
        );
        assert_eq!(BridgeError::DivisionByZero.code(), ErrorCode::DivisionByZero);
    }

    #[test]
    fn display_carries_context() {
        let err = BridgeError::BufferTooSmall {
            required: 17,
            available: 5,
        };
        assert_eq!(err.to_string(), "buffer too small: need 17 bytes, have 5");
    }
}
