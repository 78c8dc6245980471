//! `#[repr(C)]` types that appear in exported signatures.

pub use crate::common::error::ErrorCode;
pub use crate::ops::geometry::Point;

use crate::common::error::BridgeResult;

/// Tagged outcome of a fallible floating-point operation.
///
/// `value` is meaningful only when `success` is true; on failure it is `0.0`
/// and `error_code` says why. C view:
/// `typedef struct { bool success; double value; int32_t error_code; } OperationResult;`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OperationResult {
    pub success: bool,
    pub value: f64,
    pub error_code: ErrorCode,
}

impl OperationResult {
    pub const fn ok(value: f64) -> Self {
        Self {
            success: true,
            value,
            error_code: ErrorCode::Success,
        }
    }

    pub const fn failed(code: ErrorCode) -> Self {
        Self {
            success: false,
            value: 0.0,
            error_code: code,
        }
    }
}

impl From<&BridgeResult<f64>> for OperationResult {
    fn from(res: &BridgeResult<f64>) -> Self {
        match res {
            Ok(v) => Self::ok(*v),
            Err(e) => Self::failed(e.code()),
        }
    }
}
