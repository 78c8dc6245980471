//! C-compatible entry points.
//!
//! Each function decodes its raw arguments through `common::buf` / `common::text`,
//! calls into `ops`, and encodes the outcome as a C return value. Failures are
//! recorded in the thread-local last-error slot (see [`cbridge_last_error`]).
//!
//! # Ownership
//!
//! * `const char *` parameters are **borrowed** for the duration of the call.
//!   They must be null-terminated and are never retained.
//! * `char *` returned by [`greet`] and [`to_uppercase`] is **transferred**: the
//!   caller owns it and must release it exactly once with [`release_string`].
//!   Releasing through any other allocator, releasing twice, or reading after
//!   release is undefined behaviour. Nothing tracks outstanding strings.
//! * `int *` + `size_t` pairs and `Point *` are **borrowed**; only the
//!   `[0, len)` range (or the single `Point`) is ever read or written.
//! * `const char *` returned by [`cbridge_last_error`] and
//!   [`cbridge_error_message`] is **borrowed** and must never be released.

use std::os::raw::{c_char, c_double, c_int};
use std::ptr;

use crate::common::buf::{ByteSink, IntView, IntViewMut};
use crate::common::config::BridgeCfg;
use crate::common::error::{BridgeError, BridgeResult};
use crate::common::{log, text};
use crate::ops;

use super::guard;
use super::types::{ErrorCode, OperationResult, Point};

/// ABI version for callers that want to verify the library they loaded.
pub const API_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Library metadata and diagnostics
// ---------------------------------------------------------------------------

#[no_mangle]
pub extern "C" fn cbridge_api_version() -> u32 {
    API_VERSION
}

/// Install a log subscriber configured from `CBRIDGE_LOG` / `CBRIDGE_LOG_FORMAT`.
///
/// Idempotent: when a subscriber is already installed it is kept and this
/// still returns `Success`.
#[no_mangle]
pub extern "C" fn cbridge_init_logging() -> ErrorCode {
    guard::contain("cbridge_init_logging", ErrorCode::Panic, || {
        let cfg = BridgeCfg::load();
        if !log::init(&cfg) {
            tracing::debug!("log subscriber already installed");
        }
        ErrorCode::Success
    })
}

/// Message describing this thread's most recent failure, or null if none.
///
/// Borrowed: valid until the next failing call on the same thread or
/// [`cbridge_clear_last_error`]. Do not release.
#[no_mangle]
pub extern "C" fn cbridge_last_error() -> *const c_char {
    guard::last_message_ptr()
}

/// Code of this thread's most recent failure, `Success` if none.
#[no_mangle]
pub extern "C" fn cbridge_last_error_code() -> ErrorCode {
    guard::last_code()
}

#[no_mangle]
pub extern "C" fn cbridge_clear_last_error() {
    guard::clear();
}

/// Static description of an error code. Unknown values are described as such.
///
/// Takes a plain `int32_t` because the caller may pass any integer.
#[no_mangle]
pub extern "C" fn cbridge_error_message(code: i32) -> *const c_char {
    let msg = match ErrorCode::from_raw(code) {
        Some(code) => code.message(),
        None => "unknown error code\0",
    };
    msg.as_ptr().cast()
}

// ---------------------------------------------------------------------------
// Scalar arithmetic
// ---------------------------------------------------------------------------

/// `a + b`, saturating at `INT32_MIN` / `INT32_MAX`.
#[no_mangle]
pub extern "C" fn add(a: c_int, b: c_int) -> c_int {
    ops::arith::add(a, b)
}

/// `a * b`, saturating at `INT32_MIN` / `INT32_MAX`.
#[no_mangle]
pub extern "C" fn multiply(a: c_int, b: c_int) -> c_int {
    ops::arith::multiply(a, b)
}

/// `a / b` as a tagged result. A zero divisor yields
/// `{ success = false, value = 0.0, error_code = DivisionByZero }`.
#[no_mangle]
pub extern "C" fn divide(a: c_double, b: c_double) -> OperationResult {
    guard::contain("divide", OperationResult::failed(ErrorCode::Panic), || {
        let res = ops::arith::divide(a, b);
        if let Err(err) = &res {
            guard::record("divide", err);
        }
        OperationResult::from(&res)
    })
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Build a greeting for `name`.
///
/// Returns transferred text, or null if `name` is null or not UTF-8.
///
/// # Safety
///
/// `name` must be null or a valid null-terminated string. The result must be
/// freed with [`release_string`].
#[no_mangle]
pub unsafe extern "C" fn greet(name: *const c_char) -> *mut c_char {
    guard::contain("greet", ptr::null_mut(), || {
        match unsafe { text::borrow_str(name, "name") } {
            Ok(name) => text::into_owned_raw(ops::text::greet(name)),
            Err(err) => guard::reject("greet", err, ptr::null_mut()),
        }
    })
}

/// Uppercase `input` using full Unicode case mapping.
///
/// # Safety
///
/// Same contract as [`greet`].
#[no_mangle]
pub unsafe extern "C" fn to_uppercase(input: *const c_char) -> *mut c_char {
    guard::contain("to_uppercase", ptr::null_mut(), || {
        match unsafe { text::borrow_str(input, "input") } {
            Ok(input) => text::into_owned_raw(ops::text::to_uppercase(input)),
            Err(err) => guard::reject("to_uppercase", err, ptr::null_mut()),
        }
    })
}

/// Number of characters (Unicode scalar values) in `input`; `-1` on null or
/// malformed input. Does not allocate.
///
/// # Safety
///
/// `input` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn string_length(input: *const c_char) -> c_int {
    guard::contain("string_length", -1, || {
        match unsafe { text::borrow_str(input, "input") } {
            Ok(input) => ops::text::char_count(input),
            Err(err) => guard::reject("string_length", err, -1),
        }
    })
}

/// Release text returned by [`greet`] or [`to_uppercase`]. Null is a no-op.
///
/// # Safety
///
/// `s` must be null or a pointer obtained from this library that has not been
/// released yet. Double release or foreign pointers are undefined behaviour.
#[no_mangle]
pub unsafe extern "C" fn release_string(s: *mut c_char) {
    unsafe { text::release_owned(s) }
}

// ---------------------------------------------------------------------------
// Integer sequences
// ---------------------------------------------------------------------------

/// Sum of `arr[0..len)`, computed exactly and then saturated to `int32_t`.
///
/// Returns `0` (and records the error) when `arr` is null with `len > 0`.
///
/// # Safety
///
/// `arr` must point to at least `len` readable `int`s, or be null with `len == 0`.
#[no_mangle]
pub unsafe extern "C" fn sum_array(arr: *const c_int, len: usize) -> c_int {
    guard::contain("sum_array", 0, || {
        match unsafe { IntView::from_raw(arr, len, "arr") } {
            Ok(view) => ops::array::sum(view.as_slice()),
            Err(err) => guard::reject("sum_array", err, 0),
        }
    })
}

/// Largest element of `arr[0..len)`, or `INT32_MIN` when the sequence is empty
/// or invalid. Use [`max_array_checked`] to tell the sentinel from real data.
///
/// # Safety
///
/// Same contract as [`sum_array`].
#[no_mangle]
pub unsafe extern "C" fn max_array(arr: *const c_int, len: usize) -> c_int {
    guard::contain("max_array", c_int::MIN, || {
        let res = unsafe { IntView::from_raw(arr, len, "arr") }
            .and_then(|view| ops::array::max(view.as_slice()));
        match res {
            Ok(max) => max,
            Err(err) => guard::reject("max_array", err, c_int::MIN),
        }
    })
}

/// Largest element written through `out`; `EmptyInput` for an empty sequence.
/// `*out` is written only on `Success`.
///
/// # Safety
///
/// Same contract as [`sum_array`]; `out` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn max_array_checked(
    arr: *const c_int,
    len: usize,
    out: *mut c_int,
) -> ErrorCode {
    guard::contain("max_array_checked", ErrorCode::Panic, || {
        if out.is_null() {
            return guard::reject(
                "max_array_checked",
                BridgeError::NullPointer("out"),
                ErrorCode::NullPointer,
            );
        }
        let res = unsafe { IntView::from_raw(arr, len, "arr") }
            .and_then(|view| ops::array::max(view.as_slice()));
        match res {
            Ok(max) => {
                unsafe { out.write(max) };
                ErrorCode::Success
            }
            Err(err) => {
                let code = err.code();
                guard::reject("max_array_checked", err, code)
            }
        }
    })
}

/// Sort `arr[0..len)` ascending in place. Equal elements keep their order.
/// Null with `len > 0` is a recorded no-op.
///
/// # Safety
///
/// `arr` must point to at least `len` writable `int`s not aliased elsewhere
/// during the call, or be null with `len == 0`.
#[no_mangle]
pub unsafe extern "C" fn sort_array(arr: *mut c_int, len: usize) {
    guard::contain("sort_array", (), || {
        match unsafe { IntViewMut::from_raw(arr, len, "arr") } {
            Ok(mut view) => ops::array::sort(view.as_mut_slice()),
            Err(err) => guard::reject("sort_array", err, ()),
        }
    })
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

#[no_mangle]
pub extern "C" fn point_new(x: c_double, y: c_double) -> Point {
    Point::new(x, y)
}

#[no_mangle]
pub extern "C" fn point_distance(p1: Point, p2: Point) -> c_double {
    p1.distance(p2)
}

#[no_mangle]
pub extern "C" fn point_midpoint(p1: Point, p2: Point) -> Point {
    p1.midpoint(p2)
}

/// Move `*point` by `(dx, dy)` in place. Null is a recorded no-op.
///
/// # Safety
///
/// `point` must be null or a valid, aligned, exclusively borrowed `Point`.
/// It is not retained after return.
#[no_mangle]
pub unsafe extern "C" fn point_translate(point: *mut Point, dx: c_double, dy: c_double) {
    guard::contain("point_translate", (), || match unsafe { point.as_mut() } {
        Some(point) => point.translate(dx, dy),
        None => guard::reject("point_translate", BridgeError::NullPointer("point"), ()),
    })
}

// ---------------------------------------------------------------------------
// Validated parsing and bounded copy
// ---------------------------------------------------------------------------

/// Parse `input` as a decimal `int32_t` into `*output`.
///
/// `*output` is written only when `Success` is returned.
///
/// # Safety
///
/// `input` must be null or a valid null-terminated string; `output` must be
/// null or writable.
#[no_mangle]
pub unsafe extern "C" fn parse_int(input: *const c_char, output: *mut c_int) -> ErrorCode {
    guard::contain("parse_int", ErrorCode::Panic, || {
        if output.is_null() {
            return guard::reject(
                "parse_int",
                BridgeError::NullPointer("output"),
                ErrorCode::NullPointer,
            );
        }
        let res = unsafe { text::borrow_str(input, "input") }.and_then(ops::parse::parse_int);
        match res {
            Ok(value) => {
                unsafe { output.write(value) };
                ErrorCode::Success
            }
            Err(err) => {
                let code = err.code();
                guard::reject("parse_int", err, code)
            }
        }
    })
}

/// Copy `src` and its terminator into `dest[0..dest_len)`.
///
/// All or nothing: on any failure `dest` is left exactly as it was. Fails with
/// `BufferTooSmall` when `strlen(src) + 1 > dest_len`.
///
/// Checks run in a fixed order: null `src`, null `dest`, zero `dest_len`, then
/// UTF-8 decoding of `src` and the capacity check.
///
/// # Safety
///
/// `src` must be null or a valid null-terminated string; `dest` must be null or
/// writable for `dest_len` bytes; the two must not overlap.
#[no_mangle]
pub unsafe extern "C" fn copy_string(
    src: *const c_char,
    dest: *mut c_char,
    dest_len: usize,
) -> ErrorCode {
    guard::contain("copy_string", ErrorCode::Panic, || {
        let res = (|| -> BridgeResult<usize> {
            if src.is_null() {
                return Err(BridgeError::NullPointer("src"));
            }
            let mut sink = unsafe { ByteSink::from_raw(dest, dest_len, "dest") }?;
            sink.ensure_room()?;
            let src = unsafe { text::borrow_str(src, "src") }?;
            ops::parse::copy_terminated(src, &mut sink)
        })();
        match res {
            Ok(_) => ErrorCode::Success,
            Err(err) => {
                let code = err.code();
                guard::reject("copy_string", err, code)
            }
        }
    })
}
