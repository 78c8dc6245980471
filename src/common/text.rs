//! Text crossing the boundary in both directions.
//!
//! Inbound text is *borrowed*: a null-terminated byte sequence owned by the caller
//! that is decoded in place and never retained. Outbound text is *transferred*:
//! a `CString` leaked to the caller that must come back through [`release_owned`].

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use super::error::{BridgeError, BridgeResult};

/// Borrow caller-owned text as `&str` after null and UTF-8 checks.
///
/// # Safety
///
/// When non-null, `ptr` must point to a null-terminated sequence that stays
/// valid and unmodified for `'a`.
pub unsafe fn borrow_str<'a>(ptr: *const c_char, arg: &'static str) -> BridgeResult<&'a str> {
    let bytes = unsafe { borrow_bytes(ptr, arg) }?;
    std::str::from_utf8(bytes).map_err(|e| BridgeError::InvalidUtf8 {
        arg,
        valid_up_to: e.valid_up_to(),
    })
}

/// Borrow caller-owned text as raw bytes, without the terminator.
///
/// # Safety
///
/// Same contract as [`borrow_str`].
pub unsafe fn borrow_bytes<'a>(ptr: *const c_char, arg: &'static str) -> BridgeResult<&'a [u8]> {
    if ptr.is_null() {
        return Err(BridgeError::NullPointer(arg));
    }
    Ok(unsafe { CStr::from_ptr(ptr) }.to_bytes())
}

/// Hand a string to the caller. Returns null when it cannot be represented as
/// C text (interior NUL), so no partially built buffer ever escapes.
pub fn into_owned_raw(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Reclaim and free text previously produced by [`into_owned_raw`].
///
/// # Safety
///
/// `ptr` must be null or a pointer returned by [`into_owned_raw`] that has not
/// been released yet. Anything else is undefined behaviour: there is no runtime
/// tracking of outstanding allocations.
pub unsafe fn release_owned(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr) });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrows_valid_text() {
        let src = CString::new("héllo").unwrap();
        let s = unsafe { borrow_str(src.as_ptr(), "input") }.unwrap();
        assert_eq!(s, "héllo");
    }

    #[test]
    fn null_is_an_error() {
        let err = unsafe { borrow_str(ptr::null(), "input") }.unwrap_err();
        assert_eq!(err, BridgeError::NullPointer("input"));
    }

    #[test]
    fn malformed_utf8_reports_offset() {
        let raw = b"ab\xFFcd\0";
        let err = unsafe { borrow_str(raw.as_ptr().cast(), "input") }.unwrap_err();
        assert_eq!(
            err,
            BridgeError::InvalidUtf8 {
                arg: "input",
                valid_up_to: 2
            }
        );
    }

    #[test]
    fn owned_round_trip() {
        let raw = into_owned_raw("transfer".to_string());
        assert!(!raw.is_null());
        assert_eq!(unsafe { CStr::from_ptr(raw) }.to_str().unwrap(), "transfer");
        unsafe { release_owned(raw) };
    }

    #[test]
    fn interior_nul_yields_null() {
        assert!(into_owned_raw("a\0b".to_string()).is_null());
    }

    #[test]
    fn releasing_null_is_a_no_op() {
        unsafe { release_owned(ptr::null_mut()) };
    }
}
