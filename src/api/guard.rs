//! Panic containment and the per-thread last-error slot.
//!
//! Every entry point that can fail routes its failure through [`reject`] so the
//! caller can ask what went wrong via `cbridge_last_error*`. The slot is
//! thread-local, so concurrent callers never observe each other's failures.

use std::any::Any;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use crate::common::error::{BridgeError, ErrorCode};

struct LastError {
    code: ErrorCode,
    message: CString,
}

thread_local! {
    static LAST_ERROR: RefCell<Option<LastError>> = const { RefCell::new(None) };
}

/// Store `err` as this thread's last error.
pub fn record(op: &'static str, err: &BridgeError) {
    let code = err.code();
    tracing::debug!(op, code = code as i32, error = %err, "call rejected");
    let message = CString::new(err.to_string())
        .unwrap_or_else(|_| CString::from(c"error message contained a nul byte"));
    LAST_ERROR.with(|cell| *cell.borrow_mut() = Some(LastError { code, message }));
}

/// Record `err` and hand back the operation's documented failure value.
pub fn reject<T>(op: &'static str, err: BridgeError, fallback: T) -> T {
    record(op, &err);
    fallback
}

pub fn clear() {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = None);
}

/// Code of this thread's last recorded failure, `Success` if there is none.
pub fn last_code() -> ErrorCode {
    LAST_ERROR.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(ErrorCode::Success, |last| last.code)
    })
}

/// Borrowed pointer to this thread's last message, or null.
///
/// The pointer stays valid until the next [`record`] or [`clear`] on this thread.
pub fn last_message_ptr() -> *const c_char {
    LAST_ERROR.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(ptr::null(), |last| last.message.as_ptr())
    })
}

/// Owned copy of this thread's last message.
#[cfg(test)]
fn last_message() -> Option<String> {
    LAST_ERROR.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|last| last.message.to_string_lossy().into_owned())
    })
}

/// Run `body`, converting a panic into `fallback` plus a recorded `Panic` error.
pub fn contain<T, F>(op: &'static str, fallback: T, body: F) -> T
where
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => value,
        Err(payload) => {
            let detail = panic_detail(payload.as_ref());
            tracing::error!(op, %detail, "panic contained at boundary");
            reject(op, BridgeError::Panic { op, detail }, fallback)
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
