//! Bounds-checked views over caller-owned buffers.
//!
//! Raw `(pointer, length)` pairs are turned into slices here and nowhere else.
//! After construction every access is ordinary range-checked slice access.

use std::mem::{self, MaybeUninit};
use std::os::raw::{c_char, c_int};
use std::slice;

use super::error::{BridgeError, BridgeResult};

/// Validate `len` elements of `T` as an addressable allocation size.
fn checked_len<T>(len: usize, arg: &'static str) -> BridgeResult<usize> {
    len.checked_mul(mem::size_of::<T>())
        .filter(|bytes| *bytes <= isize::MAX as usize)
        .map(|_| len)
        .ok_or(BridgeError::InvalidLength { arg, len })
}

/// Read-only view of a caller-owned `int` sequence.
#[derive(Copy, Clone, Debug)]
pub struct IntView<'a> {
    items: &'a [c_int],
}

impl<'a> IntView<'a> {
    /// Borrow `len` elements starting at `ptr`.
    ///
    /// A null pointer is accepted only together with `len == 0`.
    ///
    /// # Safety
    ///
    /// When `ptr` is non-null it must be aligned and point to `len` initialised
    /// elements that stay valid and unmodified for `'a`.
    pub unsafe fn from_raw(ptr: *const c_int, len: usize, arg: &'static str) -> BridgeResult<Self> {
        let len = checked_len::<c_int>(len, arg)?;
        if len == 0 {
            return Ok(Self { items: &[] });
        }
        if ptr.is_null() {
            return Err(BridgeError::NullPointer(arg));
        }
        Ok(Self {
            items: unsafe { slice::from_raw_parts(ptr, len) },
        })
    }

    pub fn as_slice(&self) -> &'a [c_int] {
        self.items
    }
}

/// Mutable view of a caller-owned `int` sequence. Never grows or shrinks.
#[derive(Debug)]
pub struct IntViewMut<'a> {
    items: &'a mut [c_int],
}

impl<'a> IntViewMut<'a> {
    /// Borrow `len` elements starting at `ptr` for in-place mutation.
    ///
    /// # Safety
    ///
    /// Same as [`IntView::from_raw`], and no other reference to the buffer may be
    /// used for the duration of `'a`.
    pub unsafe fn from_raw(ptr: *mut c_int, len: usize, arg: &'static str) -> BridgeResult<Self> {
        let len = checked_len::<c_int>(len, arg)?;
        if len == 0 {
            return Ok(Self { items: &mut [] });
        }
        if ptr.is_null() {
            return Err(BridgeError::NullPointer(arg));
        }
        Ok(Self {
            items: unsafe { slice::from_raw_parts_mut(ptr, len) },
        })
    }

    pub fn as_mut_slice(&mut self) -> &mut [c_int] {
        self.items
    }
}

/// Caller-provided fixed-capacity byte destination for null-terminated text.
///
/// The bytes are treated as possibly uninitialised (`char buf[50];` in C) and
/// are only ever written, never read.
#[derive(Debug)]
pub struct ByteSink<'a> {
    dest: &'a mut [MaybeUninit<u8>],
}

impl<'a> ByteSink<'a> {
    /// Wrap `capacity` bytes starting at `dest`.
    ///
    /// # Safety
    ///
    /// `dest` must be writable for `capacity` bytes for `'a` and must not overlap
    /// any text borrowed during the same call.
    pub unsafe fn from_raw(
        dest: *mut c_char,
        capacity: usize,
        arg: &'static str,
    ) -> BridgeResult<Self> {
        if dest.is_null() {
            return Err(BridgeError::NullPointer(arg));
        }
        let capacity = checked_len::<u8>(capacity, arg)?;
        let dest: &mut [MaybeUninit<u8>] = if capacity == 0 {
            &mut []
        } else {
            unsafe { slice::from_raw_parts_mut(dest.cast::<MaybeUninit<u8>>(), capacity) }
        };
        Ok(Self { dest })
    }

    /// Wrap an already-initialised slice, used by Rust callers and tests.
    pub fn new(dest: &'a mut [u8]) -> Self {
        let len = dest.len();
        // `u8` and `MaybeUninit<u8>` share layout; only initialised bytes are written.
        let dest =
            unsafe { slice::from_raw_parts_mut(dest.as_mut_ptr().cast::<MaybeUninit<u8>>(), len) };
        Self { dest }
    }

    pub fn capacity(&self) -> usize {
        self.dest.len()
    }

    /// Reject a destination that cannot hold even the terminator.
    pub fn ensure_room(&self) -> BridgeResult<()> {
        if self.dest.is_empty() {
            return Err(BridgeError::BufferTooSmall {
                required: 1,
                available: 0,
            });
        }
        Ok(())
    }

    /// Write `bytes` followed by a NUL terminator, or nothing at all.
    ///
    /// Fails with `BufferTooSmall` when `bytes.len() + 1` exceeds the capacity;
    /// the destination is left untouched in that case.
    pub fn write_terminated(&mut self, bytes: &[u8]) -> BridgeResult<usize> {
        let required = bytes.len().saturating_add(1);
        if required > self.capacity() {
            return Err(BridgeError::BufferTooSmall {
                required,
                available: self.capacity(),
            });
        }
        let (body, rest) = self.dest.split_at_mut(bytes.len());
        for (slot, &byte) in body.iter_mut().zip(bytes) {
            slot.write(byte);
        }
        rest[0].write(0);
        Ok(bytes.len())
    }
}
