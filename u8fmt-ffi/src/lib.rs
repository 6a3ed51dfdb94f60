//! C ABI bridge for u8fmt-core.
//!
//! Exposes the two caller-sized entry points (`uint8_to_str`,
//! `format_uint8_array`) for C consumers that already size their buffers by
//! the documented bound, plus `u8fmt_*` variants that take the output length
//! and report failures as negative codes instead of overrunning.

use std::ffi::c_char;
use std::slice;

use u8fmt_core::consts::SCALAR_CAPACITY;
use u8fmt_core::{FormatError, FormatErrorKind};

// ---------------------------------------------------------------------------
// Error codes (negative = error, 0 = success, positive = bytes written)
// ---------------------------------------------------------------------------

pub const U8FMT_OK: i32 = 0;
pub const U8FMT_ERR_INSUFFICIENT_CAPACITY: i32 = -1;
pub const U8FMT_ERR_NULL_POINTER: i32 = -2;
pub const U8FMT_ERR_OUTPUT_TOO_LARGE: i32 = -3;

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

fn format_error_to_code(e: &FormatError) -> i32 {
    match e.kind {
        FormatErrorKind::InsufficientCapacity => U8FMT_ERR_INSUFFICIENT_CAPACITY,
    }
}

fn length_to_code(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(U8FMT_ERR_OUTPUT_TOO_LARGE)
}

/// Whether a string of `len` bytes can be reported as a positive `i32`.
fn output_fits(len: usize) -> bool {
    i32::try_from(len).is_ok()
}

/// Borrow the input array. A NULL pointer is accepted when `length == 0`.
///
/// # Safety
/// - If `length > 0`, `ptr` must point to `length` readable bytes.
unsafe fn values_slice<'a>(ptr: *const u8, length: usize) -> &'a [u8] {
    if length == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(ptr, length) }
    }
}

// ---------------------------------------------------------------------------
// Caller-sized entry points
// ---------------------------------------------------------------------------

/// Format a `u8` as decimal. No terminator is written.
///
/// # Safety
/// - `dst` must point to at least 3 writeable bytes.
///
/// Returns the number of bytes written (1, 2 or 3).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn uint8_to_str(value: u8, dst: *mut c_char) -> usize {
    let dst = unsafe { &mut *dst.cast::<[u8; SCALAR_CAPACITY]>() };
    u8fmt_core::format_scalar_into(value, dst)
}

/// Format an array of `u8` values as a comma-separated, NUL-terminated string.
///
/// # Safety
/// - `values` must point to `length` readable bytes (may be NULL if `length == 0`).
/// - `result` must point to at least `4 * length` writeable bytes, or 1 byte
///   when `length == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn format_uint8_array(
    values: *const u8,
    length: usize,
    result: *mut c_char,
) {
    let values = unsafe { values_slice(values, length) };
    let result = unsafe {
        slice::from_raw_parts_mut(result.cast::<u8>(), u8fmt_core::array_capacity(length))
    };
    let written = u8fmt_core::format_array(values, result);
    debug_assert!(written.is_ok(), "output slice is sized by array_capacity");
}

// ---------------------------------------------------------------------------
// Checked entry points
// ---------------------------------------------------------------------------

/// Format a `u8` as decimal into a buffer of `dst_len` bytes.
///
/// # Safety
/// - `dst` must point to a writeable buffer of at least `dst_len` bytes.
///
/// Returns bytes written on success, negative error code on failure. The
/// buffer is untouched on failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn u8fmt_format_scalar(value: u8, dst: *mut c_char, dst_len: usize) -> i32 {
    if dst.is_null() {
        return U8FMT_ERR_NULL_POINTER;
    }
    let dst = unsafe { slice::from_raw_parts_mut(dst.cast::<u8>(), dst_len) };

    match u8fmt_core::format_scalar(value, dst) {
        Ok(n) => length_to_code(n),
        Err(e) => format_error_to_code(&e),
    }
}

/// Format an array of `u8` values into a buffer of `result_len` bytes.
///
/// # Safety
/// - `values` must point to `length` readable bytes (may be NULL if `length == 0`).
/// - `result` must point to a writeable buffer of at least `result_len` bytes.
///
/// Returns the string length (terminator excluded) on success, negative error
/// code on failure. `result_len` must be at least `u8fmt_array_capacity(length)`
/// and the string must fit an `i32`; the buffer is untouched if either fails.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn u8fmt_format_array(
    values: *const u8,
    length: usize,
    result: *mut c_char,
    result_len: usize,
) -> i32 {
    if (values.is_null() && length != 0) || result.is_null() {
        return U8FMT_ERR_NULL_POINTER;
    }
    let values = unsafe { values_slice(values, length) };
    if !output_fits(u8fmt_core::exact_capacity(values) - 1) {
        return U8FMT_ERR_OUTPUT_TOO_LARGE;
    }
    let result = unsafe { slice::from_raw_parts_mut(result.cast::<u8>(), result_len) };

    match u8fmt_core::format_array(values, result) {
        Ok(n) => length_to_code(n),
        Err(e) => format_error_to_code(&e),
    }
}

/// Minimum `result_len` accepted by `u8fmt_format_array` for `length` values.
#[unsafe(no_mangle)]
pub extern "C" fn u8fmt_array_capacity(length: usize) -> usize {
    u8fmt_core::array_capacity(length)
}
