use crate::consts::SCALAR_CAPACITY;
use crate::error::FormatError;
use crate::validate::check_capacity;

/// Number of decimal digits in `value`: 1, 2 or 3.
#[must_use]
pub const fn digit_count(value: u8) -> usize {
    if value >= 100 {
        3
    } else if value >= 10 {
        2
    } else {
        1
    }
}

/// Format a `u8` as decimal into a fixed 3-byte buffer.
///
/// Digits are written most-significant first starting at offset 0, without
/// leading zeros and without a terminator. Returns the number of bytes
/// written; bytes past that count are left as they were.
pub fn format_scalar_into(value: u8, dst: &mut [u8; SCALAR_CAPACITY]) -> usize {
    write_digits(value, dst)
}

/// Format a `u8` as decimal into a byte buffer.
/// Returns the number of bytes written, or an error if `dst` cannot hold
/// every digit. Any buffer of at least [`SCALAR_CAPACITY`] bytes succeeds.
pub fn format_scalar(value: u8, dst: &mut [u8]) -> Result<usize, FormatError> {
    check_capacity(dst, digit_count(value))?;
    Ok(write_digits(value, dst))
}

/// Caller guarantees `out.len() >= digit_count(value)`.
pub(crate) fn write_digits(value: u8, out: &mut [u8]) -> usize {
    let len = digit_count(value);
    let mut v = value;
    for slot in out[..len].iter_mut().rev() {
        *slot = b'0' + v % 10;
        v /= 10;
    }
    len
}
