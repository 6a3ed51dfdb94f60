use crate::consts::{ELEMENT_CAPACITY, SEPARATOR, TERMINATOR};
use crate::error::FormatError;
use crate::fmt;
use crate::validate::check_capacity;

/// A cursor-based writer into a caller-provided byte buffer.
///
/// Every append is bounds-checked; a failed append leaves both the buffer
/// and the cursor unchanged.
pub struct ArrayWriter<'buf> {
    buf: &'buf mut [u8],
    pos: usize,
}

impl<'buf> ArrayWriter<'buf> {
    /// Create a new writer over the given buffer.
    pub fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns the bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    fn overflow(&self, needed: usize) -> FormatError {
        FormatError::insufficient_capacity(self.pos + needed, self.buf.len())
    }

    /// Write raw bytes to the buffer.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), FormatError> {
        if data.len() > self.remaining() {
            return Err(self.overflow(data.len()));
        }
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }

    /// Write a single byte.
    pub fn write_byte(&mut self, b: u8) -> Result<(), FormatError> {
        if self.pos >= self.buf.len() {
            return Err(self.overflow(1));
        }
        self.buf[self.pos] = b;
        self.pos += 1;
        Ok(())
    }

    /// Write a `u8` value as decimal.
    pub fn write_u8(&mut self, value: u8) -> Result<(), FormatError> {
        let n = fmt::format_scalar(value, &mut self.buf[self.pos..])
            .map_err(|e| self.overflow(e.required))?;
        self.pos += n;
        Ok(())
    }

    /// Write the element separator.
    pub fn write_separator(&mut self) -> Result<(), FormatError> {
        self.write_byte(SEPARATOR)
    }

    /// Write the NUL terminator.
    pub fn write_terminator(&mut self) -> Result<(), FormatError> {
        self.write_byte(TERMINATOR)
    }

    /// Write `values` as decimals separated by commas, in input order.
    ///
    /// Room for every element is checked up front, so a failure writes nothing.
    pub fn write_values(&mut self, values: &[u8]) -> Result<(), FormatError> {
        let needed = exact_capacity(values) - 1;
        if needed > self.remaining() {
            return Err(self.overflow(needed));
        }
        for (i, &value) in values.iter().enumerate() {
            if i > 0 {
                self.write_separator()?;
            }
            self.write_u8(value)?;
        }
        Ok(())
    }
}

/// Loose output bound for an array of `len` values: 4 bytes per element,
/// and 1 byte for the terminator alone when `len == 0`.
///
/// The bound is met exactly when every value is three digits wide: the last
/// element has no separator but gains the terminator.
#[must_use]
pub const fn array_capacity(len: usize) -> usize {
    let bytes = len.saturating_mul(ELEMENT_CAPACITY);
    if bytes == 0 { 1 } else { bytes }
}

/// Exact number of bytes [`format_array`] writes for `values`, terminator included.
#[must_use]
pub fn exact_capacity(values: &[u8]) -> usize {
    let digits: usize = values.iter().map(|&v| fmt::digit_count(v)).sum();
    digits + values.len().saturating_sub(1) + 1
}

fn write_array(values: &[u8], result: &mut [u8]) -> Result<usize, FormatError> {
    let mut w = ArrayWriter::new(result);
    w.write_values(values)?;
    let len = w.written();
    w.write_terminator()?;
    Ok(len)
}

// ---------------------------------------------------------------------------
// Array build functions
// ---------------------------------------------------------------------------

/// Format `values` as a comma-separated, NUL-terminated string into `result`.
///
/// `result` must hold at least [`array_capacity`]`(values.len())` bytes; this
/// is checked before anything is written. Returns the string length, not
/// counting the terminator.
pub fn format_array(values: &[u8], result: &mut [u8]) -> Result<usize, FormatError> {
    check_capacity(result, array_capacity(values.len()))?;
    write_array(values, result)
}

/// Same output as [`format_array`], validated against [`exact_capacity`]
/// instead of the loose bound.
pub fn format_array_exact(values: &[u8], result: &mut [u8]) -> Result<usize, FormatError> {
    check_capacity(result, exact_capacity(values))?;
    write_array(values, result)
}
