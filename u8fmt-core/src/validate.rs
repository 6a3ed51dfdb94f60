use crate::error::FormatError;

/// Check that `buf` holds at least `required` bytes.
///
/// Every checked entry point calls this before writing anything.
pub fn check_capacity(buf: &[u8], required: usize) -> Result<(), FormatError> {
    if buf.len() < required {
        return Err(FormatError::insufficient_capacity(required, buf.len()));
    }
    Ok(())
}
