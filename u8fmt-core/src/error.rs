use core::fmt;

/// Specific kind of format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// Output buffer is smaller than the bound required by the operation.
    InsufficientCapacity,
}

/// Error returned by the checked formatting functions.
///
/// Capacity is always validated before the first byte is written, so an
/// error means the output buffer was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    pub kind: FormatErrorKind,
    /// Number of bytes the operation needed.
    pub required: usize,
    /// Number of bytes the caller provided.
    pub available: usize,
}

impl FormatError {
    #[must_use]
    pub fn new(kind: FormatErrorKind, required: usize, available: usize) -> Self {
        Self {
            kind,
            required,
            available,
        }
    }

    #[must_use]
    pub fn insufficient_capacity(required: usize, available: usize) -> Self {
        Self::new(FormatErrorKind::InsufficientCapacity, required, available)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FormatErrorKind::InsufficientCapacity => write!(
                f,
                "insufficient capacity: need {} bytes, have {}",
                self.required, self.available
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}
