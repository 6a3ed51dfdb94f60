#![no_std]
#![forbid(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "std")]
extern crate std;

pub mod consts;
pub mod error;
pub mod fmt;
pub mod validate;

pub mod build;

pub use consts::{ELEMENT_CAPACITY, SCALAR_CAPACITY, SEPARATOR, TERMINATOR};
pub use error::{FormatError, FormatErrorKind};

// Re-export scalar formatting
pub use fmt::{digit_count, format_scalar, format_scalar_into};

// Re-export array formatting
pub use build::{ArrayWriter, array_capacity, exact_capacity, format_array, format_array_exact};
