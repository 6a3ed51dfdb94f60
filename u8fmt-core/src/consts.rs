/// Maximum number of decimal digits of a `u8` (`255`).
pub const SCALAR_CAPACITY: usize = 3;

/// Bytes reserved per array element: up to 3 digits plus one separator or terminator.
pub const ELEMENT_CAPACITY: usize = SCALAR_CAPACITY + 1;

/// Byte written between consecutive array elements.
pub const SEPARATOR: u8 = b',';

/// Byte written once at the end of a formatted array.
pub const TERMINATOR: u8 = 0;
