pub mod array;

pub use array::{ArrayWriter, array_capacity, exact_capacity, format_array, format_array_exact};
