use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use u8fmt_core::consts::SCALAR_CAPACITY;
use u8fmt_core::{FormatError, FormatErrorKind};

fn format_error_to_py(e: FormatError) -> PyErr {
    let kind = match e.kind {
        FormatErrorKind::InsufficientCapacity => "insufficient_capacity",
    };
    PyValueError::new_err(format!("{}:{}:{}", kind, e.required, e.available))
}

// Formatter output is always ASCII digits and commas.
fn ascii_to_string(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

fn format_values(values: &[u8]) -> PyResult<String> {
    let mut buf = vec![0u8; u8fmt_core::exact_capacity(values)];
    let n = u8fmt_core::format_array_exact(values, &mut buf).map_err(format_error_to_py)?;
    Ok(ascii_to_string(&buf[..n]))
}

#[pyfunction]
fn format_uint8_native(value: u8) -> String {
    let mut buf = [0u8; SCALAR_CAPACITY];
    let n = u8fmt_core::format_scalar_into(value, &mut buf);
    ascii_to_string(&buf[..n])
}

/// Comma-separated decimals of a `bytes` object. The NUL terminator is not
/// part of the returned string.
#[pyfunction]
fn format_uint8_array_native(values: &[u8]) -> PyResult<String> {
    format_values(values)
}

#[pyfunction]
fn format_uint8_list_native(values: Vec<u8>) -> PyResult<String> {
    format_values(&values)
}

#[pyfunction]
fn array_capacity_native(length: usize) -> usize {
    u8fmt_core::array_capacity(length)
}

#[pymodule]
fn _u8fmt_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(format_uint8_native, m)?)?;
    m.add_function(wrap_pyfunction!(format_uint8_array_native, m)?)?;
    m.add_function(wrap_pyfunction!(format_uint8_list_native, m)?)?;
    m.add_function(wrap_pyfunction!(array_capacity_native, m)?)?;
    Ok(())
}
