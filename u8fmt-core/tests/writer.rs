use u8fmt_core::build::ArrayWriter;
use u8fmt_core::error::FormatErrorKind;

#[test]
fn writer_starts_empty() {
    let mut buf = [0u8; 4];
    let w = ArrayWriter::new(&mut buf);
    assert_eq!(w.written(), 0);
    assert_eq!(w.remaining(), 4);
    assert!(w.as_bytes().is_empty());
}

#[test]
fn writer_tracks_cursor() {
    let mut buf = [0u8; 16];
    let mut w = ArrayWriter::new(&mut buf);
    w.write_u8(7).unwrap();
    w.write_separator().unwrap();
    w.write_u8(128).unwrap();
    assert_eq!(w.written(), 5);
    assert_eq!(w.as_bytes(), b"7,128");
    w.write_terminator().unwrap();
    assert_eq!(w.written(), 6);
    assert_eq!(w.remaining(), 10);
}

#[test]
fn write_values_separates_only_between() {
    let mut buf = [0u8; 16];
    let mut w = ArrayWriter::new(&mut buf);
    w.write_values(&[10, 20, 30]).unwrap();
    assert_eq!(w.as_bytes(), b"10,20,30");
}

#[test]
fn write_values_empty_writes_nothing() {
    let mut buf = [0u8; 4];
    let mut w = ArrayWriter::new(&mut buf);
    w.write_values(&[]).unwrap();
    assert_eq!(w.written(), 0);
}

#[test]
fn write_bytes_overflow_keeps_cursor() {
    let mut buf = [0u8; 3];
    let mut w = ArrayWriter::new(&mut buf);
    w.write_bytes(b"ab").unwrap();
    let err = w.write_bytes(b"cd").unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InsufficientCapacity);
    assert_eq!(err.required, 4);
    assert_eq!(err.available, 3);
    assert_eq!(w.written(), 2);
    assert_eq!(w.as_bytes(), b"ab");
}

#[test]
fn write_byte_on_full_buffer() {
    let mut buf = [0u8; 1];
    let mut w = ArrayWriter::new(&mut buf);
    w.write_terminator().unwrap();
    let err = w.write_separator().unwrap_err();
    assert_eq!(err.required, 2);
    assert_eq!(err.available, 1);
}

#[test]
fn write_u8_reports_absolute_position() {
    let mut buf = [0u8; 4];
    let mut w = ArrayWriter::new(&mut buf);
    w.write_bytes(b"12").unwrap();
    let err = w.write_u8(200).unwrap_err();
    assert_eq!(err.required, 5);
    assert_eq!(err.available, 4);
    assert_eq!(w.written(), 2);
    assert_eq!(w.as_bytes(), b"12");
}

#[test]
fn write_values_overflow_writes_nothing() {
    let mut buf = [0xAAu8; 4];
    let mut w = ArrayWriter::new(&mut buf);
    let err = w.write_values(&[1, 22, 255]).unwrap_err();
    assert_eq!(err.kind, FormatErrorKind::InsufficientCapacity);
    assert_eq!(err.required, 8);
    assert_eq!(err.available, 4);
    assert_eq!(w.written(), 0);
    assert!(buf.iter().all(|&b| b == 0xAA));
}

#[test]
fn write_values_overflow_after_prefix_keeps_cursor() {
    let mut buf = [0xAAu8; 6];
    let mut w = ArrayWriter::new(&mut buf);
    w.write_bytes(b"9,").unwrap();
    let err = w.write_values(&[10, 200]).unwrap_err();
    assert_eq!(err.required, 8);
    assert_eq!(err.available, 6);
    assert_eq!(w.as_bytes(), b"9,");
    assert!(buf[2..].iter().all(|&b| b == 0xAA));
}

#[test]
fn write_values_exact_fit() {
    let mut buf = [0xAAu8; 8];
    let mut w = ArrayWriter::new(&mut buf);
    w.write_values(&[1, 22, 255]).unwrap();
    assert_eq!(w.remaining(), 0);
    assert_eq!(&buf, b"1,22,255");
}
