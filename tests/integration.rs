//! Integration tests for fixed-buffer.
//!
//! These tests build and parse whole records through the public API.

use fixed_buffer::codec::{decode_fixed512, encode_fixed512};
use fixed_buffer::{BufferError, FixedBuffer};

/// Record layout used below:
/// `[kind: u16 BE][count: u32 LE][scale: i32 BE][level: fixed512][flags: u16 LE]`
const KIND: usize = 0;
const COUNT: usize = 2;
const SCALE: usize = 6;
const LEVEL: usize = 10;
const FLAGS: usize = 18;
const RECORD_SIZE: usize = 20;

fn build_record(count: i64, level: f64, flags: u16) -> FixedBuffer {
    let mut record = FixedBuffer::alloc(RECORD_SIZE);
    record.write_uint8(0x01, KIND).unwrap();
    record.write_uint8(0x02, KIND + 1).unwrap();
    record.write_uint32_le(count, COUNT).unwrap();
    record.write_uint8(0x00, SCALE + 3).unwrap();
    record.write_double_le(level, LEVEL).unwrap();
    record.write_uint16_le(flags, FLAGS).unwrap();
    record
}

/// Test full record encode/decode cycle.
#[test]
fn test_record_roundtrip() {
    let record = build_record(123_456, 3.5, 0x0102);

    assert_eq!(record.len(), RECORD_SIZE);
    assert_eq!(record.read_uint16_be(KIND), 0x0102);
    assert_eq!(record.read_uint32_le(COUNT), 123_456);
    assert_eq!(record.read_int32_be(SCALE), 0);
    assert_eq!(record.read_double_le(LEVEL), 3.5);
    assert_eq!(record.read_int16_le(FLAGS), 0x0102);
}

/// Test splitting a stream of records with slice and joining with concat.
#[test]
fn test_concat_then_slice_records() {
    let records: Vec<FixedBuffer> = (0..3)
        .map(|i| build_record(i, i as f64 * 0.5, 0))
        .collect();

    let stream = FixedBuffer::concat(&records);
    assert_eq!(stream.len(), RECORD_SIZE * 3);

    for (i, expected) in records.iter().enumerate() {
        let start = i * RECORD_SIZE;
        let record = stream.slice(start, Some(start + RECORD_SIZE));
        assert_eq!(&record, expected);
        assert_eq!(record.read_uint32_le(COUNT), i as u32);
        assert_eq!(record.read_double_le(LEVEL), i as f64 * 0.5);
    }
}

/// Test that a truncated record reads its missing tail as zero.
#[test]
fn test_truncated_record_reads_zero() {
    let record = build_record(7, 3.5, 0xFFFF);
    let truncated = record.slice(0, Some(LEVEL + 2));

    assert_eq!(truncated.read_uint32_le(COUNT), 7);
    assert_eq!(truncated.read_double_le(LEVEL), 3.5);
    assert_eq!(truncated.read_int16_le(FLAGS), 0);
}

/// Test that rejected writes never change the record.
#[test]
fn test_rejected_writes_leave_record_intact() {
    let mut record = build_record(99, 1.25, 0xABCD);
    let before = record.clone();

    assert_eq!(
        record.write_int32_le(-1, COUNT),
        Err(BufferError::NegativeValue(-1))
    );
    assert!(matches!(
        record.write_double_le(2.0, FLAGS),
        Err(BufferError::OutOfBounds { .. })
    ));
    assert!(record.write_uint16_le(1, RECORD_SIZE - 1).is_err());

    assert_eq!(record, before);
}

/// Test locating a delimiter and cutting around it.
#[test]
fn test_index_of_delimiter() {
    let buf = FixedBuffer::from_bytes(b"key=value".to_vec());
    let split = buf.index_of(b'=').unwrap();

    assert_eq!(buf.slice(0, Some(split)).as_bytes(), b"key");
    assert_eq!(buf.slice(split + 1, None).as_bytes(), b"value");
    assert_eq!(buf.index_of(b'#'), None);
}

/// Test that the buffer and the standalone codec agree on the wire format.
#[test]
fn test_buffer_matches_codec() {
    for value in [0.0, 3.5, -3.5, 1e6, -129.0 * (1u64 << 47) as f64] {
        let mut buf = FixedBuffer::alloc(8);
        buf.write_double_le(value, 0).unwrap();

        assert_eq!(buf.as_bytes(), &encode_fixed512(value));
        assert_eq!(
            buf.read_double_le(0).to_bits(),
            decode_fixed512(buf.read_uint64_le(0)).to_bits()
        );
    }
}

/// Test handing a finished record to a transport as frozen bytes.
#[test]
fn test_into_bytes_for_transport() {
    let record = build_record(1, 0.0, 0);
    let expected = record.as_bytes().to_vec();
    let frozen = record.into_bytes();
    assert_eq!(&frozen[..], &expected[..]);

    let reparsed = FixedBuffer::from(frozen);
    assert_eq!(reparsed.read_uint32_le(COUNT), 1);
}
