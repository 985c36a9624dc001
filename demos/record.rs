//! Record demo - encode a sensor reading, ship it as bytes, decode it again.
//!
//! Run with `RUST_LOG=trace cargo run --example record` to see the buffer's
//! trace and debug events.

use fixed_buffer::{FixedBuffer, Result};
use tracing_subscriber::EnvFilter;

const SENSOR_ID: usize = 0;
const SAMPLES: usize = 2;
const READING: usize = 6;
const RECORD_SIZE: usize = 14;

fn encode(sensor_id: u16, samples: i64, reading: f64) -> Result<FixedBuffer> {
    let mut record = FixedBuffer::alloc(RECORD_SIZE);
    record.write_uint16_le(sensor_id, SENSOR_ID)?;
    record.write_uint32_le(samples, SAMPLES)?;
    record.write_double_le(reading, READING)?;
    Ok(record)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let magic = FixedBuffer::from_bytes(b"SR".to_vec());
    let record = encode(17, 4_096, 21.75)?;
    let wire = FixedBuffer::concat(&[magic, record]).into_bytes();
    println!("wire: {:02x?}", &wire[..]);

    let received = FixedBuffer::from(wire);
    let body = received.slice(2, None);
    println!(
        "sensor={} samples={} reading={}",
        body.read_int16_le(SENSOR_ID),
        body.read_uint32_le(SAMPLES),
        body.read_double_le(READING),
    );

    // Rejected: negative counts are not encodable.
    if let Err(e) = encode(17, -1, 0.0) {
        println!("encode failed: {}", e);
    }

    Ok(())
}
