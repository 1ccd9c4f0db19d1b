//! Fortran sequential unformatted record layout.
//!
//! A record is a payload wrapped in two identical byte-count markers:
//!
//! ```text
//! [marker: B][B bytes of f32 payload][marker: B]
//! ```
//!
//! Compilers disagree on the marker width. Most write 4-byte markers, some
//! older toolchains write 8. Both are native-endian signed integers. The
//! width is recovered on decode by matching the declared length against the
//! total length of the buffer.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::Serialize;
use thiserror::Error;

use crate::error::{Result, SurfaceError};

const F32_BYTES: usize = std::mem::size_of::<f32>();

/// Width of the record length markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RecordMarker {
    /// 32-bit markers (gfortran default).
    #[default]
    FourByte,
    /// 64-bit markers.
    EightByte,
}

impl RecordMarker {
    /// Marker size in bytes.
    pub fn width(&self) -> usize {
        match self {
            RecordMarker::FourByte => 4,
            RecordMarker::EightByte => 8,
        }
    }

    /// Largest payload length the marker can declare.
    pub fn max_payload(&self) -> usize {
        match self {
            RecordMarker::FourByte => i32::MAX as usize,
            RecordMarker::EightByte => i64::MAX as usize,
        }
    }

    fn get(&self, mut buf: &[u8]) -> i64 {
        match self {
            RecordMarker::FourByte => buf.get_i32_ne() as i64,
            RecordMarker::EightByte => buf.get_i64_ne(),
        }
    }

    fn put(&self, buf: &mut BytesMut, len: usize) {
        match self {
            RecordMarker::FourByte => buf.put_i32_ne(len as i32),
            RecordMarker::EightByte => buf.put_i64_ne(len as i64),
        }
    }
}

impl std::fmt::Display for RecordMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordMarker::FourByte => write!(f, "4-byte"),
            RecordMarker::EightByte => write!(f, "8-byte"),
        }
    }
}

/// Ways a byte buffer can fail to be a single float record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{0} bytes is too short to hold a record header and footer")]
    Truncated(usize),

    #[error("header declares {declared} payload bytes but the file holds {file_len} bytes")]
    LengthMismatch { declared: i64, file_len: usize },

    #[error("payload of {0} bytes is not a whole number of 4-byte floats")]
    Unaligned(usize),

    #[error("footer {footer} does not match header {header}")]
    FooterMismatch { header: i64, footer: i64 },
}

/// A decoded record.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub marker: RecordMarker,
    pub values: Vec<f32>,
}

impl Record {
    /// Payload length in bytes.
    pub fn payload_bytes(&self) -> usize {
        self.values.len() * F32_BYTES
    }
}

/// Serialize `values` as a single record.
///
/// Values are written as given; sentinel substitution is the caller's job.
pub fn encode_record(values: &[f32], marker: RecordMarker) -> Result<Bytes> {
    let payload = values.len() * F32_BYTES;
    if payload > marker.max_payload() {
        return Err(SurfaceError::RecordTooLarge(payload));
    }

    let mut buf = BytesMut::with_capacity(payload + 2 * marker.width());
    marker.put(&mut buf, payload);
    for &v in values {
        buf.put_f32_ne(v);
    }
    marker.put(&mut buf, payload);

    Ok(buf.freeze())
}

/// Parse a buffer holding exactly one record.
pub fn decode_record(data: &[u8]) -> std::result::Result<Record, LayoutError> {
    let (marker, payload) = detect_marker(data)?;
    let width = marker.width();

    if payload % F32_BYTES != 0 {
        return Err(LayoutError::Unaligned(payload));
    }

    let header = marker.get(&data[..width]);
    let footer = marker.get(&data[width + payload..]);
    if header != footer {
        return Err(LayoutError::FooterMismatch { header, footer });
    }

    let mut body = &data[width..width + payload];
    let mut values = Vec::with_capacity(payload / F32_BYTES);
    while body.has_remaining() {
        values.push(body.get_f32_ne());
    }

    Ok(Record { marker, values })
}

/// Find the marker width whose declared length accounts for every byte.
fn detect_marker(data: &[u8]) -> std::result::Result<(RecordMarker, usize), LayoutError> {
    let four = RecordMarker::FourByte;
    if data.len() < 2 * four.width() {
        return Err(LayoutError::Truncated(data.len()));
    }

    for marker in [RecordMarker::FourByte, RecordMarker::EightByte] {
        let width = marker.width();
        if data.len() < 2 * width {
            continue;
        }
        let declared = marker.get(&data[..width]);
        if declared >= 0 && declared as u64 + 2 * width as u64 == data.len() as u64 {
            return Ok((marker, declared as usize));
        }
    }

    Err(LayoutError::LengthMismatch {
        declared: four.get(&data[..four.width()]),
        file_len: data.len(),
    })
}
