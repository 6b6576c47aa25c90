//! Record codec
//!
//! Encoding and in-memory decoding of single records.
//!
//! ## Layout
//! ```text
//! ┌──────────┬───────────┬─────────────────────────────┐
//! │ Len (4)  │ Key (10)  │     Value (Len - 10)        │
//! └──────────┴───────────┴─────────────────────────────┘
//! ```

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::entry::{Key, Record, HEADER_SIZE, KEY_SIZE};
use crate::error::Result;

/// Encode a record to bytes
///
/// Format: length (4, big-endian) + key (10) + value
pub fn encode_record(record: &Record) -> Bytes {
    debug_assert_eq!(record.length as usize, KEY_SIZE + record.value.len());

    let mut buf = BytesMut::with_capacity(record.encoded_len());
    buf.put_u32(record.length);
    buf.put_slice(&record.key);
    buf.put_slice(&record.value);
    buf.freeze()
}

/// Decode one record from the front of `bytes`
///
/// Returns the record and the number of bytes consumed, or `None` when
/// `bytes` does not yet hold a complete record. A declared length shorter
/// than the key is an error regardless of how many bytes follow.
pub fn decode_record(bytes: &[u8]) -> Result<Option<(Record, usize)>> {
    if bytes.len() < HEADER_SIZE {
        // Even a short header may already carry a bad length
        if bytes.len() >= 4 {
            let length = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            Record::value_len(length, 0)?;
        }
        return Ok(None);
    }

    let mut buf = bytes;
    let length = buf.get_u32();
    let value_len = Record::value_len(length, 0)? as usize;

    if buf.remaining() < KEY_SIZE + value_len {
        return Ok(None);
    }

    let mut key: Key = [0; KEY_SIZE];
    buf.copy_to_slice(&mut key);
    let value = buf[..value_len].to_vec();

    let consumed = HEADER_SIZE + value_len;
    Ok(Some((Record { length, key, value }, consumed)))
}
