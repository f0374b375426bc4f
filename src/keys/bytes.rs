//! # Byte String Key Traits
//!
//! Key-traits implementations for fixed-length (`Char`) and
//! variable-length (`Text`/`Blob`) byte strings.
//!
//! ## Fixed-Length Encoding
//!
//! `Char` columns declare their length in the column definition; the key
//! is the raw bytes, compared with memcmp. [`FixedBytesKeyTraits`] is the
//! one per-column-constructed member of the family. It holds only the
//! declared length, so instances are still immutable and freely shareable.
//!
//! ## Variable-Length Encoding
//!
//! Text values use escape encoding to handle embedded null bytes while
//! preserving lexicographic order:
//!
//! ```text
//! 0x00 -> 0x00 0xFF  (escape null byte)
//! 0xFF -> 0xFF 0x00  (escape 0xFF byte)
//! Terminator: 0x00 0x00
//! ```
//!
//! This ensures:
//! - Embedded nulls don't terminate the string early
//! - Lexicographic order is preserved
//! - Empty strings sort before non-empty strings
//! - A key can be a prefix of a composite key without ambiguity
//!
//! No valid encoding contains the byte pair `0xFF 0xFF`, so `{FF, FF}`
//! serves as the maximum sentinel; the empty-string encoding `{00, 00}`
//! is the minimum.

use super::{KeyBuf, KeySize, KeyTraits};
use crate::types::{NumericKeyType, Value};
use eyre::{bail, ensure, Result};
use std::cmp::Ordering;

/// Key traits for fixed-length byte strings (`Char(n)` columns).
#[derive(Debug, Clone, Copy)]
pub struct FixedBytesKeyTraits {
    len: usize,
}

impl FixedBytesKeyTraits {
    /// Creates traits for a column of the given declared byte length.
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Encodes a byte string of exactly the declared length.
    pub fn encode(&self, bytes: &[u8]) -> Result<KeyBuf> {
        ensure!(
            bytes.len() == self.len,
            "fixed key needs exactly {} bytes, got {}",
            self.len,
            bytes.len()
        );
        Ok(KeyBuf::from_slice(bytes))
    }
}

impl KeyTraits for FixedBytesKeyTraits {
    fn key_size(&self) -> KeySize {
        KeySize::Fixed(self.len)
    }

    fn min_key(&self) -> KeyBuf {
        let mut key = KeyBuf::new();
        key.resize(self.len, 0x00);
        key
    }

    fn max_key(&self) -> KeyBuf {
        let mut key = KeyBuf::new();
        key.resize(self.len, 0xFF);
        key
    }

    fn numeric_key_type(&self) -> NumericKeyType {
        NumericKeyType::ByteString
    }

    fn compare(&self, left: &[u8], right: &[u8]) -> Ordering {
        debug_assert_eq!(left.len(), self.len, "fixed-size key buffer");
        debug_assert_eq!(right.len(), self.len, "fixed-size key buffer");
        left.cmp(right)
    }

    fn encode_value(&self, value: &Value, key: &mut KeyBuf) -> Result<()> {
        let bytes = match value {
            Value::Text(s) => s.as_bytes(),
            Value::Blob(b) => b.as_ref(),
            other => bail!(
                "cannot encode {:?} value as fixed byte string key",
                other.data_type()
            ),
        };
        key.extend_from_slice(&self.encode(bytes)?);
        Ok(())
    }
}

/// Key traits for variable-length byte strings (`Text`/`Blob` columns).
#[derive(Debug, Clone, Copy, Default)]
pub struct VarBytesKeyTraits;

/// Process-wide singleton instance.
pub static VAR_BYTES_KEY_TRAITS: VarBytesKeyTraits = VarBytesKeyTraits;

impl VarBytesKeyTraits {
    /// Appends the escape encoding of `bytes` plus the terminator.
    pub fn encode_bytes(bytes: &[u8], key: &mut KeyBuf) {
        for &b in bytes {
            match b {
                0x00 => key.extend_from_slice(&[0x00, 0xFF]),
                0xFF => key.extend_from_slice(&[0xFF, 0x00]),
                _ => key.push(b),
            }
        }
        key.extend_from_slice(&[0x00, 0x00]);
    }

    /// Encodes a byte string as a standalone key.
    pub fn encode(bytes: &[u8]) -> KeyBuf {
        let mut key = KeyBuf::new();
        Self::encode_bytes(bytes, &mut key);
        key
    }

    /// Decodes an escape-encoded key, returning the payload and the number
    /// of key bytes consumed (including the terminator).
    pub fn decode_bytes(key: &[u8]) -> Result<(Vec<u8>, usize)> {
        let mut out = Vec::with_capacity(key.len());
        let mut pos = 0;
        loop {
            ensure!(pos < key.len(), "unterminated variable-length key");
            match key[pos] {
                0x00 => {
                    ensure!(pos + 1 < key.len(), "truncated escape in key");
                    match key[pos + 1] {
                        0x00 => return Ok((out, pos + 2)),
                        0xFF => out.push(0x00),
                        other => bail!("invalid escape byte 0x{:02x} after 0x00", other),
                    }
                    pos += 2;
                }
                0xFF => {
                    ensure!(pos + 1 < key.len(), "truncated escape in key");
                    ensure!(
                        key[pos + 1] == 0x00,
                        "invalid escape byte 0x{:02x} after 0xff",
                        key[pos + 1]
                    );
                    out.push(0xFF);
                    pos += 2;
                }
                b => {
                    out.push(b);
                    pos += 1;
                }
            }
        }
    }
}

impl KeyTraits for VarBytesKeyTraits {
    fn key_size(&self) -> KeySize {
        KeySize::Variable
    }

    /// Encoding of the empty string; sorts before every other encoding.
    fn min_key(&self) -> KeyBuf {
        KeyBuf::from_slice(&[0x00, 0x00])
    }

    /// Sentinel above every valid encoding; `0xFF 0xFF` never occurs in one.
    fn max_key(&self) -> KeyBuf {
        KeyBuf::from_slice(&[0xFF, 0xFF])
    }

    fn numeric_key_type(&self) -> NumericKeyType {
        NumericKeyType::ByteString
    }

    fn compare(&self, left: &[u8], right: &[u8]) -> Ordering {
        left.cmp(right)
    }

    fn encode_value(&self, value: &Value, key: &mut KeyBuf) -> Result<()> {
        match value {
            Value::Text(s) => Self::encode_bytes(s.as_bytes(), key),
            Value::Blob(b) => Self::encode_bytes(b, key),
            other => bail!(
                "cannot encode {:?} value as variable byte string key",
                other.data_type()
            ),
        }
        Ok(())
    }
}
