//! # Integer Key Traits
//!
//! Key-traits implementations for the signed and unsigned integer types,
//! widths 1 through 16 bytes.
//!
//! ## Encoding
//!
//! - **Unsigned**: plain big-endian. Byte order equals value order
//!   directly.
//! - **Signed**: big-endian with the sign bit of the most significant
//!   byte flipped. Flipping moves the negative half-range below the
//!   non-negative half under unsigned byte comparison, so byte order
//!   equals signed value order.
//!
//! Consequently `encode(MIN)` is the all-zero key and `encode(MAX)` is the
//! all-0xFF key for every width and signedness; those are exactly the
//! sentinels `min_key`/`max_key` return.
//!
//! ## Comparison
//!
//! `compare` decodes both keys through the portable big-endian reader and
//! compares natively. The monotonicity property suite verifies this agrees
//! bit-for-bit with raw byte comparison.

use super::{KeyBuf, KeySize, KeyTraits};
use crate::types::{DataType, NumericKeyType, Value};
use eyre::{bail, Result};
use std::cmp::Ordering;

macro_rules! signed_key_traits {
    ($(#[$doc:meta])* $traits:ident, $singleton:ident, $native:ty, $unsigned:ty,
     $width:literal, $dt:path, $variant:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $traits;

        /// Process-wide singleton instance.
        pub static $singleton: $traits = $traits;

        impl $traits {
            const SIGN_MASK: $unsigned = 1 << ($width * 8 - 1);

            /// Encodes a native value as an ordered key.
            #[inline]
            pub fn encode(value: $native) -> KeyBuf {
                let bits = (value as $unsigned) ^ Self::SIGN_MASK;
                KeyBuf::from_slice(&bits.to_be_bytes())
            }

            /// Decodes an ordered key back to the native value.
            #[inline]
            pub fn decode(key: &[u8]) -> $native {
                debug_assert_eq!(key.len(), $width, "fixed-size key buffer");
                let bytes: [u8; $width] = key[..$width]
                    .try_into()
                    .expect("fixed-size key buffer");
                (<$unsigned>::from_be_bytes(bytes) ^ Self::SIGN_MASK) as $native
            }
        }

        impl KeyTraits for $traits {
            fn key_size(&self) -> KeySize {
                KeySize::Fixed($width)
            }

            fn min_key(&self) -> KeyBuf {
                KeyBuf::from_slice(&[0x00; $width])
            }

            fn max_key(&self) -> KeyBuf {
                KeyBuf::from_slice(&[0xFF; $width])
            }

            fn numeric_key_type(&self) -> NumericKeyType {
                NumericKeyType::SignedInt
            }

            fn compare(&self, left: &[u8], right: &[u8]) -> Ordering {
                Self::decode(left).cmp(&Self::decode(right))
            }

            fn encode_value(&self, value: &Value, key: &mut KeyBuf) -> Result<()> {
                match value {
                    $variant(v) => {
                        key.extend_from_slice(&Self::encode(*v));
                        Ok(())
                    }
                    other => bail!(
                        "cannot encode {:?} value as {:?} key",
                        other.data_type(),
                        $dt
                    ),
                }
            }
        }
    };
}

macro_rules! unsigned_key_traits {
    ($(#[$doc:meta])* $traits:ident, $singleton:ident, $native:ty,
     $width:literal, $dt:path, $variant:path $(, $extra_pat:pat => $extra_val:expr)?) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $traits;

        /// Process-wide singleton instance.
        pub static $singleton: $traits = $traits;

        impl $traits {
            /// Encodes a native value as an ordered key.
            #[inline]
            pub fn encode(value: $native) -> KeyBuf {
                KeyBuf::from_slice(&value.to_be_bytes())
            }

            /// Decodes an ordered key back to the native value.
            #[inline]
            pub fn decode(key: &[u8]) -> $native {
                debug_assert_eq!(key.len(), $width, "fixed-size key buffer");
                let bytes: [u8; $width] = key[..$width]
                    .try_into()
                    .expect("fixed-size key buffer");
                <$native>::from_be_bytes(bytes)
            }
        }

        impl KeyTraits for $traits {
            fn key_size(&self) -> KeySize {
                KeySize::Fixed($width)
            }

            fn min_key(&self) -> KeyBuf {
                KeyBuf::from_slice(&[0x00; $width])
            }

            fn max_key(&self) -> KeyBuf {
                KeyBuf::from_slice(&[0xFF; $width])
            }

            fn numeric_key_type(&self) -> NumericKeyType {
                NumericKeyType::UnsignedInt
            }

            fn compare(&self, left: &[u8], right: &[u8]) -> Ordering {
                Self::decode(left).cmp(&Self::decode(right))
            }

            fn encode_value(&self, value: &Value, key: &mut KeyBuf) -> Result<()> {
                match value {
                    $variant(v) => {
                        key.extend_from_slice(&Self::encode(*v));
                        Ok(())
                    }
                    $($extra_pat => {
                        let v: $native = $extra_val;
                        key.extend_from_slice(&Self::encode(v));
                        Ok(())
                    })?
                    other => bail!(
                        "cannot encode {:?} value as {:?} key",
                        other.data_type(),
                        $dt
                    ),
                }
            }
        }
    };
}

signed_key_traits!(
    /// Key traits for the 1-byte signed integer.
    Int1KeyTraits, INT1_KEY_TRAITS, i8, u8, 1, DataType::Int1, Value::Int1
);
signed_key_traits!(
    /// Key traits for the 2-byte signed integer.
    Int2KeyTraits, INT2_KEY_TRAITS, i16, u16, 2, DataType::Int2, Value::Int2
);
signed_key_traits!(
    /// Key traits for the 4-byte signed integer.
    Int4KeyTraits, INT4_KEY_TRAITS, i32, u32, 4, DataType::Int4, Value::Int4
);
signed_key_traits!(
    /// Key traits for the 8-byte signed integer.
    Int8KeyTraits, INT8_KEY_TRAITS, i64, u64, 8, DataType::Int8, Value::Int8
);
signed_key_traits!(
    /// Key traits for the 16-byte signed integer.
    Int16KeyTraits, INT16_KEY_TRAITS, i128, u128, 16, DataType::Int16, Value::Int16
);

unsigned_key_traits!(
    /// Key traits for the 1-byte unsigned integer. Also serves `Bool`
    /// columns (false encodes as 0, true as 1).
    UInt1KeyTraits, UINT1_KEY_TRAITS, u8, 1, DataType::UInt1, Value::UInt1,
    Value::Bool(b) => *b as u8
);
unsigned_key_traits!(
    /// Key traits for the 2-byte unsigned integer.
    UInt2KeyTraits, UINT2_KEY_TRAITS, u16, 2, DataType::UInt2, Value::UInt2
);
unsigned_key_traits!(
    /// Key traits for the 4-byte unsigned integer.
    UInt4KeyTraits, UINT4_KEY_TRAITS, u32, 4, DataType::UInt4, Value::UInt4
);
unsigned_key_traits!(
    /// Key traits for the 8-byte unsigned integer.
    UInt8KeyTraits, UINT8_KEY_TRAITS, u64, 8, DataType::UInt8, Value::UInt8
);
unsigned_key_traits!(
    /// Key traits for the 16-byte unsigned integer.
    UInt16KeyTraits, UINT16_KEY_TRAITS, u128, 16, DataType::UInt16, Value::UInt16
);
