//! # Floating Point Key Traits
//!
//! Key-traits implementations for `Float4` (f32) and `Float8` (f64).
//!
//! ## Encoding
//!
//! IEEE 754 bit patterns are remapped to unsigned integers so that
//! unsigned byte order equals IEEE total order:
//!
//! - negative patterns (sign bit set): invert all bits (`!bits`)
//! - non-negative patterns: flip the sign bit (`bits ^ SIGN`)
//!
//! The remapped integer is stored big-endian. The resulting order is the
//! full total order including the exceptional values:
//!
//! ```text
//! -NaN < -inf < negatives < -0 < +0 < positives < +inf < +NaN
//! ```
//!
//! `min_key`/`max_key` are the all-0x00 and all-0xFF keys, the remapped
//! extremes of that order. Note the index layer's total order treats every
//! NaN payload as comparable; SQL comparison on `Value` keeps NaN as
//! unknown. The two layers serve different purposes.

use super::{KeyBuf, KeySize, KeyTraits};
use crate::types::{DataType, NumericKeyType, Value};
use eyre::{bail, Result};
use std::cmp::Ordering;

macro_rules! float_key_traits {
    ($(#[$doc:meta])* $traits:ident, $singleton:ident, $native:ty, $bits:ty,
     $width:literal, $dt:path, $variant:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $traits;

        /// Process-wide singleton instance.
        pub static $singleton: $traits = $traits;

        impl $traits {
            const SIGN_MASK: $bits = 1 << ($width * 8 - 1);

            /// Remaps an IEEE bit pattern to a totally ordered unsigned
            /// integer.
            #[inline]
            fn to_ordered_bits(value: $native) -> $bits {
                let bits = value.to_bits();
                if bits & Self::SIGN_MASK != 0 {
                    !bits
                } else {
                    bits ^ Self::SIGN_MASK
                }
            }

            #[inline]
            fn from_ordered_bits(ordered: $bits) -> $native {
                let bits = if ordered & Self::SIGN_MASK != 0 {
                    ordered ^ Self::SIGN_MASK
                } else {
                    !ordered
                };
                <$native>::from_bits(bits)
            }

            /// Encodes a native value as an ordered key.
            #[inline]
            pub fn encode(value: $native) -> KeyBuf {
                KeyBuf::from_slice(&Self::to_ordered_bits(value).to_be_bytes())
            }

            /// Decodes an ordered key back to the native value.
            #[inline]
            pub fn decode(key: &[u8]) -> $native {
                debug_assert_eq!(key.len(), $width, "fixed-size key buffer");
                let bytes: [u8; $width] = key[..$width]
                    .try_into()
                    .expect("fixed-size key buffer");
                Self::from_ordered_bits(<$bits>::from_be_bytes(bytes))
            }

            #[inline]
            fn ordered_bits_of_key(key: &[u8]) -> $bits {
                debug_assert_eq!(key.len(), $width, "fixed-size key buffer");
                let bytes: [u8; $width] = key[..$width]
                    .try_into()
                    .expect("fixed-size key buffer");
                <$bits>::from_be_bytes(bytes)
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
                NumericKeyType::Float
            }

            fn compare(&self, left: &[u8], right: &[u8]) -> Ordering {
                Self::ordered_bits_of_key(left).cmp(&Self::ordered_bits_of_key(right))
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

float_key_traits!(
    /// Key traits for the single precision float.
    Float4KeyTraits, FLOAT4_KEY_TRAITS, f32, u32, 4, DataType::Float4, Value::Float4
);
float_key_traits!(
    /// Key traits for the double precision float.
    Float8KeyTraits, FLOAT8_KEY_TRAITS, f64, u64, 8, DataType::Float8, Value::Float8
);
