//! # Ordered Key Encoding for B-Tree Indexes
//!
//! This module provides byte-comparable key encoding for OpalDB's ordered
//! indexes. Every storable scalar type has a key-traits implementation that
//! encodes a typed value into a byte key whose unsigned lexicographic order
//! equals the value's natural order, so the storage layer can compare keys
//! with a single `memcmp`.
//!
//! ## Design Goals
//!
//! 1. **Byte-comparable**: encoded keys preserve sort order when compared
//!    lexicographically
//! 2. **Stateless**: every traits object is a pure function of its buffer
//!    arguments; the fixed-type implementations are process-wide singletons
//! 3. **Deterministic**: same value always produces the same encoding
//! 4. **Sentinel keys**: every implementation produces a minimum and a
//!    maximum key bounding all representable values, for range scans
//!
//! ## Encoding Strategies
//!
//! | Category | Encoding |
//! |----------|----------|
//! | Signed integer | big-endian, sign bit of the MSB flipped |
//! | Unsigned integer | plain big-endian |
//! | Float | IEEE total-order remap (negatives inverted, positives sign-flipped), big-endian |
//! | Fixed bytes | raw bytes, memcmp order |
//! | Variable bytes | escape encoding (`00 -> 00 FF`, `FF -> FF 00`, terminator `00 00`) |
//!
//! The sign-bit flip makes negative integers sort before positive ones
//! under unsigned byte comparison; the float remap extends the same idea to
//! the full IEEE total order (-NaN < -inf < ... < -0 < +0 < ... < +NaN).
//!
//! ## Comparison Paths
//!
//! [`KeyTraits::compare`] decodes both keys through a portable big-endian
//! reader and compares natively. Because the encodings are monotonic, this
//! always agrees with raw byte comparison; the property suite in
//! `tests/key_ordering.rs` cross-checks the two paths.
//!
//! ## Lookup Table
//!
//! [`key_traits`] maps a column's `DataType` to its `'static` singleton.
//! `Char` columns carry a per-column length and construct a
//! [`FixedBytesKeyTraits`] instead of using the table.
//!
//! ## Caller Contract
//!
//! `compare`, `min_key`, and `max_key` are total functions over well-formed
//! buffers. Handing `compare` a slice shorter than `key_size()` is a caller
//! contract violation, guarded by `debug_assert!`.

mod bytes;
mod float;
mod int;

pub use bytes::{FixedBytesKeyTraits, VarBytesKeyTraits, VAR_BYTES_KEY_TRAITS};
pub use float::{Float4KeyTraits, Float8KeyTraits, FLOAT4_KEY_TRAITS, FLOAT8_KEY_TRAITS};
pub use int::{
    Int16KeyTraits, Int1KeyTraits, Int2KeyTraits, Int4KeyTraits, Int8KeyTraits, UInt16KeyTraits,
    UInt1KeyTraits, UInt2KeyTraits, UInt4KeyTraits, UInt8KeyTraits, INT16_KEY_TRAITS,
    INT1_KEY_TRAITS, INT2_KEY_TRAITS, INT4_KEY_TRAITS, INT8_KEY_TRAITS, UINT16_KEY_TRAITS,
    UINT1_KEY_TRAITS, UINT2_KEY_TRAITS, UINT4_KEY_TRAITS, UINT8_KEY_TRAITS,
};

use crate::types::{DataType, NumericKeyType, Value};
use eyre::Result;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Encoded key buffer. Fixed numeric keys are 1-16 bytes and stay inline;
/// variable-length string keys spill to the heap.
pub type KeyBuf = SmallVec<[u8; 16]>;

/// Encoded size rule of a key-traits implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    /// Every encoded key is exactly this many bytes.
    Fixed(usize),
    /// Encoded length depends on the value (escape-encoded byte strings).
    Variable,
}

/// Type-specific key encoding policy: size, sentinels, numeric category,
/// and ordered comparison for one storable scalar type.
///
/// Implementations are stateless; the fixed-type ones are process-wide
/// singletons reachable through [`key_traits`], callable from any thread
/// without synchronization.
pub trait KeyTraits: Send + Sync {
    /// Encoded key size rule.
    fn key_size(&self) -> KeySize;

    /// Produces the minimum key, comparing less than or equal to every
    /// encoded value of the type.
    fn min_key(&self) -> KeyBuf;

    /// Produces the maximum key, comparing greater than or equal to every
    /// encoded value of the type.
    fn max_key(&self) -> KeyBuf;

    /// Numeric category of this key type.
    fn numeric_key_type(&self) -> NumericKeyType;

    /// Compares two encoded keys in the type's order.
    ///
    /// Decodes through the portable big-endian path; agrees with unsigned
    /// lexicographic byte order for every implementation.
    fn compare(&self, left: &[u8], right: &[u8]) -> Ordering;

    /// Encodes a dynamic value of the matching type, appending to `key`.
    ///
    /// A value of a different type or NULL is an error; NULL is not
    /// indexable through key traits.
    fn encode_value(&self, value: &Value, key: &mut KeyBuf) -> Result<()>;
}

/// Returns the stateless singleton key traits for a column type, or None
/// for `Char`, whose key length is a per-column property
/// (use [`FixedBytesKeyTraits::new`]).
pub fn key_traits(data_type: DataType) -> Option<&'static dyn KeyTraits> {
    let traits: &'static dyn KeyTraits = match data_type {
        DataType::Int1 => &INT1_KEY_TRAITS,
        DataType::Int2 => &INT2_KEY_TRAITS,
        DataType::Int4 => &INT4_KEY_TRAITS,
        DataType::Int8 => &INT8_KEY_TRAITS,
        DataType::Int16 => &INT16_KEY_TRAITS,
        // Bool shares the 1-byte unsigned encoding: false < true.
        DataType::Bool | DataType::UInt1 => &UINT1_KEY_TRAITS,
        DataType::UInt2 => &UINT2_KEY_TRAITS,
        DataType::UInt4 => &UINT4_KEY_TRAITS,
        DataType::UInt8 => &UINT8_KEY_TRAITS,
        DataType::UInt16 => &UINT16_KEY_TRAITS,
        DataType::Float4 => &FLOAT4_KEY_TRAITS,
        DataType::Float8 => &FLOAT8_KEY_TRAITS,
        DataType::Text | DataType::Blob => &VAR_BYTES_KEY_TRAITS,
        DataType::Char => return None,
    };
    Some(traits)
}
