//! # Data Type System
//!
//! This module provides the canonical `DataType` enum for OpalDB, used across
//! column definitions, key encoding, and expression evaluation.
//!
//! ## Design Principles
//!
//! 1. **Single source of truth**: one `DataType` enum used everywhere
//! 2. **Storage-efficient**: `#[repr(u8)]` for single-byte discriminant
//! 3. **Metadata-free**: the fixed length of a `Char` column lives in the
//!    column definition, not in the enum
//!
//! ## Type Categories
//!
//! | Category | Types | Key Size |
//! |----------|-------|----------|
//! | **Boolean** | Bool | 1 byte |
//! | **Signed integer** | Int1, Int2, Int4, Int8, Int16 | 1-16 bytes |
//! | **Unsigned integer** | UInt1, UInt2, UInt4, UInt8, UInt16 | 1-16 bytes |
//! | **Float** | Float4, Float8 | 4, 8 bytes |
//! | **Fixed string** | Char | per column |
//! | **Variable** | Text, Blob | variable |
//!
//! ## Discriminant Values
//!
//! Discriminants are grouped by category:
//! - 0: Bool
//! - 1-5: signed integers by width
//! - 11-15: unsigned integers by width
//! - 20-21: floats
//! - 30-32: string/binary types
//!
//! ## Numeric Key Category
//!
//! Every data type maps to a [`NumericKeyType`], the category tag the index
//! layer uses to select comparison semantics without inspecting the full
//! `DataType`.

/// Canonical data type enum for all OpalDB columns.
///
/// Uses `#[repr(u8)]` for efficient single-byte storage encoding. Integer
/// type names carry their width in bytes (`Int8` is the 8-byte signed
/// integer).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Bool = 0,

    Int1 = 1,
    Int2 = 2,
    Int4 = 3,
    Int8 = 4,
    Int16 = 5,

    UInt1 = 11,
    UInt2 = 12,
    UInt4 = 13,
    UInt8 = 14,
    UInt16 = 15,

    Float4 = 20,
    Float8 = 21,

    Char = 30,
    Text = 31,
    Blob = 32,
}

/// Numeric category of an encoded index key.
///
/// Assigned once per key-traits implementation; the storage layer uses it
/// to classify keys without consulting the column catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKeyType {
    SignedInt,
    UnsignedInt,
    Float,
    ByteString,
}

impl DataType {
    /// Returns the fixed encoded size in bytes, or None for variable-length
    /// and per-column-sized types.
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            DataType::Bool | DataType::Int1 | DataType::UInt1 => Some(1),
            DataType::Int2 | DataType::UInt2 => Some(2),
            DataType::Int4 | DataType::UInt4 | DataType::Float4 => Some(4),
            DataType::Int8 | DataType::UInt8 | DataType::Float8 => Some(8),
            DataType::Int16 | DataType::UInt16 => Some(16),
            DataType::Char | DataType::Text | DataType::Blob => None,
        }
    }

    /// Returns true if values of this type have no fixed engine-wide size.
    pub fn is_variable(&self) -> bool {
        matches!(self, DataType::Text | DataType::Blob)
    }

    /// Returns true for integer and floating point types.
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            DataType::Bool | DataType::Char | DataType::Text | DataType::Blob
        )
    }

    /// Returns true for the signed integer types.
    pub fn is_signed_integer(&self) -> bool {
        matches!(
            self,
            DataType::Int1 | DataType::Int2 | DataType::Int4 | DataType::Int8 | DataType::Int16
        )
    }

    /// Returns true for the unsigned integer types.
    pub fn is_unsigned_integer(&self) -> bool {
        matches!(
            self,
            DataType::UInt1
                | DataType::UInt2
                | DataType::UInt4
                | DataType::UInt8
                | DataType::UInt16
        )
    }

    /// Returns the numeric key category for this type.
    pub fn numeric_key_type(&self) -> NumericKeyType {
        match self {
            DataType::Int1 | DataType::Int2 | DataType::Int4 | DataType::Int8 | DataType::Int16 => {
                NumericKeyType::SignedInt
            }
            DataType::Bool
            | DataType::UInt1
            | DataType::UInt2
            | DataType::UInt4
            | DataType::UInt8
            | DataType::UInt16 => NumericKeyType::UnsignedInt,
            DataType::Float4 | DataType::Float8 => NumericKeyType::Float,
            DataType::Char | DataType::Text | DataType::Blob => NumericKeyType::ByteString,
        }
    }
}
