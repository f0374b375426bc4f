//! # Runtime Value Representation
//!
//! This module provides `Value<'a>`, the runtime representation for SQL
//! values. Values use `Cow` for text/blob payloads to enable zero-copy when
//! reading from mmap'd pages while supporting owned data when needed.
//!
//! ## Design Goals
//!
//! 1. **Zero-copy**: borrow directly from page data when possible
//! 2. **Type safety**: one variant per storable scalar type, tag always
//!    matches the payload
//! 3. **SQL semantics**: NULL comparison returns UNKNOWN (None)
//! 4. **Exact integers**: cross-signedness comparison goes through a
//!    sign-aware 128-bit path, never through floats
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Description |
//! |---------|-----------|-------------|
//! | Null | - | SQL NULL |
//! | Bool | bool | boolean |
//! | Int1..Int16 | i8..i128 | signed integers, 1-16 bytes |
//! | UInt1..UInt16 | u8..u128 | unsigned integers, 1-16 bytes |
//! | Float4 | f32 | single precision |
//! | Float8 | f64 | double precision |
//! | Text | Cow<str> | UTF-8 string |
//! | Blob | Cow<[u8]> | binary data |
//!
//! ## Comparison Semantics
//!
//! - NULL compared to anything returns None (SQL UNKNOWN)
//! - NaN on either side of a float comparison returns None
//! - Numeric tags compare after promotion: narrower integer -> wider
//!   integer -> floating point
//! - Cross-type ordering for sort stability: Bool < numbers < Text < Blob
//!
//! ## Arithmetic Semantics
//!
//! - Any NULL operand yields NULL
//! - Integer overflow and integer division/modulo by zero are errors
//! - Float arithmetic follows IEEE: infinities and NaN are values
//! - Mixed signedness promotes to the signed type of twice the wider
//!   operand width, capped at 16 bytes

use super::DataType;
use crate::encoding::int128;
use bumpalo::Bump;
use eyre::{bail, Result};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Runtime value representation for SQL values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int1(i8),
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Int16(i128),
    UInt1(u8),
    UInt2(u16),
    UInt4(u32),
    UInt8(u64),
    UInt16(u128),
    Float4(f32),
    Float8(f64),
    Text(Cow<'a, str>),
    Blob(Cow<'a, [u8]>),
}

/// Arithmetic operators supported by [`Value::arithmetic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
}

/// Sign-aware 128-bit view of a numeric value.
///
/// `Unsigned` is only produced for u128 payloads above `i128::MAX`, so the
/// `Signed`/`Unsigned` split is itself ordered.
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

impl<'a> Value<'a> {
    /// Returns true if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for integer and float variants.
    pub fn is_numeric(&self) -> bool {
        self.numeric().is_some()
    }

    /// Returns the DataType tag for this value.
    ///
    /// NULL reports `Int8`, the engine's default column affinity for
    /// untyped NULL literals.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Int8,
            Value::Bool(_) => DataType::Bool,
            Value::Int1(_) => DataType::Int1,
            Value::Int2(_) => DataType::Int2,
            Value::Int4(_) => DataType::Int4,
            Value::Int8(_) => DataType::Int8,
            Value::Int16(_) => DataType::Int16,
            Value::UInt1(_) => DataType::UInt1,
            Value::UInt2(_) => DataType::UInt2,
            Value::UInt4(_) => DataType::UInt4,
            Value::UInt8(_) => DataType::UInt8,
            Value::UInt16(_) => DataType::UInt16,
            Value::Float4(_) => DataType::Float4,
            Value::Float8(_) => DataType::Float8,
            Value::Text(_) => DataType::Text,
            Value::Blob(_) => DataType::Blob,
        }
    }

    fn numeric(&self) -> Option<Numeric> {
        match self {
            Value::Int1(v) => Some(Numeric::Signed(*v as i128)),
            Value::Int2(v) => Some(Numeric::Signed(*v as i128)),
            Value::Int4(v) => Some(Numeric::Signed(*v as i128)),
            Value::Int8(v) => Some(Numeric::Signed(*v as i128)),
            Value::Int16(v) => Some(Numeric::Signed(*v)),
            Value::UInt1(v) => Some(Numeric::Signed(*v as i128)),
            Value::UInt2(v) => Some(Numeric::Signed(*v as i128)),
            Value::UInt4(v) => Some(Numeric::Signed(*v as i128)),
            Value::UInt8(v) => Some(Numeric::Signed(*v as i128)),
            Value::UInt16(v) => {
                if *v <= i128::MAX as u128 {
                    Some(Numeric::Signed(*v as i128))
                } else {
                    Some(Numeric::Unsigned(*v))
                }
            }
            Value::Float4(v) => Some(Numeric::Float(*v as f64)),
            Value::Float8(v) => Some(Numeric::Float(*v)),
            _ => None,
        }
    }

    /// Sort-group rank for cross-type ordering: Bool < numbers < Text < Blob.
    fn type_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Text(_) => 3,
            Value::Blob(_) => 4,
            _ => 2,
        }
    }

    /// Compares two values with SQL NULL semantics.
    ///
    /// Returns None if either value is NULL or a float side is NaN
    /// (SQL UNKNOWN). Numeric tags compare after promotion; everything
    /// else compares within its type group, with a stable cross-group
    /// order for mixed-type sorts.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        if self.is_null() || other.is_null() {
            return None;
        }

        if let (Some(a), Some(b)) = (self.numeric(), other.numeric()) {
            return compare_numeric(a, b);
        }

        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Blob(a), Value::Blob(b)) => Some(a.cmp(b)),
            _ => Some(self.type_rank().cmp(&other.type_rank())),
        }
    }

    /// Compares two values for sorting, treating incomparable pairs as equal.
    pub fn compare_for_sort(&self, other: &Value) -> Ordering {
        self.compare(other).unwrap_or(Ordering::Equal)
    }

    /// Applies an arithmetic operator with SQL NULL propagation.
    ///
    /// Integer operands promote to the wider type; mixed signedness
    /// promotes to the signed type of twice the wider width, capped at
    /// 16 bytes. Integer overflow and division by zero are errors; float
    /// arithmetic follows IEEE semantics.
    pub fn arithmetic(&self, op: ArithmeticOp, other: &Value) -> Result<Value<'static>> {
        if self.is_null() || other.is_null() {
            return Ok(Value::Null);
        }
        let (Some(a), Some(b)) = (self.numeric(), other.numeric()) else {
            bail!(
                "cannot apply {:?} to {:?} and {:?}",
                op,
                self.data_type(),
                other.data_type()
            );
        };

        match (a, b) {
            (Numeric::Float(_), _) | (_, Numeric::Float(_)) => {
                let fa = numeric_to_f64(a);
                let fb = numeric_to_f64(b);
                let r = float_arith(fa, fb, op);
                // Both-single-precision inputs stay single precision.
                if matches!((self, other), (Value::Float4(_), Value::Float4(_))) {
                    Ok(Value::Float4(r as f32))
                } else {
                    Ok(Value::Float8(r))
                }
            }
            _ => integer_arith(self, other, a, b, op),
        }
    }

    /// Attempts conversion to the requested data type.
    ///
    /// Widenings always succeed; narrowings succeed only when the value is
    /// representable in the target type without loss. NULL converts to NULL
    /// for every target.
    pub fn coerce_to(&self, target: DataType) -> Result<Value<'a>> {
        if self.is_null() {
            return Ok(Value::Null);
        }
        match self {
            Value::Bool(b) => match target {
                DataType::Bool => Ok(Value::Bool(*b)),
                _ => bail!("cannot convert Bool to {:?}", target),
            },
            Value::Text(s) => match target {
                DataType::Text => Ok(Value::Text(s.clone())),
                DataType::Blob => Ok(Value::Blob(match s {
                    Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
                    Cow::Owned(s) => Cow::Owned(s.as_bytes().to_vec()),
                })),
                _ => bail!("cannot convert Text to {:?}", target),
            },
            Value::Blob(b) => match target {
                DataType::Blob => Ok(Value::Blob(b.clone())),
                DataType::Text => match b {
                    Cow::Borrowed(b) => {
                        let s = std::str::from_utf8(b)
                            .map_err(|e| eyre::eyre!("cannot convert Blob to Text: {}", e))?;
                        Ok(Value::Text(Cow::Borrowed(s)))
                    }
                    Cow::Owned(b) => {
                        let s = std::str::from_utf8(b)
                            .map_err(|e| eyre::eyre!("cannot convert Blob to Text: {}", e))?;
                        Ok(Value::Text(Cow::Owned(s.to_string())))
                    }
                },
                _ => bail!("cannot convert Blob to {:?}", target),
            },
            _ => self.coerce_numeric(target),
        }
    }

    fn coerce_numeric(&self, target: DataType) -> Result<Value<'a>> {
        // Callers have filtered out null, bool, text and blob.
        let n = self.numeric().expect("numeric variant");
        match n {
            Numeric::Signed(v) => signed_to(v, self.data_type(), target),
            Numeric::Unsigned(v) => unsigned_to(v, self.data_type(), target),
            Numeric::Float(v) => float_to(v, self.data_type(), target),
        }
    }

    /// Formats the value as a display string.
    ///
    /// 128-bit integers render through the wide-integer codec; other
    /// integers use native formatting, which agrees with the codec in
    /// radix 10.
    pub fn display_string(&self) -> String {
        let mut scratch = [0u8; int128::MAX_ENCODED_LEN];
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Value::Int1(v) => v.to_string(),
            Value::Int2(v) => v.to_string(),
            Value::Int4(v) => v.to_string(),
            Value::Int8(v) => v.to_string(),
            Value::Int16(v) => {
                // Radix 10 on a full-size scratch buffer cannot fail.
                int128::format_i128_into(*v, int128::Int128Format::default(), &mut scratch)
                    .expect("radix 10 format")
                    .to_string()
            }
            Value::UInt1(v) => v.to_string(),
            Value::UInt2(v) => v.to_string(),
            Value::UInt4(v) => v.to_string(),
            Value::UInt8(v) => v.to_string(),
            Value::UInt16(v) => {
                int128::format_u128_into(*v, int128::Int128Format::default(), &mut scratch)
                    .expect("radix 10 format")
                    .to_string()
            }
            Value::Float4(v) => v.to_string(),
            Value::Float8(v) => v.to_string(),
            Value::Text(s) => s.to_string(),
            Value::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{:02x}", byte)).collect();
                format!("\\x{}", hex)
            }
        }
    }

    /// Clones this value to a fully-owned static lifetime.
    pub fn to_owned_static(&self) -> Value<'static> {
        match self {
            Value::Text(s) => Value::Text(Cow::Owned(s.to_string())),
            Value::Blob(b) => Value::Blob(Cow::Owned(b.to_vec())),
            other => other.clone_scalar(),
        }
    }

    /// Clones this value into an arena allocator with the arena's lifetime.
    pub fn clone_to_arena<'b>(&self, arena: &'b Bump) -> Value<'b> {
        match self {
            Value::Text(s) => Value::Text(Cow::Borrowed(arena.alloc_str(s))),
            Value::Blob(b) => Value::Blob(Cow::Borrowed(arena.alloc_slice_copy(b))),
            other => other.clone_scalar(),
        }
    }

    /// Copies a payload-free variant into any target lifetime.
    fn clone_scalar<'b>(&self) -> Value<'b> {
        match self {
            Value::Null => Value::Null,
            Value::Bool(v) => Value::Bool(*v),
            Value::Int1(v) => Value::Int1(*v),
            Value::Int2(v) => Value::Int2(*v),
            Value::Int4(v) => Value::Int4(*v),
            Value::Int8(v) => Value::Int8(*v),
            Value::Int16(v) => Value::Int16(*v),
            Value::UInt1(v) => Value::UInt1(*v),
            Value::UInt2(v) => Value::UInt2(*v),
            Value::UInt4(v) => Value::UInt4(*v),
            Value::UInt8(v) => Value::UInt8(*v),
            Value::UInt16(v) => Value::UInt16(*v),
            Value::Float4(v) => Value::Float4(*v),
            Value::Float8(v) => Value::Float8(*v),
            Value::Text(_) | Value::Blob(_) => unreachable!("payload variants handled by caller"),
        }
    }
}

fn numeric_to_f64(n: Numeric) -> f64 {
    match n {
        Numeric::Signed(v) => v as f64,
        Numeric::Unsigned(v) => v as f64,
        Numeric::Float(v) => v,
    }
}

fn compare_numeric(a: Numeric, b: Numeric) -> Option<Ordering> {
    match (a, b) {
        (Numeric::Signed(a), Numeric::Signed(b)) => Some(a.cmp(&b)),
        (Numeric::Unsigned(a), Numeric::Unsigned(b)) => Some(a.cmp(&b)),
        // Unsigned is only produced above i128::MAX, so it outranks any Signed.
        (Numeric::Signed(_), Numeric::Unsigned(_)) => Some(Ordering::Less),
        (Numeric::Unsigned(_), Numeric::Signed(_)) => Some(Ordering::Greater),
        (a, b) => {
            let fa = numeric_to_f64(a);
            let fb = numeric_to_f64(b);
            if fa.is_nan() || fb.is_nan() {
                None
            } else {
                fa.partial_cmp(&fb)
            }
        }
    }
}

fn float_arith(a: f64, b: f64, op: ArithmeticOp) -> f64 {
    match op {
        ArithmeticOp::Plus => a + b,
        ArithmeticOp::Minus => a - b,
        ArithmeticOp::Multiply => a * b,
        ArithmeticOp::Divide => a / b,
        ArithmeticOp::Modulo => a % b,
    }
}

/// Width in bytes of an integer data type.
fn int_width(dt: DataType) -> usize {
    dt.fixed_size().expect("integer type has fixed size")
}

/// Promoted result type for integer arithmetic.
fn promote_int(left: DataType, right: DataType) -> DataType {
    let width = int_width(left).max(int_width(right));
    match (left.is_signed_integer(), right.is_signed_integer()) {
        (true, true) => match width {
            1 => DataType::Int1,
            2 => DataType::Int2,
            4 => DataType::Int4,
            8 => DataType::Int8,
            _ => DataType::Int16,
        },
        (false, false) => match width {
            1 => DataType::UInt1,
            2 => DataType::UInt2,
            4 => DataType::UInt4,
            8 => DataType::UInt8,
            _ => DataType::UInt16,
        },
        // Mixed signedness widens to the signed type one step up so every
        // operand value stays representable.
        _ => match width {
            1 => DataType::Int2,
            2 => DataType::Int4,
            4 => DataType::Int8,
            _ => DataType::Int16,
        },
    }
}

fn make_signed(v: i128, dt: DataType) -> Result<Value<'static>> {
    let fits = match dt {
        DataType::Int1 => i8::try_from(v).map(|_| ()).is_ok(),
        DataType::Int2 => i16::try_from(v).map(|_| ()).is_ok(),
        DataType::Int4 => i32::try_from(v).map(|_| ()).is_ok(),
        DataType::Int8 => i64::try_from(v).map(|_| ()).is_ok(),
        _ => true,
    };
    if !fits {
        bail!("integer result {} out of range for {:?}", v, dt);
    }
    Ok(match dt {
        DataType::Int1 => Value::Int1(v as i8),
        DataType::Int2 => Value::Int2(v as i16),
        DataType::Int4 => Value::Int4(v as i32),
        DataType::Int8 => Value::Int8(v as i64),
        _ => Value::Int16(v),
    })
}

fn make_unsigned(v: u128, dt: DataType) -> Result<Value<'static>> {
    let fits = match dt {
        DataType::UInt1 => u8::try_from(v).map(|_| ()).is_ok(),
        DataType::UInt2 => u16::try_from(v).map(|_| ()).is_ok(),
        DataType::UInt4 => u32::try_from(v).map(|_| ()).is_ok(),
        DataType::UInt8 => u64::try_from(v).map(|_| ()).is_ok(),
        _ => true,
    };
    if !fits {
        bail!("integer result {} out of range for {:?}", v, dt);
    }
    Ok(match dt {
        DataType::UInt1 => Value::UInt1(v as u8),
        DataType::UInt2 => Value::UInt2(v as u16),
        DataType::UInt4 => Value::UInt4(v as u32),
        DataType::UInt8 => Value::UInt8(v as u64),
        _ => Value::UInt16(v),
    })
}

fn integer_arith(
    left: &Value,
    right: &Value,
    a: Numeric,
    b: Numeric,
    op: ArithmeticOp,
) -> Result<Value<'static>> {
    let target = promote_int(left.data_type(), right.data_type());

    if target.is_unsigned_integer() {
        let (ua, ub) = match (a, b) {
            (Numeric::Signed(a), Numeric::Signed(b)) => (a as u128, b as u128),
            (Numeric::Signed(a), Numeric::Unsigned(b)) => (a as u128, b),
            (Numeric::Unsigned(a), Numeric::Signed(b)) => (a, b as u128),
            (Numeric::Unsigned(a), Numeric::Unsigned(b)) => (a, b),
            _ => unreachable!("float operands handled by caller"),
        };
        let r = match op {
            ArithmeticOp::Plus => ua.checked_add(ub),
            ArithmeticOp::Minus => ua.checked_sub(ub),
            ArithmeticOp::Multiply => ua.checked_mul(ub),
            ArithmeticOp::Divide => {
                if ub == 0 {
                    bail!("division by zero");
                }
                ua.checked_div(ub)
            }
            ArithmeticOp::Modulo => {
                if ub == 0 {
                    bail!("modulo by zero");
                }
                ua.checked_rem(ub)
            }
        };
        let r = r.ok_or_else(|| {
            eyre::eyre!("unsigned integer overflow in {:?} of {} and {}", op, ua, ub)
        })?;
        make_unsigned(r, target)
    } else {
        let sa = match a {
            Numeric::Signed(v) => v,
            Numeric::Unsigned(v) => bail!("integer operand {} out of range for {:?}", v, target),
            Numeric::Float(_) => unreachable!("float operands handled by caller"),
        };
        let sb = match b {
            Numeric::Signed(v) => v,
            Numeric::Unsigned(v) => bail!("integer operand {} out of range for {:?}", v, target),
            Numeric::Float(_) => unreachable!("float operands handled by caller"),
        };
        let r = match op {
            ArithmeticOp::Plus => sa.checked_add(sb),
            ArithmeticOp::Minus => sa.checked_sub(sb),
            ArithmeticOp::Multiply => sa.checked_mul(sb),
            ArithmeticOp::Divide => {
                if sb == 0 {
                    bail!("division by zero");
                }
                sa.checked_div(sb)
            }
            ArithmeticOp::Modulo => {
                if sb == 0 {
                    bail!("modulo by zero");
                }
                sa.checked_rem(sb)
            }
        };
        let r = r.ok_or_else(|| {
            eyre::eyre!("signed integer overflow in {:?} of {} and {}", op, sa, sb)
        })?;
        make_signed(r, target)
    }
}

fn signed_to<'a>(v: i128, source: DataType, target: DataType) -> Result<Value<'a>> {
    let out = match target {
        DataType::Int1 | DataType::Int2 | DataType::Int4 | DataType::Int8 | DataType::Int16 => {
            make_signed(v, target)
        }
        DataType::UInt1 | DataType::UInt2 | DataType::UInt4 | DataType::UInt8
        | DataType::UInt16 => {
            if v < 0 {
                bail!("cannot convert negative value {} to {:?}", v, target)
            }
            make_unsigned(v as u128, target)
        }
        DataType::Float4 => Ok(Value::Float4(v as f32)),
        DataType::Float8 => Ok(Value::Float8(v as f64)),
        _ => bail!("cannot convert {:?} to {:?}", source, target),
    };
    out.map_err(|e| eyre::eyre!("cannot convert {:?} to {:?}: {}", source, target, e))
}

fn unsigned_to<'a>(v: u128, source: DataType, target: DataType) -> Result<Value<'a>> {
    let out = match target {
        DataType::UInt1 | DataType::UInt2 | DataType::UInt4 | DataType::UInt8
        | DataType::UInt16 => make_unsigned(v, target),
        DataType::Int1 | DataType::Int2 | DataType::Int4 | DataType::Int8 | DataType::Int16 => {
            if v > i128::MAX as u128 {
                bail!("value {} out of range for {:?}", v, target)
            }
            make_signed(v as i128, target)
        }
        DataType::Float4 => Ok(Value::Float4(v as f32)),
        DataType::Float8 => Ok(Value::Float8(v as f64)),
        _ => bail!("cannot convert {:?} to {:?}", source, target),
    };
    out.map_err(|e| eyre::eyre!("cannot convert {:?} to {:?}: {}", source, target, e))
}

fn float_to<'a>(v: f64, source: DataType, target: DataType) -> Result<Value<'a>> {
    match target {
        DataType::Float8 => Ok(Value::Float8(v)),
        DataType::Float4 => {
            let narrowed = v as f32;
            if v.is_nan() || narrowed as f64 == v {
                Ok(Value::Float4(narrowed))
            } else {
                bail!("cannot convert {:?} value {} to Float4 without loss", source, v)
            }
        }
        DataType::Int1
        | DataType::Int2
        | DataType::Int4
        | DataType::Int8
        | DataType::Int16
        | DataType::UInt1
        | DataType::UInt2
        | DataType::UInt4
        | DataType::UInt8
        | DataType::UInt16 => {
            if !v.is_finite() || v.fract() != 0.0 {
                bail!("cannot convert non-integral {:?} value {} to {:?}", source, v, target);
            }
            // f64 integrals up to 2^53 convert exactly; wider magnitudes
            // are still exact when the float itself is.
            if v < 0.0 {
                if v < i128::MIN as f64 {
                    bail!("value {} out of range for {:?}", v, target);
                }
                signed_to(v as i128, source, target)
            } else {
                // u128::MAX rounds up to exactly 2^128 as f64, one past the
                // range, so equality is already out of range.
                if v >= u128::MAX as f64 {
                    bail!("value {} out of range for {:?}", v, target);
                }
                unsigned_to(v as u128, source, target)
            }
        }
        _ => bail!("cannot convert {:?} to {:?}", source, target),
    }
}

impl<'a> From<bool> for Value<'a> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(v: i32) -> Self {
        Value::Int4(v)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(v: i64) -> Self {
        Value::Int8(v)
    }
}

impl<'a> From<i128> for Value<'a> {
    fn from(v: i128) -> Self {
        Value::Int16(v)
    }
}

impl<'a> From<u64> for Value<'a> {
    fn from(v: u64) -> Self {
        Value::UInt8(v)
    }
}

impl<'a> From<u128> for Value<'a> {
    fn from(v: u128) -> Self {
        Value::UInt16(v)
    }
}

impl<'a> From<f64> for Value<'a> {
    fn from(v: f64) -> Self {
        Value::Float8(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Text(Cow::Borrowed(v))
    }
}

impl<'a> From<String> for Value<'a> {
    fn from(v: String) -> Self {
        Value::Text(Cow::Owned(v))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(v: &'a [u8]) -> Self {
        Value::Blob(Cow::Borrowed(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_comparison_is_unknown() {
        assert_eq!(Value::Null.compare(&Value::Null), None);
        assert_eq!(Value::Null.compare(&Value::Int8(1)), None);
        assert_eq!(Value::Int8(1).compare(&Value::Null), None);
        assert_eq!(Value::Text(Cow::Borrowed("x")).compare(&Value::Null), None);
    }

    #[test]
    fn integer_promotion_comparison() {
        assert_eq!(
            Value::Int1(-1).compare(&Value::Int16(0)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Int2(300).compare(&Value::UInt1(255)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::UInt8(42).compare(&Value::Int4(42)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn unsigned_above_i128_max_outranks_all_signed() {
        let big = Value::UInt16(u128::MAX);
        assert_eq!(big.compare(&Value::Int16(i128::MAX)), Some(Ordering::Greater));
        assert_eq!(Value::Int16(i128::MIN).compare(&big), Some(Ordering::Less));
        assert_eq!(
            big.compare(&Value::UInt16(u128::MAX)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn int_float_comparison_promotes_to_float() {
        assert_eq!(
            Value::Int8(1).compare(&Value::Float8(1.5)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Float4(2.0).compare(&Value::Int1(2)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn nan_comparison_is_unknown() {
        assert_eq!(Value::Float8(f64::NAN).compare(&Value::Float8(1.0)), None);
        assert_eq!(Value::Int8(1).compare(&Value::Float4(f32::NAN)), None);
    }

    #[test]
    fn cross_type_rank_is_stable() {
        let b = Value::Bool(true);
        let n = Value::Int8(9);
        let t = Value::Text(Cow::Borrowed("a"));
        let blob = Value::Blob(Cow::Borrowed(&[1u8][..]));
        assert_eq!(b.compare(&n), Some(Ordering::Less));
        assert_eq!(n.compare(&t), Some(Ordering::Less));
        assert_eq!(t.compare(&blob), Some(Ordering::Less));
        assert_eq!(blob.compare(&b), Some(Ordering::Greater));
    }

    #[test]
    fn arithmetic_null_propagates() {
        let r = Value::Null.arithmetic(ArithmeticOp::Plus, &Value::Int8(1)).unwrap();
        assert!(r.is_null());
        let r = Value::Int8(1).arithmetic(ArithmeticOp::Divide, &Value::Null).unwrap();
        assert!(r.is_null());
    }

    #[test]
    fn arithmetic_same_type() {
        assert_eq!(
            Value::Int4(6).arithmetic(ArithmeticOp::Multiply, &Value::Int4(7)).unwrap(),
            Value::Int4(42)
        );
        assert_eq!(
            Value::UInt2(7).arithmetic(ArithmeticOp::Modulo, &Value::UInt2(4)).unwrap(),
            Value::UInt2(3)
        );
    }

    #[test]
    fn arithmetic_promotes_width() {
        assert_eq!(
            Value::Int1(1).arithmetic(ArithmeticOp::Plus, &Value::Int8(2)).unwrap(),
            Value::Int8(3)
        );
        // Mixed signedness goes one width up, signed.
        assert_eq!(
            Value::Int4(-1).arithmetic(ArithmeticOp::Plus, &Value::UInt4(u32::MAX)).unwrap(),
            Value::Int8(u32::MAX as i64 - 1)
        );
    }

    #[test]
    fn integer_division_by_zero_is_error() {
        assert!(Value::Int8(1)
            .arithmetic(ArithmeticOp::Divide, &Value::Int8(0))
            .is_err());
        assert!(Value::UInt8(1)
            .arithmetic(ArithmeticOp::Modulo, &Value::UInt8(0))
            .is_err());
    }

    #[test]
    fn float_division_by_zero_follows_ieee() {
        let r = Value::Float8(1.0)
            .arithmetic(ArithmeticOp::Divide, &Value::Float8(0.0))
            .unwrap();
        assert_eq!(r, Value::Float8(f64::INFINITY));
        let r = Value::Float8(0.0)
            .arithmetic(ArithmeticOp::Divide, &Value::Float8(0.0))
            .unwrap();
        assert!(matches!(r, Value::Float8(f) if f.is_nan()));
    }

    #[test]
    fn float4_pair_stays_single_precision() {
        let r = Value::Float4(1.5)
            .arithmetic(ArithmeticOp::Plus, &Value::Float4(2.0))
            .unwrap();
        assert_eq!(r, Value::Float4(3.5));
        let r = Value::Float4(1.5)
            .arithmetic(ArithmeticOp::Plus, &Value::Float8(2.0))
            .unwrap();
        assert_eq!(r, Value::Float8(3.5));
    }

    #[test]
    fn integer_overflow_is_error() {
        assert!(Value::Int16(i128::MAX)
            .arithmetic(ArithmeticOp::Plus, &Value::Int16(1))
            .is_err());
        assert!(Value::Int1(100)
            .arithmetic(ArithmeticOp::Multiply, &Value::Int1(2))
            .is_err());
        assert!(Value::UInt1(200)
            .arithmetic(ArithmeticOp::Plus, &Value::UInt1(100))
            .is_err());
    }

    #[test]
    fn arithmetic_on_text_is_error() {
        assert!(Value::Text(Cow::Borrowed("a"))
            .arithmetic(ArithmeticOp::Plus, &Value::Int8(1))
            .is_err());
        assert!(Value::Bool(true)
            .arithmetic(ArithmeticOp::Plus, &Value::Bool(false))
            .is_err());
    }

    #[test]
    fn coerce_widening_always_succeeds() {
        assert_eq!(
            Value::Int1(-5).coerce_to(DataType::Int16).unwrap(),
            Value::Int16(-5)
        );
        assert_eq!(
            Value::UInt2(9).coerce_to(DataType::UInt16).unwrap(),
            Value::UInt16(9)
        );
        assert_eq!(
            Value::Int4(3).coerce_to(DataType::Float8).unwrap(),
            Value::Float8(3.0)
        );
        assert_eq!(
            Value::Float4(1.5).coerce_to(DataType::Float8).unwrap(),
            Value::Float8(1.5)
        );
    }

    #[test]
    fn coerce_narrowing_checks_range() {
        assert_eq!(
            Value::Int8(127).coerce_to(DataType::Int1).unwrap(),
            Value::Int1(127)
        );
        assert!(Value::Int8(128).coerce_to(DataType::Int1).is_err());
        assert!(Value::Int4(-1).coerce_to(DataType::UInt4).is_err());
        assert_eq!(
            Value::UInt16(65535).coerce_to(DataType::UInt2).unwrap(),
            Value::UInt2(65535)
        );
        assert!(Value::UInt16(65536).coerce_to(DataType::UInt2).is_err());
    }

    #[test]
    fn coerce_float_to_int_requires_integral() {
        assert_eq!(
            Value::Float8(42.0).coerce_to(DataType::Int4).unwrap(),
            Value::Int4(42)
        );
        assert!(Value::Float8(42.5).coerce_to(DataType::Int4).is_err());
        assert!(Value::Float8(f64::INFINITY).coerce_to(DataType::Int8).is_err());
    }

    #[test]
    fn coerce_float_to_int_range_boundaries() {
        // u128::MAX as f64 rounds up to exactly 2^128; that float is one
        // past the unsigned range and must not saturate to u128::MAX.
        let two_pow_128 = u128::MAX as f64;
        assert!(Value::Float8(two_pow_128)
            .coerce_to(DataType::UInt16)
            .is_err());
        // The largest f64 below 2^128 (2^128 - 2^75) is representable.
        let just_below = f64::from_bits(two_pow_128.to_bits() - 1);
        assert_eq!(
            Value::Float8(just_below).coerce_to(DataType::UInt16).unwrap(),
            Value::UInt16(just_below as u128)
        );
        // -2^127 round-trips exactly at the signed lower bound.
        let min_i128 = i128::MIN as f64;
        assert_eq!(
            Value::Float8(min_i128).coerce_to(DataType::Int16).unwrap(),
            Value::Int16(i128::MIN)
        );
        let below_min = f64::from_bits(min_i128.to_bits() + 1);
        assert!(Value::Float8(below_min).coerce_to(DataType::Int16).is_err());
    }

    #[test]
    fn coerce_null_is_null() {
        assert!(Value::Null.coerce_to(DataType::Text).unwrap().is_null());
        assert!(Value::Null.coerce_to(DataType::UInt1).unwrap().is_null());
    }

    #[test]
    fn coerce_text_blob() {
        let t = Value::Text(Cow::Borrowed("hi"));
        assert_eq!(
            t.coerce_to(DataType::Blob).unwrap(),
            Value::Blob(Cow::Borrowed(&b"hi"[..]))
        );
        let b = Value::Blob(Cow::Borrowed(&b"hi"[..]));
        assert_eq!(
            b.coerce_to(DataType::Text).unwrap(),
            Value::Text(Cow::Borrowed("hi"))
        );
        let bad = Value::Blob(Cow::Borrowed(&[0xFFu8][..]));
        assert!(bad.coerce_to(DataType::Text).is_err());
        assert!(t.coerce_to(DataType::Int8).is_err());
    }

    #[test]
    fn display_wide_integers_use_codec() {
        assert_eq!(Value::Int16(i128::MIN).display_string(), i128::MIN.to_string());
        assert_eq!(Value::UInt16(u128::MAX).display_string(), u128::MAX.to_string());
        assert_eq!(Value::Null.display_string(), "NULL");
        assert_eq!(
            Value::Blob(Cow::Borrowed(&[0xDE, 0xAD][..])).display_string(),
            "\\xdead"
        );
    }

    #[test]
    fn clone_to_arena_borrows_from_arena() {
        let arena = Bump::new();
        let v = Value::Text(Cow::Owned("hello".to_string()));
        let cloned = v.clone_to_arena(&arena);
        assert!(matches!(cloned, Value::Text(Cow::Borrowed("hello"))));
        let b = Value::Blob(Cow::Owned(vec![1, 2, 3]));
        let cloned = b.clone_to_arena(&arena);
        assert!(matches!(cloned, Value::Blob(Cow::Borrowed(&[1, 2, 3]))));
    }

    #[test]
    fn to_owned_static_detaches_borrows() {
        let s = "payload".to_string();
        let owned = {
            let v = Value::Text(Cow::Borrowed(s.as_str()));
            v.to_owned_static()
        };
        assert_eq!(owned, Value::Text(Cow::Owned("payload".to_string())));
    }
}
