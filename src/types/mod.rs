//! # Unified Type System for OpalDB
//!
//! This module provides the canonical type system shared by the key
//! encoding layer and the expression engine.
//!
//! ## Module Structure
//!
//! - `data_type`: canonical `DataType` enum and `NumericKeyType` category
//! - `value`: runtime `Value<'a>` with zero-copy payloads
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `DataType` | Storage-level type discriminant |
//! | `NumericKeyType` | Numeric category tag for index keys |
//! | `Value<'a>` | Runtime value (zero-copy from pages) |
//! | `ArithmeticOp` | Arithmetic operator selector for `Value` |
//!
//! ## Usage
//!
//! ```ignore
//! use opaldb::types::{DataType, Value};
//!
//! let val = Value::Int8(42);
//! assert_eq!(val.data_type(), DataType::Int8);
//! assert!(val.compare(&Value::Null).is_none());
//! ```

mod data_type;
mod value;

pub use data_type::{DataType, NumericKeyType};
pub use value::{ArithmeticOp, Value};
