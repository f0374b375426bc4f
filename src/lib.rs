//! # OpalDB Core - Embedded Database Engine Core
//!
//! OpalDB is the indexing and predicate-evaluation core of an embedded
//! relational database engine. It covers two tightly coupled subsystems:
//!
//! - **Ordered key encoding**: type-specific key traits that map typed
//!   column values into byte sequences whose unsigned lexicographic order
//!   equals the values' natural order, for use in ordered index structures
//! - **Expression engine**: SQL-style expression trees (constants, column
//!   references, arithmetic, comparisons, logical connectives) evaluated
//!   against row data with SQL three-valued semantics
//!
//! ## Quick Start
//!
//! ```ignore
//! use opaldb::keys::{key_traits, KeyBuf};
//! use opaldb::expr::{BinaryOp, Expression};
//! use opaldb::types::{DataType, Value};
//!
//! // Encode an index key.
//! let traits = key_traits(DataType::Int8).unwrap();
//! let mut key = KeyBuf::new();
//! traits.encode_value(&Value::Int8(42), &mut key)?;
//!
//! // Evaluate a predicate.
//! let filter = Expression::binary(
//!     Expression::column(0, 0, "id"),
//!     BinaryOp::Eq,
//!     Expression::constant(42i64),
//! );
//! let keep = filter.evaluate(&row_ctx)?;
//! ```
//!
//! ## Architecture
//!
//! The core sits between the SQL front end and the storage engine:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │    SQL Parser / Plan Builder         │   builds Expression trees
//! ├─────────────────────────────────────┤
//! │    Query Executor                    │   supplies RowContext per row
//! ├──────────────────┬──────────────────┤
//! │  expr (evaluate) │  keys (encode)    │   this crate
//! ├──────────────────┴──────────────────┤
//! │    types (Value / DataType)          │   this crate
//! ├─────────────────────────────────────┤
//! │    B-Tree Storage Engine             │   persists encoded keys
//! └─────────────────────────────────────┘
//! ```
//!
//! The parser, executor, and storage layers are external collaborators:
//! this crate consumes fully built expression trees and produces encoded
//! keys; it never parses text and never touches disk.
//!
//! ## Concurrency
//!
//! Everything in this crate is synchronous, non-blocking, and free of
//! global mutable state. Key traits are stateless process-wide singletons;
//! expression trees are read-only during evaluation, so one tree may serve
//! any number of worker threads as long as each holds its own `RowContext`.
//!
//! ## Module Overview
//!
//! - [`types`]: `DataType` discriminants and the dynamic `Value`
//! - [`keys`]: key traits family and the ordered encodings
//! - [`expr`]: expression tree and evaluator
//! - [`encoding`]: 128-bit integer text codec

pub mod encoding;
pub mod expr;
pub mod keys;
pub mod types;

pub use expr::{BinaryOp, Expression, LogicalOp, RowContext, UnaryOp};
pub use keys::{key_traits, KeyBuf, KeySize, KeyTraits};
pub use types::{DataType, NumericKeyType, Value};
