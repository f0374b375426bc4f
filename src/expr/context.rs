//! # Row Context Interface
//!
//! The expression tree reads column values through the [`RowContext`]
//! trait. The query executor owns the implementation; during a scan it
//! positions its context on each row in turn and re-evaluates the same
//! tree. The context is the only mutable, thread-confined state on the
//! evaluation path; the tree itself is read-only during evaluation, so
//! one tree may be evaluated concurrently against per-thread contexts.

use crate::types::{DataType, Value};
use eyre::{bail, Result};

/// Source of column values for expression evaluation.
///
/// `table` and `column` are executor-assigned indexes into the current
/// row set, resolved by the parser before the tree reaches this core.
pub trait RowContext {
    /// Returns the value of a column in the current row.
    ///
    /// The value may borrow from the context's row storage; evaluation
    /// promotes it to an owned value before it escapes.
    fn column_value(&self, table: usize, column: usize) -> Result<Value<'_>>;

    /// Returns the declared type of a column.
    fn column_type(&self, table: usize, column: usize) -> Result<DataType>;
}

/// Context with no columns, for evaluating constant-only expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRowContext;

impl RowContext for EmptyRowContext {
    fn column_value(&self, table: usize, column: usize) -> Result<Value<'_>> {
        bail!("no column {}.{} in constant context", table, column)
    }

    fn column_type(&self, table: usize, column: usize) -> Result<DataType> {
        bail!("no column {}.{} in constant context", table, column)
    }
}
