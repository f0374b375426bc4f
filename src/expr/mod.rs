//! # Expression Engine
//!
//! Evaluation of SQL-style expression trees against row data during query
//! execution. The parser (outside this core) builds a tree of
//! [`Expression`] nodes; the executor evaluates it once per row through a
//! [`RowContext`], clones it for parallel scan workers, and renders it
//! back to text for plan display.
//!
//! ## Module Structure
//!
//! - `tree`: the `Expression` node hierarchy, operator enums, text rendering
//! - `eval`: pure evaluation with SQL three-valued logic
//! - `context`: the `RowContext` collaborator interface
//!
//! ## Evaluation Model
//!
//! Evaluation is a pure function of the tree and the row context: no
//! blocking, no I/O, no state retained between calls. Runtime type errors
//! (a logical operator over non-boolean operands, a failed conversion) and
//! arithmetic errors (integer division by zero, overflow) abort the
//! current evaluation with an error and leave the tree intact; NULL inputs
//! follow SQL three-valued semantics instead of erroring.
//!
//! ## Usage
//!
//! ```ignore
//! use opaldb::expr::{BinaryOp, Expression};
//!
//! // WHERE price * 2 > 100
//! let filter = Expression::binary(
//!     Expression::binary(
//!         Expression::column(0, 2, "price"),
//!         BinaryOp::Multiply,
//!         Expression::constant(2i64),
//!     ),
//!     BinaryOp::Gt,
//!     Expression::constant(100i64),
//! );
//! let keep = filter.evaluate(&row_ctx)?;
//! ```

mod context;
mod eval;
mod tree;

pub use context::{EmptyRowContext, RowContext};
pub use tree::{BinaryOp, ColumnRef, Expression, LogicalOp, UnaryOp};
