//! # Expression Tree
//!
//! The expression node hierarchy consumed by the query executor. The
//! parser builds a tree once; the executor evaluates it once per row,
//! clones it when a plan is duplicated for parallel scan workers, and
//! drops it with the plan.
//!
//! ## Design
//!
//! A closed set of variants dispatched by `match`, not an open trait
//! hierarchy: adding an operator kind extends one enum and the compiler
//! points at every match that needs a new arm.
//!
//! Children are held in `Box<Expression>` with exclusive ownership, so
//! the derived `Clone` is automatically the deep copy the executor needs:
//! no subtree is ever shared between a tree and its clone.
//!
//! ## Text Rendering
//!
//! `expression_text` (also the `Display` impl) reconstructs a textual
//! form for diagnostics and plan display. Compound operands are
//! parenthesized; the output is not guaranteed to round-trip through the
//! parser since the original formatting is not retained.

use crate::types::Value;
use std::fmt;

/// Unary operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Numeric identity (`+x`).
    Plus,
    /// Numeric negation (`-x`).
    Minus,
    /// Three-valued logical NOT.
    Not,
}

/// Arithmetic and comparison operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

/// Logical connective kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl BinaryOp {
    /// Returns true for the comparison operators.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Eq
                | BinaryOp::NotEq
                | BinaryOp::Lt
                | BinaryOp::LtEq
                | BinaryOp::Gt
                | BinaryOp::GtEq
        )
    }

    fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }
}

impl LogicalOp {
    fn symbol(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

/// Reference to a column of the current row set.
///
/// Indexes are resolved by the parser; `name` is the qualified column
/// name retained for diagnostics and plan display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: usize,
    pub column: usize,
    pub name: String,
}

/// A node of the expression tree.
///
/// Nodes are stateless between evaluations: `evaluate` never mutates the
/// tree or retains the row context, so a tree is `Send + Sync` and may be
/// evaluated concurrently by workers holding their own contexts.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Literal value.
    Constant(Value<'static>),
    /// Column of the current row.
    Column(ColumnRef),
    /// Unary operator over one operand.
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    /// Arithmetic or comparison operator over two operands.
    Binary {
        left: Box<Expression>,
        op: BinaryOp,
        right: Box<Expression>,
    },
    /// Logical connective over two boolean operands.
    Logical {
        left: Box<Expression>,
        op: LogicalOp,
        right: Box<Expression>,
    },
}

impl Expression {
    /// Creates a constant node from a literal.
    pub fn constant(value: impl Into<Value<'static>>) -> Self {
        Expression::Constant(value.into())
    }

    /// Creates the NULL literal node.
    pub fn null() -> Self {
        Expression::Constant(Value::Null)
    }

    /// Creates a column reference node.
    pub fn column(table: usize, column: usize, name: impl Into<String>) -> Self {
        Expression::Column(ColumnRef {
            table,
            column,
            name: name.into(),
        })
    }

    /// Creates a unary operator node owning its operand.
    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Creates an arithmetic or comparison node owning both operands.
    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Creates a logical connective node owning both operands.
    pub fn logical(left: Expression, op: LogicalOp, right: Expression) -> Self {
        Expression::Logical {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Returns true for leaf nodes (constants and column references).
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expression::Constant(_) | Expression::Column(_))
    }

    /// Reconstructs a textual form of the expression for diagnostics.
    pub fn expression_text(&self) -> String {
        match self {
            Expression::Constant(v) => constant_text(v),
            Expression::Column(c) => c.name.clone(),
            Expression::Unary { op, operand } => {
                let inner = operand.operand_text();
                match op {
                    UnaryOp::Plus => format!("+{}", inner),
                    UnaryOp::Minus => format!("-{}", inner),
                    UnaryOp::Not => format!("NOT {}", inner),
                }
            }
            Expression::Binary { left, op, right } => format!(
                "{} {} {}",
                left.operand_text(),
                op.symbol(),
                right.operand_text()
            ),
            Expression::Logical { left, op, right } => format!(
                "{} {} {}",
                left.operand_text(),
                op.symbol(),
                right.operand_text()
            ),
        }
    }

    /// Text of a node in operand position: compound nodes get parentheses.
    fn operand_text(&self) -> String {
        if self.is_leaf() {
            self.expression_text()
        } else {
            format!("({})", self.expression_text())
        }
    }
}

fn constant_text(value: &Value<'static>) -> String {
    match value {
        // Single quotes doubled, SQL string literal style.
        Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
        other => other.display_string(),
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression_text())
    }
}
