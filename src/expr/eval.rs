//! # Expression Evaluation
//!
//! Pure evaluation of an [`Expression`] against a [`RowContext`]. Nothing
//! here mutates the tree or retains the context; every call is a pure
//! function of the tree and the row, which is what lets one tree serve
//! many scan workers concurrently.
//!
//! ## Semantics
//!
//! - Arithmetic and comparison go through the dynamic value's promotion
//!   rules (`Value::arithmetic` / `Value::compare`).
//! - Comparisons yield `Bool`, or `Null` when either side is NULL or the
//!   comparison is unknown (NaN).
//! - Logical connectives use SQL three-valued logic over `Bool`/`Null`
//!   operands; any other operand type is a runtime type error. Both
//!   operands are always evaluated before the truth table is applied, so
//!   a type error on the right side surfaces even when the left side
//!   already decides the result.
//! - Errors abort evaluation of the current expression and propagate to
//!   the statement executor; the tree remains valid and reusable.

use super::context::RowContext;
use super::tree::{BinaryOp, Expression, LogicalOp, UnaryOp};
use crate::types::{ArithmeticOp, Value};
use eyre::{bail, Result};
use std::cmp::Ordering;

impl Expression {
    /// Evaluates the expression against a row context.
    ///
    /// Returns a fully owned value so the result may outlive both the
    /// context's row and the tree.
    pub fn evaluate(&self, ctx: &dyn RowContext) -> Result<Value<'static>> {
        match self {
            Expression::Constant(v) => Ok(v.clone()),
            Expression::Column(c) => Ok(ctx.column_value(c.table, c.column)?.to_owned_static()),
            Expression::Unary { op, operand } => eval_unary(*op, &operand.evaluate(ctx)?),
            Expression::Binary { left, op, right } => {
                let lhs = left.evaluate(ctx)?;
                let rhs = right.evaluate(ctx)?;
                eval_binary(&lhs, *op, &rhs)
            }
            Expression::Logical { left, op, right } => {
                // Reference behavior: both operands are evaluated and
                // type-checked, never short-circuited.
                let lhs = left.evaluate(ctx)?;
                let rhs = right.evaluate(ctx)?;
                eval_logical(&lhs, *op, &rhs)
            }
        }
    }
}

fn eval_unary(op: UnaryOp, operand: &Value<'static>) -> Result<Value<'static>> {
    if operand.is_null() {
        return Ok(Value::Null);
    }
    match op {
        UnaryOp::Plus => {
            if operand.is_numeric() {
                Ok(operand.clone())
            } else {
                bail!("unary + applied to {:?} operand", operand.data_type())
            }
        }
        UnaryOp::Minus => negate(operand),
        UnaryOp::Not => match operand {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            other => bail!("NOT applied to non-boolean {:?} operand", other.data_type()),
        },
    }
}

/// Numeric negation keeping the operand's width; unsigned operands flip
/// to the signed type of the same width when the magnitude fits.
fn negate(value: &Value<'static>) -> Result<Value<'static>> {
    let overflow = || eyre::eyre!("negation overflows {:?}", value.data_type());
    match value {
        Value::Int1(v) => v.checked_neg().map(Value::Int1).ok_or_else(overflow),
        Value::Int2(v) => v.checked_neg().map(Value::Int2).ok_or_else(overflow),
        Value::Int4(v) => v.checked_neg().map(Value::Int4).ok_or_else(overflow),
        Value::Int8(v) => v.checked_neg().map(Value::Int8).ok_or_else(overflow),
        Value::Int16(v) => v.checked_neg().map(Value::Int16).ok_or_else(overflow),
        Value::UInt1(v) => i8::try_from(*v)
            .ok()
            .map(|v| Value::Int1(-v))
            .ok_or_else(overflow),
        Value::UInt2(v) => i16::try_from(*v)
            .ok()
            .map(|v| Value::Int2(-v))
            .ok_or_else(overflow),
        Value::UInt4(v) => i32::try_from(*v)
            .ok()
            .map(|v| Value::Int4(-v))
            .ok_or_else(overflow),
        Value::UInt8(v) => i64::try_from(*v)
            .ok()
            .map(|v| Value::Int8(-v))
            .ok_or_else(overflow),
        Value::UInt16(v) => i128::try_from(*v)
            .ok()
            .map(|v| Value::Int16(-v))
            .ok_or_else(overflow),
        Value::Float4(v) => Ok(Value::Float4(-v)),
        Value::Float8(v) => Ok(Value::Float8(-v)),
        other => bail!("unary - applied to {:?} operand", other.data_type()),
    }
}

fn eval_binary(lhs: &Value<'static>, op: BinaryOp, rhs: &Value<'static>) -> Result<Value<'static>> {
    let arith = match op {
        BinaryOp::Add => Some(ArithmeticOp::Plus),
        BinaryOp::Subtract => Some(ArithmeticOp::Minus),
        BinaryOp::Multiply => Some(ArithmeticOp::Multiply),
        BinaryOp::Divide => Some(ArithmeticOp::Divide),
        BinaryOp::Modulo => Some(ArithmeticOp::Modulo),
        _ => None,
    };
    if let Some(arith) = arith {
        return lhs.arithmetic(arith, rhs);
    }

    // Comparison: unknown (NULL or NaN side) yields NULL, not an error.
    let Some(ordering) = lhs.compare(rhs) else {
        return Ok(Value::Null);
    };
    let result = match op {
        BinaryOp::Eq => ordering == Ordering::Equal,
        BinaryOp::NotEq => ordering != Ordering::Equal,
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        _ => unreachable!("arithmetic handled above"),
    };
    Ok(Value::Bool(result))
}

/// Maps a logical operand to three-valued truth: Some(bool) or None for
/// NULL. Any other type is a runtime type error.
fn truth(value: &Value<'static>, op: LogicalOp) -> Result<Option<bool>> {
    match value {
        Value::Bool(b) => Ok(Some(*b)),
        Value::Null => Ok(None),
        other => bail!(
            "{:?} operand of {:?} is not boolean",
            other.data_type(),
            op
        ),
    }
}

fn eval_logical(
    lhs: &Value<'static>,
    op: LogicalOp,
    rhs: &Value<'static>,
) -> Result<Value<'static>> {
    let a = truth(lhs, op)?;
    let b = truth(rhs, op)?;
    let result = match op {
        LogicalOp::And => match (a, b) {
            (Some(false), _) | (_, Some(false)) => Some(false),
            (Some(true), Some(true)) => Some(true),
            _ => None,
        },
        LogicalOp::Or => match (a, b) {
            (Some(true), _) | (_, Some(true)) => Some(true),
            (Some(false), Some(false)) => Some(false),
            _ => None,
        },
    };
    Ok(result.map(Value::Bool).unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::super::context::EmptyRowContext;
    use super::*;

    fn eval(e: &Expression) -> Result<Value<'static>> {
        e.evaluate(&EmptyRowContext)
    }

    fn lit(v: impl Into<Value<'static>>) -> Expression {
        Expression::constant(v)
    }

    #[test]
    fn constant_evaluates_to_itself() {
        assert_eq!(eval(&lit(42i64)).unwrap(), Value::Int8(42));
        assert!(eval(&Expression::null()).unwrap().is_null());
    }

    #[test]
    fn arithmetic_with_promotion() {
        let e = Expression::binary(lit(40i64), BinaryOp::Add, lit(2i64));
        assert_eq!(eval(&e).unwrap(), Value::Int8(42));

        let e = Expression::binary(lit(1i64), BinaryOp::Divide, lit(2.0f64));
        assert_eq!(eval(&e).unwrap(), Value::Float8(0.5));
    }

    #[test]
    fn integer_division_by_zero_is_runtime_error() {
        let e = Expression::binary(lit(1i64), BinaryOp::Divide, lit(0i64));
        assert!(eval(&e).is_err());
        let e = Expression::binary(lit(1i64), BinaryOp::Modulo, lit(0i64));
        assert!(eval(&e).is_err());
    }

    #[test]
    fn float_division_by_zero_yields_infinity() {
        let e = Expression::binary(lit(1.0f64), BinaryOp::Divide, lit(0.0f64));
        assert_eq!(eval(&e).unwrap(), Value::Float8(f64::INFINITY));
    }

    #[test]
    fn comparison_yields_bool_or_null() {
        let e = Expression::binary(lit(1i64), BinaryOp::Lt, lit(2i64));
        assert_eq!(eval(&e).unwrap(), Value::Bool(true));

        let e = Expression::binary(lit(1i64), BinaryOp::Eq, Expression::null());
        assert!(eval(&e).unwrap().is_null());

        let e = Expression::binary(lit(f64::NAN), BinaryOp::Eq, lit(f64::NAN));
        assert!(eval(&e).unwrap().is_null());
    }

    #[test]
    fn unary_minus_keeps_width() {
        let e = Expression::unary(UnaryOp::Minus, lit(Value::Int2(7)));
        assert_eq!(eval(&e).unwrap(), Value::Int2(-7));

        let e = Expression::unary(UnaryOp::Minus, lit(Value::UInt1(5)));
        assert_eq!(eval(&e).unwrap(), Value::Int1(-5));

        // i16::MIN cannot be negated in its own width.
        let e = Expression::unary(UnaryOp::Minus, lit(Value::Int2(i16::MIN)));
        assert!(eval(&e).is_err());

        // 200 exceeds the signed 1-byte range.
        let e = Expression::unary(UnaryOp::Minus, lit(Value::UInt1(200)));
        assert!(eval(&e).is_err());
    }

    #[test]
    fn unary_plus_requires_numeric() {
        let e = Expression::unary(UnaryOp::Plus, lit(3i64));
        assert_eq!(eval(&e).unwrap(), Value::Int8(3));
        let e = Expression::unary(UnaryOp::Plus, lit("x"));
        assert!(eval(&e).is_err());
        let e = Expression::unary(UnaryOp::Plus, Expression::null());
        assert!(eval(&e).unwrap().is_null());
    }

    #[test]
    fn not_is_three_valued() {
        let e = Expression::unary(UnaryOp::Not, lit(true));
        assert_eq!(eval(&e).unwrap(), Value::Bool(false));
        let e = Expression::unary(UnaryOp::Not, Expression::null());
        assert!(eval(&e).unwrap().is_null());
        let e = Expression::unary(UnaryOp::Not, lit(1i64));
        assert!(eval(&e).is_err());
    }

    #[test]
    fn logical_requires_boolean_operands_on_both_sides() {
        // Even when the left side decides the result, the right side is
        // evaluated and type-checked.
        let e = Expression::logical(lit(true), LogicalOp::Or, lit(1i64));
        assert!(eval(&e).is_err());
        let e = Expression::logical(lit(false), LogicalOp::And, lit("x"));
        assert!(eval(&e).is_err());
    }

    #[test]
    fn or_truth_table() {
        let cases = [
            (Some(true), Some(true), Some(true)),
            (Some(true), Some(false), Some(true)),
            (Some(true), None, Some(true)),
            (Some(false), Some(true), Some(true)),
            (Some(false), Some(false), Some(false)),
            (Some(false), None, None),
            (None, Some(true), Some(true)),
            (None, Some(false), None),
            (None, None, None),
        ];
        for (a, b, expected) in cases {
            let e = Expression::logical(bool_lit(a), LogicalOp::Or, bool_lit(b));
            assert_eq!(
                eval(&e).unwrap(),
                expected.map(Value::Bool).unwrap_or(Value::Null),
                "{:?} OR {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn and_truth_table() {
        let cases = [
            (Some(true), Some(true), Some(true)),
            (Some(true), Some(false), Some(false)),
            (Some(true), None, None),
            (Some(false), Some(true), Some(false)),
            (Some(false), Some(false), Some(false)),
            (Some(false), None, Some(false)),
            (None, Some(true), None),
            (None, Some(false), Some(false)),
            (None, None, None),
        ];
        for (a, b, expected) in cases {
            let e = Expression::logical(bool_lit(a), LogicalOp::And, bool_lit(b));
            assert_eq!(
                eval(&e).unwrap(),
                expected.map(Value::Bool).unwrap_or(Value::Null),
                "{:?} AND {:?}",
                a,
                b
            );
        }
    }

    fn bool_lit(v: Option<bool>) -> Expression {
        match v {
            Some(b) => Expression::constant(b),
            None => Expression::null(),
        }
    }

    #[test]
    fn tree_remains_usable_after_error() {
        let e = Expression::binary(lit(1i64), BinaryOp::Divide, Expression::column(0, 0, "d"));
        assert!(eval(&e).is_err());
        // Same tree, a context that resolves the column this time.
        struct OneColumn;
        impl super::super::context::RowContext for OneColumn {
            fn column_value(&self, _: usize, _: usize) -> Result<Value<'_>> {
                Ok(Value::Int8(4))
            }
            fn column_type(&self, _: usize, _: usize) -> Result<crate::types::DataType> {
                Ok(crate::types::DataType::Int8)
            }
        }
        assert_eq!(e.evaluate(&OneColumn).unwrap(), Value::Int8(0));
    }
}
