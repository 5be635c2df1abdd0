//! Integer operator implementations.
//!
//! All arithmetic is checked: overflow is an error, never a wrap. Division
//! truncates toward zero. Comparisons produce `1` or `0`.

use seek_ir::{BinaryOp, UnaryOp};

use crate::errors::{division_by_zero, integer_overflow};
use crate::EvalErrorKind;

/// Truthiness: zero is false, anything else is true.
#[inline]
pub fn is_truthy(value: i64) -> bool {
    value != 0
}

#[inline]
fn from_bool(b: bool) -> i64 {
    i64::from(b)
}

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> Result<i64, EvalErrorKind> {
    result.ok_or_else(|| integer_overflow(op_name))
}

/// Evaluate a binary operation on two integers.
pub fn evaluate_binary(op: BinaryOp, left: i64, right: i64) -> Result<i64, EvalErrorKind> {
    match op {
        BinaryOp::Add => checked_arith(left.checked_add(right), "addition"),
        BinaryOp::Sub => checked_arith(left.checked_sub(right), "subtraction"),
        BinaryOp::Mul => checked_arith(left.checked_mul(right), "multiplication"),
        BinaryOp::Div => {
            if right == 0 {
                Err(division_by_zero())
            } else {
                checked_arith(left.checked_div(right), "division")
            }
        }
        BinaryOp::Eq => Ok(from_bool(left == right)),
        BinaryOp::NotEq => Ok(from_bool(left != right)),
        BinaryOp::Lt => Ok(from_bool(left < right)),
        BinaryOp::LtEq => Ok(from_bool(left <= right)),
        BinaryOp::Gt => Ok(from_bool(left > right)),
        BinaryOp::GtEq => Ok(from_bool(left >= right)),
    }
}

/// Evaluate a prefix operation.
pub fn evaluate_unary(op: UnaryOp, operand: i64) -> Result<i64, EvalErrorKind> {
    match op {
        UnaryOp::Neg => checked_arith(operand.checked_neg(), "negation"),
        UnaryOp::Not => Ok(from_bool(!is_truthy(operand))),
    }
}
