use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        context::Context,
        evaluator::core::ExecResult,
        value::{
            class::ADD_METHOD,
            comparison,
            core::{Closure, ObjectHolder},
        },
    },
};

/// Evaluates a binary operation.
///
/// The operand expressions are passed unevaluated so that `and` and `or`
/// can short-circuit: `and` skips the right operand when the left is falsy,
/// `or` skips it when the left is truthy. All other operators evaluate both
/// operands left to right and dispatch on the operator group.
///
/// # Errors
/// Fails when an operand evaluation fails or the operator is not defined
/// for the operand kinds.
pub fn eval_binary_op(left: &Expr,
                      op: BinaryOperator,
                      right: &Expr,
                      closure: &mut Closure,
                      context: &mut dyn Context,
                      line: usize)
                      -> ExecResult {
    match op {
        BinaryOperator::And => {
            if !left.eval(closure, context)?.is_true() {
                return Ok(false.into());
            }
            Ok(right.eval(closure, context)?.is_true().into())
        },
        BinaryOperator::Or => {
            if left.eval(closure, context)?.is_true() {
                return Ok(true.into());
            }
            Ok(right.eval(closure, context)?.is_true().into())
        },
        BinaryOperator::Add => {
            let lhs = left.eval(closure, context)?;
            let rhs = right.eval(closure, context)?;
            eval_add(&lhs, &rhs, context, line)
        },
        BinaryOperator::Sub | BinaryOperator::Mul | BinaryOperator::Div => {
            let lhs = left.eval(closure, context)?;
            let rhs = right.eval(closure, context)?;
            eval_arithmetic(op, &lhs, &rhs, line)
        },
        BinaryOperator::Equal
        | BinaryOperator::NotEqual
        | BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => {
            let lhs = left.eval(closure, context)?;
            let rhs = right.eval(closure, context)?;
            Ok(eval_comparison(op, &lhs, &rhs, context, line)?.into())
        },
    }
}

/// Evaluates `+`.
///
/// Supported: number + number, string + string, and instance + anything
/// when the instance provides `__add__(rhs)`.
fn eval_add(lhs: &ObjectHolder,
            rhs: &ObjectHolder,
            context: &mut dyn Context,
            line: usize)
            -> ExecResult {
    if let (Some(l), Some(r)) = (lhs.as_number(), rhs.as_number()) {
        let sum = l.checked_add(r).ok_or(RuntimeError::Overflow { line })?;
        return Ok(sum.into());
    }

    if let (Some(l), Some(r)) = (lhs.as_string(), rhs.as_string()) {
        let mut value = String::with_capacity(l.len() + r.len());
        value.push_str(l);
        value.push_str(r);
        return Ok(value.into());
    }

    if lhs.as_instance().is_some_and(|i| i.has_method(ADD_METHOD, 1)) {
        return lhs.call_method(ADD_METHOD, std::slice::from_ref(rhs), context, line);
    }

    Err(RuntimeError::IncompatibleOperands { op:    BinaryOperator::Add,
                                             left:  lhs.type_name(),
                                             right: rhs.type_name(),
                                             line }.into())
}

/// Evaluates `-`, `*`, and `/`, which are defined for numbers only.
fn eval_arithmetic(op: BinaryOperator,
                   lhs: &ObjectHolder,
                   rhs: &ObjectHolder,
                   line: usize)
                   -> ExecResult {
    let (Some(l), Some(r)) = (lhs.as_number(), rhs.as_number()) else {
        return Err(RuntimeError::IncompatibleOperands { op,
                                                        left: lhs.type_name(),
                                                        right: rhs.type_name(),
                                                        line }.into());
    };

    let result = match op {
        BinaryOperator::Sub => l.checked_sub(r),
        BinaryOperator::Mul => l.checked_mul(r),
        BinaryOperator::Div => {
            if r == 0 {
                return Err(RuntimeError::DivisionByZero { line }.into());
            }
            l.checked_div(r)
        },
        _ => unreachable!("eval_arithmetic used with non arithmetic operator"),
    };

    Ok(result.ok_or(RuntimeError::Overflow { line })?.into())
}

/// Dispatches a comparison operator to the comparison primitives.
fn eval_comparison(op: BinaryOperator,
                   lhs: &ObjectHolder,
                   rhs: &ObjectHolder,
                   context: &mut dyn Context,
                   line: usize)
                   -> ExecResult<bool> {
    match op {
        BinaryOperator::Equal => comparison::equal(lhs, rhs, context, line),
        BinaryOperator::NotEqual => comparison::not_equal(lhs, rhs, context, line),
        BinaryOperator::Less => comparison::less(lhs, rhs, context, line),
        BinaryOperator::Greater => comparison::greater(lhs, rhs, context, line),
        BinaryOperator::LessEqual => comparison::less_or_equal(lhs, rhs, context, line),
        BinaryOperator::GreaterEqual => comparison::greater_or_equal(lhs, rhs, context, line),
        _ => unreachable!("eval_comparison used with non comparison operator"),
    }
}
