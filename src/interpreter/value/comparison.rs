use crate::{
    error::RuntimeError,
    interpreter::{
        context::Context,
        evaluator::core::ExecResult,
        value::{
            class::{EQ_METHOD, LT_METHOD},
            core::{Object, ObjectHolder},
        },
    },
};

/// Tests two values for equality.
///
/// `None` equals `None`. Two numbers, two strings, or two booleans compare
/// by value. When the left operand is a class instance providing
/// `__eq__(rhs)`, the comparison is delegated to it and the returned
/// value's truthiness is the result. Every other combination is an error.
///
/// # Errors
/// Fails when the values are of incomparable kinds or when a delegated
/// `__eq__` call fails.
pub fn equal(lhs: &ObjectHolder,
             rhs: &ObjectHolder,
             context: &mut dyn Context,
             line: usize)
             -> ExecResult<bool> {
    if lhs.get().is_none() && rhs.get().is_none() {
        return Ok(true);
    }

    match (lhs.get(), rhs.get()) {
        (Some(Object::Number(l)), Some(Object::Number(r))) => return Ok(l == r),
        (Some(Object::String(l)), Some(Object::String(r))) => return Ok(l == r),
        (Some(Object::Bool(l)), Some(Object::Bool(r))) => return Ok(l == r),
        _ => {},
    }

    if lhs.as_instance().is_some_and(|i| i.has_method(EQ_METHOD, 1)) {
        let result = lhs.call_method(EQ_METHOD, std::slice::from_ref(rhs), context, line)?;
        return Ok(result.is_true());
    }

    Err(RuntimeError::NotComparable { left:  lhs.type_name(),
                                      right: rhs.type_name(),
                                      line }.into())
}

/// Tests whether `lhs` orders before `rhs`.
///
/// Two numbers, two strings, or two booleans use their natural ordering
/// (`False` orders before `True`). When the left operand is a class
/// instance providing `__lt__(rhs)`, the comparison is delegated to it and
/// the returned value's truthiness is the result. Every other combination
/// is an error.
///
/// # Errors
/// Fails when the values are of incomparable kinds or when a delegated
/// `__lt__` call fails.
pub fn less(lhs: &ObjectHolder,
            rhs: &ObjectHolder,
            context: &mut dyn Context,
            line: usize)
            -> ExecResult<bool> {
    match (lhs.get(), rhs.get()) {
        (Some(Object::Number(l)), Some(Object::Number(r))) => return Ok(l < r),
        (Some(Object::String(l)), Some(Object::String(r))) => return Ok(l < r),
        (Some(Object::Bool(l)), Some(Object::Bool(r))) => return Ok(l < r),
        _ => {},
    }

    if lhs.as_instance().is_some_and(|i| i.has_method(LT_METHOD, 1)) {
        let result = lhs.call_method(LT_METHOD, std::slice::from_ref(rhs), context, line)?;
        return Ok(result.is_true());
    }

    Err(RuntimeError::NotComparable { left:  lhs.type_name(),
                                      right: rhs.type_name(),
                                      line }.into())
}

/// Returns the opposite of [`equal`].
///
/// # Errors
/// Propagates the failures of [`equal`].
pub fn not_equal(lhs: &ObjectHolder,
                 rhs: &ObjectHolder,
                 context: &mut dyn Context,
                 line: usize)
                 -> ExecResult<bool> {
    Ok(!equal(lhs, rhs, context, line)?)
}

/// Returns `lhs > rhs`, built from [`less`] and [`equal`].
///
/// # Errors
/// Propagates the failures of [`less`] and [`equal`].
pub fn greater(lhs: &ObjectHolder,
               rhs: &ObjectHolder,
               context: &mut dyn Context,
               line: usize)
               -> ExecResult<bool> {
    Ok(!less(lhs, rhs, context, line)? && !equal(lhs, rhs, context, line)?)
}

/// Returns `lhs <= rhs`, built from [`less`] and [`equal`].
///
/// # Errors
/// Propagates the failures of [`less`] and [`equal`].
pub fn less_or_equal(lhs: &ObjectHolder,
                     rhs: &ObjectHolder,
                     context: &mut dyn Context,
                     line: usize)
                     -> ExecResult<bool> {
    Ok(less(lhs, rhs, context, line)? || equal(lhs, rhs, context, line)?)
}

/// Returns the opposite of [`less`].
///
/// # Errors
/// Propagates the failures of [`less`].
pub fn greater_or_equal(lhs: &ObjectHolder,
                        rhs: &ObjectHolder,
                        context: &mut dyn Context,
                        line: usize)
                        -> ExecResult<bool> {
    Ok(!less(lhs, rhs, context, line)?)
}
