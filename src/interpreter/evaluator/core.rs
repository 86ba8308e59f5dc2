use std::rc::Rc;

use crate::{
    ast::{Expr, LiteralValue, Statement},
    error::RuntimeError,
    interpreter::{
        context::Context,
        evaluator::binary::eval_binary_op,
        value::{
            class::{ClassInstance, INIT_METHOD},
            core::{Closure, Object, ObjectHolder},
        },
    },
};

/// A non-local event travelling out of the node being evaluated.
///
/// Evaluation results are `Result<_, Signal>`: a `return` statement raises
/// `Signal::Return`, which aborts every enclosing node up to the nearest
/// method body (the sole catcher), and a runtime error raises
/// `Signal::Error`, which aborts the whole statement and propagates to the
/// program boundary. A `Return` escaping past every method body means the
/// statement was executed outside of a method.
#[derive(Debug)]
pub enum Signal {
    /// A `return` value on its way to the enclosing method body.
    Return(ObjectHolder),
    /// A runtime error on its way to the program boundary.
    Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// Evaluation either produces a value (an [`ObjectHolder`], by default) or
/// a [`Signal`] aborting the enclosing nodes.
pub type ExecResult<T = ObjectHolder> = Result<T, Signal>;

impl Statement {
    /// Executes the statement against a scope and a context.
    ///
    /// # Errors
    /// Returns [`Signal::Error`] when evaluation fails and
    /// [`Signal::Return`] when a `return` statement executes inside this
    /// node without an enclosing method body catching it first.
    pub fn execute(&self, closure: &mut Closure, context: &mut dyn Context) -> ExecResult {
        match self {
            Self::Expression { expr, .. } => expr.eval(closure, context),
            Self::Assignment { name, value, .. } => {
                let value = value.eval(closure, context)?;
                closure.insert(name.clone(), value.clone());
                Ok(value)
            },
            Self::FieldAssignment { object, field, value, line } => {
                let target = object.eval(closure, context)?;
                let value = value.eval(closure, context)?;

                let Some(instance) = target.as_instance() else {
                    return Err(RuntimeError::NotAnInstance { found: target.type_name(),
                                                             line:  *line, }.into());
                };
                instance.fields_mut().insert(field.clone(), value.clone());
                Ok(value)
            },
            Self::Compound { statements } => {
                for statement in statements {
                    statement.execute(closure, context)?;
                }
                Ok(ObjectHolder::none())
            },
            Self::IfElse { condition,
                           then_branch,
                           else_branch,
                           .. } => {
                if condition.eval(closure, context)?.is_true() {
                    then_branch.execute(closure, context)
                } else if let Some(else_branch) = else_branch {
                    else_branch.execute(closure, context)
                } else {
                    Ok(ObjectHolder::none())
                }
            },
            Self::MethodBody { body } => match body.execute(closure, context) {
                Err(Signal::Return(value)) => Ok(value),
                Ok(_) => Ok(ObjectHolder::none()),
                Err(error) => Err(error),
            },
            Self::Print { args, line } => execute_print(args, closure, context, *line),
            Self::Return { value, .. } => Err(Signal::Return(value.eval(closure, context)?)),
            Self::ClassDefinition { class, .. } => {
                closure.insert(class.name().to_string(),
                               ObjectHolder::own(Object::Class(Rc::clone(class))));
                Ok(ObjectHolder::none())
            },
        }
    }
}

impl Expr {
    /// Evaluates the expression against a scope and a context, producing a
    /// value.
    ///
    /// # Errors
    /// Returns [`Signal::Error`] when evaluation fails.
    pub fn eval(&self, closure: &mut Closure, context: &mut dyn Context) -> ExecResult {
        match self {
            Self::Literal { value, .. } => Ok(match value {
                                                 LiteralValue::Number(n) => (*n).into(),
                                                 LiteralValue::String(s) => s.as_str().into(),
                                                 LiteralValue::Bool(b) => (*b).into(),
                                                 LiteralValue::None => ObjectHolder::none(),
                                             }),
            Self::Variable { path, line } => resolve_variable(closure, path, *line),
            Self::BinaryOp { left, op, right, line } => {
                eval_binary_op(left, *op, right, closure, context, *line)
            },
            Self::Not { operand, .. } => {
                let value = operand.eval(closure, context)?;
                Ok((!value.is_true()).into())
            },
            Self::Stringify { operand, line } => {
                let value = operand.eval(closure, context)?;
                Ok(value.stringify(*line)?.into())
            },
            Self::MethodCall { object,
                               method,
                               args,
                               line, } => {
                let receiver = object.eval(closure, context)?;
                let actual_args = eval_arguments(args, closure, context)?;
                receiver.call_method(method, &actual_args, context, *line)
            },
            Self::NewInstance { class, args, line } => {
                let actual_args = eval_arguments(args, closure, context)?;

                // A fresh instance on every evaluation; aliases are created
                // by assignment, never by instantiation.
                let instance =
                    ObjectHolder::own(Object::Instance(ClassInstance::new(Rc::clone(class))));

                let has_init = instance.as_instance()
                                       .is_some_and(|i| i.has_method(INIT_METHOD,
                                                                     actual_args.len()));
                if has_init {
                    instance.call_method(INIT_METHOD, &actual_args, context, *line)?;
                }
                Ok(instance)
            },
        }
    }
}

/// Evaluates argument expressions strictly left to right.
fn eval_arguments(args: &[Expr],
                  closure: &mut Closure,
                  context: &mut dyn Context)
                  -> ExecResult<Vec<ObjectHolder>> {
    let mut actual_args = Vec::with_capacity(args.len());
    for arg in args {
        actual_args.push(arg.eval(closure, context)?);
    }
    Ok(actual_args)
}

/// Resolves a dotted path `a.b.c` against a scope.
///
/// The first name is looked up in the scope; each further name is looked up
/// in the field scope of the class instance found so far. The first value
/// on the path that is not a class instance ends the walk and is returned
/// as the result, even when names remain.
fn resolve_variable(closure: &Closure, path: &[String], line: usize) -> ExecResult {
    let Some((first, rest)) = path.split_first() else {
        unreachable!("the parser never builds an empty dotted path");
    };

    let mut value = closure.get(first)
                           .cloned()
                           .ok_or_else(|| RuntimeError::UnknownVariable { name: first.clone(),
                                                                          line })?;
    for name in rest {
        let Some(instance) = value.as_instance() else {
            return Ok(value);
        };
        let field = instance.fields()
                            .get(name)
                            .cloned()
                            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                           line })?;
        value = field;
    }

    Ok(value)
}

/// Executes a `print` statement: arguments are evaluated and printed left
/// to right, joined by single spaces, followed by a line break. With no
/// arguments only the line break is written.
fn execute_print(args: &[Expr],
                 closure: &mut Closure,
                 context: &mut dyn Context,
                 line: usize)
                 -> ExecResult {
    let mut last = ObjectHolder::none();

    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            write_separator(context, " ", line)?;
        }
        last = arg.eval(closure, context)?;
        last.print(context, line)?;
    }
    write_separator(context, "\n", line)?;

    Ok(last)
}

fn write_separator(context: &mut dyn Context, text: &str, line: usize) -> ExecResult<()> {
    use std::io::Write as _;

    context.output()
           .write_all(text.as_bytes())
           .map_err(|_| RuntimeError::OutputFailed { line })?;
    Ok(())
}
