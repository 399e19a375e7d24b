//! Binder and invoker.
//!
//! Binding matches parsed arguments against a descriptor's parameter
//! schemas in declaration order, coercing supplied values and falling back
//! to defaults. Invocation wraps the handler in a uniform completion
//! handle: synchronous bodies are offloaded to a blocking worker task so
//! the dispatcher never blocks on a slow command body, asynchronous bodies
//! are spawned as the futures they already are. Either way the caller
//! awaits one [`Invocation`], and a panicking body surfaces as a normal
//! fault value instead of unwinding through the dispatcher.

use command_dispatch_core::ScalarValue;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::command::{CommandDescriptor, CommandHandler};
use crate::error::DispatchError;
use crate::token::ParsedArg;

/// A command body that terminated abnormally (panicked or was cancelled).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct InvocationFault {
    reason: String,
}

/// Uniform completion handle for an invoked command.
///
/// Awaiting [`wait`](Invocation::wait) completes when the command body
/// does, regardless of whether the body was synchronous or asynchronous.
#[derive(Debug)]
pub struct Invocation {
    handle: JoinHandle<()>,
}

impl Invocation {
    /// Awaits the command body's completion.
    ///
    /// A panic inside the body is caught by the task boundary and returned
    /// as an [`InvocationFault`]; it is never re-raised.
    pub async fn wait(self) -> Result<(), InvocationFault> {
        self.handle.await.map_err(|err| InvocationFault {
            reason: err.to_string(),
        })
    }
}

/// Binds parsed arguments to a descriptor's parameters.
///
/// For each parameter in declaration order, the first parsed argument with
/// a case-sensitively equal name wins. A missing argument falls back to
/// the declared default; a missing argument without a default fails with
/// [`DispatchError::MissingRequiredArgument`]. Supplied values and
/// defaults alike must coerce to the declared kind (a bare flag coerces as
/// the literal `true`). Any failure aborts the whole binding; there is no
/// partial result.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::{ParameterSchema, ScalarKind, ScalarValue};
/// use command_dispatch_engine::bind::bind;
/// use command_dispatch_engine::command::{CommandDescriptor, CommandHandler};
/// use command_dispatch_engine::token::ParsedArg;
///
/// let add = CommandDescriptor::new("add", CommandHandler::from_fn(|_| {}))
///     .with_parameter(ParameterSchema::required("a", ScalarKind::Integer))
///     .with_parameter(ParameterSchema::with_default("b", ScalarKind::Integer, "2"));
///
/// let values = bind(&add, &[ParsedArg::text("a", "5")]).unwrap();
/// assert_eq!(values, vec![ScalarValue::Integer(5), ScalarValue::Integer(2)]);
/// ```
pub fn bind(
    descriptor: &CommandDescriptor,
    args: &[ParsedArg],
) -> Result<Vec<ScalarValue>, DispatchError> {
    let mut values = Vec::with_capacity(descriptor.parameters.len());

    for param in &descriptor.parameters {
        let supplied = args.iter().find(|arg| arg.name == param.name);

        let raw = match supplied {
            Some(arg) => arg.value.raw(),
            None => match &param.default {
                Some(default) => default.as_str(),
                None => {
                    return Err(DispatchError::MissingRequiredArgument(param.name.clone()));
                }
            },
        };

        let value =
            param
                .kind
                .coerce(raw)
                .map_err(|err| DispatchError::TypeConversionFailure {
                    name: param.name.clone(),
                    value: err.value,
                    kind: err.kind,
                })?;
        values.push(value);
    }

    debug!(command = %descriptor.name, bound = values.len(), "Bound arguments");
    Ok(values)
}

/// Starts the command body with the bound values and returns its
/// completion handle.
///
/// Must be called within a tokio runtime. Synchronous handlers run via
/// `spawn_blocking`; asynchronous handlers via `spawn`.
pub fn spawn(descriptor: &CommandDescriptor, values: Vec<ScalarValue>) -> Invocation {
    let handle = match &descriptor.handler {
        CommandHandler::Sync(body) => {
            let body = body.clone();
            tokio::task::spawn_blocking(move || body(values))
        }
        CommandHandler::Async(body) => tokio::spawn(body(values)),
    };
    Invocation { handle }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};

    use command_dispatch_core::{ParameterSchema, ScalarKind};

    use super::*;
    use crate::command::CommandHandler;
    use crate::token::ParsedArg;

    fn add_descriptor() -> CommandDescriptor {
        CommandDescriptor::new("add", CommandHandler::from_fn(|_| {}))
            .with_parameter(ParameterSchema::required("a", ScalarKind::Integer))
            .with_parameter(ParameterSchema::with_default("b", ScalarKind::Integer, "2"))
    }

    #[test]
    fn test_bind_applies_default() {
        let values = bind(&add_descriptor(), &[ParsedArg::text("a", "5")]).unwrap();
        assert_eq!(
            values,
            vec![ScalarValue::Integer(5), ScalarValue::Integer(2)]
        );
    }

    #[test]
    fn test_bind_missing_required_argument() {
        let err = bind(&add_descriptor(), &[ParsedArg::text("b", "3")]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::MissingRequiredArgument("a".to_string())
        );
    }

    #[test]
    fn test_bind_type_conversion_failure() {
        let err = bind(&add_descriptor(), &[ParsedArg::text("a", "abc")]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::TypeConversionFailure {
                name: "a".to_string(),
                value: "abc".to_string(),
                kind: ScalarKind::Integer,
            }
        );
    }

    #[test]
    fn test_bind_bare_flag_against_boolean() {
        let descriptor = CommandDescriptor::new("toggle", CommandHandler::from_fn(|_| {}))
            .with_parameter(ParameterSchema::required("on", ScalarKind::Boolean));

        let values = bind(&descriptor, &[ParsedArg::flag("on")]).unwrap();
        assert_eq!(values, vec![ScalarValue::Boolean(true)]);
    }

    #[test]
    fn test_bind_bare_flag_against_integer_fails() {
        let descriptor = CommandDescriptor::new("count", CommandHandler::from_fn(|_| {}))
            .with_parameter(ParameterSchema::required("n", ScalarKind::Integer));

        let err = bind(&descriptor, &[ParsedArg::flag("n")]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::TypeConversionFailure {
                name: "n".to_string(),
                value: "true".to_string(),
                kind: ScalarKind::Integer,
            }
        );
    }

    #[test]
    fn test_bind_uncoercible_default() {
        // Descriptors assembled without a registry can still carry a bad
        // default; binding reports it like any other conversion failure.
        let descriptor = CommandDescriptor::new("bad", CommandHandler::from_fn(|_| {}))
            .with_parameter(ParameterSchema::with_default("n", ScalarKind::Integer, "two"));

        let err = bind(&descriptor, &[]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::TypeConversionFailure {
                name: "n".to_string(),
                value: "two".to_string(),
                kind: ScalarKind::Integer,
            }
        );
    }

    #[test]
    fn test_bind_first_matching_argument_wins() {
        let descriptor = CommandDescriptor::new("echo", CommandHandler::from_fn(|_| {}))
            .with_parameter(ParameterSchema::required("msg", ScalarKind::Text));

        let values = bind(
            &descriptor,
            &[ParsedArg::text("msg", "first"), ParsedArg::text("msg", "second")],
        )
        .unwrap();
        assert_eq!(values, vec![ScalarValue::Text("first".to_string())]);
    }

    #[tokio::test]
    async fn test_spawn_sync_body_completes() {
        let sum = Arc::new(AtomicI64::new(0));
        let seen = sum.clone();
        let descriptor = CommandDescriptor::new(
            "add",
            CommandHandler::from_fn(move |values| {
                let total: i64 = values.iter().filter_map(ScalarValue::as_integer).sum();
                seen.store(total, Ordering::SeqCst);
            }),
        );

        let invocation = spawn(
            &descriptor,
            vec![ScalarValue::Integer(5), ScalarValue::Integer(2)],
        );
        invocation.wait().await.unwrap();
        assert_eq!(sum.load(Ordering::SeqCst), 7);
    }

    #[tokio::test]
    async fn test_spawn_async_body_completes() {
        let sum = Arc::new(AtomicI64::new(0));
        let seen = sum.clone();
        let descriptor = CommandDescriptor::new(
            "add",
            CommandHandler::from_async(move |values| {
                let seen = seen.clone();
                async move {
                    tokio::task::yield_now().await;
                    let total: i64 = values.iter().filter_map(ScalarValue::as_integer).sum();
                    seen.store(total, Ordering::SeqCst);
                }
            }),
        );

        let invocation = spawn(&descriptor, vec![ScalarValue::Integer(3)]);
        invocation.wait().await.unwrap();
        assert_eq!(sum.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_panicking_body_surfaces_as_fault() {
        let descriptor = CommandDescriptor::new(
            "boom",
            CommandHandler::from_fn(|_| panic!("body exploded")),
        );

        let invocation = spawn(&descriptor, Vec::new());
        let fault = invocation.wait().await.unwrap_err();
        assert!(fault.to_string().contains("panic"));
    }
}
