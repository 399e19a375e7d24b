//! Command descriptors and their handlers.
//!
//! A [`CommandDescriptor`] is the bound unit of dispatch: a name, an
//! ordered parameter schema, and a handler. Handlers come in two explicit
//! variants rather than a single reflective callable: synchronous bodies
//! that the invoker offloads to a blocking worker, and asynchronous bodies
//! that produce a future of their own.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use command_dispatch_core::{ParameterSchema, ScalarValue};

/// Boxed future for handler type erasure.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// The callable behind a command.
///
/// Both variants receive the coerced values positionally, in parameter
/// declaration order. Use [`CommandHandler::from_fn`] and
/// [`CommandHandler::from_async`] to build them from closures.
#[derive(Clone)]
pub enum CommandHandler {
    /// A synchronous body; the invoker runs it on a blocking worker task.
    Sync(Arc<dyn Fn(Vec<ScalarValue>) + Send + Sync>),
    /// An asynchronous body; the invoker spawns the returned future.
    Async(Arc<dyn Fn(Vec<ScalarValue>) -> BoxFuture + Send + Sync>),
}

impl CommandHandler {
    /// Wraps a synchronous closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_dispatch_engine::command::CommandHandler;
    ///
    /// let handler = CommandHandler::from_fn(|values| {
    ///     println!("{} value(s)", values.len());
    /// });
    /// assert!(!handler.is_async());
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Vec<ScalarValue>) + Send + Sync + 'static,
    {
        CommandHandler::Sync(Arc::new(f))
    }

    /// Wraps an asynchronous closure.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_dispatch_engine::command::CommandHandler;
    ///
    /// let handler = CommandHandler::from_async(|values| async move {
    ///     let _ = values;
    /// });
    /// assert!(handler.is_async());
    /// ```
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: Fn(Vec<ScalarValue>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        CommandHandler::Async(Arc::new(move |values| Box::pin(f(values))))
    }

    /// Returns `true` for the asynchronous variant.
    pub fn is_async(&self) -> bool {
        matches!(self, CommandHandler::Async(_))
    }
}

impl std::fmt::Debug for CommandHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandHandler::Sync(_) => f.write_str("CommandHandler::Sync"),
            CommandHandler::Async(_) => f.write_str("CommandHandler::Async"),
        }
    }
}

/// A named, invocable command: parameter schemas plus a handler.
///
/// Built once at start-up and registered into a
/// [`CommandRegistry`](crate::registry::CommandRegistry). Parameters keep
/// declaration order; bound values are applied positionally in that order.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::{ParameterSchema, ScalarKind};
/// use command_dispatch_engine::command::{CommandDescriptor, CommandHandler};
///
/// let add = CommandDescriptor::new(
///     "add",
///     CommandHandler::from_fn(|values| {
///         let _ = values;
///     }),
/// )
/// .with_description("Add two integers")
/// .with_parameter(ParameterSchema::required("a", ScalarKind::Integer))
/// .with_parameter(ParameterSchema::with_default("b", ScalarKind::Integer, "2"));
///
/// assert_eq!(add.name, "add");
/// assert_eq!(add.parameters.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    /// Command name; registry lookup is case-insensitive.
    pub name: String,
    /// Short description shown in help output.
    pub description: Option<String>,
    /// Formal parameters, in declaration order.
    pub parameters: Vec<ParameterSchema>,
    /// The callable to invoke after binding.
    pub handler: CommandHandler,
}

impl CommandDescriptor {
    /// Creates a descriptor with no parameters.
    pub fn new(name: &str, handler: CommandHandler) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            parameters: Vec::new(),
            handler,
        }
    }

    /// Adds a description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Appends a parameter, preserving declaration order.
    pub fn with_parameter(mut self, parameter: ParameterSchema) -> Self {
        self.parameters.push(parameter);
        self
    }
}
