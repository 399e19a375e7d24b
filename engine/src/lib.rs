//! Command dispatch engine: registry, tokenizer, binder, and entry point.
//!
//! This crate turns a set of plain functions into CLI subcommands without
//! per-command argument parsing. Given a process's argument vector, the
//! [`Dispatcher`] locates a registered command by name, parses the
//! remaining tokens into named arguments, binds them to the command's
//! declared parameters (coercing types and applying defaults), and awaits
//! the command body through a uniform completion handle.
//!
//! The pipeline, leaves first:
//!
//! - [`token`] — re-stringifies argv and tokenizes it into ordered
//!   `(name, value-or-flag)` pairs.
//! - [`command`] — command descriptors: parameter schemas plus a sync or
//!   async handler.
//! - [`registry`] — explicit registration, validation, and
//!   case-insensitive lookup.
//! - [`bind`] — matches parsed arguments to schemas, coerces values,
//!   applies defaults, and runs the body on a worker task.
//! - [`dispatch`] — orchestrates the whole dispatch and reports every
//!   failure through the [`sink`] as a single diagnostic line.
//!
//! # Example
//!
//! ```
//! use command_dispatch_core::{ParameterSchema, ScalarKind, ScalarValue};
//! use command_dispatch_engine::command::{CommandDescriptor, CommandHandler};
//! use command_dispatch_engine::dispatch::{DispatchOutcome, Dispatcher};
//! use command_dispatch_engine::registry::CommandRegistry;
//! use command_dispatch_engine::sink::MemorySink;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI64, Ordering};
//!
//! let sum = Arc::new(AtomicI64::new(0));
//! let seen = sum.clone();
//!
//! let mut registry = CommandRegistry::new();
//! registry
//!     .register(
//!         CommandDescriptor::new("Add", CommandHandler::from_fn(move |values| {
//!             let total: i64 = values.iter().filter_map(ScalarValue::as_integer).sum();
//!             seen.store(total, Ordering::SeqCst);
//!         }))
//!         .with_parameter(ParameterSchema::required("a", ScalarKind::Integer))
//!         .with_parameter(ParameterSchema::with_default("b", ScalarKind::Integer, "2")),
//!     )
//!     .unwrap();
//!
//! let dispatcher = Dispatcher::new(registry);
//! let sink = MemorySink::new();
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let outcome = rt.block_on(dispatcher.dispatch(&["add", "-a", "5"], &sink));
//!
//! assert_eq!(outcome, DispatchOutcome::Completed);
//! assert_eq!(sum.load(Ordering::SeqCst), 7);
//! ```

pub mod bind;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod help;
pub mod registry;
pub mod sink;
pub mod token;

pub use bind::{Invocation, InvocationFault};
pub use command::{CommandDescriptor, CommandHandler};
pub use dispatch::{DispatchOutcome, Dispatcher, NoArgsPolicy};
pub use error::{DispatchError, RegistryError};
pub use help::AppInfo;
pub use registry::CommandRegistry;
pub use sink::{ConsoleSink, MemorySink, OutputSink};
pub use token::{ArgValue, ParsedArg};
