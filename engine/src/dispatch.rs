//! Dispatch entry point.
//!
//! Orchestrates one dispatch per process invocation: no-args policy,
//! registry lookup, argv re-stringification, tokenizing, binding, and
//! awaiting the invoked command's completion handle. Every failure is
//! reported through the output sink as a single diagnostic line and
//! returned as a normal outcome; the entry point itself never panics and
//! never propagates an error, including panics raised inside command
//! bodies.

use tracing::debug;

use crate::bind::{bind, spawn};
use crate::error::DispatchError;
use crate::help::{AppInfo, render_help};
use crate::registry::CommandRegistry;
use crate::sink::OutputSink;
use crate::token::{join_argv, tokenize};

/// What to do when the argument vector is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoArgsPolicy {
    /// Render the help listing (the default).
    #[default]
    ShowHelp,
    /// Report a "no parameters presented" diagnostic instead.
    ReportError,
}

/// Terminal result of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Empty argv under [`NoArgsPolicy::ShowHelp`]; help was rendered.
    HelpRendered,
    /// The command body ran to completion.
    Completed,
    /// The command body panicked; a diagnostic was written to the sink.
    Faulted,
    /// Lookup or binding failed; the error was written to the sink.
    Failed(DispatchError),
}

/// The dispatch entry point: an owned registry plus policy and metadata.
///
/// Built once after all registrations are done. The registry is read-only
/// from here on; there is no safe concurrent mutation during dispatch and
/// none is needed.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::{ParameterSchema, ScalarKind};
/// use command_dispatch_engine::command::{CommandDescriptor, CommandHandler};
/// use command_dispatch_engine::dispatch::{DispatchOutcome, Dispatcher};
/// use command_dispatch_engine::registry::CommandRegistry;
/// use command_dispatch_engine::sink::MemorySink;
///
/// let mut registry = CommandRegistry::new();
/// registry
///     .register(
///         CommandDescriptor::new("add", CommandHandler::from_fn(|values| {
///             let _ = values;
///         }))
///         .with_parameter(ParameterSchema::required("a", ScalarKind::Integer))
///         .with_parameter(ParameterSchema::with_default("b", ScalarKind::Integer, "2")),
///     )
///     .unwrap();
///
/// let dispatcher = Dispatcher::new(registry);
/// let sink = MemorySink::new();
///
/// let rt = tokio::runtime::Builder::new_current_thread()
///     .build()
///     .unwrap();
/// let outcome = rt.block_on(dispatcher.dispatch(&["add", "-a", "5"], &sink));
/// assert_eq!(outcome, DispatchOutcome::Completed);
/// ```
#[derive(Debug)]
pub struct Dispatcher {
    registry: CommandRegistry,
    policy: NoArgsPolicy,
    app_info: AppInfo,
}

impl Dispatcher {
    /// Creates a dispatcher over a fully populated registry.
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            policy: NoArgsPolicy::default(),
            app_info: AppInfo::default(),
        }
    }

    /// Sets the no-args policy.
    pub fn with_policy(mut self, policy: NoArgsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the display metadata used by the help banner.
    pub fn with_app_info(mut self, app_info: AppInfo) -> Self {
        self.app_info = app_info;
        self
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Runs one dispatch over an argument vector.
    ///
    /// `argv` excludes the program name. Must be called within a tokio
    /// runtime; the only suspension point is awaiting the invoked
    /// command's completion handle.
    pub async fn dispatch<S: AsRef<str>>(
        &self,
        argv: &[S],
        sink: &dyn OutputSink,
    ) -> DispatchOutcome {
        if argv.is_empty() {
            return match self.policy {
                NoArgsPolicy::ShowHelp => {
                    render_help(&self.registry, &self.app_info, sink);
                    DispatchOutcome::HelpRendered
                }
                NoArgsPolicy::ReportError => {
                    self.fail(DispatchError::NoParametersProvided, sink)
                }
            };
        }

        let name = argv[0].as_ref();
        let Some(descriptor) = self.registry.resolve(name) else {
            return self.fail(DispatchError::UnknownCommand(name.to_string()), sink);
        };
        debug!(command = %descriptor.name, "Resolved command");

        let input = join_argv(&argv[1..]);
        let parsed = tokenize(&input);

        let values = match bind(descriptor, &parsed) {
            Ok(values) => values,
            Err(err) => return self.fail(err, sink),
        };

        match spawn(descriptor, values).wait().await {
            Ok(()) => DispatchOutcome::Completed,
            Err(fault) => {
                sink.write_error(&format!("command '{}' failed: {fault}", descriptor.name));
                DispatchOutcome::Faulted
            }
        }
    }

    fn fail(&self, err: DispatchError, sink: &dyn OutputSink) -> DispatchOutcome {
        debug!(error = %err, "Dispatch failed");
        sink.write_error(&err.to_string());
        DispatchOutcome::Failed(err)
    }
}
