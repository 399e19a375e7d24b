//! Failure taxonomy for registration and dispatch.
//!
//! All variants are non-fatal: a dispatch failure aborts only the current
//! dispatch attempt, and a registration failure only rejects the offending
//! command. Nothing here is ever allowed to propagate as a panic.

use command_dispatch_core::{ScalarKind, ValidationError};
use thiserror::Error;

/// Errors detected while resolving, binding, or starting a dispatch.
///
/// Each maps to a single diagnostic line on the output sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Empty argument vector under the error-reporting no-args policy.
    #[error("no parameters presented")]
    NoParametersProvided,
    /// First token matched no registered command (case-insensitive).
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// A parameter has no default and no corresponding argument was supplied.
    #[error("missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// A supplied value or a default value cannot be coerced to the
    /// parameter's declared kind.
    #[error("argument '{name}': cannot convert '{value}' to {kind}")]
    TypeConversionFailure {
        /// Parameter name.
        name: String,
        /// The raw value that failed (a bare flag reports the literal `true`).
        value: String,
        /// The declared target kind.
        kind: ScalarKind,
    },
}

/// Errors raised when a command is registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The descriptor failed declaration validation.
    #[error("invalid command '{name}': {}", format_errors(.errors))]
    InvalidCommand {
        /// The rejected command name.
        name: String,
        /// Validation errors, in detection order.
        errors: Vec<ValidationError>,
    },
    /// A command with the same name (case-insensitive) is already registered.
    #[error("duplicate command: {0}")]
    DuplicateCommand(String),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
