//! Registration-time validation of command declarations.
//!
//! Catches configuration errors — empty names, duplicate parameters,
//! defaults the declared kind cannot coerce — before a command enters a
//! registry, instead of surfacing them on the first dispatch.
//!
//! # Examples
//!
//! ```
//! use command_dispatch_core::*;
//!
//! let params = vec![
//!     ParameterSchema::required("a", ScalarKind::Integer),
//!     ParameterSchema::with_default("b", ScalarKind::Integer, "2"),
//! ];
//! assert!(validate_command("add", &params).is_empty());
//!
//! // Invalid: default that its own kind cannot coerce
//! let bad = vec![ParameterSchema::with_default("b", ScalarKind::Integer, "two")];
//! assert!(!validate_command("add", &bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{ParameterSchema, ScalarKind};

/// Command declaration validation errors.
///
/// Each variant describes a specific configuration problem found during
/// validation. The `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// A parameter has an empty or whitespace-only name.
    #[error("parameter name cannot be empty")]
    EmptyParameterName,
    /// Two parameters on the same command share a name.
    #[error("duplicate parameter: {0}")]
    DuplicateParameter(String),
    /// A declared default that its own kind cannot coerce.
    #[error("default '{value}' for parameter '{name}' is not a valid {kind}")]
    DefaultNotCoercible {
        /// Parameter name.
        name: String,
        /// The raw default value.
        value: String,
        /// The kind that rejected it.
        kind: ScalarKind,
    },
}

/// Validates a full command declaration (name plus parameter list).
///
/// # Examples
///
/// ```
/// use command_dispatch_core::*;
///
/// let errors = validate_command("  ", &[]);
/// assert_eq!(errors, vec![ValidationError::EmptyCommandName]);
/// ```
pub fn validate_command(name: &str, parameters: &[ParameterSchema]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName);
        return errors;
    }

    errors.extend(validate_parameters(parameters));
    errors
}

/// Validates a parameter list in isolation.
///
/// Checks for empty names, duplicate names, and defaults the declared kind
/// cannot coerce. Duplicate parameter names are a hard error here; there is
/// no last-declared-wins fallback.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::*;
///
/// let dup = vec![
///     ParameterSchema::required("a", ScalarKind::Integer),
///     ParameterSchema::required("a", ScalarKind::Text),
/// ];
/// let errors = validate_parameters(&dup);
/// assert_eq!(errors, vec![ValidationError::DuplicateParameter("a".to_string())]);
/// ```
pub fn validate_parameters(parameters: &[ParameterSchema]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for param in parameters {
        if param.name.trim().is_empty() {
            errors.push(ValidationError::EmptyParameterName);
            return errors;
        }

        if !seen.insert(param.name.as_str()) {
            errors.push(ValidationError::DuplicateParameter(param.name.clone()));
            return errors;
        }

        if let Some(default) = &param.default {
            if param.kind.coerce(default).is_err() {
                errors.push(ValidationError::DefaultNotCoercible {
                    name: param.name.clone(),
                    value: default.clone(),
                    kind: param.kind,
                });
                return errors;
            }
        }
    }

    errors
}
