//! Core types, coercion, and validation for command dispatch.
//!
//! This crate defines the foundational data model shared by the dispatch
//! engine:
//!
//! - [`ScalarKind`] — the closed set of parameter types a command may
//!   declare (integer, float, boolean, text).
//! - [`ScalarValue`] — a coerced value of one of those kinds.
//! - [`ParameterSchema`] — the declared shape of one formal parameter
//!   (name, kind, optional default).
//!
//! Coercion ([`ScalarKind::coerce`]) converts a raw argument string into a
//! [`ScalarValue`], with one explicit, total conversion per kind.
//!
//! Validation ([`validate_command`]) catches configuration errors such as
//! duplicate parameter names and defaults that cannot be coerced, before a
//! command enters a registry.
//!
//! # Example
//!
//! ```
//! use command_dispatch_core::*;
//!
//! let params = vec![
//!     ParameterSchema::required("a", ScalarKind::Integer),
//!     ParameterSchema::with_default("b", ScalarKind::Integer, "2"),
//! ];
//!
//! assert!(validate_command("add", &params).is_empty());
//! assert_eq!(ScalarKind::Integer.coerce("5").unwrap(), ScalarValue::Integer(5));
//! assert!(ScalarKind::Integer.coerce("abc").is_err());
//! ```

mod types;
mod validate;

pub use types::{CoerceError, ParameterSchema, ScalarKind, ScalarValue};
pub use validate::{ValidationError, validate_command, validate_parameters};
