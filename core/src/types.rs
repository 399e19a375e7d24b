//! Scalar kinds, coerced values, and parameter schemas.
//!
//! This module defines the data model for command parameters. The types
//! derive [`serde`] traits so schemas can round-trip through JSON for
//! tooling and help export.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a raw argument string cannot be converted to a kind.
///
/// Carries the offending value and the target kind so callers can report a
/// single, precise diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert '{value}' to {kind}")]
pub struct CoerceError {
    /// The raw value that failed to convert.
    pub value: String,
    /// The kind it was being converted to.
    pub kind: ScalarKind,
}

/// The closed set of parameter types a command may declare.
///
/// Any type outside this set is unrepresentable, so unsupported parameter
/// types are rejected by construction rather than failing at call time.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::ScalarKind;
///
/// assert_eq!(ScalarKind::Integer.to_string(), "integer");
/// assert_eq!(ScalarKind::default(), ScalarKind::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScalarKind {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit floating point.
    Float,
    /// Boolean (`true`/`false`, or a bare flag).
    Boolean,
    /// Plain string (the default).
    #[default]
    Text,
}

impl ScalarKind {
    /// Returns the lowercase name of the kind, as shown in help output and
    /// diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Integer => "integer",
            ScalarKind::Float => "float",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Text => "text",
        }
    }

    /// Coerces a raw argument string into a value of this kind.
    ///
    /// One explicit, total conversion per kind:
    ///
    /// - `Integer` — decimal `i64` parse of the trimmed input.
    /// - `Float` — `f64` parse of the trimmed input.
    /// - `Boolean` — `"true"` or `"false"`, ASCII case-insensitive, trimmed.
    /// - `Text` — identity, no trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use command_dispatch_core::{ScalarKind, ScalarValue};
    ///
    /// assert_eq!(ScalarKind::Integer.coerce("5").unwrap(), ScalarValue::Integer(5));
    /// assert_eq!(ScalarKind::Float.coerce("0").unwrap(), ScalarValue::Float(0.0));
    /// assert_eq!(ScalarKind::Boolean.coerce("True").unwrap(), ScalarValue::Boolean(true));
    /// assert_eq!(
    ///     ScalarKind::Text.coerce("hello world").unwrap(),
    ///     ScalarValue::Text("hello world".to_string()),
    /// );
    /// assert!(ScalarKind::Integer.coerce("abc").is_err());
    /// ```
    pub fn coerce(self, raw: &str) -> Result<ScalarValue, CoerceError> {
        let fail = || CoerceError {
            value: raw.to_string(),
            kind: self,
        };

        match self {
            ScalarKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(ScalarValue::Integer)
                .map_err(|_| fail()),
            ScalarKind::Float => raw
                .trim()
                .parse::<f64>()
                .map(ScalarValue::Float)
                .map_err(|_| fail()),
            ScalarKind::Boolean => {
                let trimmed = raw.trim();
                if trimmed.eq_ignore_ascii_case("true") {
                    Ok(ScalarValue::Boolean(true))
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Ok(ScalarValue::Boolean(false))
                } else {
                    Err(fail())
                }
            }
            ScalarKind::Text => Ok(ScalarValue::Text(raw.to_string())),
        }
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A coerced argument value.
///
/// Produced by [`ScalarKind::coerce`] and handed to command handlers
/// positionally, in parameter declaration order.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::{ScalarKind, ScalarValue};
///
/// let value = ScalarValue::Integer(7);
/// assert_eq!(value.kind(), ScalarKind::Integer);
/// assert_eq!(value.to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    /// A coerced integer.
    Integer(i64),
    /// A coerced float.
    Float(f64),
    /// A coerced boolean.
    Boolean(bool),
    /// A plain string.
    Text(String),
}

impl ScalarValue {
    /// Returns the kind this value belongs to.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::Integer(_) => ScalarKind::Integer,
            ScalarValue::Float(_) => ScalarKind::Float,
            ScalarValue::Boolean(_) => ScalarKind::Boolean,
            ScalarValue::Text(_) => ScalarKind::Text,
        }
    }

    /// Returns the inner integer, if this is an `Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ScalarValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the inner float, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ScalarValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the inner boolean, if this is a `Boolean`.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            ScalarValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the inner string, if this is a `Text`.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarValue::Integer(v) => write!(f, "{v}"),
            ScalarValue::Float(v) => write!(f, "{v}"),
            ScalarValue::Boolean(v) => write!(f, "{v}"),
            ScalarValue::Text(v) => f.write_str(v),
        }
    }
}

/// The declared shape of one formal command parameter.
///
/// A parameter has a name (matched case-sensitively against stripped flag
/// names, so flag `-a` matches the schema name `a`), a target kind, and an
/// optional default. The default is held untyped as a raw string and
/// coerced at bind time.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::{ParameterSchema, ScalarKind};
///
/// let a = ParameterSchema::required("a", ScalarKind::Integer);
/// assert!(a.is_required());
///
/// let b = ParameterSchema::with_default("b", ScalarKind::Integer, "2");
/// assert!(!b.is_required());
/// assert_eq!(b.default.as_deref(), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// Parameter name, without any flag marker.
    pub name: String,
    /// Target kind the supplied value is coerced into.
    pub kind: ScalarKind,
    /// Default value, raw until coerced at bind time.
    pub default: Option<String>,
}

impl ParameterSchema {
    /// Creates a required parameter (no default).
    pub fn required(name: &str, kind: ScalarKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default: None,
        }
    }

    /// Creates an optional parameter with a default value.
    ///
    /// The default is stored raw; [`validate_command`](crate::validate_command)
    /// checks at registration time that the kind can coerce it.
    pub fn with_default(name: &str, kind: ScalarKind, default: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default: Some(default.to_string()),
        }
    }

    /// Returns `true` when the parameter has no default and must be supplied.
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(
            ScalarKind::Integer.coerce("5").unwrap(),
            ScalarValue::Integer(5)
        );
        assert_eq!(
            ScalarKind::Integer.coerce(" -12 ").unwrap(),
            ScalarValue::Integer(-12)
        );
        assert!(ScalarKind::Integer.coerce("abc").is_err());
        assert!(ScalarKind::Integer.coerce("5.5").is_err());
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(
            ScalarKind::Float.coerce("0").unwrap(),
            ScalarValue::Float(0.0)
        );
        assert_eq!(
            ScalarKind::Float.coerce("2.5").unwrap(),
            ScalarValue::Float(2.5)
        );
        assert!(ScalarKind::Float.coerce("two").is_err());
    }

    #[test]
    fn test_boolean_coercion_is_case_insensitive() {
        assert_eq!(
            ScalarKind::Boolean.coerce("true").unwrap(),
            ScalarValue::Boolean(true)
        );
        assert_eq!(
            ScalarKind::Boolean.coerce("False").unwrap(),
            ScalarValue::Boolean(false)
        );
        assert!(ScalarKind::Boolean.coerce("yes").is_err());
    }

    #[test]
    fn test_text_coercion_preserves_whitespace() {
        assert_eq!(
            ScalarKind::Text.coerce("  hello world  ").unwrap(),
            ScalarValue::Text("  hello world  ".to_string())
        );
    }

    #[test]
    fn test_coerce_error_message() {
        let err = ScalarKind::Integer.coerce("abc").unwrap_err();
        assert_eq!(err.to_string(), "cannot convert 'abc' to integer");
    }

    #[test]
    fn test_scalar_value_accessors() {
        assert_eq!(ScalarValue::Integer(5).as_integer(), Some(5));
        assert_eq!(ScalarValue::Integer(5).as_float(), None);
        assert_eq!(ScalarValue::Boolean(true).as_boolean(), Some(true));
        assert_eq!(
            ScalarValue::Text("x".to_string()).as_text(),
            Some("x")
        );
    }

    #[test]
    fn test_parameter_schema_serde_round_trip() {
        let param = ParameterSchema::with_default("b", ScalarKind::Integer, "2");
        let json = serde_json::to_string(&param).unwrap();
        let back: ParameterSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(back, param);
    }
}
