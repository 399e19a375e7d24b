//! Argument tokenizer.
//!
//! Turns a single parsable string into an ordered sequence of named
//! arguments. The grammar is deliberately small: a `-` followed by word
//! characters names a flag, optionally followed by a value token that is
//! either a double-quoted literal (whitespace preserved, closing quote
//! required, no escaping of embedded quotes) or a contiguous token that
//! neither starts with `-` nor contains whitespace. A flag immediately
//! followed by another flag is a bare boolean flag.
//!
//! Segments that match nothing are silently skipped. This is a permissive
//! policy of the grammar, not a validation gap.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static ARG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"-(?P<name>\w+)(?:\s+(?:"(?P<quoted>[^"]*)"|(?P<plain>[^-\s"]\S*)))?"#)
        .expect("static regex must compile")
});

/// The decoded value of one parsed argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// A raw string value. Quoted segments arrive as a single value with
    /// literal whitespace preserved.
    Text(String),
    /// A bare flag with no value token; binds boolean `true`.
    Flag,
}

impl ArgValue {
    /// Returns the raw string the binder coerces. A bare flag coerces as
    /// the literal `true`.
    pub fn raw(&self) -> &str {
        match self {
            ArgValue::Text(value) => value,
            ArgValue::Flag => "true",
        }
    }
}

/// One decoded `(name, value-or-flag)` pair.
///
/// Ephemeral: created per dispatch call and discarded after binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArg {
    /// Stripped flag name, without the leading `-`.
    pub name: String,
    /// The associated value, or [`ArgValue::Flag`] for a bare flag.
    pub value: ArgValue,
}

impl ParsedArg {
    /// Creates an argument with a text value.
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: ArgValue::Text(value.to_string()),
        }
    }

    /// Creates a bare flag argument.
    pub fn flag(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: ArgValue::Flag,
        }
    }
}

/// Re-stringifies argv tokens into one parsable input string.
///
/// Elements containing whitespace are wrapped in double quotes so that
/// multi-word values round-trip through [`tokenize`] as a single value,
/// whether they arrived pre-quoted or naturally split.
///
/// # Examples
///
/// ```
/// use command_dispatch_engine::token::join_argv;
///
/// let joined = join_argv(&["-a", "5", "-name", "hello world"]);
/// assert_eq!(joined, r#"-a 5 -name "hello world""#);
/// ```
pub fn join_argv<S: AsRef<str>>(argv: &[S]) -> String {
    let mut out = String::new();
    for (i, token) in argv.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let token = token.as_ref();
        if token.chars().any(char::is_whitespace) {
            out.push('"');
            out.push_str(token);
            out.push('"');
        } else {
            out.push_str(token);
        }
    }
    out
}

/// Tokenizes an input string into ordered parsed arguments.
///
/// # Examples
///
/// ```
/// use command_dispatch_engine::token::{tokenize, ParsedArg};
///
/// let args = tokenize(r#"-a 5 -flag -name "hello world""#);
/// assert_eq!(
///     args,
///     vec![
///         ParsedArg::text("a", "5"),
///         ParsedArg::flag("flag"),
///         ParsedArg::text("name", "hello world"),
///     ],
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<ParsedArg> {
    let mut args = Vec::new();

    for capture in ARG_RE.captures_iter(input) {
        let name = capture["name"].to_string();
        let value = if let Some(quoted) = capture.name("quoted") {
            ArgValue::Text(quoted.as_str().to_string())
        } else if let Some(plain) = capture.name("plain") {
            ArgValue::Text(plain.as_str().to_string())
        } else {
            ArgValue::Flag
        };
        args.push(ParsedArg { name, value });
    }

    debug!(input, count = args.len(), "Tokenized arguments");
    args
}
