//! Help listing renderer.
//!
//! Renders the registered commands with their parameters, kinds, and
//! defaults through the output sink. The banner comes from [`AppInfo`],
//! the host program's metadata collaborator.

use crate::registry::CommandRegistry;
use crate::sink::OutputSink;

/// Display metadata for the host program, used only by the help banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppInfo {
    /// Program display name.
    pub name: Option<String>,
    /// Program version string.
    pub version: Option<String>,
}

impl AppInfo {
    /// Creates metadata with both fields set.
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            version: Some(version.to_string()),
        }
    }

    fn banner(&self) -> Option<String> {
        match (&self.name, &self.version) {
            (Some(name), Some(version)) => Some(format!("{name} {version}")),
            (Some(name), None) => Some(name.clone()),
            (None, Some(version)) => Some(version.clone()),
            (None, None) => None,
        }
    }
}

/// Renders the help listing for every registered command.
///
/// # Examples
///
/// ```
/// use command_dispatch_core::{ParameterSchema, ScalarKind};
/// use command_dispatch_engine::command::{CommandDescriptor, CommandHandler};
/// use command_dispatch_engine::help::{AppInfo, render_help};
/// use command_dispatch_engine::registry::CommandRegistry;
/// use command_dispatch_engine::sink::MemorySink;
///
/// let mut registry = CommandRegistry::new();
/// registry
///     .register(
///         CommandDescriptor::new("add", CommandHandler::from_fn(|_| {}))
///             .with_parameter(ParameterSchema::required("a", ScalarKind::Integer))
///             .with_parameter(ParameterSchema::with_default("b", ScalarKind::Integer, "2")),
///     )
///     .unwrap();
///
/// let sink = MemorySink::new();
/// render_help(&registry, &AppInfo::new("demo", "0.1.0"), &sink);
///
/// let lines = sink.lines();
/// assert_eq!(lines[0], "demo 0.1.0");
/// assert!(lines.iter().any(|l| l.contains("-a  integer (required)")));
/// assert!(lines.iter().any(|l| l.contains("-b  integer (default: 2)")));
/// ```
pub fn render_help(registry: &CommandRegistry, info: &AppInfo, sink: &dyn OutputSink) {
    if let Some(banner) = info.banner() {
        sink.write_line(&banner);
    }

    if registry.is_empty() {
        sink.write_line("No commands registered.");
        return;
    }

    sink.write_line("Available commands:");
    for command in registry.commands() {
        match &command.description {
            Some(description) => sink.write_line(&format!("  {}  {description}", command.name)),
            None => sink.write_line(&format!("  {}", command.name)),
        }

        if command.parameters.is_empty() {
            sink.write_line("    (no parameters)");
            continue;
        }

        for param in &command.parameters {
            let detail = match &param.default {
                Some(default) => format!("default: {default}"),
                None => "required".to_string(),
            };
            sink.write_line(&format!("    -{}  {} ({detail})", param.name, param.kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use command_dispatch_core::{ParameterSchema, ScalarKind};

    use super::*;
    use crate::command::{CommandDescriptor, CommandHandler};
    use crate::sink::MemorySink;

    #[test]
    fn test_render_help_lists_parameters() {
        let mut registry = CommandRegistry::new();
        registry
            .register(
                CommandDescriptor::new("add", CommandHandler::from_fn(|_| {}))
                    .with_description("Add two integers")
                    .with_parameter(ParameterSchema::required("a", ScalarKind::Integer))
                    .with_parameter(ParameterSchema::with_default("b", ScalarKind::Integer, "2")),
            )
            .unwrap();
        registry
            .register(CommandDescriptor::new("ping", CommandHandler::from_fn(|_| {})))
            .unwrap();

        let sink = MemorySink::new();
        render_help(&registry, &AppInfo::new("demo", "1.2.3"), &sink);

        let lines = sink.lines();
        assert_eq!(lines[0], "demo 1.2.3");
        assert_eq!(lines[1], "Available commands:");
        assert_eq!(lines[2], "  add  Add two integers");
        assert_eq!(lines[3], "    -a  integer (required)");
        assert_eq!(lines[4], "    -b  integer (default: 2)");
        assert_eq!(lines[5], "  ping");
        assert_eq!(lines[6], "    (no parameters)");
        assert!(sink.errors().is_empty());
    }

    #[test]
    fn test_render_help_without_metadata() {
        let registry = CommandRegistry::new();
        let sink = MemorySink::new();
        render_help(&registry, &AppInfo::default(), &sink);
        assert_eq!(sink.lines(), vec!["No commands registered."]);
    }
}
