//! Command registry: explicit registration and case-insensitive lookup.
//!
//! The registry is an owned value populated during an initialization phase
//! and then treated as read-only during dispatch. There is no ambient
//! process-global registry and no runtime discovery scan; every command
//! arrives through an explicit [`register`](CommandRegistry::register)
//! call.

use command_dispatch_core::validate_command;
use tracing::debug;

use crate::command::CommandDescriptor;
use crate::error::RegistryError;

/// Owns the set of all registered command descriptors.
///
/// Registration validates each declaration and rejects case-insensitive
/// name collisions outright, so lookup never has to pick between shadowed
/// commands.
///
/// # Examples
///
/// ```
/// use command_dispatch_engine::command::{CommandDescriptor, CommandHandler};
/// use command_dispatch_engine::registry::CommandRegistry;
///
/// let mut registry = CommandRegistry::new();
/// registry
///     .register(CommandDescriptor::new("Add", CommandHandler::from_fn(|_| {})))
///     .unwrap();
///
/// // Lookup is case-insensitive.
/// assert!(registry.resolve("add").is_some());
/// assert!(registry.resolve("ADD").is_some());
/// assert!(registry.resolve("sub").is_none());
///
/// // Collisions are a hard error, not silent shadowing.
/// let dup = CommandDescriptor::new("ADD", CommandHandler::from_fn(|_| {}));
/// assert!(registry.register(dup).is_err());
/// ```
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command descriptor.
    ///
    /// The declaration is validated (empty names, duplicate parameters,
    /// defaults the kind cannot coerce) and the name checked against
    /// existing commands case-insensitively.
    pub fn register(&mut self, descriptor: CommandDescriptor) -> Result<(), RegistryError> {
        let errors = validate_command(&descriptor.name, &descriptor.parameters);
        if !errors.is_empty() {
            return Err(RegistryError::InvalidCommand {
                name: descriptor.name.clone(),
                errors,
            });
        }

        if self.resolve(&descriptor.name).is_some() {
            return Err(RegistryError::DuplicateCommand(descriptor.name.clone()));
        }

        debug!(command = %descriptor.name, parameters = descriptor.parameters.len(), "Registered command");
        self.commands.push(descriptor);
        Ok(())
    }

    /// Resolves a name to a descriptor, case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands
            .iter()
            .find(|cmd| cmd.name.eq_ignore_ascii_case(name))
    }

    /// All registered commands, in registration order. Iteration order is
    /// meaningful for help display only.
    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` when no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use command_dispatch_core::{ParameterSchema, ScalarKind, ValidationError};

    use super::*;
    use crate::command::CommandHandler;
    use crate::error::RegistryError;

    fn noop(name: &str) -> CommandDescriptor {
        CommandDescriptor::new(name, CommandHandler::from_fn(|_| {}))
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry.register(noop("Add")).unwrap();

        for name in ["add", "ADD", "Add", "aDd"] {
            let resolved = registry.resolve(name).expect("should resolve");
            assert_eq!(resolved.name, "Add");
        }
    }

    #[test]
    fn test_register_rejects_case_insensitive_duplicate() {
        let mut registry = CommandRegistry::new();
        registry.register(noop("Add")).unwrap();

        let err = registry.register(noop("add")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCommand("add".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_rejects_invalid_declaration() {
        let mut registry = CommandRegistry::new();
        let descriptor = noop("add")
            .with_parameter(ParameterSchema::required("a", ScalarKind::Integer))
            .with_parameter(ParameterSchema::required("a", ScalarKind::Float));

        let err = registry.register(descriptor).unwrap_err();
        assert_eq!(
            err,
            RegistryError::InvalidCommand {
                name: "add".to_string(),
                errors: vec![ValidationError::DuplicateParameter("a".to_string())],
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_commands_keep_registration_order() {
        let mut registry = CommandRegistry::new();
        registry.register(noop("add")).unwrap();
        registry.register(noop("div")).unwrap();

        let names: Vec<&str> = registry.commands().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["add", "div"]);
    }
}
