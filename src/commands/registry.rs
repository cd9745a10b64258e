// src/commands/registry.rs
use std::collections::HashMap;
use super::types::Command;

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd::CdCommand;
use super::cp::CpCommand;
use super::echo::EchoCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::MvCommand;
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::touch::TouchCommand;

/// Register every file system command.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(CpCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(PwdCommand));
}

/// Create a registry holding every file system command.
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_registry() {
        let registry = create_registry();
        for verb in ["cat", "cd", "cp", "echo", "ls", "mkdir", "mv", "pwd", "rm", "touch"] {
            assert_eq!(registry.get(verb).map(|c| c.name()), Some(verb));
        }
        assert!(registry.get("exit").is_none());
        assert_eq!(registry.get("ls").map(|c| c.name()), Some("ls"));
    }
}
