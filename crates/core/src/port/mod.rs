// Port Layer - Interfaces for external dependencies

pub mod console;

// Re-exports
pub use console::{Console, ConsoleEvent, ScriptedConsole};

#[cfg(test)]
pub use console::MockConsole;
