//! Terminal core for the portfolio site.
//!
//! The terminal is a registry-based dispatch system. Commands implement
//! the `Command` trait and are registered by name; the dispatcher parses
//! input lines, resolves the name (exact-phrase overrides first), and
//! invokes `execute()`. The session engine owns the history timeline and
//! the working directory; the boot sequence state machine gates input
//! until it reaches `Ready`.

pub mod boot;
mod fs_commands;
mod fun_commands;
mod info_commands;
mod interpreter;
pub mod markup;
mod session;

pub use boot::{BootEvent, BootLine, BootPhase, BootSequence};
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// Parsed flag/positional view over raw arguments.
pub use interpreter::Flags;
/// Register every built-in command module into a registry.
pub use interpreter::register_builtins;
pub use session::{HistoryDirection, HistoryItem, Session, Submission};
