//! Command trait, registry, and dispatch logic.
//!
//! Dispatch order: exact full-line overrides (multi-word easter eggs)
//! first, then registry-intercepted metadata commands (`help`, `man`),
//! then ordinary tokenized lookup. Every handler failure is recovered at
//! this boundary into a flagged `CommandResult`; nothing escapes to the
//! caller as an error.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use termfolio_data::{Profile, Project, SkillCategory};
use termfolio_types::error::{Result, TermError};
use termfolio_types::{CommandResult, TermConfig};
use termfolio_vfs::Vfs;

use crate::markup::typing;

/// Read-only context passed to every command.
///
/// Commands never mutate session state; mutations travel back as
/// `Effect` signals on the result.
pub struct Environment<'a> {
    /// Current working directory (display path).
    pub cwd: String,
    /// The virtual file system.
    pub vfs: &'a Vfs,
    /// The personal-info record.
    pub profile: &'a Profile,
    /// All portfolio projects.
    pub projects: &'a [Project],
    /// All skill categories.
    pub skills: &'a [SkillCategory],
    /// Terminal configuration.
    pub config: &'a TermConfig,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types). Names containing spaces
    /// are exact-phrase overrides; names starting with `/` are hidden.
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls \[-a|-l|-la\] \[dir\]").
    fn usage(&self) -> &str;

    /// Command category for grouping in `help` output.
    fn category(&self) -> &str {
        "general"
    }

    /// Extended text for `man`, when a one-liner is not enough.
    fn man_page(&self) -> Option<&str> {
        None
    }

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandResult>;
}

/// Parsed view over raw arguments: flags split out from positionals.
///
/// Short flags may appear combined (`-la` is `-l -a`) or separately;
/// long flags (`--graph`) keep their name. Flags are positionally
/// unordered.
#[derive(Debug, Default)]
pub struct Flags {
    flags: BTreeSet<String>,
    positionals: Vec<String>,
}

impl Flags {
    /// Split `args` into flags and positionals.
    pub fn parse(args: &[&str]) -> Self {
        let mut parsed = Self::default();
        for arg in args {
            if let Some(long) = arg.strip_prefix("--") {
                if !long.is_empty() {
                    parsed.flags.insert(long.to_string());
                    continue;
                }
            } else if let Some(shorts) = arg.strip_prefix('-') {
                if !shorts.is_empty() && shorts.chars().all(|c| c.is_ascii_alphabetic()) {
                    for c in shorts.chars() {
                        parsed.flags.insert(c.to_string());
                    }
                    continue;
                }
            }
            parsed.positionals.push((*arg).to_string());
        }
        parsed
    }

    /// Whether a flag (short letter or long name) was given.
    pub fn has(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Positional arguments in order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Parse and execute a command line.
    ///
    /// Never returns an error: handler faults of every kind are
    /// downgraded here into `error: true` results.
    pub fn execute(&self, line: &str, env: &Environment<'_>) -> CommandResult {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandResult::empty();
        }

        // Exact full-line overrides before ordinary tokenization, so
        // multi-word phrases are not misread as command + args.
        if let Some(cmd) = self.commands.get(trimmed) {
            return self.run(cmd.as_ref(), &[], env);
        }

        let tokens: Vec<&str> = trimmed.split_whitespace().collect();
        let name = tokens[0];
        let args = &tokens[1..];

        // Metadata commands need the registry itself.
        match name {
            "help" => return self.execute_help(args),
            "man" => return self.execute_man(args),
            _ => {}
        }

        match self.commands.get(name) {
            Some(cmd) => self.run(cmd.as_ref(), args, env),
            None => {
                log::debug!("unknown command: {name}");
                CommandResult::from_error(&TermError::UnknownCommand(name.to_string()))
            }
        }
    }

    /// Invoke a handler inside the failure boundary.
    fn run(&self, cmd: &dyn Command, args: &[&str], env: &Environment<'_>) -> CommandResult {
        match cmd.execute(args, env) {
            Ok(result) => result,
            Err(err) => {
                if matches!(err, TermError::Handler(_)) {
                    log::warn!("command '{}' faulted: {err}", cmd.name());
                }
                CommandResult::from_error(&err)
            }
        }
    }

    /// Built-in `help` with access to the registry.
    fn execute_help(&self, args: &[&str]) -> CommandResult {
        if let Some(&name) = args.first() {
            return match self.commands.get(name) {
                Some(cmd) => CommandResult::text(format!(
                    "{} ({})\n  {}\n  Usage: {}",
                    cmd.name(),
                    cmd.category(),
                    cmd.description(),
                    cmd.usage()
                )),
                None => CommandResult::from_error(&TermError::UnknownCommand(name.to_string())),
            };
        }

        // Group visible commands by category; phrase overrides and
        // slash-hidden commands stay out of the listing.
        let mut categories: BTreeMap<&str, Vec<(&str, &str, &str)>> = BTreeMap::new();
        for cmd in self.commands.values() {
            let name = cmd.name();
            if name.contains(' ') || name.starts_with('/') {
                continue;
            }
            categories
                .entry(cmd.category())
                .or_default()
                .push((name, cmd.usage(), cmd.description()));
        }
        let mut general = categories.remove("general").unwrap_or_default();
        general.push(("help", "help [command]", "Display this help message"));
        general.push(("man", "man [command]", "Display manual page for a command"));
        categories.insert("general", general);

        let mut out = typing("Available commands:");
        out.push('\n');
        for (cat, mut cmds) in categories {
            cmds.sort_by_key(|(name, _, _)| *name);
            out.push_str(&format!("\n  [{cat}]\n"));
            for (_, usage, desc) in &cmds {
                out.push_str(&format!("    {usage:<24} - {desc}\n"));
            }
        }
        out.push_str(
            "\nUse arrow keys to navigate command history.\nPress Tab for auto-completion.",
        );
        CommandResult::rich(out)
    }

    /// Built-in `man` with access to command metadata.
    fn execute_man(&self, args: &[&str]) -> CommandResult {
        let Some(&name) = args.first() else {
            return CommandResult::error_text("What manual page do you want?\nUsage: man [command]");
        };
        match self.commands.get(name) {
            Some(cmd) => {
                let mut out = format!(
                    "NAME\n    {} - {}\n\nSYNOPSIS\n    {}\n",
                    cmd.name(),
                    cmd.description(),
                    cmd.usage()
                );
                if let Some(page) = cmd.man_page() {
                    out.push_str(&format!("\nDESCRIPTION\n    {}\n", page.replace('\n', "\n    ")));
                }
                CommandResult::text(out)
            }
            None => CommandResult::error_text(format!("No manual entry for {name}")),
        }
    }

    /// Return a sorted list of (name, description) pairs for visible
    /// commands.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .values()
            .filter(|c| !c.name().contains(' ') && !c.name().starts_with('/'))
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    /// Completions for a partial command name. Phrase overrides and
    /// slash-hidden commands never complete.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        if partial.is_empty() {
            return Vec::new();
        }
        self.commands
            .keys()
            .filter(|name| {
                name.starts_with(partial) && !name.contains(' ') && !name.starts_with('/')
            })
            .cloned()
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register every built-in command module into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    crate::fs_commands::register_fs_commands(reg);
    crate::info_commands::register_info_commands(reg);
    crate::fun_commands::register_fun_commands(reg);
}
