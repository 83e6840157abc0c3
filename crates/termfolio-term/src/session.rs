//! The session engine: history timeline, draft-preserving recall,
//! completion, working directory, and boot gating.
//!
//! The session exclusively owns its mutable state. Handlers never touch
//! it; their `Effect` signals are applied here after dispatch.

use termfolio_data::{all_projects, profile, skill_categories};
use termfolio_types::{CommandResult, Effect, TermConfig};
use termfolio_vfs::{Vfs, seed_default};

use crate::boot::{BootEvent, BootPhase, BootSequence};
use crate::interpreter::{CommandRegistry, Environment, register_builtins};

/// One entry in the history timeline. `command` is empty for
/// system-generated lines (boot output).
#[derive(Debug, Clone)]
pub struct HistoryItem {
    pub id: u64,
    pub command: String,
    pub result: CommandResult,
}

/// Recall direction for arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Up,
    Down,
}

/// What `submit` hands back to the frontend.
#[derive(Debug, Clone)]
pub struct Submission {
    pub result: CommandResult,
    /// Artificial delay the frontend must honor before revealing the
    /// output of a `loading` result.
    pub delay_ms: u64,
}

/// A single terminal session: registry, VFS, timeline, boot machine.
pub struct Session {
    registry: CommandRegistry,
    vfs: Vfs,
    config: TermConfig,
    boot: BootSequence,
    history: Vec<HistoryItem>,
    command_history: Vec<String>,
    /// Recall cursor: `-1` is the live draft, `0..len` counts back from
    /// the most recent submitted line.
    cursor: isize,
    draft: Option<String>,
    cwd: String,
    next_id: u64,
}

impl Session {
    /// A fresh session at `~` with the default registry and seeded VFS,
    /// boot machine in `Logo`.
    pub fn new(config: TermConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        let vfs = seed_default(
            profile(),
            all_projects(),
            skill_categories(),
            &config.username,
        );
        let boot = BootSequence::new(&config);
        log::info!("session created for {}@{}", config.username, config.hostname);
        Self {
            registry,
            vfs,
            config,
            boot,
            history: Vec::new(),
            command_history: Vec::new(),
            cursor: -1,
            draft: None,
            cwd: "~".to_string(),
            next_id: 0,
        }
    }

    // -- Boot gating ------------------------------------------------------

    /// Advance the boot machine, appending its output lines to the
    /// timeline as system entries. Returns the raw events for frontends
    /// that want to react to phase changes.
    pub fn tick_boot(&mut self, elapsed_ms: u64) -> Vec<BootEvent> {
        let events = self.boot.tick(elapsed_ms);
        for event in &events {
            if let BootEvent::Line(line) = event {
                let result = if line.rich {
                    CommandResult::rich(line.text.clone())
                } else {
                    CommandResult::text(line.text.clone())
                };
                self.push_system_line(result);
            }
        }
        events
    }

    /// Key-press interrupt during the logo phase.
    pub fn interrupt_boot(&mut self) {
        self.boot.interrupt();
    }

    pub fn boot_phase(&self) -> BootPhase {
        self.boot.phase()
    }

    /// Input is enabled only once the boot machine reaches `Ready`.
    pub fn input_enabled(&self) -> bool {
        self.boot.is_ready()
    }

    fn push_system_line(&mut self, result: CommandResult) {
        let id = self.next_id;
        self.next_id += 1;
        self.history.push(HistoryItem {
            id,
            command: String::new(),
            result,
        });
    }

    // -- Submission -------------------------------------------------------

    /// Execute a raw input line.
    ///
    /// Appends a pending history item, dispatches, patches the item in
    /// place with the resolved result, then applies effect signals.
    /// Serialized by construction: the caller re-enables input only
    /// after this returns.
    pub fn submit(&mut self, raw: &str) -> Submission {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            // No history entry with visible output for empty input.
            return Submission {
                result: CommandResult::empty(),
                delay_ms: 0,
            };
        }

        self.remember_command(trimmed);
        self.cursor = -1;
        self.draft = None;

        let id = self.next_id;
        self.next_id += 1;
        self.history.push(HistoryItem {
            id,
            command: trimmed.to_string(),
            result: CommandResult::empty(),
        });

        let env = Environment {
            cwd: self.cwd.clone(),
            vfs: &self.vfs,
            profile: profile(),
            projects: all_projects(),
            skills: skill_categories(),
            config: &self.config,
        };
        let result = self.registry.execute(trimmed, &env);
        log::debug!(
            "dispatch '{trimmed}': error={} rich={} loading={}",
            result.error,
            result.rich,
            result.loading
        );

        match &result.effect {
            Some(Effect::ClearScreen) => {
                // Bulk-clear is the one non-append mutation; the pending
                // item goes with it.
                self.history.clear();
            }
            Some(Effect::ChangeDir(path)) => {
                self.cwd = path.clone();
                self.patch(id, result.clone());
            }
            Some(Effect::RebootSequence) => {
                self.patch(id, result.clone());
                self.boot.restart();
            }
            _ => {
                self.patch(id, result.clone());
            }
        }

        let delay_ms = if result.loading {
            self.config.loading_delay_ms
        } else {
            0
        };
        Submission { result, delay_ms }
    }

    fn patch(&mut self, id: u64, result: CommandResult) {
        if let Some(item) = self.history.iter_mut().find(|item| item.id == id) {
            item.result = result;
        }
    }

    fn remember_command(&mut self, line: &str) {
        self.command_history.push(line.to_string());
        if self.command_history.len() > self.config.history_limit {
            self.command_history.remove(0);
        }
    }

    // -- History recall ---------------------------------------------------

    /// Arrow-key navigation. Returns the text to place in the input box.
    ///
    /// The first `Up` stashes the live draft; `Down` past the most
    /// recent entry restores it (empty string when there was none). The
    /// cursor always stays within `[-1, len - 1]`.
    pub fn navigate_history(&mut self, direction: HistoryDirection, current_draft: &str) -> String {
        if self.command_history.is_empty() {
            return current_draft.to_string();
        }
        let len = self.command_history.len() as isize;
        match direction {
            HistoryDirection::Up => {
                if self.cursor == -1 {
                    self.draft = Some(current_draft.to_string());
                }
                self.cursor = (self.cursor + 1).min(len - 1);
                self.command_history[(len - 1 - self.cursor) as usize].clone()
            }
            HistoryDirection::Down => {
                self.cursor = (self.cursor - 1).max(-1);
                if self.cursor == -1 {
                    self.draft.clone().unwrap_or_default()
                } else {
                    self.command_history[(len - 1 - self.cursor) as usize].clone()
                }
            }
        }
    }

    // -- Working directory ------------------------------------------------

    /// Resolve `target` against the VFS and move there. Unknown targets
    /// leave the working directory unchanged and surface an error
    /// result. The `cd` command routes through this via its
    /// `ChangeDir` effect.
    pub fn change_directory(&mut self, target: &str) -> CommandResult {
        let resolved = termfolio_vfs::resolve_path(&self.cwd, target);
        if !self.vfs.contains_dir(&resolved) {
            return CommandResult::error_text(format!(
                "cd: {target}: No such file or directory"
            ));
        }
        self.cwd = resolved;
        CommandResult::empty()
    }

    // -- Completion -------------------------------------------------------

    /// Prefix completions for a partial command name.
    pub fn complete(&self, partial: &str) -> Vec<String> {
        self.registry.completions(partial)
    }

    // -- Accessors --------------------------------------------------------

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn prompt(&self) -> String {
        self.config.prompt(&self.cwd)
    }

    pub fn config(&self) -> &TermConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A session with an instant boot, already driven to `Ready`.
    fn ready_session() -> Session {
        let config = TermConfig::from_toml_str("boot_speed_pct = 0\nloading_delay_ms = 0").unwrap();
        let mut session = Session::new(config);
        session.tick_boot(0);
        assert!(session.input_enabled());
        session
    }

    #[test]
    fn input_disabled_until_boot_ready() {
        let session = Session::new(TermConfig::default());
        assert!(!session.input_enabled());
        assert_eq!(session.boot_phase(), BootPhase::Logo);
    }

    #[test]
    fn boot_lines_land_in_timeline_as_system_entries() {
        let mut session = ready_session();
        assert!(!session.history().is_empty());
        assert!(session.history().iter().all(|item| item.command.is_empty()));
    }

    #[test]
    fn submit_appends_command_and_result() {
        let mut session = ready_session();
        let before = session.history().len();
        let sub = session.submit("pwd");
        assert_eq!(sub.result.output, "/home/nova");
        let item = session.history().last().unwrap();
        assert_eq!(item.command, "pwd");
        assert_eq!(item.result.output, "/home/nova");
        assert_eq!(session.history().len(), before + 1);
    }

    #[test]
    fn history_ids_are_monotonic() {
        let mut session = ready_session();
        session.submit("pwd");
        session.submit("whoami");
        let ids: Vec<u64> = session.history().iter().map(|i| i.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn empty_submit_leaves_no_trace() {
        let mut session = ready_session();
        let before = session.history().len();
        let sub = session.submit("   ");
        assert!(sub.result.output.is_empty());
        assert_eq!(session.history().len(), before);
    }

    #[test]
    fn unknown_command_is_flagged_and_named() {
        let mut session = ready_session();
        let sub = session.submit("frobnicate");
        assert!(sub.result.error);
        assert!(sub.result.output.contains("frobnicate"));
    }

    #[test]
    fn errors_stay_in_the_timeline() {
        let mut session = ready_session();
        session.submit("cat ghost.txt");
        session.submit("pwd");
        let outputs: Vec<&str> = session
            .history()
            .iter()
            .map(|i| i.result.output.as_str())
            .collect();
        assert!(outputs.iter().any(|o| o.contains("ghost.txt")));
        assert!(outputs.iter().any(|o| o.contains("/home/nova")));
    }

    #[test]
    fn cd_updates_cwd_and_prompt() {
        let mut session = ready_session();
        assert_eq!(session.cwd(), "~");
        session.submit("cd projects");
        assert_eq!(session.cwd(), "~/projects");
        assert!(session.prompt().contains("~/projects"));
    }

    #[test]
    fn failed_cd_leaves_cwd_unchanged() {
        let mut session = ready_session();
        session.submit("cd projects");
        let sub = session.submit("cd nowhere");
        assert!(sub.result.error);
        assert_eq!(session.cwd(), "~/projects");
    }

    #[test]
    fn change_directory_direct_api_matches_cd() {
        let mut session = ready_session();
        let ok = session.change_directory("projects");
        assert!(!ok.error);
        assert_eq!(session.cwd(), "~/projects");
        let bad = session.change_directory("nowhere");
        assert!(bad.error);
        assert!(bad.output.contains("nowhere"));
        assert_eq!(session.cwd(), "~/projects");
    }

    #[test]
    fn cd_dotdot_walks_back_up() {
        let mut session = ready_session();
        session.submit("cd projects");
        session.submit("cd ..");
        assert_eq!(session.cwd(), "~");
    }

    #[test]
    fn cat_respects_cwd() {
        let mut session = ready_session();
        session.submit("cd projects/pulseboard");
        let sub = session.submit("cat README.md");
        assert!(!sub.result.error);
        assert!(sub.result.output.contains("Pulseboard"));
    }

    #[test]
    fn clear_empties_timeline_twice_in_a_row() {
        let mut session = ready_session();
        session.submit("pwd");
        let first = session.submit("clear");
        assert!(first.result.output.is_empty());
        assert!(!first.result.error);
        assert!(session.history().is_empty());
        let second = session.submit("clear");
        assert!(second.result.output.is_empty());
        assert!(!second.result.error);
        assert!(session.history().is_empty());
    }

    #[test]
    fn clear_does_not_erase_recall_history() {
        let mut session = ready_session();
        session.submit("pwd");
        session.submit("clear");
        // The raw command history still recalls "clear" then "pwd".
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "clear");
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "pwd");
    }

    #[test]
    fn loading_results_carry_configured_delay() {
        let config =
            TermConfig::from_toml_str("boot_speed_pct = 0\nloading_delay_ms = 250").unwrap();
        let mut session = Session::new(config);
        session.tick_boot(0);
        let plain = session.submit("pwd");
        assert_eq!(plain.delay_ms, 0);
        let loading = session.submit("contact");
        assert!(loading.result.loading);
        assert_eq!(loading.delay_ms, 250);
    }

    // -- History recall ---------------------------------------------------

    #[test]
    fn up_walks_backward_from_most_recent() {
        let mut session = ready_session();
        session.submit("pwd");
        session.submit("whoami");
        session.submit("ls");
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "ls");
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "whoami");
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "pwd");
        // Clamped at the oldest entry.
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "pwd");
    }

    #[test]
    fn up_n_then_down_n_restores_the_draft() {
        let mut session = ready_session();
        session.submit("pwd");
        session.submit("whoami");
        session.submit("ls");
        let draft = "cat abo";
        let n = 3;
        let mut shown = draft.to_string();
        for _ in 0..n {
            shown = session.navigate_history(HistoryDirection::Up, &shown);
        }
        for _ in 0..n {
            shown = session.navigate_history(HistoryDirection::Down, &shown);
        }
        assert_eq!(shown, draft);
    }

    #[test]
    fn down_past_most_recent_returns_empty_without_draft() {
        let mut session = ready_session();
        session.submit("pwd");
        session.navigate_history(HistoryDirection::Up, "");
        assert_eq!(session.navigate_history(HistoryDirection::Down, "pwd"), "");
    }

    #[test]
    fn navigation_with_no_history_returns_draft() {
        let mut session = ready_session();
        assert_eq!(
            session.navigate_history(HistoryDirection::Up, "half-typed"),
            "half-typed"
        );
    }

    #[test]
    fn submit_resets_the_cursor() {
        let mut session = ready_session();
        session.submit("pwd");
        session.submit("whoami");
        session.navigate_history(HistoryDirection::Up, "");
        session.submit("ls");
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "ls");
    }

    #[test]
    fn recall_history_respects_the_cap() {
        let config = TermConfig::from_toml_str("boot_speed_pct = 0\nhistory_limit = 2").unwrap();
        let mut session = Session::new(config);
        session.tick_boot(0);
        session.submit("pwd");
        session.submit("whoami");
        session.submit("ls");
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "ls");
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "whoami");
        // "pwd" has been evicted.
        assert_eq!(session.navigate_history(HistoryDirection::Up, ""), "whoami");
    }

    // -- Completion -------------------------------------------------------

    #[test]
    fn completion_single_match() {
        let session = ready_session();
        assert_eq!(session.complete("who"), vec!["whoami".to_string()]);
    }

    #[test]
    fn completion_multiple_matches() {
        let session = ready_session();
        let matches = session.complete("pro");
        assert!(matches.contains(&"project".to_string()));
        assert!(matches.contains(&"projects".to_string()));
    }

    #[test]
    fn completion_never_offers_hidden_commands() {
        let session = ready_session();
        assert!(session.complete("/").is_empty());
        assert!(session.complete("sudo ").is_empty());
    }

    // -- Reboot -----------------------------------------------------------

    #[test]
    fn boot_command_disables_input_and_replays_without_failure() {
        let mut session = ready_session();
        // Drop the first boot's lines so only the replay is inspected.
        session.submit("clear");
        let sub = session.submit("boot");
        assert_eq!(sub.result.effect, Some(Effect::RebootSequence));
        assert!(!session.input_enabled());
        session.tick_boot(0);
        assert!(session.input_enabled());
        let replayed: Vec<&str> = session
            .history()
            .iter()
            .map(|i| i.result.output.as_str())
            .collect();
        assert!(!replayed.iter().any(|o| o.contains("Access denied")));
    }

    #[test]
    fn interrupt_during_logo_skips_to_login() {
        let config = TermConfig::default();
        let mut session = Session::new(config);
        assert_eq!(session.boot_phase(), BootPhase::Logo);
        session.interrupt_boot();
        assert_eq!(session.boot_phase(), BootPhase::Login);
    }

    // -- Scenario sweep ---------------------------------------------------

    #[test]
    fn help_lists_the_core_commands() {
        let mut session = ready_session();
        let sub = session.submit("help");
        assert!(!sub.result.error);
        for name in ["clear", "projects", "skills", "about"] {
            assert!(sub.result.output.contains(name), "help missing {name}");
        }
    }

    #[test]
    fn every_root_command_dispatches_without_fault() {
        let mut session = ready_session();
        for line in [
            "help",
            "ls",
            "ls -la",
            "ls -l ~/projects",
            "cd projects",
            "cd ..",
            "cat about.txt",
            "pwd",
            "whoami",
            "projects",
            "project pulseboard",
            "skills",
            "skills --graph",
            "skills --graph --sound",
            "about",
            "about --full",
            "contact",
            "experience",
            "education",
            "languages",
            "interests",
            "testimonials",
            "man ls",
            "sudo",
            "exit",
            "matrix",
            "hack",
            "sudo make coffee",
            "rm -rf /",
            "sudo rm -rf /",
            "/crash",
            "/matrix",
            "/glitch",
            "/hack",
        ] {
            let sub = session.submit(line);
            assert!(!sub.result.error, "'{line}' unexpectedly errored: {}", sub.result.output);
        }
    }
}
