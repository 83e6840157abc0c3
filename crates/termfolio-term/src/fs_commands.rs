//! Filesystem commands over the static VFS: ls, cd, cat, pwd, clear.

use termfolio_types::error::{Result, TermError};
use termfolio_types::{CommandResult, Effect};
use termfolio_vfs::{Entry, EntryKind, resolve_path};

use crate::interpreter::{Command, CommandRegistry, Environment, Flags};
use crate::markup::{span, typing};

/// Register the filesystem command set.
pub fn register_fs_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(ClearCmd));
}

/// Markup class for an entry in listings.
fn entry_class(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "cyan",
        EntryKind::Executable => "green",
        EntryKind::Hidden => "gray",
        EntryKind::Link => "purple",
        EntryKind::File => "plain",
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List files in the current directory"
    }
    fn usage(&self) -> &str {
        "ls [-a|-l|-la] [dir]"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn man_page(&self) -> Option<&str> {
        Some(
            "Lists the simulated directory. Hidden entries are suppressed\n\
             unless -a (or --all) is given; -l switches to a detailed\n\
             listing with permissions, owner, and size. Flags combine:\n\
             'ls -la' is 'ls -l -a'.",
        )
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let flags = Flags::parse(args);
        let path = match flags.positionals().first() {
            Some(target) => resolve_path(&env.cwd, target),
            None => env.cwd.clone(),
        };
        let entries = env
            .vfs
            .list_directory(&path)
            .map_err(|_| TermError::NotFound(format!("ls: {path}")))?;

        let show_hidden = flags.has("a") || flags.has("all");
        let visible: Vec<&Entry> = entries
            .iter()
            .filter(|e| show_hidden || !e.is_hidden())
            .collect();

        if visible.is_empty() {
            return Ok(CommandResult::text(""));
        }

        if flags.has("l") {
            let lines: Vec<String> = visible
                .iter()
                .map(|e| {
                    format!(
                        "{} {} {:>6} {}",
                        e.permissions,
                        e.owner,
                        e.size,
                        span(entry_class(e.kind), &e.name)
                    )
                })
                .collect();
            return Ok(CommandResult::rich(lines.join("\n")));
        }

        let names: Vec<String> = visible
            .iter()
            .map(|e| span(entry_class(e.kind), &e.name))
            .collect();
        Ok(CommandResult::rich(format!(
            "{}\n\n{}",
            typing("DIRECTORY LISTING:"),
            names.join("  ")
        )))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Navigate to a directory"
    }
    fn usage(&self) -> &str {
        "cd [dir]"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn man_page(&self) -> Option<&str> {
        Some(
            "Changes the working directory. Accepts '~', absolute '~/...'\n\
             paths, relative child names, '.' and '..'. Unknown targets\n\
             leave the working directory unchanged.",
        )
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let target = args.first().copied().unwrap_or("~");
        let resolved = resolve_path(&env.cwd, target);
        if !env.vfs.contains_dir(&resolved) {
            return Err(TermError::NotFound(format!("cd: {target}")));
        }
        Ok(CommandResult::empty().with_effect(Effect::ChangeDir(resolved)))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "View the contents of a file"
    }
    fn usage(&self) -> &str {
        "cat [file]"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let Some(&name) = args.first() else {
            return Err(TermError::Usage("cat [file]".into()));
        };
        let content = env.vfs.read_file(&env.cwd, name).map_err(|e| match e {
            TermError::IsDirectory(_) => TermError::IsDirectory(format!("cat: {name}")),
            _ => TermError::NotFound(format!("cat: {name}")),
        })?;
        Ok(CommandResult::text(content))
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Print the current directory"
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn category(&self) -> &str {
        "filesystem"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let home = format!("/home/{}", env.config.username);
        let expanded = match env.cwd.strip_prefix('~') {
            Some(rest) => format!("{home}{rest}"),
            None => env.cwd.clone(),
        };
        Ok(CommandResult::text(expanded))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandResult> {
        // Empty output; the session wipes the timeline on this signal.
        Ok(CommandResult::empty().with_effect(Effect::ClearScreen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::tests::test_env;
    use crate::markup::strip_markup;
    use std::collections::BTreeSet;
    use termfolio_data::{all_projects, profile, skill_categories};
    use termfolio_types::TermConfig;
    use termfolio_vfs::{Vfs, seed_default};

    fn seeded() -> Vfs {
        seed_default(profile(), all_projects(), skill_categories(), "nova")
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_fs_commands(&mut reg);
        reg
    }

    /// Entry names present in a listing, ignoring headers and detail
    /// columns.
    fn listed_names(vfs: &Vfs, dir: &str, output: &str) -> BTreeSet<String> {
        let known: BTreeSet<&str> = vfs
            .list_directory(dir)
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        strip_markup(output)
            .split_whitespace()
            .filter(|t| known.contains(t))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn ls_hides_hidden_entries_by_default() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("ls", &env);
        assert!(!r.error);
        assert!(r.rich);
        let names = listed_names(&vfs, "~", &r.output);
        assert!(names.contains("about.txt"));
        assert!(!names.contains(".secret"));
    }

    #[test]
    fn ls_la_is_a_strict_superset_of_plain_ls() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let reg = registry();
        let plain = listed_names(&vfs, "~", &reg.execute("ls", &env).output);
        let long_all = listed_names(&vfs, "~", &reg.execute("ls -la", &env).output);
        assert!(plain.is_subset(&long_all));
        assert!(long_all.contains(".secret"));
        assert!(long_all.contains(".matrix"));
        assert!(long_all.len() > plain.len());
    }

    #[test]
    fn ls_la_equals_separate_flags() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let reg = registry();
        let combined = listed_names(&vfs, "~", &reg.execute("ls -la", &env).output);
        let separate = listed_names(&vfs, "~", &reg.execute("ls -l -a", &env).output);
        assert_eq!(combined, separate);
    }

    #[test]
    fn ls_detail_rows_carry_permissions_and_owner() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("ls -l", &env);
        let plain = strip_markup(&r.output);
        assert!(plain.contains("drwxr-xr-x"));
        assert!(plain.contains("-rwxr-xr-x"));
        assert!(plain.contains("nova"));
    }

    #[test]
    fn ls_with_dir_argument() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("ls projects", &env);
        assert!(!r.error);
        assert!(listed_names(&vfs, "~/projects", &r.output).contains("latest"));
    }

    #[test]
    fn ls_unknown_dir_is_error() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("ls ghosts", &env);
        assert!(r.error);
        assert!(r.output.contains("ghosts"));
    }

    #[test]
    fn cd_valid_target_signals_change_dir() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("cd projects", &env);
        assert!(!r.error);
        assert_eq!(r.effect, Some(Effect::ChangeDir("~/projects".into())));
    }

    #[test]
    fn cd_without_args_goes_home() {
        let vfs = seeded();
        let config = TermConfig::default();
        let mut env = test_env(&vfs, &config);
        env.cwd = "~/projects".to_string();
        let r = registry().execute("cd", &env);
        assert_eq!(r.effect, Some(Effect::ChangeDir("~".into())));
    }

    #[test]
    fn cd_unknown_target_is_error_without_effect() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("cd nowhere", &env);
        assert!(r.error);
        assert!(r.effect.is_none());
        assert!(r.output.contains("nowhere"));
    }

    #[test]
    fn cat_reads_seeded_file() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("cat about.txt", &env);
        assert!(!r.error);
        assert_eq!(r.output, profile().bio.long);
    }

    #[test]
    fn cat_missing_file_is_not_found_never_a_crash() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("cat ghost.txt", &env);
        assert!(r.error);
        assert!(r.output.contains("ghost.txt"));
        assert!(r.output.contains("No such file or directory"));
    }

    #[test]
    fn cat_on_directory_is_type_mismatch() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("cat projects", &env);
        assert!(r.error);
        assert!(r.output.contains("Is a directory"));
    }

    #[test]
    fn cat_without_args_is_usage_error() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("cat", &env);
        assert!(r.error);
        assert!(r.output.contains("usage"));
    }

    #[test]
    fn pwd_expands_home() {
        let vfs = seeded();
        let config = TermConfig::default();
        let mut env = test_env(&vfs, &config);
        let reg = registry();
        assert_eq!(reg.execute("pwd", &env).output, "/home/nova");
        env.cwd = "~/projects".to_string();
        assert_eq!(reg.execute("pwd", &env).output, "/home/nova/projects");
    }

    #[test]
    fn clear_is_empty_output_with_signal() {
        let vfs = seeded();
        let config = TermConfig::default();
        let env = test_env(&vfs, &config);
        let r = registry().execute("clear", &env);
        assert!(r.output.is_empty());
        assert!(!r.error);
        assert_eq!(r.effect, Some(Effect::ClearScreen));
    }
}
