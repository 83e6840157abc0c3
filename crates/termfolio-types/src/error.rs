//! Error types for the termfolio terminal.

use std::io;

/// Errors produced by the terminal core.
///
/// `Usage`, `NotFound`, `IsDirectory`/`NotADirectory`, and `UnknownCommand`
/// are the recoverable taxonomy the dispatcher downgrades into flagged
/// command results. `Handler` covers unexpected faults inside a command.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("{0}: No such file or directory")]
    NotFound(String),

    #[error("{0}: Is a directory")]
    IsDirectory(String),

    #[error("{0}: Not a directory")]
    NotADirectory(String),

    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownCommand(String),

    #[error("handler fault: {0}")]
    Handler(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_display() {
        let e = TermError::Usage("project [name]".into());
        assert_eq!(format!("{e}"), "usage: project [name]");
    }

    #[test]
    fn not_found_display() {
        let e = TermError::NotFound("cat: ghost.txt".into());
        assert_eq!(format!("{e}"), "cat: ghost.txt: No such file or directory");
    }

    #[test]
    fn is_directory_display() {
        let e = TermError::IsDirectory("cat: projects".into());
        assert_eq!(format!("{e}"), "cat: projects: Is a directory");
    }

    #[test]
    fn unknown_command_display_contains_token() {
        let e = TermError::UnknownCommand("frobnicate".into());
        let msg = format!("{e}");
        assert!(msg.contains("frobnicate"));
        assert!(msg.contains("help"));
    }

    #[test]
    fn handler_fault_display() {
        let e = TermError::Handler("index out of range".into());
        assert_eq!(format!("{e}"), "handler fault: index out of range");
    }

    #[test]
    fn config_error_display() {
        let e = TermError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: TermError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let bad_toml = "this is [[[not valid toml";
        let toml_err = toml::from_str::<toml::Value>(bad_toml).unwrap_err();
        let e: TermError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: TermError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn error_is_debug() {
        let e = TermError::NotFound("x".into());
        assert!(format!("{e:?}").contains("NotFound"));
    }

    #[test]
    fn result_alias_round_trip() {
        let ok: Result<u8> = Ok(7);
        assert_eq!(ok.unwrap(), 7);
        let err: Result<u8> = Err(TermError::Usage("cat [file]".into()));
        assert!(err.is_err());
    }
}
