//! The result record a command hands back, and the effect signals it
//! may carry.
//!
//! `output` is always defined; an empty string means "no visible output"
//! (e.g. `clear`). When `rich` is set the rendering surface must interpret
//! `output` as span markup rather than literal text — that contract is the
//! renderer's business, the core only tags it.

use crate::error::TermError;

/// A deferred side effect executed by the session or frontend after the
/// result is committed to the history timeline.
///
/// Commands never mutate session state directly; they return one of these
/// signals and the session applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Wipe the history timeline (the `clear` command).
    ClearScreen,
    /// Update the session's current working directory to the resolved path.
    ChangeDir(String),
    /// Replay the boot sequence (the `boot` command).
    RebootSequence,
    /// Ask the frontend to open a mail composer for the given address.
    ComposeMail(String),
}

/// Output produced by a command.
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    /// Display text, or span markup when `rich` is set. Empty = invisible.
    pub output: String,
    /// The output is markup for the rendering surface, not literal text.
    pub rich: bool,
    /// The result represents a genuine failure (usage, not-found, fault).
    pub error: bool,
    /// The frontend should show a loading animation and apply an
    /// artificial delay before revealing the output.
    pub loading: bool,
    /// Deferred side effect, applied after the result is committed.
    pub effect: Option<Effect>,
}

impl CommandResult {
    /// A result with no visible output and no effect.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Plain-text output.
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// Markup output for the rendering surface.
    pub fn rich(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            rich: true,
            ..Self::default()
        }
    }

    /// A flagged error result with plain-text output.
    pub fn error_text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: true,
            ..Self::default()
        }
    }

    /// Attach an effect signal.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Mark the result as a loading command.
    pub fn with_loading(mut self) -> Self {
        self.loading = true;
        self
    }

    /// Downgrade an error into a displayable flagged result.
    ///
    /// Every `TermError` variant is recovered here; nothing escapes the
    /// dispatch boundary as a fault.
    pub fn from_error(err: &TermError) -> Self {
        Self::error_text(format!("{err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_output_and_no_flags() {
        let r = CommandResult::empty();
        assert!(r.output.is_empty());
        assert!(!r.rich);
        assert!(!r.error);
        assert!(!r.loading);
        assert!(r.effect.is_none());
    }

    #[test]
    fn text_is_plain() {
        let r = CommandResult::text("hello");
        assert_eq!(r.output, "hello");
        assert!(!r.rich);
        assert!(!r.error);
    }

    #[test]
    fn rich_sets_flag() {
        let r = CommandResult::rich("[[cyan]]hi[[/]]");
        assert!(r.rich);
    }

    #[test]
    fn error_text_sets_flag() {
        let r = CommandResult::error_text("nope");
        assert!(r.error);
        assert_eq!(r.output, "nope");
    }

    #[test]
    fn with_effect_attaches_signal() {
        let r = CommandResult::empty().with_effect(Effect::ClearScreen);
        assert_eq!(r.effect, Some(Effect::ClearScreen));
    }

    #[test]
    fn with_loading_sets_flag() {
        let r = CommandResult::text("connecting...").with_loading();
        assert!(r.loading);
    }

    #[test]
    fn from_error_carries_message_and_flag() {
        let e = TermError::UnknownCommand("zap".into());
        let r = CommandResult::from_error(&e);
        assert!(r.error);
        assert!(r.output.contains("zap"));
    }

    #[test]
    fn effect_variants_are_debug_and_eq() {
        let effects = [
            Effect::ClearScreen,
            Effect::ChangeDir("~/projects".into()),
            Effect::RebootSequence,
            Effect::ComposeMail("nova@example.com".into()),
        ];
        for e in &effects {
            let _ = format!("{e:?}");
            assert_eq!(e, &e.clone());
        }
    }
}
