//! Fun commands and easter eggs: sudo, exit, matrix, hack, boot, the
//! exact-phrase overrides, and the slash-prefixed hidden commands.
//!
//! The alarming ones (`rm -rf /`, `/crash`) are theatrics: ordinary
//! successful results wearing alert styling, never part of the real
//! error taxonomy.

use termfolio_types::error::Result;
use termfolio_types::{CommandResult, Effect};

use crate::interpreter::{Command, CommandRegistry, Environment};
use crate::markup::{alert, glitch, span};

/// Register the fun command set, easter eggs included.
pub fn register_fun_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(SudoCmd));
    reg.register(Box::new(ExitCmd));
    reg.register(Box::new(MatrixCmd { name: "matrix" }));
    reg.register(Box::new(MatrixCmd { name: "/matrix" }));
    reg.register(Box::new(HackCmd { name: "hack" }));
    reg.register(Box::new(HackCmd { name: "/hack" }));
    reg.register(Box::new(BootCmd));
    reg.register(Box::new(CrashCmd));
    reg.register(Box::new(GlitchCmd));
    reg.register(Box::new(CoffeeCmd));
    reg.register(Box::new(RmrfCmd { name: "rm -rf /" }));
    reg.register(Box::new(RmrfCmd {
        name: "sudo rm -rf /",
    }));
}

// ---------------------------------------------------------------------------
// sudo
// ---------------------------------------------------------------------------

struct SudoCmd;
impl Command for SudoCmd {
    fn name(&self) -> &str {
        "sudo"
    }
    fn description(&self) -> &str {
        "Don't even try"
    }
    fn usage(&self) -> &str {
        "sudo"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::rich(span(
            "blink",
            "ACCESS DENIED: Nice try, but you don't have sudo privileges in this terminal.",
        )))
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "\"Exit\" the terminal (not really)"
    }
    fn usage(&self) -> &str {
        "exit"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::rich(format!(
            "{}\n\n{}\n{}",
            glitch("Attempting to exit terminal..."),
            span("red", "ERROR: Cannot exit system. This terminal is permanent."),
            span("yellow", "Try switching to a different theme instead."),
        )))
    }
}

// ---------------------------------------------------------------------------
// matrix (and /matrix)
// ---------------------------------------------------------------------------

const MATRIX_RAIN: &str = "\
0010111011100011010101000010101010111001101010011101
1011001101010101001011101010011101010100110101010101
0101010001101010101000010101010111010101100110101010
0110101010101011001101010101010110101010100110010110
0101010101010010101010101110011010101010110101010101
1010110101110101010101010100110101010101011001101010";

struct MatrixCmd {
    name: &'static str,
}
impl Command for MatrixCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        "Activate Matrix effect"
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], env: &Environment<'_>) -> Result<CommandResult> {
        let first_name = env
            .profile
            .basics
            .name
            .split_whitespace()
            .next()
            .unwrap_or("Neo");
        Ok(CommandResult::rich(span(
            "green",
            &format!(
                "Initiating Matrix protocol...\nSystem override in progress...\n{MATRIX_RAIN}\n\n\
                 Wake up, {first_name}...\nThe Matrix has you...\nFollow the white rabbit...\n\n\
                 Knock, knock."
            ),
        )))
    }
}

// ---------------------------------------------------------------------------
// hack (and /hack)
// ---------------------------------------------------------------------------

struct HackCmd {
    name: &'static str,
}
impl Command for HackCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        "Simulate \"hacking\" a target system"
    }
    fn usage(&self) -> &str {
        "hack [target]"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, args: &[&str], _env: &Environment<'_>) -> Result<CommandResult> {
        let target = args.first().copied().unwrap_or("mainframe");
        Ok(CommandResult::rich(format!(
            "{}\n\n{}\n{}\n{}\n{}\n{}\n\n{}\n{}",
            glitch(&format!(
                "INITIATING HACK SEQUENCE: {}",
                target.to_uppercase()
            )),
            span("yellow", "Establishing connection..."),
            span("yellow", "Bypassing firewall..."),
            span("yellow", "Cracking encryption..."),
            span("yellow", "Intercepting data packets..."),
            span("green", "Access granted! You're in."),
            span("alert", "WARNING: THIS IS A SIMULATION"),
            span(
                "gray",
                "No actual hacking occurred. This is just a fun terminal feature."
            ),
        ))
        .with_loading())
    }
}

// ---------------------------------------------------------------------------
// boot
// ---------------------------------------------------------------------------

struct BootCmd;
impl Command for BootCmd {
    fn name(&self) -> &str {
        "boot"
    }
    fn description(&self) -> &str {
        "Replay terminal boot sequence"
    }
    fn usage(&self) -> &str {
        "boot"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::text("Initiating boot sequence...")
            .with_effect(Effect::RebootSequence))
    }
}

// ---------------------------------------------------------------------------
// /crash
// ---------------------------------------------------------------------------

struct CrashCmd;
impl Command for CrashCmd {
    fn name(&self) -> &str {
        "/crash"
    }
    fn description(&self) -> &str {
        "Trigger a fake terminal crash"
    }
    fn usage(&self) -> &str {
        "/crash"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::rich(format!(
            "{}\n{}\n{}\n{}\n{}",
            alert("FATAL ERROR: System crash detected"),
            span("red", "ERROR CODE: 0xC000021A"),
            span("yellow", "Attempting recovery..."),
            span("yellow", "..."),
            span("green", "Recovery successful!"),
        )))
    }
}

// ---------------------------------------------------------------------------
// /glitch
// ---------------------------------------------------------------------------

struct GlitchCmd;
impl Command for GlitchCmd {
    fn name(&self) -> &str {
        "/glitch"
    }
    fn description(&self) -> &str {
        "Add glitch effects to terminal"
    }
    fn usage(&self) -> &str {
        "/glitch"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::rich(glitch("GLITCH EFFECT ACTIVATED")))
    }
}

// ---------------------------------------------------------------------------
// sudo make coffee
// ---------------------------------------------------------------------------

const COFFEE_POT: &str = "\
      ( (
       ) )
    ._______.
    |       |]
    \\       /
     `-----'";

struct CoffeeCmd;
impl Command for CoffeeCmd {
    fn name(&self) -> &str {
        "sudo make coffee"
    }
    fn description(&self) -> &str {
        "Attempt to brew coffee"
    }
    fn usage(&self) -> &str {
        "sudo make coffee"
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::rich(format!(
            "{}\n{}\n{}\n{}",
            span("yellow", "BREWING COFFEE..."),
            span("cyan", COFFEE_POT),
            span("yellow", "Error: Coffee module not found"),
            "I'm a terminal, not a coffee machine! But maybe we should take a coffee break?",
        )))
    }
}

// ---------------------------------------------------------------------------
// rm -rf / (and the sudo variant)
// ---------------------------------------------------------------------------

struct RmrfCmd {
    name: &'static str,
}
impl Command for RmrfCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        "Don't worry, it's safe!"
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn category(&self) -> &str {
        "fun"
    }
    fn execute(&self, _args: &[&str], _env: &Environment<'_>) -> Result<CommandResult> {
        // Alarming on purpose, but a successful result: alert styling
        // only, no error flag.
        Ok(CommandResult::rich(format!(
            "{}\nAttempting to delete all system files...\n{}\n{}",
            alert("⚠ CRITICAL SYSTEM WARNING ⚠"),
            span("red", "Error: Operation not permitted. Nice try though!"),
            span(
                "gray",
                "For safety reasons, destructive commands are simulated. Your portfolio is safe!"
            ),
        )))
    }
}
