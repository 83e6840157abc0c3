//! Line-oriented reference frontend for the portfolio terminal.
//!
//! Drives the session with real timers: the boot sequence plays with its
//! scripted pacing (pass `--skip-boot` to interrupt the logo phase),
//! then a blocking read-eval-print loop takes over. Exit with Ctrl-D —
//! the `exit` command famously refuses.

mod render;

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use termfolio_term::Session;
use termfolio_types::{Effect, TermConfig};

/// Boot tick granularity.
const TICK_MS: u64 = 50;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut skip_boot = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--skip-boot" => skip_boot = true,
            other => config_path = Some(other.to_string()),
        }
    }
    let config_path = config_path.or_else(|| std::env::var("TERMFOLIO_CONFIG").ok());

    let config = match config_path {
        Some(path) => {
            let doc = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            TermConfig::from_toml_str(&doc).with_context(|| format!("parsing config {path}"))?
        }
        None => TermConfig::default(),
    };
    log::info!("starting termfolio for {}@{}", config.username, config.hostname);

    let mut session = Session::new(config);
    if skip_boot {
        session.interrupt_boot();
    }
    play_boot(&mut session)?;

    repl(&mut session)
}

/// Drive the boot machine with wall-clock ticks, printing timeline lines
/// as they come due.
fn play_boot(session: &mut Session) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let mut printed = session.history().len();
    while !session.input_enabled() {
        thread::sleep(Duration::from_millis(TICK_MS));
        session.tick_boot(TICK_MS);
        for item in &session.history()[printed..] {
            writeln!(stdout, "{}", render::render(&item.result))?;
        }
        printed = session.history().len();
        stdout.flush()?;
    }
    Ok(())
}

/// Blocking read-eval-print loop. Input stays disabled while a command
/// resolves, so submissions are serialized by construction.
fn repl(session: &mut Session) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    loop {
        write!(stdout, "{} ", session.prompt())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let submission = session.submit(&line);
        if submission.delay_ms > 0 {
            writeln!(stdout, "...")?;
            stdout.flush()?;
            thread::sleep(Duration::from_millis(submission.delay_ms));
        }
        if !submission.result.output.is_empty() {
            writeln!(stdout, "{}", render::render(&submission.result))?;
        }

        match submission.result.effect {
            Some(Effect::ComposeMail(ref addr)) => {
                writeln!(stdout, "(opening mail composer for {addr})")?;
            }
            Some(Effect::RebootSequence) => {
                drop(stdout);
                play_boot(session)?;
                stdout = std::io::stdout().lock();
            }
            _ => {}
        }
    }
}
