//! The scripted boot sequence that gates terminal availability.
//!
//! An explicit state machine driven by elapsed time: each phase owns a
//! list of timed lines, and `tick()` yields the lines that have come due
//! plus any phase transitions they cross. Phases progress strictly
//! forward (`Logo -> Initial -> Diagnostics -> Login -> Ready`); the one
//! early exit is `interrupt()` during `Logo`, which jumps straight to
//! `Login`. Pending lines are plain data owned by the machine, so
//! dropping it cancels everything — no timer can outlive its owner.

use termfolio_data::stable_hash;
use termfolio_types::TermConfig;

/// The boot phases, in order. Input is enabled only in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BootPhase {
    Logo,
    Initial,
    Diagnostics,
    Login,
    Ready,
}

/// One scripted output line.
#[derive(Debug, Clone)]
pub struct BootLine {
    pub text: String,
    pub rich: bool,
}

/// What a tick can yield.
#[derive(Debug, Clone)]
pub enum BootEvent {
    Line(BootLine),
    PhaseChange(BootPhase),
}

#[derive(Debug, Clone)]
struct Step {
    phase: BootPhase,
    delay_ms: u64,
    text: String,
    rich: bool,
}

const LOGO: &str = r#"
 _____ _____ ____  __  __ _____ ___  _     ___ ___
|_   _| ____|  _ \|  \/  |  ___/ _ \| |   |_ _/ _ \
  | | |  _| | |_) | |\/| | |_ | | | | |    | | | | |
  | | | |___|  _ <| |  | |  _|| |_| | |___ | | |_| |
  |_| |_____|_| \_\_|  |_|_|   \___/|_____|___\___/
"#;

/// Denial messages for the staged failed login. Chosen by seed, so a
/// given session always replays the same taunt.
const TAUNTS: &[&str] = &[
    "Invalid credentials",
    "Too many special characters",
    "That's the guest password",
    "Caps Lock was on. Probably.",
];

/// The boot sequence state machine.
#[derive(Debug)]
pub struct BootSequence {
    steps: Vec<Step>,
    pos: usize,
    /// Remaining wait before `steps[pos]` fires.
    countdown_ms: u64,
    phase: BootPhase,
    /// The staged failed-login branch runs exactly once per session.
    failure_spent: bool,
    seed: u64,
    username: String,
    speed_pct: u32,
}

impl BootSequence {
    /// A fresh machine in `Logo`, failure branch included.
    pub fn new(config: &TermConfig) -> Self {
        let mut machine = Self {
            steps: Vec::new(),
            pos: 0,
            countdown_ms: 0,
            phase: BootPhase::Logo,
            failure_spent: false,
            seed: config.boot_seed,
            username: config.username.clone(),
            speed_pct: config.boot_speed_pct,
        };
        machine.load_script(true);
        machine
    }

    /// Replay the sequence from the top. The failed-login branch never
    /// runs a second time.
    pub fn restart(&mut self) {
        log::info!("boot sequence restarting (failure branch spent: {})", self.failure_spent);
        self.load_script(!self.failure_spent);
        self.phase = BootPhase::Logo;
    }

    fn load_script(&mut self, include_failure: bool) {
        if include_failure {
            self.failure_spent = true;
        }
        self.steps = build_script(&self.username, self.seed, include_failure);
        self.pos = 0;
        self.countdown_ms = self.scaled_delay(0);
    }

    fn scaled_delay(&self, index: usize) -> u64 {
        match self.steps.get(index) {
            Some(step) => {
                // Deterministic per-line jitter keeps pacing organic
                // without a live RNG.
                let jitter = u64::from(stable_hash(&step.text) % 200);
                (step.delay_ms + jitter) * u64::from(self.speed_pct) / 100
            }
            None => 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> BootPhase {
        self.phase
    }

    /// Whether the machine has reached `Ready` (input enabled).
    pub fn is_ready(&self) -> bool {
        self.phase == BootPhase::Ready
    }

    /// Key-press interrupt: during `Logo` this force-jumps directly to
    /// `Login`. In any other phase it is ignored.
    pub fn interrupt(&mut self) {
        if self.phase != BootPhase::Logo {
            return;
        }
        if let Some(login_pos) = self.steps.iter().position(|s| s.phase == BootPhase::Login) {
            log::debug!("boot interrupted, skipping to login");
            self.pos = login_pos;
            self.phase = BootPhase::Login;
            self.countdown_ms = self.scaled_delay(login_pos);
        }
    }

    /// Advance the machine by `elapsed_ms`, yielding due lines and phase
    /// transitions in order.
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<BootEvent> {
        let mut events = Vec::new();
        let mut budget = elapsed_ms;

        while self.pos < self.steps.len() {
            if self.countdown_ms > budget {
                self.countdown_ms -= budget;
                break;
            }
            budget -= self.countdown_ms;

            let step = self.steps[self.pos].clone();
            if step.phase != self.phase {
                self.phase = step.phase;
                log::debug!("boot phase -> {:?}", self.phase);
                events.push(BootEvent::PhaseChange(step.phase));
            }
            events.push(BootEvent::Line(BootLine {
                text: step.text,
                rich: step.rich,
            }));

            self.pos += 1;
            self.countdown_ms = self.scaled_delay(self.pos);
        }

        events
    }
}

fn build_script(username: &str, seed: u64, include_failure: bool) -> Vec<Step> {
    use BootPhase::*;

    let taunt = TAUNTS[seed as usize % TAUNTS.len()];
    let mut steps = vec![
        step(Logo, 300, LOGO.trim_end(), true),
        step(Logo, 500, "Press any key to skip...", false),
        step(Initial, 400, "[[cyan]]BIOS POST check...[[/]]", true),
        step(Initial, 400, "CPU: 8-core @ 3.8GHz... [[green]]OK[[/]]", true),
        step(Initial, 350, "Memory: 64GB DDR4-3200... [[green]]OK[[/]]", true),
        step(Initial, 300, "Storage: 2TB NVMe SSD... [[green]]OK[[/]]", true),
        step(Diagnostics, 500, "[[cyan]]Loading kernel...[[/]]", true),
        step(Diagnostics, 400, "Mounting filesystems... [[green]]DONE[[/]]", true),
        step(
            Diagnostics,
            350,
            "Starting network services... [[green]]CONNECTED[[/]]",
            true,
        ),
        step(
            Diagnostics,
            600,
            "[[yellow]]Initializing AI personality matrix...[[/]]",
            true,
        ),
        step(
            Diagnostics,
            500,
            "[[red]]WARNING: System overclocked by 42%[[/]]",
            true,
        ),
        step(
            Diagnostics,
            400,
            "Loading portfolio modules... [[green]]LOADED[[/]]",
            true,
        ),
        step(Login, 400, "[[cyan]]Portfolio Linux v2.0.1 (tty1)[[/]]", true),
        Step {
            phase: Login,
            delay_ms: 600,
            text: format!("[[green]]portfolio login:[[/]] {username}"),
            rich: true,
        },
        step(
            Login,
            800,
            "[[cyan]]Password:[[/]] [[purple]]********[[/]]",
            true,
        ),
    ];

    if include_failure {
        steps.push(Step {
            phase: Login,
            delay_ms: 500,
            text: format!("[[red]]Access denied: {taunt}[[/]]"),
            rich: true,
        });
        steps.push(step(
            Login,
            800,
            "[[cyan]]Password:[[/]] [[purple]]************[[/]]",
            true,
        ));
    }

    steps.extend([
        step(
            Login,
            500,
            "[[green]]Access granted: Bypassing security...[[/]]",
            true,
        ),
        step(
            Login,
            600,
            "[[yellow]]Initializing biometric scan...[[/]]",
            true,
        ),
        step(
            Login,
            800,
            "[[glitch]]VISITOR IDENTIFIED - ACCESS GRANTED[[/]]",
            true,
        ),
        step(
            Login,
            300,
            "[[yellow]]Last login: moments ago from 192.168.1.42[[/]]",
            true,
        ),
        step(
            Ready,
            300,
            "Type \"help\" for a list of available commands.",
            false,
        ),
    ]);

    steps
}

fn step(phase: BootPhase, delay_ms: u64, text: &str, rich: bool) -> Step {
    Step {
        phase,
        delay_ms,
        text: text.to_string(),
        rich,
    }
}
