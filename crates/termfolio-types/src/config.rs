//! Terminal configuration, loaded from TOML.
//!
//! Every field has a default so an empty document yields a working
//! config. The frontend may point at a config file; the core never
//! touches the disk itself.

use serde::Deserialize;

use crate::error::Result;

/// Configuration for a terminal session.
#[derive(Debug, Clone, Deserialize)]
pub struct TermConfig {
    /// Login name shown in the prompt and boot script.
    #[serde(default = "default_username")]
    pub username: String,
    /// Host segment of the prompt (`user@host`).
    #[serde(default = "default_hostname")]
    pub hostname: String,
    /// Maximum raw command lines retained for history recall.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Seed for the deterministic boot-script variations (taunt choice,
    /// pacing jitter).
    #[serde(default = "default_boot_seed")]
    pub boot_seed: u64,
    /// Multiplier applied to boot line delays, in percent. 100 = scripted
    /// pacing, 0 = instant (useful in tests).
    #[serde(default = "default_boot_speed")]
    pub boot_speed_pct: u32,
    /// Artificial delay applied before revealing `loading` results.
    #[serde(default = "default_loading_delay")]
    pub loading_delay_ms: u64,
    /// Anchor month for duration math ("YYYY-MM"), so ongoing experience
    /// entries render the same across runs.
    #[serde(default = "default_present")]
    pub present: String,
}

fn default_username() -> String {
    "nova".to_string()
}

fn default_hostname() -> String {
    "portfolio".to_string()
}

fn default_history_limit() -> usize {
    100
}

fn default_boot_seed() -> u64 {
    0x5eed
}

fn default_boot_speed() -> u32 {
    100
}

fn default_loading_delay() -> u64 {
    1500
}

fn default_present() -> String {
    "2026-08".to_string()
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            hostname: default_hostname(),
            history_limit: default_history_limit(),
            boot_seed: default_boot_seed(),
            boot_speed_pct: default_boot_speed(),
            loading_delay_ms: default_loading_delay(),
            present: default_present(),
        }
    }
}

impl TermConfig {
    /// Parse a config from a TOML document.
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        let config: Self = toml::from_str(doc)?;
        Ok(config)
    }

    /// The prompt string shown before the input affordance.
    pub fn prompt(&self, cwd: &str) -> String {
        format!("{}@{} {cwd} $", self.username, self.hostname)
    }

    /// Scale a scripted delay by the configured boot speed.
    pub fn scale_boot_delay(&self, delay_ms: u64) -> u64 {
        delay_ms * u64::from(self.boot_speed_pct) / 100
    }
}
