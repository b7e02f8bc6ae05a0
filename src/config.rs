use crate::error::TerminalError;
use crate::i18n::Language;
use serde::Deserialize;

pub const USERNAME: &str = "gustavo";
pub const HOSTNAME: &str = "portfolio";
pub const HOME_PATH: &str = "/home/gustavo/portfolio";
pub const PATH_LABEL: &str = "~";
pub const KERNEL_STRING: &str =
    "Linux portfolio-server 5.4.0-portfolio #1 SMP Web Terminal x86_64 GNU/Linux";
/// Approximate career start, used by `uptime` and `neofetch`.
pub const CAREER_START: (i32, u32, u32) = (2020, 1, 1);

/// Runtime knobs for the terminal. Every field has a default so the page can
/// pass a partial JSON object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub max_history_size: usize,
    pub max_output_lines: usize,
    pub welcome_delay_ms: u32,
    pub exit_followup_delay_ms: u32,
    pub tick_interval_ms: u32,
    pub demo_on_start: bool,
    pub demo_on_language_switch: bool,
    pub log_level: log::LevelFilter,
    pub language: Language,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            max_history_size: 100,
            max_output_lines: 1000,
            welcome_delay_ms: 500,
            exit_followup_delay_ms: 1000,
            tick_interval_ms: 100,
            demo_on_start: true,
            demo_on_language_switch: true,
            log_level: log::LevelFilter::Info,
            language: Language::En,
        }
    }
}

impl TerminalConfig {
    pub fn from_json(json: &str) -> Result<Self, TerminalError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
    }
}

pub fn prompt() -> String {
    format!("{}@{}:{}$", USERNAME, HOSTNAME, PATH_LABEL)
}
