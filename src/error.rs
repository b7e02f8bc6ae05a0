use crate::content::ContentKey;
use crate::i18n::{fill, Language};

/// Everything that can go wrong while running a command. None of these are
/// fatal: the terminal turns each one into a single `error` line.
#[derive(thiserror::Error, Debug)]
pub enum TerminalError {
    #[error("command not found: {0}")]
    CommandNotFound(String),
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("content missing for key {0}")]
    ContentMissing(ContentKey),
    #[error("resume export failed: {0}")]
    ExportFailure(String),
    #[error("{0}: missing operand")]
    MissingOperand(&'static str),
    #[error("config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logger already initialized")]
    LoggerInit,
}

impl TerminalError {
    /// Text shown to the visitor, in the active language.
    pub fn render(&self, lang: Language) -> String {
        let m = lang.messages();
        match self {
            TerminalError::CommandNotFound(token) => format!("{} {}", m.command_not_found, token),
            TerminalError::FileNotFound(file) => fill(m.file_not_found, &[("file", file)]),
            TerminalError::ContentMissing(_) => m.content_not_found.to_string(),
            TerminalError::ExportFailure(msg) => fill(m.export_failed, &[("error", msg)]),
            TerminalError::MissingOperand(_) => m.usage_cat.to_string(),
            TerminalError::Config(_) | TerminalError::LoggerInit => self.to_string(),
        }
    }
}
