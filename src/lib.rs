pub mod buffer;
pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod history;
pub mod i18n;
pub mod interpreter;
pub mod logger;
pub mod markup;
pub mod neofetch;
pub mod registry;
pub mod schedule;
pub mod system;
pub mod terminal;

pub use error::TerminalError;
pub use i18n::Language;
pub use system::Portfolio;
pub use terminal::Terminal;
