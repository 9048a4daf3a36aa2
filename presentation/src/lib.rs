//! Presentation layer for daily-breath
//!
//! This crate contains CLI definitions, the reader form prompt,
//! newspaper formatters, the animated press and progress reporters.

pub mod cli;
pub mod output;
pub mod press;
pub mod progress;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use output::{
    alerts::{breaking_alert, reader_alert},
    brief::BriefFormatter,
    formatter::OutputFormatter,
    json::JsonFormatter,
    newspaper::NewspaperFormatter,
};
pub use press::Press;
pub use progress::reporter::{PressSpinner, SimpleProgress};
pub use prompt::FormPrompt;
