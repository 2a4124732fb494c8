use crate::domain::AppError;

/// How a console message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section title.
    Heading,
    Info,
    Success,
    Warning,
    Error,
}

/// Port for the interactive terminal.
///
/// Validation lives with the caller; implementations only move text.
pub trait Console {
    /// Show `prompt` and return the raw line the user typed, without its newline.
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError>;

    /// Show a message.
    fn say(&mut self, tone: Tone, message: &str);
}
