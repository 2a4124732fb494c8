mod http_template_source;
mod system_command_runner;
mod terminal_console;

pub use http_template_source::{DEFAULT_FETCH_TIMEOUT_SECS, HttpTemplateSource};
#[cfg(test)]
pub(crate) use system_command_runner::display_command;
pub use system_command_runner::SystemCommandRunner;
pub use terminal_console::TerminalConsole;
