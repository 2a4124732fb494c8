mod command_runner;
mod console;
mod template_source;

pub use command_runner::{CommandOutput, CommandRunner};
pub use console::{Console, Tone};
pub use template_source::TemplateSource;
