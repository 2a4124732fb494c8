mod fake_command_runner;
mod fake_template_source;
mod scripted_console;

pub use fake_command_runner::FakeCommandRunner;
pub use fake_template_source::FakeTemplateSource;
pub use scripted_console::ScriptedConsole;
