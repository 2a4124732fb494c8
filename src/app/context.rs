use crate::ports::{CommandRunner, Console, TemplateSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: Console, S: TemplateSource, R: CommandRunner> {
    console: C,
    templates: S,
    runner: R,
}

impl<C: Console, S: TemplateSource, R: CommandRunner> AppContext<C, S, R> {
    /// Create a new application context.
    pub fn new(console: C, templates: S, runner: R) -> Self {
        Self { console, templates, runner }
    }

    /// Get a mutable reference to the console.
    pub fn console(&mut self) -> &mut C {
        &mut self.console
    }

    /// Get a reference to the template source.
    pub fn templates(&self) -> &S {
        &self.templates
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Split borrow used when a step needs the console alongside another port.
    pub fn console_and_runner(&mut self) -> (&mut C, &R) {
        (&mut self.console, &self.runner)
    }

    /// Consume the context, returning its ports.
    pub fn into_parts(self) -> (C, S, R) {
        (self.console, self.templates, self.runner)
    }
}
