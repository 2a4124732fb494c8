use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{Console, Tone};

/// Console that replays canned answers and records everything shown.
///
/// Running out of answers behaves like the user pressing Ctrl-C.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<(Tone, String)>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn messages(&self, tone: Tone) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(shown, _)| *shown == tone)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages(Tone::Warning)
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(AppError::Cancelled)
    }

    fn say(&mut self, tone: Tone, message: &str) {
        self.messages.push((tone, message.to_string()));
    }
}
