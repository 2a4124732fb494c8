use std::collections::VecDeque;

use vocard_installer::AppError;
use vocard_installer::ports::{Console, Tone};

/// Console fed from a list of answers; an exhausted list reads as Ctrl-C.
#[derive(Debug, Default)]
pub(crate) struct ScriptedConsole {
    answers: VecDeque<String>,
    pub(crate) prompts: Vec<String>,
    pub(crate) messages: Vec<(Tone, String)>,
}

impl ScriptedConsole {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self { answers: answers.iter().map(|a| a.to_string()).collect(), ..Self::default() }
    }

    pub(crate) fn lines(&self, tone: Tone) -> Vec<&str> {
        self.messages.iter().filter(|(t, _)| *t == tone).map(|(_, m)| m.as_str()).collect()
    }

    pub(crate) fn unanswered(&self) -> usize {
        self.answers.len()
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
