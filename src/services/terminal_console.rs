use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::{Console, Tone};

/// Console on the process's standard streams.
///
/// Prompts go through dialoguer when stdin is a terminal; piped input is read
/// line by line.
#[derive(Debug)]
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { interactive: io::stdin().is_terminal() }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        if !self.interactive {
            return read_piped(&mut io::stdin().lock(), &mut io::stdout(), prompt);
        }
        match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text() {
            Ok(value) => Ok(value),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::Cancelled)
            }
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }

    fn say(&mut self, tone: Tone, message: &str) {
        match tone {
            Tone::Heading => {
                println!();
                println!("{message}");
                println!("{}", "-".repeat(message.chars().count().max(30)));
            }
            Tone::Info => println!("{message}"),
            Tone::Success => println!("✅ {message}"),
            Tone::Warning => println!("⚠️  {message}"),
            Tone::Error => eprintln!("❌ {message}"),
        }
    }
}

/// Show `prompt` and read one line. End of input cancels the run.
fn read_piped<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(|e| AppError::Prompt(e.to_string()))? == 0 {
        writeln!(output)?;
        return Err(AppError::Cancelled);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
