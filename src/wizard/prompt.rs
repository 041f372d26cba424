//! Interactive prompts for credentials and the login ceremony.
use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Input, Password};

use crate::lib::errors::InputError;

/// Every question the wizard can ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    ApiId,
    ApiHash,
    Phone,
    Code,
    Password { hint: Option<String> },
}

impl Prompt {
    pub fn label(&self) -> String {
        match self {
            Prompt::ApiId => "API ID (number)".into(),
            Prompt::ApiHash => "API Hash (string)".into(),
            Prompt::Phone => "Phone number".into(),
            Prompt::Code => "Enter code".into(),
            Prompt::Password { hint: Some(hint) } => {
                format!("Two-step verification password (hint: {hint})")
            }
            Prompt::Password { hint: None } => "Two-step verification password".into(),
        }
    }

    pub const fn field(&self) -> &'static str {
        match self {
            Prompt::ApiId => "api_id",
            Prompt::ApiHash => "api_hash",
            Prompt::Phone => "phone",
            Prompt::Code => "code",
            Prompt::Password { .. } => "password",
        }
    }

    pub const fn is_secret(&self) -> bool {
        matches!(self, Prompt::Password { .. })
    }
}

/// Source of operator answers. Answers come back trimmed.
pub trait Prompter {
    fn ask(&mut self, prompt: &Prompt) -> Result<String, InputError>;
}

/// Prompts on the controlling terminal with `dialoguer`, or reads plain lines from stdin
/// when it is piped (`docker run -i` without `-t`).
#[derive(Debug)]
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &Prompt) -> Result<String, InputError> {
        let label = prompt.label();
        let answer = if !self.interactive {
            read_plain_line(&label)
        } else if prompt.is_secret() {
            Password::new()
                .with_prompt(label)
                .allow_empty_password(true)
                .interact()
                .map_err(dialoguer_io_error)
        } else {
            Input::<String>::new()
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()
                .map_err(dialoguer_io_error)
        };

        answer
            .map(|value| value.trim().to_string())
            .map_err(|source| InputError::Prompt {
                field: prompt.field(),
                source,
            })
    }
}

fn dialoguer_io_error(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(source) => source,
    }
}

/// EOF yields an empty answer.
fn read_plain_line(label: &str) -> io::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}: ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
