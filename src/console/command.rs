use std::fmt;

use crate::core::action::Tap;

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tap(Tap),
    Show,
    Options,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingArgument {
        command: &'static str,
        name: &'static str,
    },
    InvalidIndex(String),
    TooManyArguments(&'static str),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(word) => write!(f, "unknown command: {word}"),
            CommandError::MissingArgument { command, name } => {
                write!(f, "{command}: missing <{name}>")
            }
            CommandError::InvalidIndex(value) => write!(f, "not an index: {value}"),
            CommandError::TooManyArguments(command) => write!(f, "{command}: too many arguments"),
        }
    }
}

impl std::error::Error for CommandError {}

/// Parse a line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "plain" => {
            let index = index_arg(words.next(), "plain", "index")?;
            no_more(words, "plain")?;
            Command::Tap(Tap::Plain { index })
        }
        "choice" => {
            let option = index_arg(words.next(), "choice", "option")?;
            let choice = index_arg(words.next(), "choice", "choice")?;
            no_more(words, "choice")?;
            Command::Tap(Tap::Choice { option, choice })
        }
        "show" => {
            no_more(words, "show")?;
            Command::Show
        }
        "options" => {
            no_more(words, "options")?;
            Command::Options
        }
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(head.to_string())),
    };
    Ok(Some(command))
}

fn index_arg(
    word: Option<&str>,
    command: &'static str,
    name: &'static str,
) -> Result<usize, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument { command, name })?;
    word.parse()
        .map_err(|_| CommandError::InvalidIndex(word.to_string()))
}

fn no_more<'a>(
    mut words: impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<(), CommandError> {
    match words.next() {
        Some(_) => Err(CommandError::TooManyArguments(command)),
        None => Ok(()),
    }
}
