//! Line commands understood by the demo host.

use thiserror::Error;
use uiselect::events::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click the match view.
    Activate,
    /// Click the row containing the text.
    Pick(String),
    /// Replace the search text.
    Type(String),
    Key(Key),
    Blur,
    Clear,
    Disable(bool),
    Html,
    State,
    Help,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown key: {0}")]
    UnknownKey(String),
}

pub const HELP: &str = "\
commands:
  activate            click the match view
  pick <text>         click the row containing <text>
  type <text>         replace the search text
  key <up|down|enter|esc|tab|space>
  blur                move focus away
  clear               clear the selection
  disable | enable
  html                print the rendered markup
  state               print the selection state
  help";

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "activate" => Command::Activate,
        "pick" => Command::Pick(argument("pick", rest)?),
        // An empty search is meaningful, so `type` takes the rest as-is
        "type" => Command::Type(rest.to_string()),
        "key" => Command::Key(parse_key(&argument("key", rest)?)?),
        "blur" => Command::Blur,
        "clear" => Command::Clear,
        "disable" => Command::Disable(true),
        "enable" => Command::Disable(false),
        "html" => Command::Html,
        "state" => Command::State,
        "help" => Command::Help,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn argument(command: &'static str, rest: &str) -> Result<String, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    Ok(rest.to_string())
}

fn parse_key(name: &str) -> Result<Key, CommandError> {
    match name.to_ascii_lowercase().as_str() {
        "up" => Ok(Key::Up),
        "down" => Ok(Key::Down),
        "enter" => Ok(Key::Enter),
        "esc" | "escape" => Ok(Key::Escape),
        "tab" => Ok(Key::Tab),
        "space" => Ok(Key::Char(' ')),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Key::Char(c)),
                _ => Err(CommandError::UnknownKey(name.to_string())),
            }
        }
    }
}
