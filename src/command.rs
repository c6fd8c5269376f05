// Commands accepted by the simulation and their textual forms

use crate::error::CommandError;
use crate::orientation::TurnCommand;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(TurnCommand),
    StepForward,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Accepts the Tk key names ("Left", "Right", "space") as well as
    /// plain words, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Command::Turn(TurnCommand::Left)),
            "right" | "r" => Ok(Command::Turn(TurnCommand::Right)),
            "space" | "forward" | "step" | "f" => Ok(Command::StepForward),
            _ => Err(CommandError::Unknown(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Turn(cmd) => write!(f, "turn {}", cmd),
            Command::StepForward => write!(f, "forward"),
        }
    }
}

/// Parses a comma-separated command script such as `"right,forward,forward"`.
pub fn parse_script(script: &str) -> Result<Vec<Command>, CommandError> {
    if script.trim().is_empty() {
        return Ok(Vec::new());
    }
    script
        .split(',')
        .enumerate()
        .map(|(i, token)| {
            if token.trim().is_empty() {
                Err(CommandError::Empty(i + 1))
            } else {
                token.parse()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tk_key_names() {
        assert_eq!("Left".parse::<Command>(), Ok(Command::Turn(TurnCommand::Left)));
        assert_eq!("Right".parse::<Command>(), Ok(Command::Turn(TurnCommand::Right)));
        assert_eq!("space".parse::<Command>(), Ok(Command::StepForward));
    }

    #[test]
    fn test_words_and_case() {
        assert_eq!(" FORWARD ".parse::<Command>(), Ok(Command::StepForward));
        assert_eq!("r".parse::<Command>(), Ok(Command::Turn(TurnCommand::Right)));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert_eq!(
            "Up".parse::<Command>(),
            Err(CommandError::Unknown("Up".to_string()))
        );
    }

    #[test]
    fn test_parse_script() {
        let commands = parse_script("right, forward,F,left").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Turn(TurnCommand::Right),
                Command::StepForward,
                Command::StepForward,
                Command::Turn(TurnCommand::Left),
            ]
        );
        assert_eq!(parse_script("  "), Ok(vec![]));
    }

    #[test]
    fn test_parse_script_errors() {
        assert_eq!(parse_script("left,,right"), Err(CommandError::Empty(2)));
        assert_eq!(
            parse_script("left,jump"),
            Err(CommandError::Unknown("jump".to_string()))
        );
    }
}
