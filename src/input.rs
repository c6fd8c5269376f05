// Keyboard to command mapping

use crate::command::Command;
use crate::orientation::TurnCommand;
use macroquad::prelude::{KeyCode, is_key_pressed};

const BOUND_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Right, KeyCode::Space];

/// Command bound to a key, if any.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Left => Some(Command::Turn(TurnCommand::Left)),
        KeyCode::Right => Some(Command::Turn(TurnCommand::Right)),
        KeyCode::Space => Some(Command::StepForward),
        _ => None,
    }
}

/// Commands for the keys pressed since the last frame.
pub fn poll_commands() -> Vec<Command> {
    BOUND_KEYS
        .iter()
        .filter(|key| is_key_pressed(**key))
        .filter_map(|key| {
            let command = command_for_key(*key);
            if let Some(cmd) = command {
                crate::debug_input!("{:?} -> {}", key, cmd);
            }
            command
        })
        .collect()
}
