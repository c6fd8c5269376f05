use crate::arena::Arena;
use crate::command::Command;
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::input;
use crate::render::Renderer;
use crate::robot::{Robot, StepOutcome};
use log::info;
use macroquad::prelude::next_frame;
use std::collections::VecDeque;

/// Counters shown in the status panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub turns: u32,
    pub steps_moved: u32,
    pub steps_blocked: u32,
}

/// The Game struct owns the robot, its arena and the pending command queue
pub struct Game {
    pub arena: Arena,
    pub robot: Robot,
    pub stats: Stats,
    pending: VecDeque<Command>,
}

impl Game {
    /// Create a new game from a validated configuration; `script` is queued
    /// ahead of any interactive input.
    pub fn new(config: &SimConfig, script: Vec<Command>) -> Result<Self, ConfigError> {
        config.validate()?;

        let arena = config.arena();
        info!(
            "Arena created: {}x{} (lower margin {}).",
            arena.width, arena.height, arena.lower_margin
        );

        let robot = Robot::new(config.initial_box()?, config.footprint(), config.step_size);
        info!(
            "Robot placed at {} facing {}, step size {}.",
            robot.bbox(),
            robot.orientation(),
            robot.step_size()
        );

        if !script.is_empty() {
            info!("Queued {} scripted commands.", script.len());
        }

        Ok(Game {
            arena,
            robot,
            stats: Stats::default(),
            pending: script.into(),
        })
    }

    pub fn queue(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Apply a single command to the robot
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Turn(cmd) => {
                self.robot.turn(cmd);
                self.stats.turns += 1;
            }
            Command::StepForward => match self.robot.step_forward(&self.arena) {
                StepOutcome::Moved => self.stats.steps_moved += 1,
                StepOutcome::Blocked => self.stats.steps_blocked += 1,
            },
        }
    }

    /// Drain the queue in arrival order
    pub fn process_pending(&mut self) {
        while let Some(command) = self.pending.pop_front() {
            self.apply(command);
        }
    }

    /// Run the main loop until the window is closed
    pub async fn run(&mut self, renderer: &mut Renderer) {
        info!("Starting main loop...");

        while !Renderer::window_should_close() {
            for command in input::poll_commands() {
                self.queue(command);
            }
            self.process_pending();

            renderer.draw_frame(&self.arena, &self.robot, &self.stats);
            next_frame().await;
        }

        info!(
            "Exiting: {} turns, {} steps moved, {} steps blocked.",
            self.stats.turns, self.stats.steps_moved, self.stats.steps_blocked
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::parse_script;
    use crate::geometry::BoundingBox;
    use crate::orientation::{Orientation, TurnCommand};

    #[test]
    fn test_new_game_uses_config() {
        let game = Game::new(&SimConfig::default(), vec![]).unwrap();
        assert_eq!(
            game.robot.bbox(),
            BoundingBox::new(50.0, 0.0, 100.0, 100.0).unwrap()
        );
        assert_eq!(game.robot.orientation(), Orientation::North);
        assert_eq!(game.arena, Arena::new(500.0, 500.0, 0.0));
        assert_eq!(game.pending_len(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SimConfig {
            step_size: -5.0,
            ..Default::default()
        };
        assert!(Game::new(&config, vec![]).is_err());
    }

    #[test]
    fn test_script_runs_in_order() {
        let script = parse_script("forward,right,forward").unwrap();
        let mut game = Game::new(&SimConfig::default(), script).unwrap();
        assert_eq!(game.pending_len(), 3);

        game.process_pending();
        assert_eq!(game.pending_len(), 0);
        assert_eq!(game.robot.orientation(), Orientation::East);
        // (50,0,100,100) -> (50,-5,100,95) -> pivot (50,45,150,95) -> step east
        assert_eq!(
            game.robot.bbox(),
            BoundingBox::new(55.0, 45.0, 155.0, 95.0).unwrap()
        );
        assert_eq!(
            game.stats,
            Stats {
                turns: 1,
                steps_moved: 2,
                steps_blocked: 0,
            }
        );
    }

    #[test]
    fn test_blocked_steps_are_counted() {
        let mut game = Game::new(&SimConfig::default(), vec![]).unwrap();
        game.apply(Command::StepForward);
        game.apply(Command::StepForward);
        game.apply(Command::StepForward);
        assert_eq!(game.stats.steps_moved, 1);
        assert_eq!(game.stats.steps_blocked, 2);
        assert_eq!(
            game.robot.bbox(),
            BoundingBox::new(50.0, -5.0, 100.0, 95.0).unwrap()
        );
    }

    #[test]
    fn test_drive_across_the_arena() {
        let config = SimConfig {
            start_y: 200.0,
            ..Default::default()
        };
        let mut game = Game::new(&config, vec![]).unwrap();
        game.queue(Command::Turn(TurnCommand::Right));
        for _ in 0..200 {
            game.queue(Command::StepForward);
        }
        game.process_pending();

        let bbox = game.robot.bbox();
        // Moves until x2 first passes 500, then stays there
        assert_eq!(bbox.x2, 505.0);
        assert_eq!(game.stats.steps_moved, 71);
        assert_eq!(game.stats.steps_blocked, 129);
    }
}
