//! Configuration for the robot simulator.

use crate::arena::Arena;
use crate::error::ConfigError;
use crate::geometry::{BoundingBox, Footprint};

// Robot defaults
pub const ROBOT_START_X: f64 = 50.0; // Initial box (50, 0, 100, 100)
pub const ROBOT_START_Y: f64 = 0.0;
pub const ROBOT_WIDTH: f64 = 50.0; // Body width when facing north
pub const ROBOT_HEIGHT: f64 = 100.0; // Body height when facing north
pub const STEP_SIZE: f64 = 5.0; // Pixels per forward step

// Arena defaults
pub const CANVAS_WIDTH: f64 = 500.0;
pub const CANVAS_HEIGHT: f64 = 500.0;
pub const LOWER_MARGIN: f64 = 0.0; // x1/y1 below this blocks further steps

// Rendering configuration
pub const UI_PANEL_WIDTH: i32 = 200; // Width of the status panel
pub const WINDOW_TITLE: &str = "Robot Simulator";

/// Everything needed to build a robot and its arena.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub start_x: f64,
    pub start_y: f64,
    pub robot_width: f64,
    pub robot_height: f64,
    pub step_size: f64,
    pub arena_width: f64,
    pub arena_height: f64,
    pub lower_margin: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            start_x: ROBOT_START_X,
            start_y: ROBOT_START_Y,
            robot_width: ROBOT_WIDTH,
            robot_height: ROBOT_HEIGHT,
            step_size: STEP_SIZE,
            arena_width: CANVAS_WIDTH,
            arena_height: CANVAS_HEIGHT,
            lower_margin: LOWER_MARGIN,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("robot width", self.robot_width),
            ("robot height", self.robot_height),
            ("step size", self.step_size),
            ("arena width", self.arena_width),
            ("arena height", self.arena_height),
        ] {
            // Written so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        let size = self.robot_width.max(self.robot_height);
        if self.arena_width < size || self.arena_height < size {
            return Err(ConfigError::ArenaTooSmall {
                arena_width: self.arena_width,
                arena_height: self.arena_height,
                size,
            });
        }

        self.initial_box()?;
        Ok(())
    }

    pub fn footprint(&self) -> Footprint {
        Footprint {
            width: self.robot_width,
            height: self.robot_height,
        }
    }

    /// Portrait box for the starting (north-facing) robot.
    pub fn initial_box(&self) -> Result<BoundingBox, ConfigError> {
        let bbox = BoundingBox::from_origin(
            self.start_x,
            self.start_y,
            self.robot_width,
            self.robot_height,
        )?;
        Ok(bbox)
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height, self.lower_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert_eq!(config.validate(), Ok(()));
        let bbox = config.initial_box().unwrap();
        assert_eq!(bbox, BoundingBox::new(50.0, 0.0, 100.0, 100.0).unwrap());
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let config = SimConfig {
            step_size: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "step size",
                value: 0.0
            })
        );

        let config = SimConfig {
            robot_width: -10.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { name: "robot width", .. })
        ));

        let config = SimConfig {
            arena_height: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_arena() {
        let config = SimConfig {
            arena_width: 80.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArenaTooSmall { size, .. }) if size == 100.0
        ));
    }
}
