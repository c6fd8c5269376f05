// Orientation state machine: four cardinal headings and left/right turns

use std::fmt;

/// Heading of the robot. Ring order is North, East, South, West (clockwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

/// Abstract rotation request, independent of whatever key produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnCommand {
    Left,
    Right,
}

impl Orientation {
    /// Clockwise ring used for rotation.
    pub const RING: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn ring_index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Orientation reached from `self` by a single turn.
    pub fn next(self, cmd: TurnCommand) -> Orientation {
        let idx = self.ring_index();
        let next_idx = match cmd {
            TurnCommand::Right => (idx + 1) % 4,
            TurnCommand::Left => (idx + 3) % 4, // -1 mod 4
        };
        Self::RING[next_idx]
    }

    /// True when facing North or South (body drawn WIDTH x HEIGHT).
    pub fn is_portrait(self) -> bool {
        matches!(self, Orientation::North | Orientation::South)
    }

    /// Unit step along this heading in screen coordinates (y grows downwards).
    pub fn unit_delta(self) -> (f64, f64) {
        match self {
            Orientation::North => (0.0, -1.0),
            Orientation::South => (0.0, 1.0),
            Orientation::East => (1.0, 0.0),
            Orientation::West => (-1.0, 0.0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::North => "North",
            Orientation::East => "East",
            Orientation::South => "South",
            Orientation::West => "West",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for TurnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnCommand::Left => write!(f, "left"),
            TurnCommand::Right => write!(f, "right"),
        }
    }
}
