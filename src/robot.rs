use crate::arena::Arena;
use crate::geometry::{self, BoundingBox, Footprint};
use crate::orientation::{Orientation, TurnCommand};

/// Result of a forward step. A blocked step is a normal outcome, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Blocked,
}

// Represents the robot: its body box and heading
#[derive(Debug, Clone)]
pub struct Robot {
    bbox: BoundingBox,
    orientation: Orientation,
    prior_orientation: Option<Orientation>, // Heading held before the latest turn
    step_size: f64,
    footprint: Footprint,
}

impl Robot {
    /// Creates a north-facing robot occupying `bbox`.
    pub fn new(bbox: BoundingBox, footprint: Footprint, step_size: f64) -> Self {
        Robot {
            bbox,
            orientation: Orientation::North,
            prior_orientation: None,
            step_size,
            footprint,
        }
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn prior_orientation(&self) -> Option<Orientation> {
        self.prior_orientation
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    /// Rotates one quarter turn and pivots the body box around the corner
    /// nearest the new heading.
    pub fn turn(&mut self, cmd: TurnCommand) {
        let prior = self.orientation;
        let next = prior.next(cmd);
        let new_box = geometry::recompute(&self.bbox, prior, next, &self.footprint)
            .unwrap_or_else(|| unreachable!("{} -> {} is not a single turn", prior, next));

        crate::debug_turn!(
            "Turn {}: {} -> {}, box {} -> {}",
            cmd,
            prior,
            next,
            self.bbox,
            new_box
        );

        self.prior_orientation = Some(prior);
        self.bbox = new_box;
        self.orientation = next;
    }

    /// Moves one step along the current heading.
    ///
    /// The boundary test looks at the box *before* the move: a robot still
    /// inside the arena always moves, even if that carries it past the edge,
    /// and only the following step is refused.
    pub fn step_forward(&mut self, arena: &Arena) -> StepOutcome {
        if arena.is_violated_by(&self.bbox) {
            crate::debug_drive!(
                "Step blocked at {} facing {} (arena {}x{})",
                self.bbox,
                self.orientation,
                arena.width,
                arena.height
            );
            return StepOutcome::Blocked;
        }

        let (ux, uy) = self.orientation.unit_delta();
        let (dx, dy) = (ux * self.step_size, uy * self.step_size);
        let moved = self.bbox.translated(dx, dy);
        crate::debug_drive!(
            "Moving {} by ({}, {}): {} -> {}",
            self.orientation,
            dx,
            dy,
            self.bbox,
            moved
        );
        self.bbox = moved;
        StepOutcome::Moved
    }
}
