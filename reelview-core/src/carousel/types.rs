//! Shared types for the carousel controller

use serde::Serialize;

/// Direction of the most recent page change, as a hint for the transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// `-1`, `0` or `+1`.
    pub const fn step(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }

    pub fn from_step(step: i64) -> Self {
        match step.signum() {
            -1 => Direction::Backward,
            1 => Direction::Forward,
            _ => Direction::Still,
        }
    }
}

/// Whether a page change is currently being animated.
///
/// `Transitioning` is entered by `advance` and left only through
/// `on_transition_complete`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum CarouselPhase {
    #[default]
    Idle,
    Transitioning { from: usize, to: usize },
}
