//! Per-tick input from the host

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected raw input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Horizontal direction must be -1, 0 or 1
    #[error("direction out of range: {0} (expected -1, 0 or 1)")]
    DirectionOutOfRange(i8),
}

/// Discrete horizontal steering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    None,
    Right,
}

impl Direction {
    pub fn as_f32(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::None => 0.0,
            Direction::Right => 1.0,
        }
    }

    /// Combine held left/right keys (both held cancel out)
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, false) => Direction::Left,
            (false, true) => Direction::Right,
            _ => Direction::None,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = InputError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Direction::Left),
            0 => Ok(Direction::None),
            1 => Ok(Direction::Right),
            other => Err(InputError::DirectionOutOfRange(other)),
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Paddle steering, held until changed by the host
    pub direction: Direction,
    /// Host's run flag: `true` starts an idle game, `false` pauses a running one
    pub run: bool,
}

impl TickInput {
    pub fn new(direction: Direction, run: bool) -> Self {
        Self { direction, run }
    }

    /// Running with the given steering
    pub fn running(direction: Direction) -> Self {
        Self::new(direction, true)
    }

    /// Validate raw host input
    pub fn from_raw(direction: i8, run: bool) -> Result<Self, InputError> {
        Ok(Self::new(Direction::try_from(direction)?, run))
    }
}
