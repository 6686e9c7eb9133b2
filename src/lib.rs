//! Eras Catch - a single-screen catch-the-goodies arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, scoring, game phases)
//! - `settings`: Host-side preferences (particle quality, seed, demo runner)
//!
//! Rendering is left to the host: every tick produces a [`sim::Snapshot`]
//! that can be drawn or serialized as-is.

pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings, SettingsError};
pub use sim::{Arcade, Direction, GamePhase, Snapshot, TickInput};

/// Game configuration constants
///
/// All motion is expressed per tick, never per second.
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 560.0;

    /// Paddle row (fixed, 70 px above the bottom edge)
    pub const PLAYER_Y: f32 = FIELD_HEIGHT - 70.0;
    /// Half of the paddle's visual and collision width
    pub const PLAYER_HALF_WIDTH: f32 = 60.0;
    /// Half-height of the catch box around the paddle center
    pub const PLAYER_CATCH_HALF_HEIGHT: f32 = 24.0;
    /// Visual paddle height
    pub const PLAYER_HEIGHT: f32 = 28.0;
    /// Paddle speed (units per tick)
    pub const PLAYER_SPEED: f32 = 6.0;
    /// Glow set on a successful catch
    pub const CATCH_GLOW: f32 = 0.25;
    /// Glow lost per tick
    pub const GLOW_DECAY: f32 = 0.02;

    /// Starting lives
    pub const START_LIVES: u8 = 3;
    /// Proposal meter ceiling (reaching it wins the game)
    pub const METER_MAX: f32 = 100.0;
    /// Meter gained per point of reward
    pub const METER_PER_POINT: f32 = 0.6;
    /// Score needed per level (threshold is `level * LEVEL_SCORE_STEP`)
    pub const LEVEL_SCORE_STEP: u32 = 120;

    /// Drops spawn this far from either side wall
    pub const SPAWN_MARGIN_X: f32 = 24.0;
    /// Drops spawn just above the visible field
    pub const SPAWN_Y: f32 = -30.0;
    /// Drops are pruned once they fall this far below the field
    pub const DESPAWN_MARGIN: f32 = 40.0;
    /// Cosmetic spin per tick (radians)
    pub const DROP_SPIN: f32 = 0.01;
}
