//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Per-tick deltas only, no wall clock
//! - Randomness only through [`RandomSource`]
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod effects;
pub mod input;
pub mod phase;
pub mod physics;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CatchBox, paddle_catches};
pub use input::{Direction, InputError, TickInput};
pub use rng::{RandomSource, ScriptedRng};
pub use snapshot::{DropView, ParticleView, Snapshot};
pub use state::{
    Drop, DropKind, GameEvent, GamePhase, GameState, Hud, Particle, ParticleTag, Player, ERAS,
};
pub use tick::{Arcade, tick};
