//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; there is no
//! ambient state anywhere else in the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::Direction;
use crate::consts::*;

/// Era labels, cycled through as the level rises
pub const ERAS: [&str; 8] = [
    "Fearless",
    "Red",
    "1989",
    "Reputation",
    "Lover",
    "Folklore",
    "Evermore",
    "Midnights",
];

/// Era label for a level (levels start at 1)
pub fn era_for_level(level: u32) -> &'static str {
    ERAS[(level.max(1) - 1) as usize % ERAS.len()]
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a run request, nothing falls
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Out of lives; only a reset leaves this phase
    GameOver,
    /// Proposal meter filled; only a reset leaves this phase
    Won,
}

impl GamePhase {
    /// Terminal phases suspend spawning and scoring until reset
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Won)
    }
}

/// Drop kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropKind {
    Ring,
    Heart,
    Star,
    /// Hazard: costs a life instead of scoring
    Paparazzi,
}

impl DropKind {
    /// Score awarded on catch
    pub fn reward(self) -> u32 {
        match self {
            DropKind::Ring => 10,
            DropKind::Heart => 5,
            DropKind::Star => 15,
            DropKind::Paparazzi => 0,
        }
    }

    /// Visual radius (collision ignores it)
    pub fn radius(self) -> f32 {
        match self {
            DropKind::Ring => 16.0,
            DropKind::Heart => 14.0,
            DropKind::Star => 15.0,
            DropKind::Paparazzi => 16.0,
        }
    }

    pub fn is_hazard(self) -> bool {
        self == DropKind::Paparazzi
    }
}

/// A falling collectible or hazard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drop {
    pub id: u32,
    pub pos: Vec2,
    /// Fall speed per tick (positive = downward)
    pub fall_speed: f32,
    /// Cosmetic rotation (radians)
    pub rotation: f32,
    pub kind: DropKind,
    pub reward: u32,
    pub radius: f32,
}

impl Drop {
    pub fn new(id: u32, kind: DropKind, pos: Vec2, fall_speed: f32, rotation: f32) -> Self {
        Self {
            id,
            pos,
            fall_speed,
            rotation,
            kind,
            reward: kind.reward(),
            radius: kind.radius(),
        }
    }

    /// Fallen past the bottom margin
    pub fn is_out_of_field(&self) -> bool {
        self.pos.y > FIELD_HEIGHT + DESPAWN_MARGIN
    }
}

/// Cosmetic confetti symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticleTag {
    BlueHeart,
    PinkHeart,
    Star,
    Gem,
}

impl ParticleTag {
    pub const ALL: [ParticleTag; 4] = [
        ParticleTag::BlueHeart,
        ParticleTag::PinkHeart,
        ParticleTag::Star,
        ParticleTag::Gem,
    ];
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Added to `vel.y` every tick
    pub gravity: f32,
    /// Remaining lifetime in ticks
    pub life: u32,
    pub tag: ParticleTag,
}

impl Particle {
    /// Advance one tick; returns false once expired
    pub fn step(&mut self) -> bool {
        self.vel.y += self.gravity;
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Horizontal center
    pub x: f32,
    /// Vertical center (fixed row)
    pub y: f32,
    /// Catch feedback in [0, 1], decays every tick
    pub glow: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: FIELD_WIDTH / 2.0,
            y: PLAYER_Y,
            glow: 0.0,
        }
    }
}

impl Player {
    pub const MIN_X: f32 = PLAYER_HALF_WIDTH;
    pub const MAX_X: f32 = FIELD_WIDTH - PLAYER_HALF_WIDTH;

    /// Move one tick in the given direction, clamped to the field
    pub fn steer(&mut self, direction: Direction) {
        let dx = direction.as_f32() * PLAYER_SPEED;
        self.x = (self.x + dx).clamp(Self::MIN_X, Self::MAX_X);
    }

    pub fn decay_glow(&mut self) {
        self.glow = (self.glow - GLOW_DECAY).max(0.0);
    }
}

/// Score, lives and progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    /// Win meter in [0, 100]
    pub proposal_meter: f32,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score: 0,
            lives: START_LIVES,
            level: 1,
            proposal_meter: 0.0,
        }
    }
}

impl Hud {
    pub fn era(&self) -> &'static str {
        era_for_level(self.level)
    }

    pub fn meter_full(&self) -> bool {
        self.proposal_meter >= METER_MAX
    }

    pub fn out_of_lives(&self) -> bool {
        self.lives == 0
    }
}

/// Things that happened during a tick (observational only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    DropSpawned { id: u32, kind: DropKind },
    Caught { id: u32, kind: DropKind, reward: u32 },
    HazardHit { id: u32, lives_left: u8 },
    LevelUp { level: u32 },
    /// The one-off confetti burst fired on entering `Won`
    Celebration,
    GameOver,
    Won,
}

/// Default particle pool size when no settings are supplied
pub const DEFAULT_MAX_PARTICLES: usize = 2000;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    pub hud: Hud,
    pub player: Player,
    /// Active drops, in spawn order
    pub drops: Vec<Drop>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Ticks until the next spawn (spawns when it drops to 0 or below)
    pub spawn_timer: i32,
    /// Simulation tick counter (since last reset)
    pub time_ticks: u64,
    /// Particle pool cap (oldest evicted first)
    pub max_particles: usize,
    /// Events raised during the current tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_particle_cap(DEFAULT_MAX_PARTICLES)
    }

    pub fn with_particle_cap(max_particles: usize) -> Self {
        Self {
            phase: GamePhase::Idle,
            hud: Hud::default(),
            player: Player::default(),
            drops: Vec::new(),
            particles: Vec::new(),
            spawn_timer: 0,
            time_ticks: 0,
            max_particles,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Restore the initial state, keeping the particle cap
    pub fn reset(&mut self) {
        *self = Self::with_particle_cap(self.max_particles);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        // IDs only track entities for the renderer; wrapping is harmless
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Gameplay (spawning, falling, scoring) only runs while `Running`
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_cycles() {
        assert_eq!(era_for_level(1), "Fearless");
        assert_eq!(era_for_level(2), "Red");
        assert_eq!(era_for_level(8), "Midnights");
        assert_eq!(era_for_level(9), "Fearless");
    }

    #[test]
    fn test_player_clamps() {
        let mut player = Player::default();
        for _ in 0..500 {
            player.steer(Direction::Left);
        }
        assert_eq!(player.x, Player::MIN_X);
        for _ in 0..500 {
            player.steer(Direction::Right);
        }
        assert_eq!(player.x, Player::MAX_X);
    }

    #[test]
    fn test_glow_decays_to_zero() {
        let mut player = Player {
            glow: CATCH_GLOW,
            ..Default::default()
        };
        player.decay_glow();
        assert!((player.glow - 0.23).abs() < 1e-6);
        for _ in 0..20 {
            player.decay_glow();
        }
        assert_eq!(player.glow, 0.0);
    }

    #[test]
    fn test_particle_expires() {
        let mut particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -2.0),
            gravity: 0.5,
            life: 2,
            tag: ParticleTag::Gem,
        };
        assert!(particle.step());
        assert_eq!(particle.pos, Vec2::new(1.0, -1.5));
        assert!(!particle.step());
    }

    #[test]
    fn test_entity_ids_wrap() {
        let mut state = GameState::new();
        state.next_id = u32::MAX;
        assert_eq!(state.next_entity_id(), u32::MAX);
        assert_eq!(state.next_entity_id(), 0);
    }

    #[test]
    fn test_reset_keeps_particle_cap() {
        let mut state = GameState::with_particle_cap(10);
        state.hud.score = 50;
        state.phase = GamePhase::Won;
        state.next_entity_id();
        state.reset();
        assert_eq!(state.max_particles, 10);
        assert_eq!(state.hud, Hud::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.next_entity_id(), 1);
    }
}
