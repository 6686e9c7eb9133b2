//! Per-tick frame loop
//!
//! Core game loop that advances the simulation one step. The host decides
//! when to call it (animation frame, timer, test); nothing here assumes a
//! tick duration.

use rand_pcg::Pcg32;

use super::input::TickInput;
use super::rng::{self, RandomSource};
use super::snapshot::Snapshot;
use super::state::GameState;
use super::{effects, phase, physics, spawner};
use crate::settings::Settings;

/// Advance the game state by one tick
///
/// Order: run request, spawner, paddle, drops, particles, phase check.
pub fn tick(state: &mut GameState, rng: &mut impl RandomSource, input: &TickInput) -> Snapshot {
    state.events.clear();
    state.time_ticks += 1;

    phase::apply_run_request(state, input.run);

    if state.is_running() {
        spawner::step_spawner(state, rng);
    }

    state.player.steer(input.direction);
    state.player.decay_glow();

    // Drops hold still outside Running; collisions only count while playing
    if state.is_running() {
        physics::step_drops(state, rng);
    }

    // Confetti keeps animating in every phase
    effects::step_particles(&mut state.particles);

    phase::evaluate(state, rng);

    Snapshot::capture(state)
}

/// The simulation context: game state plus its random source
///
/// Single owner of all mutable game data.
#[derive(Debug, Clone)]
pub struct Arcade<R = Pcg32> {
    state: GameState,
    rng: R,
}

impl Arcade<Pcg32> {
    /// New idle game with a seeded PCG stream
    pub fn new(seed: u64) -> Self {
        Self::with_rng(rng::seeded(seed), GameState::new())
    }

    /// New idle game configured from host settings
    ///
    /// Without a configured seed, one is drawn from the OS.
    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        log::info!("Game initialized with seed: {}", seed);
        Self::with_rng(
            rng::seeded(seed),
            GameState::with_particle_cap(settings.max_particles()),
        )
    }
}

impl<R: RandomSource> Arcade<R> {
    /// Use any random source (tests inject a scripted one)
    pub fn with_rng(rng: R, state: GameState) -> Self {
        Self { state, rng }
    }

    /// Advance one tick and return what to draw
    pub fn tick(&mut self, input: &TickInput) -> Snapshot {
        tick(&mut self.state, &mut self.rng, input)
    }

    /// Back to a fresh idle game (score, lives, level, meter, drops, particles, paddle)
    pub fn reset(&mut self) -> Snapshot {
        log::info!(
            "Reset (was {:?}, score {})",
            self.state.phase,
            self.state.hud.score
        );
        self.state.reset();
        Snapshot::capture(&self.state)
    }

    /// Snapshot of the current state without advancing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts that script scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
