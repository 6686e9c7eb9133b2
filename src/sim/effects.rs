//! Confetti emitter
//!
//! Purely additive to the particle pool. Nothing here reads or writes score,
//! lives, meter or drops.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{GameEvent, GameState, Particle, ParticleTag};
use crate::consts::FIELD_WIDTH;

/// Downward acceleration per tick
pub const CONFETTI_GRAVITY: f32 = 0.12;
/// Particles per goodie catch
pub const CATCH_CONFETTI: usize = 18;
/// Particles per hazard hit
pub const HAZARD_CONFETTI: usize = 6;
/// Emissions in the win celebration
pub const CELEBRATION_BURSTS: usize = 28;
/// Lifetime range in ticks (inclusive)
pub const MIN_LIFE: u32 = 40;
pub const MAX_LIFE: u32 = 90;

/// Focal point of the win celebration
pub const CELEBRATION_ORIGIN: Vec2 = Vec2::new(FIELD_WIDTH / 2.0, 160.0);

/// Spawn `count` confetti particles at `origin`
pub fn emit(
    particles: &mut Vec<Particle>,
    max_particles: usize,
    rng: &mut impl RandomSource,
    origin: Vec2,
    count: usize,
) {
    for _ in 0..count {
        let vel = Vec2::new(rng.range(-2.0, 2.0), rng.range(-4.0, -1.0));
        let span = (MAX_LIFE - MIN_LIFE + 1) as f32;
        let life = (MIN_LIFE + rng.range(0.0, span) as u32).min(MAX_LIFE);
        let tag = ParticleTag::ALL[rng.index(ParticleTag::ALL.len())];

        if max_particles == 0 {
            continue;
        }
        if particles.len() >= max_particles {
            // Remove oldest particles to make room
            particles.remove(0);
        }
        particles.push(Particle {
            pos: origin,
            vel,
            gravity: CONFETTI_GRAVITY,
            life,
            tag,
        });
    }
}

/// Confetti for a caught goodie, at the drop
pub fn catch_burst(state: &mut GameState, rng: &mut impl RandomSource, at: Vec2) {
    emit(&mut state.particles, state.max_particles, rng, at, CATCH_CONFETTI);
}

/// Small puff just above the paddle for a hazard hit
pub fn hazard_puff(state: &mut GameState, rng: &mut impl RandomSource) {
    let at = Vec2::new(state.player.x, state.player.y - 10.0);
    emit(&mut state.particles, state.max_particles, rng, at, HAZARD_CONFETTI);
}

/// The win celebration: many catch-sized bursts scattered around the focal point
pub fn celebrate(state: &mut GameState, rng: &mut impl RandomSource) {
    for _ in 0..CELEBRATION_BURSTS {
        let at = CELEBRATION_ORIGIN + Vec2::new(rng.range(-80.0, 80.0), rng.range(-40.0, 40.0));
        emit(&mut state.particles, state.max_particles, rng, at, CATCH_CONFETTI);
    }
    state.events.push(GameEvent::Celebration);
}

/// Advance every particle one tick and drop the expired ones
pub fn step_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|p| p.step());
}
