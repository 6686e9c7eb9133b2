//! Drop integration and paddle collisions
//!
//! Each drop falls, then is tested against the paddle, then against the
//! bottom margin. A drop can score at most once because it leaves the pool in
//! the same step it is caught.

use super::collision::paddle_catches;
use super::effects;
use super::rng::RandomSource;
use super::scoring::{CatchOutcome, apply_catch};
use super::state::{Drop, GameEvent, GameState};
use crate::consts::DROP_SPIN;

/// What happened to one drop this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropFate {
    Falling,
    Caught,
    Missed,
}

/// Move every drop and resolve catches (call only while running)
///
/// Once the meter fills, the remaining drops still fall but are no longer
/// scored this tick. Losing the last life does not stop scoring; the phase
/// check at the end of the tick settles a win/loss race.
pub fn step_drops(state: &mut GameState, rng: &mut impl RandomSource) {
    let mut drops = std::mem::take(&mut state.drops);

    drops.retain_mut(|drop| {
        drop.pos.y += drop.fall_speed;
        drop.rotation += DROP_SPIN;

        match resolve(state, rng, drop) {
            DropFate::Falling => true,
            DropFate::Caught => false,
            DropFate::Missed => {
                log::trace!("Drop #{} left the field", drop.id);
                false
            }
        }
    });

    state.drops = drops;
}

fn resolve(state: &mut GameState, rng: &mut impl RandomSource, drop: &Drop) -> DropFate {
    if !state.hud.meter_full() && paddle_catches(&state.player, drop.pos) {
        on_catch(state, rng, drop);
        return DropFate::Caught;
    }
    if drop.is_out_of_field() {
        return DropFate::Missed;
    }
    DropFate::Falling
}

fn on_catch(state: &mut GameState, rng: &mut impl RandomSource, drop: &Drop) {
    match apply_catch(&mut state.hud, &mut state.player, drop.kind) {
        CatchOutcome::LostLife { lives_left } => {
            log::debug!("Hazard #{} hit, {} lives left", drop.id, lives_left);
            state.events.push(GameEvent::HazardHit {
                id: drop.id,
                lives_left,
            });
            effects::hazard_puff(state, rng);
        }
        CatchOutcome::Scored { reward, leveled_up } => {
            log::debug!("Caught {:?} #{} (+{})", drop.kind, drop.id, reward);
            state.events.push(GameEvent::Caught {
                id: drop.id,
                kind: drop.kind,
                reward,
            });
            if leveled_up {
                log::info!(
                    "Level {} reached ({} era)",
                    state.hud.level,
                    state.hud.era()
                );
                state.events.push(GameEvent::LevelUp {
                    level: state.hud.level,
                });
            }
            effects::catch_burst(state, rng, drop.pos);
        }
    }
}
