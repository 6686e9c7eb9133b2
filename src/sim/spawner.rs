//! Drop spawning
//!
//! Spawn cadence tightens with level (floor of 16 ticks) and fall speed grows
//! independently by 0.2 per level.

use glam::Vec2;

use super::rng::RandomSource;
use super::state::{Drop, DropKind, GameEvent, GameState};
use crate::consts::{FIELD_WIDTH, SPAWN_MARGIN_X, SPAWN_Y};

/// Cumulative spawn weights, checked in order against one uniform draw
///
/// Heart 35%, Ring 20%, Star 25%, Paparazzi 20%.
pub const SPAWN_TABLE: [(f32, DropKind); 4] = [
    (0.35, DropKind::Heart),
    (0.55, DropKind::Ring),
    (0.80, DropKind::Star),
    (1.00, DropKind::Paparazzi),
];

/// Fastest spawn cadence (ticks between drops)
pub const MIN_SPAWN_INTERVAL: i32 = 16;
/// Cadence at level 0 before the per-level reduction
pub const BASE_SPAWN_INTERVAL: i32 = 36;

/// Map a uniform draw in [0, 1) to a drop kind
pub fn choose_kind(roll: f32) -> DropKind {
    SPAWN_TABLE
        .iter()
        .find(|(threshold, _)| roll < *threshold)
        .map(|&(_, kind)| kind)
        .unwrap_or(DropKind::Paparazzi)
}

/// Ticks until the next spawn at this level
pub fn spawn_interval(level: u32) -> i32 {
    let reduction = level.min(i32::MAX as u32 / 2) as i32 * 2;
    (BASE_SPAWN_INTERVAL - reduction).max(MIN_SPAWN_INTERVAL)
}

/// Fall speed for a fresh drop
pub fn fall_speed(rng: &mut impl RandomSource, level: u32) -> f32 {
    rng.range(2.0, 3.5) + level as f32 * 0.2
}

/// Build one drop for the current level
///
/// Draw order: kind, fall speed, x, rotation.
pub fn make_drop(rng: &mut impl RandomSource, id: u32, level: u32) -> Drop {
    let kind = choose_kind(rng.unit());
    let speed = fall_speed(rng, level);
    let x = rng.range(SPAWN_MARGIN_X, FIELD_WIDTH - SPAWN_MARGIN_X);
    let rotation = rng.range(-0.03, 0.03);
    Drop::new(id, kind, Vec2::new(x, SPAWN_Y), speed, rotation)
}

/// Count down and spawn at most one drop (call only while running)
pub fn step_spawner(state: &mut GameState, rng: &mut impl RandomSource) {
    state.spawn_timer -= 1;
    if state.spawn_timer > 0 {
        return;
    }

    let level = state.hud.level;
    let id = state.next_entity_id();
    let drop = make_drop(rng, id, level);
    log::debug!(
        "Spawned {:?} #{} at x={:.0} speed={:.2}",
        drop.kind,
        id,
        drop.pos.x,
        drop.fall_speed
    );
    state.events.push(GameEvent::DropSpawned {
        id,
        kind: drop.kind,
    });
    state.drops.push(drop);
    state.spawn_timer = spawn_interval(level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRng, seeded};

    #[test]
    fn test_choose_kind_thresholds() {
        assert_eq!(choose_kind(0.0), DropKind::Heart);
        assert_eq!(choose_kind(0.349), DropKind::Heart);
        assert_eq!(choose_kind(0.35), DropKind::Ring);
        assert_eq!(choose_kind(0.549), DropKind::Ring);
        assert_eq!(choose_kind(0.55), DropKind::Star);
        assert_eq!(choose_kind(0.799), DropKind::Star);
        assert_eq!(choose_kind(0.80), DropKind::Paparazzi);
        assert_eq!(choose_kind(0.999), DropKind::Paparazzi);
    }

    #[test]
    fn test_spawn_interval_floor() {
        assert_eq!(spawn_interval(1), 34);
        assert_eq!(spawn_interval(5), 26);
        assert_eq!(spawn_interval(10), 16);
        assert_eq!(spawn_interval(11), 16);
        assert_eq!(spawn_interval(u32::MAX), 16);
    }

    #[test]
    fn test_fall_speed_grows_with_level() {
        let mut rng = ScriptedRng::constant(0.0);
        assert!((fall_speed(&mut rng, 1) - 2.2).abs() < 1e-6);
        assert!((fall_speed(&mut rng, 5) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_make_drop_layout() {
        // kind roll, speed, x, rotation
        let mut rng = ScriptedRng::new(vec![0.5, 0.0, 0.5, 0.5]);
        let drop = make_drop(&mut rng, 9, 1);
        assert_eq!(drop.id, 9);
        assert_eq!(drop.kind, DropKind::Ring);
        assert_eq!(drop.reward, 10);
        assert_eq!(drop.pos, Vec2::new(450.0, SPAWN_Y));
        assert!(drop.rotation.abs() < 1e-6);
    }

    #[test]
    fn test_first_tick_spawns_then_waits() {
        let mut state = GameState::new();
        let mut rng = seeded(1);
        step_spawner(&mut state, &mut rng);
        assert_eq!(state.drops.len(), 1);
        assert_eq!(state.spawn_timer, 34);

        for _ in 0..33 {
            step_spawner(&mut state, &mut rng);
        }
        assert_eq!(state.drops.len(), 1);
        step_spawner(&mut state, &mut rng);
        assert_eq!(state.drops.len(), 2);
    }

    #[test]
    fn test_weights_roughly_match() {
        let mut rng = seeded(2024);
        let mut counts = [0u32; 4];
        let n = 20_000;
        for _ in 0..n {
            let idx = match choose_kind(rng.unit()) {
                DropKind::Heart => 0,
                DropKind::Ring => 1,
                DropKind::Star => 2,
                DropKind::Paparazzi => 3,
            };
            counts[idx] += 1;
        }
        let expected = [0.35, 0.20, 0.25, 0.20];
        for (count, p) in counts.iter().zip(expected) {
            let observed = *count as f32 / n as f32;
            assert!((observed - p).abs() < 0.02, "{observed} vs {p}");
        }
    }
}
