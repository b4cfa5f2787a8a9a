// Host-side tests for spawning, ticking and pruning the effect registry.

mod common;

use common::Recorder;
use cursor_fx::core::{batch_color, Effect, Registry, PALETTE};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn spawn_batch_adds_ten_of_each_variant() {
    let mut reg = Registry::new();
    let added = reg.spawn_batch(Vec2::new(5.0, 5.0), 0.5, &mut rng());
    assert_eq!(added, 30);
    assert_eq!(reg.rings().count(), 10);
    assert_eq!(reg.blooms().count(), 10);
    assert_eq!(reg.slow_rings().count(), 10);
    assert_eq!(reg.len(), 30);

    reg.spawn_batch(Vec2::new(1.0, 1.0), 0.5, &mut rng());
    assert_eq!(reg.rings().count(), 20);
}

#[test]
fn batch_slots_share_one_color_across_variants() {
    let mut reg = Registry::new();
    reg.spawn_batch(Vec2::ZERO, 1.0, &mut rng());
    let rings: Vec<_> = reg.rings().map(|e| e.state().color).collect();
    let blooms: Vec<_> = reg.blooms().map(|e| e.state().color).collect();
    let slows: Vec<_> = reg.slow_rings().map(|e| e.state().color).collect();
    assert_eq!(rings, blooms);
    assert_eq!(rings, slows);
}

#[test]
fn batch_colors_use_factors_in_tenths() {
    let mut reg = Registry::new();
    reg.spawn_batch(Vec2::ZERO, 1.0, &mut rng());
    // newest first: slot 9 is at the front
    let colors: Vec<_> = reg.rings().map(|e| e.state().color).collect();
    for (pos, color) in colors.iter().enumerate() {
        let slot = 9 - pos;
        let matches_some_base =
            (0..PALETTE.len()).any(|base| batch_color(base, slot, 10) == *color);
        assert!(matches_some_base, "slot {slot} color {color:?}");
    }
}

#[test]
fn spawned_effects_sit_at_the_pointer() {
    let mut reg = Registry::new();
    let p = Vec2::new(3.5, 7.25);
    reg.spawn_batch(p, 2.0, &mut rng());
    assert!(reg.rings().all(|e| e.state().position == p));
    assert!(reg.blooms().all(|e| e.state().position == p));
    assert!(reg.slow_rings().all(|e| e.state().position == p));
}

#[test]
fn tick_draws_every_live_effect_once() {
    let mut reg = Registry::new();
    reg.spawn_batch(Vec2::ZERO, 2.0, &mut rng());
    let mut surface = Recorder::new("visible", 50, 50);
    let removed = reg.tick(Some(&mut surface));
    assert_eq!(removed, 0);
    assert_eq!(surface.circles(), 30);
}

#[test]
fn zero_speed_batch_retires_in_one_tick() {
    let mut reg = Registry::new();
    reg.spawn_batch(Vec2::ZERO, 0.0, &mut rng());
    let removed = reg.tick(None);
    assert_eq!(removed, 30);
    assert!(reg.is_empty());
}

#[test]
fn effects_are_removed_the_first_frame_they_retire() {
    let mut reg = Registry::new();
    reg.spawn_batch(Vec2::ZERO, 1.0, &mut rng());
    let mut frames = 0;
    while !reg.is_empty() {
        reg.tick(None);
        frames += 1;
        // nothing retired survives a tick
        assert!(reg.rings().all(|e| e.state().opacity > 0.0));
        assert!(reg.blooms().all(|e| e.state().opacity > 0.0));
        assert!(reg.slow_rings().all(|e| e.state().opacity > 0.0));
        if frames <= 10 {
            // rings fade at roughly 1/11 per frame
            assert_eq!(reg.rings().count(), 10, "frame {frames}");
        }
        assert!(frames < 10_000, "registry never drained");
    }
}

#[test]
fn pruning_keeps_survivors_in_order() {
    let mut reg = Registry::new();
    // a degenerate batch sandwiched between two live ones
    reg.spawn_batch(Vec2::new(1.0, 0.0), 1.0, &mut rng());
    reg.spawn_batch(Vec2::new(2.0, 0.0), 0.0, &mut rng());
    reg.spawn_batch(Vec2::new(3.0, 0.0), 1.0, &mut rng());
    reg.tick(None);
    let xs: Vec<f32> = reg.rings().map(|e| e.state().position.x).collect();
    assert_eq!(xs.len(), 20);
    assert!(xs[..10].iter().all(|x| *x == 3.0));
    assert!(xs[10..].iter().all(|x| *x == 1.0));
    // every survivor was updated exactly once
    assert!(reg
        .rings()
        .all(|e| (e.state().opacity - (1.0 - 1.0 / 11.0)).abs() < 1e-5));
}

#[test]
fn effects_advance_without_a_surface() {
    let mut reg = Registry::new();
    reg.spawn_batch(Vec2::ZERO, 4.0, &mut rng());
    let before: Vec<f32> = reg.blooms().map(|e| e.state().size).collect();
    reg.tick(None);
    let after: Vec<f32> = reg.blooms().map(|e| e.state().size).collect();
    assert!(before.iter().zip(&after).all(|(b, a)| a > b));
}

#[test]
fn clear_drops_everything() {
    let mut reg = Registry::new();
    reg.spawn_batch(Vec2::ZERO, 1.0, &mut rng());
    reg.clear();
    assert!(reg.is_empty());
    assert_eq!(reg.tick(None), 0);
}
