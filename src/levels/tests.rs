//! Unit tests for level data, door gating and deterministic decoration.

use std::time::Duration;

use bevy::prelude::*;

use super::data::fnv1a;
use super::registry::builtin_levels;
use super::spawn::{decoration_rects, DECOR_PALETTE};
use super::systems::door_open;
use super::ui::tooltip_text;
use super::*;

fn library_of(ids: &[&str]) -> LevelLibrary {
    let mut library = LevelLibrary::default();
    for id in ids {
        let mut level = builtin_levels().remove(0);
        level.id = id.to_string();
        library.levels.push(level);
    }
    library
}

// ==== Level data ============================================================

#[test]
fn half_extents_is_half_the_size() {
    let mut level = builtin_levels().remove(0);
    level.size = Vec2::new(1600.0, 900.0);
    assert_eq!(level.half_extents(), Vec2::new(800.0, 450.0));
}

#[test]
fn decoration_seed_prefers_explicit_nonzero_seed() {
    let mut level = builtin_levels().remove(0);
    level.decor_seed = 42;
    assert_eq!(level.decoration_seed(), 42);
}

#[test]
fn decoration_seed_derives_from_id_when_unset() {
    let mut level = builtin_levels().remove(0);
    level.decor_seed = 0;
    level.id = "crag_ascent".to_string();
    assert_eq!(level.decoration_seed(), fnv1a(b"crag_ascent"));
}

#[test]
fn fnv1a_is_stable_and_distinguishes_ids() {
    assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(fnv1a(b"abc"), fnv1a(b"abc"));
    assert_ne!(fnv1a(b"crag_ascent"), fnv1a(b"crag_summit"));
}

// ==== Library lookups =======================================================

#[test]
fn library_get_finds_levels_by_id() {
    let library = library_of(&["a", "b"]);
    assert!(library.get("b").is_some());
    assert!(library.get("missing").is_none());
}

#[test]
fn library_first_id_is_none_when_empty() {
    let library = LevelLibrary::default();
    assert_eq!(library.first_id(), None);
}

#[test]
fn next_id_after_wraps_around() {
    let library = library_of(&["a", "b", "c"]);
    assert_eq!(library.next_id_after("a"), Some("b"));
    assert_eq!(library.next_id_after("c"), Some("a"));
    assert_eq!(library.next_id_after("missing"), None);
}

#[test]
fn builtin_levels_link_up() {
    let levels = builtin_levels();
    assert!(levels.len() >= 2);
    let first_exit = levels[0].exit.as_ref().unwrap();
    let target = first_exit.target.as_ref().unwrap();
    assert!(levels.iter().any(|level| &level.id == target));
    let last_exit = levels.last().unwrap().exit.as_ref().unwrap();
    assert_eq!(last_exit.target, None);
}

// ==== Door rules ============================================================

#[test]
fn always_rule_is_always_open() {
    assert!(door_open(&DoorRule::Always, 0, 5));
}

#[test]
fn key_rule_opens_at_the_required_count() {
    assert!(!door_open(&DoorRule::RequiresKeys(2), 0, 0));
    assert!(!door_open(&DoorRule::RequiresKeys(2), 1, 0));
    assert!(door_open(&DoorRule::RequiresKeys(2), 2, 0));
    assert!(door_open(&DoorRule::RequiresKeys(2), 3, 0));
}

#[test]
fn cleared_rule_opens_when_no_enemies_remain() {
    assert!(!door_open(&DoorRule::EnemiesCleared, 0, 3));
    assert!(door_open(&DoorRule::EnemiesCleared, 0, 0));
}

#[test]
fn tooltip_explains_the_lock() {
    let gate = DoorGate {
        target: Some("next".to_string()),
        rule: DoorRule::RequiresKeys(2),
    };
    assert_eq!(tooltip_text(&gate, false, 1), "Locked: 1/2 keys");
    assert_eq!(tooltip_text(&gate, true, 1), "Press [E] to enter");

    let gate = DoorGate {
        target: None,
        rule: DoorRule::EnemiesCleared,
    };
    assert_eq!(tooltip_text(&gate, false, 0), "Locked: enemies remain");
}

// ==== Transition cooldown ===================================================

#[test]
fn cooldown_blocks_until_it_runs_out() {
    let mut cooldown = TransitionCooldown::default();
    cooldown.reset();
    assert!(!cooldown.can_transition());

    cooldown.tick(Duration::from_millis(100));
    assert!(!cooldown.can_transition());

    cooldown.tick(Duration::from_millis(250));
    assert!(cooldown.can_transition());
}

// ==== Decoration scatter ====================================================

#[test]
fn decoration_scatter_is_deterministic() {
    let half = Vec2::new(800.0, 450.0);
    assert_eq!(decoration_rects(7, half), decoration_rects(7, half));
    assert_ne!(decoration_rects(7, half), decoration_rects(8, half));
}

#[test]
fn decoration_scatter_stays_inside_the_level() {
    let half = Vec2::new(800.0, 450.0);
    let rects = decoration_rects(3, half);
    assert!(!rects.is_empty());
    assert!(rects.len() <= 24);
    for (pos, size, palette) in rects {
        assert!(pos.x.abs() <= half.x);
        assert!(pos.y.abs() <= half.y);
        assert!(size.x >= 24.0 && size.x <= 96.0);
        assert!(size.y >= 16.0 && size.y <= 64.0);
        assert!(palette < DECOR_PALETTE.len());
    }
}

#[test]
fn decoration_scatter_skips_tiny_levels() {
    assert!(decoration_rects(3, Vec2::new(100.0, 60.0)).is_empty());
}
