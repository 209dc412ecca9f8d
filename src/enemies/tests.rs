//! Unit tests for health bookkeeping and the stomp cone check.

use bevy::prelude::*;

use super::components::{Health, Invulnerable};
use super::systems::{knockback_fraction, push_direction, stomped_from_above};

// ==== Health ================================================================

#[test]
fn damage_is_capped_at_remaining_health() {
    let mut health = Health::new(30.0);
    assert_eq!(health.take_damage(10.0), 10.0);
    assert_eq!(health.current, 20.0);
    assert_eq!(health.take_damage(50.0), 20.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn heal_is_capped_at_max_health() {
    let mut health = Health::new(30.0);
    health.take_damage(25.0);
    assert_eq!(health.heal(100.0), 25.0);
    assert_eq!(health.current, 30.0);
}

#[test]
fn percent_tracks_the_remaining_fraction() {
    let mut health = Health::new(40.0);
    health.take_damage(10.0);
    assert!((health.percent() - 0.75).abs() < f32::EPSILON);
}

#[test]
fn fresh_invulnerable_is_not_active() {
    assert!(!Invulnerable::default().is_invulnerable());
    assert!(Invulnerable { timer: 0.3 }.is_invulnerable());
}

// ==== Stomp cone ============================================================

#[test]
fn contact_straight_above_is_a_stomp() {
    assert!(stomped_from_above(Vec2::new(0.0, 30.0), 100.0));
}

#[test]
fn side_contact_is_not_a_stomp() {
    assert!(!stomped_from_above(Vec2::new(30.0, 0.0), 100.0));
    assert!(!stomped_from_above(Vec2::new(-30.0, 2.0), 100.0));
}

#[test]
fn contact_from_below_is_not_a_stomp() {
    assert!(!stomped_from_above(Vec2::new(0.0, -30.0), 100.0));
}

#[test]
fn cone_boundary_respects_the_half_angle() {
    // 100 degree cone: half angle 50 degrees from straight up
    let inside = Vec2::from_angle(float_radians(90.0 - 45.0)) * 20.0;
    let outside = Vec2::from_angle(float_radians(90.0 - 55.0)) * 20.0;
    assert!(stomped_from_above(inside, 100.0));
    assert!(!stomped_from_above(outside, 100.0));
}

#[test]
fn zero_contact_direction_is_never_a_stomp() {
    assert!(!stomped_from_above(Vec2::ZERO, 100.0));
}

fn float_radians(deg: f32) -> f32 {
    deg.to_radians()
}

// ==== Knockback =============================================================

#[test]
fn knockback_fraction_scales_with_damage_share() {
    assert_eq!(knockback_fraction(10.0, Some(40.0)), 0.25);
    assert_eq!(knockback_fraction(20.0, Some(40.0)), 0.5);
    assert_eq!(knockback_fraction(60.0, Some(40.0)), 1.0);
    assert_eq!(knockback_fraction(5.0, Some(100.0)), 0.25);
}

#[test]
fn knockback_fraction_defaults_to_full_without_health() {
    assert_eq!(knockback_fraction(10.0, None), 1.0);
    assert_eq!(knockback_fraction(10.0, Some(0.0)), 1.0);
}

#[test]
fn push_direction_normalizes_and_handles_zero() {
    assert_eq!(push_direction(Vec2::new(10.0, 0.0)), Vec2::X);
    assert_eq!(push_direction(Vec2::ZERO), Vec2::X);
    let diagonal = push_direction(Vec2::new(3.0, 4.0));
    assert!((diagonal.length() - 1.0).abs() < 1e-6);
}
