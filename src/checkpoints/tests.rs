use bevy::prelude::*;

use super::CheckpointTracker;

#[test]
fn tracker_starts_unset() {
    let tracker = CheckpointTracker::default();
    assert!(tracker.last.is_none());
}

#[test]
fn store_overwrites_previous_position() {
    let mut tracker = CheckpointTracker::default();

    tracker.store(Vec2::new(100.0, 50.0));
    assert_eq!(tracker.last, Some(Vec2::new(100.0, 50.0)));

    tracker.store(Vec2::new(-320.0, 210.0));
    assert_eq!(tracker.last, Some(Vec2::new(-320.0, 210.0)));
}

#[test]
fn clear_resets_to_unset() {
    let mut tracker = CheckpointTracker::default();
    tracker.store(Vec2::splat(12.0));

    tracker.clear();
    assert!(tracker.last.is_none());
}
