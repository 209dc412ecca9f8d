use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::pick_clip;

#[test]
fn explicit_index_in_range_is_honored() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(pick_clip(3, Some(0), &mut rng), Some(0));
    assert_eq!(pick_clip(3, Some(2), &mut rng), Some(2));
}

#[test]
fn explicit_index_out_of_range_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(pick_clip(3, Some(3), &mut rng), None);
    assert_eq!(pick_clip(0, Some(0), &mut rng), None);
}

#[test]
fn no_clips_means_no_pick() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(pick_clip(0, None, &mut rng), None);
}

#[test]
fn single_clip_skips_the_roll() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(pick_clip(1, None, &mut rng), Some(0));
}

#[test]
fn random_pick_stays_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..50 {
        let pick = pick_clip(4, None, &mut rng).unwrap();
        assert!(pick < 4);
    }
}

#[test]
fn random_pick_is_deterministic_per_seed() {
    let mut a = ChaCha8Rng::seed_from_u64(7);
    let mut b = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..10 {
        assert_eq!(pick_clip(5, None, &mut a), pick_clip(5, None, &mut b));
    }
}
