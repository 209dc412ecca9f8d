use super::flash_segment_lit;

#[test]
fn single_flash_is_lit_for_the_whole_window() {
    // One flash means one segment, lit start to finish.
    assert!(flash_segment_lit(0.0, 0.2, 1));
    assert!(flash_segment_lit(0.1, 0.2, 1));
    assert!(flash_segment_lit(0.19, 0.2, 1));
}

#[test]
fn three_flashes_alternate_across_five_segments() {
    // 0.5s / 5 segments = 0.1s each: lit, unlit, lit, unlit, lit.
    let duration = 0.5;
    let flashes = 3;

    assert!(flash_segment_lit(0.05, duration, flashes));
    assert!(!flash_segment_lit(0.15, duration, flashes));
    assert!(flash_segment_lit(0.25, duration, flashes));
    assert!(!flash_segment_lit(0.35, duration, flashes));
    assert!(flash_segment_lit(0.45, duration, flashes));
}

#[test]
fn starts_and_ends_on_a_lit_segment() {
    for flashes in 1..6 {
        assert!(flash_segment_lit(0.0, 1.0, flashes));
        assert!(flash_segment_lit(0.999, 1.0, flashes));
    }
}

#[test]
fn elapsed_past_duration_clamps_to_the_last_segment() {
    assert!(flash_segment_lit(2.0, 0.3, 2));
}
