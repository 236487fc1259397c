use super::*;

#[test]
fn starts_at_zero() {
    let counter = CountUp::new(150);
    assert_eq!(counter.value_at(0), 0);
    assert_eq!(counter.label_at(0), "0");
}

#[test]
fn halfway_shows_half_the_target() {
    let counter = CountUp::new(150);
    assert_eq!(counter.value_at(COUNT_UP_DURATION_MS / 2), 75);
}

#[test]
fn completes_with_plus_suffix() {
    let counter = CountUp::new(150);
    assert_eq!(counter.value_at(COUNT_UP_DURATION_MS), 150);
    assert_eq!(counter.label_at(COUNT_UP_DURATION_MS), "150+");
    assert_eq!(counter.label_at(COUNT_UP_DURATION_MS + 5000), "150+");
}

#[test]
fn value_never_exceeds_target_across_frames() {
    let counter = CountUp::new(37);
    let mut elapsed_ms = 0;
    let mut previous = 0;
    while elapsed_ms <= COUNT_UP_DURATION_MS + COUNT_UP_FRAME_MS {
        let value = counter.value_at(elapsed_ms);
        assert!(value <= counter.target);
        assert!(value >= previous, "count-up must be monotonic");
        previous = value;
        elapsed_ms += COUNT_UP_FRAME_MS;
    }
    assert_eq!(previous, 37);
}

#[test]
fn zero_target_completes_immediately() {
    let counter = CountUp::new(0);
    assert_eq!(counter.value_at(0), 0);
    assert_eq!(counter.label_at(COUNT_UP_DURATION_MS), "0+");
}

#[test]
fn arm_is_a_one_shot_latch() {
    let mut stats = StatsState::default();
    assert!(stats.arm());
    assert!(!stats.arm());
    assert!(!stats.arm());
    assert!(stats.animated);
}
