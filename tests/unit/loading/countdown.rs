use super::*;

#[test]
fn first_sample_starts_the_clock() {
    let mut c = ProgressCountdown::new(2000);
    let s = c.sample(5_000.0);
    assert_eq!(s.percent, 0.0);
    assert!(!s.just_completed);

    assert_eq!(c.sample(5_500.0).percent, 25.0);
    assert_eq!(c.sample(6_000.0).percent, 50.0);
}

#[test]
fn completes_exactly_once_at_full_progress() {
    let mut c = ProgressCountdown::default();
    assert_eq!(c.duration_ms(), 2000.0);
    c.sample(0.0);

    let done = c.sample(2_016.0);
    assert_eq!(done.percent, 100.0);
    assert!(done.just_completed);
    assert!(c.is_complete());

    for t in [2_032.0, 9_999.0, 0.0] {
        let s = c.sample(t);
        assert_eq!(s.percent, 100.0);
        assert!(!s.just_completed);
    }
}

#[test]
fn progress_is_monotonic_and_bounded() {
    let mut c = ProgressCountdown::new(1000);
    let mut last = -1.0;
    let mut completions = 0;
    for frame in 0..120 {
        let s = c.sample(f64::from(frame) * 16.0);
        assert!((0.0..=100.0).contains(&s.percent));
        assert!(s.percent >= last);
        last = s.percent;
        completions += usize::from(s.just_completed);
    }
    assert_eq!(completions, 1);
}

#[test]
fn zero_duration_completes_on_first_frame() {
    let mut c = ProgressCountdown::new(0);
    let s = c.sample(42.0);
    assert!(s.just_completed);
    assert_eq!(s.percent, 100.0);
}

#[test]
fn clock_going_backwards_does_not_go_negative() {
    let mut c = ProgressCountdown::new(1000);
    c.sample(500.0);
    assert_eq!(c.sample(100.0).percent, 0.0);
}
