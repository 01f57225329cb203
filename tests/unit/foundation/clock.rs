use super::*;

#[test]
fn fixed_step_clock_follows_frame_index() {
    let mut clock = FixedStepClock::new(Fps::new(60, 1).unwrap());
    assert_eq!(clock.elapsed_secs(FrameIndex(0)), 0.0);
    assert!((clock.elapsed_secs(FrameIndex(120)) - 2.0).abs() < 1e-12);
}

#[test]
fn monotonic_clock_never_goes_backwards() {
    let mut clock = MonotonicClock::start();
    let a = clock.elapsed_secs(FrameIndex(0));
    let b = clock.elapsed_secs(FrameIndex(0));
    assert!(a >= 0.0);
    assert!(b >= a);
}

#[test]
fn clock_mode_builds_matching_clock() {
    let fps = Fps::new(30, 1).unwrap();
    let mut fixed = ClockMode::FixedStep.build(fps);
    assert!((fixed.elapsed_secs(FrameIndex(30)) - 1.0).abs() < 1e-12);
    assert_eq!(ClockMode::default(), ClockMode::FixedStep);
}
