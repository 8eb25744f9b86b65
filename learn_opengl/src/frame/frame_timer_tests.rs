use super::*;

#[test]
fn test_first_tick_measures_from_zero() {
    let mut timer = FrameTimer::new();
    assert_eq!(timer.tick(0.5), 0.5);
    assert_eq!(timer.delta(), 0.5);
    assert_eq!(timer.last_frame_time(), 0.5);
}

#[test]
fn test_tick_measures_between_frames() {
    let mut timer = FrameTimer::starting_at(10.0);
    assert!((timer.tick(10.25) - 0.25).abs() < 1e-6);
    assert!((timer.tick(10.5) - 0.25).abs() < 1e-6);
}

#[test]
fn test_backwards_clock_yields_zero() {
    let mut timer = FrameTimer::starting_at(5.0);
    assert_eq!(timer.tick(4.0), 0.0);
    assert_eq!(timer.last_frame_time(), 4.0);
}
