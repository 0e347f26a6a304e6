// Host-side tests for easing curves and the yoyo pulse.

use glam::{DVec2, DVec3};
use globe_core::pulse::*;
use globe_core::tween::*;

#[test]
fn ease_out_quad_endpoints_and_midpoint() {
    assert_eq!(ease_out_quad(0.0), 0.0);
    assert_eq!(ease_out_quad(1.0), 1.0);
    assert!((ease_out_quad(0.5) - 0.75).abs() < 1e-12);
    // clamped outside [0, 1]
    assert_eq!(ease_out_quad(-1.0), 0.0);
    assert_eq!(ease_out_quad(2.0), 1.0);
}

#[test]
fn ease_out_quad_is_monotonic() {
    let mut prev = ease_out_quad(0.0);
    for i in 1..=100 {
        let v = ease_out_quad(i as f64 / 100.0);
        assert!(v >= prev, "ease not increasing at step {i}");
        prev = v;
    }
}

#[test]
fn tween_samples_between_endpoints() {
    let tw = Tween::new(DVec2::ZERO, DVec2::new(2.0, -4.0), 1.0, 2.0);
    assert_eq!(tw.sample(0.0), DVec2::ZERO);
    assert_eq!(tw.sample(1.0), DVec2::ZERO);
    assert!((tw.sample(2.0) - DVec2::new(1.5, -3.0)).length() < 1e-12);
    assert!((tw.sample(3.0) - DVec2::new(2.0, -4.0)).length() < 1e-12);
    assert!(!tw.is_finished(2.9));
    assert!(tw.is_finished(3.0));
}

#[test]
fn zero_duration_tween_finishes_immediately() {
    let tw = Tween::new(DVec2::ZERO, DVec2::ONE, 5.0, 0.0);
    assert!(tw.is_finished(5.0));
    assert_eq!(tw.sample(5.0), DVec2::ONE);
}

#[test]
fn yoyo_phase_rises_then_falls() {
    assert_eq!(yoyo_phase(0.0, 1.0), 0.0);
    assert!((yoyo_phase(0.25, 1.0) - 0.25).abs() < 1e-12);
    assert!((yoyo_phase(1.0, 1.0) - 1.0).abs() < 1e-12);
    assert!((yoyo_phase(1.25, 1.0) - 0.75).abs() < 1e-12);
    assert!((yoyo_phase(2.25, 1.0) - 0.25).abs() < 1e-12);
    assert!((yoyo_phase(3.5, 1.0) - 0.5).abs() < 1e-12);
}

#[test]
fn yoyo_phase_handles_degenerate_input() {
    assert_eq!(yoyo_phase(-3.0, 1.0), 0.0);
    assert_eq!(yoyo_phase(1.0, 0.0), 0.0);
    assert_eq!(yoyo_phase(f64::NAN, 1.0), 0.0);
}

#[test]
fn pulse_scale_is_linear_between_rest_and_peak() {
    let half = pulse_scale(0.5);
    assert!((half - DVec3::new(0.7, 0.7, 1.2)).length() < 1e-6);
    // same point on the way back down
    let back = pulse_scale(1.5);
    assert!((half - back).length() < 1e-9);
}
