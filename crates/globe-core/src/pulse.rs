use glam::DVec3;

use crate::constants::{MARKER_PULSE_HALF_PERIOD_SEC, MARKER_PULSE_SCALE};

/// Triangle-wave phase in [0, 1]: rises for one half period, falls for the
/// next, forever. Negative time is treated as the start.
#[inline]
pub fn yoyo_phase(elapsed_sec: f64, half_period_sec: f64) -> f64 {
    if half_period_sec <= 0.0 || !elapsed_sec.is_finite() {
        return 0.0;
    }
    let cycles = elapsed_sec.max(0.0) / half_period_sec;
    let frac = cycles.fract();
    if cycles.floor().rem_euclid(2.0) < 1.0 {
        frac
    } else {
        1.0 - frac
    }
}

/// Marker scale at `elapsed_sec` since the pulse started: linear between
/// unit scale and [`MARKER_PULSE_SCALE`], reversing every half period.
pub fn pulse_scale(elapsed_sec: f64) -> DVec3 {
    let [x, y, z] = MARKER_PULSE_SCALE;
    let peak = DVec3::new(x as f64, y as f64, z as f64);
    DVec3::ONE.lerp(peak, yoyo_phase(elapsed_sec, MARKER_PULSE_HALF_PERIOD_SEC))
}
