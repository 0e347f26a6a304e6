use glam::DVec2;

/// Decelerating quadratic ease (`power1.out`): fast start, soft landing.
#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Time-based interpolation between two 2D values.
///
/// Sampling is stateless; retargeting is done by building a new tween that
/// starts from the value sampled at the moment of the change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: DVec2,
    pub to: DVec2,
    pub start_sec: f64,
    pub duration_sec: f64,
}

impl Tween {
    pub fn new(from: DVec2, to: DVec2, start_sec: f64, duration_sec: f64) -> Self {
        Self {
            from,
            to,
            start_sec,
            duration_sec,
        }
    }

    /// Linear progress in [0, 1]; a non-positive duration finishes at once.
    pub fn progress(&self, now_sec: f64) -> f64 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        ((now_sec - self.start_sec) / self.duration_sec).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_sec: f64) -> DVec2 {
        self.from.lerp(self.to, ease_out_quad(self.progress(now_sec)))
    }

    pub fn is_finished(&self, now_sec: f64) -> bool {
        self.progress(now_sec) >= 1.0
    }
}
