//! Frame driver contract.
//!
//! The browser loop (`requestAnimationFrame`) and the test loop share one
//! start/stop contract so frames can be stepped deterministically.

use crate::animation::{FrameState, GlobeAnimator};
use crate::input::PointerState;

pub trait FrameDriver {
    fn start(&mut self);
    /// Stop scheduling frames. A stopped driver produces no further ticks.
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Driver advanced by hand with a fixed frame time.
#[derive(Clone, Debug)]
pub struct SteppedDriver {
    running: bool,
    frame_dt_sec: f64,
    elapsed_sec: f64,
}

impl SteppedDriver {
    pub fn new(frame_dt_sec: f64) -> Self {
        Self {
            running: false,
            frame_dt_sec: frame_dt_sec.max(0.0),
            elapsed_sec: 0.0,
        }
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }

    /// Run one frame; `None` when stopped.
    pub fn step(
        &mut self,
        animator: &mut GlobeAnimator,
        pointer: &PointerState,
    ) -> Option<FrameState> {
        if !self.running {
            return None;
        }
        let state = animator.tick(self.elapsed_sec, pointer);
        self.elapsed_sec += self.frame_dt_sec;
        Some(state)
    }

    /// Run up to `frames` frames and return the last state produced.
    pub fn run(
        &mut self,
        frames: usize,
        animator: &mut GlobeAnimator,
        pointer: &PointerState,
    ) -> Option<FrameState> {
        let mut last = None;
        for _ in 0..frames {
            match self.step(animator, pointer) {
                Some(s) => last = Some(s),
                None => break,
            }
        }
        last
    }
}

impl FrameDriver for SteppedDriver {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

/// Animation time that only advances while frames are being produced.
///
/// Feed it a monotonic wall clock each frame; after [`FrameClock::pause`] the
/// next reading restarts from where the clock stopped, so paused time never
/// reaches the pulse or a running ease.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    elapsed_sec: f64,
    last_sec: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the wall-clock reading `now_sec` and return animation time.
    pub fn advance(&mut self, now_sec: f64) -> f64 {
        if let Some(last) = self.last_sec {
            self.elapsed_sec += (now_sec - last).max(0.0);
        }
        self.last_sec = Some(now_sec);
        self.elapsed_sec
    }

    pub fn pause(&mut self) {
        self.last_sec = None;
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }
}
