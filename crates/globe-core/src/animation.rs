//! Per-frame rotation of the globe group and the marker pulse.
//!
//! Each frame the group's yaw grows by the idle spin. A pointer event starts
//! a 2 s ease of the group's absolute orientation toward the pointer target;
//! while it runs the ease owns the orientation and swallows the spin. Once it
//! lands, the idle spin carries on from there.

use std::f64::consts::TAU;

use glam::{DVec2, DVec3, Mat4};

use crate::constants::{IDLE_SPIN_PER_FRAME, POINTER_PITCH_GAIN, POINTER_YAW_GAIN, TILT_EASE_SEC};
use crate::input::PointerState;
use crate::pulse::pulse_scale;
use crate::tween::Tween;

/// Orientation of the rotating group, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub pitch: f64,
    pub yaw: f64,
}

impl Tilt {
    fn to_vec(self) -> DVec2 {
        DVec2::new(self.pitch, self.yaw)
    }

    fn from_vec(v: DVec2) -> Self {
        Self {
            pitch: v.x,
            yaw: v.y,
        }
    }
}

/// Orientation the group should ease toward for a normalized pointer position.
#[inline]
pub fn tilt_target(pointer: DVec2) -> Tilt {
    Tilt {
        pitch: -pointer.y * POINTER_PITCH_GAIN,
        yaw: pointer.x * POINTER_YAW_GAIN,
    }
}

/// Orientation of the node holding the globe and the marker.
#[derive(Clone, Debug, Default)]
pub struct RotationGroup {
    orientation: Tilt,
    tween: Option<Tween>,
}

impl RotationGroup {
    pub fn yaw(&self) -> f64 {
        self.orientation.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.orientation.pitch
    }

    pub fn orientation(&self) -> Tilt {
        self.orientation
    }

    /// Add one frame of idle spin, wrapped to [0, 2π).
    pub fn advance_idle(&mut self) {
        self.orientation.yaw = (self.orientation.yaw + IDLE_SPIN_PER_FRAME).rem_euclid(TAU);
    }

    /// Restart the ease toward `target` from wherever the group is now.
    pub fn retarget_tilt(&mut self, target: Tilt, now_sec: f64) {
        self.update_tilt(now_sec);
        self.tween = Some(Tween::new(
            self.orientation.to_vec(),
            target.to_vec(),
            now_sec,
            TILT_EASE_SEC,
        ));
    }

    /// Apply the running ease, if any. Its sample replaces the orientation.
    pub fn update_tilt(&mut self, now_sec: f64) {
        if let Some(tw) = self.tween {
            self.orientation = Tilt::from_vec(tw.sample(now_sec));
            if tw.is_finished(now_sec) {
                self.tween = None;
            }
        }
    }

    pub fn is_easing(&self) -> bool {
        self.tween.is_some()
    }

    /// Rotation matrix applied to the group (pitch about X, then yaw about Y).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch() as f32) * Mat4::from_rotation_y(self.yaw() as f32)
    }
}

/// Everything a frame needs to draw the animated parts of the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    pub frame_index: u64,
    pub yaw: f64,
    pub pitch: f64,
    pub group_matrix: Mat4,
    pub marker_scale: DVec3,
}

/// Advances rotation and pulse once per frame.
#[derive(Clone, Debug, Default)]
pub struct GlobeAnimator {
    rotation: RotationGroup,
    seen_revision: Option<u64>,
    frames: u64,
}

impl GlobeAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> &RotationGroup {
        &self.rotation
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at `elapsed_sec` since the loop started.
    ///
    /// Returns the state to draw this frame, which is the orientation as it
    /// stood before this frame's spin and ease are applied.
    pub fn tick(&mut self, elapsed_sec: f64, pointer: &PointerState) -> FrameState {
        let state = FrameState {
            frame_index: self.frames,
            yaw: self.rotation.yaw(),
            pitch: self.rotation.pitch(),
            group_matrix: self.rotation.matrix(),
            marker_scale: pulse_scale(elapsed_sec),
        };

        self.rotation.advance_idle();
        if let Some(pos) = pointer.position {
            if self.seen_revision != Some(pointer.revision) {
                self.seen_revision = Some(pointer.revision);
                self.rotation.retarget_tilt(tilt_target(pos), elapsed_sec);
            }
        }
        self.rotation.update_tilt(elapsed_sec);

        self.frames += 1;
        state
    }
}
