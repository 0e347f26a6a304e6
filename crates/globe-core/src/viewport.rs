//! Output surface size and camera projection.
//!
//! A [`Viewport`] is rebuilt from scratch on every resize; nothing in it is
//! patched in place. The camera sits on +Z looking at the origin.

use glam::{Mat4, Vec3};

use crate::constants::{CAMERA_Z, FOV_Y_DEGREES, Z_FAR, Z_NEAR};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Surface size plus the camera derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Container size in CSS pixels.
    pub css_width: f32,
    pub css_height: f32,
    pub device_pixel_ratio: f32,
    pub camera: Camera,
}

impl Viewport {
    /// Build the viewport for a container of the given CSS size.
    ///
    /// Calling this again with the same arguments yields an equal value.
    pub fn configure(container_width: f32, container_height: f32, device_pixel_ratio: f32) -> Self {
        let css_width = container_width.max(0.0);
        let css_height = container_height.max(0.0);
        // zero-height containers happen while the page is still laying out
        let aspect = css_width / css_height.max(1.0);
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        log::debug!(
            "viewport {}x{} @{} aspect={:.4}",
            css_width,
            css_height,
            dpr,
            aspect
        );
        Self {
            css_width,
            css_height,
            device_pixel_ratio: dpr,
            camera: Camera {
                eye: Vec3::new(0.0, 0.0, CAMERA_Z),
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect,
                fovy_radians: FOV_Y_DEGREES.to_radians(),
                znear: Z_NEAR,
                zfar: Z_FAR,
            },
        }
    }

    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }

    /// Backing-store size in device pixels, never smaller than 1x1.
    pub fn pixel_size(&self) -> (u32, u32) {
        let w = (self.css_width * self.device_pixel_ratio) as u32;
        let h = (self.css_height * self.device_pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix()
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
