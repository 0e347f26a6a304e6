//! Latitude/longitude placement on a sphere.
//!
//! Positions are computed in `f64` so the closed-form trigonometry can be
//! checked tightly; the renderer narrows to `f32` when building matrices.

use glam::{DMat3, DMat4, DQuat, DVec3};

use crate::constants::MARKER_LOCAL_OFFSET_Z;

/// Where an object sits on the sphere and how it is turned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Point on the sphere surface.
    pub position: DVec3,
    /// Rotation whose local +Z axis points at the sphere center.
    pub orientation: DQuat,
    /// Translation baked into the object's geometry, in its local frame.
    pub local_offset: DVec3,
}

impl Placement {
    /// Unit vector of the object's local +Z axis in world space.
    pub fn forward(&self) -> DVec3 {
        self.orientation * DVec3::Z
    }

    /// Model matrix for the placed object at the given (non-uniform) scale.
    ///
    /// The local offset is applied before scale, matching a geometry that
    /// was translated once at construction time.
    pub fn model_matrix(&self, scale: DVec3) -> DMat4 {
        DMat4::from_scale_rotation_translation(scale, self.orientation, self.position)
            * DMat4::from_translation(self.local_offset)
    }
}

/// Convert a (latitude, longitude) pair in degrees to a point on a sphere.
///
/// `x = r·cos(lat)·sin(lon)`, `y = r·sin(lat)`, `z = r·cos(lat)·cos(lon)`.
#[inline]
pub fn lat_lon_to_position(radius: f64, latitude_deg: f64, longitude_deg: f64) -> DVec3 {
    let lat = latitude_deg.to_radians();
    let lon = longitude_deg.to_radians();
    DVec3::new(
        radius * lat.cos() * lon.sin(),
        radius * lat.sin(),
        radius * lat.cos() * lon.cos(),
    )
}

/// Rotation that turns local +Z toward `target` as seen from `eye`, with +Y up.
pub fn look_at_rotation(eye: DVec3, target: DVec3) -> DQuat {
    let z = (target - eye).normalize_or_zero();
    if z == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    let mut x = DVec3::Y.cross(z);
    if x.length_squared() < 1e-20 {
        // Looking straight up or down: any horizontal side axis will do.
        x = DVec3::X;
    }
    let x = x.normalize();
    let y = z.cross(x);
    DQuat::from_mat3(&DMat3::from_cols(x, y, z))
}

/// Place an object on a sphere of `radius`, facing the center.
///
/// The object's geometry is pushed back along its local axis so it stands on
/// the surface instead of being centered on it.
pub fn place(radius: f64, latitude_deg: f64, longitude_deg: f64) -> Placement {
    let position = lat_lon_to_position(radius, latitude_deg, longitude_deg);
    Placement {
        position,
        orientation: look_at_rotation(position, DVec3::ZERO),
        local_offset: DVec3::new(0.0, 0.0, MARKER_LOCAL_OFFSET_Z),
    }
}
