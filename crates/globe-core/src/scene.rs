//! Static scene description: meshes, star positions and the marker
//! placement, composed once at startup. Per-frame model matrices are derived
//! from a [`FrameState`].

use glam::{Mat4, Vec3};

use crate::animation::FrameState;
use crate::constants::*;
use crate::geometry::{cuboid, uv_sphere, MeshData};
use crate::placement::{place, Placement};
use crate::starfield::generate_starfield;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub globe_radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub atmosphere_scale: f32,
    pub marker_latitude_deg: f64,
    pub marker_longitude_deg: f64,
    pub marker_size: [f32; 3],
    pub star_count: usize,
    pub star_extent: f32,
    pub star_seed: u64,
    pub accent_color: [f32; 3],
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            globe_radius: GLOBE_RADIUS,
            width_segments: GLOBE_WIDTH_SEGMENTS,
            height_segments: GLOBE_HEIGHT_SEGMENTS,
            atmosphere_scale: ATMOSPHERE_SCALE,
            marker_latitude_deg: MARKER_LATITUDE_DEG,
            marker_longitude_deg: MARKER_LONGITUDE_DEG,
            marker_size: MARKER_SIZE,
            star_count: STAR_COUNT,
            star_extent: STAR_EXTENT,
            star_seed: STAR_SEED,
            accent_color: ACCENT_COLOR,
        }
    }
}

/// Model matrices for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneMatrices {
    pub globe: Mat4,
    pub atmosphere: Mat4,
    pub marker: Mat4,
    pub stars: Mat4,
}

pub struct GlobeScene {
    pub params: SceneParams,
    /// Shared by the globe and the (scaled) atmosphere shell.
    pub sphere: MeshData,
    pub marker_mesh: MeshData,
    pub stars: Vec<[f32; 3]>,
    pub marker: Placement,
}

impl GlobeScene {
    pub fn compose(params: SceneParams) -> Self {
        let sphere = uv_sphere(
            params.globe_radius,
            params.width_segments,
            params.height_segments,
        );
        let [mw, mh, md] = params.marker_size;
        let marker_mesh = cuboid(mw, mh, md);
        let stars = generate_starfield(params.star_count, params.star_extent, params.star_seed);
        let marker = place(
            params.globe_radius as f64,
            params.marker_latitude_deg,
            params.marker_longitude_deg,
        );
        log::debug!(
            "scene composed: sphere verts={} tris={} stars={} marker=({:.3},{:.3},{:.3})",
            sphere.vertices.len(),
            sphere.triangle_count(),
            stars.len(),
            marker.position.x,
            marker.position.y,
            marker.position.z
        );
        Self {
            params,
            sphere,
            marker_mesh,
            stars,
            marker,
        }
    }

    /// Globe mesh inside the rotating group, yawed so the map meets the
    /// placement math.
    pub fn globe_model(&self, frame: &FrameState) -> Mat4 {
        frame.group_matrix * Mat4::from_rotation_y(GLOBE_MESH_YAW)
    }

    /// Atmosphere hangs off the scene root and never rotates.
    pub fn atmosphere_model(&self) -> Mat4 {
        Mat4::from_scale(Vec3::splat(self.params.atmosphere_scale))
    }

    pub fn marker_model(&self, frame: &FrameState) -> Mat4 {
        frame.group_matrix * self.marker.model_matrix(frame.marker_scale).as_mat4()
    }

    pub fn matrices(&self, frame: &FrameState) -> SceneMatrices {
        SceneMatrices {
            globe: self.globe_model(frame),
            atmosphere: self.atmosphere_model(),
            marker: self.marker_model(frame),
            stars: Mat4::IDENTITY,
        }
    }
}
