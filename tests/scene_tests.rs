// Host-side tests for scene composition: meshes, stars and per-frame matrices.

use glam::{DVec2, Mat4, Vec3};
use globe_core::geometry::*;
use globe_core::starfield::generate_starfield;
use globe_core::*;

#[test]
fn globe_sphere_has_expected_topology() {
    let m = uv_sphere(5.0, 50, 50);
    assert_eq!(m.vertices.len(), 51 * 51);
    assert_eq!(m.indices.len(), 6 * 50 * 49);
    assert_eq!(m.triangle_count(), 50 * 49 * 2);
    let n = m.vertices.len() as u32;
    assert!(m.indices.iter().all(|&i| i < n));
}

#[test]
fn sphere_vertices_lie_on_radius() {
    let m = uv_sphere(5.0, 50, 50);
    for v in &m.vertices {
        let p = Vec3::from(v.position);
        assert!((p.length() - 5.0).abs() < 1e-4, "vertex off sphere: {p:?}");
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
    // first row is the north pole, last row the south pole
    assert!((m.vertices[0].position[1] - 5.0).abs() < 1e-4);
    assert!((m.vertices.last().unwrap().position[1] + 5.0).abs() < 1e-4);
}

#[test]
fn sphere_triangles_face_outward() {
    let m = uv_sphere(1.0, 16, 12);
    for tri in m.indices.chunks(3) {
        let a = Vec3::from(m.vertices[tri[0] as usize].position);
        let b = Vec3::from(m.vertices[tri[1] as usize].position);
        let c = Vec3::from(m.vertices[tri[2] as usize].position);
        let n = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(n.dot(centroid) > 0.0);
    }
}

#[test]
fn cuboid_matches_marker_dimensions() {
    let [w, h, d] = MARKER_SIZE;
    let m = cuboid(w, h, d);
    assert_eq!(m.vertices.len(), 24);
    assert_eq!(m.indices.len(), 36);
    let max = m
        .vertices
        .iter()
        .fold(Vec3::ZERO, |acc, v| acc.max(Vec3::from(v.position).abs()));
    assert!((max - Vec3::new(0.1, 0.1, 0.9)).length() < 1e-6);

    for tri in m.indices.chunks(3) {
        let a = Vec3::from(m.vertices[tri[0] as usize].position);
        let b = Vec3::from(m.vertices[tri[1] as usize].position);
        let c = Vec3::from(m.vertices[tri[2] as usize].position);
        let n = (b - a).cross(c - a);
        assert!(n.dot(Vec3::from(m.vertices[tri[0] as usize].normal)) > 0.0);
    }
}

#[test]
fn starfield_is_deterministic_and_bounded() {
    let a = generate_starfield(STAR_COUNT, STAR_EXTENT, STAR_SEED);
    let b = generate_starfield(STAR_COUNT, STAR_EXTENT, STAR_SEED);
    assert_eq!(a.len(), 10_000);
    assert_eq!(a, b);

    let half = STAR_EXTENT / 2.0;
    for [x, y, z] in &a {
        assert!(*x >= -half && *x <= half);
        assert!(*y >= -half && *y <= half);
        assert!(*z > -STAR_EXTENT && *z <= 0.0);
    }

    let other = generate_starfield(STAR_COUNT, STAR_EXTENT, STAR_SEED + 1);
    assert_ne!(a, other);
}

#[test]
fn empty_starfield_is_allowed() {
    assert!(generate_starfield(0, STAR_EXTENT, 1).is_empty());
}

#[test]
fn default_scene_composition() {
    let scene = GlobeScene::compose(SceneParams::default());
    assert_eq!(scene.stars.len(), STAR_COUNT);
    assert_eq!(scene.sphere.vertices.len(), 2601);
    assert_eq!(scene.marker_mesh.indices.len(), 36);

    let expected = lat_lon_to_position(5.0, -65.0, 70.0);
    assert!((scene.marker.position - expected).length() < 1e-12);
}

#[test]
fn atmosphere_stays_fixed_while_group_rotates() {
    let scene = GlobeScene::compose(SceneParams {
        star_count: 16,
        ..SceneParams::default()
    });
    let mut anim = GlobeAnimator::new();
    let mut pointer = PointerState::default();
    pointer.update(DVec2::new(0.4, -0.2));

    anim.tick(0.0, &pointer);
    let s = anim.tick(1.0, &pointer);
    let m = scene.matrices(&s);

    assert_eq!(m.atmosphere, Mat4::from_scale(Vec3::splat(1.1)));
    assert_eq!(m.stars, Mat4::IDENTITY);
    let expected_globe = s.group_matrix * Mat4::from_rotation_y(-std::f32::consts::FRAC_PI_2);
    assert!(m.globe.abs_diff_eq(expected_globe, 1e-6));
}

#[test]
fn marker_rides_with_the_globe() {
    let scene = GlobeScene::compose(SceneParams {
        star_count: 0,
        ..SceneParams::default()
    });
    let mut anim = GlobeAnimator::new();
    let idle = PointerState::default();
    let mut s = anim.tick(0.0, &idle);
    for i in 1..500 {
        s = anim.tick(i as f64 / 60.0, &idle);
    }

    // base of the marker tracks the rotated surface point
    let m = scene.marker_model(&s);
    let base_local = Vec3::new(0.0, 0.0, MARKER_SIZE[2] / 2.0);
    let base = m.transform_point3(base_local);
    let surface = s
        .group_matrix
        .transform_point3(scene.marker.position.as_vec3());
    assert!((base - surface).length() < 1e-4);
    assert!((base.length() - GLOBE_RADIUS).abs() < 1e-4);
}
