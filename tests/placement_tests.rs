// Host-side tests for latitude/longitude placement and marker orientation.

use glam::DVec3;
use globe_core::*;

fn assert_close(a: DVec3, b: DVec3, eps: f64) {
    assert!((a - b).length() < eps, "expected {b:?}, got {a:?}");
}

#[test]
fn marker_position_matches_closed_form() {
    let r = 5.0;
    let (lat, lon) = (-65.0_f64.to_radians(), 70.0_f64.to_radians());
    let expected = DVec3::new(
        r * lat.cos() * lon.sin(),
        r * lat.sin(),
        r * lat.cos() * lon.cos(),
    );
    let p = place(r, MARKER_LATITUDE_DEG, MARKER_LONGITUDE_DEG);
    assert_close(p.position, expected, 1e-9);
    assert!((p.position.length() - r).abs() < 1e-9);
    // southern hemisphere, in front of the globe
    assert!(p.position.y < 0.0);
    assert!(p.position.z > 0.0);
}

#[test]
fn origin_coordinates_face_the_camera() {
    let p = lat_lon_to_position(5.0, 0.0, 0.0);
    assert_close(p, DVec3::new(0.0, 0.0, 5.0), 1e-12);
}

#[test]
fn north_pole_ignores_longitude() {
    for lon in [-180.0, -70.0, 0.0, 45.0, 179.0] {
        let p = lat_lon_to_position(5.0, 90.0, lon);
        assert_close(p, DVec3::new(0.0, 5.0, 0.0), 1e-9);
    }
}

#[test]
fn placed_object_looks_at_center() {
    for (lat, lon) in [(-65.0, 70.0), (0.0, 0.0), (30.0, -120.0), (90.0, 10.0), (-90.0, 0.0)] {
        let p = place(5.0, lat, lon);
        assert_close(p.forward(), -p.position.normalize(), 1e-9);
        assert!((p.orientation.length() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn look_at_keeps_up_axis_vertical_when_possible() {
    let q = look_at_rotation(DVec3::new(0.0, 0.0, 5.0), DVec3::ZERO);
    let up = q * DVec3::Y;
    assert_close(up, DVec3::Y, 1e-12);
}

#[test]
fn marker_stands_on_surface_pointing_outward() {
    let p = place(5.0, MARKER_LATITUDE_DEG, MARKER_LONGITUDE_DEG);
    let half_depth = MARKER_SIZE[2] as f64 / 2.0;
    let outward = p.position.normalize();

    let m = p.model_matrix(DVec3::ONE);
    let base = m.transform_point3(DVec3::new(0.0, 0.0, half_depth));
    let tip = m.transform_point3(DVec3::new(0.0, 0.0, -half_depth));
    assert_close(base, p.position, 1e-6);
    assert_close(tip, p.position + outward * MARKER_SIZE[2] as f64, 1e-6);

    // pulsing stretches the marker away from the globe, the base stays put
    let peak = DVec3::new(0.4, 0.4, 1.4);
    let m = p.model_matrix(peak);
    let base = m.transform_point3(DVec3::new(0.0, 0.0, half_depth));
    let tip = m.transform_point3(DVec3::new(0.0, 0.0, -half_depth));
    assert_close(base, p.position, 1e-6);
    assert!(((tip - base).length() - MARKER_SIZE[2] as f64 * 1.4).abs() < 1e-5);
}
