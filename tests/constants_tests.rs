// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so the web constants are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use globe_core::constants as tuning;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frames_the_whole_scene() {
    assert!(tuning::Z_NEAR > 0.0 && tuning::Z_NEAR < tuning::Z_FAR);
    // camera sits outside the atmosphere shell
    assert!(tuning::CAMERA_Z > tuning::GLOBE_RADIUS * tuning::ATMOSPHERE_SCALE);
    // far plane reaches at least halfway into the starfield
    assert!(tuning::Z_FAR >= tuning::CAMERA_Z + tuning::STAR_EXTENT * 0.5);
    assert!(tuning::FOV_Y_DEGREES > 0.0 && tuning::FOV_Y_DEGREES < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn marker_fits_its_placement() {
    assert!((tuning::MARKER_LOCAL_OFFSET_Z * 2.0 + tuning::MARKER_SIZE[2] as f64).abs() < 1e-6);
    assert!((-90.0..=90.0).contains(&tuning::MARKER_LATITUDE_DEG));
    assert!((-180.0..=180.0).contains(&tuning::MARKER_LONGITUDE_DEG));
    assert!(tuning::MARKER_PULSE_HALF_PERIOD_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn colors_are_normalized() {
    for c in tuning::ACCENT_COLOR.iter().chain(tuning::ATMOSPHERE_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    assert_eq!(CLEAR_COLOR[3], 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_settings_are_sane() {
    assert!(!CONTAINER_ID.is_empty());
    assert!(!OVERLAY_ID.is_empty());
    assert!(WORLD_MAP_URL.ends_with(".jpg") || WORLD_MAP_URL.ends_with(".png"));
    assert!(MAX_TEXTURE_DIMENSION >= 2048);
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}
