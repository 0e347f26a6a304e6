// Shared scene/animation tuning constants used by the web frontend.

// Camera and projection
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 15.0; // camera distance back along +Z after every resize

// Globe
pub const GLOBE_RADIUS: f32 = 5.0;
pub const GLOBE_WIDTH_SEGMENTS: u32 = 50;
pub const GLOBE_HEIGHT_SEGMENTS: u32 = 50;
// Globe mesh yaw inside the rotating group so the map lines up with placement math
pub const GLOBE_MESH_YAW: f32 = -std::f32::consts::FRAC_PI_2;
pub const ATMOSPHERE_SCALE: f32 = 1.1;

// Starfield
pub const STAR_COUNT: usize = 10_000;
pub const STAR_EXTENT: f32 = 1500.0; // side of the cube the stars are scattered in
pub const STAR_SEED: u64 = 42;

// Marker
pub const MARKER_LATITUDE_DEG: f64 = -65.0;
pub const MARKER_LONGITUDE_DEG: f64 = 70.0;
pub const MARKER_SIZE: [f32; 3] = [0.2, 0.2, 1.8];
pub const MARKER_LOCAL_OFFSET_Z: f64 = -0.9; // pushes the box out so it stands on the surface
pub const MARKER_PULSE_SCALE: [f32; 3] = [0.4, 0.4, 1.4];
pub const MARKER_PULSE_HALF_PERIOD_SEC: f64 = 1.0;

// Shared orange used by the marker and the stars (#FFA500 in linear space)
pub const ACCENT_COLOR: [f32; 3] = [1.0, 0.376, 0.0];

// Rotation
pub const IDLE_SPIN_PER_FRAME: f64 = 0.002; // radians of yaw added every frame
pub const POINTER_PITCH_GAIN: f64 = 0.5;
pub const POINTER_YAW_GAIN: f64 = 0.7;
pub const TILT_EASE_SEC: f64 = 2.0;

// Atmosphere glow tint
pub const ATMOSPHERE_COLOR: [f32; 3] = [0.3, 0.6, 1.0];
