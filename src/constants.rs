// Web frontend constants: DOM hooks, asset location and GPU settings.

// DOM element ids
pub const CONTAINER_ID: &str = "canvasContainer";
pub const OVERLAY_ID: &str = "popUpEl";

// Equirectangular world map, fetched relative to the page
pub const WORLD_MAP_URL: &str = "europe.jpg";
pub const MAX_TEXTURE_DIMENSION: u32 = 8192;

// Multisampled color + depth (antialiasing)
pub const MSAA_SAMPLES: u32 = 4;

// Background behind the stars
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];
