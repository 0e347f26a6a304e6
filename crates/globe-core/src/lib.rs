pub mod animation;
pub mod constants;
pub mod driver;
pub mod geometry;
pub mod input;
pub mod placement;
pub mod pulse;
pub mod scene;
pub mod starfield;
pub mod texture;
pub mod tween;
pub mod viewport;

pub use animation::*;
pub use constants::*;
pub use driver::*;
pub use input::*;
pub use placement::*;
pub use scene::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static GLOBE_WGSL: &str = include_str!("../shaders/globe.wgsl");
pub static ATMOSPHERE_WGSL: &str = include_str!("../shaders/atmosphere.wgsl");
pub static FLAT_WGSL: &str = include_str!("../shaders/flat.wgsl");
