use rand::prelude::*;

/// Scatter `count` points in a cube of side `extent` that sits entirely
/// behind the camera plane: x and y in [-extent/2, extent/2), z in
/// (-extent, 0]. Same seed, same field.
pub fn generate_starfield(count: usize, extent: f32, seed: u64) -> Vec<[f32; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = (rng.gen::<f32>() - 0.5) * extent;
            let y = (rng.gen::<f32>() - 0.5) * extent;
            let z = -rng.gen::<f32>() * extent;
            [x, y, z]
        })
        .collect()
}
