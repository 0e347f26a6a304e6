use glam::DVec2;

/// Normalized pointer position shared between the event handlers and the
/// frame loop. `position` stays `None` until the first pointer event.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Option<DVec2>,
    /// Bumped on every pointer event so the loop can tell a new event from a
    /// repeated position.
    pub revision: u64,
}

impl PointerState {
    pub fn update(&mut self, normalized: DVec2) {
        self.position = Some(normalized);
        self.revision = self.revision.wrapping_add(1);
    }

    /// Record a pointer event given raw client coordinates and window size.
    pub fn update_from_client(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        self.update(normalize_pointer(client_x, client_y, width, height));
    }
}

/// Map client coordinates to the pointer range used for tilt.
///
/// `x` is centered: `((cx - w/2) / (w/2)) * 2 - 1`. `y` is not:
/// `(cy / h) * 2 + 1`. Both formulas are kept exactly as the tilt tuning
/// expects them.
#[inline]
pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> DVec2 {
    // sub-pixel windows count as one pixel
    let half_w = (width / 2.0).max(0.5);
    let h = height.max(1.0);
    DVec2::new(
        ((client_x - width / 2.0) / half_w) * 2.0 - 1.0,
        (client_y / h) * 2.0 + 1.0,
    )
}
