use web_sys as web;

/// Move the pop-up overlay so its origin sits at the given client position.
#[inline]
pub fn move_to(overlay: &web::HtmlElement, client_x: f64, client_y: f64) {
    _ = overlay.style().set_property(
        "transform",
        &format!("translate({}px, {}px)", client_x, client_y),
    );
}
