use globe_core::Viewport;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;

#[derive(Clone)]
pub struct ResizeWiring {
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub viewport: Rc<RefCell<Viewport>>,
}

/// Rebuild the viewport from the container's current size.
pub fn configure_viewport(container: &web::HtmlElement, canvas: &web::HtmlCanvasElement) -> Viewport {
    let (width, height) = dom::container_size(container);
    let viewport = Viewport::configure(width, height, dom::device_pixel_ratio());
    dom::sync_canvas_size(canvas, &viewport);
    viewport
}

/// Global resize: swap in a freshly configured viewport. The GPU surface
/// follows on the next frame from the canvas backing size.
pub fn wire_resize(w: ResizeWiring) {
    dom::add_window_listener("resize", move |_ev: web::Event| {
        let viewport = configure_viewport(&w.container, &w.canvas);
        log::info!(
            "[resize] {}x{} css, aspect {:.3}",
            viewport.css_width,
            viewport.css_height,
            viewport.aspect()
        );
        *w.viewport.borrow_mut() = viewport;
    });
}
