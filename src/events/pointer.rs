use globe_core::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;
use crate::overlay;

#[derive(Clone)]
pub struct PointerWiring {
    pub pointer: Rc<RefCell<PointerState>>,
    pub overlay: Option<web::HtmlElement>,
}

/// Global pointer-move: normalize into the shared pointer state and drag the
/// overlay along with the raw client position.
pub fn wire_pointermove(w: PointerWiring) {
    let mut logged_first = false;
    dom::add_window_listener("pointermove", move |ev: web::PointerEvent| {
        let client_x = ev.client_x() as f64;
        let client_y = ev.client_y() as f64;

        if let Some((width, height)) = dom::window_inner_size() {
            w.pointer
                .borrow_mut()
                .update_from_client(client_x, client_y, width, height);
            if !logged_first {
                logged_first = true;
                log::info!("[pointer] first move at ({}, {}), tilt enabled", client_x, client_y);
            }
        }

        if let Some(el) = &w.overlay {
            overlay::move_to(el, client_x, client_y);
        }
    });
}
