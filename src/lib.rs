#![cfg(target_arch = "wasm32")]
use globe_core::{FrameClock, FrameDriver, GlobeAnimator, GlobeScene, PointerState, SceneParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod asset;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::{CONTAINER_ID, MAX_TEXTURE_DIMENSION, OVERLAY_ID, WORLD_MAP_URL};

thread_local! {
    static DRIVER: RefCell<Option<frame::RafDriver>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation loop (the last frame stays on screen). Animation time
/// is frozen until `resume`.
#[wasm_bindgen]
pub fn pause() {
    DRIVER.with(|d| {
        if let Some(driver) = d.borrow_mut().as_mut() {
            driver.stop();
        }
    });
}

/// Restart the animation loop after `pause`.
#[wasm_bindgen]
pub fn resume() {
    DRIVER.with(|d| {
        if let Some(driver) = d.borrow_mut().as_mut() {
            driver.start();
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = dom::html_element_by_id(&document, CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;
    let canvas: web::HtmlCanvasElement = container
        .query_selector("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing canvas inside #{}", CONTAINER_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let overlay = dom::html_element_by_id(&document, OVERLAY_ID);
    if overlay.is_none() {
        log::warn!("[init] no #{} overlay; pointer tracking only tilts the globe", OVERLAY_ID);
    }

    // Viewport first so the canvas backing store is sized before WebGPU grabs it
    let viewport = Rc::new(RefCell::new(events::resize::configure_viewport(
        &container, &canvas,
    )));
    {
        let vp = viewport.borrow();
        log::info!(
            "[init] viewport {}x{} css @{}x, aspect {:.3}",
            vp.css_width,
            vp.css_height,
            vp.device_pixel_ratio,
            vp.aspect()
        );
    }

    let scene = Rc::new(GlobeScene::compose(SceneParams::default()));
    log::info!(
        "[init] scene: {} sphere tris, {} stars, marker at ({:.2}, {:.2}, {:.2})",
        scene.sphere.triangle_count(),
        scene.stars.len(),
        scene.marker.position.x,
        scene.marker.position.y,
        scene.marker.position.z
    );

    let gpu = frame::init_gpu(&canvas, &scene).await;

    // ---------------- Interaction state ----------------
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    events::wire_pointermove(events::PointerWiring {
        pointer: pointer.clone(),
        overlay,
    });
    events::wire_resize(events::ResizeWiring {
        container: container.clone(),
        canvas: canvas.clone(),
        viewport: viewport.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        animator: GlobeAnimator::new(),
        scene: scene.clone(),
        pointer,
        viewport,
        canvas,
        gpu,
        started: Instant::now(),
        clock: FrameClock::new(),
    }));

    // World map streams in after the loop is already drawing
    let frame_ctx_tex = frame_ctx.clone();
    spawn_local(async move {
        match asset::load_world_map(WORLD_MAP_URL, MAX_TEXTURE_DIMENSION).await {
            Ok(image) => {
                if let Some(g) = frame_ctx_tex.borrow_mut().gpu.as_mut() {
                    g.set_globe_texture(&image);
                }
            }
            Err(e) => log::warn!("[texture] {} unavailable, using fallback: {:?}", WORLD_MAP_URL, e),
        }
    });

    let mut driver = frame::RafDriver::new(frame_ctx);
    driver.start();
    DRIVER.with(|d| *d.borrow_mut() = Some(driver));

    Ok(())
}
