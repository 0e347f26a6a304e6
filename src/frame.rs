use crate::render;
use globe_core::{FrameClock, FrameDriver, GlobeAnimator, GlobeScene, PointerState, Viewport};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub animator: GlobeAnimator,
    pub scene: Rc<GlobeScene>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub viewport: Rc<RefCell<Viewport>>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    /// Wall-clock origin; animation time comes from `clock`.
    pub started: Instant,
    pub clock: FrameClock,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed_sec = self.clock.advance(self.started.elapsed().as_secs_f64());

        // Pointer state is copied out so the event handlers never see a live borrow
        let pointer = *self.pointer.borrow();
        let state = self.animator.tick(elapsed_sec, &pointer);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            let matrices = self.scene.matrices(&state);
            let viewport = self.viewport.borrow();
            if let Err(e) = g.render(&viewport, &matrices) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &GlobeScene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop: each tick schedules the next one, then runs
/// a frame. `stop` cancels the pending request and lets the chain end.
pub struct RafDriver {
    frame_ctx: Rc<RefCell<FrameContext<'static>>>,
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl RafDriver {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> Self {
        Self {
            frame_ctx,
            running: Rc::new(Cell::new(false)),
            pending: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        }
    }

    fn ensure_tick(&self) {
        if self.tick.borrow().is_some() {
            return;
        }
        let tick_clone = self.tick.clone();
        let running = self.running.clone();
        let pending = self.pending.clone();
        let frame_ctx = self.frame_ctx.clone();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending.set(None);
            if !running.get() {
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending.set(request_frame(cb));
            }
            frame_ctx.borrow_mut().frame();
        }) as Box<dyn FnMut()>));
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}

impl FrameDriver for RafDriver {
    fn start(&mut self) {
        if self.running.replace(true) {
            return;
        }
        // time spent paused is skipped, not replayed
        self.frame_ctx.borrow_mut().clock.pause();
        self.ensure_tick();
        if let Some(cb) = self.tick.borrow().as_ref() {
            self.pending.set(request_frame(cb));
        }
        log::info!("[frame] loop started");
    }

    fn stop(&mut self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop stopped");
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}
