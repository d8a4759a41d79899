use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use pathview_core::render::Renderer;
use pathview_core::OrbitCamera;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub renderer: Renderer<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.renderer
            .resize_if_needed(self.canvas.width(), self.canvas.height());

        let (w, h) = self.renderer.size();
        let basis = self.camera.borrow().compute_basis(w as f64, h as f64);
        match self
            .renderer
            .render(basis, self.started.elapsed().as_secs_f32())
        {
            Ok(report) => {
                if report.reset {
                    log::debug!("[frame] accumulation restarted");
                }
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[frame] surface out of memory");
            }
            Err(e) => log::warn!("[frame] surface error: {:?}", e),
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
