#![cfg(target_arch = "wasm32")]
mod dom;
mod events;
mod frame;
mod viewport;

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use pathview_core::render::Renderer;
use pathview_core::{cornell_camera, cornell_scene, OrbitCamera};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const CANVAS_ID: &str = "canvasgl";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pathview-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);
    dom::wire_canvas_resize(&window, &canvas);

    let camera_config = cornell_camera();
    camera_config.validate()?;
    let camera = Rc::new(RefCell::new(OrbitCamera::new(camera_config)));

    let instance = wgpu::Instance::default();
    let renderer = Renderer::new(
        &instance,
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        canvas.width(),
        canvas.height(),
        &cornell_scene(),
    )
    .await?;

    // Dropping the token leaves the callback registered for the page's lifetime.
    let reset = renderer.reset_handle();
    let _camera_sub = camera.borrow().subscribe(move || reset.request_reset());

    events::wire_camera_controls(&window, &canvas, camera.clone())?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        camera,
        renderer,
        canvas,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
