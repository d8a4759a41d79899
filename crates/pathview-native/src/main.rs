use std::time::Instant;

use anyhow::Context;
use pathview_core::input::WheelDelta;
use pathview_core::render::Renderer;
use pathview_core::{cornell_camera, cornell_scene, OrbitCamera};
use winit::dpi::LogicalSize;
use winit::keyboard::{Key, NamedKey};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let camera_config = cornell_camera();
    camera_config.validate()?;
    let mut camera = OrbitCamera::new(camera_config);
    let scene = cornell_scene();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("pathview (native)")
        .with_inner_size(LogicalSize::new(960.0, 720.0))
        .build(&event_loop)?;
    let window = &window;

    let size = window.inner_size();
    let instance = wgpu::Instance::default();
    let mut renderer = pollster::block_on(Renderer::new(
        &instance,
        window,
        size.width,
        size.height,
        &scene,
    ))
    .context("GPU initialization failed")?;

    let reset = renderer.reset_handle();
    let _camera_sub = camera.subscribe(move || reset.request_reset());

    let start = Instant::now();
    let mut cursor = (0.0_f64, 0.0_f64);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => elwt.exit(),
            WindowEvent::Resized(size) => renderer.resize_if_needed(size.width, size.height),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => camera.handle_pointer_down(cursor.0, cursor.1),
                ElementState::Released => camera.handle_pointer_up(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                cursor = (position.x, position.y);
                camera.handle_pointer_move(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports "scroll up" as positive; the camera expects DOM sign
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => WheelDelta::Lines(-y as f64),
                    MouseScrollDelta::PixelDelta(p) => WheelDelta::Pixels(-p.y),
                };
                let page_height = renderer.size().1 as f64;
                camera.handle_scroll(delta.to_pixels(page_height));
            }
            _ => {}
        },
        Event::AboutToWait => {
            let inner = window.inner_size();
            if inner.width == 0 || inner.height == 0 {
                return;
            }
            let (w, h) = renderer.size();
            let basis = camera.compute_basis(w as f64, h as f64);
            match renderer.render(basis, start.elapsed().as_secs_f32()) {
                Ok(_) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    renderer.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory; exiting");
                    elwt.exit();
                }
                Err(e) => log::warn!("surface error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
