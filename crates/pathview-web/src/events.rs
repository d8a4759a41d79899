use std::cell::RefCell;
use std::rc::Rc;

use pathview_core::input::WheelDelta;
use pathview_core::OrbitCamera;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::viewport;

fn js_err(what: &str, e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{}: {:?}", what, e)
}

/// Orbit controls: drag starts on the canvas, but move/up are tracked on the
/// window so a drag that leaves the canvas still ends cleanly.
pub fn wire_camera_controls(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    camera: Rc<RefCell<OrbitCamera>>,
) -> anyhow::Result<()> {
    {
        let camera = camera.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            camera
                .borrow_mut()
                .handle_pointer_down(ev.client_x() as f64, ev.client_y() as f64);
        }) as Box<dyn FnMut(_)>);
        canvas
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
            .map_err(|e| js_err("mousedown", e))?;
        closure.forget();
    }
    {
        let camera = camera.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            camera.borrow_mut().handle_pointer_up();
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
            .map_err(|e| js_err("mouseup", e))?;
        closure.forget();
    }
    {
        let camera = camera.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            camera
                .borrow_mut()
                .handle_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
        }) as Box<dyn FnMut(_)>);
        window
            .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
            .map_err(|e| js_err("mousemove", e))?;
        closure.forget();
    }
    {
        let canvas_for_wheel = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            // keep the page from scrolling while zooming
            ev.prevent_default();
            let page = viewport::page_height_px(canvas_for_wheel.client_height());
            let delta = WheelDelta::from_dom(ev.delta_y(), ev.delta_mode()).to_pixels(page);
            camera.borrow_mut().handle_scroll(delta);
        }) as Box<dyn FnMut(_)>);
        // passive listeners may not call preventDefault
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        canvas
            .add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| js_err("wheel", e))?;
        closure.forget();
    }
    Ok(())
}
