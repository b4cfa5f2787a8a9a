use super::Listener;
use crate::canvas::CanvasSurface;
use crate::frame::FrameDriver;
use crate::input::PointerTracker;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Spawn effects on every primary-pointer move over the canvas.
pub fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    tracker: Rc<RefCell<PointerTracker>>,
    driver: Rc<RefCell<FrameDriver<CanvasSurface>>>,
) -> Listener {
    let mut rng = rand::thread_rng();
    Listener::attach(canvas, "pointermove", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
            return;
        };
        if !ev.is_primary() {
            return;
        }
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let mut driver = driver.borrow_mut();
        if !driver.is_running() {
            return;
        }
        tracker
            .borrow_mut()
            .on_move(client, Instant::now(), driver.registry_mut(), &mut rng);
    })
}
