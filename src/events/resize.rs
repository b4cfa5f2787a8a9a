use super::Listener;
use crate::canvas::CanvasSurface;
use crate::config::Settings;
use crate::dom;
use crate::frame::FrameDriver;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep both canvases at `window size * ratio` and the visible one stretched over the window.
pub fn sync_surfaces(
    canvas: &web::HtmlCanvasElement,
    driver: &RefCell<FrameDriver<CanvasSurface>>,
    settings: &Settings,
) {
    let Some((w, h)) = dom::current_backing_size(settings) else {
        return;
    };
    driver.borrow_mut().resize(w, h);
    dom::fit_to_window(canvas);
    log::info!("[resize] backing {}x{}", w, h);
}

pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    driver: Rc<RefCell<FrameDriver<CanvasSurface>>>,
    settings: Settings,
) -> Listener {
    Listener::attach(window, "resize", move |_ev: web::Event| {
        sync_surfaces(&canvas, &driver, &settings);
    })
}
