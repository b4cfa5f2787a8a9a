use crate::canvas::CanvasSurface;
use crate::config::Settings;
use crate::dom;
use crate::events::{self, Listener};
use crate::frame::{self, FrameDriver, FrameLoop};
use crate::input::PointerTracker;
use crate::surface::Surface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A running animation mounted on a canvas.
pub struct App {
    driver: Rc<RefCell<FrameDriver<CanvasSurface>>>,
    frame_loop: FrameLoop,
    listeners: Vec<Listener>,
}

impl App {
    pub fn mount(document: &web::Document, canvas_id: &str) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let canvas = dom::canvas_by_id(document, canvas_id)?;
        let settings: Settings = dom::read_settings(&canvas)?;
        log::info!("[mount] #{} {:?}", canvas_id, settings);

        dom::style_visible_canvas(&canvas, &settings);
        let mut visible = CanvasSurface::new(canvas.clone())?;
        let mut buffer = CanvasSurface::new(dom::create_buffer_canvas(document)?)?;
        // size before the driver exists so the sweep picks up the real dimensions
        if let Some((w, h)) = dom::current_backing_size(&settings) {
            visible.set_size(w, h);
            buffer.set_size(w, h);
        }

        let driver = Rc::new(RefCell::new(FrameDriver::new(
            &settings,
            Some(visible),
            Some(buffer),
        )));
        let tracker = Rc::new(RefCell::new(PointerTracker::new(
            settings.ratio,
            Instant::now(),
        )));

        let listeners = vec![
            events::wire_resize(&window, canvas.clone(), driver.clone(), settings),
            events::wire_pointermove(&canvas, tracker, driver.clone()),
        ];
        let frame_loop = frame::start_loop(driver.clone());

        Ok(Self {
            driver,
            frame_loop,
            listeners,
        })
    }

    /// Stop the frame loop, detach every listener and drop live effects.
    pub fn teardown(self) {
        self.frame_loop.cancel();
        self.driver.borrow_mut().stop();
        for l in self.listeners {
            l.detach();
        }
        log::info!("[teardown] done");
    }
}
