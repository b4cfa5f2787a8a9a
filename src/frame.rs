use crate::config::Settings;
use crate::core::{Registry, Sweep};
use crate::surface::Surface;
use glam::Vec2;

/// Per-refresh orchestration of the registry, the sweep and the two surfaces.
///
/// Either surface may be absent (not yet created, or torn down); the matching
/// draw or composite step is then skipped while effects keep advancing.
pub struct FrameDriver<S: Surface> {
    visible: Option<S>,
    buffer: Option<S>,
    registry: Registry,
    sweep: Sweep,
    sweep_filter: String,
    running: bool,
    frames: u64,
}

impl<S: Surface> FrameDriver<S> {
    pub fn new(settings: &Settings, visible: Option<S>, buffer: Option<S>) -> Self {
        let (w, h) = buffer
            .as_ref()
            .or(visible.as_ref())
            .map(|s| s.size())
            .unwrap_or((0, 0));
        Self {
            visible,
            buffer,
            registry: Registry::new(),
            sweep: Sweep::new(w, h),
            sweep_filter: settings.sweep_filter(),
            running: true,
            frames: 0,
        }
    }

    /// Run one frame. Returns whether the caller should schedule another.
    pub fn frame(&mut self) -> bool {
        if !self.running {
            return false;
        }

        if let Some(v) = &mut self.visible {
            v.clear();
        }
        if let Some(b) = &mut self.buffer {
            b.clear();
        }

        self.registry
            .tick(self.visible.as_mut().map(|v| v as &mut dyn Surface));

        self.sweep.update();
        if let Some(b) = &mut self.buffer {
            b.save();
            b.set_filter(&self.sweep_filter);
            self.sweep.draw(b);
            b.restore();
        }

        if let (Some(v), Some(b)) = (&mut self.visible, &self.buffer) {
            v.composite(b, Vec2::ZERO);
        }

        self.frames += 1;
        true
    }

    /// Stop the loop; live effects are discarded.
    pub fn stop(&mut self) {
        self.running = false;
        self.registry.clear();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Give both surfaces (and the sweep) the same backing size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(v) = &mut self.visible {
            v.set_size(width, height);
        }
        if let Some(b) = &mut self.buffer {
            b.set_size(width, height);
        }
        self.sweep.resize(width, height);
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    pub fn visible(&self) -> Option<&S> {
        self.visible.as_ref()
    }

    pub fn buffer(&self) -> Option<&S> {
        self.buffer.as_ref()
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_loop::{start_loop, FrameLoop};

#[cfg(target_arch = "wasm32")]
mod web_loop {
    use super::FrameDriver;
    use crate::surface::Surface;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

    /// requestAnimationFrame loop driving a [`FrameDriver`].
    pub struct FrameLoop {
        tick: TickSlot,
        pending: Rc<Cell<Option<i32>>>,
    }

    impl FrameLoop {
        /// Cancel the pending frame request and release the callback.
        pub fn cancel(&self) {
            if let Some(id) = self.pending.take() {
                if let Some(w) = web::window() {
                    _ = w.cancel_animation_frame(id);
                }
            }
            // breaks the closure's reference cycle on itself
            self.tick.borrow_mut().take();
        }
    }

    fn request(tick: &TickSlot, pending: &Cell<Option<i32>>) {
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = tick.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => pending.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    pub fn start_loop<S: Surface + 'static>(driver: Rc<RefCell<FrameDriver<S>>>) -> FrameLoop {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            let again = driver.borrow_mut().frame();
            if again {
                request(&tick_clone, &pending_clone);
            }
        }) as Box<dyn FnMut()>));
        request(&tick, &pending);
        FrameLoop { tick, pending }
    }
}
