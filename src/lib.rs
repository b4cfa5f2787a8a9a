//! Cursor-reactive particle effects drawn on a 2D canvas.
//!
//! The engine (`core`, `input`, `frame`) is target-independent and draws
//! through the [`surface::Surface`] trait. The browser shell wiring it to a
//! canvas, pointer events and `requestAnimationFrame` is only built for wasm32.

pub mod config;
pub mod constants;
pub mod core;
pub mod frame;
pub mod input;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::app::App;
    use crate::constants::CANVAS_ELEMENT_ID;
    use crate::dom;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("cursor-fx starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let app = App::mount(&document, CANVAS_ELEMENT_ID)?;
        APP.with(|slot| {
            if let Some(old) = slot.borrow_mut().replace(app) {
                old.teardown();
            }
        });
        Ok(())
    }

    /// Stop the animation and detach from the page.
    #[wasm_bindgen]
    pub fn teardown() {
        APP.with(|slot| {
            if let Some(app) = slot.borrow_mut().take() {
                app.teardown();
            }
        });
    }
}
