use headroom_core::{HeadroomOptions, Tolerance};
use headroom_platform_web::{mount, ScrollTarget, WebPlatformError, WebScrollHeader};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static HEADER: RefCell<Option<WebScrollHeader>> = const { RefCell::new(None) };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    log::info!("Web demo starting...");
}

/// Attaches headroom to the element matching `selector`.
#[wasm_bindgen]
pub fn run_demo(selector: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .ok_or(WebPlatformError::NoWindow)?
        .document()
        .ok_or(WebPlatformError::NoDocument)?;
    let target = document
        .query_selector(selector)?
        .ok_or_else(|| WebPlatformError::NotAnElement(selector.to_owned()))?;

    let options = HeadroomOptions::new()
        .with_offset(80)
        .with_tolerance(Tolerance::new(10, 5))
        .on_pin(|| log::info!("header pinned"))
        .on_unpin(|| log::info!("header unpinned"))
        .on_bottom(|| log::info!("reached the bottom"));

    let header = mount(target, ScrollTarget::Window, options)?;
    if !header.init() {
        log::warn!("headroom is not supported in this browser");
    }

    HEADER.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(header) {
            previous.destroy();
        }
    });
    Ok(())
}

/// Tears the demo header down again.
#[wasm_bindgen]
pub fn stop_demo() {
    HEADER.with(|slot| {
        if let Some(header) = slot.borrow_mut().take() {
            header.destroy();
        }
    });
}
