//! Browser feature detection, probed once per thread.

use headroom_core::Capabilities;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Standard name first, then the vendor-prefixed fallbacks.
pub(crate) const ANIMATION_FRAME_NAMES: [&str; 3] = [
    "requestAnimationFrame",
    "webkitRequestAnimationFrame",
    "mozRequestAnimationFrame",
];

thread_local! {
    static DETECTED: Capabilities = probe();
}

/// Capabilities of the current browser. The probe runs on first call only.
pub fn detect() -> Capabilities {
    DETECTED.with(|capabilities| *capabilities)
}

fn probe() -> Capabilities {
    let Some(window) = web_sys::window() else {
        return Capabilities::none();
    };
    let capabilities = Capabilities {
        function_bind: has_function_bind(&window),
        class_list: has_class_list(&window),
        animation_frame: animation_frame_function(&window).is_some(),
    };
    log::debug!("headroom capabilities: {:?}", capabilities);
    capabilities
}

/// First available frame-scheduling function on `window`.
pub(crate) fn animation_frame_function(window: &Window) -> Option<Function> {
    ANIMATION_FRAME_NAMES.iter().find_map(|name| {
        Reflect::get(window, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
    })
}

fn has_function_bind(window: &Window) -> bool {
    Reflect::get(window, &JsValue::from_str("Function"))
        .and_then(|function| Reflect::get(&function, &JsValue::from_str("prototype")))
        .and_then(|prototype| Reflect::get(&prototype, &JsValue::from_str("bind")))
        .map(|bind| bind.is_function())
        .unwrap_or(false)
}

fn has_class_list(window: &Window) -> bool {
    window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| Reflect::has(&root, &JsValue::from_str("classList")).unwrap_or(false))
        .unwrap_or(false)
}
