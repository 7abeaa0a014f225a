//! JS-facing `Headroom` class.
//!
//! ```js
//! const headroom = new Headroom(document.querySelector("header"), { offset: 80 });
//! headroom.init();
//! ```

use crate::options::{options_from_js, scroll_target_from_js};
use crate::{capabilities, mount, WebScrollHeader};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

#[wasm_bindgen(js_name = Headroom)]
pub struct HeadroomHandle {
    header: WebScrollHeader,
}

#[wasm_bindgen(js_class = Headroom)]
impl HeadroomHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(elem: JsValue, options: JsValue) -> Result<HeadroomHandle, JsValue> {
        let target = elem
            .dyn_into::<Element>()
            .map_err(|_| crate::WebPlatformError::NotAnElement("header".into()))?;
        let header = mount(
            target,
            scroll_target_from_js(&options),
            options_from_js(&options),
        )?;
        Ok(Self { header })
    }

    /// Whether this browser supports the widget at all.
    #[wasm_bindgen(js_name = cutsTheMustard)]
    pub fn cuts_the_mustard() -> bool {
        capabilities::detect().cuts_the_mustard()
    }

    pub fn init(&self) -> bool {
        self.header.init()
    }

    pub fn destroy(&self) {
        self.header.destroy();
    }

    /// Evaluates the current scroll position immediately.
    pub fn update(&self) {
        self.header.update();
    }

    #[wasm_bindgen(getter)]
    pub fn pinned(&self) -> bool {
        self.header.state().is_pinned()
    }

    #[wasm_bindgen(getter)]
    pub fn unpinned(&self) -> bool {
        self.header.state().is_unpinned()
    }

    #[wasm_bindgen(getter)]
    pub fn top(&self) -> bool {
        self.header.state().is_top()
    }

    #[wasm_bindgen(getter)]
    pub fn bottom(&self) -> bool {
        self.header.state().is_bottom()
    }

    #[wasm_bindgen(getter, js_name = lastKnownScrollY)]
    pub fn last_known_scroll_y(&self) -> i32 {
        self.header.last_known_scroll_y()
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.header.is_attached()
    }
}
