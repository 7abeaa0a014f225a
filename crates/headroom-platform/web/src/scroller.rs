//! Scroll geometry and scroll events from the DOM.

use crate::error::WebPlatformError;
use headroom_core::{ScrollMetrics, Scroller};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget, HtmlElement, Window};

/// What is being scrolled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    /// The whole page.
    Window,
    /// A scrollable element other than `<body>`.
    Element(HtmlElement),
}

/// [`Scroller`] over the page or a scrollable element.
pub struct DomScroller {
    window: Window,
    document: Document,
    target: ScrollTarget,
    listener: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl DomScroller {
    pub fn window() -> Result<Self, WebPlatformError> {
        Self::new(ScrollTarget::Window)
    }

    /// `<body>` is treated as the window, since that is what scrolls.
    pub fn element(element: HtmlElement) -> Result<Self, WebPlatformError> {
        Self::new(ScrollTarget::Element(element))
    }

    pub fn new(target: ScrollTarget) -> Result<Self, WebPlatformError> {
        let window = web_sys::window().ok_or(WebPlatformError::NoWindow)?;
        let document = window.document().ok_or(WebPlatformError::NoDocument)?;
        let target = match target {
            ScrollTarget::Element(element) if document.body().as_ref() == Some(&element) => {
                ScrollTarget::Window
            }
            other => other,
        };
        Ok(Self {
            window,
            document,
            target,
            listener: RefCell::new(None),
        })
    }

    pub fn target(&self) -> &ScrollTarget {
        &self.target
    }

    fn event_target(&self) -> &EventTarget {
        match &self.target {
            ScrollTarget::Window => self.window.as_ref(),
            ScrollTarget::Element(element) => element.as_ref(),
        }
    }

    fn document_height(&self) -> i32 {
        let mut heights = Vec::with_capacity(6);
        if let Some(body) = self.document.body() {
            heights.extend([body.scroll_height(), body.offset_height(), body.client_height()]);
        }
        if let Some(root) = self.document.document_element() {
            heights.push(root.scroll_height());
            heights.push(root.client_height());
            if let Some(root) = root.dyn_ref::<HtmlElement>() {
                heights.push(root.offset_height());
            }
        }
        heights.into_iter().max().unwrap_or(0)
    }

    fn window_viewport_height(&self) -> i32 {
        let inner = self
            .window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .map(to_pixels)
            .unwrap_or(0);
        if inner > 0 {
            return inner;
        }
        let root = self
            .document
            .document_element()
            .map(|root| root.client_height())
            .unwrap_or(0);
        if root > 0 {
            return root;
        }
        self.document.body().map(|body| body.client_height()).unwrap_or(0)
    }
}

impl ScrollMetrics for DomScroller {
    fn current_offset(&self) -> i32 {
        match &self.target {
            ScrollTarget::Window => self
                .window
                .page_y_offset()
                .map(to_pixels)
                .unwrap_or_else(|_| {
                    self.document
                        .document_element()
                        .map(|root| root.scroll_top())
                        .unwrap_or(0)
                }),
            ScrollTarget::Element(element) => element.scroll_top(),
        }
    }

    fn visible_extent(&self) -> i32 {
        match &self.target {
            ScrollTarget::Window => self.window_viewport_height(),
            ScrollTarget::Element(element) => element.offset_height().max(element.client_height()),
        }
    }

    fn total_extent(&self) -> i32 {
        match &self.target {
            ScrollTarget::Window => self.document_height(),
            ScrollTarget::Element(element) => element
                .scroll_height()
                .max(element.offset_height())
                .max(element.client_height()),
        }
    }

    fn viewport_height(&self) -> i32 {
        self.window_viewport_height()
    }
}

impl Scroller for DomScroller {
    fn add_scroll_listener(&self, listener: Rc<dyn Fn()>) {
        self.remove_scroll_listener();
        let closure = Closure::wrap(Box::new(move || listener()) as Box<dyn FnMut()>);
        if let Err(err) = self
            .event_target()
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            log::warn!("headroom: adding scroll listener failed: {:?}", err);
            return;
        }
        *self.listener.borrow_mut() = Some(closure);
    }

    fn remove_scroll_listener(&self) {
        let Some(closure) = self.listener.borrow_mut().take() else {
            return;
        };
        if let Err(err) = self
            .event_target()
            .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        {
            log::warn!("headroom: removing scroll listener failed: {:?}", err);
        }
    }
}

impl Drop for DomScroller {
    fn drop(&mut self) {
        // The closure must not outlive its registration.
        self.remove_scroll_listener();
    }
}

/// CSS pixels to whole pixels; non-finite values become 0.
pub(crate) fn to_pixels(value: f64) -> i32 {
    if value.is_finite() {
        value.round() as i32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::to_pixels;

    #[test]
    fn fractional_offsets_round_to_nearest_pixel() {
        assert_eq!(to_pixels(99.5), 100);
        assert_eq!(to_pixels(-0.4), 0);
        assert_eq!(to_pixels(f64::NAN), 0);
        assert_eq!(to_pixels(1e12), i32::MAX);
    }
}
