use crate::capabilities::animation_frame_function;
use crate::error::WebPlatformError;
use headroom_core::FrameHost;
use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;
use web_time::Duration;

/// [`FrameHost`] backed by the browser event loop.
pub struct WindowHost {
    window: Window,
    /// `requestAnimationFrame` or a vendor-prefixed variant.
    frame_fn: Option<Function>,
}

impl WindowHost {
    pub fn new() -> Result<Self, WebPlatformError> {
        let window = web_sys::window().ok_or(WebPlatformError::NoWindow)?;
        let frame_fn = animation_frame_function(&window);
        Ok(Self { window, frame_fn })
    }

    fn schedule_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), WebPlatformError> {
        let frame_fn = self
            .frame_fn
            .as_ref()
            .ok_or_else(|| WebPlatformError::Js("requestAnimationFrame is unavailable".into()))?;
        let closure = Closure::once_into_js(move || callback());
        frame_fn.call1(&self.window, &closure)?;
        Ok(())
    }

    fn schedule_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<(), WebPlatformError> {
        let closure = Closure::once_into_js(move || callback());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref(),
            millis,
        )?;
        Ok(())
    }
}

impl FrameHost for WindowHost {
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) -> bool {
        match self.schedule_frame(callback) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("headroom: frame request failed: {}", err);
                false
            }
        }
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        if let Err(err) = self.schedule_timeout(delay, callback) {
            log::warn!("headroom: timeout failed: {}", err);
        }
    }
}
