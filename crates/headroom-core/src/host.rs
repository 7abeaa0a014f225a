//! Seams between the widget and whatever hosts it.
//!
//! The browser adapter implements these over the DOM; tests use the in-memory
//! versions from `headroom-testing`.

use std::rc::Rc;
use web_time::Duration;

/// Vertical scroll geometry of a scroller, in whole pixels.
pub trait ScrollMetrics {
    /// Current scroll offset from the top. May transiently be negative or past
    /// the end during elastic overscroll.
    fn current_offset(&self) -> i32;

    /// Height of the scroller's visible box.
    fn visible_extent(&self) -> i32;

    /// Full scrollable height of the scroller's content.
    fn total_extent(&self) -> i32;

    /// Height of the host viewport.
    fn viewport_height(&self) -> i32;
}

/// A scroll source the widget can subscribe to.
///
/// At most one listener is registered at a time; registering again replaces
/// the previous one.
pub trait Scroller: ScrollMetrics {
    fn add_scroll_listener(&self, listener: Rc<dyn Fn()>);

    /// Removing when nothing is registered is a no-op.
    fn remove_scroll_listener(&self);
}

/// Class markers on the target element.
pub trait ClassList {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
    fn contains(&self, class: &str) -> bool;
}

/// Deferred execution primitives of the host event loop.
pub trait FrameHost {
    /// Runs `callback` once before the next repaint.
    ///
    /// Returns false if the frame could not be scheduled; `callback` is then
    /// dropped without running.
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) -> bool;

    /// Runs `callback` once after `delay`.
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}

impl<T: ScrollMetrics + ?Sized> ScrollMetrics for Rc<T> {
    fn current_offset(&self) -> i32 {
        (**self).current_offset()
    }

    fn visible_extent(&self) -> i32 {
        (**self).visible_extent()
    }

    fn total_extent(&self) -> i32 {
        (**self).total_extent()
    }

    fn viewport_height(&self) -> i32 {
        (**self).viewport_height()
    }
}

impl<T: Scroller + ?Sized> Scroller for Rc<T> {
    fn add_scroll_listener(&self, listener: Rc<dyn Fn()>) {
        (**self).add_scroll_listener(listener)
    }

    fn remove_scroll_listener(&self) {
        (**self).remove_scroll_listener()
    }
}

impl<T: ClassList + ?Sized> ClassList for Rc<T> {
    fn add(&self, class: &str) {
        (**self).add(class)
    }

    fn remove(&self, class: &str) {
        (**self).remove(class)
    }

    fn contains(&self, class: &str) -> bool {
        (**self).contains(class)
    }
}

impl<T: FrameHost + ?Sized> FrameHost for Rc<T> {
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) -> bool {
        (**self).request_animation_frame(callback)
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        (**self).set_timeout(delay, callback)
    }
}
