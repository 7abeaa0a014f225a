//! Frame-aligned coalescing of scroll notifications.

use crate::host::FrameHost;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Collapses bursts of events into at most one callback per animation frame.
///
/// `ticking` is set while a frame is in flight; further events before the
/// frame is delivered are dropped.
pub struct Debouncer<H> {
    host: H,
    callback: Rc<dyn Fn()>,
    ticking: Rc<Cell<bool>>,
}

impl<H: FrameHost> Debouncer<H> {
    pub fn new(host: H, callback: impl Fn() + 'static) -> Self {
        Self {
            host,
            callback: Rc::new(callback),
            ticking: Rc::new(Cell::new(false)),
        }
    }

    /// Entry point for the scroll listener.
    pub fn handle_event(&self) {
        self.request_tick();
    }

    /// Whether a frame has been requested and not yet delivered.
    pub fn is_ticking(&self) -> bool {
        self.ticking.get()
    }

    fn request_tick(&self) {
        if self.ticking.get() {
            return;
        }
        self.ticking.set(true);
        let callback = Rc::clone(&self.callback);
        let ticking = Rc::clone(&self.ticking);
        let scheduled = self.host.request_animation_frame(Box::new(move || {
            callback();
            ticking.set(false);
        }));
        if !scheduled {
            // Nothing will clear the flag; let the next event retry.
            self.ticking.set(false);
        }
    }
}

impl<H> fmt::Debug for Debouncer<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("ticking", &self.ticking.get())
            .finish()
    }
}
