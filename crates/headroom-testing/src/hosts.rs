//! In-memory implementations of the host traits.

use headroom_core::{ClassList, FrameHost, ScrollMetrics, Scroller};
use rustc_hash::FxHashSet;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_time::Duration;

/// A scrollable page with fixed geometry and a movable offset.
pub struct TestScroller {
    offset: Cell<i32>,
    visible_extent: Cell<i32>,
    total_extent: Cell<i32>,
    viewport_height: Cell<i32>,
    listener: RefCell<Option<Rc<dyn Fn()>>>,
    listeners_added: Cell<usize>,
}

impl TestScroller {
    /// A window-like scroller: visible extent equals the viewport height.
    pub fn new(viewport_height: i32, total_extent: i32) -> Self {
        Self {
            offset: Cell::new(0),
            visible_extent: Cell::new(viewport_height),
            total_extent: Cell::new(total_extent),
            viewport_height: Cell::new(viewport_height),
            listener: RefCell::new(None),
            listeners_added: Cell::new(0),
        }
    }

    /// An element scroller whose box differs from the window viewport.
    pub fn element(visible_extent: i32, total_extent: i32, viewport_height: i32) -> Self {
        let scroller = Self::new(viewport_height, total_extent);
        scroller.visible_extent.set(visible_extent);
        scroller
    }

    /// Moves the offset and, like a browser, fires the scroll listener.
    pub fn scroll_to(&self, offset: i32) {
        self.offset.set(offset);
        self.dispatch_scroll();
    }

    /// Moves the offset silently, as a restored position would.
    pub fn set_offset(&self, offset: i32) {
        self.offset.set(offset);
    }

    pub fn set_total_extent(&self, total_extent: i32) {
        self.total_extent.set(total_extent);
    }

    /// Fires the listener without moving.
    pub fn dispatch_scroll(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    pub fn has_listener(&self) -> bool {
        self.listener.borrow().is_some()
    }

    /// How many times a listener has been registered.
    pub fn listeners_added(&self) -> usize {
        self.listeners_added.get()
    }
}

impl Default for TestScroller {
    fn default() -> Self {
        Self::new(600, 3000)
    }
}

impl ScrollMetrics for TestScroller {
    fn current_offset(&self) -> i32 {
        self.offset.get()
    }

    fn visible_extent(&self) -> i32 {
        self.visible_extent.get()
    }

    fn total_extent(&self) -> i32 {
        self.total_extent.get()
    }

    fn viewport_height(&self) -> i32 {
        self.viewport_height.get()
    }
}

impl Scroller for TestScroller {
    fn add_scroll_listener(&self, listener: Rc<dyn Fn()>) {
        self.listeners_added.set(self.listeners_added.get() + 1);
        *self.listener.borrow_mut() = Some(listener);
    }

    fn remove_scroll_listener(&self) {
        self.listener.borrow_mut().take();
    }
}

/// A class attribute backed by a set.
#[derive(Default)]
pub struct TestClassList {
    classes: RefCell<FxHashSet<String>>,
}

impl TestClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classes, sorted.
    pub fn classes(&self) -> Vec<String> {
        let mut classes: Vec<String> = self.classes.borrow().iter().cloned().collect();
        classes.sort();
        classes
    }

    pub fn is_empty(&self) -> bool {
        self.classes.borrow().is_empty()
    }
}

impl ClassList for TestClassList {
    fn add(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_owned());
    }

    fn remove(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn contains(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }
}

struct PendingTimer {
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

/// Event loop that only advances when told to.
///
/// Frames run on [`run_frame`](Self::run_frame); timers run when
/// [`advance`](Self::advance) moves the clock past their due time.
#[derive(Default)]
pub struct ManualHost {
    frames: RefCell<Vec<Box<dyn FnOnce()>>>,
    timers: RefCell<Vec<PendingTimer>>,
    now: Cell<Duration>,
    frames_requested: Cell<usize>,
    frames_run: Cell<usize>,
    rejecting_frames: Cell<bool>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers the frames requested so far. Frames requested while these run
    /// wait for the next call. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        let count = frames.len();
        for frame in frames {
            frame();
        }
        self.frames_run.set(self.frames_run.get() + count);
        count
    }

    /// Moves the clock forward and runs every timer now due, in due order.
    pub fn advance(&self, by: Duration) {
        let now = self.now.get() + by;
        self.now.set(now);
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= now)
                    .min_by_key(|(_, timer)| timer.due)
                    .map(|(index, _)| index);
                due.map(|index| timers.remove(index))
            };
            match next {
                Some(timer) => (timer.callback)(),
                None => break,
            }
        }
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// While set, frame requests fail and their callbacks are dropped.
    pub fn set_rejecting_frames(&self, rejecting: bool) {
        self.rejecting_frames.set(rejecting);
    }

    pub fn frames_requested(&self) -> usize {
        self.frames_requested.get()
    }

    pub fn frames_run(&self) -> usize {
        self.frames_run.get()
    }
}

impl FrameHost for ManualHost {
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) -> bool {
        self.frames_requested.set(self.frames_requested.get() + 1);
        if self.rejecting_frames.get() {
            return false;
        }
        self.frames.borrow_mut().push(callback);
        true
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let due = self.now.get() + delay;
        self.timers.borrow_mut().push(PendingTimer { due, callback });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_fire_only_once_due() {
        let host = ManualHost::new();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        host.set_timeout(Duration::from_millis(100), Box::new(move || flag.set(true)));

        host.advance(Duration::from_millis(99));
        assert!(!fired.get());
        host.advance(Duration::from_millis(1));
        assert!(fired.get());
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn scroll_to_fires_registered_listener() {
        let scroller = TestScroller::default();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        scroller.add_scroll_listener(Rc::new(move || counter.set(counter.get() + 1)));

        scroller.scroll_to(10);
        scroller.remove_scroll_listener();
        scroller.scroll_to(20);

        assert_eq!(hits.get(), 1);
        assert_eq!(scroller.current_offset(), 20);
    }
}
