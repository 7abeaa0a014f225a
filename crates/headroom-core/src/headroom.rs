//! Scroll state evaluation.
//!
//! [`Headroom`] decides, for one observed scroll offset, three orthogonal
//! transitions: top/not-top, bottom/not-bottom and pin/unpin. The typed
//! [`HeaderState`] mirrors the class markers written to the target so that
//! re-entering the active state is a no-op.

use crate::host::{ClassList, ScrollMetrics};
use crate::options::{Callbacks, ClassNames, HeadroomOptions, ScrollDirection, Tolerance};
use log::{debug, trace};
use smallvec::SmallVec;
use std::fmt;

/// Whether the header is shown or hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PinState {
    /// No evaluation has decided yet.
    #[default]
    Unset,
    Pinned,
    Unpinned,
}

/// A state entered by an evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    Pin,
    Unpin,
    Top,
    NotTop,
    Bottom,
    NotBottom,
}

/// Transitions produced by a single evaluation. At most one per axis.
pub type Transitions = SmallVec<[Transition; 3]>;

/// Current value of each state axis. `None` means never decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HeaderState {
    pub pin: PinState,
    pub top: Option<bool>,
    pub bottom: Option<bool>,
}

impl HeaderState {
    pub fn is_pinned(&self) -> bool {
        self.pin == PinState::Pinned
    }

    pub fn is_unpinned(&self) -> bool {
        self.pin == PinState::Unpinned
    }

    pub fn is_top(&self) -> bool {
        self.top == Some(true)
    }

    pub fn is_bottom(&self) -> bool {
        self.bottom == Some(true)
    }

    /// True if `transition` would not change anything.
    pub fn is_active(&self, transition: Transition) -> bool {
        match transition {
            Transition::Pin => self.pin == PinState::Pinned,
            Transition::Unpin => self.pin == PinState::Unpinned,
            Transition::Top => self.top == Some(true),
            Transition::NotTop => self.top == Some(false),
            Transition::Bottom => self.bottom == Some(true),
            Transition::NotBottom => self.bottom == Some(false),
        }
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Pin => self.pin = PinState::Pinned,
            Transition::Unpin => self.pin = PinState::Unpinned,
            Transition::Top => self.top = Some(true),
            Transition::NotTop => self.top = Some(false),
            Transition::Bottom => self.bottom = Some(true),
            Transition::NotBottom => self.bottom = Some(false),
        }
    }
}

impl ClassNames {
    /// `(entered, left)` class names for a transition.
    pub fn for_transition(&self, transition: Transition) -> (&str, &str) {
        match transition {
            Transition::Pin => (self.pinned.as_str(), self.unpinned.as_str()),
            Transition::Unpin => (self.unpinned.as_str(), self.pinned.as_str()),
            Transition::Top => (self.top.as_str(), self.not_top.as_str()),
            Transition::NotTop => (self.not_top.as_str(), self.top.as_str()),
            Transition::Bottom => (self.bottom.as_str(), self.not_bottom.as_str()),
            Transition::NotBottom => (self.not_bottom.as_str(), self.bottom.as_str()),
        }
    }
}

impl Callbacks {
    pub fn hook_for(&self, transition: Transition) -> Option<&crate::options::Hook> {
        match transition {
            Transition::Pin => self.on_pin.as_ref(),
            Transition::Unpin => self.on_unpin.as_ref(),
            Transition::Top => self.on_top.as_ref(),
            Transition::NotTop => self.on_not_top.as_ref(),
            Transition::Bottom => self.on_bottom.as_ref(),
            Transition::NotBottom => self.on_not_bottom.as_ref(),
        }
    }

    /// Invokes the hook of every transition, in order.
    pub fn dispatch(&self, transitions: &[Transition]) {
        for transition in transitions {
            if let Some(hook) = self.hook_for(*transition) {
                hook();
            }
        }
    }
}

/// Header show/hide state machine over a scroller and a target element.
pub struct Headroom<S, T> {
    scroller: S,
    target: T,
    last_known_scroll_y: i32,
    tolerance: Tolerance,
    offset: u32,
    classes: ClassNames,
    callbacks: Callbacks,
    state: HeaderState,
    attached: bool,
}

impl<S: ScrollMetrics, T: ClassList> Headroom<S, T> {
    pub fn new(target: T, scroller: S, options: HeadroomOptions) -> Self {
        Self {
            scroller,
            target,
            last_known_scroll_y: 0,
            tolerance: options.tolerance,
            offset: options.offset,
            classes: options.classes.normalized(),
            callbacks: options.callbacks,
            state: HeaderState::default(),
            attached: false,
        }
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn last_known_scroll_y(&self) -> i32 {
        self.last_known_scroll_y
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn classes(&self) -> &ClassNames {
        &self.classes
    }

    pub fn callbacks(&self) -> &Callbacks {
        &self.callbacks
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Marks the target with the `initial` class.
    pub fn mark_initial(&self) {
        self.target.add(&self.classes.initial);
    }

    /// Captures the current offset as the baseline and flags the widget as
    /// observing. Returns false if it already was.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.last_known_scroll_y = self.scroller.current_offset();
        self.attached = true;
        debug!("headroom attached at offset {}", self.last_known_scroll_y);
        true
    }

    /// Removes every class marker and forgets all decided state.
    pub fn detach(&mut self) {
        self.attached = false;
        for class in self.classes.all() {
            self.target.remove(class);
        }
        self.state = HeaderState::default();
        debug!("headroom detached");
    }

    /// Evaluates the current offset and fires the hooks of every transition.
    pub fn update(&mut self) -> Transitions {
        let transitions = self.evaluate();
        self.callbacks.dispatch(&transitions);
        transitions
    }

    /// Evaluates the current offset, updates state and class markers, and
    /// returns the transitions without firing hooks.
    pub fn evaluate(&mut self) -> Transitions {
        let current = self.scroller.current_offset();
        let direction = if current > self.last_known_scroll_y {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        let tolerance_exceeded = self.tolerance_exceeded(current, direction);

        let mut transitions = Transitions::new();

        if self.is_out_of_bounds(current) {
            // Elastic overscroll; leave everything as it was.
            trace!("headroom skipped out-of-bounds offset {}", current);
            return transitions;
        }

        let offset = i64::from(self.offset);
        let y = i64::from(current);

        if y <= offset {
            self.enter(Transition::Top, &mut transitions);
        } else {
            self.enter(Transition::NotTop, &mut transitions);
        }

        let viewport = i64::from(self.scroller.viewport_height());
        if y + viewport >= i64::from(self.scroller.total_extent()) {
            self.enter(Transition::Bottom, &mut transitions);
        } else {
            self.enter(Transition::NotBottom, &mut transitions);
        }

        if self.should_unpin(current, tolerance_exceeded) {
            self.enter(Transition::Unpin, &mut transitions);
        } else if self.should_pin(current, tolerance_exceeded) {
            self.enter(Transition::Pin, &mut transitions);
        }

        self.last_known_scroll_y = current;
        transitions
    }

    fn enter(&mut self, transition: Transition, transitions: &mut Transitions) {
        if self.state.is_active(transition) {
            return;
        }
        let (entered, left) = self.classes.for_transition(transition);
        self.target.add(entered);
        self.target.remove(left);
        self.state.apply(transition);
        debug!("headroom {:?}", transition);
        transitions.push(transition);
    }

    fn is_out_of_bounds(&self, current: i32) -> bool {
        let y = i64::from(current);
        y < 0
            || y + i64::from(self.scroller.visible_extent())
                > i64::from(self.scroller.total_extent())
    }

    fn tolerance_exceeded(&self, current: i32, direction: ScrollDirection) -> bool {
        let delta = (i64::from(current) - i64::from(self.last_known_scroll_y)).abs();
        delta >= i64::from(self.tolerance.for_direction(direction))
    }

    fn should_unpin(&self, current: i32, tolerance_exceeded: bool) -> bool {
        current > self.last_known_scroll_y
            && i64::from(current) >= i64::from(self.offset)
            && tolerance_exceeded
    }

    fn should_pin(&self, current: i32, tolerance_exceeded: bool) -> bool {
        (current < self.last_known_scroll_y && tolerance_exceeded)
            || i64::from(current) <= i64::from(self.offset)
    }
}

impl<S, T> fmt::Debug for Headroom<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Headroom")
            .field("last_known_scroll_y", &self.last_known_scroll_y)
            .field("tolerance", &self.tolerance)
            .field("offset", &self.offset)
            .field("classes", &self.classes)
            .field("state", &self.state)
            .field("attached", &self.attached)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeSet;
    use std::rc::Rc;

    struct Page {
        y: Cell<i32>,
        viewport: i32,
        content: i32,
    }

    impl ScrollMetrics for Page {
        fn current_offset(&self) -> i32 {
            self.y.get()
        }
        fn visible_extent(&self) -> i32 {
            self.viewport
        }
        fn total_extent(&self) -> i32 {
            self.content
        }
        fn viewport_height(&self) -> i32 {
            self.viewport
        }
    }

    #[derive(Default)]
    struct Classes(RefCell<BTreeSet<String>>);

    impl ClassList for Classes {
        fn add(&self, class: &str) {
            self.0.borrow_mut().insert(class.to_owned());
        }
        fn remove(&self, class: &str) {
            self.0.borrow_mut().remove(class);
        }
        fn contains(&self, class: &str) -> bool {
            self.0.borrow().contains(class)
        }
    }

    fn headroom(
        options: HeadroomOptions,
    ) -> (Rc<Page>, Rc<Classes>, Headroom<Rc<Page>, Rc<Classes>>) {
        let page = Rc::new(Page {
            y: Cell::new(0),
            viewport: 500,
            content: 2000,
        });
        let classes = Rc::new(Classes::default());
        let headroom = Headroom::new(Rc::clone(&classes), Rc::clone(&page), options);
        (page, classes, headroom)
    }

    #[test]
    fn first_evaluation_at_top() {
        let (_page, classes, mut headroom) = headroom(HeadroomOptions::default());

        let transitions = headroom.evaluate();

        assert_eq!(
            transitions.as_slice(),
            &[Transition::Top, Transition::NotBottom, Transition::Pin]
        );
        assert!(classes.contains("is-top"));
        assert!(classes.contains("is-not-bottom"));
        assert!(classes.contains("is-pinned"));
        assert!(!classes.contains("is-unpinned"));
    }

    #[test]
    fn scrolling_down_past_offset_unpins() {
        let (page, classes, mut headroom) = headroom(HeadroomOptions::default());

        page.y.set(100);
        headroom.evaluate();
        assert_eq!(headroom.state().top, Some(false));
        assert!(headroom.state().is_unpinned());

        page.y.set(200);
        let transitions = headroom.evaluate();
        assert!(transitions.is_empty());
        assert!(classes.contains("is-unpinned"));
        assert!(classes.contains("is-not-top"));
        assert_eq!(headroom.last_known_scroll_y(), 200);
    }

    #[test]
    fn scrolling_up_within_tolerance_keeps_unpinned() {
        let (page, _classes, mut headroom) =
            headroom(HeadroomOptions::default().with_tolerance(Tolerance::new(50, 0)));

        page.y.set(400);
        headroom.evaluate();
        assert!(headroom.state().is_unpinned());

        page.y.set(380);
        headroom.evaluate();
        assert!(headroom.state().is_unpinned());

        // Delta is measured from the last evaluation, not the turning point.
        page.y.set(320);
        headroom.evaluate();
        assert!(headroom.state().is_pinned());
    }

    #[test]
    fn unpin_requires_reaching_offset() {
        let (page, _classes, mut headroom) = headroom(HeadroomOptions::default());

        page.y.set(30);
        headroom.evaluate();
        assert!(headroom.state().is_pinned());
        assert!(headroom.state().is_top());

        page.y.set(60);
        headroom.evaluate();
        assert!(headroom.state().is_unpinned());
        assert!(headroom.state().is_top());
    }

    #[test]
    fn bottom_is_reached_when_viewport_touches_content_end() {
        let (page, classes, mut headroom) = headroom(HeadroomOptions::default());

        page.y.set(1500);
        headroom.evaluate();

        assert!(headroom.state().is_bottom());
        assert!(classes.contains("is-bottom"));
        assert!(!classes.contains("is-not-bottom"));
    }

    #[test]
    fn overscroll_is_ignored() {
        let (page, classes, mut headroom) = headroom(HeadroomOptions::default());
        page.y.set(300);
        headroom.evaluate();
        let before = headroom.state();

        page.y.set(-40);
        assert!(headroom.evaluate().is_empty());
        page.y.set(1501);
        assert!(headroom.evaluate().is_empty());

        assert_eq!(headroom.state(), before);
        assert_eq!(headroom.last_known_scroll_y(), 300);
        assert!(classes.contains("is-unpinned"));
    }

    #[test]
    fn update_fires_hooks_once_per_transition() {
        let unpins = Rc::new(Cell::new(0));
        let counter = Rc::clone(&unpins);
        let (page, _classes, mut headroom) =
            headroom(HeadroomOptions::default().on_unpin(move || counter.set(counter.get() + 1)));

        page.y.set(200);
        headroom.update();
        headroom.update();
        page.y.set(300);
        headroom.update();

        assert_eq!(unpins.get(), 1);
    }

    #[test]
    fn detach_clears_markers_and_state() {
        let (page, classes, mut headroom) = headroom(HeadroomOptions::default());
        headroom.mark_initial();
        assert!(headroom.attach());
        assert!(!headroom.attach());
        page.y.set(200);
        headroom.evaluate();

        headroom.detach();

        assert!(classes.0.borrow().is_empty());
        assert_eq!(headroom.state(), HeaderState::default());
        assert!(!headroom.is_attached());
    }
}
