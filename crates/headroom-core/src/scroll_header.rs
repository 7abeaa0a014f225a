//! Lifecycle driver: deferred attach, debounced updates, teardown.

use crate::capabilities::Capabilities;
use crate::debouncer::Debouncer;
use crate::headroom::{HeaderState, Headroom, Transitions};
use crate::host::{ClassList, FrameHost, Scroller};
use crate::options::HeadroomOptions;
use log::{debug, warn};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use web_time::Duration;

/// Delay between `init` and attaching, so the browser can restore the
/// previous scroll position first.
pub const INIT_DELAY: Duration = Duration::from_millis(100);

type SharedHeadroom<S, T> = Rc<RefCell<Headroom<Rc<S>, T>>>;

/// A [`Headroom`] wired to a scroller and an event loop.
///
/// Scroll notifications go through a [`Debouncer`], so at most one evaluation
/// runs per animation frame. Frame and timer callbacks only hold weak
/// references; dropping the `ScrollHeader` silences them.
pub struct ScrollHeader<S, T, H> {
    headroom: SharedHeadroom<S, T>,
    scroller: Rc<S>,
    host: Rc<H>,
    debouncer: Rc<Debouncer<Rc<H>>>,
    enabled: bool,
    /// Bumped by `destroy` to cancel a pending deferred attach.
    epoch: Rc<Cell<u64>>,
}

impl<S, T, H> ScrollHeader<S, T, H>
where
    S: Scroller + 'static,
    T: ClassList + 'static,
    H: FrameHost + 'static,
{
    /// `capabilities` is checked once here; a failing host yields an inert
    /// widget.
    pub fn new(
        target: T,
        scroller: Rc<S>,
        host: Rc<H>,
        options: HeadroomOptions,
        capabilities: Capabilities,
    ) -> Self {
        let headroom = Rc::new(RefCell::new(Headroom::new(
            target,
            Rc::clone(&scroller),
            options,
        )));
        let weak = Rc::downgrade(&headroom);
        let debouncer = Rc::new(Debouncer::new(Rc::clone(&host), move || {
            if let Some(headroom) = weak.upgrade() {
                run_update(&headroom);
            }
        }));

        let enabled = capabilities.cuts_the_mustard();
        if !enabled {
            warn!(
                "headroom disabled, host lacks {}",
                capabilities.missing().join(", ")
            );
        }

        Self {
            headroom,
            scroller,
            host,
            debouncer,
            enabled,
            epoch: Rc::new(Cell::new(0)),
        }
    }

    /// Marks the target and schedules the attach after [`INIT_DELAY`].
    ///
    /// Returns false, doing nothing, on a host that failed the capability
    /// check.
    pub fn init(&self) -> bool {
        if !self.enabled {
            return false;
        }
        self.headroom.borrow().mark_initial();

        let headroom = Rc::downgrade(&self.headroom);
        let debouncer = Rc::downgrade(&self.debouncer);
        let epoch = Rc::clone(&self.epoch);
        let scheduled_at = epoch.get();
        self.host.set_timeout(
            INIT_DELAY,
            Box::new(move || {
                if epoch.get() != scheduled_at {
                    debug!("headroom attach cancelled by destroy");
                    return;
                }
                if let (Some(headroom), Some(debouncer)) = (headroom.upgrade(), debouncer.upgrade())
                {
                    attach(&headroom, &debouncer);
                }
            }),
        );
        true
    }

    /// Removes the listener and every class marker. Safe before `init` or
    /// after a previous `destroy`.
    pub fn destroy(&self) {
        if !self.enabled {
            return;
        }
        self.epoch.set(self.epoch.get().wrapping_add(1));
        self.scroller.remove_scroll_listener();
        self.headroom.borrow_mut().detach();
    }

    /// Schedules a debounced evaluation, as a scroll event would.
    pub fn notify(&self) {
        if self.enabled && self.is_attached() {
            self.debouncer.handle_event();
        }
    }

    /// Evaluates immediately and fires hooks, bypassing the debouncer.
    pub fn update(&self) -> Transitions {
        if !self.enabled {
            return Transitions::new();
        }
        evaluate_and_dispatch(&self.headroom)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_attached(&self) -> bool {
        self.headroom.borrow().is_attached()
    }

    pub fn state(&self) -> HeaderState {
        self.headroom.borrow().state()
    }

    pub fn last_known_scroll_y(&self) -> i32 {
        self.headroom.borrow().last_known_scroll_y()
    }

    pub fn is_update_pending(&self) -> bool {
        self.debouncer.is_ticking()
    }
}

impl<S, T, H> fmt::Debug for ScrollHeader<S, T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollHeader")
            .field("headroom", &self.headroom)
            .field("debouncer", &self.debouncer)
            .field("enabled", &self.enabled)
            .finish()
    }
}

fn attach<S, T, H>(headroom: &SharedHeadroom<S, T>, debouncer: &Rc<Debouncer<Rc<H>>>)
where
    S: Scroller + 'static,
    T: ClassList + 'static,
    H: FrameHost + 'static,
{
    let scroller = {
        let mut headroom = headroom.borrow_mut();
        if !headroom.attach() {
            return;
        }
        Rc::clone(headroom.scroller())
    };

    let listener: Weak<Debouncer<Rc<H>>> = Rc::downgrade(debouncer);
    scroller.add_scroll_listener(Rc::new(move || {
        if let Some(debouncer) = listener.upgrade() {
            debouncer.handle_event();
        }
    }));

    // Reflect the restored position right away.
    debouncer.handle_event();
}

fn run_update<S, T>(headroom: &SharedHeadroom<S, T>)
where
    S: Scroller,
    T: ClassList,
{
    if !headroom.borrow().is_attached() {
        return;
    }
    evaluate_and_dispatch(headroom);
}

/// Hooks run after the borrow is released, so they may call back in.
fn evaluate_and_dispatch<S, T>(headroom: &SharedHeadroom<S, T>) -> Transitions
where
    S: Scroller,
    T: ClassList,
{
    let (transitions, callbacks) = {
        let mut headroom = headroom.borrow_mut();
        let transitions = headroom.evaluate();
        (transitions, headroom.callbacks().clone())
    };
    callbacks.dispatch(&transitions);
    transitions
}
