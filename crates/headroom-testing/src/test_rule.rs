use crate::hosts::{ManualHost, TestClassList, TestScroller};
use headroom_core::{
    Capabilities, ClassList, HeaderState, HeadroomOptions, ScrollHeader, INIT_DELAY,
};
use std::rc::Rc;

pub type TestScrollHeader = ScrollHeader<TestScroller, Rc<TestClassList>, ManualHost>;

/// A [`ScrollHeader`] wired to in-memory hosts, with helpers for stepping the
/// event loop.
pub struct HeadroomTestRule {
    scroller: Rc<TestScroller>,
    target: Rc<TestClassList>,
    host: Rc<ManualHost>,
    header: TestScrollHeader,
}

impl HeadroomTestRule {
    pub fn new(options: HeadroomOptions) -> Self {
        Self::with_scroller(TestScroller::default(), options, Capabilities::all())
    }

    pub fn with_scroller(
        scroller: TestScroller,
        options: HeadroomOptions,
        capabilities: Capabilities,
    ) -> Self {
        let scroller = Rc::new(scroller);
        let target = Rc::new(TestClassList::new());
        let host = Rc::new(ManualHost::new());
        let header = ScrollHeader::new(
            Rc::clone(&target),
            Rc::clone(&scroller),
            Rc::clone(&host),
            options,
            capabilities,
        );
        Self {
            scroller,
            target,
            host,
            header,
        }
    }

    /// Runs `init`, lets the attach delay elapse and delivers the first frame.
    pub fn init_and_attach(&mut self) {
        self.header.init();
        self.host.advance(INIT_DELAY);
        self.await_idle();
    }

    /// Scrolls and delivers the resulting frame.
    pub fn scroll_to(&mut self, offset: i32) {
        self.scroller.scroll_to(offset);
        self.await_idle();
    }

    /// Delivers frames until none are pending.
    pub fn await_idle(&mut self) {
        let mut i = 0;
        while self.host.pending_frames() > 0 {
            self.host.run_frame();
            i += 1;
            if i > 100 {
                panic!("Frames failed to settle after 100 rounds");
            }
        }
    }

    pub fn header(&self) -> &TestScrollHeader {
        &self.header
    }

    pub fn scroller(&self) -> &TestScroller {
        &self.scroller
    }

    pub fn target(&self) -> &TestClassList {
        &self.target
    }

    pub fn host(&self) -> &ManualHost {
        &self.host
    }

    pub fn state(&self) -> HeaderState {
        self.header.state()
    }

    pub fn assert_has_class(&self, class: &str) {
        assert!(
            self.target.contains(class),
            "expected class {:?}, target has {:?}",
            class,
            self.target.classes()
        );
    }

    pub fn assert_lacks_class(&self, class: &str) {
        assert!(
            !self.target.contains(class),
            "unexpected class {:?}, target has {:?}",
            class,
            self.target.classes()
        );
    }
}

impl Default for HeadroomTestRule {
    fn default() -> Self {
        Self::new(HeadroomOptions::default())
    }
}
