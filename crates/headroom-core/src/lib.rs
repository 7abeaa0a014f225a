//! Scroll-direction-aware header show/hide behavior.
//!
//! The header is *pinned* (shown) while scrolling up or near the top and
//! *unpinned* (hidden) while scrolling down. Top and bottom of the scroller are
//! tracked independently. Every state is mirrored as a CSS class on the target
//! element and reported to optional hooks.
//!
//! The crate has no DOM dependency: hosts implement [`Scroller`],
//! [`ClassList`] and [`FrameHost`].

pub mod capabilities;
pub mod debouncer;
pub mod headroom;
pub mod host;
pub mod options;
pub mod scroll_header;

pub use capabilities::Capabilities;
pub use debouncer::Debouncer;
pub use headroom::{HeaderState, Headroom, PinState, Transition, Transitions};
pub use host::{ClassList, FrameHost, ScrollMetrics, Scroller};
pub use options::{
    Callbacks, ClassNames, HeadroomOptions, Hook, ScrollDirection, Tolerance, DEFAULT_OFFSET,
};
pub use scroll_header::{ScrollHeader, INIT_DELAY};

pub mod prelude {
    pub use crate::{
        Capabilities, ClassList, ClassNames, FrameHost, HeadroomOptions, ScrollHeader,
        ScrollMetrics, Scroller, Tolerance,
    };
}
