//! Web platform adapter for headroom.
//!
//! Implements the `headroom-core` host traits over `web-sys` and exposes a
//! `Headroom` class to JavaScript.

pub mod bindings;
pub mod capabilities;
pub mod class_list;
pub mod error;
pub mod host;
pub mod options;
pub mod scroller;

pub use class_list::DomClassList;
pub use error::WebPlatformError;
pub use host::WindowHost;
pub use options::options_from_js;
pub use scroller::{DomScroller, ScrollTarget};

use headroom_core::{HeadroomOptions, ScrollHeader};
use std::rc::Rc;
use web_sys::Element;

pub type WebScrollHeader = ScrollHeader<DomScroller, DomClassList, WindowHost>;

/// Builds a widget for `target`. Call `init` on the result to start it.
pub fn mount(
    target: Element,
    scroll_target: ScrollTarget,
    options: HeadroomOptions,
) -> Result<WebScrollHeader, WebPlatformError> {
    let scroller = Rc::new(DomScroller::new(scroll_target)?);
    let host = Rc::new(WindowHost::new()?);
    Ok(ScrollHeader::new(
        DomClassList::new(target),
        scroller,
        host,
        options,
        capabilities::detect(),
    ))
}
