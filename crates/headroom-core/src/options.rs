//! Widget configuration.
//!
//! [`HeadroomOptions`] is a plain struct with documented defaults. Missing
//! pieces are default-filled rather than rejected, so there is no validation
//! failure path.

use std::fmt;
use std::rc::Rc;

/// Scroll offset at or below which the header is always top and pinned.
pub const DEFAULT_OFFSET: u32 = 60;

/// Minimum scroll distance, per direction, before a pin/unpin is reconsidered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tolerance {
    pub up: u32,
    pub down: u32,
}

impl Tolerance {
    pub const fn new(up: u32, down: u32) -> Self {
        Self { up, down }
    }

    /// Same threshold in both directions.
    pub const fn uniform(value: u32) -> Self {
        Self {
            up: value,
            down: value,
        }
    }

    /// Threshold for the given direction.
    pub fn for_direction(&self, direction: ScrollDirection) -> u32 {
        match direction {
            ScrollDirection::Up => self.up,
            ScrollDirection::Down => self.down,
        }
    }
}

impl From<u32> for Tolerance {
    fn from(value: u32) -> Self {
        Self::uniform(value)
    }
}

impl From<(u32, u32)> for Tolerance {
    /// `(up, down)`
    fn from((up, down): (u32, u32)) -> Self {
        Self::new(up, down)
    }
}

/// Direction of the last scroll movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// CSS class names used to mark each state on the target element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassNames {
    pub pinned: String,
    pub unpinned: String,
    pub top: String,
    pub not_top: String,
    pub bottom: String,
    pub not_bottom: String,
    /// Added by `init` before the widget starts observing.
    pub initial: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            pinned: "is-pinned".into(),
            unpinned: "is-unpinned".into(),
            top: "is-top".into(),
            not_top: "is-not-top".into(),
            bottom: "is-bottom".into(),
            not_bottom: "is-not-bottom".into(),
            initial: "navbar".into(),
        }
    }
}

impl ClassNames {
    /// Replaces every empty name with its default.
    pub fn normalized(mut self) -> Self {
        let defaults = ClassNames::default();
        fill(&mut self.pinned, defaults.pinned);
        fill(&mut self.unpinned, defaults.unpinned);
        fill(&mut self.top, defaults.top);
        fill(&mut self.not_top, defaults.not_top);
        fill(&mut self.bottom, defaults.bottom);
        fill(&mut self.not_bottom, defaults.not_bottom);
        fill(&mut self.initial, defaults.initial);
        self
    }

    /// All seven names, in declaration order.
    pub fn all(&self) -> [&str; 7] {
        [
            self.pinned.as_str(),
            self.unpinned.as_str(),
            self.top.as_str(),
            self.not_top.as_str(),
            self.bottom.as_str(),
            self.not_bottom.as_str(),
            self.initial.as_str(),
        ]
    }
}

fn fill(name: &mut String, default: String) {
    if name.trim().is_empty() {
        *name = default;
    }
}

/// Shared, re-entrant callback hook.
pub type Hook = Rc<dyn Fn()>;

/// Optional user hooks, one per state a transition can enter.
#[derive(Clone, Default)]
pub struct Callbacks {
    pub on_pin: Option<Hook>,
    pub on_unpin: Option<Hook>,
    pub on_top: Option<Hook>,
    pub on_not_top: Option<Hook>,
    pub on_bottom: Option<Hook>,
    pub on_not_bottom: Option<Hook>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hook = |h: &Option<Hook>| h.as_ref().map(|_| "Some(...)");
        f.debug_struct("Callbacks")
            .field("on_pin", &hook(&self.on_pin))
            .field("on_unpin", &hook(&self.on_unpin))
            .field("on_top", &hook(&self.on_top))
            .field("on_not_top", &hook(&self.on_not_top))
            .field("on_bottom", &hook(&self.on_bottom))
            .field("on_not_bottom", &hook(&self.on_not_bottom))
            .finish()
    }
}

/// Configuration for a [`Headroom`](crate::Headroom).
///
/// # Example
///
/// ```
/// use headroom_core::{HeadroomOptions, Tolerance};
///
/// let options = HeadroomOptions::new()
///     .with_offset(120)
///     .with_tolerance(Tolerance::new(5, 10))
///     .on_unpin(|| println!("header hidden"));
/// assert_eq!(options.offset, 120);
/// ```
#[derive(Clone, Debug)]
pub struct HeadroomOptions {
    pub tolerance: Tolerance,
    pub offset: u32,
    pub classes: ClassNames,
    pub callbacks: Callbacks,
}

impl Default for HeadroomOptions {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            offset: DEFAULT_OFFSET,
            classes: ClassNames::default(),
            callbacks: Callbacks::default(),
        }
    }
}

impl HeadroomOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a single number (both directions) or a [`Tolerance`] pair.
    pub fn with_tolerance(mut self, tolerance: impl Into<Tolerance>) -> Self {
        self.tolerance = tolerance.into();
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Empty names in `classes` fall back to the defaults.
    pub fn with_classes(mut self, classes: ClassNames) -> Self {
        self.classes = classes.normalized();
        self
    }

    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn on_pin(mut self, hook: impl Fn() + 'static) -> Self {
        self.callbacks.on_pin = Some(Rc::new(hook));
        self
    }

    pub fn on_unpin(mut self, hook: impl Fn() + 'static) -> Self {
        self.callbacks.on_unpin = Some(Rc::new(hook));
        self
    }

    pub fn on_top(mut self, hook: impl Fn() + 'static) -> Self {
        self.callbacks.on_top = Some(Rc::new(hook));
        self
    }

    pub fn on_not_top(mut self, hook: impl Fn() + 'static) -> Self {
        self.callbacks.on_not_top = Some(Rc::new(hook));
        self
    }

    pub fn on_bottom(mut self, hook: impl Fn() + 'static) -> Self {
        self.callbacks.on_bottom = Some(Rc::new(hook));
        self
    }

    pub fn on_not_bottom(mut self, hook: impl Fn() + 'static) -> Self {
        self.callbacks.on_not_bottom = Some(Rc::new(hook));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_tolerance_applies_to_both_directions() {
        let options = HeadroomOptions::new().with_tolerance(7u32);
        assert_eq!(options.tolerance, Tolerance { up: 7, down: 7 });
        assert_eq!(options.tolerance.for_direction(ScrollDirection::Down), 7);
    }

    #[test]
    fn pair_tolerance_is_up_then_down() {
        let tolerance = Tolerance::from((3, 9));
        assert_eq!(tolerance.for_direction(ScrollDirection::Up), 3);
        assert_eq!(tolerance.for_direction(ScrollDirection::Down), 9);
    }

    #[test]
    fn empty_class_names_are_default_filled() {
        let options = HeadroomOptions::new().with_classes(ClassNames {
            pinned: "shown".into(),
            unpinned: String::new(),
            initial: "  ".into(),
            ..ClassNames::default()
        });
        assert_eq!(options.classes.pinned, "shown");
        assert_eq!(options.classes.unpinned, "is-unpinned");
        assert_eq!(options.classes.initial, "navbar");
    }

    #[test]
    fn defaults_match_documented_values() {
        let options = HeadroomOptions::default();
        assert_eq!(options.offset, 60);
        assert_eq!(options.tolerance, Tolerance::uniform(0));
        assert!(options.callbacks.on_pin.is_none());
        assert_eq!(options.classes.all().len(), 7);
    }
}
