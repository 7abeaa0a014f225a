//! One-time host capability check.
//!
//! A host that cannot bind callbacks, edit class lists or schedule animation
//! frames gets an inert widget instead of an unthrottled one.

/// Primitives the widget depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub function_bind: bool,
    pub class_list: bool,
    pub animation_frame: bool,
}

impl Capabilities {
    /// Every primitive present.
    pub const fn all() -> Self {
        Self {
            function_bind: true,
            class_list: true,
            animation_frame: true,
        }
    }

    /// Nothing present.
    pub const fn none() -> Self {
        Self {
            function_bind: false,
            class_list: false,
            animation_frame: false,
        }
    }

    /// True when the widget may attach and mutate state.
    pub const fn cuts_the_mustard(&self) -> bool {
        self.function_bind && self.class_list && self.animation_frame
    }

    /// Names of the missing primitives, for diagnostics.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.function_bind {
            missing.push("Function.prototype.bind");
        }
        if !self.class_list {
            missing.push("Element.classList");
        }
        if !self.animation_frame {
            missing.push("requestAnimationFrame");
        }
        missing
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_missing_primitive_fails_the_gate() {
        assert!(Capabilities::all().cuts_the_mustard());
        let no_frames = Capabilities {
            animation_frame: false,
            ..Capabilities::all()
        };
        assert!(!no_frames.cuts_the_mustard());
        assert_eq!(no_frames.missing(), vec!["requestAnimationFrame"]);
        assert_eq!(Capabilities::none().missing().len(), 3);
    }
}
