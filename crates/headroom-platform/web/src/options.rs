//! Reading widget options from a plain JS object.
//!
//! Accepted shape (every field optional):
//!
//! ```js
//! {
//!   tolerance: 5,                 // or { up: 5, down: 10 }
//!   offset: 60,
//!   scroller: someElement,        // defaults to the window
//!   classes: { pinned: "is-pinned", notTop: "is-not-top", ... },
//!   onPin() {}, onUnpin() {}, onTop() {}, onNotTop() {}, onBottom() {}, onNotBottom() {},
//! }
//! ```
//!
//! Anything missing or of the wrong type falls back to the default.

use crate::scroller::ScrollTarget;
use headroom_core::{ClassNames, HeadroomOptions, Hook, Tolerance};
use js_sys::{Function, Reflect};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

pub fn options_from_js(value: &JsValue) -> HeadroomOptions {
    let mut options = HeadroomOptions::default();
    if !value.is_object() {
        return options;
    }

    if let Some(tolerance) = get(value, "tolerance") {
        options.tolerance = tolerance_from_js(&tolerance);
    }
    if let Some(offset) = get(value, "offset").and_then(|v| v.as_f64()).and_then(to_threshold) {
        options.offset = offset;
    }
    if let Some(classes) = get(value, "classes").filter(JsValue::is_object) {
        options = options.with_classes(classes_from_js(&classes));
    }

    let callbacks = &mut options.callbacks;
    callbacks.on_pin = hook(value, "onPin");
    callbacks.on_unpin = hook(value, "onUnpin");
    callbacks.on_top = hook(value, "onTop");
    callbacks.on_not_top = hook(value, "onNotTop");
    callbacks.on_bottom = hook(value, "onBottom");
    callbacks.on_not_bottom = hook(value, "onNotBottom");

    options
}

/// The `scroller` field, if it names an element.
pub fn scroll_target_from_js(value: &JsValue) -> ScrollTarget {
    get(value, "scroller")
        .and_then(|scroller| scroller.dyn_into::<HtmlElement>().ok())
        .map(ScrollTarget::Element)
        .unwrap_or(ScrollTarget::Window)
}

/// The `tolerance` field before validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ToleranceInput {
    Number(f64),
    Sides { up: Option<f64>, down: Option<f64> },
    Other,
}

impl ToleranceInput {
    fn from_js(value: &JsValue) -> Self {
        if let Some(number) = value.as_f64() {
            return ToleranceInput::Number(number);
        }
        if value.is_object() {
            let side = |name| get(value, name).and_then(|v| v.as_f64());
            return ToleranceInput::Sides {
                up: side("up"),
                down: side("down"),
            };
        }
        ToleranceInput::Other
    }

    /// A missing or invalid side of a pair is 0; anything else invalid is the
    /// default.
    pub(crate) fn resolve(self) -> Tolerance {
        match self {
            ToleranceInput::Number(number) => to_threshold(number)
                .map(Tolerance::uniform)
                .unwrap_or_default(),
            ToleranceInput::Sides { up, down } => {
                let side = |value: Option<f64>| value.and_then(to_threshold).unwrap_or(0);
                Tolerance::new(side(up), side(down))
            }
            ToleranceInput::Other => Tolerance::default(),
        }
    }
}

fn tolerance_from_js(value: &JsValue) -> Tolerance {
    ToleranceInput::from_js(value).resolve()
}

fn classes_from_js(value: &JsValue) -> ClassNames {
    classes_from_lookup(|key| get(value, key).and_then(|v| v.as_string()))
}

/// Builds class names from a keyed lookup using the JS field names. Missing
/// names stay empty and are default-filled later.
pub(crate) fn classes_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClassNames {
    let name = |key: &str| lookup(key).unwrap_or_default();
    ClassNames {
        pinned: name("pinned"),
        unpinned: name("unpinned"),
        top: name("top"),
        not_top: name("notTop"),
        bottom: name("bottom"),
        not_bottom: name("notBottom"),
        initial: name("initial"),
    }
}

fn hook(value: &JsValue, key: &str) -> Option<Hook> {
    let function = get(value, key)?.dyn_into::<Function>().ok()?;
    let name = key.to_owned();
    Some(Rc::new(move || {
        if let Err(err) = function.call0(&JsValue::NULL) {
            log::warn!("headroom: {} threw: {:?}", name, err);
        }
    }))
}

fn get(value: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// A non-negative finite number as whole pixels.
pub(crate) fn to_threshold(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 0.0 {
        Some(value.min(u32::MAX as f64) as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{classes_from_lookup, to_threshold, ToleranceInput};
    use headroom_core::{ClassNames, Tolerance};

    #[test]
    fn thresholds_reject_negative_and_non_finite() {
        assert_eq!(to_threshold(12.9), Some(12));
        assert_eq!(to_threshold(0.0), Some(0));
        assert_eq!(to_threshold(-1.0), None);
        assert_eq!(to_threshold(f64::INFINITY), None);
        assert_eq!(to_threshold(f64::NAN), None);
    }

    #[test]
    fn number_tolerance_applies_to_both_directions() {
        assert_eq!(ToleranceInput::Number(8.0).resolve(), Tolerance::uniform(8));
        assert_eq!(ToleranceInput::Number(-3.0).resolve(), Tolerance::default());
    }

    #[test]
    fn tolerance_pair_defaults_missing_side_to_zero() {
        let pair = ToleranceInput::Sides {
            up: Some(5.0),
            down: Some(10.0),
        };
        assert_eq!(pair.resolve(), Tolerance::new(5, 10));

        let only_down = ToleranceInput::Sides {
            up: None,
            down: Some(10.0),
        };
        assert_eq!(only_down.resolve(), Tolerance::new(0, 10));

        let bad_up = ToleranceInput::Sides {
            up: Some(f64::NAN),
            down: None,
        };
        assert_eq!(bad_up.resolve(), Tolerance::new(0, 0));
        assert_eq!(ToleranceInput::Other.resolve(), Tolerance::default());
    }

    #[test]
    fn classes_read_camel_case_keys() {
        let classes = classes_from_lookup(|key| match key {
            "notTop" => Some("header--scrolled".to_owned()),
            "pinned" => Some("header--shown".to_owned()),
            _ => None,
        });

        assert_eq!(classes.not_top, "header--scrolled");
        assert_eq!(classes.pinned, "header--shown");
        assert!(classes.unpinned.is_empty());

        let filled = classes.normalized();
        assert_eq!(filled.unpinned, ClassNames::default().unpinned);
        assert_eq!(filled.not_top, "header--scrolled");
    }
}
