use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebPlatformError {
    NoWindow,
    NoDocument,
    /// A value passed from JS was not the expected DOM type.
    NotAnElement(String),
    /// A DOM call threw.
    Js(String),
}

impl fmt::Display for WebPlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebPlatformError::NoWindow => write!(f, "no global window"),
            WebPlatformError::NoDocument => write!(f, "window has no document"),
            WebPlatformError::NotAnElement(what) => write!(f, "{} is not an element", what),
            WebPlatformError::Js(message) => write!(f, "javascript error: {}", message),
        }
    }
}

impl std::error::Error for WebPlatformError {}

impl From<JsValue> for WebPlatformError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        WebPlatformError::Js(message)
    }
}

impl From<WebPlatformError> for JsValue {
    fn from(error: WebPlatformError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(WebPlatformError::NoWindow.to_string(), "no global window");
        assert_eq!(
            WebPlatformError::NoDocument.to_string(),
            "window has no document"
        );
        assert_eq!(
            WebPlatformError::NotAnElement("scroller".into()).to_string(),
            "scroller is not an element"
        );
    }
}
