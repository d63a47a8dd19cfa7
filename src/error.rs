//! Error types for page setup

use thiserror::Error;

/// Errors raised while wiring the page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// No `window` global (not running in a browser)
    #[error("no window available")]
    NoWindow,

    /// Window without a document
    #[error("no document available")]
    NoDocument,

    /// The host page lacks an element the controller needs
    #[error("missing element #{id}")]
    MissingElement {
        /// Element id looked up
        id: &'static str,
    },

    /// The element exists but is not of the expected kind
    #[error("element #{id} is not a {expected}")]
    WrongElement {
        /// Element id looked up
        id: &'static str,
        /// Expected element interface
        expected: &'static str,
    },

    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for NavError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        NavError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Result type alias for page setup
pub type Result<T> = std::result::Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message_names_id() {
        let err = NavError::MissingElement { id: "page-title" };
        assert_eq!(err.to_string(), "missing element #page-title");
    }

    #[test]
    fn test_wrong_element_message() {
        let err = NavError::WrongElement {
            id: "btn-forward",
            expected: "button",
        };
        assert_eq!(err.to_string(), "element #btn-forward is not a button");
    }
}
