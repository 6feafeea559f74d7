use wasm_bindgen::{JsError, JsValue};

/// Errors raised while binding classboard behaviors to a live document.
#[derive(thiserror::Error, Debug)]
pub enum WebError {
    #[error("no global `window` is available")]
    NoWindow,

    #[error("the window has no `document`")]
    NoDocument,

    /// `querySelectorAll` rejected the selector.
    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    /// The element's inline style rejected a property write.
    #[error("cannot set style {property:?}: {message}")]
    Style { property: String, message: String },

    /// The options passed from JavaScript do not describe a [`classboard_core::Config`].
    #[error("invalid page options: {0}")]
    Options(#[from] serde_wasm_bindgen::Error),
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}
