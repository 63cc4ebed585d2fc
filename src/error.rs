use thiserror::Error;

/// Failures surfaced while wiring widgets to the page.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Required element is absent from the rendered markup.
    #[error("missing element #{0}")]
    MissingElement(String),

    /// Element exists but is not the expected kind (e.g. not a media element).
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("element #{id} is not {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("browser call failed: {0}")]
    Dom(String),

    #[error("webview eval failed: {0}")]
    Eval(String),

    #[error("invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WidgetError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}
