//! Error type shared by the DOM binding and controller layers.

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element missing: {0}")]
    MissingElement(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    ConfigValue { field: &'static str, reason: &'static str },
}

impl FxError {
    /// Wrap a thrown `JsValue`, keeping its string form when it has one.
    #[must_use]
    pub fn js(value: &JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

pub type FxResult<T> = Result<T, FxError>;
