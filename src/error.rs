use log::warn;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum LandingError {
    #[error("{context} failed: {message}")]
    Js { context: &'static str, message: String },
    #[error("invalid landing config: {0}")]
    Config(#[from] serde_json::Error),
}

impl LandingError {
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        LandingError::Js { context, message }
    }
}

/// Turns a failed JS call into a logged warning; the page keeps going.
pub trait JsResultExt<T> {
    fn or_log(self, context: &'static str) -> Option<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn or_log(self, context: &'static str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{}", LandingError::js(context, e));
                None
            }
        }
    }
}
