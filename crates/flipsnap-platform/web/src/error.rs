use flipsnap_ui::CarouselError;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum WebError {
    Carousel(CarouselError),
    /// No `window` or `document` in this context.
    NoGlobal(&'static str),
    /// A DOM call failed.
    Js(String),
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebError::Carousel(error) => write!(f, "{error}"),
            WebError::NoGlobal(name) => write!(f, "no global `{name}` exists"),
            WebError::Js(message) => write!(f, "DOM call failed: {message}"),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Carousel(error) => Some(error),
            _ => None,
        }
    }
}

impl From<CarouselError> for WebError {
    fn from(error: CarouselError) -> Self {
        WebError::Carousel(error)
    }
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(describe(&value))
    }
}

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Log a failed DOM call. The host traits are infallible.
pub(crate) fn warn_on_error<T>(context: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            log::warn!("{context}: {}", describe(&error));
            None
        }
    }
}
