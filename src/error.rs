use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub(crate) enum DomError {
    #[error("window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("element matching `{0}` is not an html element")]
    NotHtmlElement(String),
    #[error("slide track `{0}` has no slides")]
    EmptyTrack(String),
    #[error("js operation failed: {0}")]
    Js(String),
}

pub(crate) fn js_err(error: JsValue) -> DomError {
    if let Some(value) = error.as_string() {
        return DomError::Js(value);
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return DomError::Js(value);
        }
    }
    DomError::Js("js error".to_string())
}
