use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while wiring the modal into a page.
///
/// The controller itself never fails; these only come from binding elements,
/// reading embedded page data, or bad calls through the JS exports.
#[derive(Error, Debug)]
pub enum ModalError {
    #[error("no window or document available")]
    NoDocument,

    #[error("element #{0} not found on the page")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElementKind { id: String, expected: &'static str },

    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("modal not installed; call installModal() first")]
    NotInstalled,

    #[error("invalid JSON in #{id}: {source}")]
    InvalidJson {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type ModalResult<T> = Result<T, ModalError>;

impl From<ModalError> for JsValue {
    fn from(err: ModalError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
