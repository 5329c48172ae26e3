use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("failed to create surface: {0}")]
    Surface(String),
    #[error("no suitable GPU adapter found")]
    Adapter,
    #[error("failed to create device: {0}")]
    Device(String),
    #[error("surface reports no texture formats")]
    NoSurfaceFormat,
    #[error("failed to acquire frame: {0}")]
    Frame(String),
    #[error("audio unavailable: {0}")]
    Audio(String),
}

impl ClientError {
    /// Wrap a thrown JS value from a DOM call
    pub fn dom(err: JsValue) -> Self {
        ClientError::Dom(describe(&err))
    }

    pub fn audio(err: JsValue) -> Self {
        ClientError::Audio(describe(&err))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
