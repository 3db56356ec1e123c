use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong on the page. None of it is fatal: browser
/// failures switch off an enhancement and index errors leave state untouched.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("failed to create intersection observer: {0}")]
    Observer(String),

    #[error("image index {index} is out of range for {len} images")]
    ImageIndexOutOfRange { index: usize, len: usize },

    #[error("bundled site configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),
}

impl SiteError {
    pub fn observer(value: JsValue) -> Self {
        SiteError::Observer(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
