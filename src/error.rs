//! Error types for the toolbox
//!
//! Nothing here is ever shown to the user. Errors are logged at the point where
//! they stop propagating and the toolbox degrades to doing nothing visible.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Toolbox error hierarchy
#[derive(Debug, Clone, Error)]
pub enum ToolboxError {
    /// Network failure while fetching templates
    #[error("Template fetch failed: {0}")]
    Fetch(String),

    /// Template server answered with a non-success status
    #[error("Template fetch returned HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Template document is not the expected JSON shape
    #[error("Template document is malformed: {0}")]
    Parse(String),

    /// A DOM call failed (element creation, listener registration, ...)
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Position store could not be read or written
    #[error("Position storage unavailable: {0}")]
    Storage(String),

    /// Configuration passed from JavaScript could not be read
    #[error("Invalid toolbox configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ToolboxError>;

impl From<serde_json::Error> for ToolboxError {
    fn from(err: serde_json::Error) -> Self {
        ToolboxError::Parse(err.to_string())
    }
}

impl From<ToolboxError> for JsValue {
    fn from(err: ToolboxError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Describe a JS exception value
///
/// Thrown values are usually `Error` objects whose string form is only
/// reachable through `toString()`, so fall back to the debug form.
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Map a failed `web-sys` call into a DOM error
pub fn dom_err(value: JsValue) -> ToolboxError {
    ToolboxError::Dom(describe_js(&value))
}
