//! Remote template loading
//!
//! One-shot fetch through `window.fetch`. There is no retry: on failure the
//! caller logs the error and the panel is simply never populated.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::{parse_templates, Template};
use crate::error::{describe_js, Result, ToolboxError};

/// Fetch and parse the templates document at `url`
pub async fn fetch_templates(url: &str) -> Result<Vec<Template>> {
    let window = web_sys::window().ok_or_else(|| ToolboxError::Fetch("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ToolboxError::Fetch(describe_js(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ToolboxError::Fetch(describe_js(&e)))?;

    if !response.ok() {
        return Err(ToolboxError::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let body = response
        .text()
        .map_err(|e| ToolboxError::Fetch(describe_js(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| ToolboxError::Fetch(describe_js(&e)))?;
    let body = body
        .as_string()
        .ok_or_else(|| ToolboxError::Parse("response body is not text".to_string()))?;

    parse_templates(&body)
}
