//! Shared helpers for the WASM API
//!
//! Conversions between JavaScript values and toolbox types, with logging on
//! failure.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::ToolboxConfig;
use crate::error::{Result, ToolboxError};

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = ToolboxError::Config(format!("{}: {}", error_context, e));
        log::error!("[toolbox] {}", err);
        err
    })
}

/// Serialize a value to JavaScript
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let err = ToolboxError::Dom(format!("{}: {}", error_context, e));
        log::error!("[toolbox] {}", err);
        err
    })
}

// ============================================================================
// Configuration
// ============================================================================

/// Read a config object; `undefined`/`null` means all defaults
pub fn config_from_js(value: JsValue) -> Result<ToolboxConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(ToolboxConfig::default());
    }
    deserialize(value, "Invalid toolbox config")
}
