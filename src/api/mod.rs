//! Toolbox WASM API
//!
//! JavaScript-facing entry points. Everything here converts between JS values
//! and the toolbox types and delegates to [`crate::runtime::Toolbox`].
//!
//! ```js
//! const toolbox = startToolbox({ editorId: "wmd-input" });
//! toolbox.insertText("Thanks for your answer!");
//! ```

pub mod helpers;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::matching::PageMatcher;
use crate::runtime::Toolbox;
use crate::templates::{sorted, Template};
use helpers::{config_from_js, deserialize, serialize};

/// Handle to a running toolbox
#[wasm_bindgen]
pub struct ToolboxHandle {
    inner: Rc<Toolbox>,
}

#[wasm_bindgen]
impl ToolboxHandle {
    /// Insert `text` into the active field; `false` when there is none
    #[wasm_bindgen(js_name = insertText)]
    pub fn insert_text(&self, text: &str) -> bool {
        self.inner.insert(text).is_some()
    }

    /// Replace the templates (e.g. loaded by the page itself)
    #[wasm_bindgen(js_name = setTemplates)]
    pub fn set_templates(&self, templates: JsValue) -> Result<(), JsValue> {
        let templates: Vec<Template> = deserialize(templates, "Invalid templates")?;
        self.inner.set_templates(templates);
        Ok(())
    }

    /// Template titles in display order
    #[wasm_bindgen(js_name = templateTitles)]
    pub fn template_titles(&self) -> Result<JsValue, JsValue> {
        let titles: Vec<String> = self
            .inner
            .templates()
            .map(|templates| sorted(&templates).into_iter().map(|t| t.title).collect())
            .unwrap_or_default();
        Ok(serialize(&titles, "Serialization error")?)
    }

    /// Build the panel if it is missing
    #[wasm_bindgen(js_name = ensurePanel)]
    pub fn ensure_panel(&self) -> Result<(), JsValue> {
        self.inner.ensure_panel()?;
        Ok(())
    }
}

/// Start the toolbox on this page
///
/// `config` may be omitted; missing fields take their defaults. Returns
/// `undefined` when the page URL does not match the configured patterns.
#[wasm_bindgen(js_name = startToolbox)]
pub fn start_toolbox(config: JsValue) -> Result<Option<ToolboxHandle>, JsValue> {
    let config = config_from_js(config)?;

    let matcher = PageMatcher::new(&config.match_patterns)?;
    let url = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    if !matcher.matches(&url) {
        log::debug!("[toolbox] page {} does not match, not starting", url);
        return Ok(None);
    }

    let inner = Toolbox::start(config)?;
    Ok(Some(ToolboxHandle { inner }))
}
