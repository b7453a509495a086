//! Toolbox configuration
//!
//! Every field has a default, so JavaScript callers only pass what they want to
//! override:
//!
//! ```js
//! startToolbox({ templatesUrl: "https://example.org/templates.json", editorId: "editor" });
//! ```

use serde::{Deserialize, Serialize};

/// localStorage keys for the persisted panel position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionKeys {
    pub x: String,
    pub y: String,
}

impl Default for PositionKeys {
    fn default() -> Self {
        Self {
            x: "toolboxPosX".to_string(),
            y: "toolboxPosY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolboxConfig {
    /// JSON document with the templates
    pub templates_url: String,
    /// Id of the host page's primary editor textarea
    pub editor_id: String,
    /// Id given to the panel element
    pub panel_id: String,
    /// Heading shown in the panel header
    pub panel_title: String,
    /// Optional "Source" link in the header
    pub source_url: Option<String>,
    /// Page URL wildcard patterns (`*` matches anything); empty matches every page
    pub match_patterns: Vec<String>,
    pub position_keys: PositionKeys,
    /// Delay before the clicked field is focused again
    pub refocus_delay_ms: i32,
}

impl Default for ToolboxConfig {
    fn default() -> Self {
        Self {
            templates_url:
                "https://raw.githubusercontent.com/Lauloque/BSE-Toolbox/main/templates.json"
                    .to_string(),
            editor_id: "wmd-input".to_string(),
            panel_id: "toolbox-panel".to_string(),
            panel_title: "Toolbox".to_string(),
            source_url: None,
            match_patterns: vec![
                "*blender.stackexchange.com/questions/*/*".to_string(),
                "*blender.meta.stackexchange.com/questions/*/*".to_string(),
            ],
            position_keys: PositionKeys::default(),
            refocus_delay_ms: 10,
        }
    }
}

impl ToolboxConfig {
    /// Id of the scrollable template list inside the panel
    pub fn content_id(&self) -> String {
        format!("{}-content", self.panel_id)
    }

    /// Id of the injected `<style>` element
    pub fn style_id(&self) -> String {
        format!("{}-style", self.panel_id)
    }
}
