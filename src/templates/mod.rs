//! Message templates
//!
//! Templates come from a remote JSON document:
//!
//! ```json
//! { "templates": [ { "title": "Welcome", "message": "Hi, welcome to ..." } ] }
//! ```

pub mod loader;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A named snippet that can be inserted into a field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Template {
    pub title: String,
    pub message: String,
}

impl Template {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Top-level shape of the templates document
#[derive(Debug, Clone, Deserialize)]
struct TemplateDocument {
    templates: Vec<Template>,
}

/// Parse the templates document
pub fn parse_templates(json: &str) -> Result<Vec<Template>> {
    let document: TemplateDocument = serde_json::from_str(json)?;
    Ok(document.templates)
}

/// Case-insensitive title order, exact title as tie-breaker
pub fn compare_titles(a: &Template, b: &Template) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}

/// Sort templates for display
pub fn sort_templates(templates: &mut [Template]) {
    templates.sort_by(compare_titles);
}

/// Sorted copy of `templates`
pub fn sorted(templates: &[Template]) -> Vec<Template> {
    let mut sorted = templates.to_vec();
    sort_templates(&mut sorted);
    sorted
}
