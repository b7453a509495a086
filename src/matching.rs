//! Page URL matching
//!
//! Patterns are userscript-style wildcards: `*` matches any run of characters,
//! everything else is literal, and the whole URL must match.

use regex::Regex;

use crate::error::{Result, ToolboxError};

#[derive(Debug, Clone)]
pub struct UrlPattern {
    regex: Regex,
}

impl UrlPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let body = pattern
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^{}$", body))
            .map_err(|e| ToolboxError::Config(format!("bad match pattern '{}': {}", pattern, e)))?;
        Ok(Self { regex })
    }

    pub fn matches(&self, url: &str) -> bool {
        self.regex.is_match(url)
    }
}

/// Compiled set of patterns; an empty set matches every page
#[derive(Debug, Clone, Default)]
pub struct PageMatcher {
    patterns: Vec<UrlPattern>,
}

impl PageMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| UrlPattern::new(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn matches(&self, url: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|p| p.matches(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcards_span_any_text() {
        let pattern = UrlPattern::new("*blender.stackexchange.com/questions/*/*").unwrap();
        assert!(pattern.matches("https://blender.stackexchange.com/questions/1234/how-to-bake"));
        assert!(pattern.matches("https://blender.stackexchange.com/questions/1234/how/deep"));
        assert!(!pattern.matches("https://blender.stackexchange.com/questions/1234"));
        assert!(!pattern.matches("https://blender.stackexchange.com/users/1/name"));
    }

    #[test]
    fn test_literal_characters_are_escaped() {
        let pattern = UrlPattern::new("https://a.b/?q=*").unwrap();
        assert!(pattern.matches("https://a.b/?q=rust"));
        assert!(!pattern.matches("https://aXb/?q=rust"));
    }

    #[test]
    fn test_matcher_any_pattern() {
        let matcher = PageMatcher::new(&["*a.com/*", "*b.com/*"]).unwrap();
        assert!(matcher.matches("https://b.com/x"));
        assert!(!matcher.matches("https://c.com/x"));
    }

    #[test]
    fn test_empty_matcher_matches_everything() {
        let matcher = PageMatcher::new::<&str>(&[]).unwrap();
        assert!(matcher.matches("https://anything.example/"));
    }
}
