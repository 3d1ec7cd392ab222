/// Editor configuration passed in by the host page
use serde::{Deserialize, Serialize};
use url::Url;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

fn default_table() -> String {
    "domain_listings".to_string()
}

fn default_bucket() -> String {
    "listing-screenshots".to_string()
}

fn default_has_attachments() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Project url, e.g. "https://abcd.supabase.co"
    pub supabase_url: String,

    /// Public (anon) API key
    pub anon_key: String,

    /// Table that receives one row per submission
    #[serde(default = "default_table")]
    pub table: String,

    /// Storage bucket for screenshots
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Enables the screenshot picker and the backlink counter
    #[serde(default = "default_has_attachments")]
    pub has_attachments: bool,
}

impl EditorConfig {
    /// Parse the object handed to `start_editor`
    pub fn from_js(value: JsValue) -> Result<EditorConfig, ConfigError> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validated()
    }

    /// Check required values and normalise the project url
    pub fn validated(mut self) -> Result<EditorConfig, ConfigError> {
        if self.supabase_url.trim().is_empty() {
            return Err(ConfigError::Missing("supabase_url"));
        }
        if self.anon_key.trim().is_empty() {
            return Err(ConfigError::Missing("anon_key"));
        }
        if self.table.trim().is_empty() {
            return Err(ConfigError::Missing("table"));
        }
        if self.has_attachments && self.bucket.trim().is_empty() {
            return Err(ConfigError::Missing("bucket"));
        }

        let parsed = Url::parse(self.supabase_url.trim())
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", self.supabase_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(self.supabase_url));
        }

        self.supabase_url = parsed.as_str().trim_end_matches('/').to_string();
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> Result<EditorConfig, ConfigError> {
        serde_json::from_value::<EditorConfig>(json)
            .map_err(|e| ConfigError::Parse(e.to_string()))?
            .validated()
    }

    #[test]
    fn test_defaults_applied() {
        let config = parse(serde_json::json!({
            "supabase_url": "https://abcd.supabase.co/",
            "anon_key": "anon",
        }))
        .unwrap();

        assert_eq!(config.supabase_url, "https://abcd.supabase.co");
        assert_eq!(config.table, "domain_listings");
        assert_eq!(config.bucket, "listing-screenshots");
        assert!(config.has_attachments);
    }

    #[test]
    fn test_basic_variant() {
        let config = parse(serde_json::json!({
            "supabase_url": "https://abcd.supabase.co",
            "anon_key": "anon",
            "has_attachments": false,
            "bucket": "",
        }))
        .unwrap();

        assert!(!config.has_attachments);
    }

    #[test]
    fn test_missing_key() {
        let result = parse(serde_json::json!({
            "supabase_url": "https://abcd.supabase.co",
            "anon_key": "  ",
        }));

        assert_eq!(result, Err(ConfigError::Missing("anon_key")));
    }

    #[test]
    fn test_invalid_url() {
        let result = parse(serde_json::json!({
            "supabase_url": "not a url",
            "anon_key": "anon",
        }));
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));

        let result = parse(serde_json::json!({
            "supabase_url": "ftp://abcd.supabase.co",
            "anon_key": "anon",
        }));
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }
}
