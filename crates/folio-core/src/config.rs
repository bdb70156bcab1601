//! Site configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::SWIPE_THRESHOLD_PX;
use crate::error::{GalleryError, GalleryResult};
use crate::filter::CategoryCatalog;
use crate::fragment::GALLERY_SECTION;
use crate::loader::DEFAULT_PACING;

/// Query parameter that keeps hidden projects in the gallery.
pub const PREVIEW_HIDDEN_PARAM: &str = "previewHidden";

/// Default location of the project list, relative to the site root.
pub const DEFAULT_DATA_URL: &str = "data/projects.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Project list location (absolute, or relative to the page origin)
    pub data_url: String,
    /// Fragment section bound to the gallery filter
    pub section: String,
    /// Pause between two tiles of the cascade
    pub pacing_ms: u64,
    /// Horizontal drag distance that counts as a lightbox swipe
    pub swipe_threshold_px: f64,
    /// Keep projects marked `visible: false`
    pub include_hidden: bool,
    /// Filter chip labels
    pub categories: CategoryCatalog,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            section: GALLERY_SECTION.to_string(),
            pacing_ms: DEFAULT_PACING.as_millis() as u64,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            include_hidden: false,
            categories: CategoryCatalog::default(),
        }
    }
}

impl SiteConfig {
    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }

    /// Apply overrides from a page query string (`?previewHidden=1`).
    /// Only the presence of the parameter matters.
    pub fn with_query(mut self, search: &str) -> Self {
        if query_has(search, PREVIEW_HIDDEN_PARAM) {
            self.include_hidden = true;
        }
        self
    }

    /// Absolute URL of the project list for a page served from `base`.
    pub fn resolve_data_url(&self, base: &str) -> GalleryResult<String> {
        if self.data_url.starts_with("http://") || self.data_url.starts_with("https://") {
            return Ok(self.data_url.clone());
        }
        let mut base = reqwest::Url::parse(base)
            .map_err(|e| GalleryError::Fetch(format!("invalid base url '{}': {}", base, e)))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(self.data_url.trim_start_matches('/'))
            .map(|url| url.to_string())
            .map_err(|e| GalleryError::Fetch(format!("invalid data url '{}': {}", self.data_url, e)))
    }
}

fn query_has(search: &str, param: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .any(|pair| pair.split('=').next() == Some(param))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.pacing(), Duration::from_millis(120));
        assert_eq!(config.section, "gallery");
        assert!(!config.include_hidden);
    }

    #[test]
    fn test_preview_hidden_presence() {
        assert!(SiteConfig::default().with_query("?previewHidden").include_hidden);
        assert!(SiteConfig::default().with_query("?a=1&previewHidden=0").include_hidden);
        assert!(!SiteConfig::default().with_query("?previewHiddenX=1").include_hidden);
        assert!(!SiteConfig::default().with_query("").include_hidden);
    }

    #[test]
    fn test_resolve_data_url() {
        let config = SiteConfig::default();
        assert_eq!(
            config.resolve_data_url("https://example.com").unwrap(),
            "https://example.com/data/projects.json"
        );
        assert_eq!(
            config.resolve_data_url("https://example.com/portfolio").unwrap(),
            "https://example.com/portfolio/data/projects.json"
        );

        let absolute = SiteConfig {
            data_url: "https://cdn.example.com/p.json".into(),
            ..SiteConfig::default()
        };
        assert_eq!(
            absolute.resolve_data_url("not a url").unwrap(),
            "https://cdn.example.com/p.json"
        );
    }

    #[test]
    fn test_partial_config_deserializes() {
        let config: SiteConfig = serde_json::from_str(r#"{"pacing_ms": 80}"#).unwrap();
        assert_eq!(config.pacing_ms, 80);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }
}
