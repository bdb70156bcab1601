//! Project store: fetches `projects.json` and normalizes it.
//!
//! The store performs exactly one request per [`ProjectStore::load`] call.
//! There is no retry; a failure is final for that page load.

use std::collections::HashSet;
use std::future::Future;

use reqwest::header::CACHE_CONTROL;
use serde_json::Value;

use crate::error::{GalleryError, GalleryResult};
use crate::types::ProjectRecord;

/// Where the raw project list comes from.
pub trait ProjectSource {
    /// Fetch the raw body of the project list.
    fn fetch(&self) -> impl Future<Output = GalleryResult<String>>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// GET over HTTP with caching disabled.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// `url` must be absolute (browsers resolve it against the page origin
    /// before it gets here).
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl ProjectSource for HttpSource {
    async fn fetch(&self) -> GalleryResult<String> {
        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::HttpStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// An in-memory body; used for embedded data and tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl ProjectSource for StaticSource {
    async fn fetch(&self) -> GalleryResult<String> {
        Ok(self.body.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Loads project records from a [`ProjectSource`].
#[derive(Debug, Clone)]
pub struct ProjectStore<S> {
    source: S,
    include_hidden: bool,
}

impl<S: ProjectSource> ProjectStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            include_hidden: false,
        }
    }

    /// Keep records marked `visible: false` (the `previewHidden` override).
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Fetch, parse and filter the project list.
    pub async fn load(&self) -> GalleryResult<Vec<ProjectRecord>> {
        let body = self.source.fetch().await.map_err(|e| {
            tracing::error!(source = %self.source.describe(), error = %e, "Failed to fetch projects");
            e
        })?;

        let records = parse_projects(&body).map_err(|e| {
            tracing::error!(source = %self.source.describe(), error = %e, "Invalid project list");
            e
        })?;

        for id in duplicate_ids(&records) {
            tracing::warn!(id = %id, "Duplicate project id");
        }

        let total = records.len();
        let records = visible_records(records, self.include_hidden);
        tracing::info!(
            source = %self.source.describe(),
            total,
            shown = records.len(),
            include_hidden = self.include_hidden,
            "Loaded projects"
        );

        Ok(records)
    }
}

/// Parse a `projects.json` body. The top level must be an array and every
/// entry must be an object.
pub fn parse_projects(body: &str) -> GalleryResult<Vec<ProjectRecord>> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(entries) = value else {
        return Err(GalleryError::Parse(
            "expected an array of projects".to_string(),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                return Err(GalleryError::Parse(format!(
                    "project #{} is not an object",
                    index
                )));
            }
            serde_json::from_value(entry)
                .map_err(|e| GalleryError::Parse(format!("project #{}: {}", index, e)))
        })
        .collect()
}

/// Drop records with `visible: false` unless `include_hidden` is set.
pub fn visible_records(records: Vec<ProjectRecord>, include_hidden: bool) -> Vec<ProjectRecord> {
    if include_hidden {
        return records;
    }
    records.into_iter().filter(|r| r.visible).collect()
}

/// Identifiers that appear on more than one record, in first-repeat order.
pub fn duplicate_ids(records: &[ProjectRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for id in records.iter().filter_map(ProjectRecord::identifier) {
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.to_string());
        }
    }
    duplicates
}
