//! Error types for the Folio gallery

use thiserror::Error;

/// Message shown in place of the grid when the project list cannot be loaded.
pub const GALLERY_UNAVAILABLE: &str = "The gallery could not be loaded right now.";

/// Errors raised while loading the project list
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Resource unreachable or the transport failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Resource answered with a non-success status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Body is not a JSON array of project records
    #[error("Parse error: {0}")]
    Parse(String),

    /// Local file access (CLI sources)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GalleryError {
    /// Whether the failure happened before a body was received.
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            GalleryError::Fetch(_) | GalleryError::HttpStatus(_) | GalleryError::Io(_)
        )
    }

    /// Text to render instead of the grid. Every load failure collapses to
    /// the same message.
    pub fn user_message(&self) -> &'static str {
        GALLERY_UNAVAILABLE
    }
}

impl From<reqwest::Error> for GalleryError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => GalleryError::HttpStatus(status.as_u16()),
            None if err.is_decode() => GalleryError::Parse(err.to_string()),
            None => GalleryError::Fetch(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::Parse(err.to_string())
    }
}

/// A single cover or lightbox media item failed to load.
///
/// Always handled where the load was issued: the tile is dropped from the
/// grid, or the lightbox shows an inline message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Media failed to load: {src}")]
pub struct MediaLoadError {
    pub src: String,
}

impl MediaLoadError {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;
