//! Folio Core Library
//!
//! Platform-independent logic behind the portfolio gallery.
//!
//! ## Overview
//!
//! The gallery fetches a list of projects, lets visitors filter it by
//! category, and reveals the grid one cover at a time. Clicking a tile opens
//! a lightbox carousel over the project's images and videos.
//!
//! ```text
//! ProjectStore ──▶ filter / layout_order ──▶ TileCascade ──▶ grid
//!                                                              │ tile click
//!                                                              ▼
//!                                                        CarouselState
//! ```
//!
//! - [`store`]: fetch and normalize `projects.json`
//! - [`filter`] and [`fragment`]: category selection and `#gallery/<cat>` links
//! - [`session`]: generation tokens that cancel superseded work
//! - [`loader`]: the paced, strictly ordered tile cascade
//! - [`carousel`]: lightbox navigation, stale-load detection, focus trap
//!
//! Nothing in this crate depends on a browser; the web app plugs the DOM in
//! through [`loader::TileHost`] and the store's [`store::ProjectSource`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{apply_filter, layout_order, CategorySelection, ProjectStore, HttpSource};
//!
//! let store = ProjectStore::new(HttpSource::new("https://example.com/data/projects.json"));
//! let records = store.load().await?;
//! let visible = layout_order(apply_filter(&records, &CategorySelection::from_slug("web")));
//!
//! let session = registry.begin();
//! let outcome = TileCascade::default().run(&session, &visible, &mut host).await;
//! ```

pub mod carousel;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod fragment;
pub mod loader;
pub mod session;
pub mod store;
pub mod theme;
pub mod tile;
pub mod types;

// Re-exports
pub use carousel::{
    focus_trap_target, CarouselState, LightboxCommand, LightboxHeader, MediaStatus, RenderTicket,
    SwipeTracker, IMAGE_ERROR_MESSAGE, SWIPE_THRESHOLD_PX,
};
pub use config::SiteConfig;
pub use contact::{ContactError, ContactForm, ContactSubmission};
pub use error::{GalleryError, GalleryResult, MediaLoadError, GALLERY_UNAVAILABLE};
pub use filter::{
    apply_filter, categories_of, layout_order, CategoryCatalog, CategoryChip, CategoryLabel,
    CategorySelection, ALL_CATEGORIES,
};
pub use fragment::{format_fragment, parse_fragment, selection_from_fragment, GALLERY_SECTION};
pub use loader::{CascadeOutcome, CascadeReport, TileCascade, TileHost, DEFAULT_PACING};
pub use session::{LoadSession, SessionRegistry};
pub use store::{HttpSource, ProjectSource, ProjectStore, StaticSource};
pub use theme::Theme;
pub use tile::{activation_for, tile_class, ClickModifiers, TileActivation, TilePhase};
pub use types::*;
