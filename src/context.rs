//! Page-wide context for the portfolio.
//!
//! The App provides three values; components pick them up with the hooks
//! below instead of threading props through the page.
//!
//! ## Usage
//!
//! ```ignore
//! // In a grid tile
//! let mut lightbox = use_lightbox_request();
//! lightbox.set(Some(record.clone()));
//! ```

use dioxus::prelude::*;
use folio_core::{ProjectRecord, SiteConfig, Theme};

/// Record the lightbox should open next.
///
/// Tiles write it, the lightbox reads it and clears it once handled. This is
/// the only coupling between the grid and the dialog.
#[derive(Clone, Copy)]
pub struct LightboxRequest(pub Signal<Option<ProjectRecord>>);

/// Site configuration, fixed for the lifetime of the page.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

/// Hook to the page-wide "open this project" signal.
pub fn use_lightbox_request() -> Signal<Option<ProjectRecord>> {
    use_context::<LightboxRequest>().0
}

/// Active colour theme.
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}
