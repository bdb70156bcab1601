//! Grid tile presentation and activation rules.

use crate::types::ProjectRecord;

/// `rel` attribute of tile links.
pub const TILE_LINK_REL: &str = "noopener noreferrer nofollow";

/// Where a tile is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilePhase {
    /// Placeholder inserted, cover not requested yet
    Placeholder,
    /// Cover requested, waiting for load/error
    Loading,
    /// Cover loaded, tile fully shown
    Loaded,
}

/// Class list for a tile: `tile tile--<size> is-loading|is-loaded`.
pub fn tile_class(record: &ProjectRecord, phase: TilePhase) -> String {
    let mut classes = vec!["tile".to_string()];
    if let Some(modifier) = record.size.css_modifier() {
        classes.push(modifier);
    }
    classes.push(
        match phase {
            TilePhase::Loaded => "is-loaded",
            TilePhase::Placeholder | TilePhase::Loading => "is-loading",
        }
        .to_string(),
    );
    classes.join(" ")
}

/// What a click on a tile should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileActivation {
    /// Prevent navigation and open the lightbox.
    OpenLightbox,
    /// Let the browser follow the link (new tab / window).
    FollowLink,
}

/// Pointer state of a tile click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickModifiers {
    /// Whether the main (usually left) button was used
    pub primary_button: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl ClickModifiers {
    pub fn plain() -> Self {
        Self {
            primary_button: true,
            ..Default::default()
        }
    }
}

/// Plain primary clicks open the lightbox; anything that asks for a new
/// context falls through to the link.
pub fn activation_for(modifiers: ClickModifiers) -> TileActivation {
    let new_context = modifiers.ctrl || modifiers.meta || modifiers.shift || modifiers.alt;
    if modifiers.primary_button && !new_context {
        TileActivation::OpenLightbox
    } else {
        TileActivation::FollowLink
    }
}
