//! Location fragment binding: `#gallery/<category>`.
//!
//! Older links carried a trailing brand segment (`#gallery/web/acme`); it is
//! accepted and ignored.

use crate::filter::{CategoryCatalog, CategorySelection};
use crate::types::ProjectRecord;

/// Default section name in the fragment.
pub const GALLERY_SECTION: &str = "gallery";

/// Result of matching a fragment against the gallery section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRoute {
    /// Requested category slug, if the fragment named one.
    pub category: Option<String>,
}

/// Match `hash` (with or without the leading `#`) against `section`.
///
/// Returns `None` when the fragment points somewhere else or is malformed.
pub fn parse_fragment(hash: &str, section: &str) -> Option<GalleryRoute> {
    let body = hash.strip_prefix('#').unwrap_or(hash);
    let mut segments = body.split('/');

    let head = segments.next()?;
    if !head.eq_ignore_ascii_case(section) {
        return None;
    }

    let category = match segments.next() {
        None => None,
        Some(cat) if is_segment(cat) => Some(cat.to_string()),
        Some(_) => return None,
    };

    match segments.next() {
        None => {}
        Some(brand) if is_segment(brand) && category.is_some() => {}
        Some(_) => return None,
    }

    if segments.next().is_some() {
        return None;
    }

    Some(GalleryRoute { category })
}

/// Fragment for `selection`: `#gallery` for all, `#gallery/<slug>` otherwise.
pub fn format_fragment(section: &str, selection: &CategorySelection) -> String {
    match selection {
        CategorySelection::All => format!("#{}", section),
        CategorySelection::Category(slug) => format!("#{}/{}", section, slug),
    }
}

/// Selection a page load (or an external `hashchange`) should apply.
pub fn selection_from_fragment(
    hash: &str,
    section: &str,
    catalog: &CategoryCatalog,
    records: &[ProjectRecord],
) -> CategorySelection {
    let requested = parse_fragment(hash, section).and_then(|route| route.category);
    catalog.resolve(requested.as_deref(), records)
}

/// New fragment to write after the user picks `selection`, or `None` when the
/// current one already says the same thing.
pub fn fragment_update(
    current: &str,
    section: &str,
    selection: &CategorySelection,
) -> Option<String> {
    let next = format_fragment(section, selection);
    (current != next).then_some(next)
}

fn is_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
}
