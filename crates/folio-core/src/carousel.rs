//! Lightbox carousel state.
//!
//! Owns the media list of the project currently shown in the lightbox, the
//! displayed index and a render generation. Every render (open or navigate)
//! hands out a [`RenderTicket`]; media load callbacks report back with their
//! ticket and are ignored when a newer render has happened since.

use crate::error::MediaLoadError;
use crate::types::{MediaItem, ProjectRecord};

/// Horizontal drag distance, in CSS pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 40.0;

/// Inline message shown when a lightbox image fails.
pub const IMAGE_ERROR_MESSAGE: &str = "This image could not be loaded.";

/// Load state of the media currently on stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Identifies one render of the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTicket {
    pub generation: u64,
    pub index: usize,
}

/// Text shown above the stage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LightboxHeader {
    pub title: String,
    /// Only an explicit `brandLabel` is shown here
    pub brand_label: Option<String>,
    pub external_url: Option<String>,
}

impl LightboxHeader {
    fn from_record(record: &ProjectRecord) -> Self {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            title: record.title.clone(),
            brand_label: non_empty(&record.brand_label),
            external_url: non_empty(&record.url),
        }
    }
}

/// Carousel over one project's images and videos.
#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    items: Vec<MediaItem>,
    index: usize,
    open: bool,
    generation: u64,
    status: MediaStatus,
    header: LightboxHeader,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on `record`'s first item.
    ///
    /// A record without images or videos leaves the carousel untouched and
    /// returns `None`.
    pub fn open(&mut self, record: &ProjectRecord) -> Option<RenderTicket> {
        let items = record.media_items();
        if items.is_empty() {
            tracing::debug!(title = %record.title, "Nothing to show, lightbox stays closed");
            return None;
        }

        self.items = items;
        self.index = 0;
        self.open = true;
        self.header = LightboxHeader::from_record(record);
        tracing::debug!(title = %record.title, items = self.items.len(), "Lightbox opened");
        Some(self.render())
    }

    /// Move by `step` with wraparound in both directions.
    pub fn navigate(&mut self, step: isize) -> Option<RenderTicket> {
        if !self.open || self.items.is_empty() {
            return None;
        }
        let len = self.items.len() as isize;
        self.index = (self.index as isize + step).rem_euclid(len) as usize;
        Some(self.render())
    }

    /// Close and forget the media. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        self.items.clear();
        self.index = 0;
        self.status = MediaStatus::Loading;
        // Invalidate whatever is still loading.
        self.generation += 1;
        tracing::debug!("Lightbox closed");
        true
    }

    /// Record the outcome of a media load. Stale tickets are ignored;
    /// returns whether the outcome was applied.
    pub fn media_settled(
        &mut self,
        ticket: RenderTicket,
        outcome: Result<(), MediaLoadError>,
    ) -> bool {
        if !self.open || ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Dropping stale media result"
            );
            return false;
        }
        self.status = match outcome {
            Ok(()) => MediaStatus::Ready,
            Err(e) => {
                tracing::warn!(error = %e, "Lightbox media failed");
                MediaStatus::Failed
            }
        };
        true
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn current(&self) -> Option<&MediaItem> {
        if self.open {
            self.items.get(self.index)
        } else {
            None
        }
    }

    pub fn status(&self) -> MediaStatus {
        self.status
    }

    pub fn header(&self) -> &LightboxHeader {
        &self.header
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ticket of the render currently on stage.
    pub fn ticket(&self) -> RenderTicket {
        RenderTicket {
            generation: self.generation,
            index: self.index,
        }
    }

    /// `"position/total"`, 1-indexed.
    pub fn counter(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }
        format!("{}/{}", self.index + 1, self.items.len())
    }

    /// Prev/next controls only make sense with more than one item.
    pub fn shows_navigation(&self) -> bool {
        self.items.len() > 1
    }

    fn render(&mut self) -> RenderTicket {
        self.generation += 1;
        self.status = MediaStatus::Loading;
        self.ticket()
    }
}

/// What a key press inside the open dialog means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Previous,
    Next,
    FocusForward,
    FocusBackward,
}

impl LightboxCommand {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(LightboxCommand::Close),
            "ArrowLeft" => Some(LightboxCommand::Previous),
            "ArrowRight" => Some(LightboxCommand::Next),
            "Tab" if shift => Some(LightboxCommand::FocusBackward),
            "Tab" => Some(LightboxCommand::FocusForward),
            _ => None,
        }
    }
}

/// Where Tab should move focus inside a trap of `count` focusable elements.
///
/// `active` is the index of the focused element among them, if any. Returns
/// `None` when the browser's default move already stays inside the trap.
pub fn focus_trap_target(count: usize, active: Option<usize>, backward: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (active, backward) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(0), true) => Some(last),
        (Some(i), false) if i >= last => Some(0),
        _ => None,
    }
}

/// Tracks a pointer drag on the stage.
#[derive(Debug, Clone, Copy)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    threshold: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    pub fn press(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the drag; returns the navigation step if it was a swipe.
    /// Dragging right goes back, dragging left goes forward.
    pub fn release(&mut self, x: f64) -> Option<isize> {
        let start = self.start_x.take()?;
        let dx = x - start;
        if dx.abs() > self.threshold {
            Some(if dx > 0.0 { -1 } else { 1 })
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(images: &[&str], videos: &[&str]) -> ProjectRecord {
        ProjectRecord {
            images: images.iter().map(|s| s.to_string()).collect(),
            videos: videos.iter().map(|s| s.to_string()).collect(),
            ..ProjectRecord::titled("A")
        }
    }

    #[test]
    fn test_open_empty_is_noop() {
        let mut carousel = CarouselState::new();
        assert!(carousel.open(&project(&[], &[])).is_none());
        assert!(!carousel.is_open());
        assert_eq!(carousel.generation(), 0);
    }

    #[test]
    fn test_open_empty_keeps_current_item() {
        let mut carousel = CarouselState::new();
        carousel.open(&project(&["a.jpg", "b.jpg"], &[]));
        carousel.navigate(1);
        carousel.open(&project(&[], &[]));
        assert!(carousel.is_open());
        assert_eq!(carousel.counter(), "2/2");
    }

    #[test]
    fn test_counter_and_wraparound() {
        let mut carousel = CarouselState::new();
        carousel.open(&project(&["a1.jpg", "a2.jpg"], &[]));
        assert_eq!(carousel.counter(), "1/2");
        carousel.navigate(1);
        assert_eq!(carousel.counter(), "2/2");
        carousel.navigate(1);
        assert_eq!(carousel.counter(), "1/2");
        carousel.navigate(-1);
        assert_eq!(carousel.counter(), "2/2");
    }

    #[test]
    fn test_videos_follow_images() {
        let mut carousel = CarouselState::new();
        carousel.open(&project(&["a.jpg"], &["https://v/1"]));
        carousel.navigate(1);
        assert_eq!(carousel.current(), Some(&MediaItem::video("https://v/1")));
    }

    #[test]
    fn test_single_item_hides_navigation() {
        let mut carousel = CarouselState::new();
        carousel.open(&project(&["a.jpg"], &[]));
        assert!(!carousel.shows_navigation());
        carousel.navigate(1);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_stale_media_result_is_dropped() {
        let mut carousel = CarouselState::new();
        let first = carousel.open(&project(&["a.jpg", "b.jpg"], &[])).unwrap();
        let second = carousel.navigate(1).unwrap();

        assert!(!carousel.media_settled(first, Ok(())));
        assert_eq!(carousel.status(), MediaStatus::Loading);

        assert!(carousel.media_settled(second, Err(MediaLoadError::new("b.jpg"))));
        assert_eq!(carousel.status(), MediaStatus::Failed);
    }

    #[test]
    fn test_close_invalidates_pending_load() {
        let mut carousel = CarouselState::new();
        let ticket = carousel.open(&project(&["a.jpg"], &[])).unwrap();
        assert!(carousel.close());
        assert!(!carousel.close());
        assert!(!carousel.media_settled(ticket, Ok(())));
        assert!(carousel.current().is_none());
        assert!(carousel.navigate(1).is_none());
    }

    #[test]
    fn test_header_uses_brand_label_only() {
        let mut record = project(&["a.jpg"], &[]);
        record.brand = Some("acme".into());
        record.url = Some("https://example.com".into());
        let mut carousel = CarouselState::new();
        carousel.open(&record);
        assert_eq!(carousel.header().brand_label, None);
        assert_eq!(
            carousel.header().external_url.as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(LightboxCommand::from_key("Escape", false), Some(LightboxCommand::Close));
        assert_eq!(LightboxCommand::from_key("ArrowLeft", false), Some(LightboxCommand::Previous));
        assert_eq!(LightboxCommand::from_key("ArrowRight", true), Some(LightboxCommand::Next));
        assert_eq!(LightboxCommand::from_key("Tab", true), Some(LightboxCommand::FocusBackward));
        assert_eq!(LightboxCommand::from_key("Tab", false), Some(LightboxCommand::FocusForward));
        assert_eq!(LightboxCommand::from_key("Enter", false), None);
    }

    #[test]
    fn test_focus_trap_wraps() {
        assert_eq!(focus_trap_target(3, Some(2), false), Some(0));
        assert_eq!(focus_trap_target(3, Some(0), true), Some(2));
        assert_eq!(focus_trap_target(3, Some(1), false), None);
        assert_eq!(focus_trap_target(3, Some(1), true), None);
        assert_eq!(focus_trap_target(3, None, false), Some(0));
        assert_eq!(focus_trap_target(3, None, true), Some(2));
        assert_eq!(focus_trap_target(0, None, false), None);
        assert_eq!(focus_trap_target(1, Some(0), false), Some(0));
    }

    #[test]
    fn test_swipe_threshold() {
        let mut swipe = SwipeTracker::default();
        swipe.press(100.0);
        assert_eq!(swipe.release(140.0), None);

        swipe.press(100.0);
        assert_eq!(swipe.release(141.0), Some(-1));

        swipe.press(100.0);
        assert_eq!(swipe.release(50.0), Some(1));

        assert_eq!(swipe.release(0.0), None);
    }
}
