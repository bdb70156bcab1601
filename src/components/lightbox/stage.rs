//! Lightbox stage: the media item currently on screen.

use dioxus::prelude::*;
use folio_core::{
    MediaItem, MediaKind, MediaLoadError, MediaStatus, RenderTicket, IMAGE_ERROR_MESSAGE,
};
use folio_ui::Spinner;

/// Renders one media item and reports when it settles.
///
/// Keyed by render generation, so every navigation mounts a fresh element
/// and late events from the previous one carry an outdated ticket.
#[component]
pub fn MediaStage(
    item: MediaItem,
    ticket: RenderTicket,
    status: MediaStatus,
    on_settled: EventHandler<(RenderTicket, Result<(), MediaLoadError>)>,
) -> Element {
    let loading = status == MediaStatus::Loading;
    let src = item.src.clone();

    rsx! {
        if loading {
            Spinner {}
        }
        match (item.kind, status) {
            (MediaKind::Image, MediaStatus::Failed) => rsx! {
                p { class: "lightbox__error", role: "alert", "{IMAGE_ERROR_MESSAGE}" }
            },
            (MediaKind::Image, _) => rsx! {
                img {
                    class: if loading { "lightbox__media is-loading" } else { "lightbox__media" },
                    src: "{item.src}",
                    alt: "",
                    onload: move |_| on_settled.call((ticket, Ok(()))),
                    onerror: move |_| on_settled.call((ticket, Err(MediaLoadError::new(src.clone())))),
                }
            },
            (MediaKind::Video, _) => rsx! {
                iframe {
                    class: "lightbox__frame",
                    src: "{item.src}",
                    title: "Project video",
                    "sandbox": "allow-scripts allow-same-origin allow-presentation",
                    allow: "autoplay; fullscreen; picture-in-picture",
                    "referrerpolicy": "no-referrer",
                    allowfullscreen: true,
                    onload: move |_| on_settled.call((ticket, Ok(()))),
                }
            },
        }
    }
}
