//! Lightbox dialog.
//!
//! Mounted once by the App. Opens when a tile writes the lightbox request,
//! owns its own carousel state, and traps focus while open.

use dioxus::prelude::*;
use folio_core::tile::TILE_LINK_REL;
use folio_core::{CarouselState, LightboxCommand, SwipeTracker};
use folio_ui::{ArrowDirection, CloseButton, NavArrow};

use super::stage::MediaStage;
use crate::context::{use_lightbox_request, use_site_config};
use crate::dom::{self, FocusMemo};

const DIALOG_ID: &str = "lightbox-dialog";
const SCROLL_LOCK_CLASS: &str = "lightbox-open";

#[component]
pub fn Lightbox() -> Element {
    let config = use_site_config();
    let mut request = use_lightbox_request();
    let mut carousel = use_signal(CarouselState::new);
    let mut focus = use_signal(FocusMemo::default);
    let mut swipe = use_signal(|| SwipeTracker::new(config.swipe_threshold_px));

    // Open requests from the grid.
    use_effect(move || {
        if request.read().is_none() {
            return;
        }
        let Some(record) = request.take() else {
            return;
        };
        let was_open = carousel.peek().is_open();
        if carousel.write().open(&record).is_some() && !was_open {
            focus.write().remember();
            dom::set_body_class(SCROLL_LOCK_CLASS, true);
        }
    });

    let mut close = move || {
        if carousel.write().close() {
            swipe.write().cancel();
            dom::set_body_class(SCROLL_LOCK_CLASS, false);
            focus.write().restore();
        }
    };

    let mut step = move |by: isize| {
        carousel.write().navigate(by);
    };

    let on_keydown = move |evt: KeyboardEvent| {
        let key = evt.key().to_string();
        match LightboxCommand::from_key(&key, evt.modifiers().shift()) {
            Some(LightboxCommand::Close) => {
                evt.prevent_default();
                close();
            }
            Some(LightboxCommand::Previous) => {
                evt.prevent_default();
                step(-1);
            }
            Some(LightboxCommand::Next) => {
                evt.prevent_default();
                step(1);
            }
            Some(LightboxCommand::FocusForward) => {
                if dom::trap_focus(DIALOG_ID, false) {
                    evt.prevent_default();
                }
            }
            Some(LightboxCommand::FocusBackward) => {
                if dom::trap_focus(DIALOG_ID, true) {
                    evt.prevent_default();
                }
            }
            None => {}
        }
    };

    let state = carousel.read();
    if !state.is_open() {
        return rsx! {};
    }
    let header = state.header().clone();
    let counter = state.counter();
    let navigable = state.shows_navigation();
    let item = state.current().cloned();
    let ticket = state.ticket();
    let status = state.status();
    drop(state);

    rsx! {
        div {
            class: "lightbox",
            role: "presentation",
            onclick: move |_| close(),
            onkeydown: on_keydown,

            div {
                id: DIALOG_ID,
                class: "lightbox__dialog",
                role: "dialog",
                "aria-modal": "true",
                "aria-label": "{header.title}",
                tabindex: "-1",
                onclick: move |e| e.stop_propagation(),
                onmounted: move |e: MountedEvent| async move {
                    if let Err(e) = e.set_focus(true).await {
                        tracing::warn!(error = ?e, "Failed to focus lightbox");
                    }
                },
                onpointerdown: move |e: PointerEvent| {
                    swipe.write().press(e.client_coordinates().x);
                },
                onpointerup: move |e: PointerEvent| {
                    let swiped = swipe.write().release(e.client_coordinates().x);
                    if let Some(by) = swiped {
                        step(by);
                    }
                },
                onpointercancel: move |_| swipe.write().cancel(),

                div { class: "lightbox__header",
                    h2 { class: "lightbox__title", "{header.title}" }
                    if let Some(brand) = header.brand_label.clone() {
                        span { class: "lightbox__brand", "{brand}" }
                    }
                    if let Some(url) = header.external_url.clone() {
                        a {
                            class: "lightbox__link",
                            href: "{url}",
                            target: "_blank",
                            rel: TILE_LINK_REL,
                            "View project"
                        }
                    }
                    CloseButton { onclick: move |_| close() }
                }

                div { class: "lightbox__stage",
                    NavArrow {
                        direction: ArrowDirection::Previous,
                        on_step: move |by| step(by),
                        hidden: !navigable,
                    }
                    if let Some(item) = item {
                        MediaStage {
                            key: "{ticket.generation}",
                            item,
                            ticket,
                            status,
                            on_settled: move |(ticket, outcome)| {
                                carousel.write().media_settled(ticket, outcome);
                            },
                        }
                    }
                    NavArrow {
                        direction: ArrowDirection::Next,
                        on_step: move |by| step(by),
                        hidden: !navigable,
                    }
                }

                p { class: "lightbox__counter", "aria-live": "polite", "{counter}" }
            }
        }
    }
}
