//! A single project tile.

use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use folio_core::tile::TILE_LINK_REL;
use folio_core::{activation_for, tile_class, ClickModifiers, TileActivation, TilePhase};

use super::host::GridTile;
use crate::context::use_lightbox_request;

/// Link-shaped tile; a plain click opens the lightbox instead.
#[component]
pub fn ProjectTile(
    tile: GridTile,
    /// Called once the cover settles: `true` on load, `false` on error
    on_cover: EventHandler<bool>,
) -> Element {
    let mut lightbox = use_lightbox_request();

    let class = tile_class(&tile.record, tile.phase);
    let href = tile.record.url.clone().unwrap_or_else(|| "#".to_string());
    let title = tile.record.title.clone();
    let badge = tile.record.brand_text();
    let cover = match tile.phase {
        TilePhase::Placeholder => None,
        TilePhase::Loading | TilePhase::Loaded => tile.record.cover_src().map(str::to_string),
    };
    let record = tile.record;

    let on_click = move |evt: MouseEvent| {
        let keys = evt.modifiers();
        let modifiers = ClickModifiers {
            primary_button: evt.trigger_button() == Some(MouseButton::Primary),
            ctrl: keys.ctrl(),
            meta: keys.meta(),
            shift: keys.shift(),
            alt: keys.alt(),
        };
        if activation_for(modifiers) == TileActivation::OpenLightbox {
            evt.prevent_default();
            tracing::debug!(title = %record.title, "Tile activated");
            lightbox.set(Some(record.clone()));
        }
    };

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            target: "_blank",
            rel: TILE_LINK_REL,
            "aria-label": "{title}",
            onclick: on_click,

            if let Some(src) = cover {
                img {
                    class: "tile__cover",
                    src: "{src}",
                    alt: "",
                    decoding: "async",
                    onload: move |_| on_cover.call(true),
                    onerror: move |_| on_cover.call(false),
                }
            }

            div { class: "tile__meta",
                span { class: "tile__title", "{title}" }
                if let Some(badge) = badge {
                    span { class: "tile__badge", "{badge}" }
                }
            }
        }
    }
}
