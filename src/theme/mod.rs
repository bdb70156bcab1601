//! Theme persistence and global styles.
//!
//! The saved preference lives under the `theme` localStorage key. Without a
//! saved value the page follows `prefers-color-scheme`, live.

mod colors;
mod styles;

use dioxus::prelude::*;
use folio_core::theme::THEME_STORAGE_KEY;
use folio_core::Theme;
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

use crate::dom::{self, DomEvents};

pub use colors::theme_color;
pub use styles::GLOBAL_STYLES;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn saved_theme() -> Option<String> {
    LocalStorage::raw().get_item(THEME_STORAGE_KEY).ok().flatten()
}

pub fn save_theme(theme: Theme) {
    if let Err(e) = LocalStorage::raw().set_item(THEME_STORAGE_KEY, theme.as_str()) {
        tracing::warn!(error = ?e, "Could not persist theme");
    }
}

fn system_prefers_dark() -> bool {
    dom::media_query(DARK_QUERY)
        .map(|query| query.matches())
        .unwrap_or(true)
}

pub fn initial_theme() -> Theme {
    Theme::resolve(saved_theme().as_deref(), system_prefers_dark())
}

pub fn apply_theme(theme: Theme) {
    dom::set_body_class(Theme::Light.body_class(), theme == Theme::Light);
}

/// Follow system scheme changes (while nothing is saved) and theme changes
/// made in other tabs.
pub fn use_theme_sync(mut theme: Signal<Theme>) {
    use_future(move || async move {
        let Some(query) = dom::media_query(DARK_QUERY) else {
            return;
        };
        let mut changes = DomEvents::on(&query, "change");
        while changes.next().await.is_some() {
            if saved_theme().is_none() {
                let next = Theme::resolve(None, query.matches());
                tracing::debug!(theme = %next, "System colour scheme changed");
                theme.set(next);
            }
        }
    });

    use_future(move || async move {
        let Some(mut storage) = DomEvents::window("storage") else {
            return;
        };
        while let Some(event) = storage.next().await {
            let key = event.dyn_ref::<StorageEvent>().and_then(|e| e.key());
            if key.as_deref() == Some(THEME_STORAGE_KEY) {
                theme.set(initial_theme());
            }
        }
    });
}
