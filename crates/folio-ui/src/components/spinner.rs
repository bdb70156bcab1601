//! Loading indicator

use dioxus::prelude::*;

/// Spinner with an optional caption, announced politely to screen readers.
#[component]
pub fn Spinner(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        div {
            class: "loading-indicator",
            role: "status",
            "aria-live": "polite",
            div { class: "loading-spinner" }
            if let Some(label) = label {
                span { class: "loading-indicator__label", "{label}" }
            }
        }
    }
}
