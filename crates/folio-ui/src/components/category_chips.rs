//! Category Chips Component
//!
//! Toolbar of filter chips above the gallery grid.
//! The active chip gets `is-active` and `aria-pressed="true"`.

use dioxus::prelude::*;
use folio_core::{CategoryChip, CategorySelection};

/// Properties for the CategoryChips component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryChipsProps {
    /// Chips in display order ("All" first)
    pub chips: Vec<CategoryChip>,
    /// Currently applied selection
    pub selected: CategorySelection,
    /// Handler called when a chip is pressed
    pub on_select: EventHandler<CategorySelection>,
}

/// Displays the filter toolbar
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(CategorySelection::default);
///
/// rsx! {
///     CategoryChips {
///         chips: catalog.chips(&records),
///         selected: selected(),
///         on_select: move |selection| selected.set(selection)
///     }
/// }
/// ```
#[component]
pub fn CategoryChips(props: CategoryChipsProps) -> Element {
    rsx! {
        div {
            class: "gallery-filters",
            role: "toolbar",
            "aria-label": "Filter by category",
            for chip in props.chips.iter() {
                {
                    let selection = chip.selection.clone();
                    let is_active = props.selected == chip.selection;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{chip.selection.slug()}",
                            r#type: "button",
                            class: chip_class(is_active),
                            "data-slug": "{chip.selection.slug()}",
                            "aria-pressed": if is_active { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(selection.clone());
                            },
                            "{chip.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Class list of a chip
pub fn chip_class(active: bool) -> &'static str {
    if active {
        "chip is-active"
    } else {
        "chip"
    }
}
