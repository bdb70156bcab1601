//! Gallery section: data load, filter chips, fragment binding.

use dioxus::prelude::*;
use folio_core::fragment::fragment_update;
use folio_core::{
    apply_filter, layout_order, selection_from_fragment, CategorySelection, GalleryResult,
    HttpSource, ProjectRecord, ProjectStore, SiteConfig,
};
use folio_ui::{CategoryChips, Spinner};

use super::grid::GalleryGrid;
use crate::context::use_site_config;
use crate::dom::{self, DomEvents};

async fn load_projects(config: SiteConfig) -> GalleryResult<Vec<ProjectRecord>> {
    let url = config.resolve_data_url(&dom::location_href())?;
    ProjectStore::new(HttpSource::new(url))
        .include_hidden(config.include_hidden)
        .load()
        .await
}

#[component]
pub fn GallerySection() -> Element {
    let config = use_site_config();

    let projects = use_resource({
        let config = config.clone();
        move || load_projects(config.clone())
    });

    // `None` until the fragment has been read against the loaded records.
    let mut selection = use_signal(|| None::<CategorySelection>);

    {
        let config = config.clone();
        use_effect(move || {
            if let Some(Ok(records)) = &*projects.read() {
                let initial = selection_from_fragment(
                    &dom::location_hash(),
                    &config.section,
                    &config.categories,
                    records,
                );
                tracing::debug!(selection = %initial, "Initial gallery filter");
                selection.set(Some(initial));
            }
        });
    }

    // Links and manual edits of the fragment re-apply the filter.
    {
        let config = config.clone();
        use_future(move || {
            let config = config.clone();
            async move {
                let Some(mut changes) = DomEvents::window("hashchange") else {
                    return;
                };
                while changes.next().await.is_some() {
                    let Some(Ok(records)) = &*projects.peek() else {
                        continue;
                    };
                    let next = selection_from_fragment(
                        &dom::location_hash(),
                        &config.section,
                        &config.categories,
                        records,
                    );
                    tracing::debug!(selection = %next, "Fragment changed");
                    selection.set(Some(next));
                }
            }
        });
    }

    let section = config.section.clone();
    let on_select = move |next: CategorySelection| {
        if let Some(fragment) = fragment_update(&dom::location_hash(), &section, &next) {
            dom::replace_fragment(&fragment);
        }
        tracing::debug!(selection = %next, "Filter selected");
        selection.set(Some(next));
    };

    let body = match &*projects.read() {
        None => rsx! {
            Spinner { label: "Loading projects".to_string() }
        },
        Some(Err(e)) => rsx! {
            p { class: "gallery-fallback", role: "alert", "{e.user_message()}" }
        },
        Some(Ok(records)) => {
            let chips = config.categories.chips(records);
            let current = selection();
            let visible = current
                .as_ref()
                .map(|current| layout_order(apply_filter(records, current)));
            rsx! {
                CategoryChips { chips, selected: current.unwrap_or_default(), on_select }
                if let Some(visible) = visible {
                    GalleryGrid { records: visible, pacing: config.pacing() }
                }
            }
        }
    };

    rsx! {
        section {
            id: "{config.section}",
            class: "gallery",
            "aria-labelledby": "gallery-title",
            h2 { id: "gallery-title", class: "section-title animate-on-scroll", "Selected work" }
            {body}
        }
    }
}
