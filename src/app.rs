use dioxus::prelude::*;
use folio_core::{SiteConfig, Theme};

use crate::components::{Lightbox, SiteHeader};
use crate::context::LightboxRequest;
use crate::dom;
use crate::pages::Home;
use crate::theme::{apply_theme, initial_theme, theme_color, use_theme_sync, GLOBAL_STYLES};

/// Root application component.
///
/// Provides global styles, the site configuration, the theme and the
/// lightbox request signal. The lightbox is mounted exactly once, here.
#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = SiteConfig::default().with_query(&dom::location_search());
        tracing::debug!(?config, "Site configuration");
        config
    });
    use_context_provider(|| LightboxRequest(Signal::new(None)));
    let theme: Signal<Theme> = use_context_provider(|| Signal::new(initial_theme()));

    // Keep <body> in sync with the theme.
    use_effect(move || apply_theme(theme()));
    use_theme_sync(theme);

    rsx! {
        document::Meta { name: "theme-color", content: theme_color(theme()) }
        style { {GLOBAL_STYLES} }

        SiteHeader {}
        main { class: "site-main",
            Home {}
        }
        Lightbox {}
    }
}
