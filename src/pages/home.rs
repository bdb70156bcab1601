//! Home page: hero, gallery, about, contact.

use dioxus::prelude::*;

use crate::components::{ContactForm, GallerySection};
use crate::dom;

#[component]
pub fn Home() -> Element {
    // Reveal-on-scroll is wired once the sections exist.
    use_effect(move || {
        spawn(dom::observe_scroll_reveal());
    });

    rsx! {
        section { class: "hero",
            h1 { class: "animate-on-scroll", "Brand identities, packaging and campaigns that get noticed." }
            p { class: "animate-on-scroll",
                "Independent design studio working across branding, web and print."
            }
        }

        GallerySection {}

        section { id: "about", class: "about",
            h2 { class: "section-title animate-on-scroll", "About" }
            p { class: "animate-on-scroll",
                "Every project starts with a conversation and ends with a system the client can "
                "run with: logos, layouts, type and colour that hold together from a business "
                "card to a billboard."
            }
        }

        section { id: "contact", class: "contact",
            h2 { class: "section-title animate-on-scroll", "Contact" }
            ContactForm {}
        }

        footer { class: "site-footer", "Folio" }
    }
}
