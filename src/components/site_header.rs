//! Site header: logo, primary navigation, theme toggle, mobile menu.

use dioxus::prelude::*;
use folio_core::Theme;
use folio_ui::{Button, ButtonVariant};

use super::mobile_menu::MobileMenu;
use crate::context::use_theme;
use crate::dom::{self, DomEvents};
use crate::theme::save_theme;

/// Scroll offset past which the header shrinks.
const SHRINK_AFTER_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { href: "#gallery", label: "Work" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#contact", label: "Contact" },
];

fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Light mode",
        Theme::Light => "Dark mode",
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let mut theme = use_theme();
    let mut shrink = use_signal(|| dom::scroll_y() > SHRINK_AFTER_PX);

    use_future(move || async move {
        let Some(mut scrolls) = DomEvents::window("scroll") else {
            return;
        };
        while scrolls.next().await.is_some() {
            let next = dom::scroll_y() > SHRINK_AFTER_PX;
            if *shrink.peek() != next {
                shrink.set(next);
            }
        }
    });

    let toggle_theme = move |_| {
        let next = theme().toggled();
        save_theme(next);
        tracing::debug!(theme = %next, "Theme toggled");
        theme.set(next);
    };

    rsx! {
        header {
            id: "top",
            class: if shrink() { "site-header shrink" } else { "site-header" },

            a { class: "site-logo", href: "#top", "Folio" }

            nav { class: "site-nav", "aria-label": "Primary",
                for link in NAV_LINKS {
                    a { href: link.href, "{link.label}" }
                }
            }

            div { class: "header-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "theme-toggle".to_string(),
                    onclick: toggle_theme,
                    "{toggle_label(theme())}"
                }
                MobileMenu {}
            }
        }
    }
}
