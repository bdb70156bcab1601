//! Mobile Menu Component
//!
//! Slide-in navigation for narrow screens (< 768px).

use dioxus::prelude::*;
use folio_ui::CloseButton;

use super::site_header::NAV_LINKS;
use crate::dom::{self, DomEvents, FocusMemo};

const MENU_ID: &str = "mobile-menu";
const SCROLL_LOCK_CLASS: &str = "menu-open";

/// Viewport width at which the desktop navigation takes over.
const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Menu toggle plus the overlay it controls.
///
/// Closes on link click, backdrop click, Escape, and when the viewport grows
/// to desktop width.
#[component]
pub fn MobileMenu() -> Element {
    let mut open = use_signal(|| false);
    let mut focus = use_signal(FocusMemo::default);

    let mut set_open = move |next: bool| {
        if *open.peek() == next {
            return;
        }
        if next {
            focus.write().remember();
        }
        open.set(next);
        dom::set_body_class(SCROLL_LOCK_CLASS, next);
        if !next {
            focus.write().restore();
        }
    };

    use_future(move || async move {
        let Some(mut resizes) = DomEvents::window("resize") else {
            return;
        };
        while resizes.next().await.is_some() {
            if dom::viewport_width() >= DESKTOP_MIN_WIDTH {
                set_open(false);
            }
        }
    });

    let on_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Escape => {
            evt.prevent_default();
            set_open(false);
        }
        Key::Tab => {
            if dom::trap_focus(MENU_ID, evt.modifiers().shift()) {
                evt.prevent_default();
            }
        }
        _ => {}
    };

    rsx! {
        button {
            r#type: "button",
            class: "icon-btn menu-toggle",
            "aria-controls": MENU_ID,
            "aria-expanded": if open() { "true" } else { "false" },
            "aria-label": if open() { "Close menu" } else { "Open menu" },
            onclick: move |_| set_open(!open()),
            "\u{2630}"
        }

        if open() {
            div {
                class: "menu-backdrop",
                onclick: move |_| set_open(false),
            }
            nav {
                id: MENU_ID,
                class: "mobile-menu",
                "aria-label": "Mobile",
                onkeydown: on_keydown,
                // Nothing inside has focus yet, so this lands on the first control.
                onmounted: move |_| {
                    dom::trap_focus(MENU_ID, false);
                },

                CloseButton { onclick: move |_| set_open(false) }
                for link in NAV_LINKS {
                    a {
                        href: link.href,
                        onclick: move |_| set_open(false),
                        "{link.label}"
                    }
                }
            }
        }
    }
}
