//! Browser plumbing shared by the page components.
//!
//! Thin wrappers over `web-sys` and `gloo` so components stay declarative.
//! Every helper degrades to a no-op when the window or element is missing.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use folio_core::focus_trap_target;
use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::StreamExt;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, EventTarget, HtmlElement, VisibilityState};

/// Elements that take part in Tab navigation inside a dialog.
const FOCUSABLE: &str =
    "a[href], button:not([disabled]), input:not([disabled]), textarea:not([disabled]), \
     select:not([disabled]), iframe, [tabindex]:not([tabindex=\"-1\"])";

pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

pub fn location_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Rewrite the fragment without adding a history entry.
pub fn replace_fragment(fragment: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(fragment)) {
        tracing::warn!(fragment, error = ?e, "replaceState failed");
    }
}

pub fn document_visible() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.visibility_state() == VisibilityState::Visible)
        .unwrap_or(true)
}

/// Resolve once the document is visible.
pub async fn wait_until_visible() {
    let Some(mut changes) = DomEvents::document("visibilitychange") else {
        return;
    };
    while !document_visible() {
        if changes.next().await.is_none() {
            return;
        }
    }
}

static NEXT_VIEWPORT_WAIT: AtomicU64 = AtomicU64::new(1);

/// Window event that tears down the viewport observer of one wait.
fn viewport_release_event(token: u64) -> String {
    format!("folio-in-view-release-{token}")
}

/// Observer script for one viewport wait. Only one observer lives on the
/// page: starting a wait disconnects the previous one.
fn viewport_wait_script(element_id: &str, token: u64) -> String {
    format!(
        r#"
        const el = document.getElementById({id:?});
        if (!el || !('IntersectionObserver' in window)) return true;
        if (window.__folioInView) window.__folioInView.stop();
        await new Promise((resolve) => {{
            const release = {release:?};
            const io = new IntersectionObserver((entries) => {{
                if (entries.some((e) => e.isIntersecting)) stop();
            }}, {{ rootMargin: '0px 0px -20% 0px' }});
            function stop() {{
                io.disconnect();
                window.removeEventListener(release, stop);
                if (window.__folioInView && window.__folioInView.token === {token}) {{
                    window.__folioInView = null;
                }}
                resolve();
            }}
            window.__folioInView = {{ token: {token}, stop }};
            window.addEventListener(release, stop);
            io.observe(el);
        }});
        return true;
        "#,
        id = element_id,
        release = viewport_release_event(token),
        token = token,
    )
}

/// Disconnects the observer of an abandoned viewport wait.
struct ViewportRelease {
    token: u64,
}

impl Drop for ViewportRelease {
    fn drop(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let dispatched = Event::new(&viewport_release_event(self.token))
            .and_then(|event| window.dispatch_event(&event));
        if let Err(e) = dispatched {
            tracing::warn!(error = ?e, "Failed to release viewport observer");
        }
    }
}

/// Resolve once the element enters the viewport (bottom margin -20%).
/// Resolves immediately without IntersectionObserver.
pub async fn wait_until_in_view(element_id: &str) {
    let token = NEXT_VIEWPORT_WAIT.fetch_add(1, Ordering::Relaxed);
    let _release = ViewportRelease { token };
    let script = viewport_wait_script(element_id, token);
    if let Err(e) = document::eval(&script).join::<bool>().await {
        tracing::debug!(error = ?e, "Viewport wait unavailable, starting now");
    }
}

/// Add `is-visible` to every `.animate-on-scroll` element once 10% of it
/// is on screen.
pub async fn observe_scroll_reveal() {
    let script = r#"
        const items = document.querySelectorAll('.animate-on-scroll');
        if (!('IntersectionObserver' in window)) {
            items.forEach((el) => el.classList.add('is-visible'));
            return true;
        }
        const io = new IntersectionObserver((entries) => {
            entries.forEach((entry) => {
                if (entry.isIntersecting) {
                    entry.target.classList.add('is-visible');
                    io.unobserve(entry.target);
                }
            });
        }, { threshold: 0.1 });
        items.forEach((el) => io.observe(el));
        return true;
    "#;
    if let Err(e) = document::eval(script).join::<bool>().await {
        tracing::warn!(error = ?e, "Scroll reveal unavailable");
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn media_query(query: &str) -> Option<web_sys::MediaQueryList> {
    web_sys::window().and_then(|w| w.match_media(query).ok().flatten())
}

/// Toggle a class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force(class, on) {
        tracing::warn!(class, error = ?e, "Body class toggle failed");
    }
}

/// Wrap Tab focus inside the element `root_id`.
///
/// Returns whether focus was moved; when it was, the caller must cancel the
/// browser's own Tab handling.
pub fn trap_focus(root_id: &str, backward: bool) -> bool {
    let Some(root) = element_by_id(root_id) else {
        return false;
    };
    let items = focusable_within(&root);
    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let position = active.and_then(|active| {
        items
            .iter()
            .position(|item| AsRef::<Element>::as_ref(item) == &active)
    });

    match focus_trap_target(items.len(), position, backward) {
        Some(target) => items[target].focus().is_ok(),
        None => false,
    }
}

fn focusable_within(root: &Element) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        // Hidden controls (display: none) have no offset parent.
        .filter(|el| el.offset_parent().is_some())
        .collect()
}

fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

/// Remembers which element had focus before a dialog opened.
#[derive(Default)]
pub struct FocusMemo {
    previous: Option<HtmlElement>,
}

impl FocusMemo {
    pub fn remember(&mut self) {
        self.previous = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    }

    pub fn restore(&mut self) {
        if let Some(el) = self.previous.take() {
            if let Err(e) = el.focus() {
                tracing::warn!(error = ?e, "Failed to restore focus");
            }
        }
    }
}

/// A DOM event listener turned into an async stream.
///
/// The listener is removed when this value is dropped.
pub struct DomEvents {
    _listener: EventListener,
    events: UnboundedReceiver<Event>,
}

impl DomEvents {
    pub fn on(target: &EventTarget, event: &'static str) -> Self {
        let (tx, events) = mpsc::unbounded();
        let listener = EventListener::new(target, event, move |e| {
            let _ = tx.unbounded_send(e.clone());
        });
        Self {
            _listener: listener,
            events,
        }
    }

    pub fn window(event: &'static str) -> Option<Self> {
        web_sys::window().map(|w| Self::on(&w, event))
    }

    pub fn document(event: &'static str) -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|d| Self::on(&d, event))
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.events.next().await
    }
}
