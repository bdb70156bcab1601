//! Button Components
//!
//! - Primary: form submission and main calls to action
//! - Ghost: low-emphasis actions (theme toggle, menu)
//! - IconButton / CloseButton / NavArrow: compact lightbox controls

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled accent button
    #[default]
    Primary,
    /// Transparent button with a border
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         button_type: "submit".to_string(),
///         "Send"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, previous, next)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Hide the button without removing it from the layout tree
    #[props(default = false)]
    pub hidden: bool,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            r#type: "button",
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            style: if props.hidden { "display: none;" } else { "" },
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default)] class: Option<String>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: join_classes("close-btn", class.as_deref()),
            "\u{00D7}"
        }
    }
}

/// Direction of a carousel arrow
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowDirection {
    Previous,
    Next,
}

impl ArrowDirection {
    pub fn label(&self) -> &'static str {
        match self {
            ArrowDirection::Previous => "Previous",
            ArrowDirection::Next => "Next",
        }
    }

    /// Navigation step this arrow applies
    pub fn step(&self) -> isize {
        match self {
            ArrowDirection::Previous => -1,
            ArrowDirection::Next => 1,
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            ArrowDirection::Previous => "\u{2039}",
            ArrowDirection::Next => "\u{203A}",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ArrowDirection::Previous => "lightbox__nav lightbox__prev",
            ArrowDirection::Next => "lightbox__nav lightbox__next",
        }
    }
}

/// Previous/next arrow of the lightbox stage
#[component]
pub fn NavArrow(
    direction: ArrowDirection,
    /// Receives the navigation step (-1 or +1)
    on_step: EventHandler<isize>,
    #[props(default = false)] hidden: bool,
) -> Element {
    rsx! {
        IconButton {
            onclick: move |_| on_step.call(direction.step()),
            aria_label: direction.label().to_string(),
            class: direction.class().to_string(),
            hidden: hidden,
            "{direction.glyph()}"
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn arrow_steps() {
        assert_eq!(ArrowDirection::Previous.step(), -1);
        assert_eq!(ArrowDirection::Next.step(), 1);
        assert_eq!(ArrowDirection::Next.label(), "Next");
    }

    #[test]
    fn join_classes_skips_empty() {
        assert_eq!(join_classes("icon-btn", None), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("")), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("close-btn")), "icon-btn close-btn");
    }
}
