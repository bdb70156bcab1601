//! Folio UI Components
//!
//! Dioxus components shared by the portfolio pages.
//!
//! ## Design Notes
//!
//! - Components only render and report events; state lives in the page
//! - Class names follow the site stylesheet (`chip`, `btn-*`, `icon-btn`)
//! - Every interactive element carries an accessible label

pub mod components;

pub use components::*;
