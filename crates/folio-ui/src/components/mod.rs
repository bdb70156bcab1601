//! Reusable UI components
//!
//! Filter chips, buttons and loading indicators used by the gallery and
//! the lightbox.

mod button;
mod category_chips;
mod spinner;

pub use button::*;
pub use category_chips::*;
pub use spinner::*;
