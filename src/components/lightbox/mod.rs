//! Lightbox carousel over a project's images and videos.

mod dialog;
mod stage;

pub use dialog::Lightbox;
