//! Project gallery: filter chips over a sequentially revealed grid.

mod grid;
mod host;
mod section;
mod tile;

pub use section::GallerySection;
