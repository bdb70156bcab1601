//! Page components for the portfolio.

mod contact_form;
pub mod gallery;
pub mod lightbox;
mod mobile_menu;
mod site_header;

pub use contact_form::ContactForm;
pub use gallery::GallerySection;
pub use lightbox::Lightbox;
pub use site_header::SiteHeader;
