pub mod html;
pub mod pages;

pub use pages::{edit_page, list_page};
