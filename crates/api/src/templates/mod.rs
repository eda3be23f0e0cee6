pub mod pages;

pub use pages::{home_page, API_ROUTES};
