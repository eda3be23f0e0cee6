pub mod home;

pub use home::{home_page, API_ROUTES};
