pub mod climate;
mod error;
pub mod home;

pub use climate::*;
pub use error::{Error, ErrorBody};
pub use home::*;
