mod climate_data;
pub mod schema;
mod sqlite;

pub use climate_data::*;
pub use sqlite::ClimateDb;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query sqlite: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Failed to parse stored date: {0}")]
    StoredDate(#[from] time::error::Parse),
    #[error("Dataset not found: {0}")]
    NotFound(String),
    #[error("Dataset schema mismatch: {0}")]
    Schema(String),
}
