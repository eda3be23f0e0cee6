use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db;

/// Failures a climate route can report to the caller.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid date format. Please use the format YYYY-MM-DD.")]
    InvalidDateFormat(#[source] time::error::Parse),
    #[error("No stations found in the dataset.")]
    NoDataFound,
    #[error("No observations found in the dataset.")]
    DataUnavailable,
    #[error("Failed to read climate data: {0}")]
    Store(#[from] db::Error),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidDateFormat(_) => StatusCode::BAD_REQUEST,
            Error::NoDataFound | Error::DataUnavailable => StatusCode::NOT_FOUND,
            Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = match &self {
            Error::InvalidDateFormat(e) => {
                debug!("rejected date parameter: {}", e);
                self.to_string()
            }
            Error::Store(e) => {
                error!("error reading climate data: {}", e);
                String::from("Internal server error.")
            }
            Error::NoDataFound | Error::DataUnavailable => self.to_string(),
        };

        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}
