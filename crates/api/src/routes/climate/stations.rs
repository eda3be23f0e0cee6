use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    routes::{Error, ErrorBody},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Every station id in the dataset", content_type = "application/json", body = Vec<String>),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorBody)
    ))]
pub async fn stations(State(state): State<Arc<AppState>>) -> Result<Json<Vec<String>>, Error> {
    let stations = state.climate_db.station_ids().await?;
    Ok(Json(stations))
}
