use axum::{extract::State, Json};
use log::debug;
use std::sync::Arc;

use crate::{
    one_year_prior,
    routes::{Error, ErrorBody},
    AppState, TemperatureObservation,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations of the most active station for the year before the latest observation", content_type = "application/json", body = Vec<TemperatureObservation>),
        (status = NOT_FOUND, description = "The dataset has no observations", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorBody)
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, Error> {
    let station_id = state
        .climate_db
        .most_active_station()
        .await?
        .ok_or(Error::NoDataFound)?;
    debug!("most active station: {}", station_id);

    let latest = state
        .climate_db
        .latest_date()
        .await?
        .ok_or(Error::DataUnavailable)?;

    let observations = state
        .climate_db
        .temperatures_since(station_id, one_year_prior(latest))
        .await?;

    Ok(Json(observations))
}
