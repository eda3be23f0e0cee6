use axum::{extract::State, Json};
use std::{collections::BTreeMap, sync::Arc};

use crate::{
    one_year_prior,
    routes::{Error, ErrorBody},
    AppState, PrecipitationReading,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Precipitation by date for the year before the latest observation", content_type = "application/json", body = BTreeMap<String, Option<f64>>),
        (status = NOT_FOUND, description = "The dataset has no observations", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorBody)
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, Error> {
    let latest = state
        .climate_db
        .latest_date()
        .await?
        .ok_or(Error::DataUnavailable)?;

    let readings = state
        .climate_db
        .precipitation_since(one_year_prior(latest))
        .await?;

    Ok(Json(by_date(readings)))
}

/// Keyed on date alone, so when several stations report the same day the
/// last reading in the input wins.
pub fn by_date(readings: Vec<PrecipitationReading>) -> BTreeMap<String, Option<f64>> {
    readings
        .into_iter()
        .map(|reading| (reading.date, reading.prcp))
        .collect()
}
