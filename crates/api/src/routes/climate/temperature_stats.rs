use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{
    format_date, parse_date,
    routes::{Error, ErrorBody},
    AppState,
};

/// Temperature aggregates for a date range. The numbers are `null` when no
/// observation falls in the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TemperatureSummary {
    pub start_date: String,
    pub end_date: Option<String>,
    pub min_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "First day of the range, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Temperature aggregates from start onwards", content_type = "application/json", body = TemperatureSummary),
        (status = BAD_REQUEST, description = "Start is not a YYYY-MM-DD date", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorBody)
    ))]
pub async fn temperature_stats_from(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureSummary>, Error> {
    summarize(&state, &start, None).await.map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "First day of the range, YYYY-MM-DD"),
        ("end" = String, Path, description = "Last day of the range (inclusive), YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "Temperature aggregates between start and end", content_type = "application/json", body = TemperatureSummary),
        (status = BAD_REQUEST, description = "Start or end is not a YYYY-MM-DD date", body = ErrorBody),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read the dataset", body = ErrorBody)
    ))]
pub async fn temperature_stats_between(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureSummary>, Error> {
    summarize(&state, &start, Some(&end)).await.map(Json)
}

async fn summarize(
    state: &AppState,
    start: &str,
    end: Option<&str>,
) -> Result<TemperatureSummary, Error> {
    // both dates are validated before the store is touched
    let start = parse_date(start).map_err(Error::InvalidDateFormat)?;
    let end = end
        .map(parse_date)
        .transpose()
        .map_err(Error::InvalidDateFormat)?;

    let stats = state.climate_db.temperature_stats(start, end).await?;

    Ok(TemperatureSummary {
        start_date: format_date(start),
        end_date: end.map(format_date),
        min_temperature: stats.min_temperature,
        avg_temperature: stats.avg_temperature,
        max_temperature: stats.max_temperature,
    })
}
