use crate::{
    db::ClimateDb, index_handler, precipitation, routes, stations, temperature_stats_between,
    temperature_stats_from, tobs, ClimateData, TemperatureObservation,
};
use anyhow::Context;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub climate_db: Arc<dyn ClimateData>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::precipitation::precipitation,
        routes::climate::stations::stations,
        routes::climate::tobs::tobs,
        routes::climate::temperature_stats::temperature_stats_from,
        routes::climate::temperature_stats::temperature_stats_between,
    ),
    components(
        schemas(
            TemperatureObservation,
            routes::TemperatureSummary,
            routes::ErrorBody,
        )
    ),
    tags(
        (name = "climate analysis api", description = "a read-only RESTful api over historical precipitation and temperature observations")
    )
)]
struct ApiDoc;

/// Opens the dataset and wraps it for the router. The concrete handle is
/// returned alongside so the caller can close the pool on shutdown.
pub async fn build_app_state(
    database: &str,
    max_connections: u32,
) -> Result<(AppState, Arc<ClimateDb>), anyhow::Error> {
    let climate_db = Arc::new(
        ClimateDb::new(database, max_connections)
            .await
            .with_context(|| format!("error opening climate dataset {}", database))?,
    );

    Ok((
        AppState {
            climate_db: climate_db.clone(),
        },
        climate_db,
    ))
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/{start}", get(temperature_stats_from))
        .route("/api/v1.0/{start}/{end}", get(temperature_stats_between))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_owned();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, path: {}, time: {}", response.status().as_str(), path, response_time);

    response
}
