use crate::helpers::{get, spawn_app, MockClimateAccess};
use axum::http::StatusCode;
use climate_api::{db, PrecipitationReading, TemperatureObservation, TemperatureStats};
use serde_json::json;
use std::sync::Arc;
use time::macros::date;

const INVALID_DATE_BODY: &str = "Invalid date format. Please use the format YYYY-MM-DD.";

fn reading(date: &str, prcp: Option<f64>) -> PrecipitationReading {
    PrecipitationReading {
        date: date.to_string(),
        prcp,
    }
}

fn observation(date: &str, temperature: f64) -> TemperatureObservation {
    TemperatureObservation {
        date: date.to_string(),
        temperature: Some(temperature),
    }
}

#[tokio::test]
async fn home_lists_available_routes() {
    let test_app = spawn_app(Arc::new(MockClimateAccess::new())).await;

    let response = get(&test_app, "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("text/html"));
    assert!(response.body.contains("Welcome to the Climate Analysis API!"));
    assert!(response.body.contains("/api/v1.0/precipitation"));
    assert!(response.body.contains("/api/v1.0/stations"));
    assert!(response.body.contains("/api/v1.0/tobs"));
    assert!(response.body.contains("/api/v1.0/&lt;start&gt;/&lt;end&gt;"));
}

#[tokio::test]
async fn precipitation_uses_trailing_year_window() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_latest_date()
        .times(1)
        .returning(|| Ok(Some(date!(2017 - 08 - 23))));
    climate_data
        .expect_precipitation_since()
        .withf(|start| *start == date!(2016 - 08 - 23))
        .times(1)
        .returning(|_| {
            Ok(vec![
                reading("2016-08-23", Some(0.0)),
                reading("2016-08-23", Some(0.15)),
                reading("2017-08-23", None),
                reading("2017-08-23", Some(0.45)),
            ])
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/precipitation").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        response.json(),
        json!({"2016-08-23": 0.15, "2017-08-23": 0.45})
    );
}

#[tokio::test]
async fn precipitation_guards_an_empty_dataset() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_latest_date()
        .times(1)
        .returning(|| Ok(None));
    climate_data.expect_precipitation_since().never();

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/precipitation").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.json(),
        json!({"error": "No observations found in the dataset."})
    );
}

#[tokio::test]
async fn stations_returns_every_station_id() {
    let mut climate_data = MockClimateAccess::new();
    climate_data.expect_station_ids().times(1).returning(|| {
        Ok(vec![
            "USC00519397".to_string(),
            "USC00513117".to_string(),
            "USC00514830".to_string(),
        ])
    });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/stations").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!(["USC00519397", "USC00513117", "USC00514830"])
    );
}

#[tokio::test]
async fn stations_can_be_empty() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_station_ids()
        .times(1)
        .returning(|| Ok(vec![]));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/stations").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn tobs_reads_most_active_station_over_trailing_year() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_most_active_station()
        .times(1)
        .returning(|| Ok(Some("USC00519281".to_string())));
    climate_data
        .expect_latest_date()
        .times(1)
        .returning(|| Ok(Some(date!(2017 - 08 - 23))));
    climate_data
        .expect_temperatures_since()
        .withf(|station_id, start| station_id == "USC00519281" && *start == date!(2016 - 08 - 23))
        .times(1)
        .returning(|_, _| {
            Ok(vec![
                observation("2016-08-23", 77.0),
                observation("2016-08-24", 77.0),
                observation("2017-08-18", 79.0),
            ])
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/tobs").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!([
            {"Date": "2016-08-23", "Temperature": 77.0},
            {"Date": "2016-08-24", "Temperature": 77.0},
            {"Date": "2017-08-18", "Temperature": 79.0}
        ])
    );
}

#[tokio::test]
async fn tobs_without_observations_is_not_found() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_most_active_station()
        .times(1)
        .returning(|| Ok(None));
    climate_data.expect_latest_date().never();
    climate_data.expect_temperatures_since().never();

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/tobs").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.json(),
        json!({"error": "No stations found in the dataset."})
    );
}

#[tokio::test]
async fn stats_from_start_leaves_end_open() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_temperature_stats()
        .withf(|start, end| *start == date!(2017 - 08 - 01) && end.is_none())
        .times(1)
        .returning(|_, _| {
            Ok(TemperatureStats {
                min_temperature: Some(72.0),
                avg_temperature: Some(79.25),
                max_temperature: Some(87.0),
            })
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/2017-08-01").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "start_date": "2017-08-01",
            "end_date": null,
            "min_temperature": 72.0,
            "avg_temperature": 79.25,
            "max_temperature": 87.0
        })
    );
}

#[tokio::test]
async fn stats_between_dates_passes_both_bounds() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_temperature_stats()
        .withf(|start, end| {
            *start == date!(2016 - 02 - 29) && *end == Some(date!(2016 - 03 - 31))
        })
        .times(1)
        .returning(|_, _| {
            Ok(TemperatureStats {
                min_temperature: Some(60.0),
                avg_temperature: Some(70.5),
                max_temperature: Some(80.0),
            })
        });

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/2016-02-29/2016-03-31").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["start_date"], "2016-02-29");
    assert_eq!(body["end_date"], "2016-03-31");
    assert_eq!(body["avg_temperature"], 70.5);
}

#[tokio::test]
async fn stats_over_an_empty_range_are_null() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_temperature_stats()
        .times(1)
        .returning(|_, _| Ok(TemperatureStats::default()));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/2030-01-01/2030-12-31").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "start_date": "2030-01-01",
            "end_date": "2030-12-31",
            "min_temperature": null,
            "avg_temperature": null,
            "max_temperature": null
        })
    );
}

#[tokio::test]
async fn malformed_dates_are_rejected_before_querying() {
    let uris = [
        "/api/v1.0/not-a-date",
        "/api/v1.0/2017.08.01",
        "/api/v1.0/2017-8-1",
        "/api/v1.0/2017-13-01",
        "/api/v1.0/2017-02-30",
        "/api/v1.0/20170801",
        "/api/v1.0/-2017-08-01",
        "/api/v1.0/+2017-08-01",
        "/api/v1.0/2017-08-01/-2017-08-23",
        "/api/v1.0/not-a-date/2017-08-23",
        "/api/v1.0/2017-08-01/tomorrow",
        "/api/v1.0/2017-08-01/2017-08-32",
        "/api/v1.0/2017_08_01/2017_08_23",
    ];

    for uri in uris {
        let mut climate_data = MockClimateAccess::new();
        climate_data.expect_temperature_stats().never();

        let test_app = spawn_app(Arc::new(climate_data)).await;
        let response = get(&test_app, uri).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(response.json(), json!({"error": INVALID_DATE_BODY}), "{}", uri);
    }
}

#[tokio::test]
async fn store_failures_are_internal_errors() {
    let mut climate_data = MockClimateAccess::new();
    climate_data
        .expect_station_ids()
        .times(1)
        .returning(|| Err(db::Error::Query(sqlx::Error::PoolTimedOut)));

    let test_app = spawn_app(Arc::new(climate_data)).await;
    let response = get(&test_app, "/api/v1.0/stations").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({"error": "Internal server error."}));
}
