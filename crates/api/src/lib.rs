//! Read-only HTTP API over a SQLite dataset of station precipitation and
//! temperature observations.

pub mod dates;
pub mod db;
pub mod routes;
mod startup;
pub mod templates;
mod utils;

pub use dates::{format_date, one_year_prior, parse_date, DATE_FORMAT, TRAILING_WINDOW_DAYS};
pub use db::{
    ClimateData, ClimateDb, PrecipitationReading, TemperatureObservation, TemperatureStats,
};
pub use routes::{
    index_handler, precipitation, stations, temperature_stats_between, temperature_stats_from,
    tobs, ErrorBody, TemperatureSummary,
};
pub use startup::{app, build_app_state, AppState};
pub use utils::{get_config_info, get_log_level, merge_config_file, setup_logger, Cli};
