pub mod precipitation;
pub mod stations;
pub mod temperature_stats;
pub mod tobs;

pub use precipitation::precipitation;
pub use stations::stations;
pub use temperature_stats::{temperature_stats_between, temperature_stats_from, TemperatureSummary};
pub use tobs::tobs;
