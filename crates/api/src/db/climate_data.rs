use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::ToSchema;

use super::Error;

/// Read access to the observations dataset.
///
/// Every method acquires its own connection for the duration of the call,
/// so handlers never hold a connection across requests.
#[async_trait]
pub trait ClimateData: Sync + Send {
    /// Latest observation date across all stations, `None` when the dataset is empty
    async fn latest_date(&self) -> Result<Option<Date>, Error>;
    /// Precipitation rows dated on or after `start`, ascending by date
    async fn precipitation_since(&self, start: Date) -> Result<Vec<PrecipitationReading>, Error>;
    /// Every station id in store order
    async fn station_ids(&self) -> Result<Vec<String>, Error>;
    /// Station with the most observation rows, ties go to the smallest id
    async fn most_active_station(&self) -> Result<Option<String>, Error>;
    async fn temperatures_since(
        &self,
        station_id: String,
        start: Date,
    ) -> Result<Vec<TemperatureObservation>, Error>;
    /// MIN/AVG/MAX of temperature over `start..=end`, or open ended if `end` is `None`
    async fn temperature_stats(
        &self,
        start: Date,
        end: Option<Date>,
    ) -> Result<TemperatureStats, Error>;
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct TemperatureObservation {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Temperature")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct TemperatureStats {
    pub min_temperature: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
}
