use async_trait::async_trait;
use climate_core::is_file;
use log::{debug, info};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    QueryBuilder, Sqlite,
};
use std::time::Duration;
use time::Date;

use super::{
    schema::{MEASUREMENT, STATION, TABLES},
    ClimateData, Error, PrecipitationReading, TemperatureObservation, TemperatureStats,
};
use crate::{format_date, parse_date};

/// Read-only handle on the SQLite observations dataset.
#[derive(Clone)]
pub struct ClimateDb {
    pool: SqlitePool,
}

impl ClimateDb {
    /// Opens the dataset at `path` read-only and checks it has the expected tables.
    pub async fn new(path: &str, max_connections: u32) -> Result<Self, Error> {
        if !is_file(path) {
            return Err(Error::NotFound(path.to_string()));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false)
            .pragma("busy_timeout", "5000");

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        let db = Self::from_pool(pool);
        db.health_check().await?;
        db.verify_schema().await?;
        info!("SQLite dataset opened read-only at: {}", path);

        Ok(db)
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database connectivity and integrity.
    pub async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;

        let result: String = sqlx::query_scalar("PRAGMA quick_check;")
            .fetch_one(&self.pool)
            .await?;
        if result != "ok" {
            return Err(Error::Schema(format!("integrity check failed: {}", result)));
        }

        Ok(())
    }

    /// Confirm every declared table and column is present in the dataset.
    pub async fn verify_schema(&self) -> Result<(), Error> {
        for table in TABLES {
            let columns: Vec<String> =
                sqlx::query_scalar("SELECT name FROM pragma_table_info(?)")
                    .bind(table.name)
                    .fetch_all(&self.pool)
                    .await?;

            if columns.is_empty() {
                return Err(Error::Schema(format!("missing table `{}`", table.name)));
            }

            if let Some(missing) = table
                .columns
                .iter()
                .find(|column| !columns.iter().any(|c| c == *column))
            {
                return Err(Error::Schema(format!(
                    "table `{}` has no column `{}`",
                    table.name, missing
                )));
            }
            debug!("verified table {} ({} columns)", table.name, columns.len());
        }
        Ok(())
    }

    /// Wait for in-flight queries to finish and close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("SQLite dataset closed");
    }
}

#[async_trait]
impl ClimateData for ClimateDb {
    async fn latest_date(&self) -> Result<Option<Date>, Error> {
        let mut conn = self.pool.acquire().await?;
        let latest: Option<String> =
            sqlx::query_scalar(&format!("SELECT MAX(date) FROM {}", MEASUREMENT.name))
                .fetch_one(&mut *conn)
                .await?;

        Ok(latest.as_deref().map(parse_date).transpose()?)
    }

    async fn precipitation_since(&self, start: Date) -> Result<Vec<PrecipitationReading>, Error> {
        let mut conn = self.pool.acquire().await?;
        // id keeps same-day rows from different stations in a stable order
        let readings = sqlx::query_as::<_, PrecipitationReading>(&format!(
            "SELECT date, CAST(prcp AS REAL) AS prcp FROM {}
             WHERE date >= ?
             ORDER BY date ASC, id ASC",
            MEASUREMENT.name
        ))
        .bind(format_date(start))
        .fetch_all(&mut *conn)
        .await?;

        debug!("found {} precipitation readings since {}", readings.len(), start);
        Ok(readings)
    }

    async fn station_ids(&self) -> Result<Vec<String>, Error> {
        let mut conn = self.pool.acquire().await?;
        let stations: Vec<String> =
            sqlx::query_scalar(&format!("SELECT station FROM {}", STATION.name))
                .fetch_all(&mut *conn)
                .await?;

        Ok(stations)
    }

    async fn most_active_station(&self) -> Result<Option<String>, Error> {
        let mut conn = self.pool.acquire().await?;
        let station: Option<String> = sqlx::query_scalar(&format!(
            "SELECT station FROM {}
             GROUP BY station
             ORDER BY COUNT(*) DESC, station ASC
             LIMIT 1",
            MEASUREMENT.name
        ))
        .fetch_optional(&mut *conn)
        .await?;

        Ok(station)
    }

    async fn temperatures_since(
        &self,
        station_id: String,
        start: Date,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let mut conn = self.pool.acquire().await?;
        let observations = sqlx::query_as::<_, TemperatureObservation>(&format!(
            "SELECT date, CAST(tobs AS REAL) AS temperature FROM {}
             WHERE station = ? AND date >= ?
             ORDER BY date ASC, id ASC",
            MEASUREMENT.name
        ))
        .bind(&station_id)
        .bind(format_date(start))
        .fetch_all(&mut *conn)
        .await?;

        debug!(
            "found {} temperature observations for {} since {}",
            observations.len(),
            station_id,
            start
        );
        Ok(observations)
    }

    async fn temperature_stats(
        &self,
        start: Date,
        end: Option<Date>,
    ) -> Result<TemperatureStats, Error> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(format!(
            "SELECT CAST(MIN(tobs) AS REAL) AS min_temperature,
                    CAST(AVG(tobs) AS REAL) AS avg_temperature,
                    CAST(MAX(tobs) AS REAL) AS max_temperature
             FROM {} WHERE date >= ",
            MEASUREMENT.name
        ));
        query.push_bind(format_date(start));
        if let Some(end) = end {
            query.push(" AND date <= ").push_bind(format_date(end));
        }

        let mut conn = self.pool.acquire().await?;
        let stats = query
            .build_query_as::<TemperatureStats>()
            .fetch_one(&mut *conn)
            .await?;

        Ok(stats)
    }
}
