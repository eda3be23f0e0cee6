//! Statically declared shape of the observations dataset.
//!
//! The dataset is owned elsewhere and opened read-only; these declarations
//! are checked against it once at startup rather than reflected from it.

pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

/// One row per station per day
pub const MEASUREMENT: Table = Table {
    name: "measurement",
    columns: &["id", "station", "date", "prcp", "tobs"],
};

pub const STATION: Table = Table {
    name: "station",
    columns: &["id", "station", "name", "latitude", "longitude", "elevation"],
};

pub const TABLES: &[Table] = &[MEASUREMENT, STATION];
