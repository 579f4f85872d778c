/// Shared data types for the observation dataset
///
/// The two stored entities (Station, Measurement) are declared
/// explicitly rather than reflected from the database schema, along
/// with the row projections the query layer returns.

use serde::{Deserialize, Serialize};

/// A weather-observation site with fixed geographic metadata.
///
/// Immutable reference data, bulk-loaded before the service starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// A single day's precipitation/temperature reading at one station.
///
/// Dates are ISO 8601 `YYYY-MM-DD` strings; precipitation is nullable
/// (not every station reports it every day).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub station_id: String,
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: f64,
}

/// (date, precipitation) projection for the precipitation route
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// (date, temperature) projection for the tobs route
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

/// Single MIN/AVG/MAX aggregate row over observed temperatures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSummary {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}
