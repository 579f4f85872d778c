/// Response mapping: query rows to JSON records
///
/// Pure transformations only. Each route has a fixed record shape with
/// human-readable keys; key order comes from struct field order, so
/// the serialized bodies are byte-stable across runs.

use crate::model::{PrecipitationReading, Station, TemperatureReading, TemperatureSummary};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Record Types
// ---------------------------------------------------------------------------

/// Station metadata record for /api/v1.0/stations
#[derive(Debug, Serialize, Deserialize)]
pub struct StationRecord {
    #[serde(rename = "Station ID")]
    pub station_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Elevation")]
    pub elevation: f64,
}

/// Temperature observation record for /api/v1.0/tobs
#[derive(Debug, Serialize, Deserialize)]
pub struct TobsRecord {
    #[serde(rename = "Station ID")]
    pub station_id: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// Aggregate record for the start and start/end summary routes
#[derive(Debug, Serialize, Deserialize)]
pub struct TemperatureSummaryRecord {
    #[serde(rename = "Minimum Temperature")]
    pub minimum: f64,
    #[serde(rename = "Average Temperature")]
    pub average: f64,
    #[serde(rename = "Maximum Temperature")]
    pub maximum: f64,
}

// ---------------------------------------------------------------------------
// Row -> Record Mapping
// ---------------------------------------------------------------------------

/// Map precipitation rows to single-entry records keyed by the date
/// value itself. Rows sharing a date each keep their own record;
/// nothing is merged or deduplicated.
pub fn precipitation_records(readings: &[PrecipitationReading]) -> Vec<Value> {
    readings
        .iter()
        .map(|reading| {
            let mut record = Map::new();
            record.insert(reading.date.clone(), Value::from(reading.prcp));
            Value::Object(record)
        })
        .collect()
}

/// Map station rows to five-field records
pub fn station_records(stations: &[Station]) -> Vec<StationRecord> {
    stations.iter().map(station_to_record).collect()
}

/// Map temperature rows for the most-active station; the station id is
/// constant across the result set
pub fn tobs_records(station_id: &str, readings: &[TemperatureReading]) -> Vec<TobsRecord> {
    readings
        .iter()
        .map(|reading| TobsRecord {
            station_id: station_id.to_string(),
            date: reading.date.clone(),
            temperature: reading.tobs,
        })
        .collect()
}

/// Map an aggregate result to zero or one record.
///
/// An empty match set serializes as an empty array rather than a
/// record of nulls, so clients never see a null-valued summary.
pub fn summary_records(summary: Option<TemperatureSummary>) -> Vec<TemperatureSummaryRecord> {
    summary
        .map(|s| TemperatureSummaryRecord {
            minimum: s.min,
            average: s.avg,
            maximum: s.max,
        })
        .into_iter()
        .collect()
}

/// Convert one Station to its response record
fn station_to_record(station: &Station) -> StationRecord {
    StationRecord {
        station_id: station.station_id.clone(),
        name: station.name.clone(),
        latitude: station.latitude,
        longitude: station.longitude,
        elevation: station.elevation,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
