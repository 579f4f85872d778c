/// Service configuration loader - parses service.toml
///
/// Separates deployment settings (bind port, query cutoff date, the
/// most-active station id) from code, so the dataset-specific
/// constants can change without recompiling the service.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

/// Root configuration structure for TOML parsing
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub query: QueryConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

/// Dataset-specific query constants
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    /// Fixed cutoff for the precipitation and tobs routes ("2016-08-23"
    /// in this deployment - one year before the end of the dataset)
    pub precipitation_cutoff: String,

    /// Station with the most measurement rows in the dataset
    pub most_active_station: String,
}

/// Loads service configuration from service.toml.
///
/// # Panics
/// Panics if the configuration file is missing, malformed, or carries
/// an invalid cutoff date. This is intentional — the service cannot
/// operate without valid query constants.
///
/// # File Location
/// Expects `service.toml` in the current working directory (project
/// root when running via `cargo run`).
pub fn load_config() -> ServiceConfig {
    let config_path = "service.toml";

    let contents = fs::read_to_string(config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path, e));

    let config: ServiceConfig = toml::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", config_path, e));

    // The cutoff is compared against TEXT dates in SQL; a typo here
    // would silently match zero rows on two routes, so reject it now.
    // Request path parameters are deliberately never validated.
    NaiveDate::parse_from_str(&config.query.precipitation_cutoff, "%Y-%m-%d")
        .unwrap_or_else(|e| {
            panic!(
                "{}: precipitation_cutoff {:?} is not a YYYY-MM-DD date: {}",
                config_path, config.query.precipitation_cutoff, e
            )
        });

    config
}
