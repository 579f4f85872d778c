/// surfsup_service: read-only HTTP API over the Hawaii historical
/// weather-observation dataset.
///
/// # Module structure
///
/// ```text
/// surfsup_service
/// ├── model    — stored entities (Station, Measurement) and query projections
/// ├── config   — deployment settings loader (service.toml)
/// ├── db       — connection setup and dataset table validation
/// ├── queries  — the read-only query layer (filter + MIN/AVG/MAX aggregates)
/// ├── mapper   — query rows to ordered JSON records
/// └── endpoint — tiny_http router for the six GET routes
/// ```

/// Public modules
pub mod config;
pub mod db;
pub mod endpoint;
pub mod mapper;
pub mod model;
pub mod queries;
