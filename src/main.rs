//! Surfs Up API - Main Server
//!
//! A read-only HTTP service over a pre-loaded historical
//! weather-observation dataset:
//! 1. Validates database connectivity and dataset tables on startup
//! 2. Serves six GET routes returning JSON arrays
//! 3. Never writes - every request is a single atomic read
//!
//! Usage:
//!   cargo run --release                # Serve on the configured port
//!   cargo run --release -- --port 9090 # Override the port from service.toml
//!
//! Environment:
//!   DATABASE_URL - PostgreSQL connection string (.env supported)

use std::env;
use surfsup_service::{config, db, endpoint};

fn main() {
    println!("🏄 Surfs Up API");
    println!("================\n");

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let mut port_override: Option<u16> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                if i + 1 < args.len() {
                    port_override = args[i + 1].parse().ok();
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Usage: {} [--port PORT]", args[0]);
                std::process::exit(1);
            }
        }
    }

    // Load deployment settings (panics with a clear message if invalid)
    let service_config = config::load_config();
    let port = port_override.unwrap_or(service_config.server.port);

    // Validate database and dataset tables; serving with a missing
    // table would mean partial functionality, so this is fatal.
    println!("📊 Connecting to database...");
    let client = match db::connect_and_verify(&["station", "measurement"]) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("\n❌ Initialization failed: {}\n", e);
            std::process::exit(1);
        }
    };
    println!("✓ Dataset tables verified\n");

    println!("   Precipitation/tobs cutoff: {}", service_config.query.precipitation_cutoff);
    println!("   Most active station: {}\n", service_config.query.most_active_station);

    // Serve forever; the accept loop only returns on server error
    if let Err(e) = endpoint::start_endpoint_server(port, client, service_config.query) {
        eprintln!("\n❌ Endpoint server error: {}", e);
        std::process::exit(1);
    }
}
