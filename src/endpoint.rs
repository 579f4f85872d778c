/// HTTP endpoint for querying the observation dataset
///
/// Serves the six read-only routes over tiny_http. Every successful
/// JSON route answers 200 with an array body; the landing page is a
/// plain HTML fragment listing the routes.
///
/// Endpoints:
/// - GET /                                    - Welcome page
/// - GET /api/v1.0/precipitation              - Daily precipitation since the cutoff
/// - GET /api/v1.0/stations                   - All station metadata
/// - GET /api/v1.0/tobs                       - Temperatures at the most-active station
/// - GET /api/v1.0/{start_date}               - MIN/AVG/MAX temperature from start_date
/// - GET /api/v1.0/{start_date}/{end_date}    - MIN/AVG/MAX over an inclusive range

use crate::config::QueryConfig;
use crate::mapper;
use crate::queries;
use postgres::Client;
use serde::Serialize;
use std::io::Cursor;

// ---------------------------------------------------------------------------
// Route Resolution
// ---------------------------------------------------------------------------

/// Resolved route for one request path
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Welcome,
    Precipitation,
    Stations,
    Tobs,
    /// /api/v1.0/{start_date}
    SummaryFrom(String),
    /// /api/v1.0/{start_date}/{end_date}
    SummaryRange(String, String),
    NotFound,
}

/// Resolve a request URL to a route.
///
/// Date-shaped segments are captured as opaque strings; no format
/// validation happens here or downstream. Fixed route names win over
/// the single-segment capture, so a start date literally named
/// "stations" is unreachable - same shadowing the path table implies.
pub fn route(url: &str) -> Route {
    // Ignore any query string
    let path = url.split('?').next().unwrap_or(url);

    if path == "/" {
        return Route::Welcome;
    }

    let rest = match path.strip_prefix("/api/v1.0/") {
        Some(rest) => rest,
        None => return Route::NotFound,
    };

    match rest {
        "precipitation" => return Route::Precipitation,
        "stations" => return Route::Stations,
        "tobs" => return Route::Tobs,
        _ => {}
    }

    let segments: Vec<&str> = rest.split('/').collect();
    match segments.as_slice() {
        [start] if !start.is_empty() => Route::SummaryFrom(start.to_string()),
        [start, end] if !start.is_empty() && !end.is_empty() => {
            Route::SummaryRange(start.to_string(), end.to_string())
        }
        _ => Route::NotFound,
    }
}

// ---------------------------------------------------------------------------
// HTTP Server
// ---------------------------------------------------------------------------

/// Start the endpoint server on the specified port.
///
/// Single accept loop over one shared database connection: each
/// request runs to completion before the next is read, so all query
/// execution is serialized behind the one client handle.
pub fn start_endpoint_server(
    port: u16,
    mut client: Client,
    query_config: QueryConfig,
) -> Result<(), String> {
    let server = tiny_http::Server::http(format!("0.0.0.0:{}", port))
        .map_err(|e| format!("Failed to start HTTP server: {}", e))?;

    println!("📡 HTTP endpoint listening on http://0.0.0.0:{}", port);
    for path in ROUTE_LIST {
        println!("   GET {}", path);
    }
    println!();

    for request in server.incoming_requests() {
        println!("Server received request for {}", request.url());

        let response = if request.method() != &tiny_http::Method::Get {
            create_response(
                405,
                serde_json::json!({ "error": "Method not allowed", "allowed": ["GET"] }),
            )
        } else {
            handle_request(&mut client, &query_config, request.url())
        };

        if let Err(e) = request.respond(response) {
            eprintln!("Failed to send response: {}", e);
        }
    }

    Ok(())
}

/// Dispatch one GET request to its query + mapper pair
fn handle_request(
    client: &mut Client,
    query_config: &QueryConfig,
    url: &str,
) -> tiny_http::Response<Cursor<Vec<u8>>> {
    match route(url) {
        Route::Welcome => handle_welcome(),
        Route::Precipitation => {
            json_result(
                queries::precipitation_since(client, &query_config.precipitation_cutoff)
                    .map(|rows| mapper::precipitation_records(&rows)),
            )
        }
        Route::Stations => {
            json_result(queries::all_stations(client).map(|rows| mapper::station_records(&rows)))
        }
        Route::Tobs => {
            json_result(
                queries::temperatures_for_station(
                    client,
                    &query_config.precipitation_cutoff,
                    &query_config.most_active_station,
                )
                .map(|rows| mapper::tobs_records(&query_config.most_active_station, &rows)),
            )
        }
        Route::SummaryFrom(start) => {
            json_result(
                queries::temperature_summary(client, &start).map(mapper::summary_records),
            )
        }
        Route::SummaryRange(start, end) => {
            json_result(
                queries::temperature_summary_range(client, &start, &end)
                    .map(mapper::summary_records),
            )
        }
        Route::NotFound => create_response(
            404,
            serde_json::json!({
                "error": "Not found",
                "available_endpoints": ROUTE_LIST,
            }),
        ),
    }
}

/// Handle / - static welcome page listing the routes
fn handle_welcome() -> tiny_http::Response<Cursor<Vec<u8>>> {
    tiny_http::Response::from_string(welcome_body())
        .with_status_code(tiny_http::StatusCode::from(200))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
                .unwrap(),
        )
}

/// Welcome page body - an HTML fragment, the one non-JSON response
fn welcome_body() -> String {
    let mut body = String::from("Welcome to the Surfs Up API!<br/>Available Routes:<br/>");
    for path in &ROUTE_LIST[1..] {
        body.push_str(path);
        body.push_str("<br/>");
    }
    body
}

/// Route paths in the order the welcome page and 404 payload list them
const ROUTE_LIST: [&str; 6] = [
    "/",
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/{start_date}",
    "/api/v1.0/{start_date}/{end_date}",
];

/// Serialize a query result as a 200 array body, or a 500 error object
fn json_result<T: Serialize>(
    result: Result<Vec<T>, postgres::Error>,
) -> tiny_http::Response<Cursor<Vec<u8>>> {
    match result {
        Ok(records) => create_response(200, serde_json::to_value(&records).unwrap()),
        Err(e) => {
            eprintln!("Query failed: {}", e);
            create_response(500, serde_json::json!({ "error": format!("Query failed: {}", e) }))
        }
    }
}

/// Create HTTP response with JSON body
fn create_response(status_code: u16, json: serde_json::Value) -> tiny_http::Response<Cursor<Vec<u8>>> {
    let body = serde_json::to_string(&json).unwrap();
    let bytes = body.into_bytes();

    tiny_http::Response::from_data(bytes)
        .with_status_code(tiny_http::StatusCode::from(status_code))
        .with_header(
            tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
        )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_routes_resolve() {
        assert_eq!(route("/"), Route::Welcome);
        assert_eq!(route("/api/v1.0/precipitation"), Route::Precipitation);
        assert_eq!(route("/api/v1.0/stations"), Route::Stations);
        assert_eq!(route("/api/v1.0/tobs"), Route::Tobs);
    }

    #[test]
    fn test_date_segments_captured_opaquely() {
        assert_eq!(
            route("/api/v1.0/2017-01-01"),
            Route::SummaryFrom("2017-01-01".to_string())
        );
        assert_eq!(
            route("/api/v1.0/2017-01-01/2017-01-02"),
            Route::SummaryRange("2017-01-01".to_string(), "2017-01-02".to_string())
        );
        // Not a date, still captured - the query layer matches zero rows
        assert_eq!(
            route("/api/v1.0/yesterday"),
            Route::SummaryFrom("yesterday".to_string())
        );
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(route("/api/v1.0"), Route::NotFound);
        assert_eq!(route("/api/v2.0/stations"), Route::NotFound);
        assert_eq!(route("/api/v1.0/"), Route::NotFound);
        assert_eq!(route("/api/v1.0/a/b/c"), Route::NotFound);
        assert_eq!(route("/api/v1.0/2017-01-01/"), Route::NotFound);
        assert_eq!(route("/favicon.ico"), Route::NotFound);
    }

    #[test]
    fn test_query_strings_ignored() {
        assert_eq!(route("/api/v1.0/stations?pretty=1"), Route::Stations);
        assert_eq!(
            route("/api/v1.0/2017-01-01?x=y"),
            Route::SummaryFrom("2017-01-01".to_string())
        );
    }

    #[test]
    fn test_welcome_page_lists_every_api_route() {
        let body = welcome_body();
        assert!(body.starts_with("Welcome to the Surfs Up API!"));
        for path in &ROUTE_LIST[1..] {
            assert!(body.contains(path), "Welcome page should list {}", path);
        }
    }
}
