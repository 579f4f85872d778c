/// Read-only query layer over the observation dataset
///
/// One function per route, each a single bounded SELECT. Dates are
/// TEXT compared lexicographically, which is chronological for
/// well-formed ISO dates; a malformed parameter simply matches zero
/// rows. Nothing here writes.

use crate::model::{PrecipitationReading, Station, TemperatureReading, TemperatureSummary};
use postgres::Client;

/// All (date, prcp) pairs with date >= the cutoff, dataset order
pub fn precipitation_since(
    client: &mut Client,
    date: &str,
) -> Result<Vec<PrecipitationReading>, postgres::Error> {
    let rows = client.query(
        "SELECT date, prcp FROM measurement WHERE date >= $1",
        &[&date],
    )?;

    Ok(rows
        .iter()
        .map(|row| PrecipitationReading {
            date: row.get(0),
            prcp: row.get(1),
        })
        .collect())
}

/// Every station row, fixed column order
pub fn all_stations(client: &mut Client) -> Result<Vec<Station>, postgres::Error> {
    let rows = client.query(
        "SELECT station_id, name, latitude, longitude, elevation FROM station",
        &[],
    )?;

    Ok(rows
        .iter()
        .map(|row| Station {
            station_id: row.get(0),
            name: row.get(1),
            latitude: row.get(2),
            longitude: row.get(3),
            elevation: row.get(4),
        })
        .collect())
}

/// (date, tobs) pairs for one station with date >= the cutoff
pub fn temperatures_for_station(
    client: &mut Client,
    date: &str,
    station_id: &str,
) -> Result<Vec<TemperatureReading>, postgres::Error> {
    let rows = client.query(
        "SELECT date, tobs FROM measurement WHERE date >= $1 AND station_id = $2",
        &[&date, &station_id],
    )?;

    Ok(rows
        .iter()
        .map(|row| TemperatureReading {
            date: row.get(0),
            tobs: row.get(1),
        })
        .collect())
}

/// MIN/AVG/MAX of tobs from start_date to the end of the dataset.
///
/// The aggregates always yield one row; when no measurement matches it
/// is all NULLs, surfaced here as None.
pub fn temperature_summary(
    client: &mut Client,
    start_date: &str,
) -> Result<Option<TemperatureSummary>, postgres::Error> {
    let row = client.query_one(
        "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement WHERE date >= $1",
        &[&start_date],
    )?;

    Ok(summary_from_aggregates(row.get(0), row.get(1), row.get(2)))
}

/// MIN/AVG/MAX of tobs between start_date and end_date inclusive
pub fn temperature_summary_range(
    client: &mut Client,
    start_date: &str,
    end_date: &str,
) -> Result<Option<TemperatureSummary>, postgres::Error> {
    let row = client.query_one(
        "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement
         WHERE date >= $1 AND date <= $2",
        &[&start_date, &end_date],
    )?;

    Ok(summary_from_aggregates(row.get(0), row.get(1), row.get(2)))
}

/// Collapse the nullable aggregate columns into one Option.
///
/// MIN, AVG, and MAX are NULL together or not at all (they range over
/// the same non-null column), so matching on min alone is enough.
fn summary_from_aggregates(
    min: Option<f64>,
    avg: Option<f64>,
    max: Option<f64>,
) -> Option<TemperatureSummary> {
    match (min, avg, max) {
        (Some(min), Some(avg), Some(max)) => Some(TemperatureSummary { min, avg, max }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn test_empty_aggregates_collapse_to_none() {
        assert_eq!(summary_from_aggregates(None, None, None), None);
    }

    #[test]
    fn test_populated_aggregates_build_summary() {
        let summary = summary_from_aggregates(Some(70.0), Some(72.5), Some(75.0))
            .expect("All-Some aggregates should build a summary");
        assert_eq!(summary.min, 70.0);
        assert_eq!(summary.avg, 72.5);
        assert_eq!(summary.max, 75.0);
    }

    #[test]
    #[ignore] // Only run when database is available
    fn test_inverted_range_matches_zero_rows() {
        let mut client = db::connect_and_verify(&["station", "measurement"])
            .expect("Database should be reachable");

        let summary = temperature_summary_range(&mut client, "2017-01-02", "2017-01-01")
            .expect("Query should succeed");
        assert!(summary.is_none(), "start > end should match zero rows");
    }

    #[test]
    #[ignore] // Only run when database is available
    fn test_malformed_date_matches_zero_rows() {
        let mut client = db::connect_and_verify(&["station", "measurement"])
            .expect("Database should be reachable");

        // Lexicographic comparison: "not-a-date" sorts after every
        // "YYYY-MM-DD" string, so nothing matches and nothing errors.
        let readings = precipitation_since(&mut client, "not-a-date")
            .expect("Malformed dates should not error");
        assert!(readings.is_empty());
    }
}
