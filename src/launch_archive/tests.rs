use super::archive::LaunchArchive;
use crate::http_handler::http_response::{launches::Launch, launchpads::Launchpad};
use serde_json::json;
use std::collections::HashMap;

fn fixture_launches() -> Vec<Launch> {
    serde_json::from_value(json!([
        {"date_utc": "2008-05-30T19:22:00.000Z", "name": "RatSat"},
        {"date_utc": "2008-11-15T02:03:00.000Z"},
        {"date_utc": "2009-05-30T19:22:00.000Z"},
        {"date_utc": "2012-11-15T02:03:00.000Z"},
        {"date_utc": "2012-05-30T19:22:00.000Z"},
        {"date_utc": "2022-11-15T02:03:00.000Z"},
    ]))
    .unwrap()
}

fn fixture_launchpads() -> Vec<Launchpad> {
    serde_json::from_value(json!([
        {"full_name": "site1", "launch_attempts": 10, "launch_successes": 9, "locality": "Omelek Island"},
        {"full_name": "site2", "launch_attempts": 11, "launch_successes": 4},
    ]))
    .unwrap()
}

fn init_archive() -> LaunchArchive {
    LaunchArchive::new(fixture_launchpads(), fixture_launches())
}

#[test]
fn test_archive_materialization() {
    let archive = init_archive();
    assert_eq!(archive.launchpads().len(), 2);
    assert_eq!(archive.launches().len(), 6);
    let first = &archive.launches()[0];
    assert_eq!(first.year(), 2008);
    assert_eq!(first.date_utc().to_rfc3339(), "2008-05-30T19:22:00+00:00");
    assert_eq!(first.extra()["name"], json!("RatSat"));
    assert_eq!(archive.launchpads()[0].extra()["locality"], json!("Omelek Island"));
}

#[test]
fn test_count_for_years_in_window() {
    let archive = init_archive();
    let counts = archive.count_launches_by_year(&[2008, 2012]);
    assert_eq!(counts, HashMap::from([(2008, 2), (2012, 2)]));
}

#[test]
fn test_out_of_window_year_is_dropped() {
    let archive = init_archive();
    let counts = archive.count_launches_by_year(&[2008, 2028]);
    assert_eq!(counts, HashMap::from([(2008, 2)]));
}

#[test]
fn test_year_without_launches_counts_zero() {
    let archive = init_archive();
    let counts = archive.count_launches_by_year(&[2010]);
    assert_eq!(counts, HashMap::from([(2010, 0)]));
}

#[test]
fn test_window_boundaries_are_inclusive() {
    let archive = init_archive();
    let counts = archive.count_launches_by_year(&[2005, 2006, 2024, 2025]);
    assert_eq!(counts, HashMap::from([(2006, 0), (2024, 0)]));
}

#[test]
fn test_site_stats_taken_verbatim() {
    let archive = init_archive();
    let stats = archive.count_by_site(&["site1", "site2"]);
    assert_eq!(stats.len(), 2);
    assert_eq!(
        (stats["site1"].launch_attempts(), stats["site1"].launch_successes()),
        (10, 9)
    );
    assert_eq!(
        (stats["site2"].launch_attempts(), stats["site2"].launch_successes()),
        (11, 4)
    );
}

#[test]
fn test_unknown_site_is_dropped() {
    let archive = init_archive();
    let stats = archive.count_by_site(&["site1", "somewhere"]);
    assert_eq!(stats.len(), 1);
    assert!(stats.contains_key("site1"));
}

#[test]
fn test_all_sites_unknown_yields_empty_result() {
    let archive = init_archive();
    let stats = archive.count_by_site(&["nowhere", "somewhere"]);
    assert!(stats.is_empty());
}

#[test]
fn test_duplicate_full_name_last_row_wins() {
    let pads: Vec<Launchpad> = serde_json::from_value(json!([
        {"full_name": "site1", "launch_attempts": 1, "launch_successes": 0},
        {"full_name": "site1", "launch_attempts": 7, "launch_successes": 6},
    ]))
    .unwrap();
    let archive = LaunchArchive::new(pads, fixture_launches());
    let stats = archive.count_by_site(&["site1"]);
    assert_eq!(
        (stats["site1"].launch_attempts(), stats["site1"].launch_successes()),
        (7, 6)
    );
}

#[test]
fn test_launch_years_distinct_ascending() {
    let archive = init_archive();
    assert_eq!(archive.launch_years(), vec![2008, 2009, 2012, 2022]);
}

#[test]
fn test_site_names_keep_table_order() {
    let archive = init_archive();
    assert_eq!(archive.site_names(), vec!["site1", "site2"]);
}

#[test]
fn test_rejects_missing_or_unparsable_date() {
    let unparsable: Result<Launch, _> = serde_json::from_value(json!({"date_utc": "yesterday"}));
    assert!(unparsable.is_err());
    let missing: Result<Launch, _> = serde_json::from_value(json!({"name": "DemoSat"}));
    assert!(missing.is_err());
}
