#![allow(dead_code)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod logger;

mod http_handler;
mod launch_archive;

use crate::http_handler::http_client::HTTPClient;
use crate::launch_archive::archive::LaunchArchive;
use itertools::Itertools;
use std::env;

const DEFAULT_API_URL: &str = "https://api.spacexdata.com/v4";

#[tokio::main]
async fn main() {
    let base_url_var = env::var("SPACEX_API_URL");
    let base_url = base_url_var.as_ref().map_or(DEFAULT_API_URL, |v| v.as_str());
    let client = HTTPClient::new(base_url);

    info!("Fetching launchpad and launch tables from {base_url}.");
    let archive = LaunchArchive::fetch(&client)
        .await
        .unwrap_or_else(|e| fatal!("Fetching launch data failed: {e}"));
    info!(
        "Materialized {} launchpads and {} launches.",
        archive.launchpads().len(),
        archive.launches().len()
    );

    let years = archive.launch_years();
    let launches_per_year = archive.count_launches_by_year(&years);
    println!("{:>6}  {:>8}", "Year", "Launches");
    for (year, count) in launches_per_year.iter().sorted_unstable() {
        println!("{year:>6}  {count:>8}");
    }

    let sites = archive.site_names();
    let stats_per_site = archive.count_by_site(&sites);
    println!("{:<42}  {:>8}  {:>9}", "Site", "Attempts", "Successes");
    for (site, stats) in stats_per_site.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        println!(
            "{site:<42}  {:>8}  {:>9}",
            stats.launch_attempts(),
            stats.launch_successes()
        );
    }
}
