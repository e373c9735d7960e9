use super::response_common::SerdeJSONBodyHTTPResponseType;
use chrono::Datelike;
use std::collections::HashMap;

/// One historical launch as returned by the launches endpoint.
///
/// Only `date_utc` is part of the typed schema; every other column the API
/// ships is kept verbatim in `extra`.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Launch {
    date_utc: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    extra: HashMap<String, serde_json::Value>,
}

impl Launch {
    pub fn date_utc(&self) -> chrono::DateTime<chrono::Utc> { self.date_utc }
    pub fn year(&self) -> i32 { self.date_utc.year() }
    pub fn extra(&self) -> &HashMap<String, serde_json::Value> { &self.extra }
}

#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct LaunchesResponse(Vec<Launch>);

impl SerdeJSONBodyHTTPResponseType for LaunchesResponse {}

impl LaunchesResponse {
    pub fn into_records(self) -> Vec<Launch> { self.0 }
}
