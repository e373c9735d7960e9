use super::response_common::SerdeJSONBodyHTTPResponseType;
use std::collections::HashMap;

/// One launch site as returned by the launchpads endpoint.
///
/// `full_name` acts as the natural key of the table; uniqueness is assumed
/// but not enforced by the API.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Launchpad {
    full_name: String,
    launch_attempts: u32,
    launch_successes: u32,
    #[serde(flatten)]
    extra: HashMap<String, serde_json::Value>,
}

impl Launchpad {
    pub fn full_name(&self) -> &str { &self.full_name }
    pub fn launch_attempts(&self) -> u32 { self.launch_attempts }
    pub fn launch_successes(&self) -> u32 { self.launch_successes }
    pub fn extra(&self) -> &HashMap<String, serde_json::Value> { &self.extra }
}

#[derive(serde::Deserialize, Debug)]
#[serde(transparent)]
pub struct LaunchpadsResponse(Vec<Launchpad>);

impl SerdeJSONBodyHTTPResponseType for LaunchpadsResponse {}

impl LaunchpadsResponse {
    pub fn into_records(self) -> Vec<Launchpad> { self.0 }
}
