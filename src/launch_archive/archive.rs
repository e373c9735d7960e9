use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{
        launches_get::LaunchesRequest, launchpads_get::LaunchpadsRequest,
        request_common::NoBodyHTTPRequestType,
    },
    http_response::{launches::Launch, launchpads::Launchpad, response_common::ResponseError},
};
use itertools::Itertools;

/// In-memory snapshot of the launchpad and launch tables.
///
/// Built once from the two API collections; read-only afterwards. All
/// aggregate queries are pure reads over the snapshot.
#[derive(Debug)]
pub struct LaunchArchive {
    launchpads: Vec<Launchpad>,
    launches: Vec<Launch>,
}

impl LaunchArchive {
    /// Fetches both collections and materializes them into tables.
    ///
    /// A failure of either fetch (unreachable endpoint, error status or an
    /// undecodable body) aborts initialization and is returned to the caller.
    pub async fn fetch(client: &HTTPClient) -> Result<LaunchArchive, ResponseError> {
        let launchpads = LaunchpadsRequest {}.send_request(client).await?;
        let launches = LaunchesRequest {}.send_request(client).await?;
        Ok(Self::new(launchpads.into_records(), launches.into_records()))
    }

    /// Builds an archive from already-materialized tables.
    pub fn new(launchpads: Vec<Launchpad>, launches: Vec<Launch>) -> LaunchArchive {
        LaunchArchive { launchpads, launches }
    }

    pub fn launchpads(&self) -> &[Launchpad] { &self.launchpads }
    pub fn launches(&self) -> &[Launch] { &self.launches }

    /// Distinct years with at least one launch, ascending.
    pub fn launch_years(&self) -> Vec<i32> {
        self.launches.iter().map(Launch::year).sorted_unstable().dedup().collect()
    }

    /// Every site name in the launchpad table, in table order.
    pub fn site_names(&self) -> Vec<&str> {
        self.launchpads.iter().map(Launchpad::full_name).collect()
    }
}
