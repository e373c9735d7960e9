use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::launches::LaunchesResponse;

#[derive(Debug)]
pub struct LaunchesRequest {}

impl NoBodyHTTPRequestType for LaunchesRequest {}

impl HTTPRequestType for LaunchesRequest {
    type Response = LaunchesResponse;
    fn endpoint(&self) -> &'static str { "/launches" }
}
