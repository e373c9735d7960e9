use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::http_response::launchpads::LaunchpadsResponse;

#[derive(Debug)]
pub struct LaunchpadsRequest {}

impl NoBodyHTTPRequestType for LaunchpadsRequest {}

impl HTTPRequestType for LaunchpadsRequest {
    type Response = LaunchpadsResponse;
    fn endpoint(&self) -> &'static str { "/launchpads" }
}
