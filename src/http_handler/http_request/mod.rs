pub mod launches_get;
pub mod launchpads_get;
pub mod request_common;
