pub mod launches;
pub mod launchpads;
pub mod response_common;
