use super::archive::LaunchArchive;
use crate::http_handler::http_response::launchpads::Launchpad;
use crate::warn;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Historical attempt/success counters of one launch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteStats {
    launch_attempts: u32,
    launch_successes: u32,
}

impl SiteStats {
    pub fn launch_attempts(&self) -> u32 { self.launch_attempts }
    pub fn launch_successes(&self) -> u32 { self.launch_successes }
}

impl From<&Launchpad> for SiteStats {
    fn from(pad: &Launchpad) -> Self {
        SiteStats {
            launch_attempts: pad.launch_attempts(),
            launch_successes: pad.launch_successes(),
        }
    }
}

impl LaunchArchive {
    /// Inclusive window of years the archive answers launch counts for.
    pub const YEAR_WINDOW: RangeInclusive<i32> = 2006..=2024;

    /// Counts launches per requested year.
    ///
    /// Years outside [`Self::YEAR_WINDOW`] are logged and omitted from the
    /// result; a year inside the window with no matching launches still
    /// appears with a count of zero. The result carries no ordering
    /// guarantee.
    pub fn count_launches_by_year(&self, years: &[i32]) -> HashMap<i32, usize> {
        let (valid, invalid): (Vec<i32>, Vec<i32>) =
            years.iter().copied().partition(|year| Self::YEAR_WINDOW.contains(year));
        if !invalid.is_empty() {
            warn!("The following years are invalid: {invalid:?}");
        }
        valid
            .into_iter()
            .map(|year| {
                let count = self.launches().iter().filter(|l| l.year() == year).count();
                (year, count)
            })
            .collect()
    }

    /// Looks up the attempt/success counters for the requested sites.
    ///
    /// Names missing from the launchpad table are logged and omitted from
    /// the result. When `full_name` occurs more than once, the later row
    /// wins.
    pub fn count_by_site(&self, sites: &[&str]) -> HashMap<String, SiteStats> {
        let by_name: HashMap<&str, SiteStats> = self
            .launchpads()
            .iter()
            .map(|pad| (pad.full_name(), SiteStats::from(pad)))
            .collect();
        let (valid, unknown): (Vec<&str>, Vec<&str>) =
            sites.iter().copied().partition(|site| by_name.contains_key(*site));
        if !unknown.is_empty() {
            warn!("Cannot find the following sites: {unknown:?}");
        }
        valid.into_iter().map(|site| (site.to_owned(), by_name[site])).collect()
    }
}
