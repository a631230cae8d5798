//! Runner configuration

use alumni_probe_domain::BaseUrl;

use crate::ApplicationResult;

/// Settings for a [`TestRunner`](crate::TestRunner).
///
/// The base endpoint is the only knob; everything else about a run is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Endpoint every case path is joined onto.
    pub base_url: BaseUrl,
}

impl RunnerConfig {
    /// Creates a configuration for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> ApplicationResult<Self> {
        Ok(Self {
            base_url: BaseUrl::parse(base_url)?,
        })
    }
}
