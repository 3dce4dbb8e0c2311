//! Client configuration for the remote fetcher.

use std::time::Duration;

use url::Url;

/// Base URL of the public dog.ceo API.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Options for building a [`DogApiBreedFetcher`](crate::DogApiBreedFetcher).
#[derive(Debug, Clone)]
pub struct DogApiOptions {
    /// API root; requests go to `<base_url>/breed/<breed>/list`
    pub base_url: Url,
    /// Whole-request timeout (default: 30s, `None` uses the transport default)
    pub timeout: Option<Duration>,
    /// Connect timeout (default: 10s, `None` uses the transport default)
    pub connect_timeout: Option<Duration>,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for DogApiOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            user_agent: format!("dogapi@{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl DogApiOptions {
    /// Options pointing at a different API root, e.g. a mirror or a test server.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Default::default()
        }
    }

    pub(crate) fn build_client(&self) -> Result<reqwest::blocking::Client, reqwest::Error> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        builder.build()
    }
}
