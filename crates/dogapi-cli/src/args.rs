//! Shared argument definitions.

use std::time::Duration;

use dogapi::{DEFAULT_BASE_URL, DogApiOptions};
use url::Url;

/// Remote API arguments.
///
/// Can be embedded in other command Args using `#[command(flatten)]`.
#[derive(clap::Args, Clone)]
pub struct ApiArgs {
    /// API root to query
    #[arg(long, env = "DOG_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

impl ApiArgs {
    /// Build DogApiOptions from command-line arguments.
    pub fn to_options(&self) -> DogApiOptions {
        DogApiOptions {
            timeout: Some(Duration::from_secs(self.timeout)),
            ..DogApiOptions::with_base_url(self.base_url.clone())
        }
    }
}
