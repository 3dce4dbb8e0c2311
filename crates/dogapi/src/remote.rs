//! Fetcher backed by the dog.ceo HTTP API.

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::error::BreedNotFound;
use crate::fetcher::BreedFetcher;
use crate::options::DogApiOptions;

/// Value of the `status` field when the API rejects a breed.
const STATUS_ERROR: &str = "error";

/// Body of `GET /breed/{breed}/list`.
///
/// `message` is an array of sub-breeds on success and a plain string (or
/// absent) on error, so it is only decoded once the status is known.
#[derive(Debug, Deserialize)]
struct BreedListResponse {
    status: String,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

/// Ways a single remote lookup can fail before it is reported as [`BreedNotFound`].
#[derive(Debug, thiserror::Error)]
enum RemoteError {
    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("API reported an error")]
    Api,

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RemoteError {
    fn into_breed_not_found(self, breed: &str) -> BreedNotFound {
        match self {
            RemoteError::Status(code) => BreedNotFound::new(format!("HTTP error: {code}")),
            RemoteError::Api => BreedNotFound::new(breed),
            RemoteError::Transport(_) => {
                BreedNotFound::new(format!("Network error for breed: {breed}"))
            }
            RemoteError::Malformed(_) => {
                BreedNotFound::new(format!("Malformed response for breed: {breed}"))
            }
        }
    }
}

/// [`BreedFetcher`] that queries the dog.ceo API.
///
/// All failures are reported as [`BreedNotFound`]: HTTP error statuses, an
/// `"error"` status in the body, network failures and bodies that do not
/// have the expected shape. Each call makes exactly one request; nothing is
/// retried.
#[derive(Debug, Clone)]
pub struct DogApiBreedFetcher {
    client: Client,
    base_url: Url,
}

impl DogApiBreedFetcher {
    /// Build a fetcher with its own HTTP client configured from `options`.
    pub fn new(options: DogApiOptions) -> Result<Self, reqwest::Error> {
        let client = options.build_client()?;
        Ok(Self::with_client(client, options.base_url))
    }

    /// Use an existing client, e.g. one shared with other parts of an application.
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the sub-breed listing for `breed`. The breed is inserted verbatim.
    fn list_url(&self, breed: &str) -> String {
        format!(
            "{}/breed/{}/list",
            self.base_url.as_str().trim_end_matches('/'),
            breed
        )
    }

    fn request(&self, breed: &str) -> Result<Vec<String>, RemoteError> {
        let url = self.list_url(breed);
        tracing::debug!(%url, "requesting sub-breeds");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let parsed: BreedListResponse = serde_json::from_str(&body)?;
        if parsed.status == STATUS_ERROR {
            return Err(RemoteError::Api);
        }

        // A missing list decodes from null and fails as malformed.
        let message = parsed.message.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(message)?)
    }
}

impl BreedFetcher for DogApiBreedFetcher {
    fn fetch_sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        self.request(breed).map_err(|err| {
            match &err {
                RemoteError::Status(_) | RemoteError::Api => {
                    tracing::debug!(breed, error = %err, "breed lookup rejected");
                }
                RemoteError::Transport(_) | RemoteError::Malformed(_) => {
                    tracing::warn!(breed, error = %err, "breed lookup failed");
                }
            }
            err.into_breed_not_found(breed)
        })
    }
}
