//! Sub-breed lookups for the dog.ceo catalog.
//!
//! The crate is built around the [`BreedFetcher`] capability: given a breed
//! name, return the ordered list of its sub-breeds or fail with
//! [`BreedNotFound`].
//!
//! - [`DogApiBreedFetcher`] talks to the remote HTTP API.
//! - [`CachingBreedFetcher`] wraps any fetcher with a read-through cache and
//!   counts every call made to it. Failed lookups are never cached.
//!
//! # Example
//!
//! ```no_run
//! use dogapi::{BreedFetcher, CachingBreedFetcher, DogApiBreedFetcher, DogApiOptions};
//!
//! let remote = DogApiBreedFetcher::new(DogApiOptions::default()).unwrap();
//! let mut fetcher = CachingBreedFetcher::new(remote);
//!
//! let hounds = fetcher.fetch_sub_breeds("hound").unwrap();
//! let again = fetcher.fetch_sub_breeds("hound").unwrap();
//! assert_eq!(hounds, again);
//! assert_eq!(fetcher.calls_made(), 2);
//! ```

mod caching;
mod error;
mod fetcher;
mod options;
mod remote;

pub use caching::CachingBreedFetcher;
pub use error::BreedNotFound;
pub use fetcher::BreedFetcher;
pub use options::{DEFAULT_BASE_URL, DogApiOptions};
pub use remote::DogApiBreedFetcher;
