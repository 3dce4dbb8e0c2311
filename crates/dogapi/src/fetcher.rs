//! The fetch capability shared by the remote client and the cache.

use crate::error::BreedNotFound;

/// Looks up the sub-breeds of a breed.
///
/// Implementations return sub-breeds in the order the source provides them.
/// An empty list is a valid answer for a breed without sub-breeds.
pub trait BreedFetcher {
    /// Fetch the sub-breeds of `breed`.
    fn fetch_sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound>;
}

impl<F: BreedFetcher + ?Sized> BreedFetcher for &mut F {
    fn fetch_sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        (**self).fetch_sub_breeds(breed)
    }
}

impl<F: BreedFetcher + ?Sized> BreedFetcher for Box<F> {
    fn fetch_sub_breeds(&mut self, breed: &str) -> Result<Vec<String>, BreedNotFound> {
        (**self).fetch_sub_breeds(breed)
    }
}
