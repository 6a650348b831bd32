//! Stop and search records.

mod cache;
mod models;
mod repository;

pub use cache::{StopAndSearchCache, StopAndSearchQueryKey};
pub use models::StopAndSearch;
pub use repository::{StopAndSearchError, StopAndSearchRepository};
