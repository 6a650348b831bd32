//! Data-set availability: which months have published data, and which forces
//! have stop-and-search coverage for them.

mod cache;
mod models;
mod repository;

pub use cache::{AvailabilityCache, AvailabilityQueryKey};
pub use models::DataSet;
pub use repository::{AvailabilityError, AvailabilityRepository};
