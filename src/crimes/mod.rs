//! Street-level crime data.

mod cache;
mod models;
mod repository;

pub use cache::{CrimeCache, CrimeQueryKey};
pub use models::{Crime, CrimeCategory, OutcomeStatus};
pub use repository::{CrimeError, CrimeRepository};
