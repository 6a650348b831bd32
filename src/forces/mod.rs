//! Police forces and their senior officers.

mod cache;
mod models;
mod repository;

pub use cache::{PoliceForceCache, PoliceForceQueryKey};
pub use models::{EngagementMethod, PoliceForce, PoliceForceReference, PoliceOfficer};
pub use repository::{PoliceForceError, PoliceForceRepository};
