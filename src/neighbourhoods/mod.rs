//! Neighbourhood policing data: teams, boundaries, priorities.

mod cache;
mod models;
mod repository;

pub use cache::{NeighbourhoodCache, NeighbourhoodQueryKey};
pub use models::{
  Link, Neighbourhood, NeighbourhoodPolicingTeam, NeighbourhoodPriority, NeighbourhoodReference,
};
pub use repository::{NeighbourhoodError, NeighbourhoodRepository};
