//! Cache-aside repository for neighbourhood queries.

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::cache::CacheStore;
use crate::client::{decode, ApiClient, ApiError};
use crate::forces::PoliceOfficer;
use crate::models::{available_data_region, Coordinate};

use super::cache::NeighbourhoodCache;
use super::models::{
  Neighbourhood, NeighbourhoodPolicingTeam, NeighbourhoodPriority, NeighbourhoodReference,
};

/// Errors produced by neighbourhood queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NeighbourhoodError {
  /// The coordinate lies outside the region the data set covers.
  #[error("location outside of the available data set region")]
  LocationOutsideOfDataSetRegion,
  /// No such neighbourhood, or no team covering the point.
  #[error("not found")]
  NotFound,
  #[error("network error: {0}")]
  Network(String),
  #[error("unknown error")]
  Unknown,
}

impl From<ApiError> for NeighbourhoodError {
  fn from(error: ApiError) -> Self {
    match error {
      ApiError::NotFound => Self::NotFound,
      ApiError::Network { message } => Self::Network(message),
      ApiError::Decode { .. } | ApiError::UnexpectedStatus { .. } => Self::Unknown,
    }
  }
}

/// Repository for neighbourhood policing data.
pub struct NeighbourhoodRepository<C, S> {
  client: Arc<C>,
  cache: NeighbourhoodCache<S>,
}

impl<C: ApiClient, S: CacheStore> NeighbourhoodRepository<C, S> {
  pub fn new(client: Arc<C>, store: Arc<S>) -> Self {
    Self {
      client,
      cache: NeighbourhoodCache::new(store),
    }
  }

  /// All neighbourhoods of a force.
  pub async fn neighbourhoods(
    &self,
    force_id: &str,
  ) -> Result<Vec<NeighbourhoodReference>, NeighbourhoodError> {
    if let Some(cached) = self.cache.neighbourhoods(force_id) {
      return Ok(cached);
    }

    debug!(force_id, "fetching neighbourhoods");
    let payload = self.client.get(&format!("{force_id}/neighbourhoods")).await?;
    let neighbourhoods: Vec<NeighbourhoodReference> = decode(payload)?;

    self
      .cache
      .set_neighbourhoods(force_id, Some(neighbourhoods.clone()));
    Ok(neighbourhoods)
  }

  /// A single neighbourhood of a force.
  pub async fn neighbourhood(
    &self,
    id: &str,
    force_id: &str,
  ) -> Result<Neighbourhood, NeighbourhoodError> {
    if let Some(cached) = self.cache.neighbourhood(id, force_id) {
      return Ok(cached);
    }

    debug!(force_id, id, "fetching neighbourhood");
    let payload = self.client.get(&format!("{force_id}/{id}")).await?;
    let neighbourhood: Neighbourhood = decode(payload)?;

    self
      .cache
      .set_neighbourhood(id, force_id, Some(neighbourhood.clone()));
    Ok(neighbourhood)
  }

  /// The boundary polygon of a neighbourhood.
  pub async fn boundary(
    &self,
    id: &str,
    force_id: &str,
  ) -> Result<Vec<Coordinate>, NeighbourhoodError> {
    if let Some(cached) = self.cache.boundary(id, force_id) {
      return Ok(cached);
    }

    debug!(force_id, id, "fetching neighbourhood boundary");
    let payload = self.client.get(&format!("{force_id}/{id}/boundary")).await?;
    let boundary: Vec<Coordinate> = decode(payload)?;

    self.cache.set_boundary(id, force_id, Some(boundary.clone()));
    Ok(boundary)
  }

  /// Officers of a neighbourhood team.
  pub async fn police_officers(
    &self,
    id: &str,
    force_id: &str,
  ) -> Result<Vec<PoliceOfficer>, NeighbourhoodError> {
    if let Some(cached) = self.cache.police_officers(id, force_id) {
      return Ok(cached);
    }

    debug!(force_id, id, "fetching neighbourhood officers");
    let payload = self.client.get(&format!("{force_id}/{id}/people")).await?;
    let officers: Vec<PoliceOfficer> = decode(payload)?;

    self
      .cache
      .set_police_officers(id, force_id, Some(officers.clone()));
    Ok(officers)
  }

  /// Policing priorities of a neighbourhood.
  pub async fn priorities(
    &self,
    id: &str,
    force_id: &str,
  ) -> Result<Vec<NeighbourhoodPriority>, NeighbourhoodError> {
    if let Some(cached) = self.cache.priorities(id, force_id) {
      return Ok(cached);
    }

    debug!(force_id, id, "fetching neighbourhood priorities");
    let payload = self.client.get(&format!("{force_id}/{id}/priorities")).await?;
    let priorities: Vec<NeighbourhoodPriority> = decode(payload)?;

    self
      .cache
      .set_priorities(id, force_id, Some(priorities.clone()));
    Ok(priorities)
  }

  /// The team responsible for a coordinate.
  pub async fn neighbourhood_policing_team(
    &self,
    coordinate: Coordinate,
  ) -> Result<NeighbourhoodPolicingTeam, NeighbourhoodError> {
    if !available_data_region().contains(coordinate) {
      return Err(NeighbourhoodError::LocationOutsideOfDataSetRegion);
    }

    if let Some(cached) = self.cache.policing_team(coordinate) {
      return Ok(cached);
    }

    debug!("locating neighbourhood policing team");
    let path = format!(
      "locate-neighbourhood?q={},{}",
      coordinate.latitude, coordinate.longitude
    );
    let payload = self.client.get(&path).await?;
    let team: NeighbourhoodPolicingTeam = decode(payload)?;

    self.cache.set_policing_team(coordinate, Some(team.clone()));
    Ok(team)
  }
}
