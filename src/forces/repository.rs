//! Cache-aside repository for police force queries.

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::cache::CacheStore;
use crate::client::{decode, ApiClient, ApiError};

use super::cache::PoliceForceCache;
use super::models::{PoliceForce, PoliceForceReference, PoliceOfficer};

/// Errors produced by police force queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoliceForceError {
  /// No force with the requested id.
  #[error("not found")]
  NotFound,
  #[error("network error: {0}")]
  Network(String),
  #[error("unknown error")]
  Unknown,
}

impl From<ApiError> for PoliceForceError {
  fn from(error: ApiError) -> Self {
    match error {
      ApiError::NotFound => Self::NotFound,
      ApiError::Network { message } => Self::Network(message),
      ApiError::Decode { .. } | ApiError::UnexpectedStatus { .. } => Self::Unknown,
    }
  }
}

/// Repository for police force data.
pub struct PoliceForceRepository<C, S> {
  client: Arc<C>,
  cache: PoliceForceCache<S>,
}

impl<C: ApiClient, S: CacheStore> PoliceForceRepository<C, S> {
  pub fn new(client: Arc<C>, store: Arc<S>) -> Self {
    Self {
      client,
      cache: PoliceForceCache::new(store),
    }
  }

  /// All police forces, alphabetically by id.
  pub async fn police_forces(&self) -> Result<Vec<PoliceForceReference>, PoliceForceError> {
    if let Some(cached) = self.cache.police_forces() {
      return Ok(cached);
    }

    debug!("fetching police forces");
    let payload = self.client.get("forces").await?;
    let forces: Vec<PoliceForceReference> = decode(payload)?;

    self.cache.set_police_forces(Some(forces.clone()));
    Ok(forces)
  }

  /// A single force by id.
  pub async fn police_force(&self, force_id: &str) -> Result<PoliceForce, PoliceForceError> {
    if let Some(cached) = self.cache.police_force(force_id) {
      return Ok(cached);
    }

    debug!(force_id, "fetching police force");
    let payload = self.client.get(&format!("forces/{force_id}")).await?;
    let force: PoliceForce = decode(payload)?;

    self.cache.set_police_force(force_id, Some(force.clone()));
    Ok(force)
  }

  /// Senior officers of a force.
  pub async fn senior_officers(
    &self,
    force_id: &str,
  ) -> Result<Vec<PoliceOfficer>, PoliceForceError> {
    if let Some(cached) = self.cache.senior_officers(force_id) {
      return Ok(cached);
    }

    debug!(force_id, "fetching senior officers");
    let payload = self.client.get(&format!("forces/{force_id}/people")).await?;
    let officers: Vec<PoliceOfficer> = decode(payload)?;

    self.cache.set_senior_officers(force_id, Some(officers.clone()));
    Ok(officers)
  }
}
