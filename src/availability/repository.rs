//! Cache-aside repository for availability queries.

use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::cache::CacheStore;
use crate::client::{decode, ApiClient, ApiError};

use super::cache::AvailabilityCache;
use super::models::DataSet;

/// Errors produced by availability queries.
///
/// The data-set list is fixed, so "not found" has no meaning here; every
/// transport failure other than a network one collapses to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
  #[error("network error: {0}")]
  Network(String),
  #[error("unknown error")]
  Unknown,
}

impl From<ApiError> for AvailabilityError {
  fn from(error: ApiError) -> Self {
    match error {
      ApiError::Network { message } => Self::Network(message),
      ApiError::NotFound | ApiError::Decode { .. } | ApiError::UnexpectedStatus { .. } => {
        Self::Unknown
      }
    }
  }
}

/// Repository for data-set availability.
pub struct AvailabilityRepository<C, S> {
  client: Arc<C>,
  cache: AvailabilityCache<S>,
}

impl<C: ApiClient, S: CacheStore> AvailabilityRepository<C, S> {
  pub fn new(client: Arc<C>, store: Arc<S>) -> Self {
    Self {
      client,
      cache: AvailabilityCache::new(store),
    }
  }

  /// The months with published data, most recent first.
  pub async fn available_data_sets(&self) -> Result<Vec<DataSet>, AvailabilityError> {
    if let Some(cached) = self.cache.available_data_sets() {
      return Ok(cached);
    }

    debug!("fetching available data sets");
    let payload = self.client.get("crimes-street-dates").await?;
    let data_sets: Vec<DataSet> = decode(payload)?;

    self.cache.set_available_data_sets(Some(data_sets.clone()));
    Ok(data_sets)
  }
}
