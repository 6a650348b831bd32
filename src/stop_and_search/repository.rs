//! Cache-aside repository for stop-and-search queries.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::cache::CacheStore;
use crate::client::{decode, ApiClient, ApiError};
use crate::models::{available_data_region, Coordinate, YearMonth};

use super::cache::StopAndSearchCache;
use super::models::StopAndSearch;

/// Errors produced by stop-and-search queries.
///
/// Unlike the other contexts, payload-shape failures stay distinct here
/// instead of collapsing into `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StopAndSearchError {
  /// The coordinate lies outside the region the data set covers.
  #[error("location outside of the available data set region")]
  LocationOutsideOfDataSetRegion,
  #[error("not found")]
  NotFound,
  #[error("network error: {0}")]
  Network(String),
  #[error("decode error: {0}")]
  Decode(String),
  #[error("unknown error")]
  Unknown,
}

impl From<ApiError> for StopAndSearchError {
  fn from(error: ApiError) -> Self {
    match error {
      ApiError::NotFound => Self::NotFound,
      ApiError::Network { message } => Self::Network(message),
      ApiError::Decode { message } => Self::Decode(message),
      ApiError::UnexpectedStatus { .. } => Self::Unknown,
    }
  }
}

/// Repository for stop-and-search data.
pub struct StopAndSearchRepository<C, S> {
  client: Arc<C>,
  cache: StopAndSearchCache<S>,
}

impl<C: ApiClient, S: CacheStore> StopAndSearchRepository<C, S> {
  pub fn new(client: Arc<C>, store: Arc<S>) -> Self {
    Self {
      client,
      cache: StopAndSearchCache::new(store),
    }
  }

  /// Stops within a mile of a coordinate for the month of `date`.
  pub async fn stop_and_searches(
    &self,
    coordinate: Coordinate,
    date: DateTime<Utc>,
  ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
    if !available_data_region().contains(coordinate) {
      return Err(StopAndSearchError::LocationOutsideOfDataSetRegion);
    }

    let date = YearMonth::from(date);
    if let Some(cached) = self.cache.at_coordinate(coordinate, date) {
      return Ok(cached);
    }

    debug!(%date, "fetching stop and searches at coordinate");
    let path = format!(
      "stops-street?lat={}&lng={}&date={date}",
      coordinate.latitude, coordinate.longitude
    );
    let payload = self.client.get(&path).await?;
    let stops: Vec<StopAndSearch> = decode(payload)?;

    self
      .cache
      .set_at_coordinate(coordinate, date, Some(stops.clone()));
    Ok(stops)
  }

  /// Stops at a specific street for the month of `date`.
  pub async fn stop_and_searches_at_location(
    &self,
    street_id: i64,
    date: DateTime<Utc>,
  ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
    let date = YearMonth::from(date);
    if let Some(cached) = self.cache.at_location(street_id, date) {
      return Ok(cached);
    }

    debug!(street_id, %date, "fetching stop and searches at location");
    let path = format!("stops-at-location?location_id={street_id}&date={date}");
    let payload = self.client.get(&path).await?;
    let stops: Vec<StopAndSearch> = decode(payload)?;

    self.cache.set_at_location(street_id, date, Some(stops.clone()));
    Ok(stops)
  }

  /// Stops a force could not map to a location, for the month of `date`.
  pub async fn stop_and_searches_with_no_location(
    &self,
    force_id: &str,
    date: DateTime<Utc>,
  ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
    let date = YearMonth::from(date);
    if let Some(cached) = self.cache.no_location(force_id, date) {
      return Ok(cached);
    }

    debug!(force_id, %date, "fetching stop and searches with no location");
    let path = format!("stops-no-location?force={force_id}&date={date}");
    let payload = self.client.get(&path).await?;
    let stops: Vec<StopAndSearch> = decode(payload)?;

    self.cache.set_no_location(force_id, date, Some(stops.clone()));
    Ok(stops)
  }

  /// All stops reported by a force for the month of `date`.
  pub async fn stop_and_searches_for_force(
    &self,
    force_id: &str,
    date: DateTime<Utc>,
  ) -> Result<Vec<StopAndSearch>, StopAndSearchError> {
    let date = YearMonth::from(date);
    if let Some(cached) = self.cache.for_force(force_id, date) {
      return Ok(cached);
    }

    debug!(force_id, %date, "fetching stop and searches for force");
    let path = format!("stops-force?force={force_id}&date={date}");
    let payload = self.client.get(&path).await?;
    let stops: Vec<StopAndSearch> = decode(payload)?;

    self.cache.set_for_force(force_id, date, Some(stops.clone()));
    Ok(stops)
  }
}
