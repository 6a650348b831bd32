//! Cache-aside repository for crime queries.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::cache::CacheStore;
use crate::client::{decode, ApiClient, ApiError};
use crate::models::{available_data_region, Coordinate, YearMonth};

use super::cache::CrimeCache;
use super::models::{Crime, CrimeCategory};

/// Errors produced by crime queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrimeError {
  /// The coordinate lies outside the region the data set covers. Checked
  /// before any remote call is made.
  #[error("location outside of the available data set region")]
  LocationOutsideOfDataSetRegion,
  #[error("not found")]
  NotFound,
  #[error("network error: {0}")]
  Network(String),
  #[error("unknown error")]
  Unknown,
}

impl From<ApiError> for CrimeError {
  fn from(error: ApiError) -> Self {
    match error {
      ApiError::NotFound => Self::NotFound,
      ApiError::Network { message } => Self::Network(message),
      ApiError::Decode { .. } | ApiError::UnexpectedStatus { .. } => Self::Unknown,
    }
  }
}

/// Repository for street-level crime data.
pub struct CrimeRepository<C, S> {
  client: Arc<C>,
  cache: CrimeCache<S>,
}

impl<C: ApiClient, S: CacheStore> CrimeRepository<C, S> {
  pub fn new(client: Arc<C>, store: Arc<S>) -> Self {
    Self {
      client,
      cache: CrimeCache::new(store),
    }
  }

  /// Street-level crimes within a mile of a coordinate for the month of
  /// `date`.
  pub async fn street_level_crimes(
    &self,
    coordinate: Coordinate,
    date: DateTime<Utc>,
  ) -> Result<Vec<Crime>, CrimeError> {
    if !available_data_region().contains(coordinate) {
      return Err(CrimeError::LocationOutsideOfDataSetRegion);
    }

    let date = YearMonth::from(date);
    if let Some(cached) = self.cache.street_level_crimes(coordinate, date) {
      return Ok(cached);
    }

    debug!(%date, "fetching street level crimes");
    let path = format!(
      "crimes-street/all-crime?lat={}&lng={}&date={date}",
      coordinate.latitude, coordinate.longitude
    );
    let payload = self.client.get(&path).await?;
    let crimes: Vec<Crime> = decode(payload)?;

    self
      .cache
      .set_street_level_crimes(coordinate, date, Some(crimes.clone()));
    Ok(crimes)
  }

  /// Crimes at a specific street for the month of `date`.
  pub async fn crimes(
    &self,
    street_id: i64,
    date: DateTime<Utc>,
  ) -> Result<Vec<Crime>, CrimeError> {
    let date = YearMonth::from(date);
    if let Some(cached) = self.cache.crimes_for_street(street_id, date) {
      return Ok(cached);
    }

    debug!(street_id, %date, "fetching crimes for street");
    let path = format!("crimes-at-location?location_id={street_id}&date={date}");
    let payload = self.client.get(&path).await?;
    let crimes: Vec<Crime> = decode(payload)?;

    self
      .cache
      .set_crimes_for_street(street_id, date, Some(crimes.clone()));
    Ok(crimes)
  }

  /// Crimes that could not be mapped to a location, per category and force.
  pub async fn crimes_with_no_location(
    &self,
    category_id: &str,
    force_id: &str,
    date: DateTime<Utc>,
  ) -> Result<Vec<Crime>, CrimeError> {
    let date = YearMonth::from(date);
    if let Some(cached) = self
      .cache
      .crimes_with_no_location(category_id, force_id, date)
    {
      return Ok(cached);
    }

    debug!(category_id, force_id, %date, "fetching crimes with no location");
    let path = format!("crimes-no-location?category={category_id}&force={force_id}&date={date}");
    let payload = self.client.get(&path).await?;
    let crimes: Vec<Crime> = decode(payload)?;

    self
      .cache
      .set_crimes_with_no_location(category_id, force_id, date, Some(crimes.clone()));
    Ok(crimes)
  }

  /// Valid crime categories for the month of `date`.
  pub async fn crime_categories(
    &self,
    date: DateTime<Utc>,
  ) -> Result<Vec<CrimeCategory>, CrimeError> {
    let date = YearMonth::from(date);
    if let Some(cached) = self.cache.crime_categories(date) {
      return Ok(cached);
    }

    debug!(%date, "fetching crime categories");
    let payload = self.client.get(&format!("crime-categories?date={date}")).await?;
    let categories: Vec<CrimeCategory> = decode(payload)?;

    self.cache.set_crime_categories(date, Some(categories.clone()));
    Ok(categories)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cache::InMemoryCache;
  use crate::client::mock::MockApiClient;
  use chrono::TimeZone;
  use serde_json::json;

  fn repository() -> (
    Arc<MockApiClient>,
    Arc<InMemoryCache>,
    CrimeRepository<MockApiClient, InMemoryCache>,
  ) {
    let client = Arc::new(MockApiClient::new());
    let store = Arc::new(InMemoryCache::new());
    let repository = CrimeRepository::new(Arc::clone(&client), Arc::clone(&store));
    (client, store, repository)
  }

  fn may_2021() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 5, 20, 9, 30, 0).unwrap()
  }

  fn leicester() -> Coordinate {
    Coordinate {
      latitude: 52.6394,
      longitude: -1.13119,
    }
  }

  fn one_crime() -> serde_json::Value {
    json!([{
      "id": 90362519,
      "category": "anti-social-behaviour",
      "location": {
        "latitude": "52.640961",
        "longitude": "-1.126371",
        "street": { "id": 884343, "name": "On or near Wharf Street North" }
      },
      "month": "2021-05"
    }])
  }

  #[tokio::test]
  async fn coordinate_outside_the_region_fails_without_a_remote_call() {
    let (client, _store, repository) = repository();
    let new_york = Coordinate {
      latitude: 40.7128,
      longitude: -74.006,
    };

    let error = repository
      .street_level_crimes(new_york, may_2021())
      .await
      .unwrap_err();

    assert_eq!(error, CrimeError::LocationOutsideOfDataSetRegion);
    assert!(client.requests().is_empty());
  }

  #[tokio::test]
  async fn street_level_miss_fetches_once_and_populates() {
    let (client, store, repository) = repository();
    client.push_ok(one_crime());

    let crimes = repository
      .street_level_crimes(leicester(), may_2021())
      .await
      .unwrap();

    assert_eq!(crimes.len(), 1);
    assert_eq!(
      client.requests(),
      vec!["crimes-street/all-crime?lat=52.6394&lng=-1.13119&date=2021-05"]
    );
    assert_eq!(
      CrimeCache::new(store).street_level_crimes(leicester(), YearMonth::new(2021, 5).unwrap()),
      Some(crimes)
    );
  }

  #[tokio::test]
  async fn street_crimes_hit_skips_the_client() {
    let (client, store, repository) = repository();
    let cached: Vec<Crime> = serde_json::from_value(one_crime()).unwrap();
    CrimeCache::new(store).set_crimes_for_street(
      884343,
      YearMonth::new(2021, 5).unwrap(),
      Some(cached.clone()),
    );

    let crimes = repository.crimes(884343, may_2021()).await.unwrap();

    assert_eq!(crimes, cached);
    assert!(client.requests().is_empty());
  }

  #[tokio::test]
  async fn day_of_month_does_not_fragment_the_cache() {
    let (client, _store, repository) = repository();
    client.push_ok(one_crime());

    let first = Utc.with_ymd_and_hms(2021, 5, 1, 0, 0, 0).unwrap();
    let mid_month = Utc.with_ymd_and_hms(2021, 5, 15, 0, 0, 0).unwrap();

    let a = repository.crimes(123, first).await.unwrap();
    // Same month, different day: served from cache, queue untouched.
    let b = repository.crimes(123, mid_month).await.unwrap();

    assert_eq!(a, b);
    assert_eq!(client.requests().len(), 1);
  }

  #[tokio::test]
  async fn failures_are_not_cached() {
    let (client, store, repository) = repository();
    client.push_err(ApiError::NotFound);

    let error = repository.crimes(123, may_2021()).await.unwrap_err();

    assert_eq!(error, CrimeError::NotFound);
    assert_eq!(
      CrimeCache::new(store).crimes_for_street(123, YearMonth::new(2021, 5).unwrap()),
      None
    );
  }

  #[tokio::test]
  async fn categories_use_their_own_key_shape() {
    let (client, store, repository) = repository();
    client.push_ok(json!([{ "url": "all-crime", "name": "All crime" }]));

    let categories = repository.crime_categories(may_2021()).await.unwrap();

    assert_eq!(categories[0].id, "all-crime");
    assert_eq!(client.requests(), vec!["crime-categories?date=2021-05"]);
    assert_eq!(
      CrimeCache::new(store).crime_categories(YearMonth::new(2021, 5).unwrap()),
      Some(categories)
    );
  }
}
