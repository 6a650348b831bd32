//! Cache-aside repository for outcome queries.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::cache::CacheStore;
use crate::client::{decode, ApiClient, ApiError};
use crate::models::{available_data_region, Coordinate, YearMonth};

use super::cache::OutcomeCache;
use super::models::{CaseHistory, Outcome};

/// Errors produced by outcome queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
  /// The coordinate lies outside the region the data set covers.
  #[error("location outside of the available data set region")]
  LocationOutsideOfDataSetRegion,
  /// No crime with the requested id.
  #[error("not found")]
  NotFound,
  #[error("network error: {0}")]
  Network(String),
  #[error("unknown error")]
  Unknown,
}

impl From<ApiError> for OutcomeError {
  fn from(error: ApiError) -> Self {
    match error {
      ApiError::NotFound => Self::NotFound,
      ApiError::Network { message } => Self::Network(message),
      ApiError::Decode { .. } | ApiError::UnexpectedStatus { .. } => Self::Unknown,
    }
  }
}

/// Repository for outcome data.
pub struct OutcomeRepository<C, S> {
  client: Arc<C>,
  cache: OutcomeCache<S>,
}

impl<C: ApiClient, S: CacheStore> OutcomeRepository<C, S> {
  pub fn new(client: Arc<C>, store: Arc<S>) -> Self {
    Self {
      client,
      cache: OutcomeCache::new(store),
    }
  }

  /// Outcomes at a specific street for the month of `date`.
  pub async fn street_level_outcomes(
    &self,
    street_id: i64,
    date: DateTime<Utc>,
  ) -> Result<Vec<Outcome>, OutcomeError> {
    let date = YearMonth::from(date);
    if let Some(cached) = self.cache.street_level_outcomes_for_street(street_id, date) {
      return Ok(cached);
    }

    debug!(street_id, %date, "fetching street level outcomes");
    let path = format!("outcomes-at-location?location_id={street_id}&date={date}");
    let payload = self.client.get(&path).await?;
    let outcomes: Vec<Outcome> = decode(payload)?;

    self
      .cache
      .set_street_level_outcomes_for_street(street_id, date, Some(outcomes.clone()));
    Ok(outcomes)
  }

  /// Outcomes within a mile of a coordinate for the month of `date`.
  pub async fn street_level_outcomes_at(
    &self,
    coordinate: Coordinate,
    date: DateTime<Utc>,
  ) -> Result<Vec<Outcome>, OutcomeError> {
    if !available_data_region().contains(coordinate) {
      return Err(OutcomeError::LocationOutsideOfDataSetRegion);
    }

    let date = YearMonth::from(date);
    if let Some(cached) = self.cache.street_level_outcomes(coordinate, date) {
      return Ok(cached);
    }

    debug!(%date, "fetching street level outcomes at coordinate");
    let path = format!(
      "outcomes-at-location?lat={}&lng={}&date={date}",
      coordinate.latitude, coordinate.longitude
    );
    let payload = self.client.get(&path).await?;
    let outcomes: Vec<Outcome> = decode(payload)?;

    self
      .cache
      .set_street_level_outcomes(coordinate, date, Some(outcomes.clone()));
    Ok(outcomes)
  }

  /// The full outcome history of one crime, by its persistent id.
  pub async fn case_history(&self, crime_id: &str) -> Result<CaseHistory, OutcomeError> {
    if let Some(cached) = self.cache.case_history(crime_id) {
      return Ok(cached);
    }

    debug!(crime_id, "fetching case history");
    let payload = self.client.get(&format!("outcomes-for-crime/{crime_id}")).await?;
    let case_history: CaseHistory = decode(payload)?;

    self.cache.set_case_history(crime_id, Some(case_history.clone()));
    Ok(case_history)
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
    OutcomeRepository<MockApiClient, InMemoryCache>,
  ) {
    let client = Arc::new(MockApiClient::new());
    let store = Arc::new(InMemoryCache::new());
    let repository = OutcomeRepository::new(Arc::clone(&client), Arc::clone(&store));
    (client, store, repository)
  }

  fn may_2021() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 5, 3, 8, 0, 0).unwrap()
  }

  fn crime_json() -> serde_json::Value {
    json!({
      "id": 90362519,
      "persistent_id": "b3e2a4d3aeee4157",
      "category": "burglary",
      "location": {
        "latitude": "52.640961",
        "longitude": "-1.126371",
        "street": { "id": 884343, "name": "On or near Wharf Street North" }
      },
      "month": "2021-05"
    })
  }

  #[tokio::test]
  async fn street_outcomes_miss_fetches_once_and_populates() {
    let (client, store, repository) = repository();
    client.push_ok(json!([{
      "category": { "code": "no-further-action", "name": "Investigation complete; no suspect identified" },
      "date": "2021-05",
      "person_id": null,
      "crime": crime_json()
    }]));

    let outcomes = repository
      .street_level_outcomes(883345, may_2021())
      .await
      .unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].category.code, "no-further-action");
    assert_eq!(
      client.requests(),
      vec!["outcomes-at-location?location_id=883345&date=2021-05"]
    );
    assert_eq!(
      OutcomeCache::new(store)
        .street_level_outcomes_for_street(883345, YearMonth::new(2021, 5).unwrap()),
      Some(outcomes)
    );
  }

  #[tokio::test]
  async fn outcomes_at_coordinate_check_the_region_first() {
    let (client, _store, repository) = repository();
    let sydney = Coordinate {
      latitude: -33.8688,
      longitude: 151.2093,
    };

    let error = repository
      .street_level_outcomes_at(sydney, may_2021())
      .await
      .unwrap_err();

    assert_eq!(error, OutcomeError::LocationOutsideOfDataSetRegion);
    assert!(client.requests().is_empty());
  }

  #[tokio::test]
  async fn case_history_hit_skips_the_client() {
    let (client, store, repository) = repository();
    let cached: CaseHistory = serde_json::from_value(json!({
      "crime": crime_json(),
      "outcomes": [{
        "category": { "code": "under-investigation", "name": "Under investigation" },
        "date": "2021-05",
        "person_id": null
      }]
    }))
    .unwrap();
    OutcomeCache::new(store).set_case_history("b3e2a4d3aeee4157", Some(cached.clone()));

    let case_history = repository.case_history("b3e2a4d3aeee4157").await.unwrap();

    assert_eq!(case_history, cached);
    assert!(client.requests().is_empty());
  }

  #[tokio::test]
  async fn missing_case_history_surfaces_not_found_without_negative_caching() {
    let (client, store, repository) = repository();
    client.push_err(ApiError::NotFound);

    let error = repository.case_history("nope").await.unwrap_err();

    assert_eq!(error, OutcomeError::NotFound);
    assert_eq!(OutcomeCache::new(store).case_history("nope"), None);
  }
}
