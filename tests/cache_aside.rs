//! End-to-end cache-aside behaviour over a stubbed transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use police_data_uk::availability::AvailabilityRepository;
use police_data_uk::cache::InMemoryCache;
use police_data_uk::client::{ApiClient, ApiError};
use police_data_uk::models::YearMonth;

/// Stub client that serves a fixed queue of payloads and fails once the
/// queue is empty, so "would fail if called again" is directly expressible.
struct StubClient {
  responses: Mutex<Vec<Value>>,
  calls: Mutex<usize>,
}

impl StubClient {
  fn with_responses(responses: Vec<Value>) -> Self {
    Self {
      responses: Mutex::new(responses),
      calls: Mutex::new(0),
    }
  }

  fn calls(&self) -> usize {
    *self.calls.lock().unwrap()
  }
}

#[async_trait]
impl ApiClient for StubClient {
  async fn get(&self, _path: &str) -> Result<Value, ApiError> {
    *self.calls.lock().unwrap() += 1;
    match self.responses.lock().unwrap().pop() {
      Some(payload) => Ok(payload),
      None => Err(ApiError::Network {
        message: "no stubbed response left".to_string(),
      }),
    }
  }
}

#[tokio::test]
async fn second_data_sets_call_is_served_from_cache() {
  let payload = json!([{ "date": "2021-05", "stop-and-search": ["leicestershire"] }]);
  let client = Arc::new(StubClient::with_responses(vec![payload]));
  let repository =
    AvailabilityRepository::new(Arc::clone(&client), Arc::new(InMemoryCache::new()));

  let first = repository.available_data_sets().await.unwrap();
  assert_eq!(first.len(), 1);
  assert_eq!(first[0].date, YearMonth::new(2021, 5).unwrap());
  assert_eq!(first[0].stop_and_search, vec!["leicestershire"]);

  // The stub has nothing left to serve, so this can only succeed if the
  // first call populated the cache.
  let second = repository.available_data_sets().await.unwrap();
  assert_eq!(second, first);
  assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn failed_fetch_leaves_no_trace_and_the_next_call_retries() {
  let payload = json!([{ "date": "2021-05", "stop-and-search": [] }]);
  // First call drains the empty queue and fails; a fresh payload is then
  // pushed for the retry.
  let client = Arc::new(StubClient::with_responses(vec![]));
  let repository =
    AvailabilityRepository::new(Arc::clone(&client), Arc::new(InMemoryCache::new()));

  assert!(repository.available_data_sets().await.is_err());

  client.responses.lock().unwrap().push(payload);
  let data_sets = repository.available_data_sets().await.unwrap();

  assert_eq!(data_sets.len(), 1);
  // Both calls reached the transport: the failure was not memoized.
  assert_eq!(client.calls(), 2);
}
